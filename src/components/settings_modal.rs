use yew::prelude::*;

use super::menu_screen::confirm_wipe;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub sound_enabled: bool,
    pub on_toggle_sound: Callback<()>,
    /// Wiping is refused mid-level.
    pub can_reset: bool,
    pub on_hard_reset: Callback<()>,
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_sound_cb = {
        let cb = props.on_toggle_sound.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let hard_reset_cb = {
        let cb = props.on_hard_reset.clone();
        Callback::from(move |_| {
            if confirm_wipe() {
                cb.emit(());
            }
        })
    };

    html! {<div class="modal-backdrop">
        <div class="modal" role="dialog" aria-label="Settings">
            <div class="modal-head">
                <h3>{"Settings"}</h3>
                <button onclick={close_cb.clone()}>{"Close"}</button>
            </div>
            <label class="toggle">
                <input type="checkbox" checked={props.sound_enabled} onclick={toggle_sound_cb} />
                <span>{"Sound effects"}</span>
            </label>
            <div class="modal-actions">
                <button class="danger" disabled={!props.can_reset} onclick={hard_reset_cb}>{"Hard Reset (Wipe Progress)"}</button>
                <button onclick={close_cb}>{"Done"}</button>
            </div>
            <div class="hint">{"Hard Reset removes the saved level and every unlocked fragment. Not available during a level."}</div>
        </div>
    </div>}
}
