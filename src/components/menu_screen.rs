use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MenuScreenProps {
    /// Saved progress points past the first level.
    pub resume: bool,
    pub has_progress: bool,
    pub on_start: Callback<()>,
    pub on_reset: Callback<()>,
}

#[function_component(MenuScreen)]
pub fn menu_screen(props: &MenuScreenProps) -> Html {
    let start_btn = {
        let cb = props.on_start.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let reset_btn = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| {
            if confirm_wipe() {
                cb.emit(());
            }
        })
    };
    let start_label = if props.resume {
        "RESUME SESSION"
    } else {
        "INITIALIZE CORE"
    };
    html! {
        <div class="screen menu">
            <div class="panel">
                <h1 class="title">{"Memory Sequence R-7"}</h1>
                <p class="subtitle">{"MODEL: R SERIES"}</p>
                <div class="instructions">
                    <div class="instructions-head">{"// SYSTEM_INSTRUCTIONS.EXE"}</div>
                    <ol>
                        <li>
                            <strong>{"ACTION: "}</strong>
                            {"click an item on the left, then its logical counterpart on the right to link them."}
                        </li>
                        <li>
                            <strong>{"TIME: "}</strong>
                            {"limited per level (except level 00, the tutorial)."}
                        </li>
                        <li class="warn">
                            <strong>{"SECURITY: "}</strong>
                            {"mistakes are limited. On the second error in a level the terminal locks for good."}
                        </li>
                    </ol>
                </div>
                <button class="primary" onclick={start_btn} aria-label={start_label}>{ start_label }</button>
                if props.has_progress {
                    <button class="ghost" onclick={reset_btn}>{"Wipe saved progress"}</button>
                }
            </div>
        </div>
    }
}

pub(crate) fn confirm_wipe() -> bool {
    match web_sys::window() {
        Some(win) => win
            .confirm_with_message("This will WIPE all saved progress and unlocked fragments. Are you sure?")
            .unwrap_or(false),
        None => true,
    }
}
