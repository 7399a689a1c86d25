use yew::prelude::*;

use super::clue_feed::ClueList;
use super::menu_screen::confirm_wipe;

#[derive(Properties, PartialEq, Clone)]
pub struct VictoryScreenProps {
    pub clues: Vec<String>,
    pub on_reset: Callback<()>,
}

#[function_component]
pub fn VictoryScreen(props: &VictoryScreenProps) -> Html {
    let reset_btn = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| {
            if confirm_wipe() {
                cb.emit(());
            }
        })
    };
    html! {
        <div class="screen victory">
            <div class="panel">
                <h2 class="success">{"SYSTEM COMPROMISED"}</h2>
                <p class="subtitle">{"All sectors decrypted."}</p>
                <ClueList clues={props.clues.clone()} heading="FULL LOG" />
                <button class="ghost" onclick={reset_btn}>{"Wipe and start over"}</button>
            </div>
        </div>
    }
}
