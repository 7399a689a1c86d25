use yew::prelude::*;

use super::clue_feed::ClueList;
use crate::game::GameOverCause;

#[derive(Properties, PartialEq, Clone)]
pub struct GameOverScreenProps {
    pub cause: Option<GameOverCause>,
    pub clues: Vec<String>,
}

/// Terminal lockout. There is no way back from here except the settings wipe.
#[function_component]
pub fn GameOverScreen(props: &GameOverScreenProps) -> Html {
    let reason = match props.cause {
        Some(GameOverCause::TimeExpired) => "CONNECTION TIMED OUT",
        Some(GameOverCause::LivesExhausted) => "INTRUSION DETECTED",
        None => "SYSTEM FAILURE",
    };
    html! {
        <div class="screen game-over" role="alert">
            <div class="panel danger">
                <h2>{"ACCESS DENIED"}</h2>
                <p class="reason">{ reason }</p>
                <p class="hint">{"Terminal locked. Recovered fragments are listed below."}</p>
                <ClueList clues={props.clues.clone()} heading="PARTIAL LOG" />
            </div>
        </div>
    }
}
