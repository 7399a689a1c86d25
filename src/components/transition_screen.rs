use yew::prelude::*;

use super::clue_feed::ClueView;
use crate::model::Theme;

#[derive(Properties, PartialEq, Clone)]
pub struct TransitionScreenProps {
    pub clue: AttrValue,
    pub seconds_left: u32,
    pub theme: Theme,
}

#[function_component]
pub fn TransitionScreen(props: &TransitionScreenProps) -> Html {
    html! {
        <div class={classes!("screen", "transition", format!("theme-{}", props.theme.name))}>
            <div class="panel">
                <h2 class="success">{"DECRYPTION COMPLETE"}</h2>
                <ClueView clue={props.clue.clone()} />
                <p class="countdown" role="timer">
                    { format!("Next sector in {}s", props.seconds_left) }
                </p>
            </div>
        </div>
    }
}
