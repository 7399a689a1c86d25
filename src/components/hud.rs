use yew::prelude::*;

use crate::model::{Difficulty, Lives};
use crate::util::{format_countdown, two_digit};

#[derive(Properties, PartialEq, Clone)]
pub struct HudProps {
    pub level_id: usize,
    pub level_name: AttrValue,
    pub difficulty: Difficulty,
    pub scrambled_clue: AttrValue,
    /// Budget from the level definition; drawn as empty hearts once spent.
    pub level_lives: Lives,
    pub lives: Lives,
    pub time_left: Option<u32>,
    pub low_time_secs: u32,
}

#[function_component]
pub fn Hud(props: &HudProps) -> Html {
    let timer = props.time_left.map(|secs| {
        let low = secs <= props.low_time_secs;
        html! {
            <div class="hud-timer" role="timer" aria-label={format!("{} seconds left", secs)}>
                <span class={classes!("hud-time", low.then_some("low"))}>{ format_countdown(secs) }</span>
            </div>
        }
    });
    let lives = match (props.level_lives, props.lives) {
        (Lives::Limited(budget), Lives::Limited(left)) => html! {
            <div class="hud-lives" aria-label={format!("{} lives left", left)}>
                { for (0..budget).map(|i| html! {
                    <span class={classes!("heart", (i >= left).then_some("spent"))} aria-hidden="true">{"♥"}</span>
                }) }
            </div>
        },
        _ => html! { <div class="hud-lives" title="Unlimited lives">{"∞"}</div> },
    };
    html! {
        <header class="hud" role="banner">
            <div class="hud-level">
                <h2>{ format!("LVL {}", two_digit(props.level_id)) }</h2>
                <div class="hud-level-name">{ props.level_name.clone() }</div>
                <div class="hud-difficulty">{ props.difficulty.label().to_uppercase() }</div>
            </div>
            <div class="hud-clue" role="status" aria-label="Encrypted text">{ props.scrambled_clue.clone() }</div>
            <div class="hud-stats">
                { for timer }
                <span class="hud-caption">{"SYSTEM INTEGRITY"}</span>
                { lives }
            </div>
        </header>
    }
}
