use yew::prelude::*;

use crate::state::scramble::ClueContent;
use crate::util::two_digit;

#[derive(Properties, PartialEq, Clone)]
pub struct ClueViewProps {
    pub clue: AttrValue,
    /// Thumbnail-sized images for list entries.
    #[prop_or_default]
    pub compact: bool,
}

/// A decrypted fragment: plain text, or an image for `image://` clues.
#[function_component(ClueView)]
pub fn clue_view(props: &ClueViewProps) -> Html {
    match ClueContent::parse(&props.clue) {
        ClueContent::Image { url } => html! {
            <img class={classes!("clue-image", props.compact.then_some("compact"))}
                src={url.to_string()} alt="Decrypted visual fragment" />
        },
        ClueContent::Text(text) if props.compact => html! { <span>{ text.to_string() }</span> },
        ClueContent::Text(text) => html! {
            <p class="clue-text" aria-live="polite">{ text.to_string() }</p>
        },
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ClueListProps {
    pub clues: Vec<String>,
    pub heading: AttrValue,
    #[prop_or_default]
    pub empty_text: Option<AttrValue>,
}

/// Numbered log of unlocked fragments.
#[function_component(ClueList)]
pub fn clue_list(props: &ClueListProps) -> Html {
    let body = if props.clues.is_empty() {
        match &props.empty_text {
            Some(text) => html! { <div class="clue-empty">{ text.clone() }</div> },
            None => html! {},
        }
    } else {
        html! {
            <ul class="clue-list">
                { for props.clues.iter().enumerate().map(|(i, clue)| html! {
                    <li key={i}>
                        <span class="clue-index" aria-hidden="true">{ format!("FRAGMENT_{}", two_digit(i)) }</span>
                        <ClueView clue={clue.clone()} compact={true} />
                    </li>
                }) }
            </ul>
        }
    };
    html! {
        <section class="clue-feed" aria-label={props.heading.clone()}>
            <h3>{ props.heading.clone() }</h3>
            { body }
        </section>
    }
}
