use yew::prelude::*;

use crate::model::{NodeId, NodeItem, Side};

#[derive(Properties, PartialEq, Clone)]
pub struct NodeButtonProps {
    pub node: NodeItem,
    pub selected: bool,
    pub connected: bool,
    pub flashing: bool,
    pub on_click: Callback<NodeId>,
}

#[function_component]
pub fn NodeButton(props: &NodeButtonProps) -> Html {
    let node = &props.node;
    let onclick = {
        let cb = props.on_click.clone();
        let id = node.id.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
    };
    let (side_class, aria) = match node.side {
        Side::Left => ("left", format!("Select {}", node.label)),
        Side::Right => ("right", format!("Link to {}", node.label)),
    };
    html! {
        <button
            id={node.id.to_string()}
            class={classes!(
                "node",
                side_class,
                props.selected.then_some("selected"),
                props.connected.then_some("connected"),
                props.flashing.then_some("error"),
            )}
            disabled={props.connected}
            aria-label={aria}
            aria-pressed={props.selected.to_string()}
            {onclick}
        >
            <i class={classes!("fa-solid", node.icon.clone())} aria-hidden="true"></i>
            <span class="node-label">{ node.label.clone() }</span>
            <span id={node.id.dot_dom_id()} class="node-dot" aria-hidden="true"></span>
        </button>
    }
}
