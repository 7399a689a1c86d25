use yew::prelude::*;

use super::{
    clue_feed::ClueList, connection_canvas::ConnectionCanvas, hud::Hud, node_button::NodeButton,
};
use crate::model::{Difficulty, Lives, NodeId, Side, Theme};
use crate::state::scramble::scramble;
use crate::state::session::Board;

#[derive(Properties, PartialEq, Clone)]
pub struct BoardViewProps {
    pub level_id: usize,
    pub level_name: AttrValue,
    pub difficulty: Difficulty,
    pub clue: AttrValue,
    pub level_lives: Lives,
    pub lives: Lives,
    pub time_left: Option<u32>,
    pub low_time_secs: u32,
    pub board: Board,
    pub clues: Vec<String>,
    pub theme: Theme,
    pub on_click: Callback<NodeId>,
}

#[function_component(BoardView)]
pub fn board_view(props: &BoardViewProps) -> Html {
    let board = &props.board;
    // Re-roll the noise only when a pair lands
    let scrambled = use_memo(
        (props.clue.clone(), board.connections.len(), board.progress()),
        |(clue, _, progress)| scramble(clue.as_str(), *progress, &mut rand::thread_rng()),
    );

    let column = |side: Side| -> Html {
        board
            .side(side)
            .map(|node| {
                html! {
                    <NodeButton
                        key={node.id.to_string()}
                        node={node.clone()}
                        selected={board.selected.as_ref() == Some(&node.id)}
                        connected={board.is_connected(&node.id)}
                        flashing={board.error_node.as_ref() == Some(&node.id)}
                        on_click={props.on_click.clone()}
                    />
                }
            })
            .collect()
    };

    html! {
        <div class={classes!("screen", "board", format!("theme-{}", props.theme.name))}>
            <Hud
                level_id={props.level_id}
                level_name={props.level_name.clone()}
                difficulty={props.difficulty}
                scrambled_clue={(*scrambled).clone()}
                level_lives={props.level_lives}
                lives={props.lives}
                time_left={props.time_left}
                low_time_secs={props.low_time_secs}
            />
            <main class="board-body">
                <div class="columns">
                    <div class="column left" role="group" aria-label="Sources">{ column(Side::Left) }</div>
                    <div class="column right" role="group" aria-label="Targets">{ column(Side::Right) }</div>
                </div>
                <aside class="sidebar">
                    <ClueList
                        clues={props.clues.clone()}
                        heading="DATA STREAM"
                        empty_text={Some(AttrValue::from("Awaiting data..."))}
                    />
                </aside>
            </main>
            <ConnectionCanvas connections={board.connections.clone()} />
        </div>
    }
}
