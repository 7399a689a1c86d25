// Click resolution: decides what a node click means for the board without mutating it.
use crate::model::{Connection, NodeId};
use crate::state::session::Board;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Unknown node, or one that is already connected.
    Ignored,
    Selected(NodeId),
    Deselected,
    /// Same-side click while another node was armed.
    Switched(NodeId),
    Matched(Connection),
    /// Wrong counterpart; `flagged` is the node clicked second.
    Mismatched { flagged: NodeId },
}

impl ClickOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, ClickOutcome::Ignored)
    }
}

pub fn resolve_click(board: &Board, clicked: &NodeId, color: &'static str) -> ClickOutcome {
    let Some(second) = board.node(clicked) else {
        return ClickOutcome::Ignored;
    };
    if board.is_connected(clicked) {
        return ClickOutcome::Ignored;
    }
    let Some(selected) = &board.selected else {
        return ClickOutcome::Selected(clicked.clone());
    };
    if selected == clicked {
        return ClickOutcome::Deselected;
    }
    let Some(first) = board.node(selected) else {
        return ClickOutcome::Selected(clicked.clone());
    };
    if first.side == second.side {
        return ClickOutcome::Switched(clicked.clone());
    }
    if first.pair_id == second.id {
        ClickOutcome::Matched(Connection {
            from: first.id.clone(),
            to: second.id.clone(),
            color,
        })
    } else {
        ClickOutcome::Mismatched {
            flagged: second.id.clone(),
        }
    }
}

impl Board {
    /// Apply a resolved click to the selection, connection and flash state.
    pub fn apply_click(&mut self, outcome: &ClickOutcome) {
        match outcome {
            ClickOutcome::Ignored => {}
            ClickOutcome::Selected(id) | ClickOutcome::Switched(id) => {
                self.selected = Some(id.clone());
            }
            ClickOutcome::Deselected => self.selected = None,
            ClickOutcome::Matched(connection) => {
                self.connections.push(connection.clone());
                self.selected = None;
            }
            ClickOutcome::Mismatched { flagged } => {
                self.error_node = Some(flagged.clone());
                self.selected = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NodeItem, Side};

    const COLOR: &str = "#22d3ee";

    fn node(id: &str, pair: &str, side: Side) -> NodeItem {
        NodeItem {
            id: NodeId::new(id),
            icon: "fa-x".into(),
            label: id.to_uppercase(),
            pair_id: NodeId::new(pair),
            side,
        }
    }

    fn board() -> Board {
        Board {
            nodes: vec![
                node("a", "x", Side::Left),
                node("b", "y", Side::Left),
                node("y", "b", Side::Right),
                node("x", "a", Side::Right),
            ],
            ..Board::default()
        }
    }

    fn click(board: &mut Board, id: &str) -> ClickOutcome {
        let outcome = resolve_click(board, &NodeId::new(id), COLOR);
        board.apply_click(&outcome);
        outcome
    }

    #[test]
    fn first_click_selects() {
        let mut b = board();
        assert_eq!(click(&mut b, "a"), ClickOutcome::Selected(NodeId::new("a")));
        assert_eq!(b.selected, Some(NodeId::new("a")));
    }

    #[test]
    fn clicking_selected_node_again_deselects() {
        let mut b = board();
        click(&mut b, "a");
        assert_eq!(click(&mut b, "a"), ClickOutcome::Deselected);
        assert!(b.selected.is_none());
        assert!(b.connections.is_empty());
    }

    #[test]
    fn same_side_click_switches_selection() {
        let mut b = board();
        click(&mut b, "a");
        assert_eq!(click(&mut b, "b"), ClickOutcome::Switched(NodeId::new("b")));
        assert_eq!(b.selected, Some(NodeId::new("b")));
        assert!(b.error_node.is_none());
    }

    #[test]
    fn correct_counterpart_connects_in_either_direction() {
        let mut b = board();
        click(&mut b, "a");
        let outcome = click(&mut b, "x");
        assert!(matches!(outcome, ClickOutcome::Matched(_)));
        click(&mut b, "y");
        click(&mut b, "b");
        assert_eq!(b.connections.len(), 2);
        assert_eq!(b.connections[1].from, NodeId::new("y"));
        assert!(b.is_complete());
        assert!(b.selected.is_none());
    }

    #[test]
    fn wrong_counterpart_flags_second_node() {
        let mut b = board();
        click(&mut b, "a");
        assert_eq!(
            click(&mut b, "y"),
            ClickOutcome::Mismatched {
                flagged: NodeId::new("y")
            }
        );
        assert_eq!(b.error_node, Some(NodeId::new("y")));
        assert!(b.selected.is_none());
        assert!(b.connections.is_empty());
    }

    #[test]
    fn connected_and_unknown_nodes_are_ignored() {
        let mut b = board();
        click(&mut b, "a");
        click(&mut b, "x");
        assert!(click(&mut b, "a").is_ignored());
        assert!(click(&mut b, "x").is_ignored());
        assert!(click(&mut b, "nope").is_ignored());
        assert!(b.selected.is_none());
    }
}
