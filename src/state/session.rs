// Board dealing: fresh node ids, left column in pair order, right column shuffled.
use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::model::{Connection, LevelConfig, NodeId, NodeItem, Side};

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 8;

/// Live node/connection/selection state of one level session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    /// Left column in pair order, followed by the shuffled right column.
    pub nodes: Vec<NodeItem>,
    pub connections: Vec<Connection>,
    pub selected: Option<NodeId>,
    /// Node currently showing the mismatch flash.
    pub error_node: Option<NodeId>,
}

impl Board {
    /// Deal a fresh board for `config`, keeping at most `max_pairs` pairs.
    pub fn deal<R: Rng + ?Sized>(config: &LevelConfig, max_pairs: usize, rng: &mut R) -> Self {
        let pairs = &config.pairs[..config.pairs.len().min(max_pairs)];
        let mut taken = HashSet::with_capacity(pairs.len() * 2);
        let mut left = Vec::with_capacity(pairs.len());
        let mut right = Vec::with_capacity(pairs.len());
        for pair in pairs {
            let left_id = mint_id(rng, &mut taken);
            let right_id = mint_id(rng, &mut taken);
            left.push(NodeItem {
                id: left_id.clone(),
                icon: pair.left_icon.clone(),
                label: pair.left.clone(),
                pair_id: right_id.clone(),
                side: Side::Left,
            });
            right.push(NodeItem {
                id: right_id,
                icon: pair.right_icon.clone(),
                label: pair.right.clone(),
                pair_id: left_id,
                side: Side::Right,
            });
        }
        right.shuffle(rng);
        left.extend(right);
        Self {
            nodes: left,
            ..Self::default()
        }
    }

    pub fn node(&self, id: &NodeId) -> Option<&NodeItem> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    pub fn side(&self, side: Side) -> impl Iterator<Item = &NodeItem> {
        self.nodes.iter().filter(move |n| n.side == side)
    }

    pub fn is_connected(&self, id: &NodeId) -> bool {
        self.connections.iter().any(|c| c.involves(id))
    }

    pub fn pair_count(&self) -> usize {
        self.nodes.len() / 2
    }

    pub fn is_complete(&self) -> bool {
        !self.nodes.is_empty() && self.connections.len() == self.pair_count()
    }

    /// Fraction of pairs connected, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        match self.pair_count() {
            0 => 0.0,
            n => self.connections.len() as f64 / n as f64,
        }
    }
}

fn mint_id<R: Rng + ?Sized>(rng: &mut R, taken: &mut HashSet<String>) -> NodeId {
    loop {
        let raw: String = (0..ID_LEN)
            .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
            .collect();
        if taken.insert(raw.clone()) {
            return NodeId::new(raw);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, Lives, PairDef};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn level_with_pairs(count: usize) -> LevelConfig {
        LevelConfig {
            id: 0,
            name: "TEST".into(),
            difficulty: Difficulty::Easy,
            lives: Lives::Limited(2),
            pairs: (0..count)
                .map(|i| PairDef {
                    left: format!("left-{i}"),
                    left_icon: format!("fa-l{i}"),
                    right: format!("right-{i}"),
                    right_icon: format!("fa-r{i}"),
                })
                .collect(),
            clue: "CLUE".into(),
            time_limit_secs: None,
        }
    }

    #[test]
    fn columns_are_capped_at_max_pairs() {
        let mut rng = StdRng::seed_from_u64(1);
        let board = Board::deal(&level_with_pairs(9), 7, &mut rng);
        assert_eq!(board.side(Side::Left).count(), 7);
        assert_eq!(board.side(Side::Right).count(), 7);
        assert_eq!(board.pair_count(), 7);

        let small = Board::deal(&level_with_pairs(3), 7, &mut rng);
        assert_eq!(small.side(Side::Left).count(), 3);
        assert_eq!(small.side(Side::Right).count(), 3);
    }

    #[test]
    fn pairing_is_a_symmetric_bijection() {
        let mut rng = StdRng::seed_from_u64(2);
        let board = Board::deal(&level_with_pairs(7), 7, &mut rng);
        for node in &board.nodes {
            let partners: Vec<_> = board
                .nodes
                .iter()
                .filter(|other| other.pair_id == node.id)
                .collect();
            assert_eq!(partners.len(), 1, "node {} has {} partners", node.id, partners.len());
            let partner = partners[0];
            assert_eq!(partner.side, node.side.opposite());
            assert_eq!(node.pair_id, partner.id);
        }
    }

    #[test]
    fn ids_are_unique_and_labels_keep_their_pairing() {
        let mut rng = StdRng::seed_from_u64(3);
        let board = Board::deal(&level_with_pairs(7), 7, &mut rng);
        let ids: HashSet<_> = board.nodes.iter().map(|n| n.id.clone()).collect();
        assert_eq!(ids.len(), board.nodes.len());
        for node in board.side(Side::Left) {
            let partner = board.node(&node.pair_id).unwrap();
            let index = node.label.trim_start_matches("left-");
            assert_eq!(partner.label, format!("right-{index}"));
        }
    }

    #[test]
    fn left_column_keeps_pair_order() {
        let mut rng = StdRng::seed_from_u64(4);
        let board = Board::deal(&level_with_pairs(7), 7, &mut rng);
        let labels: Vec<_> = board.side(Side::Left).map(|n| n.label.clone()).collect();
        let expected: Vec<_> = (0..7).map(|i| format!("left-{i}")).collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn right_column_order_varies_between_deals() {
        let config = level_with_pairs(7);
        let mut rng = StdRng::seed_from_u64(5);
        let orders: HashSet<Vec<String>> = (0..20)
            .map(|_| {
                Board::deal(&config, 7, &mut rng)
                    .side(Side::Right)
                    .map(|n| n.label.clone())
                    .collect()
            })
            .collect();
        assert!(orders.len() > 1);
    }

    #[test]
    fn fresh_board_starts_empty() {
        let mut rng = StdRng::seed_from_u64(6);
        let board = Board::deal(&level_with_pairs(2), 7, &mut rng);
        assert!(board.connections.is_empty());
        assert!(board.selected.is_none());
        assert!(board.error_node.is_none());
        assert!(!board.is_complete());
        assert_eq!(board.progress(), 0.0);
    }
}
