// Whole-run scenarios against the bundled level set.
use std::rc::Rc;

use cyberdeck::catalog::Catalog;
use cyberdeck::config::Rules;
use cyberdeck::game::{Effect, GameAction, GameOverCause, GameState, Phase};
use cyberdeck::model::{Cue, Lives, NodeItem, Side};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn new_game() -> (GameState, StdRng) {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.len(), 4, "bundled levels failed to load");
    (
        GameState::new(Rc::new(catalog), Rules::default()),
        StdRng::seed_from_u64(7),
    )
}

fn left_nodes(state: &GameState) -> Vec<NodeItem> {
    state.board.side(Side::Left).cloned().collect()
}

fn wrong_partner(state: &GameState, node: &NodeItem) -> NodeItem {
    state
        .board
        .side(Side::Right)
        .find(|n| n.id != node.pair_id)
        .cloned()
        .expect("board has more than one pair")
}

#[test]
fn tutorial_completion_flows_into_level_one() {
    let (mut state, mut rng) = new_game();
    state.apply(GameAction::StartLevel(0), &mut rng);
    assert_eq!(state.phase, Phase::Playing);
    assert_eq!(state.lives, Lives::Unlimited);
    assert_eq!(state.time_left, None);
    assert_eq!(state.board.side(Side::Left).count(), 7);
    assert_eq!(state.board.side(Side::Right).count(), 7);

    for node in left_nodes(&state) {
        state.apply(GameAction::ClickNode(node.id.clone()), &mut rng);
        state.apply(GameAction::ClickNode(node.pair_id.clone()), &mut rng);
    }
    assert_eq!(state.phase, Phase::Transition);
    assert_eq!(state.unlocked_clues, vec!["INITIALISATION DU NOYAU REUSSIE".to_string()]);

    let session = state.session;
    for _ in 0..4 {
        state.apply(GameAction::TransitionTick { session }, &mut rng);
        assert_eq!(state.phase, Phase::Transition);
    }
    let seen = state.effects_since(0).last().map(|(seq, _)| *seq).unwrap_or(0);
    state.apply(GameAction::TransitionTick { session }, &mut rng);
    let queued: Vec<Effect> = state.effects_since(seen).map(|(_, e)| e.clone()).collect();
    assert_eq!(queued, vec![Effect::StartLevel(1)]);

    state.apply(GameAction::StartLevel(1), &mut rng);
    assert_eq!(state.phase, Phase::Playing);
    assert_eq!(state.level_id, 1);
    assert_eq!(state.lives, Lives::Limited(2));
    assert_eq!(state.time_left, Some(45));
    assert_eq!(state.unlocked_clues.len(), 1);
}

#[test]
fn two_mistakes_lock_the_terminal() {
    let (mut state, mut rng) = new_game();
    state.apply(
        GameAction::Restore(cyberdeck::model::ProgressRecord {
            current_level: 1,
            unlocked_clues: vec!["INITIALISATION DU NOYAU REUSSIE".into()],
        }),
        &mut rng,
    );
    state.apply(GameAction::StartLevel(1), &mut rng);
    let first = left_nodes(&state).remove(0);
    let wrong = wrong_partner(&state, &first);

    state.apply(GameAction::ClickNode(first.id.clone()), &mut rng);
    state.apply(GameAction::ClickNode(wrong.id.clone()), &mut rng);
    assert_eq!(state.phase, Phase::Playing);
    assert_eq!(state.lives, Lives::Limited(1));
    assert_eq!(state.board.error_node, Some(wrong.id.clone()));
    assert!(state.board.connections.is_empty());

    state.apply(GameAction::ClickNode(first.id.clone()), &mut rng);
    state.apply(GameAction::ClickNode(wrong.id.clone()), &mut rng);
    assert_eq!(state.phase, Phase::GameOver);
    assert_eq!(state.game_over_cause, Some(GameOverCause::LivesExhausted));

    // Locked: clicks no longer do anything.
    let version = state.version;
    assert!(!state.apply(GameAction::ClickNode(first.id), &mut rng));
    assert_eq!(state.version, version);
}

#[test]
fn timer_runs_out_on_level_two() {
    let (mut state, mut rng) = new_game();
    state.apply(
        GameAction::Restore(cyberdeck::model::ProgressRecord {
            current_level: 2,
            unlocked_clues: Vec::new(),
        }),
        &mut rng,
    );
    state.apply(GameAction::StartLevel(2), &mut rng);
    let session = state.session;
    for _ in 0..29 {
        state.apply(GameAction::TickSecond { session }, &mut rng);
    }
    assert_eq!(state.phase, Phase::Playing);
    assert_eq!(state.time_left, Some(1));

    state.apply(GameAction::TickSecond { session }, &mut rng);
    assert_eq!(state.phase, Phase::GameOver);
    assert_eq!(state.time_left, Some(0));
    assert_eq!(state.game_over_cause, Some(GameOverCause::TimeExpired));
    let ticks = state
        .effects_since(0)
        .filter(|(_, e)| *e == Effect::Cue(Cue::Tick))
        .count();
    assert_eq!(ticks, 9);
}

#[test]
fn reselecting_and_switching_selection() {
    let (mut state, mut rng) = new_game();
    state.apply(GameAction::StartLevel(0), &mut rng);
    let left = left_nodes(&state);

    state.apply(GameAction::ClickNode(left[0].id.clone()), &mut rng);
    assert_eq!(state.board.selected, Some(left[0].id.clone()));
    state.apply(GameAction::ClickNode(left[0].id.clone()), &mut rng);
    assert_eq!(state.board.selected, None);

    state.apply(GameAction::ClickNode(left[0].id.clone()), &mut rng);
    state.apply(GameAction::ClickNode(left[1].id.clone()), &mut rng);
    assert_eq!(state.board.selected, Some(left[1].id.clone()));
    assert!(state.board.connections.is_empty());
    assert_eq!(state.lives, Lives::Unlimited);
}

#[test]
fn final_level_completion_ends_in_victory() {
    let (mut state, mut rng) = new_game();
    state.apply(
        GameAction::Restore(cyberdeck::model::ProgressRecord {
            current_level: 3,
            unlocked_clues: Vec::new(),
        }),
        &mut rng,
    );
    state.apply(GameAction::StartLevel(3), &mut rng);
    assert_eq!(state.theme().line_color, "#f43f5e");
    state.apply(GameAction::ForceComplete, &mut rng);
    assert_eq!(state.phase, Phase::Transition);
    let saved = state
        .effects_since(0)
        .find_map(|(_, e)| match e {
            Effect::SaveProgress(record) => Some(record.current_level),
            _ => None,
        });
    assert_eq!(saved, Some(4));

    let session = state.session;
    for _ in 0..5 {
        state.apply(GameAction::TransitionTick { session }, &mut rng);
    }
    assert_eq!(state.phase, Phase::Victory);
    assert!(state.unlocked_clues[0].starts_with("image://"));
}
