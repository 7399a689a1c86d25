//! Game state machine.
//!
//! `GameState` owns the whole session: lifecycle phase, dealt board, lives,
//! level countdown and the transition countdown. It is a [`yew::Reducible`];
//! every mutation arrives as a [`GameAction`]. Side effects the browser has to
//! carry out (audio cues, saving, arming short timers) are appended to a
//! bounded journal that the app component drains after each render.

use std::collections::VecDeque;
use std::rc::Rc;

use rand::Rng;
use yew::Reducible;

use crate::catalog::Catalog;
use crate::config::Rules;
use crate::model::{Cue, LevelConfig, Lives, NodeId, ProgressRecord, Theme};
use crate::state::matching::{ClickOutcome, resolve_click};
use crate::state::session::Board;

const JOURNAL_CAPACITY: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Menu,
    Playing,
    Transition,
    GameOver,
    Victory,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverCause {
    TimeExpired,
    LivesExhausted,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Cue(Cue),
    SaveProgress(ProgressRecord),
    ClearProgress,
    /// Clear the mismatch flash on `node` after the configured delay.
    FlashError { node: NodeId, millis: u32 },
    /// Start `level` after yielding one scheduling turn.
    StartLevel(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameAction {
    Restore(ProgressRecord),
    StartLevel(usize),
    ClickNode(NodeId),
    /// One second of the level countdown for the given session.
    TickSecond { session: u64 },
    /// One second of the post-level countdown for the given session.
    TransitionTick { session: u64 },
    ClearErrorFlash(NodeId),
    /// Debug chord: complete the level without matching.
    ForceComplete,
    /// Wipe saved progress and return to the menu at level 0.
    Reset,
}

#[derive(Clone, Debug)]
pub struct GameState {
    catalog: Rc<Catalog>,
    rules: Rules,
    pub phase: Phase,
    pub level_id: usize,
    pub lives: Lives,
    /// `None` when the level has no time limit.
    pub time_left: Option<u32>,
    pub board: Board,
    pub unlocked_clues: Vec<String>,
    pub transition_left: u32,
    /// Clue of the level just completed, shown during the transition.
    pub transition_clue: Option<String>,
    pub game_over_cause: Option<GameOverCause>,
    /// Incremented every time a level is dealt; timers are tagged with it.
    pub session: u64,
    /// Incremented on every state change.
    pub version: u64,
    journal: VecDeque<(u64, Effect)>,
    next_seq: u64,
}

impl GameState {
    pub fn new(catalog: Rc<Catalog>, rules: Rules) -> Self {
        Self {
            catalog,
            rules,
            phase: Phase::Menu,
            level_id: 0,
            lives: Lives::Unlimited,
            time_left: None,
            board: Board::default(),
            unlocked_clues: Vec::new(),
            transition_left: 0,
            transition_clue: None,
            game_over_cause: None,
            session: 0,
            version: 0,
            journal: VecDeque::new(),
            next_seq: 1,
        }
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn level_config(&self) -> Option<&LevelConfig> {
        self.catalog.get(self.level_id)
    }

    pub fn theme(&self) -> Theme {
        self.level_config()
            .map(LevelConfig::theme)
            .unwrap_or(Theme::STANDARD)
    }

    /// Journal entries with a sequence number greater than `seen`, oldest first.
    pub fn effects_since(&self, seen: u64) -> impl Iterator<Item = &(u64, Effect)> {
        self.journal.iter().filter(move |(seq, _)| *seq > seen)
    }

    /// Sequence number of the oldest entry still held, if any.
    pub fn oldest_effect_seq(&self) -> Option<u64> {
        self.journal.front().map(|(seq, _)| *seq)
    }

    /// Apply one action. Returns `false` when the action was a no-op.
    pub fn apply<R: Rng + ?Sized>(&mut self, action: GameAction, rng: &mut R) -> bool {
        let changed = match action {
            GameAction::Restore(record) => self.restore(record),
            GameAction::StartLevel(id) => self.start_level(id, rng),
            GameAction::ClickNode(id) => self.click_node(&id),
            GameAction::TickSecond { session } => self.tick_second(session),
            GameAction::TransitionTick { session } => self.transition_tick(session),
            GameAction::ClearErrorFlash(id) => self.clear_error_flash(&id),
            GameAction::ForceComplete => self.force_complete(),
            GameAction::Reset => self.reset(),
        };
        if changed {
            self.version += 1;
        }
        changed
    }

    /// Adopt saved progress. Only meaningful before any level has started.
    pub fn restore(&mut self, record: ProgressRecord) -> bool {
        if self.phase != Phase::Menu {
            return false;
        }
        let mut clues: Vec<String> = Vec::with_capacity(record.unlocked_clues.len());
        for clue in record.unlocked_clues {
            if !clues.contains(&clue) {
                clues.push(clue);
            }
        }
        self.unlocked_clues = clues;
        self.level_id = record.current_level;
        if !self.catalog.is_empty() && record.current_level >= self.catalog.len() {
            // Every level was already cleared in an earlier visit.
            self.level_id = self.catalog.len() - 1;
            self.phase = Phase::Victory;
        }
        true
    }

    /// Deal a level and enter `Playing`. Unknown ids are ignored.
    pub fn start_level<R: Rng + ?Sized>(&mut self, id: usize, rng: &mut R) -> bool {
        if !matches!(self.phase, Phase::Menu | Phase::Transition) {
            log::debug!("start of level {id} ignored in {:?}", self.phase);
            return false;
        }
        let Some(config) = self.catalog.get(id) else {
            log::warn!("no level with id {id}");
            return false;
        };
        self.board = Board::deal(config, self.rules.max_pairs, rng);
        self.lives = config.lives;
        self.time_left = config.time_limit_secs;
        self.level_id = id;
        self.transition_clue = None;
        self.game_over_cause = None;
        self.session += 1;
        self.phase = Phase::Playing;
        log::info!("level {id} ({}) started", config.name);
        true
    }

    pub fn click_node(&mut self, id: &NodeId) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        let outcome = resolve_click(&self.board, id, self.theme().line_color);
        if outcome.is_ignored() {
            return false;
        }
        self.emit(Effect::Cue(Cue::Select));
        self.board.apply_click(&outcome);
        match outcome {
            ClickOutcome::Matched(_) => {
                self.emit(Effect::Cue(Cue::Connect));
                if self.board.is_complete() {
                    self.complete_level();
                }
            }
            ClickOutcome::Mismatched { flagged } => {
                self.emit(Effect::Cue(Cue::Error));
                self.emit(Effect::FlashError {
                    node: flagged,
                    millis: self.rules.error_flash_ms,
                });
                if !self.lives.is_unlimited() {
                    self.lives = self.lives.lose_one();
                    if self.lives.is_exhausted() {
                        self.game_over(GameOverCause::LivesExhausted);
                    }
                }
            }
            _ => {}
        }
        true
    }

    pub fn tick_second(&mut self, session: u64) -> bool {
        if self.phase != Phase::Playing || session != self.session {
            return false;
        }
        let Some(left) = self.time_left else {
            return false;
        };
        if left <= 1 {
            self.time_left = Some(0);
            self.emit(Effect::Cue(Cue::Error));
            self.game_over(GameOverCause::TimeExpired);
            return true;
        }
        if left <= self.rules.low_time_warning_secs {
            self.emit(Effect::Cue(Cue::Tick));
        }
        self.time_left = Some(left - 1);
        true
    }

    pub fn transition_tick(&mut self, session: u64) -> bool {
        if self.phase != Phase::Transition || session != self.session || self.transition_left == 0 {
            return false;
        }
        self.transition_left -= 1;
        if self.transition_left > 0 {
            return true;
        }
        if self.catalog.is_last(self.level_id) {
            self.phase = Phase::Victory;
            log::info!("all levels cleared");
        } else {
            self.level_id += 1;
            self.emit(Effect::StartLevel(self.level_id));
        }
        true
    }

    pub fn clear_error_flash(&mut self, id: &NodeId) -> bool {
        if self.board.error_node.as_ref() != Some(id) {
            return false;
        }
        self.board.error_node = None;
        true
    }

    pub fn force_complete(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        log::debug!("level {} force-completed", self.level_id);
        self.complete_level();
        true
    }

    pub fn reset(&mut self) -> bool {
        if matches!(self.phase, Phase::Playing | Phase::Transition) {
            return false;
        }
        self.phase = Phase::Menu;
        self.level_id = 0;
        self.lives = Lives::Unlimited;
        self.time_left = None;
        self.board = Board::default();
        self.unlocked_clues.clear();
        self.transition_left = 0;
        self.transition_clue = None;
        self.game_over_cause = None;
        self.emit(Effect::ClearProgress);
        true
    }

    fn complete_level(&mut self) {
        let clue = self
            .level_config()
            .map(|c| c.clue.clone())
            .unwrap_or_default();
        if !self.unlocked_clues.contains(&clue) {
            self.unlocked_clues.push(clue.clone());
        }
        self.emit(Effect::Cue(Cue::Victory));
        self.emit(Effect::SaveProgress(ProgressRecord {
            current_level: self.level_id + 1,
            unlocked_clues: self.unlocked_clues.clone(),
        }));
        self.board.selected = None;
        self.transition_clue = Some(clue);
        self.transition_left = self.rules.transition_secs;
        self.phase = Phase::Transition;
        log::info!("level {} complete", self.level_id);
    }

    fn game_over(&mut self, cause: GameOverCause) {
        self.phase = Phase::GameOver;
        self.game_over_cause = Some(cause);
        self.board.selected = None;
        log::info!("game over on level {}: {cause:?}", self.level_id);
    }

    fn emit(&mut self, effect: Effect) {
        self.journal.push_back((self.next_seq, effect));
        self.next_seq += 1;
        while self.journal.len() > JOURNAL_CAPACITY {
            self.journal.pop_front();
        }
    }
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action, &mut rand::thread_rng()) {
            Rc::new(next)
        } else {
            self
        }
    }
}
