use std::rc::Rc;

use gloo::timers::callback::{Interval, Timeout};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use super::{
    board_view::BoardView, game_over_screen::GameOverScreen, menu_screen::MenuScreen,
    settings_modal::SettingsModal, transition_screen::TransitionScreen,
    victory_screen::VictoryScreen,
};
use crate::audio::{AudioSink, SynthAudio};
use crate::catalog::Catalog;
use crate::config::{DEBUG_SKIP_CODE, Rules, Settings};
use crate::game::{Effect, GameAction, GameState, Phase};
use crate::model::{Difficulty, NodeId};
use crate::state::progress::{KeyValueStore, ProgressStore, browser_store};

#[function_component(App)]
pub fn app() -> Html {
    let store = use_memo((), |_| browser_store());
    let game = use_reducer(|| GameState::new(Rc::new(Catalog::builtin()), Rules::default()));
    let settings = {
        let store = store.clone();
        use_state(move || Settings::load(&**store))
    };
    let audio = use_memo((), |_| SynthAudio::default());
    let last_effect = use_mut_ref(|| 0_u64);
    let show_settings = use_state(|| false);

    // Restore saved progress once
    {
        let dispatcher = game.dispatcher();
        let store = store.clone();
        use_effect_with((), move |_| {
            if let Some(record) = ProgressStore::new((*store).clone()).load() {
                dispatcher.dispatch(GameAction::Restore(record));
            }
            || ()
        });
    }

    // Drain the effect journal after every state change
    {
        let game = game.clone();
        let store = store.clone();
        let audio = audio.clone();
        let sound_enabled = settings.sound_enabled;
        let version = game.version;
        use_effect_with(version, move |_| {
            let mut seen = last_effect.borrow_mut();
            if let Some(oldest) = game.oldest_effect_seq() {
                if oldest > *seen + 1 {
                    log::warn!("{} effects dropped before they ran", oldest - *seen - 1);
                }
            }
            let progress = ProgressStore::new((*store).clone());
            for (seq, effect) in game.effects_since(*seen) {
                match effect {
                    Effect::Cue(cue) => {
                        if sound_enabled {
                            audio.play(*cue);
                        }
                    }
                    Effect::SaveProgress(record) => {
                        if let Err(err) = progress.save_record(record) {
                            log::error!("could not save progress: {err}");
                        }
                    }
                    Effect::ClearProgress => {
                        if let Err(err) = progress.clear() {
                            log::error!("could not clear progress: {err}");
                        }
                    }
                    Effect::FlashError { node, millis } => {
                        let dispatcher = game.dispatcher();
                        let node = node.clone();
                        Timeout::new(*millis, move || {
                            dispatcher.dispatch(GameAction::ClearErrorFlash(node))
                        })
                        .forget();
                    }
                    Effect::StartLevel(id) => {
                        let dispatcher = game.dispatcher();
                        let id = *id;
                        Timeout::new(0, move || dispatcher.dispatch(GameAction::StartLevel(id)))
                            .forget();
                    }
                }
                *seen = *seq;
            }
            || ()
        });
    }

    // Level countdown: armed only while playing a timed level
    {
        let dispatcher = game.dispatcher();
        let running = game.phase == Phase::Playing && game.time_left.is_some();
        let session = game.session;
        use_effect_with((running, session), move |&(running, session)| {
            let interval = running.then(|| {
                Interval::new(1_000, move || {
                    dispatcher.dispatch(GameAction::TickSecond { session })
                })
            });
            move || drop(interval)
        });
    }

    // Transition countdown
    {
        let dispatcher = game.dispatcher();
        let running = game.phase == Phase::Transition;
        let session = game.session;
        use_effect_with((running, session), move |&(running, session)| {
            let interval = running.then(|| {
                Interval::new(1_000, move || {
                    dispatcher.dispatch(GameAction::TransitionTick { session })
                })
            });
            move || drop(interval)
        });
    }

    // Debug chord (Ctrl+Alt+L) force-completes the level
    {
        let dispatcher = game.dispatcher();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let keydown_cb = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                if e.ctrl_key() && e.alt_key() && e.code() == DEBUG_SKIP_CODE {
                    e.prevent_default();
                    dispatcher.dispatch(GameAction::ForceComplete);
                }
            }) as Box<dyn FnMut(_)>);
            if let Some(win) = &window {
                let _ = win
                    .add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref());
            }
            move || {
                if let Some(win) = window {
                    let _ = win.remove_event_listener_with_callback(
                        "keydown",
                        keydown_cb.as_ref().unchecked_ref(),
                    );
                }
                drop(keydown_cb);
            }
        });
    }

    let start_cb: Callback<()> = {
        let game = game.clone();
        Callback::from(move |()| game.dispatch(GameAction::StartLevel(game.level_id)))
    };
    let click_cb: Callback<NodeId> = {
        let dispatcher = game.dispatcher();
        Callback::from(move |id: NodeId| dispatcher.dispatch(GameAction::ClickNode(id)))
    };
    let reset_cb: Callback<()> = {
        let dispatcher = game.dispatcher();
        let show_settings = show_settings.clone();
        Callback::from(move |()| {
            dispatcher.dispatch(GameAction::Reset);
            show_settings.set(false);
        })
    };
    let toggle_sound_cb: Callback<()> = {
        let settings = settings.clone();
        let store = store.clone();
        Callback::from(move |()| {
            let next = Settings {
                sound_enabled: !settings.sound_enabled,
            };
            next.save(&**store);
            settings.set(next);
        })
    };
    let open_settings_cb = {
        let show_settings = show_settings.clone();
        Callback::from(move |_: MouseEvent| show_settings.set(true))
    };
    let close_settings_cb: Callback<()> = {
        let show_settings = show_settings.clone();
        Callback::from(move |()| show_settings.set(false))
    };

    let theme = game.theme();
    let screen = match game.phase {
        Phase::Menu => html! {
            <MenuScreen
                resume={game.level_id > 0}
                has_progress={game.level_id > 0 || !game.unlocked_clues.is_empty()}
                on_start={start_cb}
                on_reset={reset_cb.clone()}
            />
        },
        Phase::Playing => {
            let config = game.level_config();
            html! {
                <BoardView
                    level_id={game.level_id}
                    level_name={config.map(|c| c.name.clone()).unwrap_or_default()}
                    difficulty={config.map(|c| c.difficulty).unwrap_or(Difficulty::Tutorial)}
                    clue={config.map(|c| c.clue.clone()).unwrap_or_default()}
                    level_lives={config.map(|c| c.lives).unwrap_or(game.lives)}
                    lives={game.lives}
                    time_left={game.time_left}
                    low_time_secs={game.rules().low_time_warning_secs}
                    board={game.board.clone()}
                    clues={game.unlocked_clues.clone()}
                    theme={theme}
                    on_click={click_cb}
                />
            }
        }
        Phase::Transition => html! {
            <TransitionScreen
                clue={game.transition_clue.clone().unwrap_or_default()}
                seconds_left={game.transition_left}
                theme={theme}
            />
        },
        Phase::GameOver => html! {
            <GameOverScreen cause={game.game_over_cause} clues={game.unlocked_clues.clone()} />
        },
        Phase::Victory => html! {
            <VictoryScreen clues={game.unlocked_clues.clone()} on_reset={reset_cb.clone()} />
        },
    };

    html! {
        <div id="root" class={classes!("app", format!("theme-{}", theme.name))}>
            { screen }
            <button class="settings-toggle" onclick={open_settings_cb} aria-label="Settings">{"⚙"}</button>
            <SettingsModal
                show={*show_settings}
                sound_enabled={settings.sound_enabled}
                on_toggle_sound={toggle_sound_cb}
                on_hard_reset={reset_cb}
                can_reset={!matches!(game.phase, Phase::Playing | Phase::Transition)}
                on_close={close_settings_cb}
            />
        </div>
    }
}
