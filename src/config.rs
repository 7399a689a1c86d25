//! Game rules, storage keys and persisted UI settings.

use crate::state::progress::KeyValueStore;

/// Storage slot holding the serialized [`crate::model::ProgressRecord`].
pub const PROGRESS_KEY: &str = "cyberdeck_save";
pub const SOUND_SETTING_KEY: &str = "cyberdeck_setting_sound";
/// `KeyboardEvent.code` of the Ctrl+Alt level-skip chord.
pub const DEBUG_SKIP_CODE: &str = "KeyL";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rules {
    /// Pairs beyond this count are dropped when a level is dealt.
    pub max_pairs: usize,
    pub transition_secs: u32,
    /// Level ticks at or below this many remaining seconds play the tick cue.
    pub low_time_warning_secs: u32,
    pub error_flash_ms: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_pairs: 7,
            transition_secs: 5,
            low_time_warning_secs: 10,
            error_flash_ms: 500,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub sound_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
        }
    }
}

impl Settings {
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.get(SOUND_SETTING_KEY) {
            Ok(Some(v)) => Self {
                sound_enabled: !(v == "0" || v == "false"),
            },
            Ok(None) => Self::default(),
            Err(err) => {
                log::warn!("settings unavailable, using defaults: {err}");
                Self::default()
            }
        }
    }

    pub fn save(&self, store: &dyn KeyValueStore) {
        let flag = if self.sound_enabled { "1" } else { "0" };
        if let Err(err) = store.set(SOUND_SETTING_KEY, flag) {
            log::warn!("could not persist settings: {err}");
        }
    }
}
