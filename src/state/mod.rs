pub mod matching;
pub mod progress;
pub mod scramble;
pub mod session;

pub use matching::{ClickOutcome, resolve_click};
pub use progress::{BrowserStorage, KeyValueStore, MemoryStore, ProgressStore, browser_store};
pub use scramble::{ClueContent, scramble};
pub use session::Board;
