pub mod config;
pub mod delete_index;
pub mod dictionary;
pub mod edit_distance;
pub mod error;
pub mod helpers;
pub mod spellcheck;
pub mod suggestion;

pub use config::SymSpellConfig;
pub use error::SymSpellError;
pub use spellcheck::SpellCorrector;
pub use suggestion::{SuggestItem, Verbosity};
