use std::path::PathBuf;

// Parse-level skips while reading a dictionary file (a short line, an
// unparseable count column) are not represented here: those are silently
// dropped lines, not failures.
#[derive(Debug, thiserror::Error)]
pub enum SymSpellError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("distance {requested} exceeds max_dictionary_edit_distance {max}")]
    DistanceTooLarge { requested: usize, max: usize },

    #[error("failed to read dictionary file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
