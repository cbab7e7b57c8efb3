//! Typed failures raised by the catalog and the navigation engine.

use thiserror::Error;

/// Everything that can go wrong while loading a catalog or moving focus.
///
/// All variants describe data-consistency problems, never transient ones,
/// so nothing in the app retries on them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DissectError {
    /// A class name is not defined by the loaded catalog.
    #[error("widget class `{0}` is not in the catalog")]
    NotFound(String),

    /// Walking the parent links revisited a class.
    #[error("inheritance cycle at `{class}` (walked: {})", .walked.join(" -> "))]
    CycleDetected { class: String, walked: Vec<String> },

    /// The catalog source supplied no classes at all.
    #[error("the catalog contains no widget classes")]
    EmptyCatalog,

    /// Two records share the same class name.
    #[error("widget class `{0}` is defined more than once")]
    DuplicateClass(String),

    /// A chain position outside the currently displayed chain.
    #[error("chain index {index} is out of range (chain has {len} entries)")]
    ChainIndexOutOfRange { index: usize, len: usize },

    /// A selection arrived before any class was focused.
    #[error("no widget class is focused yet")]
    NotInitialized,
}

pub type Result<T, E = DissectError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_message_lists_walked_classes() {
        let err = DissectError::CycleDetected {
            class: "A".into(),
            walked: vec!["A".into(), "B".into()],
        };
        assert_eq!(err.to_string(), "inheritance cycle at `A` (walked: A -> B)");
    }
}
