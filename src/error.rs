use std::fmt;

/// Errors raised by the public collections when an argument is malformed.
///
/// The tries never fail on well-formed input: looking up or removing a word
/// that is not stored simply reports that nothing was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    /// A word or prefix argument was the empty string. The root of a trie
    /// never stores a word, so the empty word cannot be inserted.
    EmptyWord {
        /// The name of the offending argument.
        argument: &'static str,
    },
}

impl fmt::Display for TrieError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrieError::EmptyWord { argument } => {
                write!(f, "The \"{argument}\" value should not be empty.")
            }
        }
    }
}

impl std::error::Error for TrieError {}

/// Rejects the empty word before it reaches an engine.
pub(crate) fn validate_word(word: &str, argument: &'static str) -> Result<(), TrieError> {
    if word.is_empty() {
        return Err(TrieError::EmptyWord { argument });
    }
    Ok(())
}
