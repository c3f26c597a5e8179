use thiserror::Error;

/// Errors that can occur in utility functions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtilsError {
    #[error("character sequences src and dst must be of the same length ({src} vs {dst})")]
    LengthMismatch { src: usize, dst: usize },
    #[error("all characters of src must be distinct, found repetition of '{character}' at index {index}")]
    DuplicateCharacter { character: char, index: usize },
}
