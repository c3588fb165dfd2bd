//! Errors raised by core model validation.

/// Result alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Model validation errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A quiz question's correct index does not point at an option
    #[error("correct option {index} out of range for {options} options")]
    CorrectOptionOutOfRange {
        /// The offending index
        index: usize,
        /// How many options the question has
        options: usize,
    },
}
