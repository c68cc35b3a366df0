//! Error types for world loading and the game loop.

use crate::world::ValidationError;

/// Errors that stop the game before or during the loop.
///
/// Bad player input never ends up here; the controller answers it with a
/// message instead.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Reading the world file, reading input, or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The world file is not valid TOML or does not match the expected shape.
    #[error("failed to parse world file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The world file parsed but describes something that can't be built.
    #[error("invalid world: {0}")]
    InvalidWorld(String),

    /// The built world failed validation.
    #[error("world failed validation with {} error(s)", .0.len())]
    Validation(Vec<ValidationError>),
}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display_counts_errors() {
        let err = GameError::Validation(vec![
            ValidationError::new("first"),
            ValidationError::new("second"),
        ]);
        assert_eq!(err.to_string(), "world failed validation with 2 error(s)");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "gone");
        let err: GameError = io.into();
        assert!(matches!(err, GameError::Io(_)));
    }
}
