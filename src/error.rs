use std::fmt;
use std::io;

#[derive(Debug)]
pub enum GameError {
    /// A difficulty name that maps to no profile.
    UnknownDifficulty(String),
    Io(io::Error),
    Config(serde_json::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDifficulty(name) => {
                write!(f, "unknown difficulty '{name}' (expected easy, medium or hard)")
            }
            Self::Io(err) => write!(f, "i/o error: {err}"),
            Self::Config(err) => write!(f, "invalid settings: {err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnknownDifficulty(_) => None,
            Self::Io(err) => Some(err),
            Self::Config(err) => Some(err),
        }
    }
}

impl From<io::Error> for GameError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err)
    }
}

impl From<GameError> for io::Error {
    fn from(err: GameError) -> Self {
        match err {
            GameError::Io(inner) => inner,
            other => io::Error::new(io::ErrorKind::InvalidInput, other.to_string()),
        }
    }
}
