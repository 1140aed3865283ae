use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScorecardError {
    #[error("invalid shape: {0}")]
    InvalidShape(String),

    #[error("hole index {index} out of range for a {len}-hole table")]
    HoleOutOfRange { index: usize, len: usize },

    #[error("unknown player: {0}")]
    UnknownPlayer(String),

    #[error("round already complete: all 18 holes confirmed")]
    RoundComplete,

    #[error("hole {0} has not been played yet")]
    HoleNotPlayed(usize),

    #[error("unknown course: {0}")]
    UnknownCourse(String),

    #[error("unknown tee {tee} for course {course}")]
    UnknownTee { course: String, tee: String },

    #[error("invalid round: {0}")]
    InvalidRound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScorecardError>;
