use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("Match not found: {0}")]
    MatchNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Lookup table error: {0}")]
    LookupTable(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

/// Failures of a single match normalization. These never abort a batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("Participant {0} is not part of this match")]
    ParticipantNotFound(String),

    #[error("Invalid match duration: {0}s")]
    InvalidDuration(i64),

    #[error("Unknown {table} id: {key}")]
    UnknownLookupKey { table: &'static str, key: i64 },

    #[error("Unknown unit rarity: {0}")]
    UnknownRarity(i64),
}
