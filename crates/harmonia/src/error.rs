use thiserror::Error;

/// Errors raised while constructing chart inputs.
///
/// The numeric core itself never fails; these only come from turning
/// caller-supplied values into an [`Instant`](crate::time::Instant) or from
/// parsing names.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("UTC offset of {minutes} minutes is out of range (must be within ±18h)")]
    InvalidUtcOffset { minutes: i32 },
    #[error("Local time {local} does not exist or is ambiguous at offset {offset_minutes} minutes")]
    InvalidLocalTime { local: String, offset_minutes: i32 },
    #[error("Unknown body: {name}. Valid bodies: {valid:?}")]
    UnknownBody { name: String, valid: Vec<String> },
    #[error("Unknown aspect: {name}. Valid aspects: {valid:?}")]
    UnknownAspect { name: String, valid: Vec<String> },
    #[error("Unknown accuracy tier: {name}. Valid tiers: {valid:?}")]
    UnknownTier { name: String, valid: Vec<String> },
}
