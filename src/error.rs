use thiserror::Error;

pub type ScaleResult<T> = Result<T, ScaleError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScaleError {
    #[error("Timestamp {millis} ms cannot be represented as an instant")]
    TimestampOutOfRange { millis: f64 },
}

impl ScaleError {
    pub fn timestamp_out_of_range(millis: f64) -> Self {
        Self::TimestampOutOfRange { millis }
    }
}
