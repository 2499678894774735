use thiserror::Error;

/// Business errors for booking workflows
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("user not authenticated")]
    Unauthenticated,
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("booking not found")]
    NotFound,
    #[error("you can only cancel your own bookings")]
    Unauthorized,
    #[error("repository error: {0}")]
    Repository(String),
}

impl BookingError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            BookingError::Unauthenticated => 2001,
            BookingError::Validation(_) => 2002,
            BookingError::NotFound => 2003,
            BookingError::Unauthorized => 2004,
            BookingError::Repository(_) => 2100,
        }
    }
}
