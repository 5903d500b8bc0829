use crate::config::ConfigError;
use crate::repository::RecordError;
use crate::service::ReservationServiceError;
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Record(RecordError),
    Reservation(ReservationServiceError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Record(err) => write!(f, "record error: {}", err),
            AppError::Reservation(err) => write!(f, "reservation error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Record(err) => Some(err),
            AppError::Reservation(err) => Some(err),
        }
    }
}

impl AppError {
    /// Whether the failure came from a rejected record operation rather than the environment.
    pub fn is_rejection(&self) -> bool {
        matches!(self, AppError::Record(_) | AppError::Reservation(_))
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<RecordError> for AppError {
    fn from(value: RecordError) -> Self {
        Self::Record(value)
    }
}

impl From<ReservationServiceError> for AppError {
    fn from(value: ReservationServiceError) -> Self {
        Self::Reservation(value)
    }
}
