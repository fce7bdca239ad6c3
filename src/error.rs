//! Error types for the comfort monitor
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Result type alias for monitor operations
pub type Result<T> = std::result::Result<T, MonitorError>;

/// Main error type for monitor operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MonitorError {
    /// Sensor error
    #[error("Sensor error: {0}")]
    Sensor(#[from] SensorError),

    /// Display error
    #[error("Display error: {0}")]
    Display(#[from] DisplayError),

    /// A session produced no readings to classify
    #[error("No readings collected")]
    NoReadings,

    /// Console/terminal I/O error
    #[error("I/O error: {0}")]
    Io(String),
}

// io::Error is neither Clone nor PartialEq, so carry its message.
impl From<std::io::Error> for MonitorError {
    fn from(err: std::io::Error) -> Self {
        MonitorError::Io(err.to_string())
    }
}

/// Errors reading from a sensor collaborator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SensorError {
    /// Hardware or I/O failure reading the sensor
    #[error("Sensor read failed: {reason}")]
    ReadFailed { reason: String },

    /// Sensor returned a non-finite value (NaN or infinity)
    #[error("Sensor returned a non-finite value")]
    InvalidReading,

    /// Scripted source has no values left
    #[error("Sensor source exhausted after {yielded} values")]
    Exhausted { yielded: usize },
}

/// Errors scrolling a message on the display collaborator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DisplayError {
    /// Display is closed or disconnected
    #[error("Display unavailable: {reason}")]
    Unavailable { reason: String },

    /// The scroll animation failed partway
    #[error("Scroll failed: {reason}")]
    ScrollFailed { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MonitorError::Sensor(SensorError::Exhausted { yielded: 7 });
        let msg = format!("{}", err);
        assert!(msg.contains("exhausted"));
        assert!(msg.contains('7'));
    }

    #[test]
    fn test_error_conversion() {
        let sensor_err = SensorError::InvalidReading;
        let monitor_err: MonitorError = sensor_err.into();
        assert!(matches!(monitor_err, MonitorError::Sensor(_)));
    }

    #[test]
    fn test_io_error_carries_message() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe gone");
        let monitor_err: MonitorError = io_err.into();
        assert_eq!(monitor_err, MonitorError::Io("pipe gone".to_string()));
    }
}
