//! Error types for telemetry acquisition and decoding.
//!
//! Acquisition failures are recoverable by design: the simulator may simply not
//! be running yet, so a failed channel stays unready and init can be retried.
//! Reading an unready channel is a caller error surfaced as [`TelemetryError::NotReady`].

use thiserror::Error;

use crate::schema::Channel;

#[cfg(windows)]
use windows_core as core;

/// Result type alias for telemetry operations.
pub type Result<T, E = TelemetryError> = std::result::Result<T, E>;

/// Main error type for telemetry operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TelemetryError {
    #[error("Failed to acquire shared memory for {channel} channel: {operation}")]
    Acquisition {
        channel: Channel,
        operation: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("{channel} channel read before successful initialization")]
    NotReady { channel: Channel },

    #[error("Invalid channel schema: {details}")]
    Schema { details: String },

    #[error("{feature} is only available on {required_platform}")]
    UnsupportedPlatform { feature: String, required_platform: String },
}

impl TelemetryError {
    /// Returns whether this error is potentially recoverable through retry.
    ///
    /// Acquisition can fail merely because the simulator has not created the
    /// page yet; calling init again later may succeed. The other variants are
    /// programming or configuration errors.
    pub fn is_retryable(&self) -> bool {
        match self {
            TelemetryError::Acquisition { .. } => true,
            TelemetryError::NotReady { .. } => false,
            TelemetryError::Schema { .. } => false,
            TelemetryError::UnsupportedPlatform { .. } => false,
        }
    }

    /// Helper constructor for acquisition failures without an OS-level source.
    pub fn acquisition_failed(channel: Channel, operation: impl Into<String>) -> Self {
        TelemetryError::Acquisition { channel, operation: operation.into(), source: None }
    }

    /// Helper constructor for acquisition failures carrying the OS error.
    #[cfg(windows)]
    pub fn acquisition_failed_with_source(
        channel: Channel,
        operation: impl Into<String>,
        source: core::Error,
    ) -> Self {
        TelemetryError::Acquisition {
            channel,
            operation: operation.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Helper constructor for reads against an unacquired channel.
    pub fn not_ready(channel: Channel) -> Self {
        TelemetryError::NotReady { channel }
    }

    /// Helper constructor for unsupported platform errors.
    pub fn unsupported_platform(
        feature: impl Into<String>,
        required_platform: impl Into<String>,
    ) -> Self {
        TelemetryError::UnsupportedPlatform {
            feature: feature.into(),
            required_platform: required_platform.into(),
        }
    }
}
