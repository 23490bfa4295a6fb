use thiserror::Error;

/// Top-level error type for winding generation.
#[derive(Debug, Error)]
pub enum WindingError {
    #[error(transparent)]
    InvalidParameter(#[from] ParameterError),

    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Structural preconditions on [`SpiralParameters`](crate::params::SpiralParameters).
///
/// Raised before the first primitive is emitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    #[error("parameter {parameter} = {value} must be positive")]
    NotPositive { parameter: &'static str, value: i64 },

    #[error("parameter {parameter} = {value} must not be negative")]
    Negative { parameter: &'static str, value: i64 },

    #[error("winding extent does not fit the coordinate range")]
    ExtentOverflow,

    #[error("unknown start position: {0:?}")]
    UnknownStartPosition(String),
}

/// Errors raised by a [`SegmentSink`](crate::sink::SegmentSink) implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    #[error("sink rejected {primitive}: {reason}")]
    Rejected {
        primitive: &'static str,
        reason: String,
    },
}

/// Convenience type alias for results using [`WindingError`].
pub type Result<T> = std::result::Result<T, WindingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_error_message_names_the_field() {
        let err: WindingError = ParameterError::NotPositive {
            parameter: "outer_width",
            value: 0,
        }
        .into();
        assert_eq!(err.to_string(), "parameter outer_width = 0 must be positive");
        assert!(matches!(err, WindingError::InvalidParameter(_)));
    }

    #[test]
    fn sink_error_is_transparent() {
        let err: WindingError = SinkError::Rejected {
            primitive: "arc",
            reason: "layer locked".into(),
        }
        .into();
        assert_eq!(err.to_string(), "sink rejected arc: layer locked");
    }

    #[test]
    fn extent_overflow_is_a_parameter_error() {
        let err: WindingError = ParameterError::ExtentOverflow.into();
        assert!(matches!(
            err,
            WindingError::InvalidParameter(ParameterError::ExtentOverflow)
        ));
    }
}
