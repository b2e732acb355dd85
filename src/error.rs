//! Error types for a layout pass.

use std::path::PathBuf;

use thiserror::Error;

use crate::axis::AxisDirection;

/// Failures detected before any geometry is emitted.
#[derive(Error, Debug)]
pub enum ChartError {
    /// A non-positive value was fed to a logarithmic axis.
    #[error("series '{series}' has value {value} on logarithmic {axis} axis; values must be > 0")]
    Domain {
        axis: AxisDirection,
        series: String,
        value: f64,
    },

    #[error("series '{series}' has {x_len} X values but {y_len} Y values")]
    ShapeMismatch {
        series: String,
        x_len: usize,
        y_len: usize,
    },

    #[error("series '{series}' has {y_len} Y values but {error_len} error bars")]
    ErrorBarMismatch {
        series: String,
        y_len: usize,
        error_len: usize,
    },

    #[error("series '{series}' has non-finite {axis} value {value}")]
    NonFinite {
        axis: AxisDirection,
        series: String,
        value: f64,
    },

    #[error("series '{series}' has no data points")]
    EmptySeries { series: String },

    #[error("series '{series}' is already part of the chart")]
    DuplicateSeries { series: String },

    #[error("chart has no series to render")]
    NoSeries,

    #[error("plot bounds must have positive area, got {width}x{height}")]
    InvalidBounds { width: f32, height: f32 },

    #[error("invalid color '{0}'; expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),

    #[error("failed to parse style configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to read style configuration: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ChartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_names_axis_and_series() {
        let err = ChartError::Domain {
            axis: AxisDirection::Y,
            series: "latency".into(),
            value: -2.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("latency"));
        assert!(msg.contains("Y axis"));
        assert!(msg.contains("-2"));
    }

    #[test]
    fn shape_mismatch_reports_lengths() {
        let err = ChartError::ShapeMismatch {
            series: "a".into(),
            x_len: 3,
            y_len: 2,
        };
        assert_eq!(err.to_string(), "series 'a' has 3 X values but 2 Y values");
    }
}
