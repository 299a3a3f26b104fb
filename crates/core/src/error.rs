/// Reasons a raw submission can be rejected by [`crate::reading::parse`].
///
/// Variants are listed in the order the parser checks them; the first stage
/// that fails determines the variant. Callers outside the core only ever see a
/// uniform "bad request", so these exist for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("No temperature keyword")]
    NoTemperatureMarker,

    #[error("Wrong format: expected exactly one temperature marker, found {parts} parts")]
    MalformedMarkerSplit { parts: usize },

    #[error("Wrong format: device fields, expected 2 got {parts}")]
    MalformedDeviceField { parts: usize },

    #[error("Wrong format: epoch time {0:?}")]
    InvalidEpoch(String),

    #[error("Wrong format: parse float {0:?}")]
    InvalidTemperature(String),
}

impl ParseError {
    /// Short stable name for the failing stage, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::NoTemperatureMarker => "no_temperature_marker",
            ParseError::MalformedMarkerSplit { .. } => "malformed_marker_split",
            ParseError::MalformedDeviceField { .. } => "malformed_device_field",
            ParseError::InvalidEpoch(_) => "invalid_epoch",
            ParseError::InvalidTemperature(_) => "invalid_temperature",
        }
    }
}
