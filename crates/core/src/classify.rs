//! Over-temperature classification (pure logic).

use serde::Serialize;

use crate::reading::TelemetryReading;
use crate::time;

/// Readings strictly above this value are over temperature.
pub const TEMP_THRESHOLD: f64 = 90.0;

/// Outcome of classifying a parsed reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Normal,
    OverTemperature {
        device_id: String,
        /// Reading time rendered with [`time::TIME_LAYOUT`] in UTC.
        formatted_time: String,
    },
}

impl Classification {
    pub fn is_over_temperature(&self) -> bool {
        matches!(self, Classification::OverTemperature { .. })
    }
}

/// Apply the threshold policy. `90.0` itself is normal.
pub fn classify(reading: &TelemetryReading) -> Classification {
    if reading.temperature() > TEMP_THRESHOLD {
        Classification::OverTemperature {
            device_id: reading.device_id().to_string(),
            // The parser rejects epochs that do not format, so this never
            // falls back to the empty string.
            formatted_time: time::format_epoch(reading.epoch_millis()).unwrap_or_default(),
        }
    } else {
        Classification::Normal
    }
}

/// JSON body returned for a classified reading.
///
/// `{"overtemp": false}` or
/// `{"overtemp": true, "device_id": "...", "formatted_time": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResponse {
    pub overtemp: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_time: Option<String>,
}

impl From<Classification> for ClassificationResponse {
    fn from(classification: Classification) -> Self {
        match classification {
            Classification::Normal => Self {
                overtemp: false,
                device_id: None,
                formatted_time: None,
            },
            Classification::OverTemperature {
                device_id,
                formatted_time,
            } => Self {
                overtemp: true,
                device_id: Some(device_id),
                formatted_time: Some(formatted_time),
            },
        }
    }
}
