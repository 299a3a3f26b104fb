//! Raw submission parsing.
//!
//! A submission has the shape `<device_id>:<epoch_ms>:'Temperature':<value>`,
//! e.g. `365951380:1640995229697:'Temperature':58.48256793121914`. Parsing
//! runs as a fixed sequence of stages and stops at the first one that fails,
//! so the returned [`ParseError`] identifies the stage.

use serde::Serialize;

use crate::error::ParseError;
use crate::time;

/// The temperature marker spellings, in the order they are looked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `:Temperature:`
    Bare,
    /// `:'Temperature':`
    Quoted,
    /// A quoted marker whose quotes arrived backslash-escaped.
    Escaped,
}

impl Marker {
    pub const PRIORITY: [Marker; 3] = [Marker::Bare, Marker::Quoted, Marker::Escaped];

    /// Substring whose presence selects this marker.
    pub fn needle(self) -> &'static str {
        match self {
            Marker::Bare => ":Temperature:",
            Marker::Quoted => ":'Temperature':",
            Marker::Escaped => r#"":\'Temperature:\'""#,
        }
    }

    /// Separator the submission is split on once this marker is selected.
    ///
    /// The escaped spelling is treated as the quoted one.
    pub fn separator(self) -> &'static str {
        match self {
            Marker::Bare => ":Temperature:",
            Marker::Quoted | Marker::Escaped => ":'Temperature':",
        }
    }

    /// First marker (by priority) that occurs in `raw`.
    pub fn detect(raw: &str) -> Option<Marker> {
        Self::PRIORITY
            .into_iter()
            .find(|marker| raw.contains(marker.needle()))
    }
}

/// A validated temperature reading.
///
/// Only [`parse`] builds one, so the epoch is always non-zero and renderable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetryReading {
    device_id: String,
    epoch_millis: i64,
    temperature: f64,
}

impl TelemetryReading {
    /// Token before the epoch field, kept verbatim.
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// Milliseconds since the Unix epoch.
    pub fn epoch_millis(&self) -> i64 {
        self.epoch_millis
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }
}

/// Parse one raw submission.
///
/// Deliberately permissive beyond the stages below: the device id need not be
/// numeric, negative epochs are accepted and the temperature is not
/// range-checked.
pub fn parse(raw: &str) -> Result<TelemetryReading, ParseError> {
    let marker = Marker::detect(raw).ok_or(ParseError::NoTemperatureMarker)?;

    let fields: Vec<&str> = raw.split(marker.separator()).collect();
    let [prefix, value] = fields[..] else {
        return Err(ParseError::MalformedMarkerSplit {
            parts: fields.len(),
        });
    };

    let device_fields: Vec<&str> = prefix.split(':').collect();
    let [device_id, epoch] = device_fields[..] else {
        return Err(ParseError::MalformedDeviceField {
            parts: device_fields.len(),
        });
    };

    let epoch_millis = parse_epoch(epoch)?;

    let temperature = parse_temperature(value)?;

    Ok(TelemetryReading {
        device_id: device_id.to_string(),
        epoch_millis,
        temperature,
    })
}

/// Base-10 epoch milliseconds. Zero and values that cannot be rendered as a
/// calendar time are rejected.
fn parse_epoch(epoch: &str) -> Result<i64, ParseError> {
    match epoch.parse::<i64>() {
        Ok(millis) if millis != 0 && time::epoch_millis_to_utc(millis).is_some() => Ok(millis),
        _ => Err(ParseError::InvalidEpoch(epoch.to_string())),
    }
}

/// `f64` text. Literals that overflow to infinity are rejected; only
/// a spelled-out `inf`/`infinity` may produce one.
fn parse_temperature(value: &str) -> Result<f64, ParseError> {
    match value.parse::<f64>() {
        Ok(t) if !t.is_infinite() || spells_infinity(value) => Ok(t),
        _ => Err(ParseError::InvalidTemperature(value.to_string())),
    }
}

fn spells_infinity(value: &str) -> bool {
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    const SAMPLE: &str = "365951380:1640995229697:'Temperature':58.48256793121914";

    #[test]
    fn parses_quoted_marker() {
        let reading = parse(SAMPLE).unwrap();
        assert_eq!(reading.device_id(), "365951380");
        assert_eq!(reading.epoch_millis(), 1_640_995_229_697);
        assert_eq!(reading.temperature(), 58.48256793121914);
    }

    #[test]
    fn parses_bare_marker() {
        let reading = parse("7:1640995229697:Temperature:-3.5").unwrap();
        assert_eq!(reading.device_id(), "7");
        assert_eq!(reading.temperature(), -3.5);
    }

    #[test]
    fn device_id_is_not_required_to_be_numeric() {
        let reading = parse("sensor-a:1640995229697:'Temperature':20").unwrap();
        assert_eq!(reading.device_id(), "sensor-a");
    }

    #[test]
    fn accepts_negative_epoch() {
        let reading = parse("1:-1000:'Temperature':20").unwrap();
        assert_eq!(reading.epoch_millis(), -1000);
    }

    #[test]
    fn bare_marker_takes_priority() {
        assert_eq!(
            Marker::detect("1:2:Temperature:3 and :'Temperature':"),
            Some(Marker::Bare)
        );
        assert_eq!(Marker::detect(SAMPLE), Some(Marker::Quoted));
        assert_eq!(Marker::detect("nothing here"), None);
    }

    #[test]
    fn escaped_marker_splits_on_quoted_separator() {
        assert_eq!(Marker::Escaped.separator(), Marker::Quoted.separator());
        // The escaped needle is present but the quoted separator is not.
        let raw = r#"1:2":\'Temperature:\'"3"#;
        assert_eq!(Marker::detect(raw), Some(Marker::Escaped));
        assert_matches!(parse(raw), Err(ParseError::MalformedMarkerSplit { parts: 1 }));
    }

    #[test]
    fn rejects_misspelled_marker() {
        assert_matches!(
            parse("365951380:1640995229697:'TemperatureXX':110.48256793121914"),
            Err(ParseError::NoTemperatureMarker)
        );
        assert_matches!(
            parse("365951380:1640995229697:'Tempeure':1000.48"),
            Err(ParseError::NoTemperatureMarker)
        );
    }

    #[test]
    fn rejects_repeated_marker() {
        assert_matches!(
            parse("1:2:'Temperature':3:'Temperature':4"),
            Err(ParseError::MalformedMarkerSplit { parts: 3 })
        );
    }

    #[test]
    fn rejects_wrong_device_field_count() {
        assert_matches!(
            parse("365951380640995229697:'Temperature':10.5"),
            Err(ParseError::MalformedDeviceField { parts: 1 })
        );
        assert_matches!(
            parse("a:b:1640995229697:'Temperature':10.5"),
            Err(ParseError::MalformedDeviceField { parts: 3 })
        );
    }

    #[test]
    fn rejects_bad_epochs() {
        assert_matches!(
            parse("1:0:'Temperature':10.5"),
            Err(ParseError::InvalidEpoch(e)) if e == "0"
        );
        assert_matches!(
            parse("1:12ab:'Temperature':10.5"),
            Err(ParseError::InvalidEpoch(_))
        );
        assert_matches!(
            parse("1::'Temperature':10.5"),
            Err(ParseError::InvalidEpoch(_))
        );
        assert_matches!(
            parse(&format!("1:{}:'Temperature':10.5", i64::MAX)),
            Err(ParseError::InvalidEpoch(_))
        );
    }

    #[test]
    fn rejects_bad_temperature() {
        assert_matches!(
            parse("365951380:1640995229697:'Temperature':sd.48256793121914"),
            Err(ParseError::InvalidTemperature(v)) if v == "sd.48256793121914"
        );
        assert_matches!(
            parse("1:1640995229697:'Temperature':"),
            Err(ParseError::InvalidTemperature(_))
        );
    }

    #[test]
    fn rejects_overflowing_temperature() {
        assert_matches!(
            parse("1:1640995229697:'Temperature':1e400"),
            Err(ParseError::InvalidTemperature(v)) if v == "1e400"
        );
        assert_matches!(
            parse("1:1640995229697:'Temperature':-1e400"),
            Err(ParseError::InvalidTemperature(_))
        );
    }

    #[test]
    fn accepts_spelled_out_infinity() {
        for value in ["inf", "+Inf", "-infinity"] {
            let reading = parse(&format!("1:1640995229697:'Temperature':{value}")).unwrap();
            assert!(reading.temperature().is_infinite(), "{value}");
        }
    }

    #[test]
    fn epoch_is_checked_before_temperature() {
        assert_matches!(
            parse("1:0:'Temperature':not-a-number"),
            Err(ParseError::InvalidEpoch(_))
        );
    }

    #[test]
    fn parsing_is_deterministic() {
        let inputs = [
            SAMPLE,
            "1:0:'Temperature':1",
            "garbage",
            "1:2:'Temperature':x",
        ];
        for raw in inputs {
            assert_eq!(parse(raw), parse(raw));
        }
    }
}
