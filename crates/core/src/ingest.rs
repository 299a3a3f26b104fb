//! Parse-then-classify entry point used by request handlers.

use crate::classify::{classify, Classification};
use crate::error::ParseError;
use crate::error_log::ErrorLog;
use crate::reading::parse;

/// Parse and classify one raw submission.
///
/// On failure `raw` has already been archived in `errors` when this returns,
/// whichever stage rejected it.
pub fn parse_and_classify(raw: &str, errors: &ErrorLog) -> Result<Classification, ParseError> {
    let reading = match parse(raw) {
        Ok(reading) => reading,
        Err(err) => {
            tracing::warn!(kind = err.kind(), error = %err, raw, "Rejected telemetry submission");
            errors.push(raw);
            return Err(err);
        }
    };

    let classification = classify(&reading);
    if classification.is_over_temperature() {
        tracing::info!(
            device_id = %reading.device_id(),
            temperature = reading.temperature(),
            epoch_millis = reading.epoch_millis(),
            "Over-temperature reading",
        );
    } else {
        tracing::debug!(device_id = %reading.device_id(), temperature = reading.temperature(), "Normal reading");
    }

    Ok(classification)
}
