//! Telemetry ingestion core.
//!
//! Parses raw `device:epoch:Temperature:value` submissions, classifies them
//! against the over-temperature threshold and archives rejected submissions
//! in a shared [`error_log::ErrorLog`]. No I/O happens here; the HTTP layer
//! lives in `tempwatch-api`.

pub mod classify;
pub mod error;
pub mod error_log;
pub mod ingest;
pub mod reading;
pub mod time;
