//! Destinations for completed records
//!
//! The pipeline only returns records; whatever drives it forwards them to a
//! sink keyed by its own target identifier (e.g. a page id to update).

use crate::record::Record;
use crate::MetaError;
use serde::Serialize;
use std::io::Write;

/// Receives completed records for a target
pub trait RecordSink {
    /// Delivers `record` for `target_id`
    fn update_record(&mut self, target_id: &str, record: &Record) -> Result<(), MetaError>;
}

#[derive(Serialize)]
struct Line<'a> {
    target: &'a str,
    record: &'a Record,
}

/// Writes one `{"target": ..., "record": ...}` JSON object per line
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Number of records written so far
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RecordSink for JsonLinesSink<W> {
    fn update_record(&mut self, target_id: &str, record: &Record) -> Result<(), MetaError> {
        let line = Line {
            target: target_id,
            record,
        };
        serde_json::to_writer(&mut self.writer, &line)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        self.written += 1;
        Ok(())
    }
}
