use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use glance_core::overlay::{TranslationRecord, TranslationSink};
use tracing::warn;

/// Appends one JSON object per completed translation.
pub struct JsonLinesSink {
    writer: Mutex<BufWriter<File>>,
}

impl JsonLinesSink {
    pub fn append(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open record file {}", path.display()))?;
        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
        })
    }
}

impl TranslationSink for JsonLinesSink {
    fn record(&self, record: TranslationRecord) {
        let line = match serde_json::to_string(&record) {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "Could not serialize translation record");
                return;
            }
        };
        let Ok(mut writer) = self.writer.lock() else {
            warn!("Record file writer poisoned; dropping record");
            return;
        };
        if let Err(e) = writeln!(writer, "{line}").and_then(|_| writer.flush()) {
            warn!(error = %e, "Could not write translation record");
        }
    }
}
