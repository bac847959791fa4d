use serde::{Deserialize, Serialize};

use crate::geometry::BoundingBox;

/// One completed translation, as handed to a [`TranslationSink`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TranslationRecord {
    /// Identifies the media the text came from (typically its path).
    pub source_key: Option<String>,
    /// Image-space box of the text.
    pub bbox: BoundingBox,
    pub text: String,
    pub translation: String,
    pub language: String,
}

/// Receives completed translations. Fire-and-forget: failures stay inside
/// the sink.
pub trait TranslationSink: Send + Sync {
    fn record(&self, record: TranslationRecord);
}

/// Discards every record.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl TranslationSink for NullSink {
    fn record(&self, _record: TranslationRecord) {}
}
