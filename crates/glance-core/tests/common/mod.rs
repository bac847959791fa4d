#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use glance_core::oracle::{OracleError, OracleRequest, OracleTransport, ResponseShape};
use glance_core::overlay::{TranslationRecord, TranslationSink};
use glance_core::raster::RgbaRaster;

pub const WHITE: [u8; 4] = [255, 255, 255, 255];
pub const BLACK: [u8; 4] = [0, 0, 0, 255];

/// Band of text-like vertical stripes on a white page.
///
/// 4 px stripes alternate inside `x in 84..308, y in 80..198` of a 400x300
/// raster, so at half scale the band covers detector tiles (2..=7, 2..=4).
pub fn text_band_raster() -> RgbaRaster {
    let mut raster = RgbaRaster::filled(400, 300, WHITE);
    for y in 80..198 {
        for x in 84..308 {
            if ((x - 80) / 4) % 2 == 1 {
                raster.put_pixel(x, y, BLACK);
            }
        }
    }
    raster
}

/// Transport answering with canned payloads per response shape.
pub struct ScriptedTransport {
    pub single: Result<String, OracleError>,
    pub many: Result<String, OracleError>,
    pub calls: AtomicUsize,
    pub last_image_len: AtomicUsize,
}

impl ScriptedTransport {
    pub fn new(single: &str, many: &str) -> Self {
        Self {
            single: Ok(single.to_string()),
            many: Ok(many.to_string()),
            calls: AtomicUsize::new(0),
            last_image_len: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            single: Err(OracleError::Transport(message.to_string())),
            many: Err(OracleError::Transport(message.to_string())),
            calls: AtomicUsize::new(0),
            last_image_len: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl OracleTransport for ScriptedTransport {
    fn name(&self) -> &str {
        "scripted"
    }

    fn complete(&self, request: &OracleRequest<'_>) -> Result<String, OracleError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.last_image_len
            .store(request.image.bytes.len(), Ordering::SeqCst);
        match request.shape {
            ResponseShape::Single => self.single.clone(),
            ResponseShape::Many => self.many.clone(),
        }
    }
}

/// Sink that keeps every record for inspection.
#[derive(Default)]
pub struct RecordingSink {
    pub records: Mutex<Vec<TranslationRecord>>,
}

impl RecordingSink {
    pub fn records(&self) -> Vec<TranslationRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl TranslationSink for RecordingSink {
    fn record(&self, record: TranslationRecord) {
        self.records.lock().unwrap().push(record);
    }
}
