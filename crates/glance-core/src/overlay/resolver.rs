use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::OverlayConfig;
use crate::detect::RegionDetector;
use crate::error::Result;
use crate::geometry::{BoundingBox, CoordSpace};
use crate::io::crop::{crop_raster, CropRect, WHITE};
use crate::io::image_io::encode_jpeg;
use crate::oracle::{OracleTransport, RecognitionOracle, RecognizedItem};
use crate::raster::RgbaRaster;
use crate::viewport::{screen_rect_to_image, ViewState};

use super::merge::merge;
use super::session::{ManualTicket, OverlaySession};
use super::sink::{NullSink, TranslationRecord, TranslationSink};
use super::types::OverlayResult;

/// Turns selections and whole frames into overlay items.
///
/// Manual mode crops the selected image rectangle and asks the oracle for a
/// single block. Auto mode runs the region detector and a full-frame oracle
/// call side by side and merges their outputs.
pub struct OcrResolver {
    oracle: RecognitionOracle,
    detector: RegionDetector,
    config: OverlayConfig,
    sink: Arc<dyn TranslationSink>,
}

impl OcrResolver {
    pub fn new(transport: Arc<dyn OracleTransport>, config: OverlayConfig) -> Self {
        Self {
            oracle: RecognitionOracle::new(transport),
            detector: RegionDetector::new(config.detector.clone()),
            config,
            sink: Arc::new(NullSink),
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn TranslationSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Recognize the pixels under a screen-space selection.
    ///
    /// A placeholder is appended to the session first, then completed in place
    /// with the oracle's answer or an error message. Blocks for one oracle call.
    pub fn resolve_manual(
        &self,
        session: &OverlaySession,
        raster: &RgbaRaster,
        selection: &BoundingBox,
        view: &ViewState,
    ) -> ManualTicket {
        let image_rect = screen_rect_to_image(selection, view);
        let ticket = session.begin_manual(
            self.config.manual.result_bbox(&image_rect),
            CoordSpace::Image,
        );
        debug!(?selection, ?image_rect, ?ticket, "Manual selection mapped");

        let outcome = self
            .recognize_selection(raster, &image_rect)
            .map_err(|e| e.to_string());
        if let Err(message) = &outcome {
            warn!(error = %message, "Manual recognition failed");
        }

        if session.complete_manual(ticket, &outcome) {
            if let Ok(item) = &outcome {
                self.record(session.source_key(), image_rect, item);
            }
        }
        ticket
    }

    fn recognize_selection(
        &self,
        raster: &RgbaRaster,
        image_rect: &BoundingBox,
    ) -> Result<RecognizedItem> {
        let crop = crop_raster(raster, &CropRect::from_bbox(image_rect), WHITE)?;
        let encoded = encode_jpeg(&crop, self.config.manual.jpeg_quality)?;
        Ok(self
            .oracle
            .recognize(&encoded, &self.config.target_language)?)
    }

    /// Detect regions and recognize the whole frame concurrently, then merge.
    ///
    /// Never fails: a detector error degrades to "no regions", an oracle error
    /// to a single fallback item carrying the message.
    pub fn scan_frame(&self, raster: &RgbaRaster) -> Vec<OverlayResult> {
        self.scan(raster).0
    }

    /// Scan results plus whether the oracle answered.
    fn scan(&self, raster: &RgbaRaster) -> (Vec<OverlayResult>, bool) {
        if raster.is_empty() {
            debug!("Empty frame; nothing to scan");
            return (Vec::new(), false);
        }

        let (regions, recognized) = rayon::join(
            || self.detector.detect(raster),
            || self.recognize_frame(raster),
        );

        let boxes: Vec<BoundingBox> = match regions {
            Ok(regions) => regions.into_iter().map(|r| r.bbox).collect(),
            Err(e) => {
                warn!(error = %e, "Region detection failed; using fallback layout");
                Vec::new()
            }
        };

        let frame_w = raster.width() as f64;
        let frame_h = raster.height() as f64;

        match recognized {
            Ok(items) => {
                info!(
                    regions = boxes.len(),
                    items = items.len(),
                    transport = self.oracle.transport_name(),
                    "Frame scan complete"
                );
                (merge(boxes, items, frame_w, frame_h, &self.config.merge), true)
            }
            Err(e) => {
                warn!(error = %e, "Full-frame recognition failed");
                let bbox = self.config.merge.fallback.bbox(frame_w, frame_h);
                let mut item = OverlayResult::error(e, bbox, CoordSpace::Image);
                item.is_fallback = true;
                (vec![item], false)
            }
        }
    }

    fn recognize_frame(&self, raster: &RgbaRaster) -> Result<Vec<RecognizedItem>> {
        let encoded = encode_jpeg(raster, self.config.auto_jpeg_quality)?;
        Ok(self
            .oracle
            .recognize_many(&encoded, &self.config.target_language)?)
    }

    /// Run [`Self::scan_frame`] under the session's auto generation.
    ///
    /// Returns `false` if a newer scan or a clear superseded this one.
    pub fn resolve_auto(&self, session: &OverlaySession, raster: &RgbaRaster) -> bool {
        let placeholder = self
            .config
            .merge
            .fallback
            .bbox(raster.width() as f64, raster.height() as f64);
        let generation = session.begin_auto(placeholder);

        let (results, recognized) = self.scan(raster);
        let recorded: Vec<(BoundingBox, RecognizedItem)> = if recognized {
            results
                .iter()
                .map(|r| (r.bbox, RecognizedItem::new(r.text.clone(), r.translation.clone())))
                .collect()
        } else {
            Vec::new()
        };

        let applied = session.finish_auto(generation, results);
        if applied {
            let source_key = session.source_key();
            for (bbox, item) in &recorded {
                self.record(source_key.clone(), *bbox, item);
            }
        }
        applied
    }

    fn record(&self, source_key: Option<String>, bbox: BoundingBox, item: &RecognizedItem) {
        self.sink.record(TranslationRecord {
            source_key,
            bbox,
            text: item.original_text.clone(),
            translation: item.translated_text.clone(),
            language: self.config.target_language.clone(),
        });
    }
}

impl std::fmt::Debug for OcrResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OcrResolver")
            .field("oracle", &self.oracle)
            .field("config", &self.config)
            .finish()
    }
}
