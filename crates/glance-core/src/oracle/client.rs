use std::sync::Arc;

use tracing::{debug, warn};

use super::normalize::{normalize, normalize_single, DecodeTier};
use super::prompt::{full_frame_prompt, single_region_prompt};
use super::types::{OracleError, OracleRequest, RecognizedItem, ResponseShape};
use crate::io::image_io::EncodedImage;

/// A way of delivering one image + prompt to a recognition/translation
/// service and getting its raw text response back.
pub trait OracleTransport: Send + Sync {
    fn name(&self) -> &str {
        "oracle"
    }

    /// Perform one round trip. Implementations block until the service answers.
    fn complete(&self, request: &OracleRequest<'_>) -> Result<String, OracleError>;
}

/// Wraps a transport with prompt construction and response normalization.
#[derive(Clone)]
pub struct RecognitionOracle {
    transport: Arc<dyn OracleTransport>,
}

impl RecognitionOracle {
    pub fn new(transport: Arc<dyn OracleTransport>) -> Self {
        Self { transport }
    }

    pub fn transport_name(&self) -> &str {
        self.transport.name()
    }

    /// Recognize and translate the single text block in `image`.
    pub fn recognize(
        &self,
        image: &EncodedImage,
        target_language: &str,
    ) -> Result<RecognizedItem, OracleError> {
        let request = OracleRequest {
            image,
            prompt: single_region_prompt(target_language),
            target_language,
            shape: ResponseShape::Single,
        };
        let raw = self.transport.complete(&request)?;
        let (item, tier) = normalize_single(&raw)?;
        self.note_tier(tier, ResponseShape::Single);
        Ok(item)
    }

    /// Recognize every text block in `image`, in reading order.
    pub fn recognize_many(
        &self,
        image: &EncodedImage,
        target_language: &str,
    ) -> Result<Vec<RecognizedItem>, OracleError> {
        let request = OracleRequest {
            image,
            prompt: full_frame_prompt(target_language),
            target_language,
            shape: ResponseShape::Many,
        };
        let raw = self.transport.complete(&request)?;
        let normalized = normalize(&raw)?;
        self.note_tier(normalized.tier, ResponseShape::Many);
        debug!(
            transport = self.transport.name(),
            items = normalized.items.len(),
            "Full-frame recognition complete"
        );
        Ok(normalized.items)
    }

    fn note_tier(&self, tier: DecodeTier, shape: ResponseShape) {
        if tier != DecodeTier::Strict {
            warn!(
                transport = self.transport.name(),
                %shape,
                ?tier,
                "Oracle response was not strict JSON; recovered leniently"
            );
        }
    }
}

impl std::fmt::Debug for RecognitionOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecognitionOracle")
            .field("transport", &self.transport.name())
            .finish()
    }
}
