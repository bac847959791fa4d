use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::io::image_io::EncodedImage;

/// One recognized text block and its translation. No positional data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognizedItem {
    #[serde(
        rename = "originalText",
        alias = "original_text",
        alias = "original",
        alias = "text",
        default
    )]
    pub original_text: String,
    #[serde(
        rename = "translation",
        alias = "translatedText",
        alias = "translated_text",
        alias = "translated",
        default
    )]
    pub translated_text: String,
}

impl RecognizedItem {
    pub fn new(original_text: impl Into<String>, translated_text: impl Into<String>) -> Self {
        Self {
            original_text: original_text.into(),
            translated_text: translated_text.into(),
        }
    }
}

/// Whether the oracle is asked for one block or every block in reading order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseShape {
    Single,
    Many,
}

impl fmt::Display for ResponseShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Many => write!(f, "many"),
        }
    }
}

/// Everything a transport needs to perform one oracle round-trip.
#[derive(Debug)]
pub struct OracleRequest<'a> {
    pub image: &'a EncodedImage,
    pub prompt: String,
    pub target_language: &'a str,
    pub shape: ResponseShape,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OracleError {
    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Empty response from oracle")]
    EmptyResponse,

    #[error("Could not parse response: {0}")]
    Malformed(String),

    #[error("Oracle reported an error: {0}")]
    Reported(String),
}
