pub mod client;
pub mod normalize;
pub mod prompt;
pub mod types;

pub use client::{OracleTransport, RecognitionOracle};
pub use normalize::{normalize, normalize_single, DecodeTier, Normalized};
pub use types::{OracleError, OracleRequest, RecognizedItem, ResponseShape};
