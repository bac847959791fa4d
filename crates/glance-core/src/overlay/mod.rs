pub mod merge;
pub mod resolver;
pub mod session;
pub mod sink;
pub mod types;

pub use merge::{merge, spatial_sort, FallbackLayout, MergeConfig};
pub use resolver::OcrResolver;
pub use session::{ManualTicket, OverlaySession};
pub use sink::{NullSink, TranslationRecord, TranslationSink};
pub use types::OverlayResult;
