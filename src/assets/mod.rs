pub mod payload;
pub mod writer;

pub use payload::{is_png, PLACEHOLDER_PNG, PNG_SIGNATURE};
pub use writer::{
    ConfigSnapshot, GenerationProgress, GenerationReport, GenerationSummary, IconFileInfo,
    IconWriter,
};
