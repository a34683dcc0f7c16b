//! AI Image Analyzer Common Library
//!
//! Web(WASM)フロントエンドと共有される型・検証・パースロジック

pub mod effect;
pub mod error;
pub mod flow;
pub mod parser;
pub mod strength;
pub mod types;
pub mod validate;

pub use effect::EffectKind;
pub use error::{Error, Result};
pub use flow::FlowState;
pub use parser::{parse_analyze, parse_generate, parse_process};
pub use strength::{strength_percent, STRENGTH_DEFAULT, STRENGTH_MAX, STRENGTH_MIN};
pub use types::{Analysis, AnalyzeReply, GenerateReply, ProcessReply};
pub use validate::{validate_image_selected, validate_original_path, validate_prompt};
