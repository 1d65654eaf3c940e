// Text humanization engine
// Deterministic surface rewriting of LLM-drafted prose: contraction folding, idiom
// substitution, and a heuristic active/passive voice rewrite. No I/O, no LLM calls.

use thiserror::Error;

pub mod handlers;
pub mod input;
pub mod tables;
pub mod transformer;
pub mod voice;

pub use input::TextInput;
pub use tables::PhraseTable;
pub use transformer::{TextStyleTransformer, TransformOutcome};
pub use voice::TargetVoice;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("Invalid phrase in {table} table: {reason}")]
    InvalidPhrase { table: &'static str, reason: String },

    #[error("Pattern compile error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Input is {len} bytes, limit is {max}")]
    InputTooLarge { len: usize, max: usize },

    #[error("Unsupported target voice '{0}' (expected 'active' or 'passive')")]
    InvalidVoiceTarget(String),

    #[error("Transform panicked: {0}")]
    Panicked(String),
}
