//! TextStyleTransformer: the engine behind the humanize and voice endpoints.
//!
//! Every public transform always yields usable text. Faults are logged and masked by
//! returning the caller's input unchanged ("fail open"); `humanize_outcome` and `process`
//! surface whether that happened.

use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

use crate::humanize::input::TextInput;
use crate::humanize::tables::PhraseTable;
use crate::humanize::voice::{TargetVoice, VoiceRewriter};
use crate::humanize::TransformError;

/// Default cap on input length, in bytes.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;

/// Result of a fail-open transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOutcome {
    pub text: String,
    pub succeeded: bool,
    pub fault: Option<String>,
}

impl TransformOutcome {
    fn applied(text: String) -> Self {
        Self {
            text,
            succeeded: true,
            fault: None,
        }
    }

    fn failed_open(original: &str, fault: &TransformError) -> Self {
        Self {
            text: original.to_string(),
            succeeded: false,
            fault: Some(fault.to_string()),
        }
    }
}

/// Immutable after construction; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct TextStyleTransformer {
    contractions: PhraseTable,
    idioms: PhraseTable,
    voice: VoiceRewriter,
    max_input_bytes: usize,
}

impl TextStyleTransformer {
    /// Builds the engine with the built-in contraction and idiom tables.
    pub fn new() -> Result<Self, TransformError> {
        Self::with_tables(PhraseTable::contractions()?, PhraseTable::idioms()?)
    }

    pub fn with_tables(
        contractions: PhraseTable,
        idioms: PhraseTable,
    ) -> Result<Self, TransformError> {
        Ok(Self {
            contractions,
            idioms,
            voice: VoiceRewriter::new()?,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        })
    }

    pub fn with_max_input_bytes(mut self, max_input_bytes: usize) -> Self {
        self.max_input_bytes = max_input_bytes;
        self
    }

    pub fn max_input_bytes(&self) -> usize {
        self.max_input_bytes
    }

    pub fn apply_contractions(&self, text: &str) -> String {
        self.contractions.apply(text)
    }

    pub fn apply_idioms(&self, text: &str) -> String {
        self.idioms.apply(text)
    }

    /// Contractions then idioms. Returns `text` unchanged on any internal fault.
    pub fn humanize(&self, text: &str) -> String {
        self.humanize_outcome(text).text
    }

    pub fn humanize_outcome(&self, text: &str) -> TransformOutcome {
        match self.try_humanize(text) {
            Ok(humanized) => {
                debug!(input_len = text.len(), output_len = humanized.len(), "Text humanized");
                TransformOutcome::applied(humanized)
            }
            Err(e) => {
                warn!(input_len = text.len(), "Humanization failed, returning original text: {e}");
                TransformOutcome::failed_open(text, &e)
            }
        }
    }

    /// Coerces a loosely-typed input to text, then humanizes it.
    pub fn humanize_input(&self, input: &TextInput) -> String {
        self.humanize(&input.coerce())
    }

    /// Voice rewrite with a string selector. An unsupported selector returns `text` unchanged.
    pub fn transform_voice(&self, text: &str, target_voice: &str) -> String {
        match target_voice.parse::<TargetVoice>() {
            Ok(target) => self.rewrite_voice(text, target),
            Err(e) => {
                warn!("Skipping voice transform: {e}");
                text.to_string()
            }
        }
    }

    pub fn rewrite_voice(&self, text: &str, target: TargetVoice) -> String {
        let result = self
            .check_len(text)
            .and_then(|()| catch_fault(|| self.voice.rewrite(text, target)));
        match result {
            Ok(rewritten) => {
                debug!(voice = %target, input_len = text.len(), "Voice transform applied");
                rewritten
            }
            Err(e) => {
                warn!(voice = %target, "Voice transform failed, returning original text: {e}");
                text.to_string()
            }
        }
    }

    /// Humanize, then optionally rewrite voice. The length limit applies to the caller's
    /// input only. A fault in either step returns the original input with `succeeded=false`.
    pub fn process(&self, text: &str, target: Option<TargetVoice>) -> TransformOutcome {
        let outcome = self.humanize_outcome(text);
        let target = match target {
            Some(target) if outcome.succeeded => target,
            _ => return outcome,
        };

        match catch_fault(|| self.voice.rewrite(&outcome.text, target)) {
            Ok(rewritten) => {
                debug!(voice = %target, input_len = text.len(), "Voice transform applied");
                TransformOutcome::applied(rewritten)
            }
            Err(e) => {
                warn!(voice = %target, "Voice transform failed, returning original text: {e}");
                TransformOutcome::failed_open(text, &e)
            }
        }
    }

    fn try_humanize(&self, text: &str) -> Result<String, TransformError> {
        self.check_len(text)?;
        catch_fault(|| self.apply_idioms(&self.apply_contractions(text)))
    }

    fn check_len(&self, text: &str) -> Result<(), TransformError> {
        if text.len() > self.max_input_bytes {
            return Err(TransformError::InputTooLarge {
                len: text.len(),
                max: self.max_input_bytes,
            });
        }
        Ok(())
    }
}

/// Turns a panic inside `f` into a `TransformError`.
fn catch_fault<F>(f: F) -> Result<String, TransformError>
where
    F: FnOnce() -> String,
{
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let detail = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        TransformError::Panicked(detail)
    })
}
