//! Heuristic active/passive voice rewriting.
//!
//! Pattern-based, not grammar-based. A chunk is rewritten only when it has the coarse
//! `<noun> <verb words> <noun>` (or `<noun> was <verb words> by <noun>`) shape, where a
//! noun is one word with an optional leading determiner. Anything else is passed through.

use std::fmt;
use std::str::FromStr;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::humanize::TransformError;

/// Literal separator used both to split text into chunks and to rejoin them.
pub const SENTENCE_SEPARATOR: &str = ". ";

const DETERMINERS: &[&str] = &["the", "a", "an"];

const ACTIVE_SHAPE: &str = r"(?i)^(?P<subject>(?:(?:the|a|an)\s+)?\w+)\s+(?P<verb>\w+(?:\s+\w+)*?)\s+(?P<object>(?:(?:the|a|an)\s+)?\w+)(?P<tail>[.!?]*)$";

const PASSIVE_SHAPE: &str = r"(?i)^(?P<object>(?:(?:the|a|an)\s+)?\w+)\s+was\s+(?P<verb>\w+(?:\s+\w+)*?)\s+by\s+(?P<subject>(?:(?:the|a|an)\s+)?\w+)(?P<tail>[.!?]*)$";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetVoice {
    Active,
    Passive,
}

impl TargetVoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetVoice::Active => "active",
            TargetVoice::Passive => "passive",
        }
    }
}

impl fmt::Display for TargetVoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetVoice {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(TargetVoice::Active),
            "passive" => Ok(TargetVoice::Passive),
            _ => Err(TransformError::InvalidVoiceTarget(s.to_string())),
        }
    }
}

/// Compiled voice patterns. Built once and shared read-only.
#[derive(Debug, Clone)]
pub struct VoiceRewriter {
    active_shape: Regex,
    passive_shape: Regex,
}

impl VoiceRewriter {
    pub fn new() -> Result<Self, TransformError> {
        Ok(Self {
            active_shape: Regex::new(ACTIVE_SHAPE)?,
            passive_shape: Regex::new(PASSIVE_SHAPE)?,
        })
    }

    /// Splits on `". "`, rewrites each matching chunk toward `target`, and rejoins.
    pub fn rewrite(&self, text: &str, target: TargetVoice) -> String {
        text.split(SENTENCE_SEPARATOR)
            .map(|chunk| self.rewrite_chunk(chunk, target))
            .collect::<Vec<_>>()
            .join(SENTENCE_SEPARATOR)
    }

    fn rewrite_chunk(&self, chunk: &str, target: TargetVoice) -> String {
        let rewritten = match target {
            TargetVoice::Passive => self.active_shape.captures(chunk).map(|c| to_passive(&c)),
            TargetVoice::Active => self.passive_shape.captures(chunk).map(|c| to_active(&c)),
        };

        match rewritten {
            Some(r) if starts_uppercase(chunk) => capitalize_first(&r),
            Some(r) => r,
            None => chunk.to_string(),
        }
    }
}

/// `<subject> <verb> <object>` → `<object> was <verb> by <subject>`
fn to_passive(caps: &Captures) -> String {
    format!(
        "{} was {} by {}{}",
        &caps["object"],
        &caps["verb"],
        demote_determiner(&caps["subject"]),
        &caps["tail"]
    )
}

/// `<object> was <verb> by <subject>` → `<subject> <verb> <object>`
fn to_active(caps: &Captures) -> String {
    format!(
        "{} {} {}{}",
        &caps["subject"],
        &caps["verb"],
        demote_determiner(&caps["object"]),
        &caps["tail"]
    )
}

/// Lowercases a leading determiner that is leaving sentence-initial position.
/// Other words keep their case so proper nouns survive.
fn demote_determiner(phrase: &str) -> String {
    match phrase.split_once(char::is_whitespace) {
        Some((first, rest)) if DETERMINERS.iter().any(|d| d.eq_ignore_ascii_case(first)) => {
            format!("{} {}", first.to_ascii_lowercase(), rest.trim_start())
        }
        _ => phrase.to_string(),
    }
}

fn starts_uppercase(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_uppercase)
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
