//! Phrase tables: ordered formal → casual substitutions, compiled once at engine construction.

use regex::{NoExpand, Regex};

use crate::humanize::TransformError;

/// Formal phrases folded into their contracted form.
///
/// Order matters where keys overlap: `are not` must run before `you are`/`they are`
/// so "you are not" becomes "you aren't" rather than "you're not".
pub const CONTRACTIONS: &[(&str, &str)] = &[
    ("cannot", "can't"),
    ("will not", "won't"),
    ("shall not", "shan't"),
    ("do not", "don't"),
    ("does not", "doesn't"),
    ("did not", "didn't"),
    ("is not", "isn't"),
    ("are not", "aren't"),
    ("was not", "wasn't"),
    ("have not", "haven't"),
    ("has not", "hasn't"),
    ("I am", "I'm"),
    ("you are", "you're"),
    ("they are", "they're"),
];

/// Formal transitional phrases swapped for casual equivalents.
pub const IDIOMS: &[(&str, &str)] = &[
    ("in addition", "on top of that"),
    ("for example", "like"),
    ("therefore", "so"),
    ("however", "though"),
    ("nevertheless", "still"),
    ("subsequently", "then"),
    ("furthermore", "also"),
    ("in conclusion", "to wrap things up"),
];

/// A single compiled substitution.
#[derive(Debug, Clone)]
struct PhraseRule {
    #[cfg(test)]
    formal: String,
    pattern: Regex,
    replacement: String,
}

/// An ordered, immutable set of whole-phrase substitutions.
#[derive(Debug, Clone)]
pub struct PhraseTable {
    rules: Vec<PhraseRule>,
}

impl PhraseTable {
    /// Compiles each `(formal, replacement)` pair into a case-insensitive whole-phrase pattern.
    /// Entries keep their given order.
    pub fn new<S, R>(name: &'static str, entries: &[(S, R)]) -> Result<Self, TransformError>
    where
        S: AsRef<str>,
        R: AsRef<str>,
    {
        let rules = entries
            .iter()
            .map(|(formal, replacement)| -> Result<PhraseRule, TransformError> {
                let formal = AsRef::<str>::as_ref(formal).trim();
                if formal.is_empty() {
                    return Err(TransformError::InvalidPhrase {
                        table: name,
                        reason: "formal phrase cannot be empty".to_string(),
                    });
                }
                let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(formal)))?;
                Ok(PhraseRule {
                    #[cfg(test)]
                    formal: formal.to_string(),
                    pattern,
                    replacement: AsRef::<str>::as_ref(replacement).to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rules })
    }

    pub fn contractions() -> Result<Self, TransformError> {
        Self::new("contractions", CONTRACTIONS)
    }

    pub fn idioms() -> Result<Self, TransformError> {
        Self::new("idioms", IDIOMS)
    }

    /// Applies every rule once, in order, each scanning the whole accumulated text.
    /// Replacements are inserted literally.
    pub fn apply(&self, text: &str) -> String {
        let mut result = text.to_string();

        for rule in &self.rules {
            if rule.pattern.is_match(&result) {
                result = rule
                    .pattern
                    .replace_all(&result, NoExpand(&rule.replacement))
                    .into_owned();
            }
        }

        result
    }
}

#[cfg(test)]
impl PhraseTable {
    fn len(&self) -> usize {
        self.rules.len()
    }

    fn contains(&self, phrase: &str) -> bool {
        self.rules
            .iter()
            .any(|r| r.formal.eq_ignore_ascii_case(phrase.trim()))
    }
}
