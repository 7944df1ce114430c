//! Rule-based local named-entity recognizer.
//!
//! [`NerModel`] recognizes a small set of entity categories with compiled
//! regular expressions. Patterns are tried in priority order and a later
//! pattern never claims text already covered by an earlier one:
//!
//! | Label     | Matches                                                        |
//! |-----------|----------------------------------------------------------------|
//! | `DATE`    | `March 3, 2024`, `Jan 2024`, `2024-01-31`, bare years 1900-2099 |
//! | `MONEY`   | `$5`, `€1,200.50`, `3 million dollars`                         |
//! | `PERCENT` | `20%`, `4.5 percent`                                           |
//! | `ORG`     | capitalized words ending in `Inc`, `Ltd`, `University`, ...    |
//! | `NAME`    | two to four capitalized words                                  |
//!
//! The model is process-wide: [`NerModel::shared`] compiles it on first use and
//! [`NerModel::unload`] releases it.

use crate::entities::{Entity, EntityRecognizer, EntitySource};
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info};

static SHARED_MODEL: Lazy<Mutex<Option<Arc<NerModel>>>> = Lazy::new(|| Mutex::new(None));

/// Capitalized words that start sentences or navigation text rather than names.
const NAME_STOP_WORDS: [&str; 24] = [
    "The", "A", "An", "This", "That", "These", "Those", "In", "On", "At", "For", "By", "And",
    "But", "Our", "We", "It", "Last", "Read", "Share", "Home", "About", "Yesterday", "Today",
];

/// Regex-based named-entity recognizer.
pub struct NerModel {
    patterns: Vec<(&'static str, Regex)>,
}

impl std::fmt::Debug for NerModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NerModel")
            .field(
                "labels",
                &self.patterns.iter().map(|(label, _)| *label).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Default for NerModel {
    fn default() -> Self {
        Self::new()
    }
}

impl NerModel {
    /// Compile a standalone model. Prefer [`NerModel::shared`] in long-lived code.
    pub fn new() -> Self {
        let patterns = vec![
            (
                "DATE",
                Regex::new(
                    r"\b(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|June?|July?|Aug(?:ust)?|Sep(?:t(?:ember)?)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)\.?(?:\s+\d{1,2}(?:st|nd|rd|th)?)?,?\s+\d{4}\b|\b\d{4}-\d{2}-\d{2}\b|\b(?:19|20)\d{2}\b",
                )
                .unwrap(),
            ),
            (
                "MONEY",
                Regex::new(
                    r"[$€£]\s?\d[\d,]*(?:\.\d+)?(?:\s(?:thousand|million|billion))?|\b\d[\d,]*(?:\.\d+)?\s(?:thousand\s|million\s|billion\s)?(?:dollars|euros|pounds)\b",
                )
                .unwrap(),
            ),
            (
                "PERCENT",
                Regex::new(r"\b\d+(?:\.\d+)?(?:%|\s?percent\b)").unwrap(),
            ),
            (
                "ORG",
                Regex::new(
                    r"\b(?:[A-Z][A-Za-z&'-]*\s+){1,4}(?:Inc|Corp|Corporation|LLC|Ltd|Company|Group|University|Institute|Association|Foundation|Agency|Society|Press)\b\.?",
                )
                .unwrap(),
            ),
            (
                "NAME",
                Regex::new(r"\b[A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+){1,3}\b").unwrap(),
            ),
        ];
        Self { patterns }
    }

    /// The process-wide model, compiled on first use.
    pub fn shared() -> Arc<NerModel> {
        let mut slot = SHARED_MODEL.lock().unwrap_or_else(PoisonError::into_inner);
        slot.get_or_insert_with(|| {
            info!("loading named-entity model");
            Arc::new(NerModel::new())
        })
        .clone()
    }

    /// Release the process-wide model. Returns `true` if one was loaded.
    ///
    /// Handles already returned by [`NerModel::shared`] stay valid.
    pub fn unload() -> bool {
        let released = SHARED_MODEL
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .is_some();
        if released {
            debug!("named-entity model unloaded");
        }
        released
    }

    pub fn is_loaded() -> bool {
        SHARED_MODEL
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl EntityRecognizer for NerModel {
    fn recognize(&self, text: &str) -> Vec<Entity> {
        let mut spans: Vec<(usize, usize, &'static str)> = Vec::new();

        for (label, pattern) in &self.patterns {
            for found in pattern.find_iter(text) {
                let (start, end) = if *label == "NAME" {
                    match trim_name(found.as_str()) {
                        Some((offset, _)) => (found.start() + offset, found.end()),
                        None => continue,
                    }
                } else {
                    (found.start(), found.end())
                };

                let overlaps = spans.iter().any(|&(s, e, _)| start < e && s < end);
                if !overlaps {
                    spans.push((start, end, *label));
                }
            }
        }

        spans.sort_by_key(|&(start, _, _)| start);
        spans
            .into_iter()
            .map(|(start, end, label)| Entity::new(&text[start..end], label, EntitySource::Local))
            .collect()
    }
}

/// Drop leading stop words from a capitalized run.
///
/// Returns the byte offset of the first kept word and the kept text, or `None`
/// when fewer than two words remain.
fn trim_name(matched: &str) -> Option<(usize, &str)> {
    let mut offset = 0;
    let mut rest = matched;

    loop {
        let word_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        if !NAME_STOP_WORDS.contains(&&rest[..word_end]) {
            break;
        }
        let after = rest[word_end..].trim_start();
        if after.is_empty() {
            return None;
        }
        offset += rest.len() - after.len();
        rest = after;
    }

    if rest.split_whitespace().count() < 2 {
        return None;
    }
    Some((offset, rest))
}
