use std::collections::HashMap;

use regex::{Captures, Regex, RegexBuilder};

use super::lexicon::TermTable;
use crate::error::Error;

/// Personal-name mappings. Kept apart from the lexicon because names are
/// matched longest-key-first and carry parenthetical handling.
#[derive(Debug, Default, Clone)]
pub struct NameTable {
    entries: TermTable,
}

impl NameTable {
    pub fn new(entries: TermTable) -> Self {
        NameTable { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by source-name length descending, so a full name is
    /// never fragmented by one of its own substrings. Ties keep table order.
    fn ranked(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));
        entries
    }
}

fn is_hangul_syllable(c: char) -> bool {
    ('\u{AC00}'..='\u{D7AF}').contains(&c)
}

/// The name substitution pass, compiled from a [`NameTable`].
pub(crate) struct NamePass {
    rules: Vec<NameRule>,
    char_targets: HashMap<char, String>,
}

struct NameRule {
    pattern: Regex,
    target: String,
}

impl NamePass {
    pub fn compile(names: &NameTable) -> Result<Self, Error> {
        let mut rules = Vec::with_capacity(names.len());
        for (source, target) in names.ranked() {
            // Unlike vocabulary terms, names are escaped for literal
            // matching. The optional group picks up a parenthesized suffix.
            let pattern = format!(r"{}(\([^)]+\))?", regex::escape(source));
            let pattern = RegexBuilder::new(&pattern)
                .case_insensitive(true)
                .build()
                .map_err(|err| Error::Pattern {
                    phrase: source.to_string(),
                    source: err,
                })?;
            rules.push(NameRule {
                pattern,
                target: target.to_string(),
            });
        }
        let char_targets = names
            .entries
            .iter()
            .filter_map(|(key, value)| {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some((c, value.clone())),
                    _ => None,
                }
            })
            .collect();
        Ok(NamePass {
            rules,
            char_targets,
        })
    }

    pub fn apply(&self, text: &str) -> String {
        let mut current = text.to_string();
        for rule in &self.rules {
            current = rule
                .pattern
                .replace_all(&current, |caps: &Captures| {
                    let mut replaced = rule.target.clone();
                    if let Some(parenthetical) = caps.get(1) {
                        replaced.push_str(&self.translate_parenthetical(parenthetical.as_str()));
                    }
                    replaced
                })
                .into_owned();
        }
        current
    }

    /// A parenthesized suffix is translated character by character: each
    /// Hangul syllable is looked up as a one-character name entry and left
    /// alone on a miss. This is not a recursive reapplication of the pass.
    fn translate_parenthetical(&self, payload: &str) -> String {
        payload
            .chars()
            .map(|c| {
                if is_hangul_syllable(c) {
                    if let Some(target) = self.char_targets.get(&c) {
                        return target.clone();
                    }
                }
                c.to_string()
            })
            .collect()
    }
}
