use regex::{Captures, NoExpand, Regex, RegexBuilder};

use super::lexicon::Lexicon;
use crate::error::Error;

/// The vocabulary substitution pass, compiled from a [`Lexicon`].
#[derive(Debug)]
pub(crate) struct VocabularyPass {
    rules: Vec<VocabularyRule>,
}

#[derive(Debug)]
struct VocabularyRule {
    matcher: Matcher,
    replacement: String,
}

#[derive(Debug)]
enum Matcher {
    /// The term text compiled as a pattern verbatim, case-insensitive.
    /// Terms are deliberately not escaped; a term that is not a valid
    /// pattern fails compilation instead.
    Plain(Regex),
    /// A single character that only matches next to an ASCII digit. The
    /// digit itself is re-emitted by the replacement, so one digit can
    /// bound a tagged character on each side.
    DigitBounded {
        before_digit: Regex,
        after_digit: Regex,
    },
}

impl VocabularyPass {
    pub fn compile(lexicon: &Lexicon) -> Result<Self, Error> {
        let mut rules = Vec::with_capacity(lexicon.len());
        for term in lexicon.terms() {
            let matcher = if term.digit_bounded {
                // Two patterns, applied one after the other, stand in for
                // the zero-width "digit on either side" condition; each
                // captures the digit so apply() can put it back.
                let before_digit = Regex::new(&format!("{}([0-9])", term.phrase)).map_err(
                    |source| Error::Pattern {
                        phrase: term.phrase.clone(),
                        source,
                    },
                )?;
                let after_digit = Regex::new(&format!("([0-9]){}", term.phrase)).map_err(
                    |source| Error::Pattern {
                        phrase: term.phrase.clone(),
                        source,
                    },
                )?;
                Matcher::DigitBounded {
                    before_digit,
                    after_digit,
                }
            } else {
                Matcher::Plain(
                    RegexBuilder::new(&term.phrase)
                        .case_insensitive(true)
                        .build()
                        .map_err(|source| Error::Pattern {
                            phrase: term.phrase.clone(),
                            source,
                        })?,
                )
            };
            rules.push(VocabularyRule {
                matcher,
                replacement: term.replacement.to_string(),
            });
        }
        Ok(VocabularyPass { rules })
    }

    /// Applies every rule in lexicon order. Each rule rewrites the previous
    /// rule's output, so a later term can match text produced by an earlier
    /// replacement; existing tables rely on that chaining.
    pub fn apply(&self, text: &str) -> String {
        let mut current = text.to_string();
        for rule in &self.rules {
            current = match &rule.matcher {
                Matcher::Plain(re) => re
                    .replace_all(&current, NoExpand(&rule.replacement))
                    .into_owned(),
                Matcher::DigitBounded {
                    before_digit,
                    after_digit,
                } => {
                    // Re-emitting the digit keeps it available to a tagged
                    // character on its other side.
                    let trailing = before_digit.replace_all(&current, |caps: &Captures| {
                        format!("{}{}", rule.replacement, &caps[1])
                    });
                    after_digit
                        .replace_all(&trailing, |caps: &Captures| {
                            format!("{}{}", &caps[1], rule.replacement)
                        })
                        .into_owned()
                }
            };
        }
        current
    }
}
