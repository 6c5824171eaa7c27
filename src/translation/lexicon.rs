use indexmap::IndexMap;

/// A single source-language -> target-language mapping table, in the order
/// the source file listed its entries.
pub type TermTable = IndexMap<String, String>;

/// Marker embedded in a table key to flag a single character that must only
/// be replaced when it sits next to a digit (measurement units, counters).
pub const SINGLE_CHAR_TAG: &str = "(單字)";

/// The merged vocabulary: the union of all non-name term tables, applied in
/// a fixed precedence order. Read-only after construction.
#[derive(Debug, Default, Clone)]
pub struct Lexicon {
    entries: IndexMap<String, String>,
}

/// One merged entry, with the single-character tag already stripped off the
/// match text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconTerm<'a> {
    pub phrase: String,
    pub replacement: &'a str,
    pub digit_bounded: bool,
}

impl Lexicon {
    /// Merges the given tables in order. On a key collision the later table
    /// wins, but the key keeps its original position, so substitution order
    /// stays stable across overrides.
    pub fn merge<I>(tables: I) -> Self
    where
        I: IntoIterator<Item = TermTable>,
    {
        let mut entries = IndexMap::new();
        for table in tables {
            for (key, value) in table {
                entries.insert(key, value);
            }
        }
        Lexicon { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in merge order. Keys carrying [`SINGLE_CHAR_TAG`] come out
    /// with the tag removed and `digit_bounded` set.
    pub fn terms(&self) -> impl Iterator<Item = LexiconTerm<'_>> {
        self.entries.iter().map(|(key, value)| {
            if key.contains(SINGLE_CHAR_TAG) {
                LexiconTerm {
                    phrase: key.replace(SINGLE_CHAR_TAG, "").trim().to_string(),
                    replacement: value,
                    digit_bounded: true,
                }
            } else {
                LexiconTerm {
                    phrase: key.trim().to_string(),
                    replacement: value,
                    digit_bounded: false,
                }
            }
        })
    }
}
