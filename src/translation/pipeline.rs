use super::lexicon::Lexicon;
use super::names::{NamePass, NameTable};
use super::vocabulary::VocabularyPass;
use crate::error::Error;

/// The per-node text transformation: the vocabulary pass followed by the
/// name pass. Compiled once, read-only afterwards.
pub struct Translator {
    vocabulary: VocabularyPass,
    names: NamePass,
}

impl Translator {
    pub fn new(lexicon: &Lexicon, names: &NameTable) -> Result<Self, Error> {
        Ok(Translator {
            vocabulary: VocabularyPass::compile(lexicon)?,
            names: NamePass::compile(names)?,
        })
    }

    /// Vocabulary substitutions run first; the name pass then matches
    /// against the vocabulary-translated text, not the raw source.
    pub fn translate(&self, text: &str) -> String {
        self.names.apply(&self.vocabulary.apply(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translation::lexicon::TermTable;

    fn table(pairs: &[(&str, &str)]) -> TermTable {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn vocabulary_runs_before_names() {
        let lexicon = Lexicon::merge([table(&[("the president", "Minji")])]);
        let names = NameTable::new(table(&[("Minji", "민지")]));
        let translator = Translator::new(&lexicon, &names).unwrap();

        // The name pass sees the vocabulary output "Minji", not the source.
        assert_eq!(translator.translate("the president arrived"), "민지 arrived");
    }

    #[test]
    fn pipeline_is_idempotent_when_targets_match_no_keys() {
        let lexicon = Lexicon::merge([
            table(&[("hello", "안녕"), ("school", "学校")]),
            table(&[("festival", "庆典")]),
        ]);
        let names = NameTable::new(table(&[("Kim Minji", "김민지")]));
        let translator = Translator::new(&lexicon, &names).unwrap();

        let once = translator.translate("hello Kim Minji, the school festival starts");
        let twice = translator.translate(&once);
        assert_eq!(once, "안녕 김민지, the 学校 庆典 starts");
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_tables_make_translation_a_no_op() {
        let translator = Translator::new(&Lexicon::default(), &NameTable::default()).unwrap();
        assert_eq!(translator.translate("nothing to do"), "nothing to do");
    }
}
