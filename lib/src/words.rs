use crate::results::WordSearchError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::io::BufRead;
use std::ops::Deref;
use std::sync::Arc;

/// The list of words to look for in a grid.
///
/// This performs the caller-side cleanup the engine itself never does:
/// entries are trimmed, upper-cased to match the usual all-caps puzzle grid,
/// and empty tokens are dropped. Duplicate entries are kept and searched
/// independently. The search functions also accept plain string slices, so
/// using `WordList` is optional when the words are already clean.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordList {
    words: Vec<Arc<str>>,
}

impl WordList {
    /// Builds a word list from free text, splitting on whitespace and commas.
    pub fn from_text(text: &str) -> WordList {
        WordList {
            words: split_words(text).collect(),
        }
    }

    /// Builds a word list by reading the given reader to its end. Words may
    /// be separated by spaces, commas, or newlines.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<WordList, WordSearchError> {
        let mut words = Vec::new();
        for maybe_line in reader.lines() {
            words.extend(split_words(&maybe_line?));
        }
        Ok(WordList { words })
    }

    /// Builds a word list from the given words, trimming each and dropping
    /// any that are empty.
    pub fn from_iterator<S, I>(words: I) -> WordList
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        WordList {
            words: words
                .into_iter()
                .filter_map(|word| {
                    let word = word.as_ref().trim();
                    if word.is_empty() {
                        return None;
                    }
                    Some(Arc::from(word.to_uppercase().as_str()))
                })
                .collect(),
        }
    }

    /// The number of words, counting duplicates.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` iff the list holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Deref for WordList {
    type Target = [Arc<str>];

    fn deref(&self) -> &[Arc<str>] {
        &self.words
    }
}

fn split_words(text: &str) -> impl Iterator<Item = Arc<str>> + '_ {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| Arc::from(token.to_uppercase().as_str()))
}

#[cfg(test)]
mod tests {

    use super::*;

    macro_rules! assert_words_eq {
        ($word_list:expr, $expected:expr) => {
            assert_eq!(
                &*$word_list,
                $expected
                    .iter()
                    .map(|word| Arc::from(*word))
                    .collect::<Vec<Arc<str>>>()
            );
        };
    }

    #[test]
    fn from_text_splits_on_whitespace_and_commas() {
        let words = WordList::from_text("kapr, losos\n štika  okoun");

        assert_words_eq!(words, ["KAPR", "LOSOS", "ŠTIKA", "OKOUN"]);
    }

    #[test]
    fn from_text_keeps_duplicates() {
        let words = WordList::from_text("kapr kapr");

        assert_eq!(words.len(), 2);
        assert_words_eq!(words, ["KAPR", "KAPR"]);
    }

    #[test]
    fn from_text_drops_empty_tokens() {
        let words = WordList::from_text(" , ,, ");

        assert!(words.is_empty());
    }

    #[test]
    fn from_iterator_trims_and_upper_cases() {
        let words = WordList::from_iterator(vec!["", " kapr ", "Losos"]);

        assert_words_eq!(words, ["KAPR", "LOSOS"]);
    }
}
