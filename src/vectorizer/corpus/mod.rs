use std::{collections::HashSet, sync::Arc};

use ahash::RandomState;
use serde::{Deserialize, Serialize};

/// One labeled reference document.
/// `index` is its position in the corpus and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub index: usize,
    pub label: Arc<str>,
    pub raw_text: String,
}

/// A `{label, text}` record as delivered by a corpus source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusRecord {
    pub label: String,
    pub text: String,
}

impl CorpusRecord {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// Ordered arena of documents.
///
/// Documents get their index in arrival order. Order only matters as the
/// tie-break between equally scored documents.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    /// Create a new, empty corpus
    pub fn new() -> Self {
        Self {
            documents: Vec::new(),
        }
    }

    /// Append a document and return the index it was assigned
    pub fn push(&mut self, label: impl AsRef<str>, text: impl Into<String>) -> usize {
        let index = self.documents.len();
        self.documents.push(Document {
            index,
            label: Arc::from(label.as_ref()),
            raw_text: text.into(),
        });
        index
    }

    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = CorpusRecord>,
    {
        let mut corpus = Self::new();
        for record in records {
            corpus.push(record.label, record.text);
        }
        corpus
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Document> {
        self.documents.get(index)
    }

    #[inline]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Number of distinct labels
    pub fn label_num(&self) -> usize {
        self.documents
            .iter()
            .map(|doc| &*doc.label)
            .collect::<HashSet<&str, RandomState>>()
            .len()
    }
}

impl<L, T> FromIterator<(L, T)> for Corpus
where
    L: AsRef<str>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (L, T)>>(iter: I) -> Self {
        let mut corpus = Corpus::new();
        for (label, text) in iter {
            corpus.push(label, text);
        }
        corpus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_arrival_order() {
        let mut corpus = Corpus::new();
        assert_eq!(corpus.push("A", "first"), 0);
        assert_eq!(corpus.push("B", "second"), 1);
        assert_eq!(corpus.push("A", "third"), 2);

        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.label_num(), 2);
        let doc = corpus.get(2).unwrap();
        assert_eq!(doc.index, 2);
        assert_eq!(&*doc.label, "A");
        assert_eq!(doc.raw_text, "third");
        assert!(corpus.get(3).is_none());
    }

    #[test]
    fn from_records_and_iterator_agree() {
        let records = vec![CorpusRecord::new("X", "one"), CorpusRecord::new("Y", "two")];
        let a = Corpus::from_records(records);
        let b: Corpus = vec![("X", "one"), ("Y", "two")].into_iter().collect();
        assert_eq!(a.documents(), b.documents());
    }
}
