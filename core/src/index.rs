use crate::corpus::Corpus;
use std::collections::{BTreeMap, HashMap};

pub type DocId = String;
pub type Term = String;

/// Occurrence count of each distinct term within one document.
/// A term that never occurs has no key; lookups treat absence as zero.
pub type TermCounts = HashMap<Term, u32>;

/// Count how many times each distinct term occurs in `terms`.
pub fn term_frequencies(terms: &[Term]) -> TermCounts {
    let mut counts = TermCounts::with_capacity(terms.len());
    for term in terms {
        *counts.entry(term.clone()).or_insert(0) += 1;
    }
    counts
}

/// Per-document term counts for a whole corpus, keyed by document identifier.
#[derive(Debug, Default, Clone)]
pub struct TermFrequencyTable {
    docs: BTreeMap<DocId, TermCounts>,
}

impl TermFrequencyTable {
    pub fn build(corpus: &Corpus) -> Self {
        let docs = corpus
            .iter()
            .map(|(doc, terms)| (doc.clone(), term_frequencies(terms)))
            .collect();
        Self { docs }
    }

    /// Count of `term` in `doc`; 0 when the term (or the document) is absent.
    pub fn tf(&self, doc: &str, term: &str) -> u32 {
        self.docs
            .get(doc)
            .and_then(|counts| counts.get(term))
            .copied()
            .unwrap_or(0)
    }

    pub fn counts(&self, doc: &str) -> Option<&TermCounts> {
        self.docs.get(doc)
    }

    pub fn documents(&self) -> impl Iterator<Item = (&DocId, &TermCounts)> {
        self.docs.iter()
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}
