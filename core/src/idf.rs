//! Document frequency and inverse document frequency over a whole corpus.
//!
//! `df(t)` counts documents that contain `t` at least once, never occurrences,
//! and `idf(t) = ln(N / df(t))`. Every term in the table has `df >= 1`, so the
//! weight is finite and non-negative; a term present in every document weighs 0.

use crate::corpus::Corpus;
use crate::error::{Error, Result};
use crate::index::{Term, TermFrequencyTable};
use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
pub struct IdfTable {
    num_docs: u32,
    df: HashMap<Term, u32>,
    weights: HashMap<Term, f64>,
}

impl IdfTable {
    pub fn build(corpus: &Corpus, tf: &TermFrequencyTable) -> Result<Self> {
        if corpus.is_empty() {
            return Err(Error::EmptyCorpus);
        }
        let num_docs = corpus.len() as u32;

        // Each document's counts already hold one key per distinct term, so
        // bumping once per key counts presence rather than occurrences.
        let mut df: HashMap<Term, u32> = HashMap::new();
        for (_doc, counts) in tf.documents() {
            for (term, &count) in counts {
                if count > 0 {
                    *df.entry(term.clone()).or_insert(0) += 1;
                }
            }
        }

        let n = num_docs as f64;
        let weights = df
            .iter()
            .map(|(term, &df_t)| (term.clone(), (n / df_t as f64).ln()))
            .collect::<HashMap<_, _>>();

        tracing::debug!(num_docs, num_terms = weights.len(), "computed idf table");
        Ok(Self { num_docs, df, weights })
    }

    /// IDF weight of `term`, or `None` if the corpus never contains it.
    pub fn get(&self, term: &str) -> Option<f64> {
        self.weights.get(term).copied()
    }

    /// IDF weight of `term`, reading an unknown term as 0.
    pub fn weight(&self, term: &str) -> f64 {
        self.get(term).unwrap_or(0.0)
    }

    pub fn document_frequency(&self, term: &str) -> u32 {
        self.df.get(term).copied().unwrap_or(0)
    }

    pub fn num_docs(&self) -> u32 {
        self.num_docs
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Term, f64)> {
        self.weights.iter().map(|(t, &w)| (t, w))
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
