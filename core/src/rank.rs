use crate::error::{Error, Result};
use crate::idf::IdfTable;
use crate::index::{DocId, Term, TermFrequencyTable};
use serde::Serialize;
use std::cmp::Ordering;

/// A non-empty, ordered sequence of query terms. Repeated terms are kept and
/// each occurrence is weighted on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    terms: Vec<Term>,
}

impl Query {
    pub fn new(terms: Vec<Term>) -> Result<Self> {
        if terms.is_empty() {
            return Err(Error::EmptyQuery);
        }
        Ok(Self { terms })
    }

    pub fn terms(&self) -> &[Term] { &self.terms }

    /// Number of terms including repeats; never zero.
    pub fn len(&self) -> usize { self.terms.len() }
}

/// Order applied among documents with equal scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Lexicographic by document identifier.
    #[default]
    DocumentIdAscending,
    /// Reverse lexicographic by document identifier.
    DocumentIdDescending,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedDocument {
    pub document: DocId,
    pub score: f64,
}

/// One score per corpus document, ordered from most to least relevant.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Ranking {
    entries: Vec<RankedDocument>,
}

impl Ranking {
    pub fn iter(&self) -> std::slice::Iter<'_, RankedDocument> {
        self.entries.iter()
    }

    pub fn score(&self, document: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.document == document)
            .map(|e| e.score)
    }

    /// The `k` most relevant documents.
    pub fn top(&self, k: usize) -> &[RankedDocument] {
        &self.entries[..k.min(self.entries.len())]
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn into_vec(self) -> Vec<RankedDocument> { self.entries }
}

impl<'a> IntoIterator for &'a Ranking {
    type Item = &'a RankedDocument;
    type IntoIter = std::slice::Iter<'a, RankedDocument>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Score every document in `tf` against `query`:
///
/// ```text
/// score(d) = (Σ over each query term q of tf(d, q) * idf(q)) / |query|
/// ```
///
/// Unknown terms contribute 0 but still count towards `|query|`.
pub fn rank(query: &Query, tf: &TermFrequencyTable, idf: &IdfTable, tie_break: TieBreak) -> Ranking {
    let divisor = query.len() as f64;
    let mut entries: Vec<RankedDocument> = tf
        .documents()
        .map(|(doc, counts)| {
            let sum: f64 = query
                .terms()
                .iter()
                .map(|q| counts.get(q).copied().unwrap_or(0) as f64 * idf.weight(q))
                .sum();
            RankedDocument { document: doc.clone(), score: sum / divisor }
        })
        .collect();

    entries.sort_by(|a, b| compare(a, b, tie_break));
    Ranking { entries }
}

fn compare(a: &RankedDocument, b: &RankedDocument, tie_break: TieBreak) -> Ordering {
    b.score.total_cmp(&a.score).then_with(|| match tie_break {
        TieBreak::DocumentIdAscending => a.document.cmp(&b.document),
        TieBreak::DocumentIdDescending => b.document.cmp(&a.document),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;

    fn tables(corpus: &Corpus) -> (TermFrequencyTable, IdfTable) {
        let tf = TermFrequencyTable::build(corpus);
        let idf = IdfTable::build(corpus, &tf).unwrap();
        (tf, idf)
    }

    fn query(s: &str) -> Query {
        Query::new(s.split_whitespace().map(String::from).collect()).unwrap()
    }

    #[test]
    fn empty_query_is_rejected() {
        assert!(matches!(Query::new(vec![]), Err(Error::EmptyQuery)));
    }

    #[test]
    fn term_in_every_document_scores_zero() {
        let corpus = Corpus::from_texts([("a", "the the cat"), ("b", "the dog")]);
        let (tf, idf) = tables(&corpus);
        let ranking = rank(&query("the"), &tf, &idf, TieBreak::default());
        assert!(ranking.iter().all(|e| e.score == 0.0));
    }

    #[test]
    fn query_order_does_not_matter() {
        let corpus = Corpus::from_texts([("a", "x y y z"), ("b", "y w"), ("c", "z z z")]);
        let (tf, idf) = tables(&corpus);
        let forward = rank(&query("x y z"), &tf, &idf, TieBreak::default());
        let backward = rank(&query("z y x"), &tf, &idf, TieBreak::default());
        assert_eq!(forward.len(), backward.len());
        for (f, b) in forward.iter().zip(&backward) {
            assert_eq!(f.document, b.document);
            assert!((f.score - b.score).abs() < 1e-12);
        }
    }

    #[test]
    fn repeated_terms_change_the_score() {
        let corpus = Corpus::from_texts([("a", "x y"), ("b", "y")]);
        let (tf, idf) = tables(&corpus);
        let once = rank(&query("x y"), &tf, &idf, TieBreak::default());
        let twice = rank(&query("x x y"), &tf, &idf, TieBreak::default());
        let ln2 = 2f64.ln();
        assert!((once.score("a").unwrap() - ln2 / 2.0).abs() < 1e-12);
        assert!((twice.score("a").unwrap() - 2.0 * ln2 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn single_term_scores_sum_by_hand() {
        let corpus = Corpus::from_texts([("a", "x x y"), ("b", "x z"), ("c", "y z")]);
        let (tf, idf) = tables(&corpus);
        let ranking = rank(&query("x"), &tf, &idf, TieBreak::default());
        let total: f64 = ranking.iter().map(|e| e.score).sum();
        let expected = 3.0 * (3f64 / 2f64).ln();
        assert!((total - expected).abs() < 1e-12);
    }

    #[test]
    fn ties_follow_the_chosen_rule() {
        let corpus = Corpus::from_texts([("b", "q"), ("c", "r"), ("a", "s"), ("d", "t t")]);
        let (tf, idf) = tables(&corpus);

        let asc = rank(&query("t"), &tf, &idf, TieBreak::DocumentIdAscending);
        let order: Vec<&str> = asc.iter().map(|e| e.document.as_str()).collect();
        assert_eq!(order, ["d", "a", "b", "c"]);

        let desc = rank(&query("t"), &tf, &idf, TieBreak::DocumentIdDescending);
        let order: Vec<&str> = desc.iter().map(|e| e.document.as_str()).collect();
        assert_eq!(order, ["d", "c", "b", "a"]);
    }

    #[test]
    fn top_clamps_to_length() {
        let corpus = Corpus::from_texts([("a", "x"), ("b", "y")]);
        let (tf, idf) = tables(&corpus);
        let ranking = rank(&query("x"), &tf, &idf, TieBreak::default());
        assert_eq!(ranking.top(1).len(), 1);
        assert_eq!(ranking.top(10).len(), 2);
        assert_eq!(ranking.top(1)[0].document, "a");
    }
}
