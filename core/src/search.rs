use crate::corpus::Corpus;
use crate::error::{Error, Result};
use crate::idf::IdfTable;
use crate::index::TermFrequencyTable;
use crate::rank::{rank, Query, Ranking, TieBreak};

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    pub tie_break: TieBreak,
}

/// Rank every document of `corpus` against `query`.
///
/// All tables are built fresh for this call and dropped afterwards.
pub fn search(corpus: &Corpus, query: &Query, options: &SearchOptions) -> Result<Ranking> {
    if corpus.is_empty() {
        return Err(Error::EmptyCorpus);
    }
    let tf = TermFrequencyTable::build(corpus);
    let idf = IdfTable::build(corpus, &tf)?;
    let ranking = rank(query, &tf, &idf, options.tie_break);
    tracing::debug!(num_docs = ranking.len(), query_terms = query.len(), "ranked corpus");
    Ok(ranking)
}
