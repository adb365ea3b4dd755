pub mod corpus;
pub mod error;
pub mod idf;
pub mod index;
pub mod rank;
pub mod search;
pub mod tokenizer;

pub use corpus::{load_corpus, Corpus};
pub use error::{Error, Result};
pub use idf::IdfTable;
pub use index::{term_frequencies, DocId, Term, TermCounts, TermFrequencyTable};
pub use rank::{rank, Query, RankedDocument, Ranking, TieBreak};
pub use search::{search, SearchOptions};
