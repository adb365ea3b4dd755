use crate::error::{Error, Result};
use crate::index::{DocId, Term};
use crate::tokenizer::tokenize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// A fixed set of documents, each an ordered sequence of lower-cased terms.
/// Iteration order is by document identifier.
#[derive(Debug, Default, Clone)]
pub struct Corpus {
    docs: BTreeMap<DocId, Vec<Term>>,
}

impl Corpus {
    pub fn new() -> Self { Self::default() }

    /// Build a corpus from raw `(identifier, text)` pairs, tokenizing each text.
    pub fn from_texts<I, K, V>(texts: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<DocId>,
        V: AsRef<str>,
    {
        let mut corpus = Self::new();
        for (id, text) in texts {
            corpus.insert(id, tokenize(text.as_ref()));
        }
        corpus
    }

    /// Add a document, replacing any previous one with the same identifier.
    pub fn insert(&mut self, id: impl Into<DocId>, terms: Vec<Term>) {
        self.docs.insert(id.into(), terms);
    }

    pub fn get(&self, id: &str) -> Option<&[Term]> {
        self.docs.get(id).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DocId, &Vec<Term>)> {
        self.docs.iter()
    }

    pub fn document_ids(&self) -> impl Iterator<Item = &DocId> {
        self.docs.keys()
    }

    pub fn len(&self) -> usize { self.docs.len() }

    pub fn is_empty(&self) -> bool { self.docs.is_empty() }
}

/// Load every file directly inside `dir` whose name contains `.txt`.
/// The file name becomes the document identifier.
pub fn load_corpus<P: AsRef<Path>>(dir: P) -> Result<Corpus> {
    let dir = dir.as_ref();
    let mut corpus = Corpus::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::Io {
            path: e.path().unwrap_or(dir).to_path_buf(),
            source: e.into(),
        })?;
        // Symlinks count when they resolve to a regular file.
        if !entry.path().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.contains(".txt") {
            continue;
        }
        let bytes = fs::read(entry.path()).map_err(|source| Error::Io {
            path: entry.path().to_path_buf(),
            source,
        })?;
        let terms = tokenize(&String::from_utf8_lossy(&bytes));
        tracing::debug!(document = %name, num_terms = terms.len(), "loaded document");
        corpus.insert(name, terms);
    }

    tracing::info!(dir = %dir.display(), num_docs = corpus.len(), "loaded corpus");
    Ok(corpus)
}
