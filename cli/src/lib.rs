use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;
use tfrank_core::tokenizer::parse_query;
use tfrank_core::{load_corpus, search, Error, RankedDocument, SearchOptions, TieBreak};

#[derive(Parser, Debug)]
#[command(name = "tfrank")]
#[command(about = "Rank a directory of text documents against a query with TF-IDF", long_about = None)]
pub struct Args {
    /// Search terms, separated by whitespace and/or commas
    #[arg(allow_hyphen_values = true)]
    pub query: Option<String>,
    /// Directory holding the *.txt documents
    #[arg(long, env = "TFRANK_DATASET", default_value = "./dataset")]
    pub dataset: PathBuf,
    /// Print only the K most relevant documents
    #[arg(long)]
    pub top: Option<usize>,
    /// Print the ranking as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
    /// Order tied documents by descending file name instead of ascending
    #[arg(long, default_value_t = false)]
    pub reverse_ties: bool,
}

#[derive(Serialize)]
pub struct SearchResponse<'a> {
    pub query: &'a str,
    pub took_s: f64,
    pub total_hits: usize,
    pub results: &'a [RankedDocument],
}

impl Args {
    fn search_options(&self) -> SearchOptions {
        let tie_break = if self.reverse_ties {
            TieBreak::DocumentIdDescending
        } else {
            TieBreak::DocumentIdAscending
        };
        SearchOptions { tie_break }
    }
}

/// Load the dataset, rank it against the query and write the result to `out`.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let start = Instant::now();
    let raw = args.query.as_deref().ok_or(Error::MissingQueryArgument)?;
    let query = parse_query(raw)?;

    let corpus = load_corpus(&args.dataset)
        .with_context(|| format!("loading dataset {}", args.dataset.display()))?;
    let ranking = search(&corpus, &query, &args.search_options())?;
    let rows = ranking.top(args.top.unwrap_or(ranking.len()));

    if args.json {
        let response = SearchResponse {
            query: raw,
            took_s: start.elapsed().as_secs_f64(),
            total_hits: ranking.len(),
            results: rows,
        };
        serde_json::to_writer_pretty(&mut *out, &response)?;
        writeln!(out)?;
    } else {
        for row in rows {
            writeln!(out, "{}\t{}", row.document, row.score)?;
        }
    }
    tracing::info!(query = raw, total_hits = ranking.len(), "search complete");
    Ok(())
}

/// True when `err` is the "no query given" condition, which is not a failure.
pub fn is_missing_query(err: &anyhow::Error) -> bool {
    matches!(err.downcast_ref::<Error>(), Some(Error::MissingQueryArgument))
}
