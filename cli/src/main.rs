use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use tfrank::{is_missing_query, run, Args};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let args = Args::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&args, &mut out) {
        Err(err) if is_missing_query(&err) => {
            writeln!(out, "{err}")?;
            Ok(())
        }
        other => other,
    }
}
