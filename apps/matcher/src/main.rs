mod cli;
mod config;
mod errors;
mod extract;
mod matching;
mod models;
mod render;
mod session;
mod sources;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Commands, SourceChoice};
use crate::config::Config;
use crate::extract::FormatExtractor;
use crate::matching::scoring::KeywordOverlapScorer;
use crate::matching::MatchLimits;
use crate::session::{Session, SessionView};
use crate::sources::{FixtureSource, PostingSource, SearchSource};

/// Exit status when the run finished but an error slot is occupied.
const EXIT_REPORTED_ERROR: u8 = 2;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Load configuration first so RUST_LOG from .env applies to logging
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries the report
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting resume-matcher v{}", env!("CARGO_PKG_VERSION"));

    let scorer = Arc::new(KeywordOverlapScorer);
    let mut session = Session::new(scorer, MatchLimits::default());

    match build_source(&cli.source_choice(), &config) {
        Ok(source) => {
            session.load(source.as_ref()).await;
        }
        Err(err) => session.record_load_failure(err),
    }
    info!(
        "Postings loaded: {} ({:?})",
        session.postings().len(),
        session.phase()
    );

    let mut failed = session.load_error().is_some();

    match &cli.command {
        Commands::Jobs { keywords } => {
            print_view(&session.view(), cli.json, *keywords)?;
        }
        Commands::Match { resumes } => {
            let extractor = FormatExtractor;
            for path in resumes {
                let outcome = session.upload_file(&extractor, path).await;
                info!("Upload of {} finished: {:?}", path.display(), outcome);
                if let Some(report) = session.report() {
                    info!(
                        "{} postings ranked, {} suggestions",
                        report.ranked().len(),
                        report.suggestions().len()
                    );
                }
                failed |= session.resume_error().is_some();
                print_view(&session.view(), cli.json, false)?;
            }
        }
    }

    Ok(if failed {
        ExitCode::from(EXIT_REPORTED_ERROR)
    } else {
        ExitCode::SUCCESS
    })
}

fn build_source(
    choice: &SourceChoice,
    config: &Config,
) -> Result<Box<dyn PostingSource>, errors::AcquisitionError> {
    Ok(match choice {
        SourceChoice::Bundled => Box::new(FixtureSource::Bundled),
        SourceChoice::File(path) => Box::new(FixtureSource::File(path.clone())),
        SourceChoice::Search(query) => Box::new(SearchSource::new(&config.search, query.clone())?),
    })
}

fn print_view(view: &SessionView, json: bool, show_keywords: bool) -> Result<()> {
    if json {
        println!("{}", render::render_json(view)?);
    } else {
        println!("{}", render::render_text(view, show_keywords));
    }
    Ok(())
}
