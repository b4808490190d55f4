use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "resume-matcher",
    version,
    about = "Rank job postings against your resume and suggest missing keywords"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        value_name = "FILE",
        conflicts_with = "search",
        help = "Load postings from a JSON fixture file instead of the bundled list"
    )]
    pub jobs: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        value_name = "QUERY",
        help = "Load postings from the remote job search API"
    )]
    pub search: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score one or more resumes (.txt, .docx, .pdf) against the postings, in order.
    Match {
        #[arg(required = true, value_name = "RESUME")]
        resumes: Vec<PathBuf>,
    },
    /// List the loaded postings without scoring.
    Jobs {
        #[arg(long, default_value_t = false, help = "Show each posting's keywords")]
        keywords: bool,
    },
}

/// Where postings come from for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceChoice {
    Bundled,
    File(PathBuf),
    Search(String),
}

impl Cli {
    pub fn source_choice(&self) -> SourceChoice {
        match (&self.jobs, &self.search) {
            (Some(path), _) => SourceChoice::File(path.clone()),
            (None, Some(query)) => SourceChoice::Search(query.clone()),
            (None, None) => SourceChoice::Bundled,
        }
    }
}
