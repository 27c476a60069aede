//! Defines the command-line interface for the application.

use crate::converter::DEFAULT_ENDPOINT;
use crate::version::DEFAULT_VERSION_FILE;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "gh-markdown-html",
    version,
    about = "Render a Markdown manual to a standalone HTML page through the GitHub Markdown API."
)]
pub struct Cli {
    /// The Markdown file to convert.
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Where to write the HTML page.
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Version shown in the page title. [default: first line of --version-file]
    #[arg(value_name = "VERSION")]
    pub version_label: Option<String>,

    /// File holding the version when none is given on the command line.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_VERSION_FILE)]
    pub version_file: PathBuf,

    /// Markdown rendering endpoint.
    #[arg(long, value_name = "URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Print the page to stdout instead of writing OUTPUT.
    #[arg(long, conflicts_with = "diff")]
    pub dry_run: bool,

    /// Show a diff between the current OUTPUT and the regenerated page.
    #[arg(long)]
    pub diff: bool,
}

impl Cli {
    /// Returns the input and output paths when both were supplied.
    pub fn paths(&self) -> Option<(&PathBuf, &PathBuf)> {
        self.input.as_ref().zip(self.output.as_ref())
    }
}
