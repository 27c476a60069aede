//! Drives one conversion run from parsed arguments.

use crate::cli::Cli;
use crate::converter::RemoteConverter;
use crate::document::{assemble, write_document};
use crate::error::ConvertError;
use crate::version::VersionSource;
use anyhow::Context;
use clap::{CommandFactory, Parser};
use similar::TextDiff;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OutputMode {
    Write,
    DryRun,
    Diff,
}

impl OutputMode {
    fn from_cli(cli: &Cli) -> Self {
        if cli.dry_run {
            OutputMode::DryRun
        } else if cli.diff {
            OutputMode::Diff
        } else {
            OutputMode::Write
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    env_logger::init();
    execute(Cli::parse())
}

/// Runs the pipeline for already-parsed arguments.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let Some((input, output)) = cli.paths() else {
        print_usage()?;
        return Ok(());
    };

    let source = VersionSource::from_args(cli.version_label.clone(), cli.version_file.clone());
    log::debug!("Resolving version from {source:?}");
    let version = source.resolve()?;

    let converter = RemoteConverter::new(&cli.endpoint)?;
    let markdown = read_input(input)?;

    log::info!("Converting {} via {}", input.display(), converter.endpoint());
    let body = converter
        .convert(&markdown)
        .with_context(|| format!("Failed to convert {}", input.display()))?;

    let page = assemble(&body, &version);
    finalize_output(OutputMode::from_cli(&cli), output, page)
}

fn print_usage() -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", Cli::command().render_usage())?;
    writeln!(
        stdout,
        "\nVERSION is read from the first line of --version-file (./VERSION) when not given."
    )?;
    Ok(())
}

fn read_input(path: &Path) -> Result<String, ConvertError> {
    fs::read_to_string(path).map_err(|source| ConvertError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

fn finalize_output(mode: OutputMode, output_path: &Path, page: String) -> anyhow::Result<()> {
    match mode {
        OutputMode::DryRun => {
            io::stdout().write_all(page.as_bytes())?;
        }
        OutputMode::Diff => {
            let current = match fs::read_to_string(output_path) {
                Ok(content) => content,
                Err(err) if err.kind() == io::ErrorKind::NotFound => String::new(),
                Err(err) => {
                    return Err(err).with_context(|| {
                        format!("Failed to read existing output: {}", output_path.display())
                    })
                }
            };

            let diff_output = TextDiff::from_lines(&current, &page)
                .unified_diff()
                .header("current", "regenerated")
                .to_string();

            io::stdout().write_all(diff_output.as_bytes())?;
        }
        OutputMode::Write => {
            write_document(output_path, &page)?;
            log::info!("Wrote {}", output_path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use std::path::PathBuf;

    fn cli(input: Option<&Path>, output: Option<&Path>) -> Cli {
        Cli {
            input: input.map(Path::to_path_buf),
            output: output.map(Path::to_path_buf),
            version_label: Some("1.0".into()),
            version_file: PathBuf::from("VERSION"),
            endpoint: "http://127.0.0.1:1/markdown".into(),
            dry_run: false,
            diff: false,
        }
    }

    #[test]
    fn output_mode_follows_flags() {
        let mut args = cli(None, None);
        assert_eq!(OutputMode::from_cli(&args), OutputMode::Write);
        args.dry_run = true;
        assert_eq!(OutputMode::from_cli(&args), OutputMode::DryRun);
        args.dry_run = false;
        args.diff = true;
        assert_eq!(OutputMode::from_cli(&args), OutputMode::Diff);
    }

    #[test]
    fn missing_paths_is_not_an_error() {
        assert!(execute(cli(None, None)).is_ok());
    }

    #[test]
    fn missing_input_fails_before_writing() {
        let temp = assert_fs::TempDir::new().unwrap();
        let output = temp.child("out.html");

        let err = execute(cli(Some(&temp.path().join("absent.md")), Some(output.path())))
            .unwrap_err();

        assert!(err.to_string().contains("Failed to read input file"));
        output.assert(predicates::path::missing());
    }

    #[test]
    fn write_mode_creates_output() {
        let temp = assert_fs::TempDir::new().unwrap();
        let output = temp.child("out.html");

        finalize_output(OutputMode::Write, output.path(), "<html></html>\n".into()).unwrap();

        output.assert("<html></html>\n");
    }

    #[test]
    fn diff_mode_leaves_output_untouched() {
        let temp = assert_fs::TempDir::new().unwrap();
        let output = temp.child("out.html");
        output.write_str("old\n").unwrap();

        finalize_output(OutputMode::Diff, output.path(), "new\n".into()).unwrap();

        output.assert("old\n");
    }
}
