//! Command-line interface for ranking and explaining neighbourhood
//! recommendations.
#![forbid(unsafe_code)]

use std::io::Write;

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use serde::{Serialize, de::DeserializeOwned};

mod error;
mod profiles;
mod rank;

pub use error::CliError;

use profiles::{
    PutProfileArgs, RemoveProfileArgs, StoreArgs, run_list_profiles_with, run_put_profile_with,
    run_remove_profile_with,
};
use rank::{RankArgs, run_rank_with, run_recommend_with};

pub(crate) const ARG_DATA_DIR: &str = "data-dir";
pub(crate) const ARG_NEIGHBOURHOODS: &str = "neighbourhoods";
pub(crate) const ARG_PROFILES: &str = "profiles";
pub(crate) const ARG_METRIC_CATALOGUE: &str = "metric-catalogue";
pub(crate) const ARG_TOP: &str = "top";
pub(crate) const ARG_PROFILE_ID: &str = "profile-id";
pub(crate) const ARG_PROFILE_FILE: &str = "file";
pub(crate) const ENV_PROFILE_ID: &str = "NEIGHBOURLY_PROFILE_ID";

pub(crate) const DEFAULT_NEIGHBOURHOODS_FILE: &str = "neighbourhoods.json";
pub(crate) const DEFAULT_PROFILES_FILE: &str = "clients.json";
pub(crate) const DEFAULT_TOP: usize = 5;

/// Run the neighbourly CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration, input loading,
/// ranking or output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    run_command(cli.command, &mut stdout)
}

fn run_command(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Rank(args) => run_rank_with(args, writer),
        Command::Recommend(args) => run_recommend_with(args, writer),
        Command::Profiles(args) => run_list_profiles_with(&args, writer),
        Command::PutProfile(args) => run_put_profile_with(&args, writer),
        Command::RemoveProfile(args) => run_remove_profile_with(&args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "neighbourly",
    about = "Rank and explain neighbourhood recommendations for client profiles",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank neighbourhoods for a client profile and print them as JSON.
    Rank(RankArgs),
    /// Rank neighbourhoods and explain each result.
    Recommend(RankArgs),
    /// List stored client profiles.
    Profiles(StoreArgs),
    /// Validate and store a client profile.
    PutProfile(PutProfileArgs),
    /// Remove a client profile.
    RemoveProfile(RemoveProfileArgs),
}

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match neighbourly_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Read and decode a JSON document.
pub(crate) fn read_input<T: DeserializeOwned>(
    path: &Utf8Path,
    field: &'static str,
) -> Result<T, CliError> {
    let contents = neighbourly_fs::read_to_string(path).map_err(|source| CliError::ReadInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| CliError::ParseInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
