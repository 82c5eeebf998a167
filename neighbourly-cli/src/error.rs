//! Error types emitted by the neighbourly CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use neighbourly_core::ProfileStoreError;
use neighbourly_scorer::RecommendError;
use thiserror::Error;

/// Errors emitted by the neighbourly CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Option name without the leading dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option that named the path.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option that named the path.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option that named the path.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Reading an input document failed.
    #[error("failed to read {field} from {path:?}: {source}")]
    ReadInput {
        /// Option that named the path.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// An input document was not valid JSON of the expected shape.
    #[error("failed to parse {field} JSON at {path:?}: {source}")]
    ParseInput {
        /// Option that named the path.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
        /// Decoder failure, with line and column.
        #[source]
        source: serde_json::Error,
    },
    /// The profile store rejected an operation.
    #[error(transparent)]
    Store(#[from] ProfileStoreError),
    /// Ranking or justification failed.
    #[error(transparent)]
    Recommend(#[from] RecommendError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
