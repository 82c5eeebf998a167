//! `rank` and `recommend` command implementations.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::{debug, info};
use neighbourly_core::{JsonProfileStore, Justification, Neighbourhood, ScoredNeighbourhood};
use neighbourly_scorer::{Justifier, MetricCatalogue, Ranker};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_DATA_DIR, ARG_METRIC_CATALOGUE, ARG_NEIGHBOURHOODS, ARG_PROFILE_ID, ARG_PROFILES, ARG_TOP,
    CliError, DEFAULT_NEIGHBOURHOODS_FILE, DEFAULT_PROFILES_FILE, DEFAULT_TOP, ENV_PROFILE_ID,
    read_input, require_existing, write_json,
};

/// CLI arguments shared by the `rank` and `recommend` subcommands.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank neighbourhoods for a client profile. Metrics the profile \
                 weights are min-max normalised across the whole dataset \
                 before scoring, so results depend on every neighbourhood in \
                 the file. Paths can come from CLI flags, configuration \
                 files, or environment variables.",
    about = "Rank neighbourhoods for a client profile"
)]
#[ortho_config(prefix = "NEIGHBOURLY")]
pub(crate) struct RankArgs {
    /// Identifier of the client profile to rank for.
    #[arg(value_name = "profile-id")]
    #[serde(default)]
    pub(crate) profile_id: Option<String>,
    /// Directory containing the default dataset filenames.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Override the path to the neighbourhood dataset (`neighbourhoods.json`).
    #[arg(long = ARG_NEIGHBOURHOODS, value_name = "path")]
    #[serde(default)]
    pub(crate) neighbourhoods: Option<Utf8PathBuf>,
    /// Override the path to the client profiles (`clients.json`).
    #[arg(long = ARG_PROFILES, value_name = "path")]
    #[serde(default)]
    pub(crate) profiles: Option<Utf8PathBuf>,
    /// JSON file adding to or overriding the built-in metric descriptions.
    #[arg(long = ARG_METRIC_CATALOGUE, value_name = "path")]
    #[serde(default)]
    pub(crate) metric_catalogue: Option<Utf8PathBuf>,
    /// Number of neighbourhoods to return.
    #[arg(long = ARG_TOP, value_name = "n")]
    #[serde(default)]
    pub(crate) top: Option<usize>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank`/`recommend` configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankConfig {
    /// Profile to rank for.
    pub(crate) profile_id: String,
    /// Path to the neighbourhood dataset.
    pub(crate) neighbourhoods: Utf8PathBuf,
    /// Path to the client profile store.
    pub(crate) profiles: Utf8PathBuf,
    /// Optional metric description overrides.
    pub(crate) metric_catalogue: Option<Utf8PathBuf>,
    /// Maximum number of results.
    pub(crate) top: usize,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.neighbourhoods, ARG_NEIGHBOURHOODS)?;
        require_existing(&self.profiles, ARG_PROFILES)?;
        if let Some(catalogue) = &self.metric_catalogue {
            require_existing(catalogue, ARG_METRIC_CATALOGUE)?;
        }
        Ok(())
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let profile_id = args.profile_id.ok_or(CliError::MissingArgument {
            field: ARG_PROFILE_ID,
            env: ENV_PROFILE_ID,
        })?;

        let data_dir = args.data_dir.unwrap_or_else(|| Utf8PathBuf::from("."));
        let neighbourhoods = args
            .neighbourhoods
            .unwrap_or_else(|| data_dir.join(DEFAULT_NEIGHBOURHOODS_FILE));
        let profiles = args
            .profiles
            .unwrap_or_else(|| data_dir.join(DEFAULT_PROFILES_FILE));

        Ok(Self {
            profile_id,
            neighbourhoods,
            profiles,
            metric_catalogue: args.metric_catalogue,
            top: args.top.unwrap_or(DEFAULT_TOP),
        })
    }
}

/// One ranked neighbourhood with its explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Recommendation {
    /// The ranked neighbourhood with normalised readings and score.
    pub(crate) neighbourhood: ScoredNeighbourhood,
    /// Why it suits the client.
    pub(crate) justification: Justification,
}

pub(crate) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_rank_config(args)?;
    let ranked = execute_rank(&config)?;
    write_json(writer, &ranked)
}

pub(crate) fn run_recommend_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_rank_config(args)?;
    let recommendations = execute_recommend(&config)?;
    write_json(writer, &recommendations)
}

fn resolve_rank_config(args: RankArgs) -> Result<RankConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    debug!("resolved rank configuration: {config:?}");
    Ok(config)
}

fn execute_rank(config: &RankConfig) -> Result<Vec<ScoredNeighbourhood>, CliError> {
    let store = JsonProfileStore::open(&config.profiles)?;
    let neighbourhoods = load_neighbourhoods(&config.neighbourhoods)?;
    let ranked = Ranker::new(&store).rank(&neighbourhoods, &config.profile_id, config.top)?;
    info!(
        "ranked {} of {} neighbourhoods for '{}'",
        ranked.len(),
        neighbourhoods.len(),
        config.profile_id
    );
    Ok(ranked)
}

fn execute_recommend(config: &RankConfig) -> Result<Vec<Recommendation>, CliError> {
    let store = JsonProfileStore::open(&config.profiles)?;
    let neighbourhoods = load_neighbourhoods(&config.neighbourhoods)?;
    let catalogue = load_catalogue(config.metric_catalogue.as_deref())?;
    let ranked = Ranker::new(&store).rank(&neighbourhoods, &config.profile_id, config.top)?;
    let justifier = Justifier::new(&store).with_describer(catalogue);
    ranked
        .into_iter()
        .map(|neighbourhood| -> Result<Recommendation, CliError> {
            let justification = justifier.justify(&neighbourhood, &config.profile_id)?;
            Ok(Recommendation {
                neighbourhood,
                justification,
            })
        })
        .collect()
}

/// Load a JSON array of neighbourhood records.
pub(crate) fn load_neighbourhoods(path: &Utf8Path) -> Result<Vec<Neighbourhood>, CliError> {
    read_input(path, ARG_NEIGHBOURHOODS)
}

/// Built-in descriptions, extended by the entries in `overrides` when given.
pub(crate) fn load_catalogue(overrides: Option<&Utf8Path>) -> Result<MetricCatalogue, CliError> {
    let mut catalogue = MetricCatalogue::default();
    if let Some(path) = overrides {
        let extra: MetricCatalogue = read_input(path, ARG_METRIC_CATALOGUE)?;
        debug!("loaded {} metric descriptions from {path}", extra.len());
        catalogue.extend([extra]);
    }
    Ok(catalogue)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
