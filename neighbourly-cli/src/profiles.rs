//! Client profile management commands.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use log::info;
use neighbourly_core::{
    ClientProfile, JsonProfileStore, ProfileStore, ProfileStoreError, ProfileUpdate,
};

use crate::{
    ARG_DATA_DIR, ARG_PROFILE_FILE, ARG_PROFILES, CliError, DEFAULT_PROFILES_FILE, read_input,
    require_existing, write_json,
};

/// Location of the profile store.
#[derive(Debug, Clone, Default, Args)]
pub(crate) struct StoreArgs {
    /// Directory containing `clients.json`.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Override the path to the client profiles (`clients.json`).
    #[arg(long = ARG_PROFILES, value_name = "path")]
    pub(crate) profiles: Option<Utf8PathBuf>,
    /// Profile identifiers that may not be removed. Repeat for several.
    #[arg(long = "protect", value_name = "profile-id")]
    pub(crate) protect: Vec<String>,
}

impl StoreArgs {
    pub(crate) fn profiles_path(&self) -> Utf8PathBuf {
        self.profiles.clone().unwrap_or_else(|| {
            self.data_dir
                .as_deref()
                .unwrap_or(Utf8Path::new("."))
                .join(DEFAULT_PROFILES_FILE)
        })
    }

    pub(crate) fn open(&self) -> Result<JsonProfileStore, CliError> {
        let store = JsonProfileStore::open(&self.profiles_path())?;
        Ok(store.with_protected(self.protect.iter().cloned()))
    }
}

/// CLI arguments for the `put-profile` subcommand.
#[derive(Debug, Clone, Args)]
pub(crate) struct PutProfileArgs {
    /// Identifier to store the profile under.
    #[arg(value_name = "profile-id")]
    pub(crate) profile_id: String,
    /// JSON file holding the profile (or, with `--update`, the fields to change).
    #[arg(long = ARG_PROFILE_FILE, value_name = "path")]
    pub(crate) file: Utf8PathBuf,
    /// Merge the file into the existing profile instead of replacing it.
    #[arg(long)]
    pub(crate) update: bool,
    /// Store the profile as protected so later removals are refused.
    #[arg(long)]
    pub(crate) protected: bool,
    #[command(flatten)]
    pub(crate) store: StoreArgs,
}

/// CLI arguments for the `remove-profile` subcommand.
#[derive(Debug, Clone, Args)]
pub(crate) struct RemoveProfileArgs {
    /// Identifier of the profile to remove.
    #[arg(value_name = "profile-id")]
    pub(crate) profile_id: String,
    #[command(flatten)]
    pub(crate) store: StoreArgs,
}

pub(crate) fn run_list_profiles_with(
    args: &StoreArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let store = args.open()?;
    write_json(writer, store.list())
}

pub(crate) fn run_put_profile_with(
    args: &PutProfileArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    require_existing(&args.file, ARG_PROFILE_FILE)?;
    let mut store = args.store.open()?;
    let mut profile = if args.update {
        let update: ProfileUpdate = read_input(&args.file, ARG_PROFILE_FILE)?;
        let mut current = store.get(&args.profile_id).cloned().ok_or_else(|| {
            ProfileStoreError::NotFound {
                profile_id: args.profile_id.clone(),
            }
        })?;
        current.apply(update);
        current
    } else {
        read_input::<ClientProfile>(&args.file, ARG_PROFILE_FILE)?
    };
    if args.protected {
        profile = profile.into_protected();
    }
    store.put(&args.profile_id, profile)?;
    info!("stored profile '{}' in {}", args.profile_id, store.path());
    let stored = store
        .get(&args.profile_id)
        .ok_or_else(|| ProfileStoreError::NotFound {
            profile_id: args.profile_id.clone(),
        })?;
    write_json(writer, stored)
}

pub(crate) fn run_remove_profile_with(
    args: &RemoveProfileArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let mut store = args.store.open()?;
    let removed = store.remove(&args.profile_id)?;
    info!("removed profile '{}' from {}", args.profile_id, store.path());
    write_json(writer, &removed)
}
