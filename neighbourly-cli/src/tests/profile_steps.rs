//! Behaviour-driven step definitions for the profile management commands.

use super::helpers::{DataDir, write_json_file};
use super::*;
use camino::Utf8PathBuf;
use neighbourly_core::{ClientProfile, JsonProfileStore, ProfileStore, ProfileStoreError, Profiles};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::json;
use std::cell::RefCell;

#[derive(Debug)]
struct ProfileWorld {
    data: DataDir,
    profile_file: Utf8PathBuf,
    protected: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl ProfileWorld {
    fn new() -> Self {
        let data = DataDir::seeded();
        let profile_file = data.path("profile.json");
        Self {
            data,
            profile_file,
            protected: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn run(&self, mut argv: Vec<String>) {
        argv.extend([
            format!("--{ARG_DATA_DIR}"),
            self.data.root().as_str().to_owned(),
        ]);
        for id in self.protected.borrow().iter() {
            argv.extend(["--protect".to_owned(), id.clone()]);
        }
        let outcome = Cli::try_parse_from(argv)
            .map_err(CliError::from)
            .and_then(|cli| {
                let mut buffer = self.stdout.borrow_mut();
                run_command(cli.command, &mut *buffer)
            });
        self.result.replace(Some(outcome));
    }

    fn stored(&self) -> JsonProfileStore {
        JsonProfileStore::open(&self.data.profiles()).expect("profile store reopens")
    }
}

#[fixture]
fn profile_world() -> ProfileWorld {
    ProfileWorld::new()
}

fn unquote(text: &str) -> String {
    text.trim_matches('"').to_owned()
}

#[given("a data directory with stored client profiles")]
fn seeded_data_directory(#[from(profile_world)] world: &ProfileWorld) {
    assert_eq!(world.stored().list().len(), 2);
}

#[given("a profile file weighting {first} at {first_weight} and {second} at {second_weight}")]
fn profile_file(
    #[from(profile_world)] world: &ProfileWorld,
    first: String,
    first_weight: f64,
    second: String,
    second_weight: f64,
) {
    let mut weights = serde_json::Map::new();
    weights.insert(unquote(&first), json!(first_weight));
    weights.insert(unquote(&second), json!(second_weight));
    write_json_file(
        &world.profile_file,
        &json!({
            "name": "Arya - No one",
            "description": "Quiet parks and safe streets",
            "weights": weights,
        }),
    );
}

#[given("the profile {profile_id} is protected")]
fn profile_is_protected(#[from(profile_world)] world: &ProfileWorld, profile_id: String) {
    world.protected.borrow_mut().push(unquote(&profile_id));
}

#[given("the stored profile {profile_id} is marked protected")]
fn stored_profile_is_protected(#[from(profile_world)] world: &ProfileWorld, profile_id: String) {
    let id = unquote(&profile_id);
    let mut store = world.stored();
    let profile = store.get(&id).cloned().expect("profile should be stored");
    store
        .put(&id, profile.into_protected())
        .expect("protected profile stores");
}

#[when("I list the stored profiles")]
fn list_profiles(#[from(profile_world)] world: &ProfileWorld) {
    world.run(vec!["neighbourly".to_owned(), "profiles".to_owned()]);
}

#[when("I put the profile {profile_id}")]
fn put_profile(#[from(profile_world)] world: &ProfileWorld, profile_id: String) {
    world.run(vec![
        "neighbourly".to_owned(),
        "put-profile".to_owned(),
        unquote(&profile_id),
        format!("--{ARG_PROFILE_FILE}"),
        world.profile_file.as_str().to_owned(),
    ]);
}

#[when("I put the protected profile {profile_id}")]
fn put_protected_profile(#[from(profile_world)] world: &ProfileWorld, profile_id: String) {
    world.run(vec![
        "neighbourly".to_owned(),
        "put-profile".to_owned(),
        unquote(&profile_id),
        format!("--{ARG_PROFILE_FILE}"),
        world.profile_file.as_str().to_owned(),
        "--protected".to_owned(),
    ]);
}

#[when("I remove the profile {profile_id}")]
fn remove_profile(#[from(profile_world)] world: &ProfileWorld, profile_id: String) {
    world.run(vec![
        "neighbourly".to_owned(),
        "remove-profile".to_owned(),
        unquote(&profile_id),
    ]);
}

#[then("the profile command succeeds")]
fn command_succeeds(#[from(profile_world)] world: &ProfileWorld) {
    let borrowed = world.result.borrow();
    if let Err(err) = borrowed.as_ref().expect("result recorded") {
        panic!("expected success, found {err:?}");
    }
}

#[then("the listed profiles are {ids}")]
fn listed_profiles(#[from(profile_world)] world: &ProfileWorld, ids: String) {
    let stdout = String::from_utf8(world.stdout.borrow().clone()).expect("stdout utf-8");
    let listed: Profiles = serde_json::from_str(&stdout).expect("output should be profiles");
    let mut observed: Vec<&str> = listed.keys().map(String::as_str).collect();
    observed.sort_unstable();
    let expected = unquote(&ids);
    assert_eq!(observed, expected.split(", ").collect::<Vec<_>>());
}

#[then("the store holds {count} profiles")]
fn store_holds(#[from(profile_world)] world: &ProfileWorld, count: usize) {
    assert_eq!(world.stored().list().len(), count);
}

#[then("the stored profile {profile_id} weights {metric} at {weight}")]
fn stored_weight(
    #[from(profile_world)] world: &ProfileWorld,
    profile_id: String,
    metric: String,
    weight: f64,
) {
    let store = world.stored();
    let profile: &ClientProfile = store
        .get(&unquote(&profile_id))
        .expect("profile should be stored");
    assert_eq!(profile.weights.get(&unquote(&metric)), Some(weight));
}

#[then("the command fails because the profile is invalid")]
fn fails_invalid(#[from(profile_world)] world: &ProfileWorld) {
    let borrowed = world.result.borrow();
    let error = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect_err("expected error");
    assert!(
        matches!(error, CliError::Store(ProfileStoreError::Invalid { .. })),
        "unexpected error: {error:?}"
    );
}

#[then("the command fails because {profile_id} is protected")]
fn fails_protected(#[from(profile_world)] world: &ProfileWorld, profile_id: String) {
    let borrowed = world.result.borrow();
    let error = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect_err("expected error");
    match error {
        CliError::Store(ProfileStoreError::Protected { profile_id: refused }) => {
            assert_eq!(refused, &unquote(&profile_id));
        }
        other => panic!("expected Protected, found {other:?}"),
    }
}

macro_rules! register_profile_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/profile_commands.feature", name = $scenario_title)]
        fn $fn_name(#[from(profile_world)] world: ProfileWorld) {
            let _ = world;
        }
    };
}

register_profile_scenario!(list_stored_profiles, "listing stored profiles");
register_profile_scenario!(store_new_profile, "storing a new profile");
register_profile_scenario!(
    reject_unbalanced_weights,
    "rejecting a profile whose weights do not sum to one"
);
register_profile_scenario!(remove_existing_profile, "removing a profile");
register_profile_scenario!(refuse_protected_removal, "refusing to remove a protected profile");
register_profile_scenario!(
    refuse_stored_protected_removal,
    "refusing to remove a profile stored as protected"
);
register_profile_scenario!(
    protection_outlives_the_command,
    "protecting a profile when storing it"
);
register_profile_scenario!(
    protection_survives_replacement,
    "replacing a protected profile keeps it protected"
);
