//! Focused unit tests covering CLI configuration and input loading.

use super::helpers::{DataDir, write_utf8};
use crate::rank::{
    RankArgs, RankConfig, config_from_layers_for_test, load_catalogue, load_neighbourhoods,
};
use super::*;
use neighbourly_core::MetricDescriber;
use rstest::rstest;

fn args_for(data: &DataDir) -> RankArgs {
    RankArgs {
        profile_id: Some("daenerys".to_owned()),
        data_dir: Some(data.root().to_path_buf()),
        ..RankArgs::default()
    }
}

#[rstest]
fn converting_without_profile_id_errors() {
    let err = RankConfig::try_from(RankArgs::default()).expect_err("missing profile id");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_PROFILE_ID);
            assert_eq!(env, ENV_PROFILE_ID);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn missing_argument_names_flag_and_variable() {
    let err = RankConfig::try_from(RankArgs::default()).expect_err("missing profile id");
    assert_eq!(
        err.to_string(),
        "missing profile-id (set --profile-id or NEIGHBOURLY_PROFILE_ID)"
    );
}

#[rstest]
fn config_derives_default_paths_from_data_dir() {
    let data = DataDir::seeded();
    let config = RankConfig::try_from(args_for(&data)).expect("config should build");
    assert_eq!(config.neighbourhoods, data.neighbourhoods());
    assert_eq!(config.profiles, data.profiles());
    assert_eq!(config.metric_catalogue, None);
    assert_eq!(config.top, DEFAULT_TOP);
    config.validate_sources().expect("seeded files exist");
}

#[rstest]
fn config_defaults_to_current_directory() {
    let args = RankArgs {
        profile_id: Some("cersei".to_owned()),
        ..RankArgs::default()
    };
    let config = RankConfig::try_from(args).expect("config should build");
    assert_eq!(config.neighbourhoods.as_str(), "./neighbourhoods.json");
    assert_eq!(config.profiles.as_str(), "./clients.json");
}

#[rstest]
fn explicit_paths_override_data_dir() {
    let data = DataDir::seeded();
    let other = data.path("elsewhere.json");
    let args = RankArgs {
        neighbourhoods: Some(other.clone()),
        top: Some(2),
        ..args_for(&data)
    };
    let config = RankConfig::try_from(args).expect("config should build");
    assert_eq!(config.neighbourhoods, other);
    assert_eq!(config.profiles, data.profiles());
    assert_eq!(config.top, 2);
}

#[rstest]
#[case::neighbourhoods(ARG_NEIGHBOURHOODS)]
#[case::profiles(ARG_PROFILES)]
#[case::catalogue(ARG_METRIC_CATALOGUE)]
fn validate_sources_reports_missing_files(#[case] missing: &'static str) {
    let data = DataDir::seeded();
    let absent = data.path("absent.json");
    let mut config = RankConfig::try_from(args_for(&data)).expect("config should build");
    match missing {
        ARG_NEIGHBOURHOODS => config.neighbourhoods = absent,
        ARG_PROFILES => config.profiles = absent,
        _ => config.metric_catalogue = Some(absent),
    }
    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, missing),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file() {
    let data = DataDir::seeded();
    let directory = data.path("dataset-dir");
    std::fs::create_dir(directory.as_std_path()).expect("create directory");
    let config = RankConfig {
        neighbourhoods: directory.clone(),
        ..RankConfig::try_from(args_for(&data)).expect("config should build")
    };
    let err = config.validate_sources().expect_err("directory should fail");
    match err {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_NEIGHBOURHOODS);
            assert_eq!(path, directory);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn load_neighbourhoods_decodes_flat_records() {
    let data = DataDir::seeded();
    let neighbourhoods = load_neighbourhoods(&data.neighbourhoods()).expect("dataset decodes");
    assert_eq!(neighbourhoods.len(), 3);
    let venice = neighbourhoods
        .iter()
        .find(|n| n.name == "Venice")
        .expect("Venice present");
    assert_eq!(venice.metrics.value("density_parks"), 9.0);
    assert!(venice.metrics.get("low_crime_rate").is_none());
}

#[rstest]
fn load_neighbourhoods_keeps_non_numeric_json_readings() {
    let data = DataDir::seeded();
    let path = data.path("flags.json");
    write_utf8(
        &path,
        br#"[{"name": "Barnes", "lat": 51.47, "lon": -0.24,
              "has_ferry": true, "postcodes": ["SW13"], "density_parks": 4}]"#,
    );
    let neighbourhoods = load_neighbourhoods(&path).expect("dataset decodes");
    let barnes = neighbourhoods.first().expect("one record");
    assert_eq!(barnes.metrics.value("has_ferry"), 0.0);
    assert_eq!(
        barnes.metrics.get("has_ferry").map(ToString::to_string),
        Some("true".to_owned())
    );
    assert_eq!(
        barnes.metrics.get("postcodes").map(ToString::to_string),
        Some(r#"["SW13"]"#.to_owned())
    );
    assert_eq!(barnes.metrics.value("density_parks"), 4.0);
}

#[rstest]
fn load_neighbourhoods_rejects_invalid_json() {
    let data = DataDir::seeded();
    let path = data.path("broken.json");
    write_utf8(&path, b"[{ not json");
    let err = load_neighbourhoods(&path).expect_err("invalid json should error");
    match err {
        CliError::ParseInput { field, path: reported, .. } => {
            assert_eq!(field, ARG_NEIGHBOURHOODS);
            assert_eq!(reported, path);
        }
        other => panic!("expected ParseInput, found {other:?}"),
    }
}

#[rstest]
fn load_neighbourhoods_reports_read_errors() {
    let data = DataDir::seeded();
    let err = load_neighbourhoods(&data.path("missing.json")).expect_err("missing file");
    assert!(matches!(err, CliError::ReadInput { .. }), "{err:?}");
}

#[rstest]
fn catalogue_overrides_extend_built_ins() {
    let data = DataDir::seeded();
    let path = data.path("metrics.json");
    write_utf8(
        &path,
        br#"{"density_parks": {
            "display_name": "Green Space",
            "short_description": "Parks and gardens",
            "highlight": "plenty of green space"
        }}"#,
    );
    let catalogue = load_catalogue(Some(&path)).expect("catalogue loads");
    assert_eq!(catalogue.describe("density_parks").highlight, "plenty of green space");
    assert_eq!(catalogue.describe("median_income").highlight, "high median income");
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "top": "many" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence_and_defaults_paths() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let data = DataDir::seeded();
    let cli_dir = data.path("from-cli");
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "data_dir": data.path("from-file").as_str(),
            "top": 3,
        }),
        None,
    );
    composer.push_environment(json!({
        "profile_id": "cersei",
        "data_dir": data.path("from-env").as_str(),
    }));
    composer.push_cli(json!({
        "data_dir": cli_dir.as_str(),
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.profile_id, "cersei");
    assert_eq!(config.neighbourhoods, cli_dir.join(DEFAULT_NEIGHBOURHOODS_FILE));
    assert_eq!(config.profiles, cli_dir.join(DEFAULT_PROFILES_FILE));
    assert_eq!(config.top, 3);
}

#[rstest]
fn write_json_appends_newline() {
    let mut buffer = Vec::new();
    write_json(&mut buffer, &serde_json::json!({ "ok": true })).expect("write");
    let text = String::from_utf8(buffer).expect("utf-8");
    assert!(text.ends_with("}\n"), "{text:?}");
}
