//! Fixture datasets written into temporary directories.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::json;
use tempfile::TempDir;

/// A temporary data directory holding `neighbourhoods.json` and `clients.json`.
#[derive(Debug)]
pub(super) struct DataDir {
    _tmp: TempDir,
    root: Utf8PathBuf,
}

impl DataDir {
    /// Write the default Los Angeles dataset and two client profiles.
    pub(super) fn seeded() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        let data = Self { _tmp: tmp, root };
        write_json_file(&data.neighbourhoods(), &neighbourhoods_json());
        write_json_file(&data.profiles(), &profiles_json());
        data
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn neighbourhoods(&self) -> Utf8PathBuf {
        self.root.join("neighbourhoods.json")
    }

    pub(super) fn profiles(&self) -> Utf8PathBuf {
        self.root.join("clients.json")
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }
}

pub(super) fn write_utf8(path: &Utf8Path, bytes: &[u8]) {
    std::fs::write(path.as_std_path(), bytes).expect("write fixture file");
}

pub(super) fn write_json_file(path: &Utf8Path, value: &serde_json::Value) {
    let payload = serde_json::to_string_pretty(value).expect("serialise fixture");
    write_utf8(path, payload.as_bytes());
}

pub(super) fn neighbourhoods_json() -> serde_json::Value {
    json!([
        {
            "name": "Beverly Hills", "lat": 34.0736, "lon": -118.4004, "zipcode": "90210",
            "density_parks": 7.0, "ratio_local_businesses": 0.4,
            "community_organizations": 3.0, "dog_friendly_parks": 2.0,
            "median_income": 150000.0, "low_crime_rate": 0.95
        },
        {
            "name": "Downtown LA", "lat": 34.0407, "lon": -118.2468,
            "density_parks": 4.0, "ratio_local_businesses": 0.6,
            "community_organizations": 8.0, "dog_friendly_parks": 1.0,
            "median_income": 60000.0, "low_crime_rate": 0.5
        },
        {
            "name": "Venice", "lat": 33.985, "lon": -118.4695,
            "density_parks": 9.0, "ratio_local_businesses": 0.8,
            "community_organizations": 7.0, "dog_friendly_parks": 5.0,
            "median_income": 90000.0, "low_crime_rate": null
        }
    ])
}

pub(super) fn profiles_json() -> serde_json::Value {
    json!({
        "daenerys": {
            "name": "Daenerys - Mother of dragons",
            "description": "Needs green space for her dogs",
            "weights": {
                "density_parks": 0.4,
                "ratio_local_businesses": 0.25,
                "community_organizations": 0.2,
                "dog_friendly_parks": 0.15
            }
        },
        "cersei": {
            "name": "Cersei - The queen",
            "description": "Wants an exclusive, safe area",
            "weights": { "median_income": 0.6, "low_crime_rate": 0.4 }
        }
    })
}
