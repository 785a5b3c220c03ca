use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable that, when set, points the catalogue at a directory of
/// fixture files instead of the bundled ones.
pub const FIXTURE_DIR_ENV: &str = "CATALOGUE_FIXTURE_DIR";

#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogueConfig {
    pub fixture_source: FixtureSource,
}

/// Where the reference data is read from.
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixtureSource {
    /// The fixture set compiled into the crate.
    #[default]
    Bundled,
    /// A directory containing `users.json`, `categories.json` and
    /// `products.json`.
    Directory(PathBuf),
}

impl CatalogueConfig {
    /// The default configuration, with the fixture directory taken from
    /// [`FIXTURE_DIR_ENV`] if it is set and non-empty.
    pub fn from_env() -> Self {
        Self::with_fixture_dir(std::env::var_os(FIXTURE_DIR_ENV).map(PathBuf::from))
    }

    fn with_fixture_dir(dir: Option<PathBuf>) -> Self {
        match dir {
            Some(dir) if !dir.as_os_str().is_empty() => {
                CatalogueConfig { fixture_source: FixtureSource::Directory(dir) }
            }
            _ => CatalogueConfig::default(),
        }
    }
}
