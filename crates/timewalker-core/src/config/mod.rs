use std::io::Read;

use anyhow::Result;
use config::{Config, Environment, FileFormat, Map, Source};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub zone: ZoneConfig,
    pub walk: WalkConfig,
    pub logging: LoggingConfig,
}

/// Timezone in which civil boundaries are computed.
#[derive(Debug, Clone, Deserialize)]
pub struct ZoneConfig {
    /// IANA name, Windows name or a known alias.
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WalkConfig {
    /// Calendar unit name: `day`, `month` or `year`.
    pub unit: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Optional settings file next to the working directory.
const CONFIG_FILE: &str = "timewalker.toml";

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional `timewalker.toml`.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Self::layered(
            config::File::with_name(CONFIG_FILE).required(false),
            std::env::vars().collect(),
        )
    }

    /// ## Summary
    /// Builds a `Settings` from an inline TOML document layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the document is malformed or has mistyped values.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Self::layered(config::File::from_str(source, FileFormat::Toml), Map::new())
    }

    /// Defaults, then `file`, then `vars` read as `SECTION_KEY` variables.
    fn layered<F>(file: F, vars: Map<String, String>) -> Result<Self>
    where
        F: Source + Send + Sync + 'static,
    {
        Ok(Config::builder()
            .set_default("zone.name", "UTC")?
            .set_default("walk.unit", "day")?
            .set_default("logging.level", "info")?
            .add_source(file)
            .add_source(
                Environment::default()
                    .source(Some(vars))
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// `.env` entries with the process environment layered on top.
fn merge_dotenv<R: Read>(
    dotenv: dotenvy::Iter<R>,
    process: impl IntoIterator<Item = (String, String)>,
) -> Result<Map<String, String>> {
    let mut vars = dotenv.collect::<Result<Map<_, _>, _>>()?;
    vars.extend(process);
    Ok(vars)
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// Variables already set in the process win over `.env` entries.
///
/// ## Errors
/// Returns an error if `.env` is malformed, or if loading or deserializing the
/// configuration fails.
pub fn load_config() -> Result<Settings> {
    let vars = match dotenvy::dotenv_iter() {
        Ok(dotenv) => merge_dotenv(dotenv, std::env::vars())?,
        Err(e) => {
            tracing::debug!(error = %e, "No .env file loaded");
            std::env::vars().collect()
        }
    };

    Settings::layered(config::File::with_name(CONFIG_FILE).required(false), vars)
}
