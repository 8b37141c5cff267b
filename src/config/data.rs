use std::{
    collections::{hash_map::Entry, HashMap},
    io::Read,
};

use serde::{Deserialize, Serialize};
use strum_macros::AsRefStr;
use toml::Value;

use super::{ConfigError, ConfigResult};

// ###################################
// ->   STRUCTS
// ###################################

#[derive(AsRefStr, Debug)]
pub enum Environment {
    Local,
    Production,
}

#[derive(Deserialize, Clone, Debug)]
pub struct AppConfig {
    pub form_config: FormConfig,
}

/// Everything the page declares about the subscription form.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FormConfig {
    pub action_url: String,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct AppConfigBuilder(HashMap<String, HashMap<String, Value>>);

// ###################################
// ->   IMPLs
// ###################################
impl AppConfig {
    pub fn init() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

impl FormConfig {
    /// Parses the declared action target into a proper `Url`.
    pub fn action_target(&self) -> ConfigResult<reqwest::Url> {
        reqwest::Url::parse(&self.action_url)
            .map_err(|er| ConfigError::ActionUrlInvalid(er.to_string()))
    }
}

impl AppConfigBuilder {
    /// Overlays the sections of `file` onto the builder, later sources win key by key.
    pub fn add_source(mut self, mut file: std::fs::File) -> ConfigResult<Self> {
        let mut raw = String::new();
        file.read_to_string(&mut raw)?;

        let overlay: AppConfigBuilder = toml::from_str(&raw)?;
        for (section, table) in overlay.0 {
            match self.0.entry(section) {
                Entry::Vacant(e) => {
                    e.insert(table);
                }
                Entry::Occupied(mut e) => e.get_mut().extend(table),
            }
        }

        Ok(self)
    }

    pub fn build(self) -> ConfigResult<AppConfig> {
        let merged = toml::to_string(&self)?;
        let app_config: AppConfig = toml::from_str(&merged)?;
        Ok(app_config)
    }
}

// ###################################
// ->   TRY FROMs
// ###################################

impl TryFrom<String> for Environment {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            _ => Err(ConfigError::StringToEnvironmentFail),
        }
    }
}

// ###################################
// ->   TESTS
// ###################################
