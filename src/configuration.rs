use crate::api_client::ApiClient;
use serde_aux::field_attributes::deserialize_option_number_from_string;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub api: ApiSettings,
    pub verifier: VerifierSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApiSettings {
    pub base_url: String,
    // Unset means the reqwest default applies
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub timeout_milliseconds: Option<u64>,
}

impl ApiSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_milliseconds.map(Duration::from_millis)
    }

    pub fn client(&self) -> Result<ApiClient, reqwest::Error> {
        ApiClient::new(self.base_url.clone(), self.timeout())
    }
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct VerifierSettings {
    #[serde(default)]
    pub stop_on_failure: bool,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let configuration_directory = base_path.join("configuration");
    load_configuration(&configuration_directory, std::env::vars().collect())
}

/// Layer `base.yaml`, the environment file and `APP_*` variables, in that order.
///
/// `variables` stands in for the process environment.
pub fn load_configuration(
    configuration_directory: &Path,
    variables: HashMap<String, String>,
) -> Result<Settings, config::ConfigError> {
    // Detect the running environment.
    // Default to `local` if unspecified.
    let environment: Environment = variables
        .get("APP_ENVIRONMENT")
        .cloned()
        .unwrap_or_else(|| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(
            configuration_directory.join("base.yaml"),
        ))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // Add in settings from environment variables (with a prefix of APP and '__' as separator)
        // E.g. `APP_API__BASE_URL=http://127.0.0.1:3000` would set `Settings.api.base_url`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .source(Some(variables)),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

/// The possible runtime environment for the verifier.
#[derive(Debug, PartialEq)]
pub enum Environment {
    Local,
    Ci,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Ci => "ci",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "ci" => Ok(Self::Ci),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `ci`.",
                other
            )),
        }
    }
}
