use std::env;
use std::fmt;

use thiserror::Error;

pub const ENV_ENDPOINT: &str = "AZURE_OPENAI_ENDPOINT";
pub const ENV_API_KEY: &str = "AZURE_OPENAI_API_KEY";
pub const ENV_DEPLOYMENT: &str = "AZURE_OPENAI_DEPLOYMENT_NAME";
pub const ENV_API_VERSION: &str = "AZURE_OPENAI_API_VERSION";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "missing required environment variables: {}. Define them in your shell or copy .env.example to .env and fill in the values.",
        .0.join(", ")
    )]
    MissingEnvVars(Vec<String>),
}

#[derive(Clone)]
pub struct Config {
    pub endpoint: String,
    pub api_key: String,
    pub deployment: String,
    pub api_version: String,
}

// The api key must never reach diagnostics, including `{:?}` output.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("deployment", &self.deployment)
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|key| env::var(key).ok())
    }

    fn from_env_with(
        mut get_var: impl FnMut(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let endpoint = fetch_trimmed(&mut get_var, ENV_ENDPOINT);
        let api_key = fetch_trimmed(&mut get_var, ENV_API_KEY);
        let deployment = fetch_trimmed(&mut get_var, ENV_DEPLOYMENT);
        let api_version = fetch_trimmed(&mut get_var, ENV_API_VERSION);

        match (endpoint, api_key, deployment, api_version) {
            (Some(endpoint), Some(api_key), Some(deployment), Some(api_version)) => Ok(Self {
                endpoint: ensure_trailing_slash(&endpoint),
                api_key,
                deployment,
                api_version,
            }),
            (endpoint, api_key, deployment, api_version) => {
                let missing = [
                    (ENV_ENDPOINT, endpoint.is_none()),
                    (ENV_API_KEY, api_key.is_none()),
                    (ENV_DEPLOYMENT, deployment.is_none()),
                    (ENV_API_VERSION, api_version.is_none()),
                ]
                .into_iter()
                .filter(|(_, is_missing)| *is_missing)
                .map(|(name, _)| name.to_string())
                .collect();
                Err(ConfigError::MissingEnvVars(missing))
            }
        }
    }
}

fn fetch_trimmed(
    get_var: &mut impl FnMut(&str) -> Option<String>,
    name: &str,
) -> Option<String> {
    get_var(name)
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn ensure_trailing_slash(endpoint: &str) -> String {
    if endpoint.ends_with('/') {
        endpoint.to_string()
    } else {
        format!("{endpoint}/")
    }
}
