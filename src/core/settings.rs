//! Deployment settings for the transport.

use crate::error::{NotifierError, Result};
use config::Environment;
use serde::Deserialize;

/// Environment prefix used by the Lambda binary (`NOTIFIER_ENDPOINT_URL`).
pub const ENV_PREFIX: &str = "NOTIFIER";

/// Deployment settings of a [`Notifier`](crate::core::Notifier).
///
/// These only affect how the transport is reached. Topic name, message and
/// subject are fixed and not configurable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NotifierSettings {
    /// SNS endpoint override, for local stacks.
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

impl NotifierSettings {
    /// Load settings from the process environment.
    ///
    /// Variables are named `{prefix}_{FIELD}`, e.g. `NOTIFIER_ENDPOINT_URL`.
    ///
    /// # Errors
    ///
    /// Returns `NotifierError::Config` if the environment cannot be read or
    /// the values don't deserialize.
    pub fn from_env(prefix: &str) -> Result<Self> {
        Self::load(environment(prefix))
    }

    /// Load settings from an explicit variable map instead of the process
    /// environment. Keys use the same `{prefix}_{FIELD}` naming.
    ///
    /// # Errors
    ///
    /// Same as [`from_env`](Self::from_env).
    pub fn from_vars<I, K, V>(prefix: &str, vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: config::Map<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::load(environment(prefix).source(Some(vars)))
    }

    fn load(env: Environment) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(env)
            .build()?
            .try_deserialize::<Self>()?;

        Ok(settings)
    }

    /// Check that the endpoint, when set, is an absolute HTTP(S) URL.
    ///
    /// # Errors
    ///
    /// Returns `NotifierError::InvalidSetting` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        let Some(url) = &self.endpoint_url else {
            return Ok(());
        };

        let host = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .ok_or_else(|| NotifierError::InvalidSetting {
                field: "endpoint_url",
                reason: "must start with http:// or https://".to_string(),
            })?;

        if host.is_empty() || host.starts_with('/') {
            return Err(NotifierError::InvalidSetting {
                field: "endpoint_url",
                reason: "has no host".to_string(),
            });
        }

        Ok(())
    }
}

fn environment(prefix: &str) -> Environment {
    Environment::with_prefix(prefix)
        .prefix_separator("_")
        .separator("__")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = NotifierSettings::default();
        assert!(settings.endpoint_url.is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_from_vars_empty_uses_defaults() {
        let settings =
            NotifierSettings::from_vars(ENV_PREFIX, Vec::<(String, String)>::new()).unwrap();
        assert_eq!(settings, NotifierSettings::default());
    }

    #[test]
    fn test_from_vars_endpoint() {
        let settings =
            NotifierSettings::from_vars(ENV_PREFIX, [("NOTIFIER_ENDPOINT_URL", "http://localhost:4566")])
                .unwrap();

        assert_eq!(
            settings.endpoint_url.as_deref(),
            Some("http://localhost:4566")
        );
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_topic_and_subject_vars_are_ignored() {
        let settings = NotifierSettings::from_vars(
            ENV_PREFIX,
            [
                ("NOTIFIER_TOPIC_NAME", "elsewhere"),
                ("NOTIFIER_SUBJECT", "Cat adopted!"),
            ],
        )
        .unwrap();
        assert_eq!(settings, NotifierSettings::default());
    }

    #[test]
    fn test_from_vars_ignores_other_prefixes() {
        let settings =
            NotifierSettings::from_vars(ENV_PREFIX, [("OTHER_ENDPOINT_URL", "http://x")]).unwrap();
        assert!(settings.endpoint_url.is_none());
    }

    #[test]
    fn test_invalid_endpoint() {
        for url in ["localhost:4566", "ftp://host", "http://", "https:///path"] {
            let settings = NotifierSettings {
                endpoint_url: Some(url.to_string()),
            };
            assert!(
                matches!(
                    settings.validate(),
                    Err(NotifierError::InvalidSetting {
                        field: "endpoint_url",
                        ..
                    })
                ),
                "{url} should be rejected"
            );
        }
    }
}
