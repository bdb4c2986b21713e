//! Builder for constructing Notifier instances.

use crate::core::{Notifier, NotifierSettings};
use crate::error::Result;
use crate::transport::Publisher;
use std::sync::Arc;
use tracing::info;

/// Builder for constructing a `Notifier`.
///
/// Settings are taken from, in order of preference: an explicit
/// [`with_settings`](Self::with_settings) value, environment variables under
/// the [`with_env_overrides`](Self::with_env_overrides) prefix, the defaults.
/// They are validated in [`build`](Self::build).
///
/// # Examples
///
/// ```rust,no_run
/// use adoption_notifier::prelude::*;
///
/// # async fn example() -> Result<()> {
/// // SNS publisher, NOTIFIER_* overrides
/// let notifier = Notifier::builder()
///     .with_env_overrides("NOTIFIER")
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct NotifierBuilder {
    publisher: Option<Arc<dyn Publisher>>,
    settings: Option<NotifierSettings>,
    env_prefix: Option<String>,
}

impl NotifierBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given publisher instead of the SNS default.
    pub fn with_publisher<P: Publisher + 'static>(self, publisher: P) -> Self {
        self.with_shared_publisher(Arc::new(publisher))
    }

    /// Use a publisher that is also held elsewhere.
    pub fn with_shared_publisher(mut self, publisher: Arc<dyn Publisher>) -> Self {
        self.publisher = Some(publisher);
        self
    }

    /// Use explicit settings. Takes precedence over environment overrides.
    pub fn with_settings(mut self, settings: NotifierSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Read settings from `{prefix}_*` environment variables.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use adoption_notifier::prelude::*;
    ///
    /// // NOTIFIER_ENDPOINT_URL=http://localhost:4566 -> endpoint_url
    /// Notifier::builder().with_env_overrides("NOTIFIER");
    /// ```
    pub fn with_env_overrides(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Build the notifier.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Environment settings fail to load
    /// - The endpoint setting is invalid
    /// - No publisher was given and the `sns` feature is disabled
    pub async fn build(self) -> Result<Notifier> {
        let settings = match (self.settings, self.env_prefix) {
            (Some(settings), _) => settings,
            (None, Some(prefix)) => NotifierSettings::from_env(&prefix)?,
            (None, None) => NotifierSettings::default(),
        };

        settings.validate()?;

        let publisher = match self.publisher {
            Some(publisher) => publisher,
            None => default_publisher(&settings).await?,
        };

        info!(
            publisher = %publisher.name(),
            endpoint_url = settings.endpoint_url.as_deref().unwrap_or("default"),
            "Notifier ready"
        );

        Ok(Notifier::new(publisher, settings))
    }
}

#[cfg(feature = "sns")]
async fn default_publisher(settings: &NotifierSettings) -> Result<Arc<dyn Publisher>> {
    let publisher =
        crate::transport::SnsPublisher::from_env(settings.endpoint_url.as_deref()).await;
    Ok(Arc::new(publisher))
}

#[cfg(not(feature = "sns"))]
async fn default_publisher(_settings: &NotifierSettings) -> Result<Arc<dyn Publisher>> {
    Err(crate::error::NotifierError::MissingPublisher(
        "enable the 'sns' feature or call with_publisher",
    ))
}
