use std::sync::Arc;

use anyhow::{Context, Result};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::contact::sink::{sink_from_config, ContactSink};
use crate::models::profile::Profile;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything in it is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<Catalog>,
    pub profile: Arc<Profile>,
    /// Pluggable delivery backend for contact messages. Default: LogSink.
    pub contact_sink: Arc<dyn ContactSink>,
}

impl AppState {
    /// Loads and validates the embedded content and picks the contact sink.
    pub fn new(config: Config) -> Result<Self> {
        let catalog = Catalog::embedded().context("Embedded concept catalog is invalid")?;
        let profile = Profile::embedded().context("Embedded profile is invalid")?;
        let contact_sink = sink_from_config(&config)?;

        Ok(AppState {
            config,
            catalog: Arc::new(catalog),
            profile: Arc::new(profile),
            contact_sink: Arc::from(contact_sink),
        })
    }
}
