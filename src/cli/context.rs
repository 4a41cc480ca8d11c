//! Command execution context
//!
//! Resolves configuration from the config file and CLI/env overrides and
//! builds the API client handed to the reconcilers.

use log::debug;

use crate::cli::GlobalOptions;
use crate::client::LitellmClient;
use crate::config::Config;
use crate::error::Result;

/// Context for commands that talk to the proxy
pub struct CommandContext {
    /// Resolved configuration
    #[allow(dead_code)]
    pub config: Config,
    /// API client, shared read-only by every reconciliation call
    pub client: LitellmClient,
}

impl CommandContext {
    /// Load configuration, apply overrides and build the client.
    ///
    /// # Errors
    /// Returns error if the config file cannot be read or no valid base URL
    /// is configured.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?
            .with_overrides(opts.api_base_ref(), opts.api_key_ref());

        let client = LitellmClient::new(config.base_url()?, config.api_key.clone())?;
        debug!("Using LiteLLM proxy at {}", client.base_url());
        if config.api_key.is_none() {
            debug!("No API key configured; requests are sent without authorization");
        }

        Ok(Self { config, client })
    }
}
