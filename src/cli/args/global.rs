//! Global CLI options shared across all commands

use crate::cli::Cli;

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// For connection settings the precedence is: CLI flag > environment variable >
/// config file. This struct captures the CLI/env layer; config file values are
/// merged in `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Custom config file path (defaults to ~/.litellm-provider/config.yaml)
    pub config: Option<String>,

    /// Proxy base URL override
    pub api_base: Option<String>,

    /// Proxy API key override
    pub api_key: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            config: cli.config.clone(),
            api_base: cli.api_base.clone(),
            api_key: cli.api_key.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get base URL override as `Option<&str>`.
    pub fn api_base_ref(&self) -> Option<&str> {
        self.api_base.as_deref()
    }

    /// Get API key override as `Option<&str>`.
    pub fn api_key_ref(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}
