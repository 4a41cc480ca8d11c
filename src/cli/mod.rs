//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod context;
pub mod init;
pub mod resource;
pub mod roles;
pub mod status;

pub use args::{GlobalOptions, StateArgs};
pub use context::CommandContext;

use crate::resources::Operation;

/// Reconcile LiteLLM team memberships and users from declared state
#[derive(Parser, Debug)]
#[command(name = "litellm-provider")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Override config file location
    #[arg(long, global = true, env = "LITELLM_PROVIDER_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// LiteLLM proxy base URL
    #[arg(long, global = true, env = "LITELLM_API_BASE", hide_env = true)]
    pub api_base: Option<String>,

    /// LiteLLM proxy API key
    #[arg(
        long,
        global = true,
        env = "LITELLM_API_KEY",
        hide_env = true,
        hide_env_values = true
    )]
    pub api_key: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "LITELLM_PROVIDER_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write connection settings to the config file
    Init,

    /// Reconcile a litellm_team_membership resource
    #[command(subcommand)]
    TeamMembership(ResourceCommands),

    /// Reconcile a litellm_user resource
    #[command(subcommand)]
    User(ResourceCommands),

    /// List role names accepted for team memberships
    Roles,

    /// Show resolved connection settings
    Status,
}

/// Lifecycle operations available on every resource type
#[derive(Subcommand, Debug)]
pub enum ResourceCommands {
    /// Create the remote record from declared state
    Create(StateArgs),

    /// Read the remote record back into declared state
    Read(StateArgs),

    /// Push declared changes to the remote record
    Update(StateArgs),

    /// Remove the remote record
    Delete(StateArgs),

    /// Check declared state without contacting the proxy
    Validate(StateArgs),
}

impl ResourceCommands {
    /// Operation to run, or `None` for validation only
    pub fn operation(&self) -> Option<Operation> {
        match self {
            ResourceCommands::Create(_) => Some(Operation::Create),
            ResourceCommands::Read(_) => Some(Operation::Read),
            ResourceCommands::Update(_) => Some(Operation::Update),
            ResourceCommands::Delete(_) => Some(Operation::Delete),
            ResourceCommands::Validate(_) => None,
        }
    }

    /// Declared-state input of the command
    pub fn state(&self) -> &StateArgs {
        match self {
            ResourceCommands::Create(s)
            | ResourceCommands::Read(s)
            | ResourceCommands::Update(s)
            | ResourceCommands::Delete(s)
            | ResourceCommands::Validate(s) => s,
        }
    }
}
