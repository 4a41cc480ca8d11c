//! litellm-provider - team membership and user reconciliation for the LiteLLM proxy

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod resources;

use cli::{Cli, Commands, GlobalOptions};
use error::Result;
use resources::{team_membership, user};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match &cli.command {
        Commands::TeamMembership(cmd) => {
            cli::resource::run(&opts, team_membership::TYPE_NAME, cmd).await
        }
        Commands::User(cmd) => cli::resource::run(&opts, user::TYPE_NAME, cmd).await,
        Commands::Init => cli::init::run(&opts),
        Commands::Roles => {
            cli::roles::run();
            Ok(())
        }
        Commands::Status => cli::status::run(&opts),
    }
}
