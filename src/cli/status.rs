//! Status command implementation

use colored::Colorize;

use crate::cli::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Show where configuration comes from and what it resolves to
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "LiteLLM Provider Configuration Status".bold());

    match opts.config_ref() {
        Some(path) => println!("Config file: {}", path.cyan()),
        None => println!(
            "Config file: {}",
            Config::default_path()?.display().to_string().cyan()
        ),
    }

    let config = Config::load_at(opts.config_ref())?
        .with_overrides(opts.api_base_ref(), opts.api_key_ref());

    match config.base_url() {
        Ok(url) => println!("{} API base URL: {}", "✓".green(), url),
        Err(e) => println!("{} {}", "✗".red(), e),
    }

    if config.api_key.is_some() {
        println!("{} API key configured", "✓".green());
    } else {
        println!("{} No API key configured", "○".dimmed());
    }

    Ok(())
}
