//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Run the init command
///
/// Values passed via flags or environment variables are used as-is; anything
/// missing is prompted for. The result is written to the config file.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "LiteLLM provider setup".bold().green());

    let api_base_url = match opts.api_base_ref() {
        Some(url) => url.to_string(),
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("LiteLLM proxy base URL")
            .default("http://localhost:4000".to_string())
            .interact_text()?,
    };

    let api_key = match opts.api_key_ref() {
        Some(key) => key.to_string(),
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("API key (leave empty if the proxy has no auth)")
            .allow_empty_password(true)
            .interact()?,
    };

    let config = Config {
        api_base_url: Some(api_base_url),
        api_key: Some(api_key).filter(|k| !k.is_empty()),
    };
    // Refuse to save something the other commands would reject
    config.base_url()?;

    let path = match opts.config_ref() {
        Some(p) => p.into(),
        None => Config::default_path()?,
    };
    config.save_to(&path)?;

    println!(
        "{} Configuration saved to {}",
        "✓".green(),
        path.display().to_string().cyan()
    );
    Ok(())
}
