//! Resource lifecycle commands
//!
//! Reads declared state, runs one reconciliation operation and writes the
//! resulting state to stdout. Outcome messages go to stderr.

use colored::Colorize;

use crate::cli::{CommandContext, GlobalOptions, ResourceCommands};
use crate::error::{Error, Result};
use crate::resources::{self, Outcome, Resource, ResourceState};

/// Run a lifecycle command against `type_name`
pub async fn run(opts: &GlobalOptions, type_name: &str, command: &ResourceCommands) -> Result<()> {
    let resource = resources::lookup(type_name).ok_or_else(|| {
        Error::Other(format!(
            "Unknown resource type: {} (expected one of {})",
            type_name,
            resources::TYPE_NAMES.join(", ")
        ))
    })?;
    let mut state = command.state().load()?;

    let Some(operation) = command.operation() else {
        return validate(resource.as_ref(), &state);
    };

    let ctx = CommandContext::new(opts)?;
    let outcome = resources::apply(resource.as_ref(), operation, &ctx.client, &mut state).await?;

    report(type_name, operation, &outcome);
    print_state(state)
}

fn validate(resource: &dyn Resource, state: &ResourceState) -> Result<()> {
    let errors = resource.validate(state);
    if !errors.is_empty() {
        return Err(Error::Validation(errors));
    }
    eprintln!("{} {} configuration is valid", "✓".green(), resource.type_name());
    Ok(())
}

fn report(type_name: &str, operation: resources::Operation, outcome: &Outcome) {
    match outcome {
        Outcome::Applied => {
            eprintln!("{} {} {}: applied", "✓".green(), type_name, operation);
        }
        Outcome::NotFound => {
            eprintln!(
                "{} {} not found on the proxy; declared state left unchanged",
                "⚠".yellow(),
                type_name
            );
        }
        Outcome::Unsupported {
            resource,
            operation,
        } => {
            eprintln!(
                "{} {} is not supported for {}; nothing was done",
                "⚠".yellow(),
                operation,
                resource.bold()
            );
        }
    }
}

fn print_state(state: ResourceState) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&state.into_value())?);
    Ok(())
}
