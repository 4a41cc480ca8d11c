//! Declared-state input

use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use serde_json::Value;

use crate::error::Result;
use crate::resources::ResourceState;

/// Where to read the declared state from
#[derive(Debug, Clone, Args, Default)]
pub struct StateArgs {
    /// JSON file holding the resource attributes ("-" or omitted reads stdin)
    #[arg(long, short = 's')]
    pub state: Option<PathBuf>,
}

impl StateArgs {
    /// Read and parse the declared state
    pub fn load(&self) -> Result<ResourceState> {
        let raw = match &self.state {
            Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)?,
            _ => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };
        parse_state(&raw)
    }
}

/// Parse a JSON document into a state; blank input is an empty state
fn parse_state(raw: &str) -> Result<ResourceState> {
    if raw.trim().is_empty() {
        return Ok(ResourceState::new());
    }
    let value: Value = serde_json::from_str(raw)?;
    ResourceState::from_value(value)
}
