//! Configuration command handler.
//!
//! Prints the resolved configuration with the layer each value came from.
//!
//! # Example Output
//!
//! ```json
//! {
//!   "starting_stack": {
//!     "value": 1000,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "starting_stack": {
            "value": config.starting_stack,
            "source": sources.starting_stack,
        },
        "raise_increment": {
            "value": config.raise_increment,
            "source": sources.raise_increment,
        },
        "settle_ticks": {
            "value": config.settle_ticks,
            "source": sources.settle_ticks,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "policy": {
            "value": config.policy,
            "source": sources.policy,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
