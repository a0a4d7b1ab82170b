//! Command-line command handlers for astrofacts.
//!
//! Each command lives in its own submodule with a `handle_*_command` entry
//! point and a `display_help` page. Handlers print either the box-drawing
//! layout or, in JSON mode, a single JSON document on stdout.

pub mod chinese;
pub mod facts;
pub mod help;
pub mod moon;
pub mod sun;

use anyhow::Result;
use serde::Serialize;

/// Print `value` as one line of JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}
