//! Shared output formatting helpers for commands
//!
//! Provides JSON status messages, location name lookups and the
//! human-readable line shapes reused across command modules.

pub mod dispatch;
pub mod status;

pub use dispatch::output_by_format_result;
pub use status::{location_names, print_json, print_json_status, route_label};
