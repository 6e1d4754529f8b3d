//! Format dispatch macros for command output
//!
//! The macros are defined in `crate::cli::format` and re-exported here for
//! convenient access from command modules.
//!
//! ```rust,ignore
//! use crate::commands::format::output_by_format_result;
//!
//! output_by_format_result!(cli.format,
//!     json => { print_json(&value) },
//!     human => { println!("Done"); },
//!     records => { println!("H waypath=1 records=1 mode=done"); }
//! )?;
//! ```

pub use crate::output_by_format_result;
