//! upcase-file: read a text file, uppercase it, and save the result
//!
//! The whole run is driven by [`session::Session`], which prompts for a file
//! name, reads the file, writes `modified_<name>` and reports the outcome on
//! the console.

/// Command-line definitions shared by the binaries
pub mod cli;

/// Console prompt and report messages
pub mod console;

/// Read error taxonomy
pub mod error;

/// Tracing subscriber setup
pub mod logging;

/// One interactive run
pub mod session;

/// Content and file name transforms
pub mod transform;

pub use error::ReadError;
pub use session::{Outcome, Session};
