//! Library half of the `facets` CLI.

pub mod logging;
pub mod replay;
pub mod script;

pub use replay::{ReplayOutcome, replay};
pub use script::{ScriptAction, load_script, parse_script};
