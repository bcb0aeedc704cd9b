//! Split a script made of a fixed-size header and fixed-size record groups
//! into evenly sized fragments, each starting with the shared header.

pub mod args;
pub mod config;
pub mod domain;
pub mod error;
pub mod fragment;
pub mod plan;
pub mod reporters;
pub mod script;
pub mod split;
pub mod verify;

pub use args::parse_args;
pub use config::{LineLayout, SplitConfig};
pub use error::{Result, SplitError};
pub use plan::{ChunkAssignment, DistributionPlan};
pub use script::ScriptLines;
pub use split::{split_script, SplitOutcome};
