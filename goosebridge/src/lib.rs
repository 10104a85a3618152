//! # goosebridge
//!
//! Loads YAML access files into goosegate controllers and actors, and
//! produces the JSON reports behind the `goosebridge` CLI.

pub mod access;
pub mod ast;
pub mod loader;
pub mod report;

pub use ast::{AccessFile, ActorDef, ControllerDef, EffectName, EntityDef};
pub use loader::{load_access_file, parse_access_file, LoadError};
pub use report::{check, order_rows, CheckReport, OrderRow};
