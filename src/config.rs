//! Configuration loader and schema types.
//!
//! This module exposes the settings schema and helpers to load it from an
//! optional TOML file and the environment. Nothing outside the runtime reads
//! these settings directly; the runtime turns them into a `RunConfig`.

mod load;
mod schema;

pub use schema::*;
