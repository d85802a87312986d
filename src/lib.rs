#![doc = "srd-monsters: fetch the D&D 5e SRD monster list and write it as one app-ready JSON document."]

//! The run is a straight pipeline:
//! [`download`] lists and fetches records, [`preprocess`] maps each one,
//! [`pipeline`] drives the loop behind a [`rate_limit`] gate, and
//! [`output`] writes the aggregate file.

pub mod cli;
pub mod config;
pub mod contract;
pub mod download;
pub mod error;
pub mod load_config;
pub mod output;
pub mod pipeline;
pub mod preprocess;
pub mod rate_limit;

pub use contract::{Monster, MonsterDocument, MonsterSource, Reference};
pub use error::ExpandError;
pub use pipeline::{expand, ExpandReport};
