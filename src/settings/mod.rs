//! Module for the settings of a run.
//!
//! The API token and url must be set in the environment (`RANCHER2_API_TOKEN`, `RANCHER2_API_URL`),
//! either directly or via `.env`.
//! All other settings are taken from the command line option if set, otherwise from the environment,
//! otherwise the default is used.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
