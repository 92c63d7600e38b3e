//! The structs
//!
use std::fmt;
use std::path::PathBuf;
use regex::Regex;

/// The settings of a run, built once at startup.
pub struct Settings {
    pub token: String,
    pub api_url: String,
    pub output: PathBuf,
    pub default_user: String,
    pub cluster_filter: Regex,
    pub parallel: usize,
    pub accept_invalid_certs: bool,
}

// the token is left out.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_url", &self.api_url)
            .field("output", &self.output)
            .field("default_user", &self.default_user)
            .field("cluster_filter", &self.cluster_filter.as_str())
            .field("parallel", &self.parallel)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish()
    }
}
