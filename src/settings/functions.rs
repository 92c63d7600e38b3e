//! The impls and functions
//!
use std::{collections::HashMap, env, fs, path::{Path, PathBuf}};
use log::*;
use anyhow::{Context, Result};
use regex::Regex;
use crate::error::Error;
use crate::settings::Settings;
use crate::Opts;

pub const ENV_API_TOKEN: &str = "RANCHER2_API_TOKEN";
pub const ENV_API_URL: &str = "RANCHER2_API_URL";
pub const ENV_OUTPUT: &str = "RANCHER2_KUBECONFIG_OUTPUT";
pub const ENV_DEFAULT_USER: &str = "RANCHER2_DEFAULT_USER";
pub const ENV_CLUSTER_MATCH: &str = "RANCHER2_CLUSTER_MATCH";
pub const ENV_PARALLEL: &str = "RANCHER2_PARALLEL";

pub const DEFAULT_OUTPUT: &str = "fullkubeconfig";
pub const DEFAULT_USER: &str = "myRancher2User";
pub const DEFAULT_CLUSTER_MATCH: &str = ".*";
pub const DEFAULT_PARALLEL: &str = "1";

impl Settings {
    /// Build the settings from the options and the process environment.
    pub fn from_env(
        options: &Opts,
        changed_options: &mut HashMap<&'static str, String>,
    ) -> Result<Settings, Error>
    {
        Settings::from_lookup(options, changed_options, |variable| env::var(variable).ok())
    }
    /// Build the settings from the options, using `lookup` to read environment variables.
    ///
    /// Options that are set via the command line or the environment are added to `changed_options`,
    /// so they can be written to `.env`.
    pub fn from_lookup<F>(
        options: &Opts,
        changed_options: &mut HashMap<&'static str, String>,
        lookup: F,
    ) -> Result<Settings, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(ENV_API_TOKEN).ok_or(Error::ConfigMissing { variable: ENV_API_TOKEN })?;
        let api_url = lookup(ENV_API_URL).ok_or(Error::ConfigMissing { variable: ENV_API_URL })?;
        info!("api url: {}", api_url);
        changed_options.insert(ENV_API_URL, api_url.clone());

        let output = set_option("output", &options.output, ENV_OUTPUT, DEFAULT_OUTPUT, &lookup, changed_options);
        let default_user = set_option("default-user", &options.default_user, ENV_DEFAULT_USER, DEFAULT_USER, &lookup, changed_options);

        let cluster_match = set_option("cluster-match", &options.cluster_match, ENV_CLUSTER_MATCH, DEFAULT_CLUSTER_MATCH, &lookup, changed_options);
        let cluster_filter = Regex::new(&cluster_match)
            .map_err(|e| Error::InvalidSetting { variable: ENV_CLUSTER_MATCH, value: cluster_match.clone(), reason: e.to_string() })?;

        let parallel_string = set_option("parallel", &options.parallel, ENV_PARALLEL, DEFAULT_PARALLEL, &lookup, changed_options);
        let parallel = match parallel_string.parse::<usize>() {
            Ok(parallel) if parallel > 0 => parallel,
            Ok(_) => return Err(Error::InvalidSetting { variable: ENV_PARALLEL, value: parallel_string, reason: "must be at least 1".to_string() }),
            Err(e) => return Err(Error::InvalidSetting { variable: ENV_PARALLEL, value: parallel_string, reason: e.to_string() }),
        };

        Ok(Settings {
            token,
            api_url,
            output: PathBuf::from(output),
            default_user,
            cluster_filter,
            parallel,
            accept_invalid_certs: options.accept_invalid_certs,
        })
    }
}

/// Resolve a single option: the command line option, then the environment variable, then the default.
fn set_option<F>(
    name: &str,
    option: &Option<String>,
    variable: &'static str,
    default: &str,
    lookup: &F,
    changed_options: &mut HashMap<&'static str, String>,
) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = option {
        info!("{} argument set: using: {}", name, value);
        changed_options.insert(variable, value.to_string());
        return value.to_string();
    }
    match lookup(variable) {
        Some(value) => {
            info!("{} not set: set via environment: {}: {}", name, variable, value);
            changed_options.insert(variable, value.to_string());
            value
        }
        None => {
            info!("{} not set: and not set via environment: using default: {}", name, default);
            default.to_string()
        }
    }
}

/// Write the changed options to the dotenv file at `path`, one `KEY=value` per line, sorted by key.
///
/// The API token is never part of the changed options.
pub fn dotenv_writer(
    write_dotenv: bool,
    changed_options: HashMap<&str, String>,
    path: &Path,
) -> Result<()>
{
    if changed_options.is_empty() || !write_dotenv {
        return Ok(());
    }
    info!("Writing dotenv file: {}", path.display());

    let mut changed_options: Vec<_> = changed_options.into_iter().collect();
    changed_options.sort();
    let contents: String = changed_options
        .iter()
        .map(|(key, value)| format!("{}={}\n", key, value))
        .collect();
    fs::write(path, contents)
        .with_context(|| format!("Error writing dotenv file: {}", path.display()))?;
    for (key, value) in changed_options {
        debug!("{}={}", key, value);
    }
    Ok(())
}
