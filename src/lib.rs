//! rancher_kubeconfig
//!
//! Reads the kubeconfig of every cluster managed by a Rancher server via the Rancher v3 API,
//! and merges them into a single kubeconfig that uses one user for all clusters.
//!
#[macro_use]
extern crate serde_derive;

use clap::Parser;

pub mod error;
pub mod utility;
pub mod clusters;
pub mod kubeconfig;
pub mod settings;
pub mod pipeline;

pub use error::{DecodeStage, Error};
pub use settings::Settings;

#[derive(Debug, Default, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Opts {
    /// file to write the merged kubeconfig to
    #[arg(short, long, value_name = "file")]
    pub output: Option<String>,
    /// name of the user that is shared by all contexts
    #[arg(short = 'u', long, value_name = "name")]
    pub default_user: Option<String>,
    /// regex to select the clusters to include by name
    #[arg(short, long, value_name = "regex")]
    pub cluster_match: Option<String>,
    /// number of clusters to read the kubeconfig of in parallel
    #[arg(long, value_name = "nr")]
    pub parallel: Option<String>,
    /// accept invalid (self-signed) certificates of the Rancher API
    #[arg(long)]
    pub accept_invalid_certs: bool,
    /// print the merged kubeconfig to stdout instead of writing the output file
    #[arg(long)]
    pub print: bool,
    /// write the specified options and API url to .env
    #[arg(long)]
    pub write_dotenv: bool,
}
