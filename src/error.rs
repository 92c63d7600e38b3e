//! Error types for rancher_kubeconfig
//!
//! Every error is fatal for a run: nothing is retried and no partial kubeconfig is written.
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for the library functions.
pub type Result<T> = std::result::Result<T, Error>;

/// The step of the pipeline in which a response or document could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStage {
    /// The json response of `/v3/clusters`.
    ClusterList,
    /// The json response of the `generateKubeconfig` action.
    ConfigEnvelope,
    /// The yaml kubeconfig embedded in the `generateKubeconfig` response.
    ConfigYaml,
}

impl fmt::Display for DecodeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeStage::ClusterList => write!(f, "cluster list"),
            DecodeStage::ConfigEnvelope => write!(f, "config envelope"),
            DecodeStage::ConfigYaml => write!(f, "config yaml"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// A required environment variable is not set.
    #[error("Error loading {variable}, put it into the {variable} environment variable")]
    ConfigMissing { variable: &'static str },

    /// An option or environment variable holds a value that cannot be used.
    #[error("Invalid value for {variable}: {value}: {reason}")]
    InvalidSetting { variable: &'static str, value: String, reason: String },

    /// Only GET and POST are used against the API.
    #[error("Incorrect http method: {0}")]
    InvalidMethod(String),

    #[error("Unable to build http client")]
    ClientBuild(#[source] reqwest::Error),

    /// Connection, DNS, timeout, url or body read failure.
    #[error("Response error for {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Any status other than 200; the response body is not read.
    #[error("Response status for {url}: {status}")]
    UnexpectedStatus { url: String, status: String },

    #[error("Unable to decode {stage}")]
    Decode {
        stage: DecodeStage,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// No cluster kubeconfig was obtained, so there is nothing to merge.
    #[error("No cluster configs to merge")]
    EmptyConfigSet,

    #[error("Cluster config {index} contains no clusters")]
    NoConnectionInConfig { index: usize },

    #[error("Cluster config {index} contains no users")]
    NoIdentityInConfig { index: usize },

    /// Serializing or writing the merged kubeconfig failed.
    #[error("Error writing config to file: {}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    pub(crate) fn decode<E>(stage: DecodeStage, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Decode { stage, source: Box::new(source) }
    }
}
