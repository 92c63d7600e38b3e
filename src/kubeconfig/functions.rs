//! The impls and functions
//!
use std::{fs, path::Path, time::Instant};
use log::*;
use reqwest::blocking::Client;
use crate::clusters::ClusterSummary;
use crate::error::{DecodeStage, Error, Result};
use crate::kubeconfig::{GenerateKubeconfigOutput, Kubeconfig};
use crate::utility;

impl GenerateKubeconfigOutput {
    fn parse_generate_kubeconfig_output(
        http_data: &[u8],
    ) -> Result<GenerateKubeconfigOutput>
    {
        serde_json::from_slice(http_data)
            .map_err(|e| Error::decode(DecodeStage::ConfigEnvelope, e))
    }
}

impl Kubeconfig {
    /// Parse the yaml text of a kubeconfig.
    pub fn parse_kubeconfig(
        yaml_data: &str,
    ) -> Result<Kubeconfig>
    {
        serde_yaml::from_str(yaml_data)
            .map_err(|e| Error::decode(DecodeStage::ConfigYaml, e))
    }
    /// Serialize the kubeconfig to yaml text.
    pub fn to_yaml(
        &self,
    ) -> serde_yaml::Result<String>
    {
        serde_yaml::to_string(self)
    }
}

/// Perform the `generateKubeconfig` action of the cluster and parse the kubeconfig it returns.
///
/// A cluster without the action leads to a request with an empty url, which fails as a transport error.
pub fn resolve_cluster_config(
    client: &Client,
    cluster: &ClusterSummary,
    token: &str,
) -> Result<Kubeconfig>
{
    debug!("begin kubeconfig read for cluster {}", cluster.name);
    let timer = Instant::now();

    let url = cluster.generate_kubeconfig_url();
    if url.is_empty() {
        warn!("cluster {} has no generateKubeconfig action", cluster.name);
    }
    let data_from_http = utility::http_request_body(client, url, "POST", token)?;
    let output = GenerateKubeconfigOutput::parse_generate_kubeconfig_output(&data_from_http)?;
    let kubeconfig = Kubeconfig::parse_kubeconfig(&output.config)?;

    debug!("end kubeconfig read for cluster {}: {} clusters, {:?}", cluster.name, kubeconfig.clusters.len(), timer.elapsed());
    Ok(kubeconfig)
}

/// Write the kubeconfig as yaml to `path`, truncating an existing file.
pub fn write_kubeconfig(
    kubeconfig: &Kubeconfig,
    path: &Path,
) -> Result<()>
{
    let yaml = kubeconfig.to_yaml()
        .map_err(|e| Error::Persist { path: path.to_path_buf(), source: Box::new(e) })?;
    fs::write(path, yaml)
        .map_err(|e| Error::Persist { path: path.to_path_buf(), source: Box::new(e) })?;
    info!("kubeconfig written to {}", path.display());
    Ok(())
}
