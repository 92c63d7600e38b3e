//! The impls and functions
//!
use std::time::Instant;
use log::*;
use regex::Regex;
use reqwest::blocking::Client;
use crate::clusters::{ClusterList, ClusterSummary};
use crate::error::{DecodeStage, Error, Result};
use crate::utility;

/// The name of the action that produces a kubeconfig for a cluster.
pub const GENERATE_KUBECONFIG_ACTION: &str = "generateKubeconfig";

impl ClusterSummary {
    /// The url of the `generateKubeconfig` action, or an empty string if the cluster doesn't have it.
    pub fn generate_kubeconfig_url(&self) -> &str {
        self.actions
            .get(GENERATE_KUBECONFIG_ACTION)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

impl ClusterList {
    fn parse_cluster_list(
        http_data: &[u8],
    ) -> Result<ClusterList>
    {
        serde_json::from_slice(http_data)
            .map_err(|e| Error::decode(DecodeStage::ClusterList, e))
    }
}

pub fn clusters_url(
    base_url: &str,
) -> String
{
    format!("{}/v3/clusters", base_url.trim_end_matches('/'))
}

/// Read the list of clusters from `<base_url>/v3/clusters`.
///
/// The clusters are returned in the order of the response.
pub fn enumerate_clusters(
    client: &Client,
    base_url: &str,
    token: &str,
) -> Result<Vec<ClusterSummary>>
{
    info!("begin cluster list read");
    let timer = Instant::now();

    let data_from_http = utility::http_request_body(client, &clusters_url(base_url), "GET", token)?;
    let clusters = ClusterList::parse_cluster_list(&data_from_http)?.data;

    info!("end cluster list read: {} clusters, {:?}", clusters.len(), timer.elapsed());
    Ok(clusters)
}

/// Keep the clusters whose name matches `cluster_filter`, in their original order.
pub fn filter_clusters(
    clusters: Vec<ClusterSummary>,
    cluster_filter: &Regex,
) -> Vec<ClusterSummary>
{
    clusters
        .into_iter()
        .filter(|cluster| {
            let keep = cluster_filter.is_match(&cluster.name);
            if !keep {
                debug!("cluster {} does not match {}, skipping", cluster.name, cluster_filter);
            }
            keep
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_parse_simple() {
        let json = r#"
{
  "type": "collection",
  "data": [
    {
      "id": "c-prod",
      "name": "prod",
      "state": "active",
      "actions": {
        "generateKubeconfig": "https://rancher.local/v3/clusters/c-prod?action=generateKubeconfig",
        "importYaml": "https://rancher.local/v3/clusters/c-prod?action=importYaml"
      }
    },
    {
      "id": "c-dev",
      "name": "dev",
      "actions": {
        "generateKubeconfig": "https://rancher.local/v3/clusters/c-dev?action=generateKubeconfig"
      }
    }
  ]
}
        "#;
        let result = ClusterList::parse_cluster_list(json.as_bytes()).unwrap();
        assert_eq!(result.data.len(), 2);
        assert_eq!(result.data[0].name, "prod");
        assert_eq!(result.data[1].name, "dev");
        assert_eq!(result.data[0].generate_kubeconfig_url(), "https://rancher.local/v3/clusters/c-prod?action=generateKubeconfig");
        assert_eq!(result.data[1].actions.len(), 1);
    }

    #[test]
    fn unit_parse_cluster_without_actions() {
        let json = r#"{ "data": [ { "name": "provisioning" } ] }"#;
        let result = ClusterList::parse_cluster_list(json.as_bytes()).unwrap();
        assert_eq!(result.data.len(), 1);
        assert!(result.data[0].actions.is_empty());
        assert_eq!(result.data[0].generate_kubeconfig_url(), "");
    }

    #[test]
    fn unit_parse_invalid_json() {
        let result = ClusterList::parse_cluster_list(b"<html>not json</html>");
        match result {
            Err(Error::Decode { stage, .. }) => assert_eq!(stage, DecodeStage::ClusterList),
            other => panic!("expected a cluster list decode error, got {:?}", other),
        }
    }

    #[test]
    fn unit_parse_missing_data() {
        let result = ClusterList::parse_cluster_list(br#"{ "type": "collection" }"#);
        assert!(matches!(result, Err(Error::Decode { stage: DecodeStage::ClusterList, .. })));
    }

    #[test]
    fn unit_clusters_url() {
        assert_eq!(clusters_url("https://rancher.local"), "https://rancher.local/v3/clusters");
        assert_eq!(clusters_url("https://rancher.local/"), "https://rancher.local/v3/clusters");
    }

    #[test]
    fn unit_filter_clusters_keeps_order() {
        let clusters = vec![
            ClusterSummary { name: "prod-eu".to_string(), ..Default::default() },
            ClusterSummary { name: "dev".to_string(), ..Default::default() },
            ClusterSummary { name: "prod-us".to_string(), ..Default::default() },
        ];
        let filtered = filter_clusters(clusters.clone(), &Regex::new("^prod").unwrap());
        let names: Vec<&str> = filtered.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["prod-eu", "prod-us"]);

        let all = filter_clusters(clusters, &Regex::new(".*").unwrap());
        assert_eq!(all.len(), 3);
    }
}
