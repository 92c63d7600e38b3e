//! The structs
//!
use std::collections::HashMap;

/// The root struct for deserializing `/v3/clusters`.
///
/// ```json
/// {
///   "type": "collection",
///   "data": [
///     {
///       "id": "c-m-4xrlcfpt",
///       "name": "prod",
///       "actions": {
///         "generateKubeconfig": "https://rancher.example.com/v3/clusters/c-m-4xrlcfpt?action=generateKubeconfig",
///         "importYaml": "https://rancher.example.com/v3/clusters/c-m-4xrlcfpt?action=importYaml"
///       }
///     }
///   ]
/// }
/// ```
/// All other fields are ignored.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ClusterList {
    pub data: Vec<ClusterSummary>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct ClusterSummary {
    pub name: String,
    /// action name -> url
    #[serde(default)]
    pub actions: HashMap<String, String>,
}
