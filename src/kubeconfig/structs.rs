//! The structs
//!

/// The response of the `generateKubeconfig` action.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct GenerateKubeconfigOutput {
    pub config: String,
}

/// A kubeconfig document, as generated per cluster and as written after merging.
///
/// ```yaml
/// apiVersion: v1
/// kind: Config
/// clusters:
/// - name: prod
///   cluster:
///     server: https://rancher.example.com/k8s/clusters/c-m-4xrlcfpt
///     certificate-authority-data: LS0tLS1CRUdJTi...
/// users:
/// - name: prod
///   user:
///     token: kubeconfig-user-abcde:xyz
/// contexts:
/// - name: prod
///   context:
///     user: prod
///     cluster: prod
/// current-context: prod
/// ```
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Kubeconfig {
    #[serde(rename = "apiVersion", default)]
    pub api_version: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub clusters: Vec<NamedCluster>,
    #[serde(default)]
    pub users: Vec<NamedUser>,
    #[serde(default)]
    pub contexts: Vec<NamedContext>,
    #[serde(rename = "current-context", default)]
    pub current_context: String,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct NamedCluster {
    pub name: String,
    #[serde(default)]
    pub cluster: ClusterEndpoint,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct ClusterEndpoint {
    #[serde(default)]
    pub server: String,
    // empty for the rancher proxied endpoint when rancher uses a public certificate; the key is still written.
    #[serde(rename = "certificate-authority-data", default)]
    pub certificate_authority_data: String,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct NamedUser {
    pub name: String,
    #[serde(default)]
    pub user: UserToken,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct UserToken {
    #[serde(default)]
    pub token: String,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct NamedContext {
    pub name: String,
    #[serde(default)]
    pub context: ContextRef,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct ContextRef {
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub cluster: String,
}
