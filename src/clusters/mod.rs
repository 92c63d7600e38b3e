//! Module for reading `/v3/clusters` on the Rancher API.
//!
//! The `/v3/clusters` endpoint lists all the clusters that are managed by Rancher.
//! For every cluster, only the name and the actions are used. The actions map an action name
//! to the url that performs it; `generateKubeconfig` is the action that produces a kubeconfig
//! for the cluster.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
