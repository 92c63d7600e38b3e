//! Module for the kubeconfig documents.
//!
//! A kubeconfig is obtained per cluster by performing the `generateKubeconfig` action of the cluster.
//! The action returns json with the kubeconfig embedded as yaml text:
//! ```json
//! {
//!   "type": "generateKubeConfigOutput",
//!   "config": "apiVersion: v1\nkind: Config\nclusters:\n- name: \"prod\"\n ..."
//! }
//! ```
//! The per cluster kubeconfigs are merged into a single kubeconfig with one shared user,
//! which is written to `fullkubeconfig`.
//!
mod structs;
mod functions;
mod merge;

pub use structs::*;
pub use functions::*;
pub use merge::*;
