//! Merging the per cluster kubeconfigs into a single kubeconfig.
//!
//! The merged kubeconfig has:
//! - a single user named after the default user, with the token of the first user of the first kubeconfig.
//!   Rancher generates a token per kubeconfig, but every token belongs to the same Rancher account.
//! - a context per kubeconfig, named after and pointing to the first cluster of that kubeconfig.
//! - all clusters of all kubeconfigs, in order.
//! - the first context as current context.
//!
use log::*;
use crate::error::{Error, Result};
use crate::kubeconfig::{ContextRef, Kubeconfig, NamedContext, NamedUser, UserToken};

pub const KUBECONFIG_API_VERSION: &str = "v1";
pub const KUBECONFIG_KIND: &str = "Config";

pub fn merge(
    configs: Vec<Kubeconfig>,
    default_user: &str,
) -> Result<Kubeconfig>
{
    let first = configs.first().ok_or(Error::EmptyConfigSet)?;
    if let Some(index) = configs.iter().position(|config| config.clusters.is_empty()) {
        return Err(Error::NoConnectionInConfig { index });
    }
    let token = first.users
        .first()
        .map(|user| user.user.token.clone())
        .ok_or(Error::NoIdentityInConfig { index: 0 })?;

    let mut merged = Kubeconfig {
        api_version: KUBECONFIG_API_VERSION.to_string(),
        kind: KUBECONFIG_KIND.to_string(),
        users: vec![NamedUser {
            name: default_user.to_string(),
            user: UserToken { token },
        }],
        current_context: first.clusters[0].name.clone(),
        ..Default::default()
    };

    for config in configs {
        let name = config.clusters[0].name.clone();
        debug!("context {}: {} clusters", name, config.clusters.len());
        merged.contexts.push(NamedContext {
            name: name.clone(),
            context: ContextRef {
                user: default_user.to_string(),
                cluster: name,
            },
        });
        merged.clusters.extend(config.clusters);
    }

    info!("merged {} contexts, {} clusters", merged.contexts.len(), merged.clusters.len());
    Ok(merged)
}
