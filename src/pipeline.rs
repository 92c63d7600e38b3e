//! The fetch and merge pipeline.
//!
//! 1. read the cluster list.
//! 2. perform `generateKubeconfig` for every cluster, sequentially or on a thread pool.
//! 3. merge the kubeconfigs.
//! 4. write the merged kubeconfig, or print it.
//!
//! The first error stops the run; nothing is written unless every cluster was read and merged.
use std::time::Instant;
use log::*;
use anyhow::{Context, Result};
use rayon::prelude::*;
use reqwest::blocking::Client;
use crate::clusters::{self, ClusterSummary};
use crate::kubeconfig::{self, Kubeconfig};
use crate::settings::Settings;
use crate::utility;

/// Read the kubeconfig of every selected cluster, and merge them.
pub fn fetch_and_merge(
    settings: &Settings,
) -> Result<Kubeconfig>
{
    let client = utility::build_client(settings.accept_invalid_certs)?;

    let clusters = clusters::enumerate_clusters(&client, &settings.api_url, &settings.token)
        .with_context(|| "Error getting cluster list from API")?;
    let clusters = clusters::filter_clusters(clusters, &settings.cluster_filter);

    let configs = resolve_cluster_configs(&client, &clusters, &settings.token, settings.parallel)?;

    let merged = kubeconfig::merge(configs, &settings.default_user)
        .with_context(|| "Error merging cluster configs")?;
    Ok(merged)
}

/// Read the kubeconfigs of the clusters, in the order of `clusters`.
fn resolve_cluster_configs(
    client: &Client,
    clusters: &[ClusterSummary],
    token: &str,
    parallel: usize,
) -> Result<Vec<Kubeconfig>>
{
    info!("begin kubeconfig read: {} clusters, parallel {}", clusters.len(), parallel);
    let timer = Instant::now();

    let resolve = |cluster: &ClusterSummary| {
        kubeconfig::resolve_cluster_config(client, cluster, token)
            .with_context(|| format!("Error getting cluster {} config from API", cluster.name))
    };

    let configs = if parallel <= 1 {
        clusters
            .iter()
            .map(resolve)
            .collect::<Result<Vec<_>>>()?
    } else {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(parallel)
            .build()
            .with_context(|| "Unable to create thread pool")?;
        // collect on an indexed parallel iterator keeps the order of the clusters.
        pool.install(|| {
            clusters
                .par_iter()
                .map(resolve)
                .collect::<Result<Vec<_>>>()
        })?
    };

    info!("end kubeconfig read: {:?}", timer.elapsed());
    Ok(configs)
}

/// Perform a full run: fetch, merge and write the merged kubeconfig to the output file,
/// or to stdout if `print` is set.
pub fn run(
    settings: &Settings,
    print: bool,
) -> Result<()>
{
    info!("begin run: {:?}", settings);
    let timer = Instant::now();

    let merged = fetch_and_merge(settings)?;

    if print {
        print!("{}", merged.to_yaml().with_context(|| "marshall to YAML error")?);
    } else {
        kubeconfig::write_kubeconfig(&merged, &settings.output)?;
    }

    info!("end run: {:?}", timer.elapsed());
    Ok(())
}
