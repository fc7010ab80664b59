use anyhow::{Result, anyhow};
use log::debug;
use std::path::PathBuf;
use std::sync::Arc;

use crate::{
    apps,
    asset::{Arch, format_size},
    config::Config,
    download::DownloadControl,
    github::{GetLatestRelease, GitHubRepo},
    release::{ReleaseResolver, ReleaseState, ReleaseWatch},
    runtime::{Clock, Runtime, SystemClock},
};

/// Accepts an app id from the catalog or an explicit `owner/repo`.
pub fn resolve_target(target: &str) -> Result<GitHubRepo> {
    if target.contains('/') {
        return target.parse();
    }
    let app = apps::find(target).ok_or_else(|| anyhow!("Unknown app '{}'", target))?;
    app.repo()
        .ok_or_else(|| anyhow!("App '{}' has no release repository yet", app.id))
}

/// Show the download control for an app or repository
#[tracing::instrument(skip(runtime, api_url, cache_dir))]
pub async fn download<R: Runtime + 'static>(
    runtime: R,
    target: &str,
    api_url: Option<String>,
    cache_dir: Option<PathBuf>,
) -> Result<()> {
    let repo = resolve_target(target)?;
    let config = Config::new(runtime, api_url, cache_dir)?;
    let resolver = Arc::new(config.into_resolver(SystemClock));

    let state = run(resolver, repo.clone()).await;
    print!("{}", render_download(&repo, &state));
    Ok(())
}

async fn run<R, C, G>(resolver: Arc<ReleaseResolver<R, C, G>>, repo: GitHubRepo) -> ReleaseState
where
    R: Runtime + 'static,
    C: Clock + 'static,
    G: GetLatestRelease + 'static,
{
    let mut watch = ReleaseWatch::mount(resolver, repo);
    let state = watch.settled().await;
    debug!("Release state for {}: {:?}", watch.repo(), state);
    watch.unmount();
    state
}

/// The download control followed by the classified asset list.
pub fn render_download(repo: &GitHubRepo, state: &ReleaseState) -> String {
    let mut out = format!("{}\n", DownloadControl::from_state(repo, state));

    if let Some(error) = &state.error {
        out.push_str(&format!("({})\n", error));
    }

    if let Some(release) = &state.release {
        if let Some(published) = &release.published_at {
            out.push_str(&format!("Published: {}\n", published));
        }
        if !release.assets.is_empty() {
            out.push_str("Assets:\n");
        }
        for asset in &release.assets {
            out.push_str(&format!(
                "  {} [{}] {}\n",
                asset.name,
                Arch::from_filename(&asset.name),
                format_size(asset.size)
            ));
        }
    }

    out
}
