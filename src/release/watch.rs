use log::debug;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::watch;

use crate::github::{GetLatestRelease, GitHubRepo};
use crate::runtime::{Clock, Runtime};

use super::{ReleaseResolver, ReleaseState};

/// One mounted download control's view of a repository's latest release.
///
/// Mounting starts a single background resolve and publishes exactly one
/// settled [`ReleaseState`] after the initial loading state. The request is
/// not cancelled on unmount; its result is dropped instead of published.
pub struct ReleaseWatch {
    repo: GitHubRepo,
    receiver: watch::Receiver<ReleaseState>,
    mounted: Arc<AtomicBool>,
}

impl ReleaseWatch {
    /// Must be called from within a tokio runtime.
    pub fn mount<R, C, G>(resolver: Arc<ReleaseResolver<R, C, G>>, repo: GitHubRepo) -> Self
    where
        R: Runtime + 'static,
        C: Clock + 'static,
        G: GetLatestRelease + 'static,
    {
        let (sender, receiver) = watch::channel(ReleaseState::loading());
        let mounted = Arc::new(AtomicBool::new(true));

        let task_repo = repo.clone();
        let task_mounted = mounted.clone();
        tokio::spawn(async move {
            let state = resolver.resolve(&task_repo).await;
            if !task_mounted.load(Ordering::Acquire) {
                debug!("Discarding release result for unmounted {}", task_repo);
                return;
            }
            // No receivers left is the same as unmounted
            let _ = sender.send(state);
        });

        Self {
            repo,
            receiver,
            mounted,
        }
    }

    pub fn repo(&self) -> &GitHubRepo {
        &self.repo
    }

    pub fn current(&self) -> ReleaseState {
        self.receiver.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ReleaseState> {
        self.receiver.clone()
    }

    /// Waits until the state is no longer loading.
    pub async fn settled(&mut self) -> ReleaseState {
        match self.receiver.wait_for(|state| !state.loading).await {
            Ok(state) => state.clone(),
            // Publisher went away without a result (task panicked)
            Err(_) => ReleaseState::loading(),
        }
    }

    /// Detaches this control. Any result still in flight is discarded.
    pub fn unmount(self) {}
}

impl Drop for ReleaseWatch {
    fn drop(&mut self) {
        self.mounted.store(false, Ordering::Release);
    }
}
