mod client;
mod repo;
mod types;

pub use client::{DEFAULT_API_URL, GetLatestRelease, GitHub};
pub use repo::GitHubRepo;
pub use types::{Asset, LatestRelease};

#[cfg(test)]
pub use client::MockGetLatestRelease;
