//! Release resolution.
//!
//! Fetches the latest release of a repository, keeps only installer and
//! archive assets, and caches the result on disk for a short time.
//!
//! - `model` - [`Release`] and [`ReleaseAsset`], plus the asset allow-list
//! - `cache` - TTL cache keyed by repository
//! - `resolver` - cache-then-fetch resolution into a [`ReleaseState`]
//! - `watch` - mount-scoped observable wrapper around the resolver

mod cache;
mod error;
mod model;
mod resolver;
mod watch;

pub use cache::{CACHE_TTL_MS, CacheEntry, ReleaseCache};
pub use error::{ReleaseError, check_status};
pub use model::{ALLOWED_EXTENSIONS, Release, ReleaseAsset, is_allowed_asset};
pub use resolver::{ReleaseResolver, ReleaseState};
pub use watch::ReleaseWatch;
