use anyhow::Result;
use log::debug;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use std::path::PathBuf;

use crate::{
    github::GitHub,
    release::{ReleaseCache, ReleaseResolver},
    runtime::{Clock, Runtime},
};

pub const USER_AGENT: &str = "showcase";

pub struct Config<R: Runtime> {
    pub runtime: R,
    pub github: GitHub,
    pub cache_dir: PathBuf,
}

impl<R: Runtime> Config<R> {
    pub fn new(runtime: R, api_url: Option<String>, cache_dir: Option<PathBuf>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Ok(token) = runtime.env_var("GITHUB_TOKEN") {
            let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token))?;
            auth_value.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth_value);
            debug!("Using GITHUB_TOKEN for authentication: {}", mask_token(&token));
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        let github = GitHub::new(client, api_url);

        let cache_dir = cache_dir.unwrap_or_else(|| default_cache_dir(&runtime));
        debug!("Release cache directory: {:?}", cache_dir);

        Ok(Self {
            runtime,
            github,
            cache_dir,
        })
    }

    pub fn into_resolver<C: Clock>(self, clock: C) -> ReleaseResolver<R, C, GitHub> {
        let cache = ReleaseCache::new(self.runtime, clock, self.cache_dir);
        ReleaseResolver::new(cache, self.github)
    }
}

fn default_cache_dir<R: Runtime>(runtime: &R) -> PathBuf {
    runtime
        .cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("showcase")
}

fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 12 {
        return "*********".to_string();
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}*********{}", head, tail)
}
