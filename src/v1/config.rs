/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::UnsplashError;
use url::{ParseError, Url};

// Root Unsplash API
pub const API_ORIGIN: &str = "https://api.unsplash.com/";

// Host serving the OAuth2 authorize/token endpoints
pub const OAUTH_ORIGIN: &str = "https://unsplash.com/";

const AUTHORIZE_PATH: &str = "oauth/authorize";
const TOKEN_PATH: &str = "oauth/token";

/// Per client configuration for reaching the API.
///
/// Every [`Client`](crate::v1::Client) owns its own copy so endpoints can be pointed
/// somewhere else (a proxy or a mock server) without touching process wide state.
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) api_origin: Url,
    pub(crate) oauth_origin: Url,
    pub(crate) api_version: String,
    pub(crate) auth_in_header: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_origin: Url::parse(API_ORIGIN).expect("valid api origin"),
            oauth_origin: Url::parse(OAUTH_ORIGIN).expect("valid oauth origin"),
            api_version: "v1".into(),
            auth_in_header: true,
        }
    }
}

impl Config {
    /// Overrides the API host, e.g. `https://api.unsplash.com`
    pub fn with_api_origin(mut self, origin: &str) -> Result<Self, UnsplashError> {
        self.api_origin = as_base(origin)?;
        Ok(self)
    }

    /// Overrides the OAuth host, e.g. `https://unsplash.com`
    pub fn with_oauth_origin(mut self, origin: &str) -> Result<Self, UnsplashError> {
        self.oauth_origin = as_base(origin)?;
        Ok(self)
    }

    /// Value sent in the `Accept-Version` header
    pub fn with_api_version(mut self, version: &str) -> Self {
        self.api_version = version.into();
        self
    }

    /// When true a public client sends `Authorization: Client-ID <key>`, otherwise the key
    /// is passed as the `client_id` query parameter.
    pub fn with_auth_in_header(mut self, auth_in_header: bool) -> Self {
        self.auth_in_header = auth_in_header;
        self
    }

    pub fn api_origin(&self) -> &Url {
        &self.api_origin
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn auth_in_header(&self) -> bool {
        self.auth_in_header
    }

    /// Resolves a path relative to the API origin
    pub fn endpoint(&self, path: &str) -> Result<Url, UnsplashError> {
        Ok(self.api_origin.join(path.trim_start_matches('/'))?)
    }

    /// Resolves the segments relative to the API origin.
    ///
    /// Each segment is percent-encoded on its own, so `/`, `?` or `#` inside an id stay part
    /// of that segment. Empty, `.` and `..` segments are rejected.
    pub fn endpoint_segments(&self, segments: &[&str]) -> Result<Url, UnsplashError> {
        if let Some(bad) = segments.iter().find(|s| matches!(**s, "" | "." | "..")) {
            return Err(UnsplashError::InvalidPathSegment(bad.to_string()));
        }
        let mut url = self.api_origin.clone();
        url.path_segments_mut()
            .map_err(|_| ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn authorize_endpoint(&self) -> Result<Url, UnsplashError> {
        Ok(self.oauth_origin.join(AUTHORIZE_PATH)?)
    }

    pub(crate) fn token_endpoint(&self) -> Result<Url, UnsplashError> {
        Ok(self.oauth_origin.join(TOKEN_PATH)?)
    }
}

// Relative joins drop the last segment unless the base ends with a slash
fn as_base(origin: &str) -> Result<Url, UnsplashError> {
    let mut url = Url::parse(origin)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
