/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::api::build_url;
use crate::v1::errors::UnsplashError;
use crate::v1::{Client, Collection, Photo, QueryParams, User};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// A single page of search results
#[derive(Deserialize, Debug, Clone)]
pub struct SearchResults<T> {
    #[serde(default)]
    pub total: u64,

    #[serde(default)]
    pub total_pages: u64,

    pub results: Vec<T>,
}

/// Search requests. Every search needs a non-empty `query` parameter.
#[derive(Debug, Clone)]
pub struct SearchService {
    client: Client,
}

impl SearchService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns a single page of photo search results
    pub async fn photos(
        &self,
        params: &QueryParams,
    ) -> Result<SearchResults<Photo>, UnsplashError> {
        self.search("photos", params).await
    }

    /// Returns a single page of collection search results
    pub async fn collections(
        &self,
        params: &QueryParams,
    ) -> Result<SearchResults<Collection>, UnsplashError> {
        self.search("collections", params).await
    }

    /// Returns a single page of user search results
    pub async fn users(&self, params: &QueryParams) -> Result<SearchResults<User>, UnsplashError> {
        self.search("users", params).await
    }

    async fn search<T: DeserializeOwned>(
        &self,
        kind: &str,
        params: &QueryParams,
    ) -> Result<SearchResults<T>, UnsplashError> {
        let req_url = self.client.endpoint_segments(&["search", kind])?;
        if params.get("query").is_none_or(|q| q.is_empty()) {
            let attempted = build_url(&req_url, Some(params));
            return Err(UnsplashError::QueryParamMissing(attempted.to_string()));
        }
        self.client.get(&req_url, Some(params), None).await
    }
}
