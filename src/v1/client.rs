/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::api::{ApiClient, QueryParams};
use crate::v1::auth::AuthScopes;
use crate::v1::config::Config;
use crate::v1::errors::UnsplashError;
use crate::v1::properties::Scope;
use crate::v1::{
    CollectionsService, PhotosService, SearchService, StatsService, TopicsService, UsersService,
};
use bytes::Bytes;
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use url::Url;

/// Handle used for every request to the API.
///
/// A public client authenticates with the application access key only. A private client
/// carries a user's bearer token plus the scopes that user granted. Credentials and scopes are
/// fixed at construction and never change afterwards, so checking a scope and then issuing the
/// request can't race. Cloning is cheap and clones share the connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    api_client: Arc<ApiClient>,
}

impl Client {
    /// Creates a public client from the application access key
    pub fn new(client_id: &str) -> Self {
        Self::with_config(client_id, Config::default())
    }

    pub fn with_config(client_id: &str, config: Config) -> Self {
        Self::with_http_client(client_id, config, reqwest::Client::new())
    }

    /// Creates a public client using the provided transport (timeouts, proxies, etc.)
    pub fn with_http_client(client_id: &str, config: Config, https_client: reqwest::Client) -> Self {
        Self {
            api_client: Arc::new(ApiClient::public(client_id, config, https_client)),
        }
    }

    /// Creates a private client from an access token obtained earlier
    pub fn private(client_id: &str, access_token: &str, scopes: AuthScopes, config: Config) -> Self {
        Self::private_with_http_client(
            client_id,
            access_token,
            scopes,
            config,
            reqwest::Client::new(),
        )
    }

    pub fn private_with_http_client(
        client_id: &str,
        access_token: &str,
        scopes: AuthScopes,
        config: Config,
        https_client: reqwest::Client,
    ) -> Self {
        Self {
            api_client: Arc::new(ApiClient::private(
                client_id,
                access_token,
                scopes,
                config,
                https_client,
            )),
        }
    }

    pub fn client_id(&self) -> &str {
        self.api_client.client_id()
    }

    pub fn is_private(&self) -> bool {
        self.api_client.is_private()
    }

    pub fn scopes(&self) -> &AuthScopes {
        self.api_client.scopes()
    }

    pub fn config(&self) -> &Config {
        self.api_client.config()
    }

    /// Resolves a path relative to the configured API origin
    pub fn endpoint(&self, path: &str) -> Result<Url, UnsplashError> {
        self.config().endpoint(path)
    }

    /// Resolves path segments relative to the configured API origin, escaping each one
    pub fn endpoint_segments(&self, segments: &[&str]) -> Result<Url, UnsplashError> {
        self.config().endpoint_segments(segments)
    }

    /// Lower level access to the API.
    ///
    /// When `required_scope` is set the client must be private and hold that scope, otherwise
    /// the call fails without touching the network. Returns the raw body of a successful
    /// response.
    pub async fn dispatch(
        &self,
        method: Method,
        url: &Url,
        params: Option<&QueryParams>,
        body: Option<&serde_json::Value>,
        required_scope: Option<Scope>,
    ) -> Result<Bytes, UnsplashError> {
        self.api_client
            .dispatch(method, url, params, body, required_scope)
            .await
    }

    /// Performs a get request and decodes the response
    pub async fn get<T: DeserializeOwned>(
        &self,
        url: &Url,
        params: Option<&QueryParams>,
        required_scope: Option<Scope>,
    ) -> Result<T, UnsplashError> {
        let data = self
            .dispatch(Method::GET, url, params, None, required_scope)
            .await?;
        Ok(serde_json::from_slice(&data)?)
    }

    /// Performs a post request and decodes the response
    pub async fn post<T: DeserializeOwned>(
        &self,
        url: &Url,
        body: Option<&serde_json::Value>,
        required_scope: Option<Scope>,
    ) -> Result<T, UnsplashError> {
        let data = self
            .dispatch(Method::POST, url, None, body, required_scope)
            .await?;
        Ok(serde_json::from_slice(&data)?)
    }

    /// Performs a put request and decodes the response
    pub async fn put<T: DeserializeOwned>(
        &self,
        url: &Url,
        body: &serde_json::Value,
        required_scope: Option<Scope>,
    ) -> Result<T, UnsplashError> {
        let data = self
            .dispatch(Method::PUT, url, None, Some(body), required_scope)
            .await?;
        Ok(serde_json::from_slice(&data)?)
    }

    /// Performs a delete request. The body, if any, is handed back undecoded.
    pub async fn delete(
        &self,
        url: &Url,
        body: Option<&serde_json::Value>,
        required_scope: Option<Scope>,
    ) -> Result<Bytes, UnsplashError> {
        self.dispatch(Method::DELETE, url, None, body, required_scope)
            .await
    }
}

/// Wraps the whole API, one service per resource kind sharing the same client.
#[derive(Debug, Clone)]
pub struct Unsplash {
    pub users: UsersService,
    pub photos: PhotosService,
    pub collections: CollectionsService,
    pub topics: TopicsService,
    pub search: SearchService,
    pub stats: StatsService,
    client: Client,
}

impl Unsplash {
    pub fn new(client: Client) -> Self {
        Self {
            users: UsersService::new(client.clone()),
            photos: PhotosService::new(client.clone()),
            collections: CollectionsService::new(client.clone()),
            topics: TopicsService::new(client.clone()),
            search: SearchService::new(client.clone()),
            stats: StatsService::new(client.clone()),
            client,
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}
