/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::auth::AuthScopes;
use crate::v1::config::Config;
use crate::v1::errors::UnsplashError;
use crate::v1::properties::Scope;
use bytes::Bytes;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use std::collections::HashMap;
use url::Url;

/// Query parameters applied to a request url. Keys are unique, order is not significant.
pub type QueryParams = HashMap<String, String>;

const ACCEPT_VERSION: HeaderName = HeaderName::from_static("accept-version");

/// Appends the query parameters to the url.
///
/// Pairs are added sorted by key so the same set of parameters always produces the same url.
/// An empty or missing set leaves the url untouched.
pub fn build_url(base: &Url, params: Option<&QueryParams>) -> Url {
    let mut url = base.clone();
    if let Some(params) = params.filter(|p| !p.is_empty()) {
        let mut pairs: Vec<_> = params.iter().collect();
        pairs.sort();
        url.query_pairs_mut().extend_pairs(pairs);
    }
    url
}

/// Directly communicates with the API.
///
/// Holds everything needed to authenticate a request. Nothing in here changes after
/// construction, which is what makes the scope pre-check in [`ApiClient::dispatch`] safe to
/// perform ahead of the request.
#[derive(Clone)]
pub(crate) struct ApiClient {
    client_id: String,
    credential: Credential,
    scopes: AuthScopes,
    config: Config,
    https_client: reqwest::Client,
}

#[derive(Clone)]
enum Credential {
    ClientId,
    Bearer(String),
}

impl ApiClient {
    pub(crate) fn public(client_id: &str, config: Config, https_client: reqwest::Client) -> Self {
        Self {
            client_id: client_id.into(),
            credential: Credential::ClientId,
            scopes: AuthScopes::default(),
            config,
            https_client,
        }
    }

    pub(crate) fn private(
        client_id: &str,
        access_token: &str,
        scopes: AuthScopes,
        config: Config,
        https_client: reqwest::Client,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            credential: Credential::Bearer(access_token.into()),
            scopes,
            config,
            https_client,
        }
    }

    pub(crate) fn is_private(&self) -> bool {
        matches!(self.credential, Credential::Bearer(_))
    }

    pub(crate) fn client_id(&self) -> &str {
        &self.client_id
    }

    pub(crate) fn scopes(&self) -> &AuthScopes {
        &self.scopes
    }

    pub(crate) fn config(&self) -> &Config {
        &self.config
    }

    /// Headers sent with every request from this client
    pub(crate) fn headers(&self) -> Result<HeaderMap, UnsplashError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            ACCEPT_VERSION,
            HeaderValue::from_str(&self.config.api_version)?,
        );
        match &self.credential {
            Credential::Bearer(token) => {
                let mut value = HeaderValue::from_str(&format!("Bearer {}", token))?;
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
            Credential::ClientId if self.config.auth_in_header => {
                headers.insert(
                    AUTHORIZATION,
                    HeaderValue::from_str(&format!("Client-ID {}", self.client_id))?,
                );
            }
            Credential::ClientId => (),
        }
        Ok(headers)
    }

    /// Verifies this client is allowed to perform a request needing `required`
    pub(crate) fn check_scope(&self, required: Option<Scope>) -> Result<(), UnsplashError> {
        let Some(scope) = required else {
            return Ok(());
        };
        if !self.is_private() {
            return Err(UnsplashError::ClientNotPrivate);
        }
        if !self.scopes.contains(scope.as_ref()) {
            return Err(UnsplashError::RequiredScopeAbsent(scope.to_string()));
        }
        Ok(())
    }

    /// Single path every request takes: scope pre-check, auth, send, status classification.
    pub(crate) async fn dispatch(
        &self,
        method: Method,
        url: &Url,
        params: Option<&QueryParams>,
        body: Option<&serde_json::Value>,
        required_scope: Option<Scope>,
    ) -> Result<Bytes, UnsplashError> {
        self.check_scope(required_scope)?;

        let req_url = match self.credential {
            Credential::ClientId if !self.config.auth_in_header => {
                let mut params = params.cloned().unwrap_or_default();
                params.insert("client_id".into(), self.client_id.clone());
                build_url(url, Some(&params))
            }
            _ => build_url(url, params),
        };

        send(&self.https_client, method, req_url, self.headers()?, body).await
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("client_id", &self.client_id)
            .field("private", &self.is_private())
            .field("scopes", &self.scopes)
            .field("config", &self.config)
            .finish()
    }
}

/// Issues the request and classifies the response status for the verb used.
pub(crate) async fn send(
    https_client: &reqwest::Client,
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<&serde_json::Value>,
) -> Result<Bytes, UnsplashError> {
    log::debug!("{} {}", method, url.path());
    let expected = expected_statuses(&method);

    let mut req = https_client.request(method, url).headers(headers);
    if let Some(body) = body {
        req = req.json(body);
    }
    let resp = req.send().await?;

    let status = resp.status();
    log::trace!("response status {}", status);
    if !expected.contains(&status) {
        return Err(UnsplashError::StatusCode {
            status: status.as_u16(),
            reasons: error_reasons(resp).await,
        });
    }
    Ok(resp.bytes().await?)
}

/// Status codes accepted as success for each verb
pub(crate) fn expected_statuses(method: &Method) -> &'static [StatusCode] {
    if *method == Method::POST || *method == Method::PUT {
        &[StatusCode::OK, StatusCode::CREATED]
    } else if *method == Method::DELETE {
        &[StatusCode::OK, StatusCode::NO_CONTENT]
    } else {
        &[StatusCode::OK]
    }
}

// Shape of the body Unsplash returns alongside an error status
#[derive(Deserialize, Debug, Default)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<String>,
}

// Best effort. A body that can't be read or parsed yields no reasons.
async fn error_reasons(resp: reqwest::Response) -> Vec<String> {
    match resp.bytes().await {
        Ok(data) => serde_json::from_slice::<ErrorBody>(&data)
            .unwrap_or_default()
            .errors,
        Err(_) => Vec::new(),
    }
}
