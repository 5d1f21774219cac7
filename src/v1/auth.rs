/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::api::send;
use crate::v1::client::Client;
use crate::v1::config::Config;
use crate::v1::errors::UnsplashError;
use crate::v1::properties::Scope;
use reqwest::Method;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde_json::json;
use std::io::{BufRead, Write};
use url::Url;

/// Scopes granted to (or requested for) a client.
///
/// `public` is always present and always first. The list is fixed once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthScopes(Vec<String>);

impl AuthScopes {
    /// Creates the scope list with the implicit `public` scope prepended
    pub fn new<I, S>(scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list: Vec<String> = vec![Scope::Public.to_string()];
        for scope in scopes {
            let scope = scope.as_ref();
            if !list.iter().any(|s| s == scope) {
                list.push(scope.to_string());
            }
        }
        Self(list)
    }

    /// Exact match membership test
    pub fn contains(&self, scope: &str) -> bool {
        self.0.iter().any(|s| s == scope)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for AuthScopes {
    fn default() -> Self {
        Self::new(std::iter::empty::<&str>())
    }
}

impl std::fmt::Display for AuthScopes {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0.join("+"))
    }
}

/// Result of exchanging an authorization code for an access token
#[derive(Deserialize, Clone)]
pub struct AuthResponse {
    pub access_token: String,

    pub token_type: String,

    #[serde(default)]
    pub scope: String,

    #[serde(default)]
    pub created_at: i64,
}

impl std::fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthResponse")
            .field("access_token", &"xxx")
            .field("token_type", &self.token_type)
            .field("scope", &self.scope)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// The url a user must visit to grant the application access.
#[derive(Debug, Clone)]
pub struct AuthorizationRequest {
    url: Url,
}

impl AuthorizationRequest {
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Pulls the authorization code out of the url the user was redirected to
    pub fn code_from_redirect(redirect_url: &str) -> Result<String, UnsplashError> {
        let url = Url::parse(redirect_url)?;
        code_from_url(&url)
    }
}

fn code_from_url(url: &Url) -> Result<String, UnsplashError> {
    url.query_pairs()
        .find(|(k, _)| k == "code")
        .map(|(_, v)| v.into_owned())
        .ok_or(UnsplashError::CodeParamMissing)
}

/// Drives the OAuth2 authorization code grant and hands back a private [`Client`].
///
/// The steps are run in order and the first failure ends the flow:
/// [`request_authorization`](Self::request_authorization), obtaining the code
/// ([`prompt_for_code`](Self::prompt_for_code) or [`capture_code`](Self::capture_code)),
/// [`exchange_code`](Self::exchange_code) and finally [`finalize`](Self::finalize).
/// Nothing is retried; start again from the authorization request.
#[derive(Clone)]
pub struct OAuthFlow {
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    scopes: AuthScopes,
    config: Config,
    https_client: reqwest::Client,
}

impl OAuthFlow {
    pub fn new(
        client_id: &str,
        client_secret: &str,
        redirect_uri: &str,
        scopes: AuthScopes,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            scopes,
            config: Config::default(),
            https_client: reqwest::Client::new(),
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn with_http_client(mut self, https_client: reqwest::Client) -> Self {
        self.https_client = https_client;
        self
    }

    pub fn scopes(&self) -> &AuthScopes {
        &self.scopes
    }

    /// Builds the authorize url for the requested scopes. No request is made.
    pub fn request_authorization(&self) -> Result<AuthorizationRequest, UnsplashError> {
        let mut url = self.config.authorize_endpoint()?;
        let scope = self.scopes.iter().collect::<Vec<_>>().join(" ");
        url.query_pairs_mut()
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &self.redirect_uri)
            .append_pair("response_type", "code")
            .append_pair("scope", &scope);
        log::debug!("authorization requested for scopes {}", self.scopes);
        Ok(AuthorizationRequest { url })
    }

    /// Shows the authorize url on `output` and blocks until a code is entered on `input`
    pub fn prompt_for_code<R, W>(
        &self,
        request: &AuthorizationRequest,
        mut input: R,
        mut output: W,
    ) -> Result<String, UnsplashError>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(output, "Navigate to:\n{}\n", request.url())?;
        writeln!(
            output,
            "You will be redirected to the redirect uri, whose link will have a `code` query parameter"
        )?;
        writeln!(output, "Paste the authorization code here: ")?;
        output.flush()?;

        let mut line = String::new();
        input.read_line(&mut line)?;
        let code = line.trim();
        if code.is_empty() {
            return Err(UnsplashError::AuthCodeEmpty);
        }
        Ok(code.to_string())
    }

    /// Follows the authorize url and reads the code off the final redirect location
    pub async fn capture_code(
        &self,
        request: &AuthorizationRequest,
    ) -> Result<String, UnsplashError> {
        log::debug!("capturing authorization code from redirect");
        let resp = self
            .https_client
            .get(request.url().clone())
            .send()
            .await?;
        code_from_url(resp.url())
    }

    /// Trades an authorization code for an access token
    pub async fn exchange_code(&self, code: &str) -> Result<AuthResponse, UnsplashError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(UnsplashError::AuthCodeEmpty);
        }

        let body = json!({
            "client_id": self.client_id,
            "client_secret": self.client_secret,
            "redirect_uri": self.redirect_uri,
            "code": code,
            "grant_type": "authorization_code",
        });
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        log::debug!("exchanging authorization code for access token");
        let data = send(
            &self.https_client,
            Method::POST,
            self.config.token_endpoint()?,
            headers,
            Some(&body),
        )
        .await?;
        Ok(serde_json::from_slice(&data)?)
    }

    /// Creates the private client carrying the bearer token and the requested scopes
    pub fn finalize(&self, auth: AuthResponse) -> Client {
        Client::private_with_http_client(
            &self.client_id,
            &auth.access_token,
            self.scopes.clone(),
            self.config.clone(),
            self.https_client.clone(),
        )
    }

    /// Runs the whole flow, asking for the code on stdin
    pub async fn authorize_interactive(&self) -> Result<Client, UnsplashError> {
        let request = self.request_authorization()?;
        let code = self.prompt_for_code(&request, std::io::stdin().lock(), std::io::stdout())?;
        let auth = self.exchange_code(&code).await?;
        Ok(self.finalize(auth))
    }

    /// Runs the whole flow, capturing the code from the redirect
    pub async fn authorize_with_redirect(&self) -> Result<Client, UnsplashError> {
        let request = self.request_authorization()?;
        let code = self.capture_code(&request).await?;
        let auth = self.exchange_code(&code).await?;
        Ok(self.finalize(auth))
    }
}

impl std::fmt::Debug for OAuthFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthFlow")
            .field("client_id", &self.client_id)
            .field("client_secret", &"xxx")
            .field("redirect_uri", &self.redirect_uri)
            .field("scopes", &self.scopes)
            .finish()
    }
}
