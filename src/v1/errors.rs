/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use reqwest::header::InvalidHeaderValue;
use std::io;
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum UnsplashError {
    #[error("I/O error")]
    Io(#[from] io::Error),

    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("Deserialization error")]
    Deserialization(#[from] serde_json::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("Invalid header value")]
    InvalidHeader(#[from] InvalidHeaderValue),

    #[error("client not private but used for functions that require private authentication")]
    ClientNotPrivate,

    #[error("required scope `{0}` not in client auth scopes")]
    RequiredScopeAbsent(String),

    #[error("path segment `{0}` is not allowed in a request url")]
    InvalidPathSegment(String),

    #[error("search query parameter absent in url: {0}")]
    QueryParamMissing(String),

    #[error("`code` query parameter not found in the redirect URL")]
    CodeParamMissing,

    #[error("auth code provided is empty")]
    AuthCodeEmpty,

    #[error("unexpected status code: {status}, encountered errors: {reasons:?}")]
    StatusCode { status: u16, reasons: Vec<String> },
}
