/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::UnsplashError;
use crate::v1::macros::{obj_from_segments, stream_pages_from_segments};
use crate::v1::parsers::from_empty_str_to_none;
use crate::v1::{
    Client, Collection, PER_PAGE, Photo, QueryParams, Scope, SearchResults, SearchService,
    UserStats,
};
use async_stream::try_stream;
use chrono::{DateTime, Utc};
use futures::Stream;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::Url;

/// Holds information returned from the Users API.
///
/// See [Unsplash API Docs](https://unsplash.com/documentation#users) for more
/// details on the individual fields.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct User {
    pub id: String,

    pub updated_at: Option<DateTime<Utc>>,

    pub username: String,

    pub name: String,

    pub first_name: Option<String>,

    pub last_name: Option<String>,

    // Only returned for the authenticated user
    pub email: Option<String>,

    pub instagram_username: Option<String>,

    pub twitter_username: Option<String>,

    #[serde(deserialize_with = "from_empty_str_to_none")]
    pub portfolio_url: Option<String>,

    pub bio: Option<String>,

    pub location: Option<String>,

    pub total_likes: u64,

    pub total_photos: u64,

    pub total_collections: u64,

    pub followed_by_user: bool,

    pub followers_count: u64,

    pub following_count: u64,

    pub downloads: u64,

    pub uploads_remaining: Option<u64>,

    pub accepted_tos: bool,

    pub profile_image: Option<ProfileImage>,

    pub badge: Option<Badge>,

    pub links: UserLinks,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ProfileImage {
    pub small: String,
    pub medium: String,
    pub large: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Badge {
    pub title: String,
    pub primary: bool,
    pub slug: String,
    pub link: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct UserLinks {
    #[serde(rename = "self")]
    pub self_link: String,
    pub html: String,
    pub photos: String,
    pub likes: String,
    pub portfolio: String,
    pub following: String,
    pub followers: String,
}

/// User related requests
#[derive(Debug, Clone)]
pub struct UsersService {
    client: Client,
}

impl UsersService {
    const BASE_URI: &'static str = "users";
    const ME_URI: &'static str = "me";

    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns the public profile of the user
    pub async fn public_profile(&self, username: &str) -> Result<User, UnsplashError> {
        obj_from_segments!(
            self.client,
            &[Self::BASE_URI, username],
            None,
            None
        )
    }

    /// Returns the url of the user's portfolio
    pub async fn portfolio_url(&self, username: &str) -> Result<Url, UnsplashError> {
        let resp: PortfolioResponse = obj_from_segments!(
            self.client,
            &[Self::BASE_URI, username, "portfolio"],
            None,
            None
        )?;
        Ok(Url::parse(&resp.url)?)
    }

    /// Returns a single page of photos uploaded by the user
    pub async fn photos(
        &self,
        username: &str,
        params: Option<&QueryParams>,
    ) -> Result<Vec<Photo>, UnsplashError> {
        obj_from_segments!(
            self.client,
            &[Self::BASE_URI, username, "photos"],
            params,
            None
        )
    }

    /// Pages through all photos uploaded by the user
    pub fn photos_stream(
        &self,
        username: &str,
        params: Option<&QueryParams>,
    ) -> impl Stream<Item = Result<Photo, UnsplashError>> {
        stream_pages_from_segments!(
            self.client,
            &[Self::BASE_URI, username, "photos"],
            params,
            Photo
        )
    }

    /// Returns a single page of photos liked by the user
    pub async fn liked_photos(
        &self,
        username: &str,
        params: Option<&QueryParams>,
    ) -> Result<Vec<Photo>, UnsplashError> {
        obj_from_segments!(
            self.client,
            &[Self::BASE_URI, username, "likes"],
            params,
            None
        )
    }

    /// Returns a single page of collections created by the user
    pub async fn collections(
        &self,
        username: &str,
        params: Option<&QueryParams>,
    ) -> Result<Vec<Collection>, UnsplashError> {
        obj_from_segments!(
            self.client,
            &[Self::BASE_URI, username, "collections"],
            params,
            None
        )
    }

    /// Returns download and view statistics for the user
    pub async fn statistics(
        &self,
        username: &str,
        params: Option<&QueryParams>,
    ) -> Result<UserStats, UnsplashError> {
        obj_from_segments!(
            self.client,
            &[Self::BASE_URI, username, "statistics"],
            params,
            None
        )
    }

    /// Searches users matching `query`
    pub async fn search(
        &self,
        query: &str,
        params: Option<&QueryParams>,
    ) -> Result<SearchResults<User>, UnsplashError> {
        let mut params = params.cloned().unwrap_or_default();
        params.insert("query".into(), query.into());
        SearchService::new(self.client.clone())
            .users(&params)
            .await
    }

    /// Returns the authenticated user's private profile. Requires the `read_user` scope.
    pub async fn private_profile(&self) -> Result<User, UnsplashError> {
        obj_from_segments!(self.client, &[Self::ME_URI], None, Some(Scope::ReadUser))
    }

    /// Updates the authenticated user's profile. Requires the `write_user` scope.
    pub async fn update_profile(
        &self,
        data: &HashMap<String, String>,
    ) -> Result<User, UnsplashError> {
        let req_url = self.client.endpoint_segments(&[Self::ME_URI])?;
        self.client
            .put(&req_url, &serde_json::to_value(data)?, Some(Scope::WriteUser))
            .await
    }
}

// Expected response for a portfolio request
#[derive(Deserialize, Debug)]
struct PortfolioResponse {
    url: String,
}
