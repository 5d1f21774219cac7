/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::UnsplashError;
use crate::v1::macros::obj_from_segments;
use crate::v1::{Client, Photo, QueryParams, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Holds information returned from the Topics API.
///
/// See [Unsplash API Docs](https://unsplash.com/documentation#topics) for more
/// details on the individual fields.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Topic {
    pub id: String,

    pub slug: String,

    pub title: String,

    pub description: Option<String>,

    pub published_at: Option<DateTime<Utc>>,

    pub updated_at: Option<DateTime<Utc>>,

    pub starts_at: Option<DateTime<Utc>>,

    pub ends_at: Option<DateTime<Utc>>,

    pub featured: bool,

    pub total_photos: u64,

    pub links: TopicLinks,

    pub status: String,

    pub owners: Vec<User>,

    pub top_contributors: Vec<User>,

    pub current_user_contributions: Vec<Photo>,

    pub total_current_user_submissions: Option<u64>,

    pub cover_photo: Option<Photo>,

    pub preview_photos: Vec<Photo>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct TopicLinks {
    #[serde(rename = "self")]
    pub self_link: String,
    pub html: String,
    pub photos: String,
}

/// Topic related requests
#[derive(Debug, Clone)]
pub struct TopicsService {
    client: Client,
}

impl TopicsService {
    const BASE_URI: &'static str = "topics";

    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns a single page from the list of all topics
    pub async fn list(&self, params: Option<&QueryParams>) -> Result<Vec<Topic>, UnsplashError> {
        obj_from_segments!(self.client, &[Self::BASE_URI], params, None)
    }

    /// Returns the topic with the given id or slug
    pub async fn get(&self, id_or_slug: &str) -> Result<Topic, UnsplashError> {
        obj_from_segments!(
            self.client,
            &[Self::BASE_URI, id_or_slug],
            None,
            None
        )
    }

    /// Returns a single page of the topic's photos
    pub async fn photos(
        &self,
        id_or_slug: &str,
        params: Option<&QueryParams>,
    ) -> Result<Vec<Photo>, UnsplashError> {
        obj_from_segments!(
            self.client,
            &[Self::BASE_URI, id_or_slug, "photos"],
            params,
            None
        )
    }
}
