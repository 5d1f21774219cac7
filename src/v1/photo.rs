/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::UnsplashError;
use crate::v1::macros::{obj_from_segments, stream_pages_from_segments};
use crate::v1::{
    Client, Collection, PER_PAGE, PhotoStats, QueryParams, Scope, SearchResults, SearchService,
    Stats, User,
};
use async_stream::try_stream;
use chrono::{DateTime, Utc};
use futures::Stream;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Holds information returned from the Photos API.
///
/// See [Unsplash API Docs](https://unsplash.com/documentation#photos) for more
/// details on the individual fields.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Photo {
    pub id: String,

    pub created_at: Option<DateTime<Utc>>,

    pub updated_at: Option<DateTime<Utc>>,

    pub promoted_at: Option<DateTime<Utc>>,

    pub width: u32,

    pub height: u32,

    pub color: Option<String>,

    pub blur_hash: Option<String>,

    pub downloads: u64,

    pub likes: u64,

    pub liked_by_user: bool,

    pub description: Option<String>,

    pub alt_description: Option<String>,

    // Only present on a single photo request
    pub exif: Option<Exif>,

    pub location: Option<Location>,

    pub tags: Vec<Tag>,

    pub current_user_collections: Vec<Collection>,

    pub urls: PhotoUrls,

    pub links: PhotoLinks,

    pub user: User,

    pub statistics: Option<PhotoStatistics>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Exif {
    pub make: Option<String>,
    pub model: Option<String>,
    pub exposure_time: Option<String>,
    pub aperture: Option<String>,
    pub focal_length: Option<String>,
    pub iso: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Location {
    pub city: Option<String>,
    pub country: Option<String>,
    pub position: Option<Position>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Position {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Tag {
    pub title: String,
}

/// Dynamic image urls. `raw` is the base used for resizing.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PhotoUrls {
    pub raw: String,
    pub full: String,
    pub regular: String,
    pub small: String,
    pub thumb: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PhotoLinks {
    #[serde(rename = "self")]
    pub self_link: String,
    pub html: String,
    pub download: String,
    pub download_location: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PhotoStatistics {
    pub downloads: Stats,
    pub views: Stats,
    pub likes: Stats,
}

/// Returned on liking a photo, abbreviated versions of the photo and user
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct LikeResponse {
    pub photo: Photo,
    pub user: User,
}

/// A random photo request returns a list only when a `count` was asked for.
///
/// The single photo is boxed to keep both variants close in size.
#[derive(Debug, Clone)]
pub enum RandomPhotos {
    Single(Box<Photo>),
    Many(Vec<Photo>),
}

impl RandomPhotos {
    /// Flattens either variant into a list
    pub fn into_vec(self) -> Vec<Photo> {
        match self {
            RandomPhotos::Single(photo) => vec![*photo],
            RandomPhotos::Many(photos) => photos,
        }
    }
}

/// Photo related requests
#[derive(Debug, Clone)]
pub struct PhotosService {
    client: Client,
}

impl PhotosService {
    const BASE_URI: &'static str = "photos";

    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns a single page from the list of all photos
    pub async fn list(&self, params: Option<&QueryParams>) -> Result<Vec<Photo>, UnsplashError> {
        obj_from_segments!(self.client, &[Self::BASE_URI], params, None)
    }

    /// Pages through the list of all photos
    pub fn stream(
        &self,
        params: Option<&QueryParams>,
    ) -> impl Stream<Item = Result<Photo, UnsplashError>> {
        stream_pages_from_segments!(self.client, &[Self::BASE_URI], params, Photo)
    }

    /// Returns the photo with the given id
    pub async fn get(&self, id: &str) -> Result<Photo, UnsplashError> {
        obj_from_segments!(
            self.client,
            &[Self::BASE_URI, id],
            None,
            None
        )
    }

    /// Returns a random photo, or a list of them when a `count` parameter is supplied
    pub async fn random(&self, params: Option<&QueryParams>) -> Result<RandomPhotos, UnsplashError> {
        let wants_many = params.is_some_and(|p| p.contains_key("count"));
        if wants_many {
            let photos: Vec<Photo> =
                obj_from_segments!(self.client, &[Self::BASE_URI, "random"], params, None)?;
            Ok(RandomPhotos::Many(photos))
        } else {
            let photo: Photo =
                obj_from_segments!(self.client, &[Self::BASE_URI, "random"], params, None)?;
            Ok(RandomPhotos::Single(Box::new(photo)))
        }
    }

    /// Returns download, view and like statistics for the photo
    pub async fn statistics(
        &self,
        id: &str,
        params: Option<&QueryParams>,
    ) -> Result<PhotoStats, UnsplashError> {
        obj_from_segments!(
            self.client,
            &[Self::BASE_URI, id, "statistics"],
            params,
            None
        )
    }

    /// Searches photos matching `query`
    pub async fn search(
        &self,
        query: &str,
        params: Option<&QueryParams>,
    ) -> Result<SearchResults<Photo>, UnsplashError> {
        let mut params = params.cloned().unwrap_or_default();
        params.insert("query".into(), query.into());
        SearchService::new(self.client.clone())
            .photos(&params)
            .await
    }

    /// Updates the photo on behalf of the user. Requires the `write_photos` scope.
    pub async fn update(
        &self,
        id: &str,
        data: &HashMap<String, String>,
    ) -> Result<Photo, UnsplashError> {
        let req_url = self.client.endpoint_segments(&[Self::BASE_URI, id])?;
        self.client
            .put(&req_url, &serde_json::to_value(data)?, Some(Scope::WritePhotos))
            .await
    }

    /// Likes the photo on behalf of the user. Requires the `write_likes` scope.
    pub async fn like(&self, id: &str) -> Result<LikeResponse, UnsplashError> {
        let req_url = self
            .client
            .endpoint_segments(&[Self::BASE_URI, id, "like"])?;
        self.client
            .post(&req_url, None, Some(Scope::WriteLikes))
            .await
    }

    /// Removes the user's like of the photo. Requires the `write_likes` scope.
    pub async fn unlike(&self, id: &str) -> Result<(), UnsplashError> {
        let req_url = self
            .client
            .endpoint_segments(&[Self::BASE_URI, id, "like"])?;
        self.client
            .delete(&req_url, None, Some(Scope::WriteLikes))
            .await?;
        Ok(())
    }
}
