/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::UnsplashError;
use crate::v1::macros::{obj_from_segments, stream_pages_from_segments};
use crate::v1::parsers::from_string_or_number;
use crate::v1::{Client, PER_PAGE, Photo, QueryParams, Scope, SearchResults, SearchService, User};
use async_stream::try_stream;
use chrono::{DateTime, Utc};
use futures::Stream;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Holds information returned from the Collections API.
///
/// See [Unsplash API Docs](https://unsplash.com/documentation#collections) for more
/// details on the individual fields.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Collection {
    #[serde(deserialize_with = "from_string_or_number")]
    pub id: String,

    pub title: String,

    pub description: Option<String>,

    pub published_at: Option<DateTime<Utc>>,

    pub last_collected_at: Option<DateTime<Utc>>,

    pub updated_at: Option<DateTime<Utc>>,

    pub featured: bool,

    pub total_photos: u64,

    pub private: bool,

    pub share_key: Option<String>,

    pub cover_photo: Option<Photo>,

    pub user: Option<User>,

    pub links: CollectionLinks,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct CollectionLinks {
    #[serde(rename = "self")]
    pub self_link: String,
    pub html: String,
    pub photos: String,
}

/// Returned on adding a photo to, or removing a photo from, a collection
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct CollectionActionResponse {
    pub photo: Photo,
    pub collection: Collection,
    pub user: User,
    pub created_at: Option<DateTime<Utc>>,
}

/// Properties that can be used in the creation or update of a Collection
#[derive(Serialize, Default, Debug)]
pub struct CollectionProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
}

/// Collection related requests
#[derive(Debug, Clone)]
pub struct CollectionsService {
    client: Client,
}

impl CollectionsService {
    const BASE_URI: &'static str = "collections";

    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns a single page from the list of all collections
    pub async fn list(
        &self,
        params: Option<&QueryParams>,
    ) -> Result<Vec<Collection>, UnsplashError> {
        obj_from_segments!(self.client, &[Self::BASE_URI], params, None)
    }

    /// Pages through the list of all collections
    pub fn stream(
        &self,
        params: Option<&QueryParams>,
    ) -> impl Stream<Item = Result<Collection, UnsplashError>> {
        stream_pages_from_segments!(self.client, &[Self::BASE_URI], params, Collection)
    }

    /// Returns the collection with the given id
    pub async fn get(&self, id: &str) -> Result<Collection, UnsplashError> {
        obj_from_segments!(
            self.client,
            &[Self::BASE_URI, id],
            None,
            None
        )
    }

    /// Returns a single page of the collection's photos
    pub async fn photos(
        &self,
        id: &str,
        params: Option<&QueryParams>,
    ) -> Result<Vec<Photo>, UnsplashError> {
        obj_from_segments!(
            self.client,
            &[Self::BASE_URI, id, "photos"],
            params,
            None
        )
    }

    /// Returns collections related to this one
    pub async fn related(&self, id: &str) -> Result<Vec<Collection>, UnsplashError> {
        obj_from_segments!(
            self.client,
            &[Self::BASE_URI, id, "related"],
            None,
            None
        )
    }

    /// Searches collections matching `query`
    pub async fn search(
        &self,
        query: &str,
        params: Option<&QueryParams>,
    ) -> Result<SearchResults<Collection>, UnsplashError> {
        let mut params = params.cloned().unwrap_or_default();
        params.insert("query".into(), query.into());
        SearchService::new(self.client.clone())
            .collections(&params)
            .await
    }

    /// Creates a new collection. Requires the `write_collections` scope.
    pub async fn create(&self, props: &CollectionProps) -> Result<Collection, UnsplashError> {
        let req_url = self.client.endpoint_segments(&[Self::BASE_URI])?;
        self.client
            .post(
                &req_url,
                Some(&serde_json::to_value(props)?),
                Some(Scope::WriteCollections),
            )
            .await
    }

    /// Updates an existing collection. Requires the `write_collections` scope.
    pub async fn update(
        &self,
        id: &str,
        props: &CollectionProps,
    ) -> Result<Collection, UnsplashError> {
        let req_url = self.client.endpoint_segments(&[Self::BASE_URI, id])?;
        self.client
            .put(
                &req_url,
                &serde_json::to_value(props)?,
                Some(Scope::WriteCollections),
            )
            .await
    }

    /// Deletes a collection. Requires the `write_collections` scope.
    pub async fn delete(&self, id: &str) -> Result<(), UnsplashError> {
        let req_url = self.client.endpoint_segments(&[Self::BASE_URI, id])?;
        self.client
            .delete(&req_url, None, Some(Scope::WriteCollections))
            .await?;
        Ok(())
    }

    /// Adds a photo to the collection. Requires the `write_collections` scope.
    pub async fn add_photo(
        &self,
        id: &str,
        photo_id: &str,
    ) -> Result<CollectionActionResponse, UnsplashError> {
        let req_url = self
            .client
            .endpoint_segments(&[Self::BASE_URI, id, "add"])?;
        self.client
            .post(
                &req_url,
                Some(&json!({"photo_id": photo_id})),
                Some(Scope::WriteCollections),
            )
            .await
    }

    /// Removes a photo from the collection. Requires the `write_collections` scope.
    ///
    /// Returns `None` when the API answers with no content.
    pub async fn remove_photo(
        &self,
        id: &str,
        photo_id: &str,
    ) -> Result<Option<CollectionActionResponse>, UnsplashError> {
        let req_url = self
            .client
            .endpoint_segments(&[Self::BASE_URI, id, "remove"])?;
        let data = self
            .client
            .delete(
                &req_url,
                Some(&json!({"photo_id": photo_id})),
                Some(Scope::WriteCollections),
            )
            .await?;
        if data.is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_slice(&data)?))
    }
}
