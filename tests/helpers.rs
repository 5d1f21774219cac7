/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde_json::{Value, json};
use unsplash::v1::{AuthScopes, Client, Config, Scope};
use wiremock::MockServer;

pub(crate) const ACCESS_KEY: &str = "test-access-key";
pub(crate) const ACCESS_TOKEN: &str = "test-bearer-token";

pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Config pointing both the API and OAuth hosts at the mock server
pub(crate) fn mock_config(server: &MockServer) -> Config {
    Config::default()
        .with_api_origin(&server.uri())
        .unwrap()
        .with_oauth_origin(&server.uri())
        .unwrap()
}

#[allow(dead_code)]
pub(crate) fn public_client(server: &MockServer) -> Client {
    init_logging();
    Client::with_config(ACCESS_KEY, mock_config(server))
}

#[allow(dead_code)]
pub(crate) fn private_client(server: &MockServer, scopes: &[Scope]) -> Client {
    init_logging();
    Client::private(
        ACCESS_KEY,
        ACCESS_TOKEN,
        AuthScopes::new(scopes.iter()),
        mock_config(server),
    )
}

#[allow(dead_code)]
pub(crate) async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|r| r.len())
        .unwrap_or_default()
}

#[allow(dead_code)]
pub(crate) fn photo_json(id: &str) -> Value {
    json!({
        "id": id,
        "created_at": "2016-05-03T11:00:28-04:00",
        "updated_at": "2016-07-10T11:00:01-05:00",
        "width": 2448,
        "height": 3264,
        "color": "#6E633A",
        "blur_hash": "LFC$yHwc8^$yIAS$%M%00KxukYIp",
        "likes": 12,
        "liked_by_user": false,
        "description": null,
        "tags": [{ "title": "man" }],
        "urls": {
            "raw": format!("https://images.unsplash.com/photo-{}?ixid=abc", id),
            "full": "https://images.unsplash.com/full",
            "regular": "https://images.unsplash.com/regular",
            "small": "https://images.unsplash.com/small",
            "thumb": "https://images.unsplash.com/thumb"
        },
        "links": {
            "self": format!("https://api.unsplash.com/photos/{}", id),
            "html": format!("https://unsplash.com/photos/{}", id),
            "download": format!("https://unsplash.com/photos/{}/download", id),
            "download_location": format!("https://api.unsplash.com/photos/{}/download", id)
        },
        "user": user_json("jimmyexample")
    })
}

#[allow(dead_code)]
pub(crate) fn user_json(username: &str) -> Value {
    json!({
        "id": "pXhwzz1JtQU",
        "updated_at": "2016-07-10T11:00:01-05:00",
        "username": username,
        "name": "James Example",
        "first_name": "James",
        "last_name": "Example",
        "portfolio_url": "",
        "bio": "The best in the biz",
        "location": "Montreal",
        "total_likes": 20,
        "total_photos": 10,
        "total_collections": 5,
        "profile_image": {
            "small": "https://images.unsplash.com/profile-small",
            "medium": "https://images.unsplash.com/profile-medium",
            "large": "https://images.unsplash.com/profile-large"
        },
        "links": {
            "self": format!("https://api.unsplash.com/users/{}", username),
            "html": format!("https://unsplash.com/{}", username),
            "photos": format!("https://api.unsplash.com/users/{}/photos", username),
            "likes": format!("https://api.unsplash.com/users/{}/likes", username),
            "portfolio": format!("https://api.unsplash.com/users/{}/portfolio", username)
        }
    })
}

#[allow(dead_code)]
pub(crate) fn collection_json(id: i64) -> Value {
    json!({
        "id": id,
        "title": "Office",
        "description": null,
        "published_at": "2016-01-12T18:16:09-05:00",
        "featured": false,
        "total_photos": 3,
        "private": false,
        "share_key": "312d188df257b957f8b86d2ce20e4766",
        "cover_photo": null,
        "user": user_json("ashbot"),
        "links": {
            "self": format!("https://api.unsplash.com/collections/{}", id),
            "html": format!("https://unsplash.com/collections/{}", id),
            "photos": format!("https://api.unsplash.com/collections/{}/photos", id)
        }
    })
}
