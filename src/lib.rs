/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Unsplash
//!
//! This Unsplash library was created for working with the Unsplash API (version v1).
//!
//! For further details on the Rest API refer to the [Unsplash API Docs](https://unsplash.com/documentation)
//!
//! ## Features
//!
//! - User information
//!     - Public profile, portfolio, photos, likes, collections and statistics
//!     - Private profile read/update (requires a private client)
//! - Photo information
//!     - List, get, random, statistics
//!     - Can update, like and unlike (requires a private client)
//!     - Resized image urls
//! - Collection information
//!     - Can create, update, delete and add/remove photos (requires a private client)
//! - Topics, search and overall Unsplash stats
//! - OAuth2 authorization code flow for obtaining a private client
//! - Lower level interface for handling the raw communication
//!
//! *Public requests only need the application access key. Requests on behalf of a user need
//! a private client, obtained through [`v1::OAuthFlow`] or from a previously acquired access token
//! with [`v1::Client::private`]*
//!
//! *If you want to use this library for more than is currently implemented, the
//! [`v1::Client::dispatch`] method is a way to make request/responses in a more direct way*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! unsplash = "0.3.0"
//! ```
//!
//! ## Usage
//!
//! **You will need to acquire an access key from Unsplash prior to using the API**
//!
//! ```rust,no_run
//! use unsplash::v1::{Client, QueryParams, RandomPhotos, Unsplash};
//!
//! async fn print_random_photos(access_key: &str) -> anyhow::Result<()> {
//!     // The access key is obtained from your Unsplash developer application
//!     let unsplash = Unsplash::new(Client::new(access_key));
//!
//!     // Supplying a count returns a list of photos
//!     let params = QueryParams::from([("count".to_string(), "3".to_string())]);
//!     if let RandomPhotos::Many(photos) = unsplash.photos.random(Some(&params)).await? {
//!         for photo in photos {
//!             println!("{} by {}", photo.id, photo.user.username);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
pub mod v1;
