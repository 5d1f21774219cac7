/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate unsplash;

use anyhow::Result;
use dotenvy::dotenv;
use unsplash::v1::{AuthScopes, OAuthFlow, Scope, Unsplash};

// Runs the authorization code flow on the terminal, then likes and unlikes a photo.
// NOTE: the redirect uri must match the one registered for the application. Use
// `urn:ietf:wg:oauth:2.0:oob` to have the code shown in the browser.
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let access_key = std::env::var("UNSPLASH_ACCESS_KEY")?;
    let secret_key = std::env::var("UNSPLASH_SECRET_KEY")?;
    let redirect_uri = std::env::var("UNSPLASH_REDIRECT_URI")?;
    let photo_id = std::env::args().nth(1).unwrap_or_else(|| "Dwu85P9SOIk".into());

    let flow = OAuthFlow::new(
        &access_key,
        &secret_key,
        &redirect_uri,
        AuthScopes::new([Scope::ReadUser, Scope::WriteLikes]),
    );
    let unsplash = Unsplash::new(flow.authorize_interactive().await?);

    let me = unsplash.users.private_profile().await?;
    println!("Authorized as: {} scopes: {}", me.username, unsplash.client().scopes());

    let liked = unsplash.photos.like(&photo_id).await?;
    println!(
        "Liked photo: {} liked_by_user: {}",
        liked.photo.id, liked.photo.liked_by_user
    );

    unsplash.photos.unlike(&photo_id).await?;
    println!("Removed like from photo: {}", photo_id);
    Ok(())
}
