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
use futures::{StreamExt, pin_mut};
use unsplash::v1::{Client, OrderBy, Orientation, QueryParams, ResizeOptions, Unsplash};

// Prints a handful of random landscape photos with thumbnail sized urls
async fn show_random_photos(unsplash: &Unsplash) -> Result<()> {
    let params = QueryParams::from([
        ("count".to_string(), "3".to_string()),
        ("orientation".to_string(), Orientation::Landscape.to_string()),
    ]);
    let photos = unsplash.photos.random(Some(&params)).await?.into_vec();

    for photo in photos {
        let resized = photo.resize_url(&ResizeOptions::new(400, 300))?;
        println!(
            "Random photo: {} by {} resized: {}",
            photo.id, photo.user.username, resized
        );
    }
    Ok(())
}

// Walks the latest photos until `limit` have been seen
async fn show_latest_photos(unsplash: &Unsplash, limit: usize) -> Result<()> {
    let params = QueryParams::from([("order_by".to_string(), OrderBy::Latest.to_string())]);
    let photos = unsplash.photos.stream(Some(&params));

    pin_mut!(photos);
    let mut seen = 0;
    while let Some(photo) = photos.next().await {
        let photo = photo?;
        println!("Latest photo: {} likes: {}", photo.id, photo.likes);
        seen += 1;
        if seen >= limit {
            break;
        }
    }
    Ok(())
}

// main
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    // The access key is the only thing needed for public requests.
    let access_key = std::env::var("UNSPLASH_ACCESS_KEY")?;
    let unsplash = Unsplash::new(Client::new(&access_key));

    show_random_photos(&unsplash).await?;
    show_latest_photos(&unsplash, 45).await?;

    let totals = unsplash.stats.total().await?;
    println!("Unsplash hosts {} photos", totals.photos);
    Ok(())
}
