/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::UnsplashError;
use crate::v1::macros::obj_from_segments;
use crate::v1::Client;
use serde::{Deserialize, Serialize};

/// Total plus historical breakdown of a single statistic
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Stats {
    pub total: u64,
    pub historical: Historical,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Historical {
    pub change: i64,
    pub resolution: String,
    pub quantity: u64,
    pub values: Vec<HistoricalValue>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct HistoricalValue {
    pub date: String,
    pub value: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PhotoStats {
    pub id: String,
    pub downloads: Stats,
    pub views: Stats,
    pub likes: Stats,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct UserStats {
    pub username: String,
    pub downloads: Stats,
    pub views: Stats,
}

/// Counts for all of Unsplash
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct StatsTotal {
    pub photos: u64,
    pub downloads: u64,
    pub views: u64,
    pub likes: u64,
    pub photographers: u64,
    pub pixels: u64,
    pub downloads_per_second: u64,
    pub views_per_second: u64,
    pub developers: u64,
    pub applications: u64,
    pub requests: u64,
}

/// Overall Unsplash stats for the past 30 days
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct StatsMonth {
    pub downloads: u64,
    pub views: u64,
    pub likes: u64,
    pub new_photos: u64,
    pub new_photographers: u64,
    pub new_pixels: u64,
    pub new_developers: u64,
    pub new_applications: u64,
    pub new_requests: u64,
}

#[derive(Debug, Clone)]
pub struct StatsService {
    client: Client,
}

impl StatsService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn total(&self) -> Result<StatsTotal, UnsplashError> {
        obj_from_segments!(self.client, &["stats", "total"], None, None)
    }

    pub async fn month(&self) -> Result<StatsMonth, UnsplashError> {
        obj_from_segments!(self.client, &["stats", "month"], None, None)
    }
}
