/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Every image url returned by the API is dynamic (served through imgix), so resized, cropped
//! or re-encoded variants can be produced client side by adjusting the query parameters.

use crate::v1::api::{QueryParams, build_url};
use crate::v1::errors::UnsplashError;
use crate::v1::Photo;
use url::Url;

/// Parameters applied to a photo's raw url.
///
/// See the [imgix rendering docs](https://docs.imgix.com/apis/rendering) for accepted values.
#[derive(Debug, Clone, Default)]
pub struct ResizeOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub crop: Option<String>,
    pub format: Option<String>,
    pub auto: Option<String>,
    pub quality: Option<u8>,
    pub fit: Option<String>,
    // 1 through 5
    pub dpr: Option<u8>,
}

impl ResizeOptions {
    /// Custom dimensions with automatic format selection
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            auto: Some("format".into()),
            ..Default::default()
        }
    }

    fn params(&self) -> QueryParams {
        let options = [
            ("w", self.width.map(|v| v.to_string())),
            ("h", self.height.map(|v| v.to_string())),
            ("crop", self.crop.clone()),
            ("fm", self.format.clone()),
            ("auto", self.auto.clone()),
            ("q", self.quality.map(|v| v.to_string())),
            ("fit", self.fit.clone()),
            ("dpr", self.dpr.map(|v| v.to_string())),
        ];
        options
            .into_iter()
            .filter_map(|(k, v)| v.filter(|v| !v.is_empty()).map(|v| (k.to_string(), v)))
            .collect()
    }
}

impl Photo {
    /// Returns the raw image url with the resize options applied.
    ///
    /// An option replaces any parameter of the same name already on the raw url.
    pub fn resize_url(&self, options: &ResizeOptions) -> Result<Url, UnsplashError> {
        let mut url = Url::parse(&self.urls.raw)?;
        let params = options.params();
        if params.is_empty() {
            return Ok(url);
        }

        let kept: Vec<(String, String)> = url
            .query_pairs()
            .into_owned()
            .filter(|(k, _)| !params.contains_key(k))
            .collect();
        url.set_query(None);
        if !kept.is_empty() {
            url.query_pairs_mut().extend_pairs(kept);
        }
        Ok(build_url(&url, Some(&params)))
    }
}
