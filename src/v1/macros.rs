/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

macro_rules! obj_from_segments {
    ( $c:expr, $segments:expr, $params:expr, $scope:expr ) => {{
        let req_url = $c.endpoint_segments($segments)?;
        $c.get(&req_url, $params, $scope).await
    }};
}

macro_rules! stream_pages_from_segments {
    ( $c:expr, $segments:expr, $params:expr, $rt:ty ) => {{
        let client = $c.clone();
        let segments: Vec<String> = $segments.iter().map(|s| s.to_string()).collect();
        let mut params: QueryParams = $params.cloned().unwrap_or_default();

        try_stream! {
            let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
            let req_url = client.endpoint_segments(&segments)?;

            // The API caps pages at PER_PAGE items
            let per_page = params
                .get("per_page")
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(PER_PAGE)
                .clamp(1, PER_PAGE);
            let mut page = params
                .get("page")
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(1)
                .max(1);
            params.insert("per_page".into(), per_page.to_string());

            loop {
                params.insert("page".into(), page.to_string());
                let items: Vec<$rt> = client.get(&req_url, Some(&params), None).await?;

                // A short or empty page is the last one
                let is_done = items.is_empty() || items.len() < per_page;
                for item in items {
                    yield item
                }

                if is_done {
                    break;
                }
                page += 1;
            }
        }
    }};
}

pub(crate) use {obj_from_segments, stream_pages_from_segments};
