/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

#[cfg(test)]
mod test {
    use crate::helpers;
    use reqwest::Method;
    use serde_json::json;
    use std::collections::HashMap;
    use unsplash::v1::{
        Client, QueryParams, Scope, UnsplashError, Unsplash, build_url,
    };
    use url::Url;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn build_url_without_params_is_unchanged() {
        let base = Url::parse("https://api.unsplash.com/photos/").unwrap();
        assert_eq!(build_url(&base, Some(&QueryParams::new())), base);
        assert_eq!(build_url(&base, None), base);
        assert_eq!(build_url(&base, None).as_str(), "https://api.unsplash.com/photos/");
    }

    #[test]
    fn build_url_is_order_independent() {
        let base = Url::parse("https://api.unsplash.com/photos/").unwrap();
        let mut first = QueryParams::new();
        first.insert("a".into(), "1".into());
        first.insert("b".into(), "2".into());
        let mut second = QueryParams::new();
        second.insert("b".into(), "2".into());
        second.insert("a".into(), "1".into());

        let first_url = build_url(&base, Some(&first));
        let second_url = build_url(&base, Some(&second));
        let first_pairs: HashMap<_, _> = first_url.query_pairs().into_owned().collect();
        let second_pairs: HashMap<_, _> = second_url.query_pairs().into_owned().collect();
        assert_eq!(first_pairs, second_pairs);
        assert_eq!(first_url, second_url);
    }

    #[test]
    fn build_url_query_reparses_to_same_params() {
        let base = Url::parse("https://api.unsplash.com/search/photos").unwrap();
        let input = params(&[
            ("query", "red & blue cars"),
            ("page", "2"),
            ("color", "black_and_white"),
            ("lang", "é"),
        ]);
        let url = build_url(&base, Some(&input));
        let reparsed: QueryParams = url.query_pairs().into_owned().collect();
        assert_eq!(reparsed, input);
    }

    #[tokio::test]
    async fn public_client_sends_client_id_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/photos/abc"))
            .and(header("Authorization", "Client-ID test-access-key"))
            .and(header("Accept-Version", "v1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(helpers::photo_json("abc")))
            .expect(1)
            .mount(&server)
            .await;

        let unsplash = Unsplash::new(helpers::public_client(&server));
        let photo = unsplash.photos.get("abc").await.unwrap();
        assert_eq!(photo.id, "abc");
        assert_eq!(photo.user.username, "jimmyexample");
        assert_eq!(photo.tags[0].title, "man");
    }

    #[tokio::test]
    async fn public_client_can_send_client_id_as_query_param() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/photos/abc"))
            .and(query_param("client_id", helpers::ACCESS_KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(helpers::photo_json("abc")))
            .expect(1)
            .mount(&server)
            .await;

        let config = helpers::mock_config(&server).with_auth_in_header(false);
        let client = Client::with_config(helpers::ACCESS_KEY, config);
        let unsplash = Unsplash::new(client);
        unsplash.photos.get("abc").await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].headers.get("Authorization").is_none());
    }

    #[tokio::test]
    async fn private_client_sends_bearer_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me"))
            .and(header("Authorization", "Bearer test-bearer-token"))
            .and(header("Accept-Version", "v1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(helpers::user_json("jimmyexample")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = helpers::private_client(&server, &[Scope::ReadUser]);
        let user = Unsplash::new(client).users.private_profile().await.unwrap();
        assert_eq!(user.username, "jimmyexample");
        assert_eq!(user.portfolio_url, None);
    }

    #[tokio::test]
    async fn scope_gated_dispatch_on_public_client_is_rejected() {
        let server = MockServer::start().await;
        let client = helpers::public_client(&server);
        let url = client.endpoint("photos/abc/like").unwrap();

        for (verb, scope) in [
            (Method::GET, Scope::ReadUser),
            (Method::POST, Scope::WriteLikes),
            (Method::PUT, Scope::WritePhotos),
            (Method::DELETE, Scope::WriteCollections),
        ] {
            let err = client
                .dispatch(verb, &url, None, None, Some(scope))
                .await
                .unwrap_err();
            assert!(matches!(err, UnsplashError::ClientNotPrivate));
        }
        assert_eq!(helpers::request_count(&server).await, 0);
    }

    #[tokio::test]
    async fn missing_scope_is_rejected_without_a_request() {
        let server = MockServer::start().await;
        let client = helpers::private_client(&server, &[Scope::ReadUser]);
        let unsplash = Unsplash::new(client);

        let err = unsplash.photos.like("abc").await.unwrap_err();
        match err {
            UnsplashError::RequiredScopeAbsent(scope) => assert_eq!(scope, "write_likes"),
            other => panic!("unexpected error: {other:?}"),
        }

        let err = unsplash.collections.delete("12").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "required scope `write_collections` not in client auth scopes"
        );

        let data = HashMap::from([("bio".to_string(), "new".to_string())]);
        let err = unsplash.users.update_profile(&data).await.unwrap_err();
        assert!(matches!(err, UnsplashError::RequiredScopeAbsent(s) if s == "write_user"));

        assert_eq!(helpers::request_count(&server).await, 0);
    }

    #[tokio::test]
    async fn ids_stay_within_their_path_segment() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = helpers::private_client(&server, &[Scope::WriteCollections]);
        let unsplash = Unsplash::new(client);
        unsplash
            .collections
            .delete("../photos/xyz/like")
            .await
            .unwrap();
        unsplash.collections.delete("12?x=1#frag").await.unwrap();

        let requests = server.received_requests().await.unwrap();
        let paths: Vec<_> = requests.iter().map(|r| r.url.path().to_string()).collect();
        assert_eq!(
            paths,
            [
                "/collections/..%2Fphotos%2Fxyz%2Flike",
                "/collections/12%3Fx=1%23frag"
            ]
        );
        assert!(requests.iter().all(|r| r.url.query().is_none()));
    }

    #[tokio::test]
    async fn dot_segments_are_rejected_without_a_request() {
        let server = MockServer::start().await;
        let client =
            helpers::private_client(&server, &[Scope::WriteCollections, Scope::WriteLikes]);
        let unsplash = Unsplash::new(client);

        for id in ["..", ".", ""] {
            let err = unsplash.collections.delete(id).await.unwrap_err();
            assert!(matches!(err, UnsplashError::InvalidPathSegment(s) if s == id));
        }
        let err = unsplash.photos.like("..").await.unwrap_err();
        assert!(matches!(err, UnsplashError::InvalidPathSegment(_)));

        assert_eq!(helpers::request_count(&server).await, 0);
    }

    #[tokio::test]
    async fn success_codes_depend_on_verb() {
        let server = MockServer::start().await;
        for code in [200u16, 201, 204] {
            Mock::given(path(format!("/status/{}", code)))
                .respond_with(ResponseTemplate::new(code))
                .mount(&server)
                .await;
        }

        let client = helpers::public_client(&server);
        let cases = [
            (Method::GET, 200, true),
            (Method::GET, 201, false),
            (Method::GET, 204, false),
            (Method::POST, 200, true),
            (Method::POST, 201, true),
            (Method::POST, 204, false),
            (Method::PUT, 200, true),
            (Method::PUT, 201, true),
            (Method::PUT, 204, false),
            (Method::DELETE, 200, true),
            (Method::DELETE, 201, false),
            (Method::DELETE, 204, true),
        ];
        for (verb, code, accepted) in cases {
            let url = client.endpoint_segments(&["status", &code.to_string()]).unwrap();
            let result = client.dispatch(verb.clone(), &url, None, None, None).await;
            match result {
                Ok(_) => assert!(accepted, "{} {} should be rejected", verb, code),
                Err(UnsplashError::StatusCode { status, .. }) => {
                    assert!(!accepted, "{} {} should be accepted", verb, code);
                    assert_eq!(status, code);
                }
                Err(other) => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn get_only_accepts_ok() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stats/total"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"photos": 1})))
            .mount(&server)
            .await;

        let unsplash = Unsplash::new(helpers::public_client(&server));
        let err = unsplash.stats.total().await.unwrap_err();
        assert!(matches!(err, UnsplashError::StatusCode { status: 201, .. }));
    }

    #[tokio::test]
    async fn status_error_carries_reasons() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/photos/missing"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"errors": ["Couldn't find Photo"]})),
            )
            .mount(&server)
            .await;

        let unsplash = Unsplash::new(helpers::public_client(&server));
        match unsplash.photos.get("missing").await.unwrap_err() {
            UnsplashError::StatusCode { status, reasons } => {
                assert_eq!(status, 404);
                assert_eq!(reasons, vec!["Couldn't find Photo".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn unparseable_error_body_yields_no_reasons() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stats/month"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let unsplash = Unsplash::new(helpers::public_client(&server));
        match unsplash.stats.month().await.unwrap_err() {
            UnsplashError::StatusCode { status, reasons } => {
                assert_eq!(status, 500);
                assert!(reasons.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn undecodable_success_body_is_a_deserialization_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stats/month"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let unsplash = Unsplash::new(helpers::public_client(&server));
        let err = unsplash.stats.month().await.unwrap_err();
        assert!(matches!(err, UnsplashError::Deserialization(_)));
    }

    #[tokio::test]
    async fn dispatch_returns_raw_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stats/total"))
            .and(query_param("extra", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"photos\":5}"))
            .mount(&server)
            .await;

        let client = helpers::public_client(&server);
        let url = client.endpoint("/stats/total").unwrap();
        let body = client
            .dispatch(Method::GET, &url, Some(&params(&[("extra", "1")])), None, None)
            .await
            .unwrap();
        assert_eq!(&body[..], b"{\"photos\":5}");
    }

    #[tokio::test]
    async fn transport_errors_pass_through() {
        // Nothing listens on the discard port
        let config = unsplash::v1::Config::default()
            .with_api_origin("http://127.0.0.1:9")
            .unwrap();
        let unsplash = Unsplash::new(Client::with_config(helpers::ACCESS_KEY, config));
        let err = unsplash.stats.total().await.unwrap_err();
        assert!(matches!(err, UnsplashError::Request(_)));
    }
}
