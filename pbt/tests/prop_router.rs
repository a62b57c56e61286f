//! ルーティングのプロパティテスト (router.rs, handlers.rs)

use mini_http11::router::{Endpoint, resolve};
use mini_http11::{Config, Method, Request, Router, StatusCode};
use pbt::{block_on, echo_value, path};
use proptest::prelude::*;

fn unrouted_method() -> impl Strategy<Value = Method> {
    prop_oneof![
        Just(Method::Other("PUT".to_string())),
        Just(Method::Other("DELETE".to_string())),
        Just(Method::Other("HEAD".to_string())),
        Just(Method::Other("get".to_string())),
        "[A-Z]{1,10}"
            .prop_filter("routed", |m| m != "GET" && m != "POST")
            .prop_map(Method::Other),
    ]
}

proptest! {
    /// echo のボディは `/echo/` 以降のパス文字列そのもの
    #[test]
    fn prop_echo_body_is_remainder(value in echo_value()) {
        let router = Router::new(&Config::default());
        let request = Request::new(Method::Get, &format!("/echo/{}", value));
        let response = block_on(router.route(&request)).unwrap();

        prop_assert_eq!(response.status(), StatusCode::Ok);
        prop_assert_eq!(response.body_bytes(), value.as_bytes());
    }

    /// GET / POST 以外は常に Not Found
    #[test]
    fn prop_other_methods_not_found(method in unrouted_method(), path in path()) {
        prop_assert_eq!(resolve(&method, &path), Endpoint::NotFound);

        let router = Router::new(&Config::default());
        let response = block_on(router.route(&Request::new(method, &path))).unwrap();
        prop_assert_eq!(response.status(), StatusCode::NotFound);
        prop_assert!(response.body_bytes().is_empty());
    }

    /// POST は `/files/` 以外 Not Found
    #[test]
    fn prop_post_outside_files_not_found(path in path()) {
        prop_assume!(!path.starts_with("/files/"));
        prop_assert_eq!(resolve(&Method::Post, &path), Endpoint::NotFound);
    }

    /// GET の振り分けは前方一致の順序どおり
    #[test]
    fn prop_get_dispatch_order(path in path()) {
        let expected = if path == "/" {
            Endpoint::Root
        } else if path.starts_with("/echo/") {
            Endpoint::Echo
        } else if path.starts_with("/user-agent") {
            Endpoint::UserAgent
        } else if path.starts_with("/files/") {
            Endpoint::ReadFile
        } else {
            Endpoint::NotFound
        };
        prop_assert_eq!(resolve(&Method::Get, &path), expected);
    }
}
