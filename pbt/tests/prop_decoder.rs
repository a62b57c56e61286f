//! リクエストデコーダーのプロパティテスト (decoder.rs)

use std::collections::HashMap;

use mini_http11::{Error, Method, WireReader, decode_request};
use pbt::{block_on, body, header_name, header_value, path, recase};
use proptest::prelude::*;

fn method() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("GET".to_string()),
        Just("POST".to_string()),
        Just("PUT".to_string()),
        Just("DELETE".to_string()),
    ]
}

fn headers() -> impl Strategy<Value = Vec<(String, String)>> {
    proptest::collection::vec((header_name(), header_value()), 0..10).prop_map(|headers| {
        headers
            .into_iter()
            .filter(|(n, _)| !n.eq_ignore_ascii_case("content-length"))
            .collect()
    })
}

fn encode(method: &str, path: &str, headers: &[(String, String)], body: &[u8]) -> Vec<u8> {
    let mut buf = format!("{} {} HTTP/1.1\r\n", method, path).into_bytes();
    for (name, value) in headers {
        buf.extend_from_slice(format!("{}: {}\r\n", name, value).as_bytes());
    }
    if !body.is_empty() {
        buf.extend_from_slice(format!("Content-Length: {}\r\n", body.len()).as_bytes());
    }
    buf.extend_from_slice(b"\r\n");
    buf.extend_from_slice(body);
    buf
}

proptest! {
    /// デコードはリクエストライン + ヘッダー + 宣言されたボディだけを消費する
    #[test]
    fn prop_decode_consumes_exactly_one_request(
        method in method(),
        path in path(),
        hdrs in headers(),
        body_data in body(),
        trailing in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let mut input = encode(&method, &path, &hdrs, &body_data);
        input.extend_from_slice(&trailing);

        let (request, rest) = block_on(async {
            let mut reader = WireReader::new(input.as_slice());
            let request = decode_request(&mut reader).await.unwrap();
            (request, reader.buffer().to_vec())
        });

        prop_assert_eq!(request.method(), &Method::parse(&method));
        prop_assert_eq!(request.path(), path.as_str());
        prop_assert_eq!(request.body_bytes(), body_data.as_slice());
        prop_assert_eq!(rest, trailing);

        // 同名ヘッダーは後勝ち
        let mut expected: HashMap<String, Vec<u8>> = HashMap::new();
        for (name, value) in &hdrs {
            expected.insert(name.to_ascii_lowercase(), value.clone().into_bytes());
        }
        if !body_data.is_empty() {
            expected.insert("content-length".to_string(), body_data.len().to_string().into_bytes());
        }
        prop_assert_eq!(request.headers(), &expected);
    }

    /// ヘッダー名の大文字小文字は結果に影響しない
    #[test]
    fn prop_header_name_case_insensitive(
        name in header_name(),
        value in header_value(),
        mask in proptest::collection::vec(any::<bool>(), 1..8),
    ) {
        prop_assume!(!name.eq_ignore_ascii_case("content-length"));
        let recased = recase(&name, &mask);
        let input = format!("GET / HTTP/1.1\r\n{}: {}\r\n\r\n", recased, value);

        let request = block_on(async {
            let mut reader = WireReader::new(input.as_bytes());
            decode_request(&mut reader).await.unwrap()
        });

        prop_assert_eq!(request.get_header(&name), Some(value.as_str()));
        prop_assert_eq!(request.get_header(&name.to_ascii_uppercase()), Some(value.as_str()));
    }

    /// ヘッダー値のバイト列は UTF-8 でなくてもデコードを失敗させない
    #[test]
    fn prop_header_value_bytes_preserved(
        value in proptest::collection::vec(
            any::<u8>().prop_filter("no whitespace", |b| !b.is_ascii_whitespace()),
            1..32,
        ),
    ) {
        let mut input = b"GET /user-agent HTTP/1.1\r\nUser-Agent: ".to_vec();
        input.extend_from_slice(&value);
        input.extend_from_slice(b"\r\n\r\n");

        let request = block_on(async {
            let mut reader = WireReader::new(input.as_slice());
            decode_request(&mut reader).await.unwrap()
        });
        prop_assert_eq!(request.user_agent(), Some(value.as_slice()));
    }

    /// 数字以外を含む Content-Length は拒否する
    #[test]
    fn prop_non_numeric_content_length_rejected(value in "[0-9]{0,3}[a-zA-Z.+-][0-9a-zA-Z]{0,3}") {
        let input = format!("POST /files/a HTTP/1.1\r\nContent-Length: {}\r\n\r\n", value);
        let result = block_on(async {
            let mut reader = WireReader::new(input.as_bytes());
            decode_request(&mut reader).await
        });
        prop_assert!(matches!(result, Err(Error::MalformedContentLength(_))));
    }

    /// トークンが 1 個以下のリクエストラインは拒否する
    #[test]
    fn prop_single_token_request_line_rejected(token in "[A-Z]{0,8}") {
        let input = format!("{}\r\nHost: a\r\n\r\n", token);
        let result = block_on(async {
            let mut reader = WireReader::new(input.as_bytes());
            decode_request(&mut reader).await
        });
        prop_assert!(matches!(result, Err(Error::MalformedRequestLine(_))));
    }

    /// どこで切れても TruncatedStream になり、パニックしない
    #[test]
    fn prop_truncated_input(
        hdrs in headers(),
        body_data in proptest::collection::vec(any::<u8>(), 1..128),
        cut in any::<prop::sample::Index>(),
    ) {
        let input = encode("POST", "/files/x", &hdrs, &body_data);
        let cut = cut.index(input.len());
        let result = block_on(async {
            let mut reader = WireReader::new(&input[..cut]);
            decode_request(&mut reader).await
        });
        prop_assert!(matches!(result, Err(Error::TruncatedStream)));
    }
}
