//! HTTP/1.1 レスポンスエンコーダー
//!
//! 処理順は固定:
//!
//! 1. コンテントコーディングが指定されていればボディを圧縮し、Content-Encoding を付ける
//! 2. 最終的なボディ長から Content-Length を設定する。
//!    ボディが空なら Content-Length と Content-Type は出力しない
//! 3. ステータスライン、ヘッダー、空行、ボディの順に書き出す
//!
//! ヘッダーの出力順は保証しない。

use crate::compression::compress_body;
use crate::content_encoding::ContentCoding;
use crate::error::Result;
use crate::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

/// レスポンスをエンコード
pub fn encode_response(response: Response) -> Result<Vec<u8>> {
    let (status, mut headers, mut body, encoding) = response.into_parts();

    let mut set_header = |name: &str, value: Option<String>| {
        headers.retain(|n, _| !n.eq_ignore_ascii_case(name));
        if let Some(value) = value {
            headers.insert(name.to_string(), value);
        }
    };

    if let Some(coding) = encoding.filter(|c| *c != ContentCoding::Identity) {
        body = compress_body(&body, &coding)?;
        set_header("Content-Encoding", Some(coding.as_str().to_string()));
    }

    if body.is_empty() {
        set_header("Content-Length", None);
        set_header("Content-Type", None);
    } else {
        set_header("Content-Length", Some(body.len().to_string()));
    }

    let mut buf = Vec::with_capacity(64 + body.len());

    // Status line: VERSION SP STATUS-CODE SP REASON-PHRASE CRLF
    buf.extend_from_slice(HTTP_VERSION.as_bytes());
    buf.push(b' ');
    buf.extend_from_slice(status.code().to_string().as_bytes());
    buf.push(b' ');
    buf.extend_from_slice(status.reason_phrase().as_bytes());
    buf.extend_from_slice(b"\r\n");

    // Headers
    for (name, value) in &headers {
        buf.extend_from_slice(name.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(value.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    // End of headers
    buf.extend_from_slice(b"\r\n");

    // Body
    buf.extend_from_slice(&body);

    Ok(buf)
}

impl Response {
    /// レスポンスをバイト列にエンコード
    pub fn encode(self) -> Result<Vec<u8>> {
        encode_response(self)
    }
}
