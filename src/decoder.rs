//! HTTP/1.1 リクエストデコーダー
//!
//! [`WireReader`] からリクエストライン、ヘッダー、ボディを順に読み取り、
//! [`Request`] を組み立てる。
//!
//! - リクエストラインは空白で分割し、1 番目をメソッド、2 番目をパスとして扱う。
//!   HTTP バージョンは読み飛ばし、検証しない
//! - ヘッダー行はバイト列のまま最初の `:` で名前と値に分割し、両方の前後の空白を除去する。
//!   名前は小文字化する。`:` を含まない行と、名前が UTF-8 でない行は黙って読み飛ばす。
//!   値は UTF-8 でなくてもそのまま保持する
//! - UTF-8 を要求するのはリクエストラインだけ
//! - ヘッダーは `\r\n` だけの行で終わる。継続行 (obs-fold) は扱わない
//! - Content-Length がある場合のみ、そのバイト数だけボディを読む。
//!   Content-Length がなければボディは空で、読み取りも行わない
//!
//! デコード後のリーダーは次のリクエストの先頭を指している。
//!
//! ```rust
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! use mini_http11::{decode_request, Method, WireReader};
//!
//! let mut reader = WireReader::new(&b"POST /files/a HTTP/1.1\r\nContent-Length: 3\r\n\r\nxyz"[..]);
//! let request = decode_request(&mut reader).await.unwrap();
//! assert_eq!(request.method(), &Method::Post);
//! assert_eq!(request.body_bytes(), b"xyz");
//! # });
//! ```

use tokio::io::AsyncRead;

use crate::error::{Error, Result};
use crate::reader::WireReader;
use crate::request::{Method, Request};

/// リクエストを 1 件デコード
pub async fn decode_request<R: AsyncRead + Unpin>(reader: &mut WireReader<R>) -> Result<Request> {
    let request_line = into_text(reader.read_line().await?)?;
    let mut request = parse_request_line(&request_line)?;

    loop {
        let line = reader.read_line().await?;
        if line == b"\r\n" {
            break;
        }
        if let Some((name, value)) = split_header_line(&line) {
            request.insert_header(name, value);
        }
    }

    let content_length = match request.get_header_bytes("content-length") {
        Some(value) => parse_content_length(value)?,
        None => None,
    };
    if let Some(len) = content_length {
        let body = reader.read_exact(len).await?;
        request = request.body(body);
    }

    Ok(request)
}

/// リクエストラインをパース
///
/// 3 番目以降のトークン (HTTP バージョン) は無視する。
fn parse_request_line(line: &str) -> Result<Request> {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(method), Some(path)) => Ok(Request::new(Method::parse(method), path)),
        _ => Err(Error::MalformedRequestLine(line.trim_end().to_string())),
    }
}

/// ヘッダー行を最初の `:` で名前と値に分割
fn split_header_line(line: &[u8]) -> Option<(&str, &[u8])> {
    let colon = line.iter().position(|&b| b == b':')?;
    let name = std::str::from_utf8(&line[..colon]).ok()?;
    Some((name, &line[colon + 1..]))
}

/// Content-Length 値をパース
///
/// 空の値はヘッダーがないものとして扱う。
fn parse_content_length(input: &[u8]) -> Result<Option<usize>> {
    if input.is_empty() {
        return Ok(None);
    }
    let malformed = || Error::MalformedContentLength(String::from_utf8_lossy(input).into_owned());
    if !input.iter().all(u8::is_ascii_digit) {
        return Err(malformed());
    }
    std::str::from_utf8(input)
        .map_err(|_| malformed())?
        .parse::<usize>()
        .map(Some)
        .map_err(|_| malformed())
}

fn into_text(line: Vec<u8>) -> Result<String> {
    String::from_utf8(line).map_err(|_| Error::InvalidUtf8)
}
