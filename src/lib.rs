//! # mini_http11
//!
//! 生のバイトストリーム上で動く最小構成の HTTP/1.1 サーバー
//!
//! ## 構成
//!
//! 1 接続につき 1 回、次のパイプラインを実行して接続を閉じる。
//!
//! ```text
//! WireReader -> decode_request -> Router -> handlers -> encode_response -> 書き込み
//! ```
//!
//! - [`WireReader`]: ストリームをバッファリングし、行単位と固定長の読み取りを提供
//! - [`decode_request`]: リクエストライン、ヘッダー、Content-Length 分のボディを読む
//! - [`Router`]: メソッドとパスの前方一致でハンドラーを 1 つ選ぶ
//! - [`handlers`]: `/`, `/echo/`, `/user-agent`, `/files/` (GET / POST)
//! - [`encode_response`]: gzip 圧縮、Content-Length 計算、バイト列への変換
//!
//! ## 使い方
//!
//! ```rust
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! use mini_http11::{Config, Router, StatusCode, WireReader, decode_request, encode_response};
//!
//! let mut reader = WireReader::new(&b"GET /echo/hello HTTP/1.1\r\n\r\n"[..]);
//! let request = decode_request(&mut reader).await.unwrap();
//!
//! let router = Router::new(&Config::default());
//! let response = router.route(&request).await.unwrap();
//! assert_eq!(response.status(), StatusCode::Ok);
//!
//! let bytes = encode_response(response).unwrap();
//! assert!(bytes.starts_with(b"HTTP/1.1 200 OK\r\n"));
//! assert!(bytes.ends_with(b"\r\n\r\nhello"));
//! # });
//! ```

pub mod compression;
mod config;
pub mod content_encoding;
mod decoder;
mod encoder;
mod error;
pub mod handlers;
mod reader;
mod request;
mod response;
pub mod router;
mod server;
mod status;
pub mod storage;

pub use config::{Config, DEFAULT_PORT};
pub use decoder::decode_request;
pub use encoder::encode_response;
pub use error::{Error, Result};
pub use reader::{DEFAULT_READ_BUFFER_SIZE, WireReader};
pub use request::{Method, Request};
pub use response::Response;
pub use router::{Handler, Router};
pub use server::{Server, handle_connection};
pub use status::StatusCode;
pub use storage::{Directory, FileStore};
