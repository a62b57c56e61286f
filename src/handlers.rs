//! ルートごとのハンドラー
//!
//! ファイル以外のハンドラーは副作用を持たない。
//! ファイル系ハンドラーの I/O エラーは `Err` で返し、レスポンスにはしない。

use crate::content_encoding::AcceptEncoding;
use crate::error::Result;
use crate::request::Request;
use crate::response::Response;
use crate::status::StatusCode;
use crate::storage::FileStore;

pub const ECHO_PREFIX: &str = "/echo/";
pub const USER_AGENT_PREFIX: &str = "/user-agent";
pub const FILES_PREFIX: &str = "/files/";

/// `GET /`
pub fn root(_request: &Request) -> Response {
    Response::new(StatusCode::Ok)
}

/// `GET /echo/{value}`
///
/// Accept-Encoding で gzip を受け入れる場合は圧縮を指定する。
pub fn echo(request: &Request) -> Response {
    let value = request.path_remainder(ECHO_PREFIX).unwrap_or("");
    let response = Response::new(StatusCode::Ok).text(value);

    let coding = request
        .accept_encoding()
        .and_then(|v| AcceptEncoding::parse(v).negotiate());
    match coding {
        Some(coding) => response.content_encoding(coding),
        None => response,
    }
}

/// `GET /user-agent`
pub fn user_agent(request: &Request) -> Response {
    Response::new(StatusCode::Ok).text(request.user_agent().unwrap_or_default())
}

/// `GET /files/{name}`
pub async fn read_file<S: FileStore>(request: &Request, store: &S) -> Result<Response> {
    let name = request.path_remainder(FILES_PREFIX).unwrap_or("");
    match store.read(name).await? {
        Some(content) => Ok(Response::new(StatusCode::Ok)
            .header("Content-Type", "application/octet-stream")
            .body(content)),
        None => Ok(not_found(request)),
    }
}

/// `POST /files/{name}`
pub async fn write_file<S: FileStore>(request: &Request, store: &S) -> Result<Response> {
    let name = request.path_remainder(FILES_PREFIX).unwrap_or("");
    store.write(name, request.body_bytes()).await?;
    Ok(Response::new(StatusCode::Created))
}

/// 該当するルートがない場合
pub fn not_found(_request: &Request) -> Response {
    Response::new(StatusCode::NotFound)
}
