//! ルーティング
//!
//! ルートテーブルは GET と POST それぞれの順序付きルールのリストで、
//! 上から評価して最初に一致したものを使う。
//! それ以外のメソッドや一致しないパスは Not Found になる。
//!
//! | メソッド | パス | ハンドラー |
//! |---|---|---|
//! | GET | `/` (完全一致) | root |
//! | GET | `/echo/` で始まる | echo |
//! | GET | `/user-agent` で始まる | user-agent |
//! | GET | `/files/` で始まる | ファイル読み取り |
//! | POST | `/files/` で始まる | ファイル書き込み |
//!
//! 前方一致は加工前のパス文字列に対して行う。
//! パーセントデコード、クエリ文字列の除去、末尾スラッシュの正規化はしない。

use std::future::Future;

use crate::config::Config;
use crate::error::Result;
use crate::handlers::{self, ECHO_PREFIX, FILES_PREFIX, USER_AGENT_PREFIX};
use crate::request::{Method, Request};
use crate::response::Response;
use crate::storage::{Directory, FileStore};

/// リクエストハンドラー
pub trait Handler: Send + Sync + 'static {
    /// リクエストを処理してレスポンスを返す
    fn handle(&self, request: Request) -> impl Future<Output = Result<Response>> + Send;
}

/// パスの一致条件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPattern {
    Exact(&'static str),
    Prefix(&'static str),
}

impl PathPattern {
    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathPattern::Exact(p) => path == *p,
            PathPattern::Prefix(p) => path.starts_with(p),
        }
    }
}

/// ルートの行き先
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Root,
    Echo,
    UserAgent,
    ReadFile,
    WriteFile,
    NotFound,
}

/// ルート
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub pattern: PathPattern,
    pub endpoint: Endpoint,
}

const GET_ROUTES: &[Route] = &[
    Route {
        pattern: PathPattern::Exact("/"),
        endpoint: Endpoint::Root,
    },
    Route {
        pattern: PathPattern::Prefix(ECHO_PREFIX),
        endpoint: Endpoint::Echo,
    },
    Route {
        pattern: PathPattern::Prefix(USER_AGENT_PREFIX),
        endpoint: Endpoint::UserAgent,
    },
    Route {
        pattern: PathPattern::Prefix(FILES_PREFIX),
        endpoint: Endpoint::ReadFile,
    },
];

const POST_ROUTES: &[Route] = &[Route {
    pattern: PathPattern::Prefix(FILES_PREFIX),
    endpoint: Endpoint::WriteFile,
}];

/// メソッドとパスから行き先を決める
pub fn resolve(method: &Method, path: &str) -> Endpoint {
    let routes = match method {
        Method::Get => GET_ROUTES,
        Method::Post => POST_ROUTES,
        Method::Other(_) => return Endpoint::NotFound,
    };
    routes
        .iter()
        .find(|route| route.pattern.matches(path))
        .map_or(Endpoint::NotFound, |route| route.endpoint)
}

/// ルーター
///
/// ファイルルートのストレージを保持する。構築後は読み取り専用。
#[derive(Debug, Clone)]
pub struct Router<S = Directory> {
    store: S,
}

impl Router<Directory> {
    /// 設定からルーターを作成
    pub fn new(config: &Config) -> Self {
        Self::with_store(Directory::new(config.directory.clone()))
    }
}

impl<S: FileStore> Router<S> {
    /// ストレージを指定してルーターを作成
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// リクエストを 1 つのハンドラーに振り分けてレスポンスを返す
    pub async fn route(&self, request: &Request) -> Result<Response> {
        let response = match resolve(request.method(), request.path()) {
            Endpoint::Root => handlers::root(request),
            Endpoint::Echo => handlers::echo(request),
            Endpoint::UserAgent => handlers::user_agent(request),
            Endpoint::ReadFile => handlers::read_file(request, &self.store).await?,
            Endpoint::WriteFile => handlers::write_file(request, &self.store).await?,
            Endpoint::NotFound => handlers::not_found(request),
        };
        Ok(response)
    }
}

impl<S: FileStore> Handler for Router<S> {
    async fn handle(&self, request: Request) -> Result<Response> {
        self.route(&request).await
    }
}
