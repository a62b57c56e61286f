use std::collections::HashMap;
use std::fmt;

/// HTTP メソッド
///
/// ルーティング対象は GET と POST のみ。それ以外は文字列のまま保持する。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Other(String),
}

impl Method {
    /// リクエストラインのトークンから作成 (大文字小文字を区別する)
    pub fn parse(token: &str) -> Self {
        match token {
            "GET" => Method::Get,
            "POST" => Method::Post,
            other => Method::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Other(token) => token.as_str(),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP リクエスト
///
/// 1 接続につき 1 回デコードされ、その接続の処理が終わるまで変更されない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: Method,
    path: String,
    /// 小文字化したヘッダー名 -> 前後の空白を除いた値 (バイト列のまま)
    ///
    /// 値には obs-text (0x80-0xFF) が含まれうるので UTF-8 を前提にしない。
    headers: HashMap<String, Vec<u8>>,
    body: Vec<u8>,
}

impl Request {
    /// 新しいリクエストを作成
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// ヘッダーを追加 (ビルダーパターン)
    ///
    /// 名前は小文字化し、同名のヘッダーは後勝ちで上書きする。
    pub fn header(mut self, name: &str, value: impl AsRef<[u8]>) -> Self {
        self.insert_header(name, value.as_ref());
        self
    }

    /// ボディを設定 (ビルダーパターン)
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    pub(crate) fn insert_header(&mut self, name: &str, value: &[u8]) {
        self.headers
            .insert(name.trim().to_ascii_lowercase(), value.trim_ascii().to_vec());
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// リクエストターゲット (加工なし)
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &HashMap<String, Vec<u8>> {
        &self.headers
    }

    pub fn body_bytes(&self) -> &[u8] {
        &self.body
    }

    /// ヘッダーの値をバイト列で取得 (大文字小文字を区別しない)
    pub fn get_header_bytes(&self, name: &str) -> Option<&[u8]> {
        if name.bytes().any(|b| b.is_ascii_uppercase()) {
            self.headers
                .get(&name.to_ascii_lowercase())
                .map(Vec::as_slice)
        } else {
            self.headers.get(name).map(Vec::as_slice)
        }
    }

    /// ヘッダーを文字列で取得 (大文字小文字を区別しない)
    ///
    /// 値が UTF-8 でない場合は None。
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.get_header_bytes(name)
            .and_then(|value| std::str::from_utf8(value).ok())
    }

    /// User-Agent ヘッダーの値を取得 (受信したバイト列のまま)
    pub fn user_agent(&self) -> Option<&[u8]> {
        self.get_header_bytes("user-agent")
    }

    /// Accept-Encoding ヘッダーの値を取得
    pub fn accept_encoding(&self) -> Option<&str> {
        self.get_header("accept-encoding")
    }

    /// パスが `prefix` で始まる場合、その残りを返す
    pub fn path_remainder(&self, prefix: &str) -> Option<&str> {
        self.path.strip_prefix(prefix)
    }
}
