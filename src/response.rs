use std::collections::HashMap;

use crate::content_encoding::ContentCoding;
use crate::status::StatusCode;

/// HTTP レスポンス
///
/// ハンドラーが組み立て、エンコーダーに 1 回だけ渡す。
/// Content-Length はエンコード時に最終的なボディから計算するので、
/// ハンドラーは設定しない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: StatusCode,
    /// ヘッダー (出力順は保証しない)
    headers: HashMap<String, String>,
    body: Vec<u8>,
    /// エンコード時に適用するコンテントコーディング
    encoding: Option<ContentCoding>,
}

impl Response {
    /// 新しいレスポンスを作成
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Vec::new(),
            encoding: None,
        }
    }

    /// ヘッダーを設定 (ビルダーパターン)
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.set_header(name, value);
        self
    }

    /// ボディを設定 (ビルダーパターン)
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// テキストボディを設定 (ビルダーパターン)
    ///
    /// 空でなければ `Content-Type: text/plain` を付ける。
    pub fn text(mut self, body: impl AsRef<[u8]>) -> Self {
        let body = body.as_ref();
        if !body.is_empty() {
            self.set_header("Content-Type", "text/plain");
        }
        self.body = body.to_vec();
        self
    }

    /// コンテントコーディングを指定 (ビルダーパターン)
    ///
    /// 実際の圧縮はエンコーダーが行う。
    pub fn content_encoding(mut self, coding: ContentCoding) -> Self {
        self.encoding = Some(coding);
        self
    }

    /// ヘッダーを設定 (同名のヘッダーは大文字小文字を区別せず置き換える)
    pub fn set_header(&mut self, name: &str, value: &str) {
        self.remove_header(name);
        self.headers.insert(name.to_string(), value.to_string());
    }

    /// ヘッダーを削除
    pub fn remove_header(&mut self, name: &str) -> Option<String> {
        let key = self
            .headers
            .keys()
            .find(|n| n.eq_ignore_ascii_case(name))
            .cloned()?;
        self.headers.remove(&key)
    }

    /// ヘッダーを取得 (大文字小文字を区別しない)
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    pub fn body_bytes(&self) -> &[u8] {
        &self.body
    }

    pub fn encoding(&self) -> Option<&ContentCoding> {
        self.encoding.as_ref()
    }

    pub(crate) fn into_parts(
        self,
    ) -> (
        StatusCode,
        HashMap<String, String>,
        Vec<u8>,
        Option<ContentCoding>,
    ) {
        (self.status, self.headers, self.body, self.encoding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_sets_content_type_only_when_non_empty() {
        let response = Response::new(StatusCode::Ok).text("hello");
        assert_eq!(response.get_header("content-type"), Some("text/plain"));
        assert_eq!(response.body_bytes(), b"hello");

        let response = Response::new(StatusCode::Ok).text("");
        assert!(response.headers().is_empty());
    }

    #[test]
    fn set_header_replaces_case_insensitively() {
        let response = Response::new(StatusCode::Ok)
            .header("content-type", "text/plain")
            .header("Content-Type", "application/octet-stream");
        assert_eq!(response.headers().len(), 1);
        assert_eq!(
            response.get_header("CONTENT-TYPE"),
            Some("application/octet-stream")
        );
    }

    #[test]
    fn encoding_marker() {
        let response = Response::new(StatusCode::Ok).content_encoding(ContentCoding::Gzip);
        assert_eq!(response.encoding(), Some(&ContentCoding::Gzip));
        // マーカーだけではヘッダーは付かない
        assert_eq!(response.get_header("Content-Encoding"), None);
    }
}
