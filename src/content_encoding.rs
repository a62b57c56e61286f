//! Accept-Encoding によるコンテントコーディングの選択
//!
//! ## 概要
//!
//! リクエストの Accept-Encoding を左から順に見て、
//! サーバーが対応する最初のコーディングを選ぶ。
//!
//! - カンマ区切りのトークンリストとして扱い、各トークンの前後の空白は除去する
//! - `;` 以降のパラメーターは無視する。ただし `q=0` はそのトークンの拒否として扱う
//! - トークンの比較は ASCII の大文字小文字を区別しない
//! - 不正なトークンはエラーにせず読み飛ばす
//!
//! ## 使い方
//!
//! ```rust
//! use mini_http11::content_encoding::{AcceptEncoding, ContentCoding};
//!
//! let accept = AcceptEncoding::parse("br, gzip;q=0.8");
//! assert_eq!(accept.negotiate(), Some(ContentCoding::Gzip));
//!
//! let accept = AcceptEncoding::parse("gzip;q=0, br");
//! assert_eq!(accept.negotiate(), None);
//! ```

use core::fmt;

/// コンテントコーディング (Content Coding)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentCoding {
    Gzip,
    Identity,
    Other(String),
}

impl ContentCoding {
    /// 正規化したトークン値
    pub fn as_str(&self) -> &str {
        match self {
            ContentCoding::Gzip => "gzip",
            ContentCoding::Identity => "identity",
            ContentCoding::Other(value) => value.as_str(),
        }
    }

    /// レスポンスの圧縮に使えるかどうか
    ///
    /// identity は変換なしなので対象外。
    pub fn is_supported(&self) -> bool {
        match self {
            ContentCoding::Gzip => cfg!(feature = "gzip"),
            _ => false,
        }
    }
}

impl fmt::Display for ContentCoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accept-Encoding ヘッダー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptEncoding {
    /// 受け入れ可能なコーディング (記述順、q=0 は除外済み)
    codings: Vec<ContentCoding>,
}

impl AcceptEncoding {
    /// Accept-Encoding ヘッダーをパース
    ///
    /// 寛容なパースで、失敗はしない。
    pub fn parse(input: &str) -> Self {
        let mut codings = Vec::new();
        for part in input.split(',') {
            let mut params = part.split(';');
            let token = params.next().unwrap_or("").trim();
            if !is_valid_token(token) {
                continue;
            }
            if params.any(is_zero_qvalue) {
                continue;
            }
            codings.push(parse_coding(token));
        }
        Self { codings }
    }

    /// 受け入れ可能なコーディング一覧
    pub fn codings(&self) -> &[ContentCoding] {
        &self.codings
    }

    /// 指定したコーディングを受け入れるかどうか
    pub fn accepts(&self, coding: &ContentCoding) -> bool {
        self.codings.contains(coding)
    }

    /// サーバーが対応する最初のコーディングを選ぶ
    pub fn negotiate(&self) -> Option<ContentCoding> {
        self.codings.iter().find(|c| c.is_supported()).cloned()
    }
}

fn is_zero_qvalue(param: &str) -> bool {
    let Some((name, value)) = param.split_once('=') else {
        return false;
    };
    if !name.trim().eq_ignore_ascii_case("q") {
        return false;
    }
    // "0" / "0." / "0.000" のみ
    let value = value.trim();
    match value.split_once('.') {
        Some((int, frac)) => int == "0" && frac.len() <= 3 && frac.bytes().all(|b| b == b'0'),
        None => value == "0",
    }
}

fn parse_coding(token: &str) -> ContentCoding {
    let normalized = token.to_ascii_lowercase();
    match normalized.as_str() {
        "gzip" => ContentCoding::Gzip,
        "identity" => ContentCoding::Identity,
        _ => ContentCoding::Other(normalized),
    }
}

fn is_valid_token(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(is_token_char)
}

fn is_token_char(b: u8) -> bool {
    matches!(
        b,
        b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.' |
        b'0'..=b'9' | b'A'..=b'Z' | b'^' | b'_' | b'`' | b'a'..=b'z' | b'|' | b'~'
    )
}
