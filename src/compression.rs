//! ボディ圧縮
//!
//! RFC 9110 Section 8.4 (Content-Encoding) のうち、このサーバーが扱うのは gzip のみ。
//! gzip は `gzip` feature (デフォルト有効) で `flate2` を使って実装する。

use core::fmt;

use crate::content_encoding::ContentCoding;

/// 圧縮エラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompressionError {
    /// 対応していないコーディング
    Unsupported(String),
    /// 内部エラー
    Internal(String),
}

impl fmt::Display for CompressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompressionError::Unsupported(coding) => {
                write!(f, "unsupported content coding: {}", coding)
            }
            CompressionError::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl std::error::Error for CompressionError {}

/// ボディを一括圧縮
///
/// `identity` は入力をそのまま返す。
pub fn compress_body(data: &[u8], coding: &ContentCoding) -> Result<Vec<u8>, CompressionError> {
    match coding {
        ContentCoding::Identity => Ok(data.to_vec()),
        #[cfg(feature = "gzip")]
        ContentCoding::Gzip => gzip(data),
        other => Err(CompressionError::Unsupported(other.as_str().to_string())),
    }
}

#[cfg(feature = "gzip")]
fn gzip(data: &[u8]) -> Result<Vec<u8>, CompressionError> {
    use std::io::Write;

    let mut encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
    encoder
        .write_all(data)
        .map_err(|e| CompressionError::Internal(e.to_string()))?;
    encoder
        .finish()
        .map_err(|e| CompressionError::Internal(e.to_string()))
}
