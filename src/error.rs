use std::fmt;

use crate::compression::CompressionError;

/// 接続処理エラー
///
/// パース時のエラー (`TruncatedStream` / `MalformedRequestLine` /
/// `MalformedContentLength` / `InvalidUtf8`) とハンドラー実行時のエラー
/// (`Io` / `Compression`) をまとめて扱う。
/// いずれも接続を閉じる原因になり、レスポンスには変換されない。
#[derive(Debug)]
pub enum Error {
    /// 行終端または指定バイト数に達する前にストリームが終了した
    TruncatedStream,
    /// リクエストラインのトークンが 2 個未満
    MalformedRequestLine(String),
    /// Content-Length が非負整数ではない
    MalformedContentLength(String),
    /// リクエストラインが UTF-8 ではない
    InvalidUtf8,
    /// I/O エラー (ソケット / ファイル)
    Io(std::io::Error),
    /// 圧縮エラー
    Compression(CompressionError),
}

impl Error {
    /// パース時のエラーかどうか
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::TruncatedStream
                | Error::MalformedRequestLine(_)
                | Error::MalformedContentLength(_)
                | Error::InvalidUtf8
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TruncatedStream => write!(f, "truncated stream"),
            Error::MalformedRequestLine(line) => {
                write!(f, "malformed request line: {:?}", line)
            }
            Error::MalformedContentLength(value) => {
                write!(f, "malformed Content-Length: {:?}", value)
            }
            Error::InvalidUtf8 => write!(f, "invalid UTF-8 in request line"),
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Compression(e) => write!(f, "compression error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Compression(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<CompressionError> for Error {
    fn from(e: CompressionError) -> Self {
        Error::Compression(e)
    }
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_are_classified() {
        assert!(Error::TruncatedStream.is_parse_error());
        assert!(Error::MalformedRequestLine("GET".to_string()).is_parse_error());
        assert!(Error::MalformedContentLength("abc".to_string()).is_parse_error());
        assert!(Error::InvalidUtf8.is_parse_error());

        let io = Error::from(std::io::Error::other("disk"));
        assert!(!io.is_parse_error());
        assert!(!Error::from(CompressionError::Internal("x".to_string())).is_parse_error());
    }

    #[test]
    fn display() {
        assert_eq!(Error::TruncatedStream.to_string(), "truncated stream");
        assert_eq!(
            Error::MalformedContentLength("abc".to_string()).to_string(),
            "malformed Content-Length: \"abc\""
        );
    }
}
