//! ワイヤーリーダー
//!
//! バイトストリームをバッファリングし、行単位と固定長の読み取りを提供する。
//! バッファは接続ごとに独立しており、接続間で共有しない。

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, BufReader};

use crate::error::{Error, Result};

/// デフォルトの読み取りバッファサイズ
pub const DEFAULT_READ_BUFFER_SIZE: usize = 8192;

/// ワイヤーリーダー
#[derive(Debug)]
pub struct WireReader<R> {
    inner: BufReader<R>,
}

impl<R: AsyncRead + Unpin> WireReader<R> {
    /// 新しいリーダーを作成
    pub fn new(inner: R) -> Self {
        Self::with_capacity(DEFAULT_READ_BUFFER_SIZE, inner)
    }

    /// バッファサイズを指定してリーダーを作成
    pub fn with_capacity(capacity: usize, inner: R) -> Self {
        Self {
            inner: BufReader::with_capacity(capacity, inner),
        }
    }

    /// LF までの 1 行を読み取る (LF を含む)
    ///
    /// LF を読む前にストリームが終了した場合は `Error::TruncatedStream`
    pub async fn read_line(&mut self) -> Result<Vec<u8>> {
        let mut line = Vec::new();
        self.inner.read_until(b'\n', &mut line).await?;
        if line.last() != Some(&b'\n') {
            return Err(Error::TruncatedStream);
        }
        Ok(line)
    }

    /// ちょうど `len` バイトを読み取る
    ///
    /// `len` バイトに達する前にストリームが終了した場合は `Error::TruncatedStream`
    ///
    /// バッファは受信した分だけ確保する。
    pub async fn read_exact(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(len.min(DEFAULT_READ_BUFFER_SIZE));
        let limit = u64::try_from(len).unwrap_or(u64::MAX);
        (&mut self.inner).take(limit).read_to_end(&mut buf).await?;
        if buf.len() < len {
            return Err(Error::TruncatedStream);
        }
        Ok(buf)
    }

    /// 読み取り済みで未消費のバッファ
    pub fn buffer(&self) -> &[u8] {
        self.inner.buffer()
    }

    /// 内部のストリームを可変参照
    ///
    /// レスポンスの書き込みに使う。
    pub fn get_mut(&mut self) -> &mut R {
        self.inner.get_mut()
    }
}
