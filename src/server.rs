//! HTTP サーバー
//!
//! 接続ごとに tokio タスクを 1 つ起動し、リクエストを 1 件だけ処理して接続を閉じる。
//! Keep-Alive とパイプライン処理は行わない。タイムアウトもない。
//!
//! ## 使い方
//!
//! ```ignore
//! use mini_http11::{Config, Router, Server};
//!
//! let config = Config::with_directory("/tmp/files");
//! let server = Server::bind(&config.listen_addr()).await?;
//! server.serve(Router::new(&config)).await?;
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpListener;

use crate::decoder::decode_request;
use crate::encoder::encode_response;
use crate::error::{Error, Result};
use crate::reader::{DEFAULT_READ_BUFFER_SIZE, WireReader};
use crate::router::Handler;

/// HTTP サーバー
pub struct Server {
    listener: TcpListener,
    read_buffer_size: usize,
}

impl Server {
    /// 指定アドレスにバインド
    pub async fn bind(addr: &str) -> Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self {
            listener,
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
        })
    }

    /// 読み取りバッファサイズを設定
    pub fn read_buffer_size(mut self, size: usize) -> Self {
        self.read_buffer_size = size;
        self
    }

    /// ローカルアドレスを取得
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// サーバーを起動
    ///
    /// accept に失敗した場合のみ戻る。
    pub async fn serve<H: Handler>(self, handler: H) -> Result<()> {
        let handler = Arc::new(handler);
        tracing::info!(addr = %self.local_addr()?, "HTTP server listening");

        loop {
            let (stream, peer_addr) = self.listener.accept().await?;
            let handler = handler.clone();
            let read_buffer_size = self.read_buffer_size;

            tokio::spawn(async move {
                tracing::debug!(peer = %peer_addr, "Connection accepted");
                let reader = WireReader::with_capacity(read_buffer_size, stream);
                let result = serve_connection(reader, handler.as_ref()).await;
                log_result(peer_addr, result);
            });
        }
    }

    /// 単一の接続を処理 (テスト用)
    pub async fn handle_one<H: Handler>(self, handler: H) -> Result<()> {
        let (stream, _peer_addr) = self.listener.accept().await?;
        let reader = WireReader::with_capacity(self.read_buffer_size, stream);
        serve_connection(reader, &handler).await
    }
}

/// 1 接続分のパイプラインを実行
///
/// デコード、ルーティング、エンコード、書き込みの順に処理し、最後に書き込み側を閉じる。
/// いずれかで失敗した場合はレスポンスを書かずに `Err` を返す。
pub async fn handle_connection<T, H>(stream: T, handler: &H) -> Result<()>
where
    T: AsyncRead + AsyncWrite + Unpin,
    H: Handler,
{
    serve_connection(WireReader::new(stream), handler).await
}

async fn serve_connection<T, H>(mut reader: WireReader<T>, handler: &H) -> Result<()>
where
    T: AsyncRead + AsyncWrite + Unpin,
    H: Handler,
{
    let request = decode_request(&mut reader).await?;
    let method = request.method().clone();
    let path = request.path().to_string();

    let response = handler.handle(request).await?;
    let status = response.status();
    let bytes = encode_response(response)?;

    let stream = reader.get_mut();
    stream.write_all(&bytes).await?;
    stream.flush().await?;
    stream.shutdown().await?;

    tracing::info!(
        method = %method,
        path = %path,
        status = status.code(),
        bytes = bytes.len(),
        "Request served"
    );
    Ok(())
}

fn log_result(peer_addr: SocketAddr, result: Result<()>) {
    match result {
        Ok(()) => tracing::debug!(peer = %peer_addr, "Connection closed"),
        Err(e) if e.is_parse_error() => {
            tracing::warn!(peer = %peer_addr, error = %e, "Failed to parse request")
        }
        Err(Error::Io(e)) => {
            tracing::error!(peer = %peer_addr, error = %e, "I/O error, closing connection")
        }
        Err(e) => tracing::error!(peer = %peer_addr, error = %e, "Closing connection"),
    }
}
