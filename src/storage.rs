//! ファイルルート用のストレージ
//!
//! `/files/{name}` の `name` をベースディレクトリからの相対名として読み書きする。
//! 名前に含まれる `..` やサブディレクトリは検証しない。

use std::future::Future;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::Result;

/// ファイルの読み書き
pub trait FileStore: Send + Sync + 'static {
    /// ファイル全体を読み取る
    ///
    /// 存在しない場合は `Ok(None)`、それ以外の失敗は `Err`
    fn read(&self, name: &str) -> impl Future<Output = Result<Option<Vec<u8>>>> + Send;

    /// ファイルを作成 (既存なら切り詰め) して `data` を書き込む
    fn write(&self, name: &str, data: &[u8]) -> impl Future<Output = Result<()>> + Send;
}

/// ディレクトリを使ったストレージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    base: PathBuf,
}

impl Directory {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// 相対名をベースディレクトリの下のパスに解決
    ///
    /// 先頭の `/` は取り除くので、絶対パスとして扱われることはない。
    pub fn resolve(&self, name: &str) -> PathBuf {
        self.base.join(name.trim_start_matches('/'))
    }
}

impl FileStore for Directory {
    async fn read(&self, name: &str) -> Result<Option<Vec<u8>>> {
        match tokio::fs::read(self.resolve(name)).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, name: &str, data: &[u8]) -> Result<()> {
        tokio::fs::write(self.resolve(name), data).await?;
        Ok(())
    }
}
