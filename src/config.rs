use std::path::PathBuf;

/// デフォルトの待ち受けポート
pub const DEFAULT_PORT: u16 = 4221;

/// サーバー設定
///
/// 起動時に一度だけ作成し、以降は変更しない。
/// ルーターとハンドラーには構築時に値として渡す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `/files/` ルートのベースディレクトリ
    pub directory: PathBuf,
    /// 待ち受けアドレス
    pub bind_addr: String,
    /// 待ち受けポート
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            bind_addr: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// ベースディレクトリを指定して作成
    pub fn with_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }

    /// `host:port` 形式の待ち受けアドレス
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}
