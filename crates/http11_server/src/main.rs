//! mini_http11 サーバー
//!
//! 使い方:
//!   # カレントディレクトリを /files/ のベースにしてポート 4221 で起動
//!   cargo run -p http11_server
//!
//!   # ベースディレクトリとポートを指定
//!   cargo run -p http11_server -- --directory /tmp/files --port 8080
//!
//! ログレベルは RUST_LOG で変更できる:
//!   RUST_LOG=debug cargo run -p http11_server

use std::path::PathBuf;

use mini_http11::{Config, Router, Server};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "http11_server=info,mini_http11=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = parse_args()?;
    tracing::info!(directory = %config.directory.display(), "Serving files");

    let server = Server::bind(&config.listen_addr()).await?;
    let router = Router::new(&config);
    server.serve(router).await?;

    Ok(())
}

fn parse_args() -> Result<Config, Box<dyn std::error::Error>> {
    let mut args = noargs::raw_args();
    args.metadata_mut().app_name = "http11_server";

    // --help フラグ
    noargs::HELP_FLAG.take_help(&mut args);

    // --version フラグ
    let version_flag: bool = noargs::flag("version")
        .short('V')
        .doc("Show version")
        .take(&mut args)
        .is_present();
    if version_flag {
        println!("{}", env!("CARGO_PKG_VERSION"));
        std::process::exit(0);
    }

    // --directory オプション
    let directory: PathBuf = noargs::opt("directory")
        .short('d')
        .doc("Directory where /files/ are stored")
        .default(".")
        .take(&mut args)
        .then(|o| Ok::<_, std::convert::Infallible>(PathBuf::from(o.value())))
        .map_err(|e| format!("{:?}", e))?;

    // --port オプション
    let port: u16 = noargs::opt("port")
        .short('p')
        .doc("Port to listen on (default: 4221)")
        .default("4221")
        .take(&mut args)
        .then(|o| o.value().parse())
        .map_err(|e| format!("{:?}", e))?;

    // --bind オプション
    let bind_addr: String = noargs::opt("bind")
        .doc("Address to bind (default: 0.0.0.0)")
        .default("0.0.0.0")
        .take(&mut args)
        .then(|o| Ok::<_, std::convert::Infallible>(o.value().to_string()))
        .map_err(|e| format!("{:?}", e))?;

    // 未知の引数があればエラー、ヘルプが返されたら表示
    if let Some(help) = args.finish().map_err(|e| format!("{:?}", e))? {
        print!("{}", help);
        std::process::exit(0);
    }

    Ok(Config {
        directory,
        bind_addr,
        port,
    })
}
