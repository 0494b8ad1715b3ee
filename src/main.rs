use tinyhttpd::config::Config;
use tinyhttpd::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::default();

    server::listener::run(&cfg).await
}
