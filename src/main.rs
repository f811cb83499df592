use cobaltdb::dispatch::Dispatcher;
use cobaltdb::repl;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the interactive prompt stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("CobaltDB starting...");

    let mut dispatcher = Dispatcher::new();
    repl::run(&mut dispatcher).await
}
