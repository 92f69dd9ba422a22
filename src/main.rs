use {
    anyhow::{Context, Result},
    clap::Parser,
    std::sync::Arc,
    sonne_fees::{Cli, Collaborators, FeeAdapter, SONNE, SnapshotSource, utils::now_timestamp_secs},
};

fn init_log() {
    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Debug)
    } else {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    };

    env_logger::Builder::new()
        .filter(None, global_level)
        .filter(Some("sonne_fees"), my_code_level)
        .parse_default_env() // RUST_LOG still wins when set
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_log();
    let args = Cli::parse();

    let timestamp = args.timestamp.unwrap_or_else(now_timestamp_secs);
    let source = SnapshotSource::load(&args.fixture)?;
    let adapter = FeeAdapter::new(SONNE, Collaborators::from_source(Arc::new(source)));

    let result = adapter
        .fetch(timestamp)
        .await
        .with_context(|| format!("Fee computation failed for timestamp {}", timestamp))?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", json);
    Ok(())
}
