use clap::Parser;
use receipt_points::{
    adapters::{database::MemoryDatabase, http},
    commands::DomainLogic,
    config::Config,
    logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    logging::init_logger(config.log_format);
    tracing::debug!(?config, "loaded configuration");

    let domain = DomainLogic::new(MemoryDatabase::default());
    http::run_server(config.socket_addr(), domain).await?;

    Ok(())
}
