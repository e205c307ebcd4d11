use anyhow::Result;
use nftconnect::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
