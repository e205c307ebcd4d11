use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod chat;
pub mod explore;
pub mod serve;

#[derive(Subcommand)]
enum Command {
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "2222")]
        port: String,
    },
    /// Chat with the NFT assistant through a running server
    Chat {
        /// Base URL of the server
        #[arg(long, default_value = "http://127.0.0.1:2222")]
        url: String,
    },
    /// List sample NFTs matching a search term and category
    Explore {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port }) => {
            serve::run(host, port).await?;
        }
        Some(Command::Chat { url }) => {
            chat::run(&url).await?;
        }
        Some(Command::Explore { search, category }) => {
            explore::run(search.as_deref(), category.as_deref())?;
        }
        None => {}
    }

    Ok(())
}
