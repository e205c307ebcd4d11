//! Reusable prompts using Handlebars for templating. Strict mode is
//! on so a missing variable is an error rather than an empty string.

use std::fmt;

use anyhow::Result;
use handlebars::Handlebars;
use serde_json::json;

#[derive(Debug)]
pub enum Prompt {
    NftAdvisor,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

pub const PLATFORM_NAME: &str = "NFTCONNECT";

const ADVISOR_TOPICS: &[&str] = &[
    "NFT fundamentals and how they work on blockchain",
    "Creating, minting, buying, and selling NFTs",
    "Blockchain technology (Ethereum, Polygon, Solana)",
    "Cryptocurrency and wallet management",
    "Digital art and collectibles market",
    "NFT marketplace strategies and best practices",
    "Gas fees, transactions, and optimization",
    "Wallet setup, security, and best practices",
    "NFT trends, market analysis, and investment advice",
    "Smart contracts and royalties",
    "IPFS and metadata storage",
    "Community building and NFT marketing",
];

const NFT_ADVISOR_PROMPT: &str = r"You are an expert NFT advisor and blockchain specialist for {{platform}}, a decentralized NFT exchange platform. You help users understand NFTs, digital art, blockchain technology, cryptocurrency, and the NFT marketplace.

Key areas you excel in:
{{#each topics}}
- {{this}}
{{/each}}

Always provide helpful, accurate, and up-to-date information. Be friendly, educational, and encouraging. If you're unsure about current market prices or very recent developments, acknowledge it and suggest where users might find the most current information.

Keep responses concise but comprehensive, and always relate advice back to practical steps users can take on NFT platforms.";

pub fn templates<'a>() -> Result<Handlebars<'a>> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    // Prompts are plain text, not HTML
    registry.register_escape_fn(handlebars::no_escape);
    registry.register_template_string(&Prompt::NftAdvisor.to_string(), NFT_ADVISOR_PROMPT)?;
    Ok(registry)
}

/// Renders the system instruction that scopes the assistant to NFT
/// and blockchain topics.
pub fn nft_advisor() -> Result<String> {
    let rendered = templates()?.render(
        &Prompt::NftAdvisor.to_string(),
        &json!({
            "platform": PLATFORM_NAME,
            "topics": ADVISOR_TOPICS,
        }),
    )?;
    Ok(rendered)
}
