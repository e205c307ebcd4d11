//! Hardcoded sample content shown on the explore and support pages.
//! Nothing here is backed by a chain or a database.

use serde::{Deserialize, Serialize};

/// Category name that matches every listing.
pub const ALL_CATEGORIES: &str = "All";

pub const CATEGORIES: &[&str] = &[ALL_CATEGORIES, "Digital Art", "3D Art", "Character", "Fantasy"];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Listing {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub price: String,
    pub creator: String,
    pub category: String,
}

impl Listing {
    fn new(id: u32, name: &str, image: &str, price: &str, creator: &str, category: &str) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
            price: price.into(),
            creator: creator.into(),
            category: category.into(),
        }
    }

    /// Case-insensitive substring match against name or creator. An
    /// empty term matches everything.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.creator.to_lowercase().contains(&term)
    }

    pub fn matches_category(&self, category: &str) -> bool {
        category == ALL_CATEGORIES || self.category == category
    }
}

pub fn listings() -> Vec<Listing> {
    vec![
        Listing::new(1, "Neon Shamans", "/neon-shaman.png", "2.5 ETH", "CyberArtist", "Digital Art"),
        Listing::new(2, "Neon Zephyr", "/neon-zephyr.png", "1.8 ETH", "FutureVision", "3D Art"),
        Listing::new(
            3,
            "Emerald Enforcer",
            "/emerald-enforcer.png",
            "3.2 ETH",
            "QuantumDesign",
            "Character",
        ),
        Listing::new(
            4,
            "Cyber Guardian",
            "/placeholder.svg?height=300&width=250",
            "4.1 ETH",
            "NeonMaster",
            "Digital Art",
        ),
        Listing::new(
            5,
            "Digital Phoenix",
            "/placeholder.svg?height=300&width=250",
            "2.9 ETH",
            "TechnoArt",
            "Fantasy",
        ),
        Listing::new(
            6,
            "Matrix Warrior",
            "/placeholder.svg?height=300&width=250",
            "3.7 ETH",
            "CodeVision",
            "Character",
        ),
    ]
}

/// Listings that match both the search term and the category, in
/// catalog order. `None` for either filter matches everything.
pub fn filter_listings(search: Option<&str>, category: Option<&str>) -> Vec<Listing> {
    let search = search.unwrap_or("");
    let category = category.unwrap_or(ALL_CATEGORIES);

    listings()
        .into_iter()
        .filter(|l| l.matches_category(category) && l.matches_search(search))
        .collect()
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

const FAQS: &[(&str, &str)] = &[
    (
        "What is an NFT?",
        "NFT stands for Non-Fungible Token. It's a unique digital certificate stored on a blockchain that proves ownership of a specific digital asset, such as artwork, music, or collectibles.",
    ),
    (
        "How do I create my first NFT?",
        "Navigate to the 'Create NFT' page, upload your digital artwork, fill in the details like name, description, and price, then click 'Create & Mint NFT'. You'll need a crypto wallet with enough ETH to cover gas fees.",
    ),
    (
        "What wallets do you support?",
        "We support MetaMask, WalletConnect, Coinbase Wallet, and most major Ethereum-compatible wallets. Make sure your wallet is connected to the Ethereum mainnet.",
    ),
    (
        "What are gas fees?",
        "Gas fees are transaction costs on the Ethereum blockchain. They vary based on network congestion and are required for minting, buying, or selling NFTs. We recommend checking current gas prices before transactions.",
    ),
    (
        "How do royalties work?",
        "When you create an NFT, you can set a royalty percentage (0-50%). This means you'll receive that percentage of the sale price every time your NFT is resold in the future.",
    ),
    (
        "Can I cancel a listing?",
        "Yes, you can cancel your NFT listing at any time before it's sold. Go to your profile, find the listed NFT, and click 'Cancel Listing'. Note that this requires a small gas fee.",
    ),
];

pub fn faqs() -> Vec<Faq> {
    FAQS.iter()
        .map(|(question, answer)| Faq {
            question: question.to_string(),
            answer: answer.to_string(),
        })
        .collect()
}
