use anyhow::Result;
use serde_json::json;

use crate::catalog::filter_listings;

pub fn run(search: Option<&str>, category: Option<&str>) -> Result<()> {
    let results = filter_listings(search, category);
    println!(
        "{}",
        serde_json::to_string_pretty(&json!({
            "search": search,
            "category": category,
            "results": results,
        }))?
    );
    Ok(())
}
