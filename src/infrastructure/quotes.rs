//! Quote of the day
//!
//! Best-effort: every failure (network, status, parse) yields `None`.

use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;

use serde::Deserialize;

const QUOTE_API: &str = "https://zenquotes.io/api/random";
const CATEGORIES: [&str; 4] = ["inspiration", "excellence", "truth", "success"];

#[derive(Debug, Deserialize)]
struct ZenQuote {
    q: String,
    a: String,
}

/// Fetch a random quote, formatted for display.
pub fn fetch_quote(timeout: Duration) -> Option<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .ok()?;
    let url = format!("{}/{}", QUOTE_API, pick_category(&mut rand::thread_rng()));
    let response = client.get(url).send().ok()?.error_for_status().ok()?;
    let body = response.text().ok()?;
    parse_quote(&body)
}

/// Parse the API's `[{"q": ..., "a": ...}]` response.
pub fn parse_quote(body: &str) -> Option<String> {
    let quotes: Vec<ZenQuote> = serde_json::from_str(body).ok()?;
    let first = quotes.into_iter().next()?;
    let (q, a) = (first.q.trim(), first.a.trim());
    if q.is_empty() || a.is_empty() {
        return None;
    }
    Some(format!("\"{}\" — {}", q, a))
}

fn pick_category(rng: &mut impl Rng) -> &'static str {
    CATEGORIES.choose(rng).copied().unwrap_or(CATEGORIES[0])
}
