use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use scraper::{Html, Selector};

use crate::{
    types::{ServiceError, Stage, TrackRef},
    utils,
};

// The page rejects default HTTP client agents.
const USER_AGENT: &str = "Mozilla/5.0";

// Every track entry sits in an element with this class; the combined
// "Artist - Title" string is the content attribute of the first child
// carrying itemprop="name". Entries without that child are transition or
// mashup markers, not playable tracks.
const TRACK_ENTRY_SELECTOR: &str = ".tlToogleData";
const TRACK_NAME_SELECTOR: &str = r#"[itemprop="name"]"#;

/// Fetches the tracklist page and extracts the identified tracks in
/// document order.
pub async fn fetch_tracklist(url: &str) -> Result<Vec<TrackRef>, ServiceError> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| ServiceError::transport(Stage::PageFetch, e))?;

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching tracklist page...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = client.get(url).send().await;
    pb.finish_and_clear();

    let response = result.map_err(|e| ServiceError::transport(Stage::PageFetch, e))?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ServiceError::Status {
            stage: Stage::PageFetch,
            status,
            body,
        });
    }

    let html = response
        .text()
        .await
        .map_err(|e| ServiceError::transport(Stage::PageFetch, e))?;

    Ok(parse_tracklist(&html))
}

/// Extracts `(artist, title)` pairs from the page markup. Pure over the
/// document text; a page without qualifying elements yields an empty list.
pub fn parse_tracklist(html: &str) -> Vec<TrackRef> {
    let document = Html::parse_document(html);
    let entry_selector = Selector::parse(TRACK_ENTRY_SELECTOR).unwrap();
    let name_selector = Selector::parse(TRACK_NAME_SELECTOR).unwrap();

    document
        .select(&entry_selector)
        .filter_map(|entry| {
            let meta = entry.select(&name_selector).next()?;
            let content = meta.value().attr("content")?;
            utils::parse_track_name(content)
        })
        .collect()
}
