use tabled::Table;

use crate::{error, tracklist, types::TracklistTableRow, warning};

pub async fn tracks(url: String) {
    let tracks = match tracklist::fetch_tracklist(&url).await {
        Ok(tracks) => tracks,
        Err(e) => error!("Failed to read tracklist: {}", e),
    };

    if tracks.is_empty() {
        warning!("No identified tracks found at {}", url);
        return;
    }

    let rows: Vec<TracklistTableRow> = tracks
        .into_iter()
        .enumerate()
        .map(|(i, t)| TracklistTableRow {
            position: i + 1,
            artist: t.artist,
            title: t.title,
        })
        .collect();

    println!("{}", Table::new(rows));
}
