use tabled::Table;

use crate::{
    config, error, info, spotify, success, tracklist,
    types::{Resolution, UnresolvedTableRow},
    warning,
};

pub async fn playlist(url: String, name: String, lenient: bool) {
    let creds = match config::credentials() {
        Ok(creds) => creds,
        Err(e) => error!("Missing Spotify credentials: {}", e),
    };

    let tracks = match tracklist::fetch_tracklist(&url).await {
        Ok(tracks) => tracks,
        Err(e) => error!("Failed to read tracklist: {}", e),
    };

    if tracks.is_empty() {
        warning!("No identified tracks found at {}", url);
        return;
    }
    success!("Found {} identified tracks", tracks.len());

    info!("Creating playlist \"{}\"", name);
    let playlist_id = match spotify::playlist::create(&creds, name).await {
        Ok(id) => id,
        Err(e) => error!("{}", e),
    };

    info!("Resolving {} tracks on Spotify", tracks.len());
    let Resolution {
        resolved,
        unresolved,
        halted,
    } = spotify::search::resolve_tracks(&creds, &tracks, lenient).await;

    if let Some(e) = halted {
        warning!("Resolution stopped early: {}", e);
        warning!(
            "Continuing with the {} tracks resolved so far",
            resolved.len()
        );
    }

    if resolved.is_empty() {
        warning!("Nothing resolved; playlist {} was left empty", playlist_id);
    } else {
        match spotify::playlist::add_tracks(&creds, &playlist_id, &resolved).await {
            Ok(()) => success!("Added {} tracks to playlist {}", resolved.len(), playlist_id),
            Err(e) => error!("{}", e),
        }
    }

    if !unresolved.is_empty() {
        warning!("{} tracks could not be resolved:", unresolved.len());
        let rows: Vec<UnresolvedTableRow> = unresolved
            .into_iter()
            .map(|t| UnresolvedTableRow {
                artist: t.artist,
                title: t.title,
            })
            .collect();
        println!("{}", Table::new(rows));
    }
}
