use reqwest::Client;

use crate::{
    config, success,
    types::{Credentials, FoundTrack, Resolution, SearchResponse, ServiceError, Stage, TrackRef},
    utils, warning,
};

// Number of candidates requested per search.
const SEARCH_LIMIT: u32 = 7;

/// Classification of a single search response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchVerdict {
    /// A candidate's primary artist matched; carries its track URI.
    Matched(String),
    /// Zero candidates, or none with a matching primary artist.
    Unmatched,
    /// The body carried an `error` object (or neither shape decoded).
    Error(String),
}

/// The matching policy: the candidate's primary listed artist must equal
/// the search artist after lower-casing. Exact equality, no fuzzing; swap
/// this function to change the policy.
pub fn exact_case_insensitive_artist_match(candidate: &FoundTrack, search_artist: &str) -> bool {
    candidate
        .artists
        .first()
        .is_some_and(|a| a.name.to_lowercase() == search_artist.to_lowercase())
}

/// Scans candidates in service order and picks the first whose primary
/// artist matches. Pure over the deserialized body.
pub fn evaluate_search(response: &SearchResponse, search_artist: &str) -> SearchVerdict {
    if let Some(err) = &response.error {
        return SearchVerdict::Error(format!("status {}: {}", err.status, err.message));
    }

    let Some(tracks) = &response.tracks else {
        return SearchVerdict::Error("response carried neither tracks nor error".to_string());
    };

    tracks
        .items
        .iter()
        .find(|candidate| exact_case_insensitive_artist_match(candidate, search_artist))
        .map(|candidate| SearchVerdict::Matched(candidate.uri.clone()))
        .unwrap_or(SearchVerdict::Unmatched)
}

async fn search_track(
    client: &Client,
    creds: &Credentials,
    track: &TrackRef,
) -> Result<SearchVerdict, ServiceError> {
    let search_artist = utils::search_artist(&track.artist);
    let artist = utils::sanitize_query(search_artist);
    let title = utils::sanitize_query(&track.title);

    let api_url = format!(
        "{uri}/search?q=track:{title}%20artist:{artist}&type=track&limit={limit}",
        uri = &config::spotify_apiurl(),
        title = title,
        artist = artist,
        limit = SEARCH_LIMIT
    );

    let response = client
        .get(&api_url)
        .bearer_auth(&creds.token)
        .send()
        .await
        .map_err(|e| ServiceError::transport(Stage::Search, e))?;

    // API-level errors arrive inside the body; decode before any status
    // check so they classify as search verdicts, not transport failures.
    let body = response
        .json::<SearchResponse>()
        .await
        .map_err(|e| ServiceError::transport(Stage::Search, e))?;

    Ok(evaluate_search(&body, search_artist))
}

/// Resolves each tracklist entry to a Spotify track URI, in sequence.
///
/// Both output partitions preserve encounter order. A failed search halts
/// the loop in strict mode (the remaining entries are left untouched and
/// the triggering error is returned in `halted`); in lenient mode the
/// entry is reported, classified unresolved, and resolution continues.
pub async fn resolve_tracks(
    creds: &Credentials,
    tracklist: &[TrackRef],
    lenient: bool,
) -> Resolution {
    let client = Client::new();

    let mut resolved = Vec::new();
    let mut unresolved = Vec::new();
    let mut halted = None;

    for track in tracklist {
        match search_track(&client, creds, track).await {
            Ok(SearchVerdict::Matched(uri)) => {
                success!("Resolved: {} - {}", track.artist, track.title);
                resolved.push(uri);
            }
            Ok(SearchVerdict::Unmatched) => {
                warning!("Not found: {} - {}", track.artist, track.title);
                unresolved.push(track.clone());
            }
            Ok(SearchVerdict::Error(message)) => {
                let err = ServiceError::Api {
                    artist: track.artist.clone(),
                    title: track.title.clone(),
                    message,
                };
                if lenient {
                    warning!("{}", err);
                    unresolved.push(track.clone());
                } else {
                    halted = Some(err);
                    break;
                }
            }
            Err(err) => {
                if lenient {
                    warning!("{}", err);
                    unresolved.push(track.clone());
                } else {
                    halted = Some(err);
                    break;
                }
            }
        }
    }

    Resolution {
        resolved,
        unresolved,
        halted,
    }
}
