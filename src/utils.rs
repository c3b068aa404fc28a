use crate::types::TrackRef;

// "ID" on either side of the delimiter marks an intentionally
// unidentified artist or title in the source data.
const UNIDENTIFIED: &str = "ID";

const FIELD_DELIMITER: &str = " - ";

pub fn parse_track_name(content: &str) -> Option<TrackRef> {
    let parts: Vec<&str> = content.split(FIELD_DELIMITER).collect();
    if parts.len() < 2 {
        return None;
    }

    // Titles containing " - " themselves split one segment early; the
    // remainder is dropped. Known limitation of the source format.
    let (artist, title) = (parts[0], parts[1]);
    if artist.is_empty() || title.is_empty() {
        return None;
    }
    if artist == UNIDENTIFIED || title == UNIDENTIFIED {
        return None;
    }

    Some(TrackRef {
        artist: artist.to_string(),
        title: title.to_string(),
    })
}

// Collaborations are joined with " & " in the source data; only the first
// artist is used for searching.
pub fn search_artist(artist: &str) -> &str {
    artist.split(" & ").next().unwrap_or(artist)
}

pub fn sanitize_query(raw: &str) -> String {
    urlencoding::encode(raw)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ' || *c == '%')
        .collect()
}
