use tracklistify::types::TrackRef;
use tracklistify::utils::*;

#[test]
fn test_parse_track_name_well_formed() {
    let parsed = parse_track_name("Amelie Lens - Exhale").unwrap();
    assert_eq!(
        parsed,
        TrackRef {
            artist: "Amelie Lens".to_string(),
            title: "Exhale".to_string(),
        }
    );
}

#[test]
fn test_parse_track_name_missing_delimiter() {
    assert!(parse_track_name("Amelie Lens Exhale").is_none());

    // A hyphen without surrounding spaces is not the delimiter
    assert!(parse_track_name("Amelie Lens-Exhale").is_none());
}

#[test]
fn test_parse_track_name_unidentified_sentinel() {
    assert!(parse_track_name("ID - ID").is_none());
    assert!(parse_track_name("Amelie Lens - ID").is_none());
    assert!(parse_track_name("ID - Exhale").is_none());

    // The sentinel must match the whole field, not a prefix
    assert!(parse_track_name("IDA - Exhale").is_some());
}

#[test]
fn test_parse_track_name_extra_delimiter_splits_early() {
    // Extra " - " occurrences split one segment early; the remainder is
    // dropped rather than folded back into the title
    let parsed = parse_track_name("Artist - Title - Extended Mix").unwrap();
    assert_eq!(parsed.artist, "Artist");
    assert_eq!(parsed.title, "Title");
}

#[test]
fn test_parse_track_name_empty_fields() {
    assert!(parse_track_name(" - Exhale").is_none());
    assert!(parse_track_name("Amelie Lens - ").is_none());
    assert!(parse_track_name(" - ").is_none());
    assert!(parse_track_name("").is_none());
}

#[test]
fn test_search_artist_takes_first_of_collaboration() {
    assert_eq!(
        search_artist("Charlotte de Witte & Enrico Sangiuliano"),
        "Charlotte de Witte"
    );
}

#[test]
fn test_search_artist_single_artist_unchanged() {
    assert_eq!(search_artist("Amelie Lens"), "Amelie Lens");
}

#[test]
fn test_search_artist_three_way_collaboration() {
    assert_eq!(search_artist("Regal & Amelie Lens & Farrago"), "Regal");
}

#[test]
fn test_sanitize_query_encodes_spaces() {
    assert_eq!(sanitize_query("Amelie Lens"), "Amelie%20Lens");
}

#[test]
fn test_sanitize_query_keeps_plain_words() {
    assert_eq!(sanitize_query("Renegade"), "Renegade");
}

#[test]
fn test_sanitize_query_keeps_encoded_punctuation() {
    // The apostrophe survives in percent-encoded form; '%' and hex digits
    // are inside the allowed character class
    assert_eq!(sanitize_query("Don't Stop"), "Don%27t%20Stop");
}

#[test]
fn test_sanitize_query_strips_unencoded_punctuation() {
    // '.', '-', '_' and '~' pass through the encoder raw and are stripped
    assert_eq!(sanitize_query("A.B-C_D~E"), "ABCDE");
}
