use tracklistify::spotify::search::{
    SearchVerdict, evaluate_search, exact_case_insensitive_artist_match,
};
use tracklistify::types::SearchResponse;

fn response_from(json: &str) -> SearchResponse {
    serde_json::from_str(json).expect("fixture must deserialize")
}

#[test]
fn test_zero_items_is_unmatched() {
    let response = response_from(r#"{"tracks": {"items": []}}"#);
    assert_eq!(evaluate_search(&response, "Amelie Lens"), SearchVerdict::Unmatched);
}

#[test]
fn test_first_matching_candidate_wins_even_past_index_zero() {
    let response = response_from(
        r#"{
          "tracks": {
            "items": [
              {
                "uri": "spotify:track:aaa",
                "name": "Exhale",
                "artists": [{"name": "Someone Else"}]
              },
              {
                "uri": "spotify:track:bbb",
                "name": "Exhale",
                "artists": [{"name": "Amelie Lens"}]
              }
            ]
          }
        }"#,
    );

    assert_eq!(
        evaluate_search(&response, "Amelie Lens"),
        SearchVerdict::Matched("spotify:track:bbb".to_string())
    );
}

#[test]
fn test_artist_match_is_case_insensitive() {
    let response = response_from(
        r#"{
          "tracks": {
            "items": [
              {
                "uri": "spotify:track:ccc",
                "name": "Renegade",
                "artists": [{"name": "CHARLOTTE DE WITTE"}]
              }
            ]
          }
        }"#,
    );

    assert_eq!(
        evaluate_search(&response, "charlotte de witte"),
        SearchVerdict::Matched("spotify:track:ccc".to_string())
    );
}

#[test]
fn test_only_the_primary_listed_artist_counts() {
    // The searched artist appears, but not in the primary slot
    let response = response_from(
        r#"{
          "tracks": {
            "items": [
              {
                "uri": "spotify:track:ddd",
                "name": "Exhale",
                "artists": [{"name": "Someone Else"}, {"name": "Amelie Lens"}]
              }
            ]
          }
        }"#,
    );

    assert_eq!(evaluate_search(&response, "Amelie Lens"), SearchVerdict::Unmatched);
}

#[test]
fn test_candidate_without_artists_never_matches() {
    let response = response_from(
        r#"{
          "tracks": {
            "items": [
              {"uri": "spotify:track:eee", "name": "Exhale", "artists": []}
            ]
          }
        }"#,
    );

    assert_eq!(evaluate_search(&response, "Amelie Lens"), SearchVerdict::Unmatched);
}

#[test]
fn test_error_body_is_classified_as_api_error() {
    let response =
        response_from(r#"{"error": {"status": 401, "message": "The access token expired"}}"#);

    match evaluate_search(&response, "Amelie Lens") {
        SearchVerdict::Error(message) => {
            assert!(message.contains("401"));
            assert!(message.contains("The access token expired"));
        }
        other => panic!("expected an error verdict, got {:?}", other),
    }
}

#[test]
fn test_body_with_neither_shape_is_an_error() {
    let response = response_from("{}");
    assert!(matches!(
        evaluate_search(&response, "Amelie Lens"),
        SearchVerdict::Error(_)
    ));
}

#[test]
fn test_match_policy_direct() {
    let response = response_from(
        r#"{
          "tracks": {
            "items": [
              {
                "uri": "spotify:track:fff",
                "name": "Renegade",
                "artists": [{"name": "Charlotte de Witte"}]
              }
            ]
          }
        }"#,
    );
    let candidate = &response.tracks.as_ref().unwrap().items[0];

    assert!(exact_case_insensitive_artist_match(candidate, "charlotte DE witte"));
    assert!(!exact_case_insensitive_artist_match(candidate, "Charlotte"));
    assert!(!exact_case_insensitive_artist_match(candidate, "Charlotte de Witte "));
}
