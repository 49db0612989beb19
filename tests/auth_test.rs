use chrono::{Duration, TimeZone, Utc};
use serde_json::{Value, json};
use spotify_model::auth::AuthToken;

#[test]
fn test_from_grant_response() {
    let now = Utc.with_ymd_and_hms(2020, 1, 1, 12, 0, 0).unwrap();
    let token = AuthToken::from_bag_at(
        &json!({
            "access_token": "BQC4YqJ",
            "token_type": "Bearer",
            "expires_in": 3600,
            "refresh_token": "AQB58yz",
            "scope": "user-read-private user-read-email",
        }),
        now,
    );

    assert_eq!(token.access_token, "BQC4YqJ");
    assert_eq!(token.token_type, "Bearer");
    assert_eq!(token.refresh_token, "AQB58yz");
    assert_eq!(token.expires_on, now + Duration::seconds(3600));

    // The space-delimited scope string becomes a set.
    assert_eq!(token.scopes.len(), 2);
    assert!(token.scopes.contains("user-read-private"));
    assert!(token.scopes.contains("user-read-email"));
}

#[test]
fn test_expiry_is_strictly_after() {
    let now = Utc.with_ymd_and_hms(2020, 1, 1, 12, 0, 0).unwrap();
    let token = AuthToken::from_bag_at(&json!({"expires_in": 3600}), now);

    assert!(!token.expired_at(now));
    // Exactly at the expiry instant the token still counts as valid.
    assert!(!token.expired_at(now + Duration::seconds(3600)));
    assert!(token.expired_at(now + Duration::seconds(3601)));
}

#[test]
fn test_null_grant_defaults() {
    let now = Utc.with_ymd_and_hms(2020, 1, 1, 12, 0, 0).unwrap();
    let token = AuthToken::from_bag_at(&Value::Null, now);

    assert_eq!(token.access_token, "");
    assert_eq!(token.refresh_token, "");
    assert!(token.scopes.is_empty());
    // No lifetime means the token is already at its expiry instant.
    assert_eq!(token.expires_on, now);
    assert!(token.expired_at(now + Duration::seconds(1)));
}

#[test]
fn test_empty_scope_string() {
    let now = Utc.with_ymd_and_hms(2020, 1, 1, 12, 0, 0).unwrap();
    let token = AuthToken::from_bag_at(&json!({"scope": ""}), now);
    assert!(token.scopes.is_empty());
}

#[test]
fn test_explicit_constructor() {
    let token = AuthToken::new("abc", "Bearer", 3600);
    assert_eq!(token.access_token, "abc");
    assert_eq!(token.token_type, "Bearer");
    assert!(!token.has_expired());
    assert!(token.scopes.is_empty());
}
