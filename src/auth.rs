//! Access token value object.
//!
//! Materializes a token grant response and exposes expiry. Acquiring and
//! refreshing tokens is the transport layer's job; this type only records
//! what a grant said and answers "is it still good".

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bag;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    pub access_token: String,
    pub token_type: String,
    /// Absolute expiry instant, derived at construction from the grant's
    /// relative `expires_in` lifetime.
    pub expires_on: DateTime<Utc>,
    pub refresh_token: String,
    pub scopes: BTreeSet<String>,
}

impl Default for AuthToken {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            token_type: String::new(),
            expires_on: Utc::now(),
            refresh_token: String::new(),
            scopes: BTreeSet::new(),
        }
    }
}

impl AuthToken {
    pub fn new(
        access_token: impl Into<String>,
        token_type: impl Into<String>,
        lifetime_secs: i64,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: token_type.into(),
            expires_on: Utc::now() + Duration::seconds(lifetime_secs),
            ..Self::default()
        }
    }

    /// Decodes a token grant response bag, splitting the space-delimited
    /// `scope` string into a set.
    pub fn from_bag(bag: &Value) -> Self {
        Self::from_bag_at(bag, Utc::now())
    }

    /// Same as [`from_bag`](Self::from_bag) with an injected construction
    /// instant, so expiry math stays deterministic under test.
    pub fn from_bag_at(bag: &Value, now: DateTime<Utc>) -> Self {
        let lifetime = bag::int_opt(bag, "expires_in").unwrap_or(0);
        let scopes = bag::opt_str(bag, "scope")
            .map(|s| s.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();

        Self {
            access_token: bag::str_or(bag, "access_token", ""),
            token_type: bag::str_or(bag, "token_type", ""),
            expires_on: now + Duration::seconds(lifetime),
            refresh_token: bag::str_or(bag, "refresh_token", ""),
            scopes,
        }
    }

    /// True iff the current instant is strictly after `expires_on`.
    pub fn has_expired(&self) -> bool {
        self.expired_at(Utc::now())
    }

    pub fn expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_on
    }
}
