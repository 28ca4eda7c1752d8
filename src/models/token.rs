// ABOUTME: Session token model produced by the login operation
// ABOUTME: Bearer credential passed to every authenticated call
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

/// OAuth session token for a logged-in user.
///
/// The library neither persists nor validates tokens; callers hold one for
/// the session and may serialize it into whatever store they use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodiumToken {
    /// The token string sent in the `Authorization: Bearer` header.
    #[serde(rename = "access_token")]
    pub token: String,
    /// Type of token issued, normally `bearer`.
    pub token_type: String,
    /// Unix timestamp of token creation.
    #[serde(rename = "created_at")]
    pub created: i64,
}

impl PodiumToken {
    /// Assemble a token from stored parts.
    #[must_use]
    pub fn new(token: impl Into<String>, token_type: impl Into<String>, created: i64) -> Self {
        Self {
            token: token.into(),
            token_type: token_type.into(),
            created,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_the_oauth_response_keys() {
        let token: PodiumToken = serde_json::from_value(serde_json::json!({
            "access_token": "abc",
            "token_type": "bearer",
            "created_at": 1000,
        }))
        .unwrap();
        assert_eq!(token.token, "abc");
        assert_eq!(token.token_type, "bearer");
        assert_eq!(token.created, 1000);
    }
}
