use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Public view of a user embedded in every issued token.
///
/// Carries only the fields safe to hand back to clients. There is no
/// password digest field here, so a token cannot leak one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserClaims {
    pub id: String,
    pub username: String,
    pub fullname: String,
}

/// Claims issued and verified by this service.
///
/// Wire shape: `{ user: {id, username, fullname}, sub, iat, exp }`,
/// with `sub` set to the username and timestamps in Unix seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub user: UserClaims,
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    /// Build claims for a user, expiring `ttl_days` from now.
    ///
    /// # Arguments
    /// * `user` - Public user view to embed
    /// * `ttl_days` - Days until the token expires
    pub fn for_user(user: UserClaims, ttl_days: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::days(ttl_days);

        Self {
            sub: user.username.clone(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
            user,
        }
    }

    /// Re-stamp these claims with a fresh issue time and expiry.
    ///
    /// The embedded user view and subject carry over verbatim. The new
    /// expiry is never earlier than the original: the original was issued
    /// no later than now, with the same ttl.
    pub fn renewed(&self, ttl_days: i64) -> Self {
        let now = Utc::now();

        Self {
            user: self.user.clone(),
            sub: self.sub.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::days(ttl_days)).timestamp(),
        }
    }
}
