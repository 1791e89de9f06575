use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};

use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
    /// True only for access tokens issued directly by a password login.
    /// Tokens obtained through the refresh endpoint never regain freshness.
    pub fresh: bool,
    pub is_admin: bool,
    pub kind: TokenKind,
}

#[derive(Debug)]
pub enum TokenError {
    Creation(jsonwebtoken::errors::Error),
    Expired,
    Invalid,
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenError::Creation(err) => write!(f, "couldn't create token: {}", err),
            TokenError::Expired => write!(f, "token expired"),
            TokenError::Invalid => write!(f, "token invalid"),
        }
    }
}

impl std::error::Error for TokenError {}

/// The first registered user is the administrator.
pub fn first_user_is_admin(user_id: i32) -> bool {
    user_id == 1
}

/// Mints and verifies the bearer tokens accepted by the API. Built once at
/// startup from [`Settings`] and managed as Rocket state.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_lifetime: Duration,
    refresh_lifetime: Duration,
    admin_rule: fn(i32) -> bool,
}

impl TokenIssuer {
    pub fn new(settings: &Settings, admin_rule: fn(i32) -> bool) -> TokenIssuer {
        TokenIssuer {
            encoding_key: EncodingKey::from_secret(settings.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(settings.jwt_secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
            access_lifetime: Duration::minutes(settings.access_token_minutes),
            refresh_lifetime: Duration::days(settings.refresh_token_days),
            admin_rule,
        }
    }

    pub fn issue_access(&self, user_id: i32, fresh: bool) -> Result<String, TokenError> {
        self.issue(user_id, TokenKind::Access, fresh, self.access_lifetime)
    }

    pub fn issue_refresh(&self, user_id: i32) -> Result<String, TokenError> {
        self.issue(user_id, TokenKind::Refresh, false, self.refresh_lifetime)
    }

    fn issue(
        &self,
        user_id: i32,
        kind: TokenKind,
        fresh: bool,
        lifetime: Duration,
    ) -> Result<String, TokenError> {
        let now = Utc::now();

        let claims = Claims {
            sub: user_id,
            jti: generate_jti(),
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
            fresh,
            is_admin: (self.admin_rule)(user_id),
            kind,
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(TokenError::Creation)
    }

    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| match err.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }
}

fn generate_jti() -> String {
    const LEN: usize = 32;

    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(LEN)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_settings(secret: &str) -> Settings {
        Settings {
            jwt_secret: secret.to_string(),
            access_token_minutes: 15,
            refresh_token_days: 30,
        }
    }

    fn test_issuer(secret: &str) -> TokenIssuer {
        TokenIssuer::new(&test_settings(secret), first_user_is_admin)
    }

    #[test]
    fn access_token_round_trips() {
        let issuer = test_issuer("secret");

        let token = issuer.issue_access(7, true).unwrap();
        let claims = issuer.decode(&token).unwrap();

        assert_eq!(claims.sub, 7);
        assert_eq!(claims.kind, TokenKind::Access);
        assert!(claims.fresh);
        assert!(!claims.is_admin);
        assert_eq!(claims.jti.len(), 32);
    }

    #[test]
    fn first_user_gets_admin_claim() {
        let issuer = test_issuer("secret");

        let token = issuer.issue_access(1, true).unwrap();
        let claims = issuer.decode(&token).unwrap();

        assert!(claims.is_admin);
    }

    #[test]
    fn refresh_token_is_never_fresh() {
        let issuer = test_issuer("secret");

        let token = issuer.issue_refresh(7).unwrap();
        let claims = issuer.decode(&token).unwrap();

        assert_eq!(claims.kind, TokenKind::Refresh);
        assert!(!claims.fresh);
    }

    #[test]
    fn jtis_are_unique_per_token() {
        let issuer = test_issuer("secret");

        let first = issuer.decode(&issuer.issue_access(7, true).unwrap()).unwrap();
        let second = issuer.decode(&issuer.issue_access(7, true).unwrap()).unwrap();

        assert_ne!(first.jti, second.jti);
    }

    #[test]
    fn expired_token_is_rejected() {
        let issuer = test_issuer("secret");
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: 7,
            jti: generate_jti(),
            iat: now - 7800,
            exp: now - 7200,
            fresh: true,
            is_admin: false,
            kind: TokenKind::Access,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"secret"),
        )
        .unwrap();

        assert!(matches!(issuer.decode(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let issuer = test_issuer("secret");
        let other = test_issuer("not the same secret");

        let token = other.issue_access(7, true).unwrap();

        assert!(matches!(issuer.decode(&token), Err(TokenError::Invalid)));
    }
}
