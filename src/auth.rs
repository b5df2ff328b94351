//! Authentication and authorization.
//!
//! Credentials are HS256 JWTs with a fixed TTL carrying either an
//! administrative role or a customer identity. Role lives in the bearer
//! token and there is no server-side revocation before expiry; the short
//! TTL is the accepted tradeoff for not running a session store.
//!
//! The administrative account is injected through configuration (email plus
//! Argon2 PHC hash) and verified with the same constant-time password
//! verifier as customer logins; it is never stored in the customers table.

use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, SaltString};
use argon2::{Argon2, PasswordVerifier};
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use chrono::{Duration as ChronoDuration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::models::customer;
use crate::AppState;

/// Claim structure for issued tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub role: Role,
    /// Present only on customer credentials
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    pub email: String,
    /// Unique identifier for this token
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Customer,
}

impl Claims {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Whether these claims may read or mutate the given customer record.
    pub fn can_access_customer(&self, customer_id: &str) -> bool {
        self.is_admin() || self.customer_id.as_deref() == Some(customer_id)
    }
}

/// Authentication configuration
#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub admin_email: String,
    pub admin_password_hash: String,
}

impl AuthConfig {
    pub fn new(
        jwt_secret: String,
        token_ttl: Duration,
        admin_email: String,
        admin_password_hash: String,
    ) -> Self {
        Self {
            jwt_secret,
            token_ttl,
            admin_email,
            admin_password_hash,
        }
    }

    pub fn from_app_config(cfg: &crate::config::AppConfig) -> Self {
        Self::new(
            cfg.jwt_secret.clone(),
            Duration::from_secs(cfg.token_ttl_seconds),
            cfg.admin_email.clone(),
            cfg.admin_password_hash.clone(),
        )
    }
}

/// Issues and verifies credentials.
#[derive(Clone)]
pub struct AuthService {
    config: AuthConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl AuthService {
    pub fn new(config: AuthConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());
        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Issue an administrative credential.
    pub fn issue_admin(&self, email: &str) -> Result<String, ServiceError> {
        self.issue(Role::Admin, None, email)
    }

    /// Issue a customer credential.
    pub fn issue_customer(&self, customer: &customer::Model) -> Result<String, ServiceError> {
        self.issue(
            Role::Customer,
            Some(customer.customer_id.clone()),
            &customer.email,
        )
    }

    fn issue(
        &self,
        role: Role,
        customer_id: Option<String>,
        email: &str,
    ) -> Result<String, ServiceError> {
        let now = Utc::now();
        let ttl = ChronoDuration::from_std(self.config.token_ttl)
            .map_err(|_| ServiceError::DataError("token TTL out of range".into()))?;

        let claims = Claims {
            role,
            customer_id,
            email: email.to_owned(),
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| ServiceError::DataError(format!("failed to sign token: {e}")))
    }

    /// Validate a token and extract its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, ServiceError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    ServiceError::Unauthorized("Token expired".into())
                }
                _ => ServiceError::Unauthorized("Invalid token".into()),
            })
    }

    /// Check submitted credentials against the configured administrative
    /// account. The password goes through the Argon2 verifier, so there is
    /// no plaintext comparison on this path.
    pub fn is_admin_login(&self, email: &str, password: &str) -> Result<bool, ServiceError> {
        if email != self.config.admin_email {
            return Ok(false);
        }
        verify_password(password, &self.config.admin_password_hash)
    }
}

/// Hash a password with Argon2id and a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, ServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ServiceError::DataError(format!("failed to hash password: {e}")))
}

/// Verify a password against a stored PHC string. Returns `Ok(false)` on
/// mismatch; a hash that cannot be parsed is corrupt stored data.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, ServiceError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| ServiceError::DataError(format!("stored password hash is invalid: {e}")))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(ServiceError::DataError(format!(
            "password verification failed: {e}"
        ))),
    }
}

fn claims_from_parts(parts: &Parts, state: &AppState) -> Result<Claims, ServiceError> {
    let header_value = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ServiceError::Unauthorized("Missing authorization token".into()))?;

    let token = header_value
        .strip_prefix("Bearer ")
        .ok_or_else(|| ServiceError::Unauthorized("Malformed authorization header".into()))?
        .trim();

    state.auth.verify(token)
}

/// Extractor for any valid bearer credential.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Claims);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ServiceError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        claims_from_parts(parts, state).map(Self)
    }
}

/// Extractor for a valid bearer credential carrying the admin role.
#[derive(Debug, Clone)]
pub struct AdminUser(pub Claims);

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ServiceError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = claims_from_parts(parts, state)?;
        if !claims.is_admin() {
            return Err(ServiceError::Forbidden(
                "Administrator access required".into(),
            ));
        }
        Ok(Self(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(ttl: Duration) -> AuthService {
        AuthService::new(AuthConfig::new(
            "unit-test-secret-key-that-is-long-enough".into(),
            ttl,
            "admin@dealership.test".into(),
            hash_password("admin-password").unwrap(),
        ))
    }

    fn sample_customer() -> customer::Model {
        let now = Utc::now();
        customer::Model {
            customer_id: "C42".into(),
            username: "jdoe".into(),
            first_name: "Jo".into(),
            last_name: "Doe".into(),
            email: "jo@example.com".into(),
            phone: "555-0100".into(),
            password_hash: "unused".into(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn password_hash_round_trip() {
        let hash = hash_password("hunter2").unwrap();
        assert!(verify_password("hunter2", &hash).unwrap());
        assert!(!verify_password("hunter3", &hash).unwrap());
    }

    #[test]
    fn corrupt_stored_hash_is_a_data_error() {
        assert!(matches!(
            verify_password("whatever", "not-a-phc-string"),
            Err(ServiceError::DataError(_))
        ));
    }

    #[test]
    fn customer_token_round_trips_claims() {
        let auth = service(Duration::from_secs(3600));
        let token = auth.issue_customer(&sample_customer()).unwrap();
        let claims = auth.verify(&token).unwrap();

        assert_eq!(claims.role, Role::Customer);
        assert_eq!(claims.customer_id.as_deref(), Some("C42"));
        assert_eq!(claims.email, "jo@example.com");
        assert!(claims.can_access_customer("C42"));
        assert!(!claims.can_access_customer("C43"));
    }

    #[test]
    fn admin_token_carries_no_customer_identity() {
        let auth = service(Duration::from_secs(3600));
        let token = auth.issue_admin("admin@dealership.test").unwrap();
        let claims = auth.verify(&token).unwrap();

        assert_eq!(claims.role, Role::Admin);
        assert!(claims.customer_id.is_none());
        assert!(claims.can_access_customer("C1"));
    }

    #[test]
    fn expired_token_is_rejected() {
        let auth = service(Duration::from_secs(3600));
        let now = Utc::now();
        let stale = Claims {
            role: Role::Customer,
            customer_id: Some("C1".into()),
            email: "jo@example.com".into(),
            jti: Uuid::new_v4().to_string(),
            iat: (now - ChronoDuration::hours(2)).timestamp(),
            exp: (now - ChronoDuration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &stale,
            &EncodingKey::from_secret("unit-test-secret-key-that-is-long-enough".as_bytes()),
        )
        .unwrap();

        assert!(matches!(
            auth.verify(&token),
            Err(ServiceError::Unauthorized(_))
        ));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let auth = service(Duration::from_secs(3600));
        let other = AuthService::new(AuthConfig::new(
            "a-completely-different-secret-key-value".into(),
            Duration::from_secs(3600),
            "admin@dealership.test".into(),
            "x".into(),
        ));
        let token = other.issue_admin("admin@dealership.test").unwrap();

        assert!(matches!(
            auth.verify(&token),
            Err(ServiceError::Unauthorized(_))
        ));
    }

    #[test]
    fn admin_login_requires_both_fields_to_match() {
        let auth = service(Duration::from_secs(3600));
        assert!(auth
            .is_admin_login("admin@dealership.test", "admin-password")
            .unwrap());
        assert!(!auth
            .is_admin_login("admin@dealership.test", "wrong")
            .unwrap());
        assert!(!auth
            .is_admin_login("someone@else.test", "admin-password")
            .unwrap());
    }
}
