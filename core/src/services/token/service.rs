//! Main token service implementation

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{Claims, RevokedToken};
use crate::errors::{DomainError, TokenError};
use crate::repositories::RevocationStore;

use super::config::TokenServiceConfig;

/// Service for issuing, validating, decoding, and revoking JWT tokens
///
/// All operations are stateless with respect to each other except through
/// the shared revocation store. A token moves through
/// `issued -> {valid-and-active | expired | revoked}`; revoked is terminal
/// and independent of expiry.
pub struct TokenService<S: RevocationStore> {
    pub(crate) store: S,
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    /// Full validation: signature and expiry
    validation: Validation,
    /// Signature-only validation used by `decode` and `revoke`
    signature_validation: Validation,
}

impl<S: RevocationStore> TokenService<S> {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `store` - Revocation store for blacklist persistence
    /// * `config` - Token service configuration
    pub fn new(store: S, config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        let mut signature_validation = Validation::new(Algorithm::HS256);
        signature_validation.validate_exp = false;
        signature_validation.leeway = 0;

        Self {
            store,
            config,
            encoding_key,
            decoding_key,
            validation,
            signature_validation,
        }
    }

    /// Issues a signed token for a subject
    ///
    /// Builds a payload with `iat = now` and `exp = now + TTL` and signs it
    /// with the configured secret. No side effects beyond returning the
    /// signed string.
    ///
    /// # Arguments
    ///
    /// * `subject_id` - The subject (user) identifier to embed
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The signed token
    /// * `Err(DomainError)` - Signing failed
    pub fn issue(&self, subject_id: i64) -> Result<String, DomainError> {
        let claims = Claims::new(subject_id, self.config.ttl());
        let header = Header::new(Algorithm::HS256);
        encode(&header, &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::GenerationFailed))
    }

    /// Verifies a token fully and returns its claims
    ///
    /// Checks signature, expiry, and the blacklist, in that order. The
    /// error pinpoints the rejection reason; `DomainError::Store` means
    /// the token was not judged at all.
    ///
    /// # Arguments
    ///
    /// * `token` - The token string to verify
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if the token is acceptable
    /// * `Err(DomainError)` - Token rejected, or the store was unreachable
    pub async fn check(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::InvalidFormat,
            })?;

        if self.store.contains(token).await? {
            return Err(TokenError::Revoked.into());
        }

        Ok(token_data.claims)
    }

    /// Validates a token against signature, expiry, and the blacklist
    ///
    /// Malformed structure, bad signature, expiry, and revocation all
    /// report `Ok(false)`; the operation never errors for a false token.
    /// `Err` is reserved for revocation store failures, so callers can
    /// distinguish "token rejected" from "could not check token".
    ///
    /// # Arguments
    ///
    /// * `token` - The token string to validate
    pub async fn validate(&self, token: &str) -> Result<bool, DomainError> {
        match self.check(token).await {
            Ok(_) => Ok(true),
            Err(DomainError::Token(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Decodes a token, verifying the signature only
    ///
    /// Expiry and revocation are ignored; the caller gets the payload of
    /// any structurally valid, correctly signed token. Use `validate` to
    /// judge whether the token is currently acceptable.
    ///
    /// # Arguments
    ///
    /// * `token` - The token string to decode
    ///
    /// # Returns
    ///
    /// The payload claims, or `None` for malformed or badly signed input
    pub fn decode(&self, token: &str) -> Option<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.signature_validation)
            .ok()
            .map(|data| data.claims)
    }

    /// Extracts the subject identifier from a token
    ///
    /// Convenience accessor over `decode`.
    pub fn subject_of(&self, token: &str) -> Option<i64> {
        self.decode(token).map(|claims| claims.sub)
    }

    /// Revokes a token by recording it in the blacklist
    ///
    /// The revocation record carries the token's own expiry so it can be
    /// pruned once the token would have expired anyway. Idempotent:
    /// revoking an already-revoked token succeeds. A token that cannot be
    /// decoded is a no-op that reports `Ok(false)`.
    ///
    /// # Arguments
    ///
    /// * `token` - The token string to revoke
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - Token is now revoked (or already was)
    /// * `Ok(false)` - Token malformed, nothing recorded
    /// * `Err(DomainError)` - Store unreachable or write failed
    pub async fn revoke(&self, token: &str) -> Result<bool, DomainError> {
        let claims = match self.decode(token) {
            Some(claims) => claims,
            None => return Ok(false),
        };

        let expires_at = claims.expires_at().ok_or_else(|| DomainError::Internal {
            message: "Invalid expiry timestamp".to_string(),
        })?;

        self.store
            .insert(RevokedToken::new(token.to_string(), expires_at))
            .await?;

        Ok(true)
    }
}
