//! Unit tests for the token service

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::domain::entities::token::{Claims, RevokedToken};
use crate::errors::{DomainError, TokenError};
use crate::repositories::{MockRevocationStore, RevocationStore};
use crate::services::token::{TokenService, TokenServiceConfig};

const TEST_SECRET: &str = "unit-test-secret";

fn test_config() -> TokenServiceConfig {
    TokenServiceConfig {
        secret: TEST_SECRET.to_string(),
        ttl_hours: 24,
    }
}

fn test_service() -> TokenService<MockRevocationStore> {
    TokenService::new(MockRevocationStore::new(), test_config())
}

/// Sign arbitrary claims with the test secret, bypassing the service
fn sign_claims(claims: &Claims) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}

/// Corrupt the first byte of the signature segment
fn tamper_signature(token: &str) -> String {
    let (head, sig) = token.rsplit_once('.').unwrap();
    let mut sig_bytes: Vec<u8> = sig.bytes().collect();
    sig_bytes[0] = if sig_bytes[0] == b'A' { b'B' } else { b'A' };
    format!("{}.{}", head, String::from_utf8(sig_bytes).unwrap())
}

/// Revocation store that fails every operation, simulating an outage
struct FailingStore;

#[async_trait]
impl RevocationStore for FailingStore {
    async fn insert(&self, _record: RevokedToken) -> Result<(), DomainError> {
        Err(DomainError::Store {
            message: "connection refused".to_string(),
        })
    }

    async fn contains(&self, _token: &str) -> Result<bool, DomainError> {
        Err(DomainError::Store {
            message: "connection refused".to_string(),
        })
    }

    async fn prune_expired(&self) -> Result<usize, DomainError> {
        Err(DomainError::Store {
            message: "connection refused".to_string(),
        })
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Err(DomainError::Store {
            message: "connection refused".to_string(),
        })
    }
}

#[tokio::test]
async fn issued_token_validates() {
    let service = test_service();

    let token = service.issue(123).unwrap();

    assert!(service.validate(&token).await.unwrap());
}

#[tokio::test]
async fn decode_returns_subject_id() {
    let service = test_service();

    let token = service.issue(42).unwrap();
    let claims = service.decode(&token).unwrap();

    assert_eq!(claims.sub, 42);
    assert!(claims.exp > claims.iat);
}

#[tokio::test]
async fn check_pinpoints_rejection_reason() {
    let service = test_service();

    let now = Utc::now().timestamp();
    let stale = sign_claims(&Claims {
        sub: 3,
        iat: now - 7200,
        exp: now - 3600,
    });
    assert!(matches!(
        service.check(&stale).await,
        Err(DomainError::Token(TokenError::Expired))
    ));

    assert!(matches!(
        service.check("garbage").await,
        Err(DomainError::Token(TokenError::InvalidFormat))
    ));

    let revoked = service.issue(4).unwrap();
    service.revoke(&revoked).await.unwrap();
    assert!(matches!(
        service.check(&revoked).await,
        Err(DomainError::Token(TokenError::Revoked))
    ));

    let good = service.issue(5).unwrap();
    assert_eq!(service.check(&good).await.unwrap().sub, 5);
}

#[tokio::test]
async fn subject_of_extracts_user_id() {
    let service = test_service();

    let token = service.issue(7).unwrap();

    assert_eq!(service.subject_of(&token), Some(7));
    assert_eq!(service.subject_of("not-a-token"), None);
}

#[tokio::test]
async fn expired_token_is_invalid_but_still_decodes() {
    let service = test_service();

    // Craft a token that expired an hour ago
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: 5,
        iat: now - 7200,
        exp: now - 3600,
    };
    let token = sign_claims(&claims);

    assert!(!service.validate(&token).await.unwrap());

    // Decode verifies signature only, so the payload is still readable
    let decoded = service.decode(&token).unwrap();
    assert_eq!(decoded.sub, 5);
}

#[tokio::test]
async fn malformed_token_reports_invalid_not_error() {
    let service = test_service();

    assert!(!service.validate("garbage").await.unwrap());
    assert!(!service.validate("").await.unwrap());
    assert!(!service.validate("a.b.c").await.unwrap());
    assert!(service.decode("garbage").is_none());
}

#[tokio::test]
async fn tampered_signature_rejected() {
    let service = test_service();

    let token = service.issue(9).unwrap();
    let tampered = tamper_signature(&token);

    assert!(!service.validate(&tampered).await.unwrap());
    assert!(service.decode(&tampered).is_none());
}

#[tokio::test]
async fn token_signed_with_other_secret_rejected() {
    let service = test_service();

    let claims = Claims::new(1, chrono::Duration::hours(1));
    let foreign = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"some-other-secret"),
    )
    .unwrap();

    assert!(!service.validate(&foreign).await.unwrap());
    assert!(service.decode(&foreign).is_none());
}

#[tokio::test]
async fn revoked_token_fails_validation_before_expiry() {
    let service = test_service();

    let token = service.issue(11).unwrap();
    assert!(service.validate(&token).await.unwrap());

    assert!(service.revoke(&token).await.unwrap());

    assert!(!service.validate(&token).await.unwrap());
}

#[tokio::test]
async fn revoke_is_idempotent() {
    let service = test_service();

    let token = service.issue(12).unwrap();

    assert!(service.revoke(&token).await.unwrap());
    assert!(service.revoke(&token).await.unwrap());

    assert!(!service.validate(&token).await.unwrap());
}

#[tokio::test]
async fn revoke_malformed_token_is_noop_failure() {
    let service = test_service();

    assert!(!service.revoke("not-a-jwt").await.unwrap());

    // Nothing was recorded
    assert_eq!(service.store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn revocation_record_expires_with_its_token() {
    let service = test_service();

    // An already-expired token can still be revoked; decode ignores expiry
    let now = Utc::now().timestamp();
    let stale = sign_claims(&Claims {
        sub: 13,
        iat: now - 7200,
        exp: now - 3600,
    });
    let active = service.issue(14).unwrap();

    assert!(service.revoke(&stale).await.unwrap());
    assert!(service.revoke(&active).await.unwrap());

    // The stale record mirrors its token's past expiry, so a prune drops
    // it while the active record survives
    assert_eq!(service.store.prune_expired().await.unwrap(), 1);
    assert!(!service.store.contains(&stale).await.unwrap());
    assert!(service.store.contains(&active).await.unwrap());
}

#[tokio::test]
async fn revoking_one_token_leaves_others_valid() {
    let service = test_service();

    let first = service.issue(20).unwrap();
    let second = service.issue(21).unwrap();

    service.revoke(&first).await.unwrap();

    assert!(!service.validate(&first).await.unwrap());
    assert!(service.validate(&second).await.unwrap());
}

#[tokio::test]
async fn store_outage_surfaces_as_error_not_invalid() {
    let service = TokenService::new(FailingStore, test_config());

    let token = service.issue(30).unwrap();

    // "Could not check" must be distinguishable from "token rejected"
    assert!(matches!(
        service.validate(&token).await,
        Err(DomainError::Store { .. })
    ));
    assert!(matches!(
        service.revoke(&token).await,
        Err(DomainError::Store { .. })
    ));

    // Issuance and decoding never touch the store
    assert!(service.issue(31).is_ok());
    assert!(service.decode(&token).is_some());
}
