//! Integration tests driving the token lifecycle through the public API

use std::sync::Arc;

use tg_core::domain::entities::token::RevokedToken;
use tg_core::repositories::{MockRevocationStore, RevocationStore};
use tg_core::services::token::{
    RevocationSweeper, SweeperConfig, TokenService, TokenServiceConfig,
};

fn test_service() -> TokenService<MockRevocationStore> {
    TokenService::new(
        MockRevocationStore::new(),
        TokenServiceConfig {
            secret: "integration-test-secret".to_string(),
            ttl_hours: 1,
        },
    )
}

#[tokio::test]
async fn full_lifecycle_issue_validate_revoke() {
    let service = test_service();

    let token = service.issue(1001).unwrap();

    assert!(service.validate(&token).await.unwrap());
    assert_eq!(service.subject_of(&token), Some(1001));

    assert!(service.revoke(&token).await.unwrap());
    assert!(!service.validate(&token).await.unwrap());

    // Revocation is terminal; the payload stays readable
    assert_eq!(service.decode(&token).unwrap().sub, 1001);
}

#[tokio::test]
async fn sweeper_and_service_share_a_store() {
    let store = Arc::new(MockRevocationStore::new());

    // Seed a record that would have expired already
    store
        .insert(RevokedToken::new(
            "expired-token",
            chrono::Utc::now() - chrono::Duration::hours(2),
        ))
        .await
        .unwrap();

    let sweeper = RevocationSweeper::new(store.clone(), SweeperConfig::default());
    let result = sweeper.run_sweep().await.unwrap();

    assert_eq!(result.records_pruned, 1);
    assert_eq!(store.count().await.unwrap(), 0);
}
