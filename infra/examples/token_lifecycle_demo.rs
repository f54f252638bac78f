//! Example walking a token through its full lifecycle against MySQL
//!
//! Requires a reachable database with the jwt_blacklist table applied.
//! Run with: cargo run --example token_lifecycle_demo

use std::sync::Arc;

use tg_core::services::token::{RevocationSweeper, SweeperConfig, TokenService, TokenServiceConfig};
use tg_infra::bootstrap;
use tg_infra::database::{DatabasePool, MySqlRevocationStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load .env and assemble configuration
    let config = bootstrap::load_environment();

    let pool = DatabasePool::new(config.database.clone()).await?;
    pool.health_check().await?;

    let store = MySqlRevocationStore::new(pool.get_pool().clone());
    let service = TokenService::new(store, TokenServiceConfig::from(config.jwt.clone()));

    println!("\n=== Issue ===");
    let token = service.issue(42)?;
    println!("Issued token for subject 42: {}...", &token[..32.min(token.len())]);

    println!("\n=== Validate ===");
    println!("validate = {}", service.validate(&token).await?);

    println!("\n=== Decode ===");
    if let Some(claims) = service.decode(&token) {
        println!("sub = {}, iat = {}, exp = {}", claims.sub, claims.iat, claims.exp);
    }

    println!("\n=== Revoke ===");
    println!("revoke = {}", service.revoke(&token).await?);
    println!("revoke again (idempotent) = {}", service.revoke(&token).await?);
    println!("validate after revoke = {}", service.validate(&token).await?);

    println!("\n=== Sweep ===");
    let sweeper_store = Arc::new(MySqlRevocationStore::new(pool.get_pool().clone()));
    let sweeper = RevocationSweeper::new(sweeper_store, SweeperConfig::default());
    let result = sweeper.run_sweep().await?;
    println!("pruned {} expired records", result.records_pruned);

    pool.close().await;
    Ok(())
}
