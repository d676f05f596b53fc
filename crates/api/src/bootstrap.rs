//! Startup seeding of the chef account.

use patisserie_core::identity::ROLE_CHEF;
use patisserie_core::model::user::DEFAULT_AVATAR;
use patisserie_core::model::User;
use patisserie_core::types::{new_id, now};
use patisserie_store::{JsonStore, StoreError};

use crate::auth::password::hash_password;
use crate::config::ServerConfig;
use crate::error::AppError;

/// Ensure the chef account exists.
///
/// Creates it from `CHEF_USERNAME` / `CHEF_PASSWORD` when no chef-role
/// account is present yet. A no-op when one already exists (the configured
/// password is NOT applied to an existing account). When `CHEF_PASSWORD`
/// is unset the step is skipped with a warning -- the service still runs,
/// but no one can decide reservations.
pub async fn ensure_chef_account(store: &JsonStore, config: &ServerConfig) -> Result<(), AppError> {
    let has_chef = store
        .read()
        .await
        .users
        .iter()
        .any(|u| u.role == ROLE_CHEF);
    if has_chef {
        return Ok(());
    }

    let Some(password) = &config.chef_password else {
        tracing::warn!("No chef account exists and CHEF_PASSWORD is unset; skipping bootstrap");
        return Ok(());
    };

    let password_hash = hash_password(password)
        .map_err(|e| AppError::Internal(format!("Password hashing error: {e}")))?;
    let username = config.chef_username.clone();

    store
        .with_transaction(move |snapshot| {
            // Re-check under the transaction lock.
            if snapshot.users.iter().any(|u| u.role == ROLE_CHEF) {
                return Ok(());
            }
            snapshot.users.push(User {
                id: new_id(),
                username,
                password_hash,
                role: ROLE_CHEF.to_string(),
                avatar: DEFAULT_AVATAR.to_string(),
                created_at: now(),
            });
            Ok::<_, StoreError>(())
        })
        .await?;

    tracing::info!(username = %config.chef_username, "Chef account created");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::JwtConfig;

    fn test_config(chef_password: Option<&str>) -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
            cors_origins: vec!["http://localhost:5173".into()],
            request_timeout_secs: 30,
            data_file: "unused".into(),
            jwt: JwtConfig {
                secret: "test-secret".into(),
                access_token_expiry_mins: 60,
            },
            chef_username: "jochef".into(),
            chef_password: chef_password.map(String::from),
        }
    }

    #[tokio::test]
    async fn test_creates_chef_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("db.json")).unwrap();
        let config = test_config(Some("super-secret-28"));

        ensure_chef_account(&store, &config).await.unwrap();
        ensure_chef_account(&store, &config).await.unwrap();

        let snapshot = store.read().await;
        let chefs: Vec<_> = snapshot.users.iter().filter(|u| u.role == ROLE_CHEF).collect();
        assert_eq!(chefs.len(), 1);
        assert_eq!(chefs[0].username, "jochef");
    }

    #[tokio::test]
    async fn test_skips_without_password() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("db.json")).unwrap();

        ensure_chef_account(&store, &test_config(None)).await.unwrap();

        assert!(store.read().await.users.is_empty());
    }
}
