use async_trait::async_trait;

use crate::shared::DomainError;

/// Source of the bearer token attached to backend calls.
///
/// The identity provider itself is external; `Ok(None)` means "send the
/// request unauthenticated".
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<Option<String>, DomainError>;
}
