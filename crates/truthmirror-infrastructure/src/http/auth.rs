use async_trait::async_trait;

use truthmirror_domain::auth::AccessTokenProvider;
use truthmirror_domain::shared::DomainError;

/// Token handed over by the identity provider at startup
#[derive(Debug, Clone, Default)]
pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<Option<String>, DomainError> {
        Ok(self.token.clone())
    }
}
