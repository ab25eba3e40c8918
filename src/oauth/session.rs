use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::request::Parts;
use tower_sessions::Session;

use crate::error::AuthError;

/// Session key under which the serialized flow state lives between the begin
/// and callback legs.
pub const FLOW_SESSION_KEY: &str = "_oauth_flow";

/// Uniform get/set/delete/save contract over whatever session mechanism backs
/// the server. Mutations persist only after `save`.
#[async_trait]
pub trait SessionAccessor: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, AuthError>;
    async fn set(&self, key: &str, value: String) -> Result<(), AuthError>;
    async fn delete(&self, key: &str) -> Result<(), AuthError>;
    async fn save(&self) -> Result<(), AuthError>;
}

/// Adapter over `tower_sessions::Session`.
pub struct TowerSession(pub Session);

#[async_trait]
impl SessionAccessor for TowerSession {
    async fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        Ok(self.0.get::<String>(key).await?)
    }

    async fn set(&self, key: &str, value: String) -> Result<(), AuthError> {
        self.0.insert(key, value).await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), AuthError> {
        self.0.remove::<String>(key).await?;
        Ok(())
    }

    async fn save(&self) -> Result<(), AuthError> {
        self.0.save().await?;
        Ok(())
    }
}

/// Resolves the request-scoped session accessor. Handlers take the store
/// through this extractor so the client wrapper never sees the web layer's
/// session type directly.
pub struct FlowStore(pub Box<dyn SessionAccessor>);

impl<S> FromRequestParts<S> for FlowStore
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|_| (StatusCode::BAD_REQUEST, "session store unavailable"))?;
        Ok(FlowStore(Box::new(TowerSession(session))))
    }
}
