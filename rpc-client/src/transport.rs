use crate::error::TransportError;
use async_trait::async_trait;

/// Carries one serialized request to the node and returns the raw response body.
#[async_trait]
#[auto_impl::auto_impl(&, Arc, Box)]
pub trait Transport: Send + Sync {
    async fn send(&self, request: String) -> Result<String, TransportError>;
}
