use crate::{
    envelope::{Request, Response},
    error::{Error, TransportError},
    pending::{Misrouted, PendingCalls},
    transport::Transport,
};
use async_trait::async_trait;
use ethrpc_backend::{JsonRpcClient, RpcParams};
use ethrpc_types::DecodeError;
use serde::de::DeserializeOwned;
use serde_json::value::RawValue;
use std::{
    fmt::{Debug, Formatter},
    sync::Arc,
};

/// JSON-RPC client correlating responses to calls by id, any number of calls may be in flight.
pub struct RpcClient<T> {
    inner: Arc<Inner<T>>,
}

struct Inner<T> {
    transport: T,
    pending: PendingCalls,
}

impl<T> Clone for RpcClient<T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T> Debug for RpcClient<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcClient")
            .field("transport", &self.inner.transport)
            .field("pending", &self.inner.pending)
            .finish()
    }
}

impl<T> RpcClient<T>
where
    T: Transport + 'static,
{
    pub fn new(transport: T) -> Self {
        Self { inner: Arc::new(Inner { transport, pending: PendingCalls::new() }) }
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.inner.transport
    }

    /// Number of calls still waiting for a response.
    #[must_use]
    pub fn pending_calls(&self) -> usize {
        self.inner.pending.len()
    }

    /// Calls `method` and returns the undecoded `result` member.
    ///
    /// The round trip runs on its own task, dropping the returned future doesn't leave the call
    /// behind in the pending table.
    ///
    /// # Errors
    /// Returns [`Error::Rpc`] if the node answered with an error object, [`Error::Transport`] if
    /// the round trip failed and [`Error::UnknownResponseId`] if the body answered another id.
    pub async fn request_raw(
        &self,
        method: &str,
        params: RpcParams,
    ) -> Result<Box<RawValue>, Error> {
        let (id, receiver) = self.inner.pending.register();
        let body = match serde_json::to_string(&Request::new(id, method, params.as_raw())) {
            Ok(body) => body,
            Err(error) => {
                self.inner.pending.cancel(id);
                return Err(TransportError::Encode(error).into());
            },
        };
        log::debug!("{method} {params} (id {id})");

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move { inner.round_trip(id, body).await });

        match receiver.await {
            Ok(result) => result,
            Err(_) => Err(TransportError::Dispatch(format!("request {id} was dropped")).into()),
        }
    }
}

impl<T> Inner<T>
where
    T: Transport,
{
    async fn round_trip(&self, id: u64, body: String) {
        let body = match self.transport.send(body).await {
            Ok(body) => body,
            Err(error) => {
                log::warn!("request {id} failed: {error}");
                self.pending.fail(id, error.into());
                return;
            },
        };

        let response = match Response::parse(&body) {
            Ok(response) => response,
            Err(error) => {
                log::warn!("malformed response to request {id}: {error}");
                self.pending.fail(id, TransportError::Malformed(error).into());
                return;
            },
        };

        if response.id.is_none() {
            log::warn!("response to request {id} has a null id");
        }
        // Each body answers the request it came with, an envelope naming another call is never
        // delivered to that call.
        if let Err(Misrouted { found, .. }) = self.pending.resolve(id, response) {
            log::error!("response to request {id} carries id {found}");
            self.pending.fail(id, Error::UnknownResponseId(found));
        }
    }
}

#[async_trait]
impl<T> JsonRpcClient for RpcClient<T>
where
    T: Transport + 'static,
{
    type Error = Error;

    async fn request<R>(&self, method: &str, params: RpcParams) -> Result<R, Self::Error>
    where
        R: DeserializeOwned + Send,
    {
        let result = self.request_raw(method, params).await?;
        serde_json::from_str(result.get())
            .map_err(|error| DecodeError::Json(format!("{method}: {error}")).into())
    }
}
