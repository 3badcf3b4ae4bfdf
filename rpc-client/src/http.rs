//! JSON-RPC over HTTP(S), one POST per call.
use crate::{config::ClientConfig, error::TransportError, transport::Transport};
use async_trait::async_trait;
use hyper::{
    body::HttpBody,
    client::{HttpConnector, ResponseFuture},
    header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE},
    Body, Client, Method, Request, Uri,
};
use hyper_tls::HttpsConnector;
use std::time::Duration;

/// Longest error body kept in [`TransportError::Status`].
const MAX_ERROR_BODY: usize = 512;

#[derive(Debug, Clone)]
enum HyperClient {
    Http(Client<HttpConnector, Body>),
    Https(Client<HttpsConnector<HttpConnector>, Body>),
}

impl HyperClient {
    fn request(&self, request: Request<Body>) -> ResponseFuture {
        match self {
            Self::Http(client) => client.request(request),
            Self::Https(client) => client.request(request),
        }
    }
}

/// [`Transport`] posting each request to a JSON-RPC endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: HyperClient,
    uri: Uri,
    timeout: Option<Duration>,
    max_response_size: usize,
    headers: HeaderMap,
}

impl HttpTransport {
    /// # Errors
    /// Returns [`TransportError::InvalidRequest`] if the url or a header can't be used in an http
    /// request, or if the TLS backend can't be initialized.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let uri = config
            .url
            .as_str()
            .parse::<Uri>()
            .map_err(|error| TransportError::InvalidRequest(error.to_string()))?;

        let mut headers = HeaderMap::with_capacity(config.headers.len());
        for (name, value) in &config.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|error| {
                TransportError::InvalidRequest(format!("invalid header name {name:?}: {error}"))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|error| {
                TransportError::InvalidRequest(format!("invalid value of header {name}: {error}"))
            })?;
            headers.append(header_name, header_value);
        }

        let client = match uri.scheme_str() {
            Some("https") => {
                let tls = native_tls::TlsConnector::new().map_err(|error| {
                    TransportError::InvalidRequest(format!("failed to initialize tls: {error}"))
                })?;
                let mut http = HttpConnector::new();
                http.enforce_http(false);
                let connector = HttpsConnector::from((http, tls.into()));
                HyperClient::Https(Client::builder().build(connector))
            },
            _ => HyperClient::Http(Client::builder().build(HttpConnector::new())),
        };

        Ok(Self {
            client,
            uri,
            timeout: config.timeout,
            max_response_size: config.max_response_size,
            headers,
        })
    }

    #[must_use]
    pub const fn uri(&self) -> &Uri {
        &self.uri
    }

    async fn post(&self, body: String) -> Result<String, TransportError> {
        let mut request = Request::builder()
            .method(Method::POST)
            .uri(self.uri.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .map_err(|error| TransportError::InvalidRequest(error.to_string()))?;
        request.headers_mut().extend(self.headers.clone());

        let response = self.client.request(request).await?;
        let status = response.status();
        let body = read_body(response.into_body(), self.max_response_size).await?;

        if !status.is_success() {
            let body = truncate(String::from_utf8_lossy(&body).into_owned(), MAX_ERROR_BODY);
            log::warn!("{} answered with status {status}: {body}", self.uri);
            return Err(TransportError::Status { status: status.as_u16(), body });
        }
        String::from_utf8(body).map_err(|_| TransportError::InvalidUtf8)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: String) -> Result<String, TransportError> {
        match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, self.post(request))
                .await
                .map_err(|_| TransportError::Timeout(timeout))?,
            None => self.post(request).await,
        }
    }
}

/// Reads the whole body, failing as soon as it grows past `limit` bytes.
async fn read_body(mut body: Body, limit: usize) -> Result<Vec<u8>, TransportError> {
    let mut bytes = Vec::with_capacity(usize::try_from(body.size_hint().lower()).unwrap_or(0));
    while let Some(chunk) = body.data().await {
        let chunk = chunk?;
        if bytes.len() + chunk.len() > limit {
            return Err(TransportError::ResponseTooLarge { limit });
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

fn truncate(mut text: String, max: usize) -> String {
    if text.len() > max {
        let mut end = max;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        text.truncate(end);
        text.push_str("...");
    }
    text
}
