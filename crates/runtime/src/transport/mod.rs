//! HTTP transport for the W3C request/response contract.
//!
//! One [`Transport`] per server endpoint; every call unwraps the
//! `{"value": …}` envelope and classifies error payloads into [`Error`].

use std::time::Duration;

use appdrive_protocol::{Envelope, WireError};
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::trace;
use url::Url;

use crate::endpoint::Endpoint;
use crate::error::{Error, Result};


/// Upper bound on any single round-trip to the server. Client-side waits
/// poll many short requests instead of holding one long one.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client bound to one automation-server endpoint.
#[derive(Debug, Clone)]
pub struct Transport {
	client: Client,
	base: Url,
	label: String,
}

impl Transport {
	/// # Errors
	///
	/// Returns [`Error::Config`] if the endpoint does not form a valid URL.
	pub fn new(endpoint: &Endpoint) -> Result<Self> {
		let base = endpoint.base_url()?;
		let client = Client::builder()
			.timeout(REQUEST_TIMEOUT)
			.connect_timeout(CONNECT_TIMEOUT)
			.build()
			.map_err(Error::Http)?;
		Ok(Self {
			client,
			base,
			label: endpoint.to_string(),
		})
	}

	pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
		let body = serde_json::to_value(body)?;
		self.send(Method::POST, path, Some(body)).await
	}

	pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
		self.send(Method::GET, path, None).await
	}

	pub async fn delete(&self, path: &str) -> Result<()> {
		self.send::<serde_json::Value>(Method::DELETE, path, None)
			.await
			.map(|_| ())
	}

	async fn send<T: DeserializeOwned>(
		&self,
		method: Method,
		path: &str,
		body: Option<serde_json::Value>,
	) -> Result<T> {
		let url = self
			.base
			.join(path)
			.map_err(|err| Error::Config(format!("invalid request path {path}: {err}")))?;
		trace!(target: "appdrive.transport", %method, %url, "request");

		let mut request = self.client.request(method, url);
		if let Some(body) = &body {
			request = request.json(body);
		}
		let response = request.send().await.map_err(|err| self.classify(err))?;

		let status = response.status();
		let payload: serde_json::Value = response.json().await.map_err(Error::Http)?;
		if status.is_success() {
			let envelope: Envelope<T> = serde_json::from_value(payload)?;
			Ok(envelope.value)
		} else {
			Err(match serde_json::from_value::<Envelope<WireError>>(payload.clone()) {
				Ok(envelope) => Error::from_wire(envelope.value),
				Err(_) => Error::Wire {
					error: format!("http {status}"),
					message: payload.to_string(),
				},
			})
		}
	}

	fn classify(&self, err: reqwest::Error) -> Error {
		if err.is_timeout() {
			Error::Timeout {
				ms: REQUEST_TIMEOUT.as_millis() as u64,
				condition: "automation server response".into(),
			}
		} else if err.is_connect() {
			Error::ServerUnreachable {
				endpoint: self.label.clone(),
				source: err,
			}
		} else {
			Error::Http(err)
		}
	}
}
