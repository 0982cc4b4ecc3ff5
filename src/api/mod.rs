//! Console API Bindings
//!
//! HTTP wrappers for the console's REST endpoints, organized by domain.

mod content;
mod datasource;
mod forms;

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ConsoleConfig;
use crate::error::{FetchError, SubmissionError};

pub use content::*;
pub use datasource::*;
pub use forms::*;

/// Thin HTTP client bound to the console origin
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    timeout: Duration,
    csrf_token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            http: build_http(config.request_timeout),
            base_url: config.api_base.trim_end_matches('/').to_string(),
            timeout: config.request_timeout,
            csrf_token: None,
        }
    }

    /// Attach the session's CSRF token for mutating requests
    pub fn with_csrf_token(mut self, token: impl Into<String>) -> Self {
        self.csrf_token = Some(token.into());
        self
    }

    /// Build the full URL for an endpoint
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET returning the raw body of a 2xx response
    pub async fn get_text(&self, path: &str, query: &[(&str, String)]) -> Result<String, FetchError> {
        let request = self.http.get(self.url(path)).query(query);
        let (status, body) = self.exchange(request).await?;

        if !status.is_success() {
            log::warn!(target: "api", "[API] GET {} -> {}", path, status);
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(body)
    }

    /// GET a JSON document
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let body = self.get_text(path, query).await?;
        serde_json::from_str(&body).map_err(|e| FetchError::Envelope(e.to_string()))
    }

    /// Form-encoded POST carrying `X-CSRF-Token`. A failure's plain-text
    /// body decides the submission error.
    pub async fn post_form<T: Serialize + ?Sized>(&self, path: &str, form: &T) -> Result<String, SubmissionError> {
        let mut request = self.http.post(self.url(path)).form(form);
        if let Some(token) = &self.csrf_token {
            request = request.header("X-CSRF-Token", token);
        }
        let (status, body) = self.exchange(request).await?;

        if status.is_success() {
            log::info!(target: "api", "[API] POST {} ok", path);
            Ok(body)
        } else {
            log::warn!(target: "api", "[API] POST {} -> {}: {}", path, status, body.trim());
            Err(SubmissionError::from_body(&body))
        }
    }

    /// Send and read the whole body under one deadline
    async fn exchange(&self, request: RequestBuilder) -> Result<(StatusCode, String), FetchError> {
        let timeout_ms = self.timeout.as_millis() as u64;
        let exchange = async {
            let response = request.send().await?;
            let status = response.status();
            let body = response.text().await?;
            Ok::<_, reqwest::Error>((status, body))
        };
        match with_deadline(exchange, self.timeout).await {
            Some(Ok(reply)) => Ok(reply),
            Some(Err(err)) if err.is_timeout() => Err(FetchError::Timeout(timeout_ms)),
            Some(Err(err)) => Err(FetchError::Transport(err.to_string())),
            None => Err(FetchError::Timeout(timeout_ms)),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http(timeout: Duration) -> Client {
    Client::builder().timeout(timeout).build().unwrap_or_else(|err| {
        log::warn!(target: "api", "[API] falling back to default client: {}", err);
        Client::new()
    })
}

#[cfg(target_arch = "wasm32")]
fn build_http(_timeout: Duration) -> Client {
    Client::new()
}

/// The native client enforces its own timeout
#[cfg(not(target_arch = "wasm32"))]
async fn with_deadline<F: Future>(fut: F, _timeout: Duration) -> Option<F::Output> {
    Some(fut.await)
}

/// Race the request against a browser timer; `None` when the timer wins
#[cfg(target_arch = "wasm32")]
async fn with_deadline<F: Future>(fut: F, timeout: Duration) -> Option<F::Output> {
    use futures::future::{select, Either};

    let timer = gloo_timers::future::sleep(timeout);
    match select(Box::pin(fut), Box::pin(timer)).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(_) => None,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Answers one request with headers and half a body, then goes quiet
    fn stalled_body_server() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 2048];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(
                    b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 64\r\n\r\n{\"iTotal",
                );
                let _ = stream.flush();
                thread::sleep(Duration::from_secs(3));
            }
        });
        format!("http://{}", addr)
    }

    fn client(base: String) -> ApiClient {
        ApiClient::new(&ConsoleConfig {
            api_base: base,
            request_timeout: Duration::from_millis(300),
            ..ConsoleConfig::default()
        })
    }

    #[tokio::test]
    async fn test_stalled_body_times_out() {
        let api = client(stalled_body_server());
        let err = api.get_text("/api/systems.json", &[]).await.unwrap_err();
        assert_eq!(err, FetchError::Timeout(300));
    }

    #[tokio::test]
    async fn test_stalled_body_fails_form_post() {
        let api = client(stalled_body_server());
        let err = api
            .post_form("/api/systeminfo.json", &[("Comment", "x")])
            .await
            .unwrap_err();
        assert_eq!(err, SubmissionError::from(FetchError::Timeout(300)));
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let api = client("http://console.local/".into());
        assert_eq!(api.url("/api/help"), "http://console.local/api/help");
    }
}
