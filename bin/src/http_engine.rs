use std::time::Duration;

use reqwest::{Client, Response};
use tracing::{debug, instrument};
use wordle_assistant::{EngineError, SolverEngine, Suggestion, WireGuess};

/// Talks to a solving engine over HTTP.
///
/// `POST {base}/play` takes the encoded history as JSON and answers with the suggestions.
/// `POST {base}/reset` drops the engine's session.
#[derive(Debug, Clone)]
pub struct HttpEngine {
    client: Client,
    base_url: String,
}

impl HttpEngine {
    pub fn new(base_url: &str, timeout: Duration) -> reqwest::Result<HttpEngine> {
        Ok(HttpEngine {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

impl SolverEngine for HttpEngine {
    #[instrument(skip_all, fields(guesses = history.len()))]
    async fn query(&self, history: &[WireGuess]) -> Result<Vec<Suggestion>, EngineError> {
        let response = self
            .client
            .post(self.endpoint("play"))
            .json(history)
            .send()
            .await
            .map_err(transport_error)?;
        let response = check_status(response).await?;
        let suggestions = response
            .json::<Vec<Suggestion>>()
            .await
            .map_err(|err| {
                if err.is_decode() {
                    EngineError::Malformed(err.to_string())
                } else {
                    transport_error(err)
                }
            })?;
        debug!(count = suggestions.len(), "decoded suggestions");
        Ok(suggestions)
    }

    #[instrument(skip_all)]
    async fn reset(&self) -> Result<(), EngineError> {
        let response = self
            .client
            .post(self.endpoint("reset"))
            .send()
            .await
            .map_err(transport_error)?;
        check_status(response).await?;
        Ok(())
    }
}

fn transport_error(err: reqwest::Error) -> EngineError {
    EngineError::Transport(err.to_string())
}

/// Turns an unsuccessful response into [`EngineError::Rejected`], using the body as the reason
/// when there is one.
async fn check_status(response: Response) -> Result<Response, EngineError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let reason = match body.trim() {
        "" => status.to_string(),
        text => text.to_string(),
    };
    Err(EngineError::Rejected(reason))
}
