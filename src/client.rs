use crate::models::{
    AddVectorsRequest, AddVectorsResponse, ErrorResponse, Metadata, SearchHit, SearchRequest,
    SearchResponse,
};
use log::debug;
use reqwest::blocking::{Client, Response};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VectorDbError {
    /// Network failure or a response body that could not be decoded.
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    /// User-supplied metadata text that is not valid JSON. Raised before any
    /// network call.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// Non-2xx status; carries the service's own `detail` string verbatim.
    #[error("{detail}")]
    Service { detail: String },
    #[error("texts and metadata must have the same length (got {texts} and {metadata})")]
    LengthMismatch { texts: usize, metadata: usize },
    #[error("service response did not include an id")]
    MissingId,
}

pub struct VectorDbClient {
    base_url: String,
    http: Client,
}

impl VectorDbClient {
    pub fn new(base_url: &str) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ingest one text item with its metadata; returns the assigned id.
    pub fn add(&self, text: &str, metadata: Metadata) -> Result<String, VectorDbError> {
        let ids = self.add_batch(vec![text.to_string()], vec![metadata])?;
        ids.into_iter().next().ok_or(VectorDbError::MissingId)
    }

    /// Ingest one text item with metadata given as raw JSON text. The
    /// metadata is parsed locally first; malformed input never reaches the
    /// wire. Empty input means `{}`.
    pub fn add_json(&self, text: &str, metadata_json: &str) -> Result<String, VectorDbError> {
        let trimmed = metadata_json.trim();
        let metadata: Metadata = if trimmed.is_empty() {
            Metadata::new()
        } else {
            serde_json::from_str(trimmed)?
        };
        self.add(text, metadata)
    }

    /// Ingest several positionally paired text/metadata items in one call.
    pub fn add_batch(
        &self,
        texts: Vec<String>,
        metadata: Vec<Metadata>,
    ) -> Result<Vec<String>, VectorDbError> {
        if texts.len() != metadata.len() {
            return Err(VectorDbError::LengthMismatch {
                texts: texts.len(),
                metadata: metadata.len(),
            });
        }

        let url = format!("{}/vectors/add", self.base_url);
        let req = AddVectorsRequest { texts, metadata };
        debug!("POST {} ({} texts)", url, req.texts.len());
        let resp = self.http.post(&url).json(&req).send()?;
        let resp = check_status(resp)?;

        let body: AddVectorsResponse = resp.json()?;
        Ok(body.ids)
    }

    /// Nearest-neighbor text query bounded to `k` results. Hits come back in
    /// the order the service ranked them; the client does not re-sort.
    pub fn search(&self, query: &str, k: i64) -> Result<Vec<SearchHit>, VectorDbError> {
        let url = format!("{}/vectors/search", self.base_url);
        let req = SearchRequest {
            query: query.to_string(),
            k,
        };
        debug!("POST {} (k={})", url, k);
        let resp = self.http.post(&url).json(&req).send()?;
        let resp = check_status(resp)?;

        let body: SearchResponse = resp.json()?;
        Ok(body.results)
    }

    /// Service liveness probe.
    pub fn health(&self) -> Result<(), VectorDbError> {
        let url = format!("{}/health", self.base_url);
        debug!("GET {}", url);
        let resp = self.http.get(&url).send()?;
        check_status(resp)?;
        Ok(())
    }
}

/// 2xx passes the response through; anything else is decoded as an
/// `ErrorResponse` and surfaced as a service error. A failure body that is
/// not the expected shape falls back to the status line.
fn check_status(resp: Response) -> Result<Response, VectorDbError> {
    let status = resp.status();
    debug!("response status {}", status);
    if status.is_success() {
        return Ok(resp);
    }
    let detail = resp
        .json::<ErrorResponse>()
        .map(|e| e.detail)
        .unwrap_or_else(|_| format!("service returned {}", status));
    Err(VectorDbError::Service { detail })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = VectorDbClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn length_mismatch_is_rejected_locally() {
        let client = VectorDbClient::new("http://localhost:8000");
        let err = client
            .add_batch(vec!["a".into(), "b".into()], vec![Metadata::new()])
            .unwrap_err();
        assert!(matches!(
            err,
            VectorDbError::LengthMismatch {
                texts: 2,
                metadata: 1
            }
        ));
    }
}
