use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Arbitrary key/value metadata attached to a stored text item. Opaque to the
/// client; key order is preserved as received.
pub type Metadata = Map<String, Value>;

/// Body of `POST /vectors/add`. `texts` and `metadata` are positionally
/// paired and must have the same length.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AddVectorsRequest {
    pub texts: Vec<String>,
    pub metadata: Vec<Metadata>,
}

/// Success body of `POST /vectors/add`; `ids[i]` names `texts[i]`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AddVectorsResponse {
    pub ids: Vec<String>,
}

/// Body of `POST /vectors/search`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SearchRequest {
    pub query: String,
    pub k: i64,
}

/// One ranked match. `text` and `distance` are fixed fields; every other key
/// the service returns lands in `metadata` via the flatten.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SearchHit {
    pub text: String,
    pub distance: f64,
    #[serde(flatten)]
    pub metadata: Metadata,
}

/// Success body of `POST /vectors/search`. Result order is the service's;
/// the client does not re-sort.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SearchResponse {
    pub results: Vec<SearchHit>,
}

/// Body returned by the service on any non-2xx status.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorResponse {
    pub detail: String,
}
