pub mod client;
pub mod models;
pub mod render;

pub use client::{VectorDbClient, VectorDbError};
pub use models::{
    AddVectorsRequest, AddVectorsResponse, ErrorResponse, Metadata, SearchHit, SearchRequest,
    SearchResponse,
};
