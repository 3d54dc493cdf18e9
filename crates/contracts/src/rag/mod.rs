//! Wire contracts of the document Q&A service
//!
//! The page talks to two endpoints:
//! - `POST /ingest` - multipart upload of one document (field `file`)
//! - `POST /ask` - JSON question, JSON answer with optional context excerpts

pub mod ask;
pub mod ingest;

pub use ask::{AskRequest, AskResponse};
pub use ingest::IngestResponse;

/// Route of the ingestion endpoint
pub const INGEST_PATH: &str = "/ingest";

/// Route of the question-answering endpoint
pub const ASK_PATH: &str = "/ask";

/// Name of the multipart field carrying the uploaded document
pub const INGEST_FILE_FIELD: &str = "file";
