//! Document Q&A page - Model (API functions)

use crate::shared::api_utils::api_url;
use crate::shared::config::PageConfig;
use crate::shared::error::ApiError;
use async_trait::async_trait;
use contracts::rag::{AskRequest, AskResponse, IngestResponse, INGEST_FILE_FIELD};
use gloo_net::http::Request;

/// A user-selected document, identified to the user by its name
pub trait UploadSource {
    fn file_name(&self) -> String;
}

impl UploadSource for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }
}

/// The two endpoints the page talks to
#[async_trait(?Send)]
pub trait RagApi {
    type File: UploadSource;

    async fn ingest(&self, file: &Self::File) -> Result<IngestResponse, ApiError>;

    async fn ask(&self, question: &str) -> Result<AskResponse, ApiError>;
}

/// `RagApi` over the browser's `fetch`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRagApi {
    ingest_url: String,
    ask_url: String,
}

impl HttpRagApi {
    pub fn new(config: &PageConfig) -> Self {
        Self {
            ingest_url: api_url(&config.api_base, &config.ingest_path),
            ask_url: api_url(&config.api_base, &config.ask_path),
        }
    }
}

#[async_trait(?Send)]
impl RagApi for HttpRagApi {
    type File = web_sys::File;

    /// Multipart upload of one document
    async fn ingest(&self, file: &web_sys::File) -> Result<IngestResponse, ApiError> {
        use web_sys::FormData;

        let form_data = FormData::new().map_err(|e| ApiError::decode(format!("{e:?}")))?;
        form_data
            .append_with_blob_and_filename(INGEST_FILE_FIELD, file, &file.name())
            .map_err(|e| ApiError::decode(format!("{e:?}")))?;

        let response = Request::post(&self.ingest_url)
            .body(form_data)
            .map_err(ApiError::decode)?
            .send()
            .await
            .map_err(ApiError::network)?;

        if !response.ok() {
            return Err(ApiError::Http {
                status: response.status(),
            });
        }

        let body: serde_json::Value = response.json().await.map_err(ApiError::decode)?;
        Ok(IngestResponse::from(body))
    }

    /// JSON question, JSON answer
    async fn ask(&self, question: &str) -> Result<AskResponse, ApiError> {
        let request = AskRequest::new(question);

        let response = Request::post(&self.ask_url)
            .json(&request)
            .map_err(ApiError::decode)?
            .send()
            .await
            .map_err(ApiError::network)?;

        if !response.ok() {
            return Err(ApiError::Http {
                status: response.status(),
            });
        }

        response.json::<AskResponse>().await.map_err(ApiError::decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_follow_config() {
        let api = HttpRagApi::new(&PageConfig::default());
        assert_eq!(api.ingest_url, "/ingest");
        assert_eq!(api.ask_url, "/ask");

        let api = HttpRagApi::new(&PageConfig::default().with_api_base("http://localhost:8000/"));
        assert_eq!(api.ingest_url, "http://localhost:8000/ingest");
        assert_eq!(api.ask_url, "http://localhost:8000/ask");
    }
}
