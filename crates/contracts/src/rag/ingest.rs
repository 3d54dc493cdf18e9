use serde::Serialize;

/// Body of a successful ingestion response
///
/// The page only needs to know the upload succeeded, so any JSON body is
/// accepted and the server's `message` is kept when it is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestResponse {
    pub message: Option<String>,
}

impl From<serde_json::Value> for IngestResponse {
    fn from(value: serde_json::Value) -> Self {
        let message = value
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string);
        Self { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_server_message() {
        let resp = IngestResponse::from(json!({ "message": "Ingested 3 chunks from report.pdf." }));
        assert_eq!(
            resp.message.as_deref(),
            Some("Ingested 3 chunks from report.pdf.")
        );
    }

    #[test]
    fn test_any_json_is_accepted() {
        assert_eq!(IngestResponse::from(json!([1, 2, 3])), IngestResponse::default());
        assert_eq!(IngestResponse::from(json!({ "message": 7 })).message, None);
        assert_eq!(IngestResponse::from(json!(null)).message, None);
    }
}
