use serde::{Deserialize, Serialize};

/// Question sent to the Q&A endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

impl AskRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }
}

/// Answer from the Q&A endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    /// Generated answer text
    pub answer: String,

    /// Retrieved excerpts the answer was grounded on; may be absent or null
    #[serde(default)]
    pub context: Option<Vec<String>>,
}

impl AskResponse {
    /// The excerpt shown next to the answer. Only the first one is displayed.
    pub fn primary_context(&self) -> Option<&str> {
        self.context
            .as_deref()
            .and_then(|snippets| snippets.first())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let json = serde_json::to_value(AskRequest::new("what is 6 * 7?")).unwrap();
        assert_eq!(json, serde_json::json!({ "question": "what is 6 * 7?" }));
    }

    #[test]
    fn test_primary_context_is_first_snippet() {
        let resp: AskResponse =
            serde_json::from_str(r#"{"answer":"42","context":["ctx-A","ctx-B"]}"#).unwrap();
        assert_eq!(resp.answer, "42");
        assert_eq!(resp.primary_context(), Some("ctx-A"));
    }

    #[test]
    fn test_missing_or_empty_context() {
        let absent: AskResponse = serde_json::from_str(r#"{"answer":"x"}"#).unwrap();
        assert_eq!(absent.primary_context(), None);

        let null: AskResponse = serde_json::from_str(r#"{"answer":"x","context":null}"#).unwrap();
        assert_eq!(null.primary_context(), None);

        let empty: AskResponse = serde_json::from_str(r#"{"answer":"x","context":[]}"#).unwrap();
        assert_eq!(empty.primary_context(), None);
    }

    #[test]
    fn test_answer_is_required() {
        assert!(serde_json::from_str::<AskResponse>(r#"{"context":["a"]}"#).is_err());
    }
}
