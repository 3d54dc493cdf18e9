//! Chat transcript: ordered, append-only list of bubbles
//!
//! The only entries ever taken out are loading placeholders, removed by id
//! once their question resolves, and everything at once on [`Transcript::reset`].

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Ai,
}

impl Sender {
    pub fn css_class(self) -> &'static str {
        match self {
            Sender::User => "user-message",
            Sender::Ai => "ai-message",
        }
    }

    pub fn avatar(self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Ai => "AI",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBody {
    Text {
        text: String,
        /// Context snippet shown under an AI answer
        context: Option<String>,
    },
    Loading,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Unique within the page lifetime, also used as the DOM id
    pub id: String,
    pub sender: Sender,
    pub body: MessageBody,
}

impl ChatMessage {
    pub fn text(&self) -> Option<&str> {
        match &self.body {
            MessageBody::Text { text, .. } => Some(text),
            MessageBody::Loading => None,
        }
    }

    pub fn context(&self) -> Option<&str> {
        match &self.body {
            MessageBody::Text { context, .. } => context.as_deref(),
            MessageBody::Loading => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.body, MessageBody::Loading)
    }
}

/// Handle of a loading placeholder
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LoadingId(String);

impl LoadingId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    // never reset, so ids stay unique across clears
    next_seq: u64,
}

impl Transcript {
    pub fn with_greeting(greeting: &str) -> Self {
        let mut transcript = Self::default();
        transcript.push_ai(greeting, None);
        transcript
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn loading_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_loading()).count()
    }

    pub fn push_user(&mut self, text: &str) {
        let id = self.next_id("msg");
        self.messages.push(ChatMessage {
            id,
            sender: Sender::User,
            body: MessageBody::Text {
                text: text.to_string(),
                context: None,
            },
        });
    }

    pub fn push_ai(&mut self, text: &str, context: Option<&str>) {
        let id = self.next_id("msg");
        self.messages.push(ChatMessage {
            id,
            sender: Sender::Ai,
            body: MessageBody::Text {
                text: text.to_string(),
                context: context.map(str::to_string),
            },
        });
    }

    /// Append a "Thinking..." bubble; `now_ms` is the current unix time in milliseconds
    pub fn push_loading(&mut self, now_ms: i64) -> LoadingId {
        let id = self.next_id(&format!("loading-{}", now_ms));
        self.messages.push(ChatMessage {
            id: id.clone(),
            sender: Sender::Ai,
            body: MessageBody::Loading,
        });
        LoadingId(id)
    }

    /// Returns false when the placeholder is already gone (e.g. chat was cleared)
    pub fn remove(&mut self, id: &LoadingId) -> bool {
        let before = self.messages.len();
        self.messages.retain(|m| !(m.is_loading() && m.id == id.0));
        self.messages.len() != before
    }

    pub fn reset(&mut self, greeting: &str) {
        self.messages.clear();
        self.push_ai(greeting, None);
    }

    fn next_id(&mut self, prefix: &str) -> String {
        let seq = self.next_seq;
        self.next_seq += 1;
        format!("{}-{}", prefix, seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_transcript() {
        let t = Transcript::with_greeting("hi");
        assert_eq!(t.len(), 1);
        let first = &t.messages()[0];
        assert_eq!(first.sender, Sender::Ai);
        assert_eq!(first.text(), Some("hi"));
        assert_eq!(first.context(), None);
    }

    #[test]
    fn test_loading_ids_unique_within_same_millisecond() {
        let mut t = Transcript::default();
        let a = t.push_loading(1_700_000_000_000);
        let b = t.push_loading(1_700_000_000_000);
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("loading-1700000000000-"));
        assert_eq!(t.loading_count(), 2);
    }

    #[test]
    fn test_remove_out_of_order() {
        let mut t = Transcript::default();
        t.push_user("first");
        let a = t.push_loading(1);
        t.push_user("second");
        let b = t.push_loading(2);

        assert!(t.remove(&b));
        assert_eq!(t.loading_count(), 1);
        assert!(t.remove(&a));
        assert_eq!(t.loading_count(), 0);
        assert_eq!(t.len(), 2);
        assert!(!t.remove(&a));
    }

    #[test]
    fn test_remove_only_touches_placeholders() {
        let mut t = Transcript::default();
        t.push_user("q");
        let user_id = LoadingId(t.messages()[0].id.clone());
        assert!(!t.remove(&user_id));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn test_reset_keeps_ids_unique() {
        let mut t = Transcript::with_greeting("hi");
        let old_id = t.messages()[0].id.clone();
        t.push_user("q");
        t.push_loading(5);
        t.reset("cleared");

        assert_eq!(t.len(), 1);
        assert_eq!(t.messages()[0].text(), Some("cleared"));
        assert_eq!(t.messages()[0].sender, Sender::Ai);
        assert_ne!(t.messages()[0].id, old_id);
        assert_eq!(t.loading_count(), 0);
    }
}
