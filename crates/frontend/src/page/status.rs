//! Upload status banner: one slot, overwritten by every upload action

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

impl StatusKind {
    pub fn css_class(self) -> &'static str {
        match self {
            StatusKind::Info => "info",
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn uploading(file_name: &str) -> Self {
        Self {
            text: format!("Uploading {}...", file_name),
            kind: StatusKind::Info,
        }
    }

    pub fn ingested(file_name: &str) -> Self {
        Self {
            text: format!("Success: {} ingested!", file_name),
            kind: StatusKind::Success,
        }
    }

    pub fn upload_failed() -> Self {
        Self {
            text: "Error uploading file.".to_string(),
            kind: StatusKind::Error,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBanner {
    current: Option<StatusMessage>,
    revision: u64,
}

impl StatusBanner {
    pub fn current(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    /// Replace whatever is shown; returns the revision of the new message
    pub fn show(&mut self, message: StatusMessage) -> u64 {
        self.revision += 1;
        self.current = Some(message);
        self.revision
    }

    /// Hide a success message, unless something newer replaced it
    pub fn hide_if_current(&mut self, revision: u64) -> bool {
        let is_same_success = revision == self.revision
            && matches!(&self.current, Some(m) if m.kind == StatusKind::Success);
        if is_same_success {
            self.current = None;
        }
        is_same_success
    }

    pub fn css_class(&self) -> String {
        match &self.current {
            Some(m) => format!("status-message visible {}", m.kind.css_class()),
            None => "status-message hidden".to_string(),
        }
    }
}
