//! Document Q&A page - View Model
//!
//! `PageController` owns the page state as signals and runs the two flows:
//! - upload: info status → `POST /ingest` → success (auto-hides) or error
//! - chat: user bubble → loading bubble → `POST /ask` → loading removed → answer or error bubble
//!
//! The endpoints and the timer are injected, so both flows run without a browser.

use super::model::{RagApi, UploadSource};
use super::status::{StatusBanner, StatusMessage};
use super::transcript::Transcript;
use crate::shared::config::PageConfig;
use crate::shared::error::ApiError;
use crate::shared::timer::Timer;
use leptos::prelude::*;

pub const ERROR_REPLY: &str = "Sorry, I encountered an error.";
pub const NETWORK_ERROR_REPLY: &str = "Network error. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Success status shown at this banner revision
    Ingested { revision: u64 },
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatOutcome {
    Answered,
    /// Non-2xx from the Q&A endpoint
    Rejected,
    /// Transport failure or unreadable answer
    Unreachable,
}

#[derive(Clone)]
pub struct PageController<A, T> {
    api: A,
    timer: T,
    config: PageConfig,
    pub transcript: RwSignal<Transcript>,
    pub status: RwSignal<StatusBanner>,
    pub question: RwSignal<String>,
    pub drag_over: RwSignal<bool>,
}

impl<A, T> PageController<A, T>
where
    A: RagApi,
    T: Timer,
{
    pub fn new(api: A, timer: T, config: PageConfig) -> Self {
        Self {
            api,
            timer,
            transcript: RwSignal::new(Transcript::with_greeting(&config.greeting)),
            status: RwSignal::new(StatusBanner::default()),
            question: RwSignal::new(String::new()),
            drag_over: RwSignal::new(false),
            config,
        }
    }

    pub fn set_drag_over(&self, active: bool) {
        if self.drag_over.get_untracked() != active {
            self.drag_over.set(active);
        }
    }

    /// Full upload flow, including the success auto-hide
    pub async fn upload(&self, file: A::File) -> UploadOutcome {
        let outcome = self.ingest_file(&file).await;
        if let UploadOutcome::Ingested { revision } = outcome {
            self.expire_status(revision).await;
        }
        outcome
    }

    pub async fn ingest_file(&self, file: &A::File) -> UploadOutcome {
        let name = file.file_name();
        self.show_status(StatusMessage::uploading(&name));

        match self.api.ingest(file).await {
            Ok(response) => {
                log::info!(
                    "ingested {}: {}",
                    name,
                    response.message.as_deref().unwrap_or("no message")
                );
                let revision = self.show_status(StatusMessage::ingested(&name));
                UploadOutcome::Ingested { revision }
            }
            Err(e) => {
                log::error!("upload of {} failed: {}", name, e);
                self.show_status(StatusMessage::upload_failed());
                UploadOutcome::Failed
            }
        }
    }

    /// Wait out the success delay, then hide the banner if it still shows `revision`
    pub async fn expire_status(&self, revision: u64) {
        self.timer.sleep(self.config.success_hide_ms).await;
        self.status.update(|banner| {
            banner.hide_if_current(revision);
        });
    }

    /// Chat flow. `None` when the input is blank: nothing is sent or changed.
    pub async fn submit_question(&self) -> Option<ChatOutcome> {
        let question = self.question.with_untracked(|q| q.trim().to_string());
        if question.is_empty() {
            return None;
        }

        self.transcript.update(|t| t.push_user(&question));
        self.question.set(String::new());
        let mut loading = None;
        self.transcript
            .update(|t| loading = Some(t.push_loading(chrono::Utc::now().timestamp_millis())));

        let result = self.api.ask(&question).await;

        self.transcript.update(|t| {
            let removed = loading.as_ref().is_some_and(|id| t.remove(id));
            if !removed {
                log::debug!("loading placeholder for {:?} already gone", question);
            }
        });

        let outcome = match result {
            Ok(response) => {
                log::debug!("answer received for {:?}", question);
                self.transcript
                    .update(|t| t.push_ai(&response.answer, response.primary_context()));
                ChatOutcome::Answered
            }
            Err(ApiError::Http { status }) => {
                log::warn!("ask failed with HTTP {}", status);
                self.transcript.update(|t| t.push_ai(ERROR_REPLY, None));
                ChatOutcome::Rejected
            }
            Err(e) => {
                log::error!("ask failed: {}", e);
                self.transcript.update(|t| t.push_ai(NETWORK_ERROR_REPLY, None));
                ChatOutcome::Unreachable
            }
        };
        Some(outcome)
    }

    pub fn clear_chat(&self) {
        let greeting = self.config.cleared_greeting.clone();
        self.transcript.update(|t| t.reset(&greeting));
    }

    fn show_status(&self, message: StatusMessage) -> u64 {
        self.status
            .try_update(|banner| banner.show(message))
            .unwrap_or_default()
    }
}
