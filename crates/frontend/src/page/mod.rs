//! Document Q&A page (MVVM)
//!
//! Structure:
//! - model.rs: `RagApi` and its fetch implementation
//! - transcript.rs / status.rs: plain state behind the signals
//! - view_model.rs: `PageController` with the upload and chat flows
//! - view.rs, upload_panel.rs, chat_panel.rs: components

mod chat_panel;
pub mod model;
pub mod status;
pub mod transcript;
mod upload_panel;
mod view;
pub mod view_model;

pub use model::{HttpRagApi, RagApi, UploadSource};
pub use view::RagPage;
pub use view_model::{ChatOutcome, PageController, UploadOutcome};

use crate::shared::timer::BrowserTimer;

/// The controller as mounted in the browser
pub type BrowserPageController = PageController<HttpRagApi, BrowserTimer>;
