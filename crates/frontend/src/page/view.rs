//! Document Q&A page - View Component

use super::chat_panel::ChatPanel;
use super::upload_panel::UploadPanel;
use super::BrowserPageController;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn RagPage(controller: StoredValue<BrowserPageController>) -> impl IntoView {
    view! {
        <main class="rag-page">
            <header class="rag-page__header">
                <h1>"Local Agentic RAG"</h1>
                <p>"Upload documents, then ask questions grounded in them."</p>
            </header>
            <div class="rag-page__body">
                <UploadPanel controller=controller />
                <ChatPanel controller=controller />
            </div>
        </main>
    }
}
