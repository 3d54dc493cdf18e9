use super::transcript::{ChatMessage, MessageBody};
use super::BrowserPageController;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::SubmitEvent;

#[component]
pub fn ChatPanel(controller: StoredValue<BrowserPageController>) -> impl IntoView {
    let transcript = controller.with_value(|c| c.transcript);
    let question = controller.with_value(|c| c.question);
    let history_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest bubble in view
    Effect::new(move |_| {
        transcript.track();
        if let Some(history) = history_ref.get() {
            request_animation_frame(move || {
                history.set_scroll_top(history.scroll_height());
            });
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let ctrl = controller.get_value();
        spawn_local(async move {
            ctrl.submit_question().await;
        });
    };

    view! {
        <section class="chat-panel">
            <Flex
                justify=FlexJustify::SpaceBetween
                align=FlexAlign::Center
                style="padding-bottom: 12px; border-bottom: 1px solid var(--colorNeutralStroke2);"
            >
                <h2>"Chat"</h2>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| controller.with_value(|c| c.clear_chat())
                >
                    "Clear chat"
                </Button>
            </Flex>

            <div id="chat-history" class="chat-history" node_ref=history_ref>
                <For
                    each=move || transcript.with(|t| t.messages().to_vec())
                    key=|message| message.id.clone()
                    let:message
                >
                    <MessageBubble message=message />
                </For>
            </div>

            <form id="chat-form" class="chat-form" on:submit=on_submit>
                <input
                    id="user-input"
                    type="text"
                    autocomplete="off"
                    placeholder="Ask a question about your documents..."
                    bind:value=question
                />
                <button type="submit" class="send-btn">"Send"</button>
            </form>
        </section>
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let class = format!("message {}", message.sender.css_class());
    let avatar = message.sender.avatar();
    let id = message.id;

    let body = match message.body {
        MessageBody::Loading => {
            view! { <span class="typing-indicator">"Thinking..."</span> }.into_any()
        }
        MessageBody::Text { text, context } => view! {
            <div class="bubble__text">{text}</div>
            {context.map(|snippet| view! {
                <div class="context-box">
                    <span class="context-title">"Context used:"</span>
                    {snippet}
                </div>
            })}
        }
        .into_any(),
    };

    view! {
        <div class=class id=id>
            <div class="avatar">{avatar}</div>
            <div class="bubble">{body}</div>
        </div>
    }
}
