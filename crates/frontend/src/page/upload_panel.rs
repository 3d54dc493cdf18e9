use super::BrowserPageController;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{DragEvent, HtmlInputElement};

/// Drop zone, hidden file input and the upload status banner
#[component]
pub fn UploadPanel(controller: StoredValue<BrowserPageController>) -> impl IntoView {
    let file_input_ref = NodeRef::<leptos::html::Input>::new();
    let status = controller.with_value(|c| c.status);
    let drag_over = controller.with_value(|c| c.drag_over);

    let start_upload = move |file: web_sys::File| {
        let ctrl = controller.get_value();
        spawn_local(async move {
            ctrl.upload(file).await;
        });
    };

    let set_drag_over = move |active: bool| controller.with_value(|c| c.set_drag_over(active));

    view! {
        <section class="upload-panel">
            <h2>"Knowledge base"</h2>
            <div
                id="drop-zone"
                class=move || if drag_over.get() { "drop-zone dragover" } else { "drop-zone" }
                on:click=move |_| {
                    if let Some(input) = file_input_ref.get() {
                        input.click();
                    }
                }
                on:dragenter=move |ev: DragEvent| {
                    ev.prevent_default();
                    set_drag_over(true);
                }
                // without preventDefault here the browser never fires `drop`
                on:dragover=move |ev: DragEvent| {
                    ev.prevent_default();
                    set_drag_over(true);
                }
                on:dragleave=move |_| set_drag_over(false)
                on:drop=move |ev: DragEvent| {
                    ev.prevent_default();
                    set_drag_over(false);
                    let file = ev
                        .data_transfer()
                        .and_then(|dt| dt.files())
                        .and_then(|files| files.get(0));
                    if let Some(file) = file {
                        start_upload(file);
                    }
                }
            >
                <p class="drop-zone__title">"Drag & drop a document here"</p>
                <p class="drop-zone__hint">"or click to browse"</p>
            </div>
            <input
                type="file"
                id="file-input"
                style="display: none;"
                node_ref=file_input_ref
                on:change=move |ev| {
                    let input: HtmlInputElement = event_target(&ev);
                    if let Some(file) = input.files().and_then(|files| files.get(0)) {
                        start_upload(file);
                    }
                    // allow picking the same file again
                    input.set_value("");
                }
            />
            <div id="upload-status" class=move || status.with(|s| s.css_class())>
                {move || status.with(|s| s.current().map(|m| m.text.clone()).unwrap_or_default())}
            </div>
        </section>
    }
}
