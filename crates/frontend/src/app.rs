use crate::page::{HttpRagApi, PageController, RagPage};
use crate::shared::config::PageConfig;
use crate::shared::timer::BrowserTimer;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = PageConfig::load();
    let api = HttpRagApi::new(&config);
    log::debug!("endpoints: {:?}", api);

    // One controller per page load, shared by both panels
    let controller = StoredValue::new(PageController::new(api, BrowserTimer, config));

    view! {
        <RagPage controller=controller />
    }
}
