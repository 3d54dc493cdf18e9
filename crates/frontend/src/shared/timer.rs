//! Delays used by the page (auto-hiding the status banner)

use async_trait::async_trait;

#[async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, ms: u32);
}

/// Timer backed by `setTimeout`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

#[async_trait(?Send)]
impl Timer for BrowserTimer {
    async fn sleep(&self, ms: u32) {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
}
