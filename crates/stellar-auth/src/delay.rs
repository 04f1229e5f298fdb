//! Injectable artificial-latency source.

use std::time::Duration;

use async_trait::async_trait;

/// The artificial delay emulating a backend round trip. Injected so test
/// suites can run without real waiting.
#[async_trait]
pub trait Delay: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Production delay backed by the tokio timer.
#[derive(Debug, Default)]
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Completes immediately. For tests and headless tooling.
#[derive(Debug, Default)]
pub struct NoopDelay;

#[async_trait]
impl Delay for NoopDelay {
    async fn sleep(&self, _duration: Duration) {}
}
