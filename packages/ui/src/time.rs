use std::time::Duration;

/// Sleep on the platform's timer.
pub async fn sleep_ms(ms: u64) {
    let duration = Duration::from_millis(ms);
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
