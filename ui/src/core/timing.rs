//! Frame timing for client-side animations.
//!
//! Wasm uses `performance.now()`, `requestAnimationFrame` and `gloo-timers`;
//! native builds (server rendering, tests) fall back to a monotonic clock and
//! `tokio::time`.

/// Approximate display frame interval.
pub const FRAME_MS: u64 = 16;

#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use once_cell::sync::Lazy;
    use std::time::Instant;

    static ORIGIN: Lazy<Instant> = Lazy::new(Instant::now);
    ORIGIN.elapsed().as_secs_f64() * 1000.0
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Resolve on the next animation frame.
///
/// Falls back to a [`FRAME_MS`] timeout when there is no window or the
/// request is refused.
#[cfg(target_arch = "wasm32")]
pub async fn next_frame() {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    /// Cancels the request if the awaiting task is dropped first, so the
    /// browser never calls into a freed closure.
    struct FrameRequest {
        window: web_sys::Window,
        id: i32,
        _callback: Closure<dyn FnMut(f64)>,
    }

    impl Drop for FrameRequest {
        fn drop(&mut self) {
            let _ = self.window.cancel_animation_frame(self.id);
        }
    }

    let Some(window) = web_sys::window() else {
        return sleep_ms(FRAME_MS).await;
    };

    let (tx, rx) = futures_channel::oneshot::channel::<()>();
    let callback = Closure::once(move |_timestamp: f64| {
        let _ = tx.send(());
    });
    let Ok(id) = window.request_animation_frame(callback.as_ref().unchecked_ref()) else {
        return sleep_ms(FRAME_MS).await;
    };

    let _request = FrameRequest {
        window,
        id,
        _callback: callback,
    };
    let _ = rx.await;
}

/// Wait roughly one frame.
#[cfg(not(target_arch = "wasm32"))]
pub async fn next_frame() {
    sleep_ms(FRAME_MS).await;
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn clock_is_monotonic() {
        let a = now_ms();
        let b = now_ms();
        assert!(b >= a);
    }

    #[tokio::test]
    async fn next_frame_waits_at_least_one_frame() {
        let start = now_ms();
        next_frame().await;
        assert!(now_ms() - start >= FRAME_MS as f64 - 1.0);
    }
}
