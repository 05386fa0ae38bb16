use dioxus::prelude::*;

use crate::animation::{Fade, RunOnce};
use crate::core::timing;

/// Fades its children in after `delay_ms` (client side, once).
#[component]
pub fn FadeIn(
    #[props(default = 0)] delay_ms: u64,
    #[props(default = 600)] duration_ms: u64,
    #[props(into, default)] class: String,
    children: Element,
) -> Element {
    let mut opacity = use_signal(|| 0.0_f64);
    let mut run_once = use_signal(RunOnce::default);

    use_effect(move || {
        if !run_once.with_mut(|guard| guard.try_start()) {
            return;
        }
        spawn(async move {
            let fade = Fade::new(delay_ms as f64, duration_ms as f64);
            let started = timing::now_ms();
            loop {
                let elapsed = timing::now_ms() - started;
                opacity.set(fade.opacity_at(elapsed));
                if fade.is_finished(elapsed) {
                    break;
                }
                timing::next_frame().await;
            }
        });
    });

    let style = format!("opacity: {:.3}", opacity());

    rsx! {
        div {
            class: "fade-in {class}",
            style,
            {children}
        }
    }
}
