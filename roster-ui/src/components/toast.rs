//! Toast notifications, stacked in the top-right corner

use crate::components::button::{Button, ButtonVariant, ChromelessButton};
use crate::components::icons::{AlertTriangleIcon, CheckCircleIcon, InfoIcon, XIcon};
use dioxus::prelude::*;
use roster_common::{Severity, Toast};

const TOAST_BACKGROUND: &str = "#34495e";
const TOAST_TEXT: &str = "#ecf0f1";

/// All visible toasts, newest at the bottom
#[component]
pub fn ToastStackView(toasts: Vec<Toast>, on_dismiss: EventHandler<u64>) -> Element {
    rsx! {
        div {
            class: "fixed top-4 right-4 z-50 flex flex-col gap-2 w-80 max-w-[calc(100vw-2rem)]",
            aria_live: "polite",
            for toast in toasts {
                ToastView { key: "{toast.id}", toast, on_dismiss }
            }
        }
    }
}

/// A single toast.
///
/// Toasts with a timer dismiss themselves; persistent ones wait for the
/// confirmation button.
#[component]
pub fn ToastView(toast: Toast, on_dismiss: EventHandler<u64>) -> Element {
    let id = toast.id;
    let timer_ms = toast.notification.timer_ms;

    use_hook(move || {
        if let Some(ms) = timer_ms {
            spawn(async move {
                sleep_ms(ms as u64).await;
                on_dismiss.call(id);
            });
        }
    });

    let notification = &toast.notification;
    let accent = match notification.severity {
        Severity::Success => "text-green-400",
        Severity::Warning => "text-amber-400",
        Severity::Info => "text-sky-400",
        Severity::Error => "text-red-400",
    };

    rsx! {
        div {
            class: "relative overflow-hidden rounded-lg shadow-lg px-4 py-3",
            style: "background: {TOAST_BACKGROUND}; color: {TOAST_TEXT};",
            role: if notification.severity == Severity::Error { "alert" } else { "status" },
            "data-testid": "toast",
            div { class: "flex items-start gap-3",
                div { class: "{accent} flex-shrink-0 mt-0.5",
                    {
                        match notification.severity {
                            Severity::Success => rsx! { CheckCircleIcon { class: "w-5 h-5" } },
                            Severity::Warning | Severity::Error => rsx! { AlertTriangleIcon { class: "w-5 h-5" } },
                            Severity::Info => rsx! { InfoIcon { class: "w-5 h-5" } },
                        }
                    }
                }
                div { class: "flex-1 min-w-0",
                    p { class: "font-semibold", "{notification.title}" }
                    p { class: "text-sm opacity-90 break-words", "{notification.message}" }
                    if notification.show_confirm_button {
                        div { class: "mt-3",
                            Button {
                                variant: ButtonVariant::Primary,
                                onclick: move |_| on_dismiss.call(id),
                                "OK"
                            }
                        }
                    }
                }
                if !notification.show_confirm_button {
                    ChromelessButton {
                        class: Some("opacity-70 hover:opacity-100".to_string()),
                        aria_label: Some("Dismiss".to_string()),
                        onclick: move |_| on_dismiss.call(id),
                        XIcon { class: "w-4 h-4" }
                    }
                }
            }
            if let Some(ms) = timer_ms {
                div {
                    class: "toast-timer-bar absolute bottom-0 left-0 h-1 bg-white/40",
                    style: "animation-duration: {ms}ms;",
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
