use dioxus::prelude::*;

/// How long a toast stays up before dismissing itself (WASM only).
#[cfg(target_family = "wasm")]
const TOAST_TTL_MS: u32 = 4_000;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
}

#[derive(Clone, Debug, Default)]
struct ToastQueue {
    next_id: u32,
    toasts: Vec<Toast>,
}

/// Handle for raising and dismissing toast notifications.
#[derive(Clone, Copy, PartialEq)]
pub struct ToastHandle {
    queue: Signal<ToastQueue>,
}

impl ToastHandle {
    pub fn show(&mut self, title: impl Into<String>) {
        let id = {
            let mut queue = self.queue.write();
            let id = queue.next_id;
            queue.next_id = queue.next_id.wrapping_add(1);
            queue.toasts.push(Toast {
                id,
                title: title.into(),
            });
            id
        };

        #[cfg(target_family = "wasm")]
        {
            let mut handle = *self;
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
                handle.dismiss(id);
            });
        }
        #[cfg(not(target_family = "wasm"))]
        let _ = id;
    }

    pub fn dismiss(&mut self, id: u32) {
        self.queue.write().toasts.retain(|t| t.id != id);
    }

    fn toasts(&self) -> Vec<Toast> {
        self.queue.read().toasts.clone()
    }
}

pub fn use_toast_provider() -> ToastHandle {
    use_context_provider(|| ToastHandle {
        queue: Signal::new(ToastQueue::default()),
    })
}

pub fn use_toast() -> ToastHandle {
    use_context::<ToastHandle>()
}

/// Renders the active toasts, newest last.
#[component]
pub fn Toaster() -> Element {
    let mut handle = use_toast();
    let toasts = handle.toasts();

    rsx! {
        div { class: "toast-viewport",
            for toast in toasts {
                div { class: "toast",
                    key: "{toast.id}",
                    span { class: "toast-title", "{toast.title}" }
                    button {
                        class: "toast-close",
                        onclick: move |_| handle.dismiss(toast.id),
                        "×"
                    }
                }
            }
        }
    }
}
