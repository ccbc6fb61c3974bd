pub mod scroll_lock;

use std::cell::Cell;

use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

thread_local! {
    static NEXT_MODAL_ID: Cell<u64> = const { Cell::new(1) };
}

/// Per-instance id so two open dialogs never share ARIA ids.
fn next_modal_id() -> u64 {
    NEXT_MODAL_ID.with(|c| {
        let id = c.get();
        c.set(id + 1);
        id
    })
}

/// Dismissible overlay dialog.
///
/// A controlled view over the consumer's `is_open` flag: renders nothing at
/// all while closed. Closes via the close button, the Escape key (window
/// scope), or a click on the overlay outside the content panel.
#[component]
pub fn Modal(
    /// Whether the dialog is shown. The consumer owns this flag.
    #[prop(into)]
    is_open: Signal<bool>,
    /// Callback when the dialog should close
    on_close: Callback<()>,
    /// Optional title, defaults to "Modal Title"
    #[prop(optional)]
    title: Option<String>,
    /// Modal content
    children: ChildrenFn,
) -> impl IntoView {
    let title = title.unwrap_or_else(|| "Modal Title".to_string());
    let children = StoredValue::new_local(children);

    view! {
        <Show when=move || is_open.get()>
            <ModalDialog title=title.clone() on_close=on_close>
                {children.get_value()()}
            </ModalDialog>
        </Show>
    }
}

/// The dialog surface. Exists only while the modal is open, so the scroll
/// lock and the window key listener acquired here are released on every exit
/// path (prop flip to closed, unmount while open) through `on_cleanup`.
#[component]
fn ModalDialog(title: String, on_close: Callback<()>, children: Children) -> impl IntoView {
    let id = next_modal_id();
    let title_id = format!("modal-title-{id}");
    let content_id = format!("modal-content-{id}");

    scroll_lock::acquire();
    on_cleanup(scroll_lock::release);

    // Escape closes regardless of where focus sits.
    let key_handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || key_handle.remove());

    // Close only on clicks landing on the overlay itself, not a descendant.
    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let direct = match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        };
        if direct {
            // Defer close to next tick: avoids Leptos event delegation calling a
            // dropped handler when the overlay is removed synchronously during
            // its own click dispatch.
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    // Prevent click propagation from modal content
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let handle_close = move |_| {
        on_close.run(());
    };

    view! {
        <div
            class="modal-overlay"
            role="dialog"
            aria-modal="true"
            aria-labelledby=title_id.clone()
            aria-describedby=content_id.clone()
            on:click=handle_overlay_click
        >
            <div class="modal" on:click=stop_propagation>
                <header class="modal-header">
                    <h1 id=title_id.clone() class="modal-title">{title}</h1>
                    <button
                        type="button"
                        class="button button--icon modal__close"
                        aria-label="Close modal"
                        on:click=handle_close
                    >
                        {icon("x")}
                    </button>
                </header>
                <div id=content_id.clone() class="modal-body">{children()}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_ids_are_unique_per_instance() {
        let first = next_modal_id();
        let second = next_modal_id();
        let third = next_modal_id();
        assert!(first < second && second < third);
    }
}
