use crate::shared::modal::Modal;
use crate::shared::tabs::Tabs;
use leptos::prelude::*;

/// Demo shell composing the two components. Owns the modal's open flag and
/// hands it down as a prop; the modal itself never mutates it.
#[component]
pub fn App() -> impl IntoView {
    let (is_open, set_is_open) = signal(false);

    let handle_close = Callback::new(move |_| set_is_open.set(false));

    view! {
        <div class="app">
            <h1>"This is the App!"</h1>
            <button class="button" on:click=move |_| set_is_open.set(true)>
                "Open Modal"
            </button>
            <Modal is_open=is_open on_close=handle_close>
                <div>"This is a modal"</div>
            </Modal>
            <Tabs />
        </div>
    }
}
