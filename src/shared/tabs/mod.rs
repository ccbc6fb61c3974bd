//! Tab switcher with roving-focus keyboard navigation.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;

/// One tab: a button label and the text shown while the tab is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
    pub label: String,
    pub content: String,
}

impl TabItem {
    pub fn new(label: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            content: content.into(),
        }
    }
}

/// Demo tab set used by the shell when the consumer injects nothing.
pub fn demo_tabs() -> Vec<TabItem> {
    vec![
        TabItem::new(
            "HTML",
            "The HyperText Markup Language or HTML is the standard markup language for documents designed to be displayed in a web browser.",
        ),
        TabItem::new(
            "CSS",
            "Cascading Style Sheets is a style sheet language used for describing the presentation of a document written in a markup language such as HTML or XML.",
        ),
        TabItem::new(
            "JavaScript",
            "JavaScript, often abbreviated as JS, is a programming language that is one of the core technologies of the World Wide Web, alongside HTML and CSS.",
        ),
    ]
}

/// Index reached from `active` by an arrow key, wrapping at both ends.
/// `None` when the key is not a navigation key or the index would not change.
fn step_index(active: usize, len: usize, key: &str) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let next = match key {
        "ArrowRight" => (active + 1) % len,
        "ArrowLeft" => (active + len - 1) % len,
        _ => return None,
    };
    (next != active).then_some(next)
}

/// Self-contained tab switcher. Selection always starts at the first tab on
/// a fresh mount; exactly one panel's content is in the output at any time.
#[component]
pub fn Tabs(
    /// Static tab list, fixed for the lifetime of the component.
    #[prop(default = demo_tabs())]
    tabs: Vec<TabItem>,
) -> impl IntoView {
    let active = RwSignal::new(0usize);
    let tab_count = tabs.len();

    // One NodeRef per button so keyboard navigation can move real focus to
    // the newly active tab, not just flip aria-selected.
    let tab_refs: Vec<NodeRef<html::Button>> = tabs.iter().map(|_| NodeRef::new()).collect();

    let buttons = tabs
        .iter()
        .enumerate()
        .map(|(index, tab)| {
            let node_ref = tab_refs[index];
            let label = tab.label.clone();
            view! {
                <button
                    node_ref=node_ref
                    type="button"
                    role="tab"
                    class="tab"
                    class:active=move || active.get() == index
                    aria-selected=move || (active.get() == index).to_string()
                    tabindex=move || if active.get() == index { "0" } else { "-1" }
                    on:click=move |_| active.set(index)
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    let contents = StoredValue::new(
        tabs.into_iter()
            .map(|tab| tab.content)
            .collect::<Vec<String>>(),
    );

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        let Some(next) = step_index(active.get(), tab_count, &ev.key()) else {
            return;
        };
        ev.prevent_default();
        active.set(next);
        // Roving focus: the selection change alone leaves focus on the old
        // button, so redirect it explicitly.
        if let Some(button) = tab_refs[next].get_untracked() {
            let _ = button.focus();
        }
    };

    view! {
        <div class="tabs">
            <div class="tabs__bar" role="tablist" on:keydown=handle_keydown>
                {buttons}
            </div>
            <div class="tabs__panel" role="tabpanel">
                {move || {
                    contents
                        .with_value(|c| c.get(active.get()).cloned())
                        .map(|text| view! { <p>{text}</p> })
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_right_advances() {
        assert_eq!(step_index(0, 3, "ArrowRight"), Some(1));
        assert_eq!(step_index(1, 3, "ArrowRight"), Some(2));
    }

    #[test]
    fn arrow_right_wraps_from_last_to_first() {
        assert_eq!(step_index(2, 3, "ArrowRight"), Some(0));
    }

    #[test]
    fn arrow_left_wraps_from_first_to_last() {
        assert_eq!(step_index(0, 3, "ArrowLeft"), Some(2));
    }

    #[test]
    fn arrow_left_retreats() {
        assert_eq!(step_index(2, 3, "ArrowLeft"), Some(1));
    }

    #[test]
    fn non_navigation_keys_are_ignored() {
        assert_eq!(step_index(1, 3, "Enter"), None);
        assert_eq!(step_index(1, 3, "ArrowDown"), None);
    }

    #[test]
    fn single_tab_never_moves() {
        assert_eq!(step_index(0, 1, "ArrowRight"), None);
        assert_eq!(step_index(0, 1, "ArrowLeft"), None);
    }

    #[test]
    fn empty_list_never_moves() {
        assert_eq!(step_index(0, 0, "ArrowRight"), None);
    }

    #[test]
    fn demo_tabs_are_ordered_and_filled() {
        let tabs = demo_tabs();
        let labels: Vec<&str> = tabs.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["HTML", "CSS", "JavaScript"]);
        assert!(tabs.iter().all(|t| !t.content.is_empty()));
    }
}
