//! Comment list rendered into the page's comments container.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each comment becomes a `<li>`, followed by its `<img>` and label caption
//! as siblings inside the same container. A new snapshot replaces the whole
//! subtree.

#[cfg(test)]
#[path = "comments_list_test.rs"]
mod comments_list_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::comments::{CommentEntry, CommentsState};
use crate::state::load::Load;

#[component]
pub fn CommentsList(state: RwSignal<CommentsState>) -> impl IntoView {
    move || match state.get().load {
        Load::Pending => ().into_any(),
        Load::Ready(entries) => entries
            .into_iter()
            .map(|entry| view! { <CommentRow entry/> })
            .collect_view()
            .into_any(),
        Load::Failed(message) => view! { <p class="comments__error">{message}</p> }.into_any(),
    }
}

#[component]
fn CommentRow(entry: CommentEntry) -> impl IntoView {
    let image = entry.image.map(|image| {
        let caption = image.caption.map(|caption| view! { <p class="comments__labels">{caption}</p> });
        view! {
            <img class="comments__image" src=image.url/>
            {caption}
        }
    });

    view! {
        <li class="comments__item">{entry.line}</li>
        {image}
    }
}
