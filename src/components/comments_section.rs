//! Login-aware comment section: submission form or login prompt.

#[cfg(test)]
#[path = "comments_section_test.rs"]
mod comments_section_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::load::Load;
use crate::state::session::{
    COMMENT_FIELD, FORM_ENCTYPE, IMAGE_FIELD, SessionDisplay, SessionState, SignedIn, form_greeting,
};

#[component]
pub fn CommentsSection(state: RwSignal<SessionState>) -> impl IntoView {
    move || match state.get().load {
        Load::Pending => ().into_any(),
        Load::Ready(SessionDisplay::LoggedIn(signed_in)) => view! { <CommentForm signed_in/> }.into_any(),
        Load::Ready(SessionDisplay::LoggedOut { login_url }) => view! { <LoginPrompt login_url/> }.into_any(),
        Load::Failed(message) => {
            view! { <p class="comments-section__error">{message}</p> }.into_any()
        }
    }
}

/// Multipart form posting straight to the backend's upload URL.
#[component]
fn CommentForm(signed_in: SignedIn) -> impl IntoView {
    let SignedIn { email, logout_url, upload_url } = signed_in;

    view! {
        <form class="comment-form" method="POST" enctype=FORM_ENCTYPE action=upload_url>
            <p>{form_greeting(&email)}</p>
            <textarea
                name=COMMENT_FIELD
                placeholder="Enter anything you like~"
                rows="5"
                cols="50"
            ></textarea>
            <br/>
            <label for="imageFile">"Select an image file:"</label>
            <input type="file" id=IMAGE_FIELD name=IMAGE_FIELD accept="image/*"/>
            <br/>
            <br/>
            <input type="submit"/>
        </form>
        <p>"Alternatively, you can logout " <a href=logout_url>"here"</a> "."</p>
    }
}

#[component]
fn LoginPrompt(login_url: String) -> impl IntoView {
    view! { <p>"Hello, login " <a href=login_url>"here"</a> " to leave a comment."</p> }
}
