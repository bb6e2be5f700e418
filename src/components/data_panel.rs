//! Plain-text `/data` panel.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::data::DataState;
use crate::state::load::Load;

#[component]
pub fn DataPanel(state: RwSignal<DataState>) -> impl IntoView {
    move || match state.get().load {
        Load::Pending => ().into_any(),
        Load::Ready(text) => text.into_any(),
        Load::Failed(message) => view! { <span class="data-panel__error">{message}</span> }.into_any(),
    }
}
