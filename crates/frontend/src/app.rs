use crate::chat::ChatPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ChatPage />
    }
}
