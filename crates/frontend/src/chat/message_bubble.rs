//! One chat turn: role header plus rendered content.

use super::view_model::ChatEntry;
use crate::shared::markdown::render_message_html;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn MessageBubble(entry: ChatEntry) -> impl IntoView {
    view! {
        <div class=format!("message {}", entry.kind.css_class())>
            <div class="message-header">{entry.kind.header_label()}</div>
            <div
                class="message-content"
                inner_html=render_message_html(&entry.text)
            ></div>
        </div>
    }
}
