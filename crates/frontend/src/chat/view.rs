//! Chat page - View Component

use super::message_bubble::MessageBubble;
use super::model::{fetch_health, fetch_models, send_prompt};
use super::view_model::{ChatPageVm, EntryKind, ServerStatus};
use crate::shared::format::format_size;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn ChatPage() -> impl IntoView {
    let vm = ChatPageVm::new();
    let chat_container_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Textarea>::new();

    // Scroll to bottom helper
    let scroll_to_bottom = {
        let chat_container_ref = chat_container_ref.clone();
        move || {
            if let Some(container) = chat_container_ref.get() {
                request_animation_frame(move || {
                    container.set_scroll_top(container.scroll_height());
                });
            }
        }
    };

    // Check the backend, then load the model list
    Effect::new({
        let scroll_to_bottom = scroll_to_bottom.clone();
        move |_| {
            let scroll_to_bottom = scroll_to_bottom.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_health().await {
                    Ok(report) if report.is_ok() => {
                        vm.status.set(ServerStatus::Connected);
                        vm.status_text.set("Connecté à Ollama".to_string());
                    }
                    Ok(_) => {
                        vm.status.set(ServerStatus::Disconnected);
                        vm.status_text.set("Ollama non disponible".to_string());
                        vm.push_entry(
                            EntryKind::Error,
                            "Impossible de se connecter à Ollama. Assurez-vous qu'il est lancé.",
                        );
                    }
                    Err(e) => {
                        log::error!("Health check failed: {}", e);
                        vm.status.set(ServerStatus::Disconnected);
                        vm.status_text.set("Serveur non disponible".to_string());
                        vm.push_entry(
                            EntryKind::Error,
                            "Le serveur backend n'est pas accessible. Vérifiez qu'il est démarré.",
                        );
                    }
                }

                match fetch_models().await {
                    Ok(list) if list.models.is_empty() => {
                        vm.model_placeholder.set("Aucun modèle trouvé".to_string());
                        vm.push_entry(
                            EntryKind::Error,
                            "Aucun modèle Ollama n'est installé. Installez-en un avec: ollama pull qwen2.5-coder",
                        );
                    }
                    Ok(list) => vm.models.set(list.models),
                    Err(e) => {
                        log::error!("Failed to load models: {}", e);
                        vm.model_placeholder.set("Erreur de chargement".to_string());
                        vm.push_entry(
                            EntryKind::Error,
                            "Impossible de charger les modèles disponibles.",
                        );
                    }
                }
                scroll_to_bottom();
            });
        }
    });

    // Send handler - using Callback to avoid move issues
    let handle_send = Callback::new({
        let scroll_to_bottom = scroll_to_bottom.clone();
        move |_: ()| {
            let prompt = vm.input.get().trim().to_string();
            let model = vm.selected_model.get();
            if prompt.is_empty() || model.is_empty() || vm.is_sending.get() {
                return;
            }

            vm.push_entry(EntryKind::User, prompt.clone());
            vm.input.set(String::new());
            vm.is_sending.set(true);
            scroll_to_bottom();

            let scroll_to_bottom = scroll_to_bottom.clone();
            let input_ref = input_ref.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match send_prompt(&model, &prompt).await {
                    Ok(reply) => {
                        if let Some(text) = reply.response.filter(|t| !t.is_empty()) {
                            vm.push_entry(EntryKind::Assistant, text);
                        } else if let Some(error) = reply.error.filter(|t| !t.is_empty()) {
                            vm.push_entry(EntryKind::Error, error);
                        }
                    }
                    Err(e) => {
                        log::error!("Failed to send prompt: {}", e);
                        vm.push_entry(
                            EntryKind::Error,
                            "Une erreur est survenue lors de la génération de la réponse.",
                        );
                    }
                }
                vm.is_sending.set(false);
                scroll_to_bottom();
                if let Some(input) = input_ref.get_untracked() {
                    let _ = input.focus();
                }
            });
        }
    });

    let handle_model_change = {
        let scroll_to_bottom = scroll_to_bottom.clone();
        move |ev| {
            let value = event_target_value(&ev);
            vm.selected_model.set(value.clone());
            if !value.is_empty() {
                vm.push_entry(
                    EntryKind::System,
                    format!("Modèle \"{}\" sélectionné. Commencez à discuter !", value),
                );
                scroll_to_bottom();
            }
        }
    };

    view! {
        <div class="app-container">
            <header class="app-header">
                <h1>"Ollama Chat"</h1>
                <div id="status-indicator" class=move || vm.status.get().css_class()>
                    <span class="status-dot"></span>
                    <span id="status-text">{move || vm.status_text.get()}</span>
                </div>
            </header>

            <main class="chat-panel">
                <div class="model-bar">
                    <label for="model-select">"Modèle :"</label>
                    <select
                        id="model-select"
                        disabled=move || vm.models.get().is_empty()
                        on:change=handle_model_change
                    >
                        <option value="">{move || vm.model_placeholder.get()}</option>
                        <For
                            each=move || vm.models.get()
                            key=|model| model.name.clone()
                            let:model
                        >
                            <option value=model.name.clone()>
                                {format!("{} ({})", model.name, format_size(model.size))}
                            </option>
                        </For>
                    </select>
                </div>

                <div id="chat-container" role="log" node_ref=chat_container_ref>
                    {move || {
                        vm.entries.get().is_empty().then(|| {
                            view! {
                                <div class="welcome-message">
                                    <p>"Bienvenue ! Sélectionnez un modèle pour commencer à discuter."</p>
                                </div>
                            }
                        })
                    }}
                    <For
                        each=move || vm.entries.get()
                        key=|entry| entry.id
                        let:entry
                    >
                        <MessageBubble entry=entry />
                    </For>
                    {move || {
                        vm.is_sending.get().then(|| {
                            view! {
                                <div class="message assistant">
                                    <div class="message-header">"Assistant"</div>
                                    <div class="message-content">
                                        <div
                                            class="loading-indicator"
                                            role="status"
                                            aria-label="Génération en cours"
                                        >
                                            <span></span>
                                            <span></span>
                                            <span></span>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                    }}
                </div>

                <form
                    id="chat-form"
                    on:submit=move |ev: web_sys::SubmitEvent| {
                        ev.prevent_default();
                        handle_send.run(());
                    }
                >
                    <textarea
                        id="user-input"
                        node_ref=input_ref
                        placeholder="Écrivez votre message..."
                        rows="2"
                        prop:value=move || vm.input.get()
                        disabled=vm.is_sending
                        on:input=move |ev| vm.input.set(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" && !ev.shift_key() {
                                ev.prevent_default();
                                handle_send.run(());
                            }
                        }
                    ></textarea>
                    <button
                        type="submit"
                        id="send-button"
                        aria-label="Envoyer le message"
                        disabled=vm.is_send_disabled()
                    >
                        "Envoyer"
                    </button>
                </form>
            </main>
        </div>
    }
}
