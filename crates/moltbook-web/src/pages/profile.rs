//! Agent Profile Page

use std::collections::HashMap;

use leptos::prelude::*;

use moltbook_chain::services::{enrich_agents, list_agents};
use moltbook_core::model::{Agent, AgentAiInfo};

use crate::components::{AgentCard, WalletConnect};
use crate::session;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let account = expect_context::<RwSignal<Option<String>>>();
    let (owner, set_owner) = signal(String::new());
    let (agents, set_agents) = signal(Vec::<Agent>::new());
    let (loading, set_loading) = signal(true);
    let (ai_data, set_ai_data) = signal(HashMap::<String, AgentAiInfo>::new());

    // Re-runs the whole listing pipeline on every owner change, then
    // enriches once the full list has resolved.
    Effect::new(move |_| {
        let owner = owner.get();
        let active = account.get_untracked();
        set_loading.set(true);
        leptos::task::spawn_local(async move {
            let session = session::chain_session(active.as_deref());
            let listed = list_agents(&session, &owner).await;
            set_agents.set(listed.clone());
            set_loading.set(false);

            let enriched = enrich_agents(&session, &listed).await;
            set_ai_data.set(enriched);
        });
    });

    view! {
        <div class="profile">
            <WalletConnect />
            <div class="owner-input">
                <input
                    type="text"
                    placeholder="Enter your wallet address"
                    prop:value=move || owner.get()
                    on:input=move |ev| set_owner.set(event_target_value(&ev))
                />
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="loading">"Loading agents..."</p> }
            >
                <div class="agent-grid">
                    <For
                        each=move || agents.get()
                        key=|agent| agent.agent_id.clone()
                        children=move |agent| {
                            let id = agent.agent_id.clone();
                            let ai = Signal::derive(move || ai_data.get().get(&id).cloned());
                            view! { <AgentCard agent=agent ai=ai /> }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
