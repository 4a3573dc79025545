//! Launchpad Page

use leptos::prelude::*;

use moltbook_chain::services::buy_tokens;
use moltbook_core::model::{StatusKind, TxStatus};

use crate::session;

#[component]
pub fn LaunchpadPage() -> impl IntoView {
    let account = expect_context::<RwSignal<Option<String>>>();
    let (agent_id, set_agent_id) = signal(String::new());
    let (amount, set_amount) = signal(String::new());
    let (status, set_status) = signal(Option::<TxStatus>::None);
    let (busy, set_busy) = signal(false);

    let disabled =
        move || agent_id.get().trim().is_empty() || amount.get().trim().is_empty() || busy.get();

    let buy = move |_| {
        if disabled() {
            return;
        }

        let id = agent_id.get();
        let value = amount.get();
        let active = account.get_untracked();

        set_busy.set(true);
        // Status resets each submission.
        set_status.set(None);

        leptos::task::spawn_local(async move {
            let session = session::chain_session(active.as_deref());
            buy_tokens(&session, &id, &value, |update| {
                set_status.set(Some(update));
            })
            .await;
            set_busy.set(false);
        });
    };

    view! {
        <div class="launchpad">
            <h1>"Agent Token Launchpad"</h1>
            <input
                type="text"
                placeholder="Agent ID"
                prop:value=move || agent_id.get()
                on:input=move |ev| set_agent_id.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Amount (AVAX)"
                prop:value=move || amount.get()
                on:input=move |ev| set_amount.set(event_target_value(&ev))
            />
            <button class="btn btn-primary" on:click=buy disabled=disabled>
                {move || if busy.get() { "Buying..." } else { "Buy Tokens" }}
            </button>
            {move || {
                status.get().map(|status| {
                    let class = match status.kind {
                        StatusKind::Success => "tx-status tx-success",
                        StatusKind::Error => "tx-status tx-error",
                        StatusKind::Info => "tx-status tx-info",
                    };
                    view! { <p class=class>{status.message}</p> }
                })
            }}
        </div>
    }
}
