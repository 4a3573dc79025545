//! Dashboard Page

use leptos::prelude::*;

use moltbook_chain::services::dashboard_stats;
use moltbook_core::model::DashboardStats;

use crate::components::{ActivityRow, StatCard};
use crate::session;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let account = expect_context::<RwSignal<Option<String>>>();
    let (stats, set_stats) = signal(Option::<DashboardStats>::None);

    Effect::new(move |_| {
        let active = account.get();
        leptos::task::spawn_local(async move {
            let session = session::chain_session(active.as_deref());
            set_stats.set(Some(dashboard_stats(&session).await));
        });
    });

    view! {
        <div class="dashboard">
            <h1>"Welcome to Moltbook Dashboard"</h1>
            {move || match stats.get() {
                None => view! { <p class="loading">"Loading stats..."</p> }.into_any(),
                Some(stats) => {
                    let rlm = if stats.rlm_active { "Active" } else { "Offline" };
                    let active_agents = stats.active_agents.to_string();
                    let activity = stats.recent_activity;
                    view! {
                        <div class="stat-row">
                            <StatCard label="Active Agents" value=active_agents />
                            <StatCard label="Total Tokens" value=stats.total_tokens />
                            <StatCard label="Growth" value=stats.growth_rate />
                            <StatCard label="RLM" value=rlm.to_string() />
                        </div>
                        <section class="recent-activity">
                            <h2>"Recent Activity"</h2>
                            <ul>
                                <For
                                    each=move || activity.clone()
                                    key=|item| item.id.clone()
                                    children=move |item| view! { <ActivityRow item=item /> }
                                />
                            </ul>
                        </section>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
