//! UI Components

use leptos::prelude::*;

use moltbook_core::model::{ActivityItem, Agent, AgentAiInfo};
use moltbook_core::wallet::ConnectOutcome;

use crate::session;

/// Shorten an address for display: `0x1234...abcd`
///
/// Counts characters, not bytes, so arbitrary display strings are safe.
pub fn truncate_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// Wallet connect/disconnect control
#[component]
pub fn WalletConnect() -> impl IntoView {
    let account = expect_context::<RwSignal<Option<String>>>();

    let connect = move |_| {
        leptos::task::spawn_local(async move {
            let mut wallet = session::wallet_session();
            match wallet.connect().await {
                ConnectOutcome::Connected(address) => account.set(Some(address)),
                ConnectOutcome::NoProvider => session::alert_no_provider(),
                // Logged by the session manager; state stays unconnected.
                ConnectOutcome::Rejected => {}
            }
        });
    };

    let disconnect = move |_| {
        let mut wallet = session::wallet_session();
        wallet.disconnect();
        account.set(None);
    };

    view! {
        <div class="wallet">
            {move || match account.get() {
                Some(address) => view! {
                    <span class="wallet-account">"Connected: " {truncate_address(&address)}</span>
                    <button class="btn" on:click=disconnect>"Disconnect"</button>
                }
                .into_any(),
                None => view! {
                    <button class="btn btn-primary" on:click=connect>"Connect Wallet"</button>
                }
                .into_any(),
            }}
        </div>
    }
}

/// One card in the dashboard's stat row
#[component]
pub fn StatCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-label">{label}</span>
            <span class="stat-value">{value}</span>
        </div>
    }
}

/// One row in the recent-activity feed
#[component]
pub fn ActivityRow(item: ActivityItem) -> impl IntoView {
    let class = format!("activity activity-{}", item.status);
    view! {
        <li class=class>
            <span class="activity-tag">{item.kind.clone()}</span>
            <span class="activity-title">{item.title.clone()}</span>
            <span class="activity-time">{item.time.clone()}</span>
            {item.amount.clone().map(|amount| view! { <span class="activity-amount">{amount}</span> })}
        </li>
    }
}

/// One owned agent with its AI-derived metadata
///
/// The AI fields are reactive: enrichment resolves after the listing, and
/// an absent entry renders as "N/A".
#[component]
pub fn AgentCard(agent: Agent, ai: Signal<Option<AgentAiInfo>>) -> impl IntoView {
    let recommendation =
        move || ai.get().map_or_else(|| "N/A".to_string(), |info| info.recommendation);
    let state = move || ai.get().map_or_else(|| "N/A".to_string(), |info| info.state);

    view! {
        <div class="agent-card">
            <h2>"Agent #" {agent.agent_id.clone()}</h2>
            <p>"Owner: " {truncate_address(&agent.owner)}</p>
            <p>"Token Balance: " {agent.token_balance.clone()}</p>
            <p>"Reputation: " {agent.reputation.clone()}</p>
            <p>"AI Recommendation: " {recommendation}</p>
            <p>"Agent State: " {state}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_address() {
        assert_eq!(
            truncate_address("0x1111222233334444555566667777888899990000"),
            "0x1111...0000"
        );
        assert_eq!(truncate_address("0xshort"), "0xshort");
    }

    #[test]
    fn test_truncate_address_is_char_aware() {
        // Multi-byte characters must not split; byte slicing would panic.
        assert_eq!(truncate_address("áéíóúüñ漢字カナ中文"), "áéíóúü...カナ中文");
        assert_eq!(truncate_address("漢字カナ中文ひらがな"), "漢字カナ中文ひらがな");
    }
}
