//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::pages::{DashboardPage, LaunchpadPage, ProfilePage};
use crate::session;

/// Root application component
///
/// Owns the active-account signal, restores a prior wallet authorization
/// on startup, and tracks provider-side account switches.
#[component]
pub fn App() -> impl IntoView {
    let account = RwSignal::new(Option::<String>::None);
    provide_context(account);

    Effect::new(move |_| {
        if let Some(provider) = session::provider() {
            use moltbook_core::wallet::WalletProvider;
            provider.on_accounts_changed(Box::new(move |accounts| {
                account.set(accounts.into_iter().next());
            }));
        }

        leptos::task::spawn_local(async move {
            let mut wallet = session::wallet_session();
            wallet.restore_session().await;
            if let Some(restored) = wallet.account() {
                account.set(Some(restored.to_string()));
            }
        });
    });

    view! {
        <Router>
            <nav class="nav">
                <a href="/">"Home"</a>
                <a href="/profile">"Agent Profile"</a>
                <a href="/launchpad">"Launchpad"</a>
            </nav>
            <main class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=DashboardPage />
                    <Route path=path!("/profile") view=ProfilePage />
                    <Route path=path!("/launchpad") view=LaunchpadPage />
                </Routes>
            </main>
        </Router>
    }
}
