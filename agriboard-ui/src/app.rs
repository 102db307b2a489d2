//! App Root Component
//!
//! Provides dashboard state and renders the shell around the dashboard.

use leptos::*;

use crate::pages::Dashboard;
use crate::state::{provide_dashboard_state, DashboardState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_dashboard_state();

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <Header />

            <main class="flex-1 flex flex-col">
                <Dashboard />
            </main>
        </div>
    }
}

/// Header with the side panel toggle
#[component]
fn Header() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let collapsed = state.sidebar_collapsed;
    let loading = state.loading;

    view! {
        <header class="bg-gray-800 border-b border-gray-700 px-4 py-3 flex items-center justify-between">
            <div class="flex items-center space-x-3">
                <button
                    class="px-3 py-1 rounded-lg bg-gray-700 hover:bg-gray-600 transition-colors"
                    on:click=move |_| state.toggle_sidebar()
                >
                    {move || if collapsed.get() { "☰" } else { "✕" }}
                </button>
                <span class="text-lg font-semibold">"Agriboard"</span>
            </div>

            {move || {
                if loading.get() {
                    view! {
                        <div class="flex items-center space-x-2 text-gray-400">
                            <div class="loading-spinner w-4 h-4" />
                            <span>"Loading..."</span>
                        </div>
                    }
                    .into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </header>
    }
}
