//! Sidebar Component
//!
//! Collapsible side panel. Its width animates, so every chart panel beside it
//! is resized by layout rather than by the window.

use leptos::*;

use crate::state::DashboardState;

#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let collapsed = state.sidebar_collapsed;
    let env = state.env;
    let yields = state.yields;

    view! {
        <aside class=move || {
            let base = "shrink-0 overflow-hidden bg-gray-800 border-r border-gray-700 \
                        transition-[width] duration-300 ease-in-out";
            if collapsed.get() {
                format!("{} w-0", base)
            } else {
                format!("{} w-64", base)
            }
        }>
            <div class="w-64 p-4 space-y-4">
                <h2 class="text-sm font-semibold uppercase tracking-wide text-gray-400">"Fields"</h2>
                <SidebarStat label="Time series samples" value=Signal::derive(move || env.with(|p| p.len())) />
                <SidebarStat
                    label="Yield records"
                    value=Signal::derive(move || yields.with(|y| y.as_ref().map(|s| s.series.len()).unwrap_or(0)))
                />
            </div>
        </aside>
    }
}

#[component]
fn SidebarStat(label: &'static str, value: Signal<usize>) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between text-sm">
            <span class="text-gray-300">{label}</span>
            <span class="font-semibold">{move || value.get()}</span>
        </div>
    }
}
