//! Loading Component
//!
//! Loading spinners and skeleton states.

use leptos::*;

/// Full-page loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Skeleton loader for a chart panel
#[component]
pub fn ChartSkeleton() -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-4 animate-pulse">
            <div class="h-5 bg-gray-700 rounded w-1/3 mb-3" />
            <div class="h-64 md:h-80 bg-gray-700 rounded" />
        </div>
    }
}
