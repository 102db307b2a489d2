//! Dashboard Page
//!
//! Loads the generated datasets and lays out one chart panel per view.

use leptos::*;

use crate::api;
use crate::components::{ChartPanel, ChartSkeleton, Loading, Series, Sidebar, SERIES_COLORS};
use crate::state::DashboardState;

/// Crops plotted on the yield panel
const YIELD_CROPS: [&str; 3] = ["wheat", "corn", "soy"];

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let loading = state.loading;
    let error = state.error;

    // Fetch datasets on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);

            match api::fetch_env_timeseries().await {
                Ok(points) => state.env.set(points),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch env series: {}", e).into());
                    state.show_error("Environment data unavailable");
                }
            }

            match api::fetch_yield_stats().await {
                Ok(stats) => state.yields.set(Some(stats)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch yield stats: {}", e).into());
                    state.show_error("Yield data unavailable");
                }
            }

            state.loading.set(false);
        });
    });

    let temperature = {
        let state = state.clone();
        Signal::derive(move || {
            vec![Series::new("Temperature (°C)", SERIES_COLORS[0], state.env_points(|p| p.temperature_c))]
        })
    };
    let humidity = {
        let state = state.clone();
        Signal::derive(move || {
            vec![Series::new("Humidity (%)", SERIES_COLORS[2], state.env_points(|p| p.humidity_pct))]
        })
    };
    let irradiance = {
        let state = state.clone();
        Signal::derive(move || {
            vec![Series::new("Solar (W/m²)", SERIES_COLORS[4], state.env_points(|p| p.solar_irradiance))]
        })
    };
    let yields = {
        Signal::derive(move || {
            YIELD_CROPS
                .iter()
                .zip(SERIES_COLORS.iter().skip(1))
                .map(|(crop, color)| Series::new(*crop, *color, state.crop_points(crop)))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="flex flex-1 min-h-0">
            <Sidebar />

            <div class="flex-1 min-w-0 p-6 space-y-6">
                <div>
                    <h1 class="text-3xl font-bold">"Smart Agriculture Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"Field conditions and harvest at a glance"</p>
                </div>

                {move || {
                    error.get().map(|message| view! {
                        <div class="bg-red-900/50 border border-red-700 text-red-200 rounded-lg px-4 py-2">
                            {message}
                        </div>
                    })
                }}

                <Show
                    when=move || !loading.get()
                    fallback=|| view! {
                        <Loading />
                        <div class="grid lg:grid-cols-2 gap-6">
                            <ChartSkeleton />
                            <ChartSkeleton />
                        </div>
                    }
                >
                    <div class="grid lg:grid-cols-2 gap-6">
                        <ChartPanel title="Temperature" series=temperature />
                        <ChartPanel title="Humidity" series=humidity />
                        <ChartPanel title="Solar Irradiance" series=irradiance />
                        <ChartPanel title="Daily Yield (t)" series=yields />
                    </div>
                </Show>
            </div>
        </div>
    }
}
