use leptos::prelude::*;

use nidaan_core::i18n::{key, translate};
use nidaan_core::symptoms::BODY_MARKERS;

use crate::state::AppState;

/// Schematic figure with one marker per body region. A marker lights up when
/// any selected symptom maps to its region.
#[component]
pub fn BodyMapPanel() -> impl IntoView {
    let state = expect_context::<AppState>();
    let language = state.language;
    let selected = state.selected_symptoms;

    view! {
        <div class="card">
            <h2 class="text-lg font-semibold mb-4">
                {move || translate(language.get(), key::DIAGNOSIS_BODY_MAP)}
            </h2>
            <div class="relative mx-auto w-48 h-72">
                <svg viewBox="0 0 100 100" class="w-full h-full">
                    <circle cx="50" cy="15" r="8" fill="#e2e8f0" stroke="#64748b" stroke-width="1" />
                    <rect x="42" y="23" width="16" height="25" rx="2" fill="#e2e8f0" stroke="#64748b" stroke-width="1" />
                    <rect x="30" y="25" width="8" height="20" rx="2" fill="#e2e8f0" stroke="#64748b" stroke-width="1" />
                    <rect x="62" y="25" width="8" height="20" rx="2" fill="#e2e8f0" stroke="#64748b" stroke-width="1" />
                    <rect x="44" y="50" width="5" height="30" rx="2" fill="#e2e8f0" stroke="#64748b" stroke-width="1" />
                    <rect x="51" y="50" width="5" height="30" rx="2" fill="#e2e8f0" stroke="#64748b" stroke-width="1" />
                </svg>
                {BODY_MARKERS.iter().map(|marker| {
                    let active = move || {
                        selected.with(|sel| {
                            sel.iter().any(|s| s.body_part == Some(marker.part))
                        })
                    };
                    view! {
                        <div
                            class=move || {
                                if active() { "body-marker active" } else { "body-marker" }
                            }
                            style=format!("left: {}%; top: {}%;", marker.x, marker.y)
                            title=marker.label
                        ></div>
                    }
                }).collect::<Vec<_>>()}
            </div>
            <p class="text-xs text-slate-500 dark:text-gray-400 mt-3 text-center">
                "Highlighted regions match your selected symptoms"
            </p>
        </div>
    }
}
