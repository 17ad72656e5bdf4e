use leptos::prelude::*;

use nidaan_core::first_aid;
use nidaan_core::i18n::{key, translate};

use crate::platform::voice;
use crate::state::AppState;

/// Searchable first-aid guide library with category filters and read-aloud.
#[component]
pub fn FirstAidScreen() -> impl IntoView {
    let state = expect_context::<AppState>();
    let language = state.language;
    let search = RwSignal::new(String::new());
    let category = RwSignal::new(None::<&'static str>);

    view! {
        <div class="text-center mb-8">
            <h1 class="text-3xl md:text-4xl font-bold text-slate-900 dark:text-white mb-4">
                {move || translate(language.get(), key::FIRST_AID_TITLE)}
            </h1>
            <p class="text-lg text-slate-600 dark:text-gray-300">
                "Step-by-step guidance for common emergencies"
            </p>
        </div>

        <div class="card bg-red-50 dark:bg-red-900/20 border-red-200 dark:border-red-800">
            <div class="flex items-center gap-3 text-red-700 dark:text-red-400">
                <span class="text-2xl">"\u{26A0}"</span>
                <p class="font-semibold">
                    {move || translate(language.get(), key::FIRST_AID_EMERGENCY)}
                </p>
            </div>
        </div>

        <div class="flex flex-col sm:flex-row gap-3">
            <input
                class="flex-1 px-4 py-2 bg-white dark:bg-gray-800 border border-gray-300 dark:border-gray-700 rounded-lg"
                placeholder=move || translate(language.get(), key::FIRST_AID_SEARCH)
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
        </div>

        <div class="flex flex-wrap gap-2">
            <button
                class=move || {
                    if category.get().is_none() {
                        "px-3 py-1 rounded-full text-sm font-medium bg-blue-600 text-white"
                    } else {
                        "px-3 py-1 rounded-full text-sm font-medium bg-slate-100 dark:bg-gray-800 text-slate-600 dark:text-gray-300"
                    }
                }
                on:click=move |_| category.set(None)
            >
                "All Categories"
            </button>
            {first_aid::categories().into_iter().map(|cat| {
                view! {
                    <button
                        class=move || {
                            if category.get() == Some(cat) {
                                "px-3 py-1 rounded-full text-sm font-medium bg-blue-600 text-white"
                            } else {
                                "px-3 py-1 rounded-full text-sm font-medium bg-slate-100 dark:bg-gray-800 text-slate-600 dark:text-gray-300"
                            }
                        }
                        on:click=move |_| category.set(Some(cat))
                    >
                        {cat}
                    </button>
                }
            }).collect::<Vec<_>>()}
        </div>

        {move || {
            let guides = first_aid::filter(&search.get(), category.get());
            if guides.is_empty() {
                view! {
                    <p class="text-center text-slate-500 dark:text-gray-400 py-12">
                        "No guides match your search"
                    </p>
                }.into_any()
            } else {
                view! {
                    <div class="grid md:grid-cols-2 gap-6">
                        {guides.into_iter().map(|guide| {
                            let speak = move |_| {
                                voice::speak(
                                    language.get_untracked(),
                                    &guide.spoken_instructions(),
                                );
                            };
                            view! {
                                <div class="card space-y-4">
                                    <div class="flex items-start justify-between gap-2">
                                        <h2 class="text-xl font-semibold text-slate-900 dark:text-white">
                                            {guide.title}
                                        </h2>
                                        <button
                                            class="btn-voice shrink-0"
                                            title="Listen to instructions"
                                            on:click=speak
                                        >
                                            "\u{1F50A}"
                                        </button>
                                    </div>

                                    <div class="flex flex-wrap gap-2">
                                        <span class="badge bg-slate-100 text-slate-600">{guide.category}</span>
                                        <span class=guide.severity.badge_class()>
                                            {guide.severity.label()}
                                        </span>
                                        {guide.call_emergency.then(|| view! {
                                            <span class="badge bg-red-100 text-red-800">"Call 911"</span>
                                        })}
                                    </div>

                                    <details>
                                        <summary class="font-medium cursor-pointer">"Symptoms & Signs"</summary>
                                        <ul class="mt-2 space-y-1 text-sm text-slate-600 dark:text-gray-300 list-disc list-inside">
                                            {guide.symptoms.iter().map(|s| view! { <li>{*s}</li> }).collect::<Vec<_>>()}
                                        </ul>
                                    </details>

                                    <details open=true>
                                        <summary class="font-medium cursor-pointer">"First Aid Steps"</summary>
                                        <ol class="mt-2 space-y-2 text-sm text-slate-700 dark:text-gray-200">
                                            {guide.steps.iter().enumerate().map(|(i, step)| view! {
                                                <li class="flex gap-2">
                                                    <span class="flex-shrink-0 w-5 h-5 rounded-full bg-blue-100 text-blue-700 text-xs flex items-center justify-center font-semibold">
                                                        {i + 1}
                                                    </span>
                                                    {*step}
                                                </li>
                                            }).collect::<Vec<_>>()}
                                        </ol>
                                    </details>

                                    <details>
                                        <summary class="font-medium cursor-pointer text-amber-700 dark:text-amber-400">
                                            "Important Warnings"
                                        </summary>
                                        <ul class="mt-2 space-y-1 text-sm text-amber-700 dark:text-amber-400 list-disc list-inside">
                                            {guide.warnings.iter().map(|w| view! { <li>{*w}</li> }).collect::<Vec<_>>()}
                                        </ul>
                                    </details>
                                </div>
                            }
                        }).collect::<Vec<_>>()}
                    </div>
                }.into_any()
            }
        }}
    }
}
