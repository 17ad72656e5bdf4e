use leptos::ev;
use leptos::prelude::*;

use nidaan_core::i18n::{key, translate};
use nidaan_core::language::Language;

use crate::platform::voice;
use crate::state::{AppState, Screen, Tab};

const NAV_ITEMS: &[(Tab, &str)] = &[
    (Tab::Home, key::NAV_HOME),
    (Tab::Diagnosis, key::NAV_DIAGNOSIS),
    (Tab::FirstAid, key::NAV_FIRST_AID),
    (Tab::Results, key::NAV_RESULTS),
];

fn screen_for(tab: Tab) -> Screen {
    match tab {
        Tab::Home => Screen::Home,
        Tab::Diagnosis => Screen::Diagnosis,
        Tab::FirstAid => Screen::FirstAid,
        // Direct navigation carries no session; the screen shows its
        // placeholder entry instead of re-calling the network.
        Tab::Results => Screen::Results(None),
    }
}

/// Sticky header, content slot, and the mobile bottom nav.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let state = expect_context::<AppState>();
    let language = state.language;
    let screen = state.screen;
    let is_listening = state.is_listening;
    let voice_supported = state.voice_supported;

    let on_language_change = {
        let state = state.clone();
        move |ev: ev::Event| {
            if let Some(lang) = Language::from_code(&event_target_value(&ev)) {
                state.set_language(lang);
            }
        }
    };

    let toggle_voice = {
        let state = state.clone();
        move |_| {
            if state.is_listening.get_untracked() {
                voice::stop_listening(&state);
            } else if let Err(e) = voice::start_listening(&state) {
                log::error!("failed to start voice recognition: {e}");
                state.notify_error("Failed to start voice recognition");
            }
        }
    };

    let toggle_dark = move |_| {
        if let Some(html) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = html.class_list().toggle("dark");
        }
    };

    view! {
        <div class="min-h-screen flex flex-col bg-gradient-to-br from-slate-50 to-blue-50 dark:from-gray-900 dark:to-gray-950">
            <header class="bg-white/80 dark:bg-gray-900/80 backdrop-blur-md border-b border-slate-200 dark:border-gray-800 sticky top-0 z-50">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-3 flex items-center justify-between">
                    <button
                        class="flex items-center gap-2"
                        on:click=move |_| screen.set(Screen::Home)
                    >
                        <span class="medical-gradient p-2 rounded-xl text-white">"\u{2695}"</span>
                        <span class="text-xl font-bold text-slate-900 dark:text-white">"Nidaan"</span>
                    </button>

                    <nav class="hidden md:flex gap-1">
                        {NAV_ITEMS.iter().map(|&(tab, label_key)| {
                            view! {
                                <button
                                    class=move || {
                                        if screen.with(|s| s.tab()) == tab {
                                            "px-4 py-2 rounded-lg text-sm font-medium bg-blue-100 text-blue-700"
                                        } else {
                                            "px-4 py-2 rounded-lg text-sm font-medium text-slate-600 dark:text-gray-300 hover:bg-slate-100 dark:hover:bg-gray-800"
                                        }
                                    }
                                    on:click=move |_| screen.set(screen_for(tab))
                                >
                                    {move || translate(language.get(), label_key)}
                                </button>
                            }
                        }).collect::<Vec<_>>()}
                    </nav>

                    <div class="flex items-center gap-3">
                        {voice_supported.then(|| view! {
                            <button
                                class=move || {
                                    if is_listening.get() {
                                        "btn-voice listening animate-pulse"
                                    } else {
                                        "btn-voice"
                                    }
                                }
                                on:click=toggle_voice
                                title="Toggle voice input"
                            >
                                {move || if is_listening.get() { "\u{1F399} Stop" } else { "\u{1F399}" }}
                            </button>
                        })}

                        <select
                            class="px-3 py-2 bg-gray-100 dark:bg-gray-800 border border-gray-300 dark:border-gray-700 rounded-lg text-sm"
                            on:change=on_language_change
                        >
                            {Language::ALL.into_iter().map(|lang| {
                                view! {
                                    <option
                                        value=lang.code()
                                        selected=move || language.get() == lang
                                    >
                                        {lang.native_name()}
                                    </option>
                                }
                            }).collect::<Vec<_>>()}
                        </select>

                        <button
                            class="p-2 rounded-lg bg-gray-100 dark:bg-gray-800 hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors"
                            on:click=toggle_dark
                            title="Toggle dark mode"
                        >
                            <span class="text-sm">{"\u{263E}"}</span>
                        </button>
                    </div>
                </div>
            </header>

            <main class="flex-1 max-w-7xl mx-auto w-full px-4 sm:px-6 lg:px-8 py-8 pb-24 md:pb-8 space-y-6">
                {children()}
            </main>

            <div class="md:hidden fixed bottom-0 left-0 right-0 bg-white/90 dark:bg-gray-900/90 backdrop-blur-md border-t border-slate-200 dark:border-gray-800 z-50">
                <div class="grid grid-cols-4 py-2">
                    {NAV_ITEMS.iter().map(|&(tab, label_key)| {
                        view! {
                            <button
                                class=move || {
                                    if screen.with(|s| s.tab()) == tab {
                                        "flex flex-col items-center py-2 text-xs font-medium text-blue-600"
                                    } else {
                                        "flex flex-col items-center py-2 text-xs font-medium text-slate-500"
                                    }
                                }
                                on:click=move |_| screen.set(screen_for(tab))
                            >
                                {move || translate(language.get(), label_key)}
                            </button>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}
