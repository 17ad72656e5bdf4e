use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use nidaan_core::analysis;
use nidaan_core::i18n::{key, translate};
use nidaan_core::symptoms;

use crate::components::body_map::BodyMapPanel;
use crate::components::media_gallery::MediaGallery;
use crate::platform::{api, voice};
use crate::state::{AnalysisSession, AppState, Screen};

/// The intake screen: symptom picker, media gallery, voice dictation, and
/// the submit flow that hands a session to the results screen.
#[component]
pub fn DiagnosisScreen() -> impl IntoView {
    let state = expect_context::<AppState>();
    let language = state.language;
    let selected = state.selected_symptoms;
    let transcript = state.transcript;
    let is_listening = state.is_listening;
    let is_analyzing = state.is_analyzing;
    let voice_supported = state.voice_supported;
    let search = RwSignal::new(String::new());

    // Dictation feeds the selection: a symptom named in the transcript is
    // added, and only explicit removal takes it back out.
    Effect::new(move |_| {
        let text = transcript.get();
        if !text.trim().is_empty() {
            selected.update(|sel| symptoms::extend_from_transcript(sel, &text));
        }
    });

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

    let on_submit = {
        let state = state.clone();
        move |_| {
            let transcript_text = state.transcript.get_untracked();
            let symptoms = state.selected_symptoms.get_untracked();
            let media_count = state.media_files.with_untracked(|m| m.len());
            if !analysis::has_input(&symptoms, media_count, &transcript_text) {
                state.notify_error(
                    "Please select symptoms, upload media files, or provide voice input to analyze",
                );
                return;
            }

            state.is_analyzing.set(true);
            let state = state.clone();
            spawn_local(async move {
                let request_text = analysis::build_request_text(&symptoms, &transcript_text);
                log::debug!("sending analysis request: {request_text}");

                match api::analyze_symptoms(&request_text).await {
                    Ok(response) => {
                        // The intake state moves into the session; clearing it
                        // first keeps the gallery's cleanup sweep away from
                        // URLs the results screen now owns.
                        let media_files = state.media_files.get_untracked();
                        state.media_files.set(Vec::new());
                        state.selected_symptoms.set(Vec::new());
                        state.transcript.set(String::new());
                        state.screen.set(Screen::Results(Some(AnalysisSession {
                            symptoms,
                            media_files,
                            transcript: transcript_text,
                            response,
                            request_text,
                        })));
                    }
                    Err(e) => {
                        log::error!("analysis request failed: {e}");
                        state.notify_error(
                            "Analysis failed: unable to connect to the diagnosis service. Please try again.",
                        );
                    }
                }
                state.is_analyzing.set(false);
            });
        }
    };

    view! {
        <div class="text-center mb-8">
            <h1 class="text-3xl md:text-4xl font-bold text-slate-900 dark:text-white mb-4">
                {move || translate(language.get(), key::DIAGNOSIS_TITLE)}
            </h1>
            <p class="text-lg text-slate-600 dark:text-gray-300">
                "Select your symptoms, upload media files, or describe them using voice input"
            </p>
        </div>

        <div class="grid lg:grid-cols-3 gap-8">
            <div class="lg:col-span-2 space-y-6">
                <MediaGallery />

                <div class="card space-y-4">
                    <h2 class="text-lg font-semibold flex items-center gap-2">
                        "\u{1F50D} "
                        {move || translate(language.get(), key::DIAGNOSIS_SYMPTOMS)}
                    </h2>

                    <div class="flex gap-2">
                        <input
                            class="flex-1 px-3 py-2 bg-gray-50 dark:bg-gray-800 border border-gray-300 dark:border-gray-700 rounded-lg text-sm"
                            placeholder="Search symptoms..."
                            prop:value=move || search.get()
                            on:input=move |ev| search.set(event_target_value(&ev))
                        />
                        {voice_supported.then(|| view! {
                            <button
                                class=move || {
                                    if is_listening.get() { "btn-voice listening" } else { "btn-voice" }
                                }
                                on:click=toggle_voice
                            >
                                {move || if is_listening.get() { "\u{1F507}" } else { "\u{1F399}" }}
                            </button>
                        })}
                    </div>

                    {move || is_listening.get().then(|| view! {
                        <div class="p-4 bg-blue-50 dark:bg-blue-900/20 rounded-lg border-2 border-blue-200 dark:border-blue-800">
                            <div class="flex items-center gap-2 text-blue-700 dark:text-blue-400 mb-2">
                                <span class="animate-pulse">"\u{25CF}"</span>
                                {move || translate(language.get(), key::DIAGNOSIS_LISTENING)}
                            </div>
                            <p class="text-sm text-slate-600 dark:text-gray-300">
                                {move || {
                                    let text = transcript.get();
                                    if text.is_empty() {
                                        "Speak now to describe your symptoms...".to_string()
                                    } else {
                                        text
                                    }
                                }}
                            </p>
                        </div>
                    })}

                    <div class="grid sm:grid-cols-2 gap-3">
                        {move || {
                            let term = search.get();
                            symptoms::search(&term).into_iter().map(|symptom| {
                                let is_selected = move || {
                                    selected.with(|sel| sel.iter().any(|s| s.id == symptom.id))
                                };
                                view! {
                                    <div
                                        class=move || {
                                            if is_selected() {
                                                "p-4 rounded-lg border cursor-pointer transition-all duration-200 border-blue-500 bg-blue-50 dark:bg-blue-900/20"
                                            } else {
                                                "p-4 rounded-lg border cursor-pointer transition-all duration-200 border-slate-200 dark:border-gray-700 hover:border-slate-300 hover:shadow-md"
                                            }
                                        }
                                        on:click=move |_| {
                                            selected.update(|sel| symptoms::toggle(sel, symptom))
                                        }
                                    >
                                        <div class="flex items-center gap-2 mb-2">
                                            <h3 class="font-medium text-slate-900 dark:text-white">{symptom.name}</h3>
                                            {move || is_selected().then(|| view! {
                                                <span class="text-blue-600">"\u{2713}"</span>
                                            })}
                                        </div>
                                        <div class="flex gap-2">
                                            <span class=symptom.category.badge_class()>
                                                {symptom.category.label()}
                                            </span>
                                            <span class=symptom.severity.badge_class()>
                                                {symptom.severity.label()}
                                            </span>
                                        </div>
                                    </div>
                                }
                            }).collect::<Vec<_>>()
                        }}
                    </div>
                </div>

                {move || {
                    let current = selected.get();
                    (!current.is_empty()).then(|| view! {
                        <div class="card space-y-3">
                            <h2 class="text-lg font-semibold">
                                {format!("Selected Symptoms ({})", current.len())}
                            </h2>
                            <div class="flex flex-wrap gap-2">
                                {current.into_iter().map(|symptom| view! {
                                    <button
                                        class="badge bg-slate-100 text-slate-800 hover:bg-red-100 hover:text-red-800"
                                        on:click=move |_| {
                                            selected.update(|sel| symptoms::remove(sel, symptom.id))
                                        }
                                    >
                                        {symptom.name}
                                        " \u{2715}"
                                    </button>
                                }).collect::<Vec<_>>()}
                            </div>
                        </div>
                    })
                }}
            </div>

            <div class="space-y-6">
                <BodyMapPanel />

                <button
                    class="btn-primary w-full py-6 text-lg font-semibold rounded-xl"
                    on:click=on_submit
                    disabled=move || is_analyzing.get()
                >
                    {move || {
                        if is_analyzing.get() {
                            "Analyzing\u{2026}".to_string()
                        } else {
                            translate(language.get(), key::DIAGNOSIS_ANALYZE).to_string()
                        }
                    }}
                </button>
            </div>
        </div>
    }
}
