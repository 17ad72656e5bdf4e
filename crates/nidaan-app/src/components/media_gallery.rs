use leptos::html;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use nidaan_core::i18n::{key, translate};
use nidaan_core::media::{MediaKind, RecordingKind, MAX_FILES};

use crate::platform::capture;
use crate::state::AppState;

/// Upload and recording controls plus the attached-file list.
#[component]
pub fn MediaGallery() -> impl IntoView {
    let state = expect_context::<AppState>();
    let language = state.language;
    let media_files = state.media_files;
    let recording = state.recording;
    let file_input = NodeRef::<html::Input>::new();

    let on_files_picked = {
        let state = state.clone();
        move |_| {
            let Some(input) = file_input.get_untracked() else {
                return;
            };
            if let Some(files) = input.files() {
                capture::select_files(&state, files);
            }
            // Clearing lets picking the same file twice fire `change` again.
            input.set_value("");
        }
    };

    let start = {
        let state = state.clone();
        move |kind: RecordingKind| {
            let state = state.clone();
            spawn_local(async move {
                if let Err(e) = capture::start_recording(&state, kind).await {
                    log::error!("recording failed: {e}");
                    state.notify_error(
                        "Recording failed: could not access camera/microphone",
                    );
                }
            });
        }
    };
    let start_video = {
        let start = start.clone();
        move |_| start(RecordingKind::Video)
    };
    let start_audio = move |_| start(RecordingKind::Audio);

    let stop = {
        let state = state.clone();
        move |_| capture::stop_recording(&state)
    };

    // Leaving the screen mid-session tears down the device stream and
    // revokes every URL still owned by the intake list.
    {
        let state = state.clone();
        on_cleanup(move || {
            capture::abort_recording(&state);
            state.media_files.update(|files| capture::release_files(files));
        });
    }

    view! {
        <div class="card space-y-4">
            <h2 class="text-lg font-semibold flex items-center gap-2">
                "\u{1F4CE} Upload Media Files"
                <span class="text-sm font-normal text-slate-500">
                    {move || format!("({}/{MAX_FILES})", media_files.with(|f| f.len()))}
                </span>
            </h2>

            <input
                node_ref=file_input
                type="file"
                accept="image/*,video/*,audio/*"
                multiple=true
                class="hidden"
                on:change=on_files_picked
            />

            <div class="flex flex-wrap gap-2">
                <button
                    class="px-4 py-2 rounded-lg bg-blue-600 text-white text-sm font-medium hover:bg-blue-700 transition-colors"
                    on:click=move |_| {
                        if let Some(input) = file_input.get_untracked() {
                            input.click();
                        }
                    }
                >
                    "\u{1F4C1} Upload Files"
                </button>
                <button
                    class="px-4 py-2 rounded-lg bg-purple-600 text-white text-sm font-medium hover:bg-purple-700 transition-colors disabled:opacity-50"
                    disabled=move || recording.get().is_some()
                    on:click=start_video
                >
                    "\u{1F3A5} Record Video"
                </button>
                <button
                    class="px-4 py-2 rounded-lg bg-green-600 text-white text-sm font-medium hover:bg-green-700 transition-colors disabled:opacity-50"
                    disabled=move || recording.get().is_some()
                    on:click=start_audio
                >
                    "\u{1F3A4} Record Audio"
                </button>
                {move || recording.get().map(|_| view! {
                    <button
                        class="px-4 py-2 rounded-lg bg-red-600 text-white text-sm font-medium hover:bg-red-700 transition-colors animate-pulse"
                        on:click=stop.clone()
                    >
                        "\u{25A0} "
                        {move || translate(language.get(), key::DIAGNOSIS_STOP_RECORDING)}
                    </button>
                })}
            </div>

            // Always mounted so the capture path can wire the stream to it
            // before the recording signal flips.
            <video
                id=capture::PREVIEW_ELEMENT_ID
                class=move || {
                    if recording.get() == Some(RecordingKind::Video) {
                        "w-full rounded-lg border border-slate-200 dark:border-gray-700"
                    } else {
                        "hidden"
                    }
                }
                muted=true
                autoplay=true
                playsinline=true
            />

            {move || (recording.get() == Some(RecordingKind::Audio)).then(|| view! {
                <div class="flex items-center gap-2 p-3 bg-red-50 dark:bg-red-900/20 rounded-lg text-red-700 dark:text-red-400 text-sm">
                    <span class="animate-pulse">"\u{25CF}"</span>
                    "Recording audio..."
                </div>
            })}

            {move || {
                let files = media_files.get();
                if files.is_empty() {
                    view! {
                        <p class="text-sm text-slate-500 dark:text-gray-400">
                            "No files attached yet. Upload photos of visible symptoms or record a description."
                        </p>
                    }.into_any()
                } else {
                    view! {
                        <div class="grid sm:grid-cols-2 gap-3">
                            {files.into_iter().map(|file| {
                                let state = state.clone();
                                let id = file.id;
                                view! {
                                    <div class="flex items-center gap-3 p-3 rounded-lg border border-slate-200 dark:border-gray-700">
                                        {if file.kind == MediaKind::Image {
                                            view! {
                                                <img
                                                    src=file.url.clone()
                                                    class="w-12 h-12 rounded object-cover"
                                                    alt=file.name.clone()
                                                />
                                            }.into_any()
                                        } else {
                                            view! {
                                                <span class="w-12 h-12 flex items-center justify-center rounded bg-slate-100 dark:bg-gray-800 text-xl">
                                                    {if file.kind == MediaKind::Video { "\u{1F3A5}" } else { "\u{1F3A4}" }}
                                                </span>
                                            }.into_any()
                                        }}
                                        <div class="flex-1 min-w-0">
                                            <p class="text-sm font-medium truncate">{file.name.clone()}</p>
                                            <span class="badge bg-slate-100 text-slate-600">{file.kind.label()}</span>
                                        </div>
                                        <button
                                            class="text-slate-400 hover:text-red-600"
                                            on:click=move |_| capture::remove_file(&state, id)
                                        >
                                            "\u{2715}"
                                        </button>
                                    </div>
                                }
                            }).collect::<Vec<_>>()}
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
