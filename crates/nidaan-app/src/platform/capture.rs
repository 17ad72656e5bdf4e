//! File intake and device recording. Uploads and finished recordings flow
//! through the same gate: MIME classification, the max-count check, a fresh
//! id, and an object URL.

use std::cell::RefCell;

use js_sys::Array;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, BlobEvent, BlobPropertyBag, FileList, HtmlVideoElement, MediaRecorder, MediaStream,
    MediaStreamConstraints, Url,
};

use nidaan_core::media::{IntakeGate, MediaKind, RecordingKind, MAX_FILES};

use crate::state::{AppState, MediaFile};

/// The always-mounted preview element the video recording path wires up.
pub const PREVIEW_ELEMENT_ID: &str = "recording-preview";

thread_local! {
    static RECORDER: RefCell<Option<MediaRecorder>> = RefCell::new(None);
    static STREAM: RefCell<Option<MediaStream>> = RefCell::new(None);
    static PREVIEW: RefCell<Option<HtmlVideoElement>> = RefCell::new(None);
    static GATE: RefCell<IntakeGate> = RefCell::new(IntakeGate::new());
}

fn admit(state: &AppState) -> Option<u64> {
    let count = state.media_files.with_untracked(|f| f.len());
    GATE.with(|g| g.borrow_mut().admit(count))
}

/// Classifies and admits picked files. Unsupported types are skipped with a
/// notification; once the max count is reached the rest of the batch is
/// dropped with one notification.
pub fn select_files(state: &AppState, files: FileList) {
    let mut added = 0usize;
    for i in 0..files.length() {
        let Some(file) = files.get(i) else {
            continue;
        };
        let Some(kind) = MediaKind::from_mime(&file.type_()) else {
            state.notify_error("Unsupported file type: please upload images, videos, or audio files only");
            continue;
        };
        let Some(id) = admit(state) else {
            state.notify_error(format!("File limit reached: maximum {MAX_FILES} files allowed"));
            break;
        };
        let name = file.name();
        let blob: Blob = file.unchecked_into();
        match append_file(state, id, blob, kind, name) {
            Ok(()) => added += 1,
            Err(e) => {
                log::error!("failed to add file: {e}");
                state.notify_error("Could not add the selected file");
            }
        }
    }
    if added > 0 {
        state.notify_info(format!("{added} file(s) added successfully"));
    }
}

fn append_file(
    state: &AppState,
    id: u64,
    blob: Blob,
    kind: MediaKind,
    name: String,
) -> Result<(), String> {
    let url = Url::create_object_url_with_blob(&blob).map_err(|e| format!("{e:?}"))?;
    let media = MediaFile { id, blob, kind, url, name };
    state.media_files.update(|files| files.push(media));
    Ok(())
}

/// Requests the device stream and begins buffering. Video recordings capture
/// camera plus microphone and drive the live preview; audio recordings take
/// the microphone only. No-op while a recording is already active.
pub async fn start_recording(state: &AppState, kind: RecordingKind) -> Result<(), String> {
    if RECORDER.with(|r| r.borrow().is_some()) {
        return Ok(());
    }

    let window = web_sys::window().ok_or("No window")?;
    let media_devices = window
        .navigator()
        .media_devices()
        .map_err(|e| format!("{e:?}"))?;

    let constraints = MediaStreamConstraints::new();
    constraints.set_audio(&JsValue::TRUE);
    constraints.set_video(&JsValue::from_bool(kind.wants_video()));

    let stream_promise = media_devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| format!("{e:?}"))?;
    let stream_js = JsFuture::from(stream_promise)
        .await
        .map_err(|e| format!("getUserMedia failed: {e:?}"))?;
    let stream: MediaStream = stream_js.dyn_into().map_err(|_| "Not a MediaStream")?;

    if kind.wants_video() {
        let preview = window
            .document()
            .and_then(|doc| doc.get_element_by_id(PREVIEW_ELEMENT_ID))
            .and_then(|el| el.dyn_into::<HtmlVideoElement>().ok());
        if let Some(video) = preview {
            video.set_src_object(Some(&stream));
            let _ = video.play();
            PREVIEW.with(|p| *p.borrow_mut() = Some(video));
        }
    }

    let recorder = match MediaRecorder::new_with_media_stream(&stream) {
        Ok(recorder) => recorder,
        Err(e) => {
            stop_tracks(&stream);
            clear_preview();
            return Err(format!("MediaRecorder failed: {e:?}"));
        }
    };

    let chunks = Array::new();
    let data_chunks = chunks.clone();
    let ondataavailable = Closure::wrap(Box::new(move |event: BlobEvent| {
        if let Some(data) = event.data() {
            if data.size() > 0.0 {
                data_chunks.push(&data);
            }
        }
    }) as Box<dyn FnMut(BlobEvent)>);
    recorder.set_ondataavailable(Some(ondataavailable.as_ref().unchecked_ref()));
    ondataavailable.forget();

    let st = state.clone();
    let onstop = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        finish_recording(&st, kind, &chunks);
    }) as Box<dyn FnMut(web_sys::Event)>);
    recorder.set_onstop(Some(onstop.as_ref().unchecked_ref()));
    onstop.forget();

    if let Err(e) = recorder.start() {
        recorder.set_ondataavailable(None);
        recorder.set_onstop(None);
        stop_tracks(&stream);
        clear_preview();
        return Err(format!("recorder start failed: {e:?}"));
    }

    RECORDER.with(|r| *r.borrow_mut() = Some(recorder));
    STREAM.with(|s| *s.borrow_mut() = Some(stream));
    state.recording.set(Some(kind));
    Ok(())
}

/// Finalizes the active recording. The recorder's `onstop` handler assembles
/// the chunks, admits the file through the shared gate, and releases the
/// stream and preview.
pub fn stop_recording(state: &AppState) {
    let Some(recorder) = RECORDER.with(|r| r.borrow_mut().take()) else {
        return;
    };
    if let Err(e) = recorder.stop() {
        log::warn!("recorder stop failed: {e:?}");
        release_stream();
        state.recording.set(None);
    }
}

fn finish_recording(state: &AppState, kind: RecordingKind, chunks: &Array) {
    let options = BlobPropertyBag::new();
    options.set_type(kind.mime());
    match Blob::new_with_blob_sequence_and_options(chunks, &options) {
        Ok(blob) => match admit(state) {
            None => {
                state.notify_error(format!("File limit reached: maximum {MAX_FILES} files allowed"))
            }
            Some(id) => {
                let name = kind.file_name(js_sys::Date::now() as u64);
                match append_file(state, id, blob, kind.media_kind(), name) {
                    Ok(()) => state.notify_info(format!(
                        "{} recording saved successfully",
                        kind.media_kind().label()
                    )),
                    Err(e) => {
                        log::error!("failed to store recording: {e}");
                        state.notify_error("Could not save the recording");
                    }
                }
            }
        },
        Err(e) => {
            log::error!("recording assembly failed: {e:?}");
            state.notify_error("Could not save the recording");
        }
    }
    release_stream();
    state.recording.set(None);
}

/// Teardown path for leaving the screen mid-recording: detaches the handlers
/// so no file is emitted, then releases the stream and preview.
pub fn abort_recording(state: &AppState) {
    if let Some(recorder) = RECORDER.with(|r| r.borrow_mut().take()) {
        recorder.set_ondataavailable(None);
        recorder.set_onstop(None);
        let _ = recorder.stop();
    }
    release_stream();
    state.recording.set(None);
}

/// Removes one file and revokes its URL. Unknown ids are a no-op.
pub fn remove_file(state: &AppState, id: u64) {
    state.media_files.update(|files| {
        if let Some(pos) = files.iter().position(|f| f.id == id) {
            let file = files.remove(pos);
            revoke_url(&file.url);
        }
    });
}

/// Drains a file list, revoking each object URL once.
pub fn release_files(files: &mut Vec<MediaFile>) {
    for file in files.drain(..) {
        revoke_url(&file.url);
    }
}

fn revoke_url(url: &str) {
    if let Err(e) = Url::revoke_object_url(url) {
        log::warn!("revoking object URL failed: {e:?}");
    }
}

fn release_stream() {
    STREAM.with(|s| {
        if let Some(stream) = s.borrow_mut().take() {
            stop_tracks(&stream);
        }
    });
    clear_preview();
}

fn stop_tracks(stream: &MediaStream) {
    let tracks = stream.get_tracks();
    for i in 0..tracks.length() {
        let track = tracks.get(i);
        if !track.is_undefined() && !track.is_null() {
            let track: web_sys::MediaStreamTrack = track.unchecked_into();
            track.stop();
        }
    }
}

fn clear_preview() {
    PREVIEW.with(|p| {
        if let Some(video) = p.borrow_mut().take() {
            video.set_src_object(None);
        }
    });
}
