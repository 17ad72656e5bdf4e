//! Speech recognition and synthesis behind the browser's Web Speech API.
//!
//! The recognition constructor is resolved dynamically (`SpeechRecognition`
//! or the `webkit` prefixed variant), so the whole session is driven through
//! `js_sys::Reflect` rather than typed bindings. Listening follows a strict
//! idle -> listening -> idle cycle: explicit stop, recognizer end, and
//! recognizer error all force idle.

use std::cell::RefCell;

use js_sys::{Array, Function, Reflect};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::SpeechSynthesisUtterance;

use nidaan_core::language::Language;

use crate::state::{AppState, Notice};

thread_local! {
    static SESSION: RefCell<Option<Session>> = RefCell::new(None);
}

struct Session {
    recognition: JsValue,
    // Kept alive for as long as the recognizer may call back into them.
    _handlers: Vec<Closure<dyn FnMut(JsValue)>>,
}

fn recognition_ctor() -> Option<Function> {
    let window = web_sys::window()?;
    for name in ["SpeechRecognition", "webkitSpeechRecognition"] {
        if let Ok(value) = Reflect::get(&window, &JsValue::from_str(name)) {
            if let Some(ctor) = value.dyn_ref::<Function>() {
                return Some(ctor.clone());
            }
        }
    }
    None
}

/// One-time capability probe; callers gate voice controls on this.
pub fn is_supported() -> bool {
    recognition_ctor().is_some()
}

fn set(target: &JsValue, key: &str, value: &JsValue) -> Result<(), String> {
    Reflect::set(target, &JsValue::from_str(key), value).map_err(|e| format!("{e:?}"))?;
    Ok(())
}

fn call(target: &JsValue, method: &str) -> Result<(), String> {
    let f = Reflect::get(target, &JsValue::from_str(method)).map_err(|e| format!("{e:?}"))?;
    let f = f
        .dyn_ref::<Function>()
        .ok_or_else(|| format!("{method} is not a function"))?;
    f.call0(target).map_err(|e| format!("{e:?}"))?;
    Ok(())
}

/// Starts a continuous, interim-enabled recognition session in the current
/// language's locale. No-op when unsupported or already listening. Clears the
/// previous transcript before capture begins.
pub fn start_listening(state: &AppState) -> Result<(), String> {
    if state.is_listening.get_untracked() {
        return Ok(());
    }
    let Some(ctor) = recognition_ctor() else {
        return Ok(());
    };

    // A session left behind by a recognizer error is replaced here.
    teardown_session();

    let recognition: JsValue = Reflect::construct(&ctor, &Array::new())
        .map_err(|e| format!("{e:?}"))?
        .into();

    set(&recognition, "continuous", &JsValue::TRUE)?;
    set(&recognition, "interimResults", &JsValue::TRUE)?;
    set(
        &recognition,
        "lang",
        &JsValue::from_str(state.language.get_untracked().locale()),
    )?;

    let transcript = state.transcript;
    let onresult = Closure::wrap(Box::new(move |event: JsValue| {
        for segment in finalized_segments(&event) {
            transcript.update(|t| {
                if !t.is_empty() {
                    t.push(' ');
                }
                t.push_str(&segment);
            });
        }
    }) as Box<dyn FnMut(JsValue)>);

    let listening = state.is_listening;
    let notice = state.notice;
    let onerror = Closure::wrap(Box::new(move |event: JsValue| {
        let error = Reflect::get(&event, &JsValue::from_str("error"))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_else(|| "unknown".to_string());
        log::error!("speech recognition error: {error}");
        listening.set(false);
        notice.set(Some(Notice::error(format!("Speech recognition error: {error}"))));
    }) as Box<dyn FnMut(JsValue)>);

    let listening = state.is_listening;
    let onend = Closure::wrap(Box::new(move |_event: JsValue| {
        listening.set(false);
    }) as Box<dyn FnMut(JsValue)>);

    set(&recognition, "onresult", onresult.as_ref())?;
    set(&recognition, "onerror", onerror.as_ref())?;
    set(&recognition, "onend", onend.as_ref())?;

    state.transcript.set(String::new());
    call(&recognition, "start")?;
    state.is_listening.set(true);

    SESSION.with(|s| {
        *s.borrow_mut() = Some(Session {
            recognition,
            _handlers: vec![onresult, onerror, onend],
        })
    });
    Ok(())
}

/// Halts capture and returns to idle. No-op when not listening.
pub fn stop_listening(state: &AppState) {
    if !state.is_listening.get_untracked() {
        return;
    }
    state.is_listening.set(false);
    teardown_session();
}

/// Detaches the handlers before stopping so a drop cannot race a callback.
fn teardown_session() {
    let Some(session) = SESSION.with(|s| s.borrow_mut().take()) else {
        return;
    };
    for handler in ["onresult", "onerror", "onend"] {
        let _ = Reflect::set(&session.recognition, &JsValue::from_str(handler), &JsValue::NULL);
    }
    if let Err(e) = call(&session.recognition, "stop") {
        log::warn!("speech recognition stop failed: {e}");
    }
}

/// Pulls the finalized text out of a recognition result event. Interim
/// results are ignored; only `isFinal` entries accumulate.
fn finalized_segments(event: &JsValue) -> Vec<String> {
    let mut segments = Vec::new();
    let Ok(results) = Reflect::get(event, &JsValue::from_str("results")) else {
        return segments;
    };
    let start = Reflect::get(event, &JsValue::from_str("resultIndex"))
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as u32;
    let length = Reflect::get(&results, &JsValue::from_str("length"))
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as u32;

    for i in start..length {
        let Ok(result) = Reflect::get_u32(&results, i) else {
            continue;
        };
        let is_final = Reflect::get(&result, &JsValue::from_str("isFinal"))
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        if !is_final {
            continue;
        }
        let Ok(alternative) = Reflect::get_u32(&result, 0) else {
            continue;
        };
        if let Some(text) = Reflect::get(&alternative, &JsValue::from_str("transcript"))
            .ok()
            .and_then(|v| v.as_string())
        {
            let text = text.trim().to_string();
            if !text.is_empty() {
                segments.push(text);
            }
        }
    }
    segments
}

/// Enqueues an utterance in the language's locale. Fire-and-forget; the
/// browser serializes queued utterances. No-op without synthesis support.
pub fn speak(language: Language, text: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(synthesis) = window.speech_synthesis() else {
        log::warn!("speech synthesis unavailable");
        return;
    };
    match SpeechSynthesisUtterance::new_with_text(text) {
        Ok(utterance) => {
            utterance.set_lang(language.locale());
            synthesis.speak(&utterance);
        }
        Err(e) => log::warn!("utterance construction failed: {e:?}"),
    }
}
