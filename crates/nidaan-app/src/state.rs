use leptos::prelude::*;
use web_sys::Blob;

use nidaan_core::analysis::AnalysisResponse;
use nidaan_core::language::Language;
use nidaan_core::media::{MediaKind, RecordingKind};
use nidaan_core::symptoms::Symptom;

use crate::platform::{prefs, voice};

/// Navigation destinations, used for active-state styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Diagnosis,
    FirstAid,
    Results,
}

/// The current screen. `Results` carries the submission outcome directly
/// rather than going through any router state; navigating to it without a
/// session renders the placeholder result.
#[derive(Clone)]
pub enum Screen {
    Home,
    Diagnosis,
    FirstAid,
    Results(Option<AnalysisSession>),
}

impl Screen {
    pub fn tab(&self) -> Tab {
        match self {
            Self::Home => Tab::Home,
            Self::Diagnosis => Tab::Diagnosis,
            Self::FirstAid => Tab::FirstAid,
            Self::Results(_) => Tab::Results,
        }
    }
}

/// An in-memory handle to one uploaded or recorded media item. The object URL
/// is revoked exactly once: on explicit removal, by the gallery's cleanup
/// sweep, or by the results screen once the file moved into a session.
#[derive(Clone)]
pub struct MediaFile {
    pub id: u64,
    pub blob: Blob,
    pub kind: MediaKind,
    pub url: String,
    pub name: String,
}

/// Everything the results screen needs, moved out of the intake state on a
/// successful submission.
#[derive(Clone)]
pub struct AnalysisSession {
    pub symptoms: Vec<&'static Symptom>,
    pub media_files: Vec<MediaFile>,
    pub transcript: String,
    pub response: AnalysisResponse,
    pub request_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// The single dismissible banner at the top of the content area.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }

    pub fn banner_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Info => {
                "bg-blue-50 border border-blue-200 rounded-xl p-4 flex items-center justify-between text-blue-800"
            }
            NoticeKind::Error => {
                "bg-red-50 border border-red-200 rounded-xl p-4 flex items-center justify-between text-red-800"
            }
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub language: RwSignal<Language>,
    pub screen: RwSignal<Screen, LocalStorage>,
    pub notice: RwSignal<Option<Notice>>,
    /// Probed once at construction; voice controls render only when set.
    pub voice_supported: bool,
    pub is_listening: RwSignal<bool>,
    pub transcript: RwSignal<String>,
    pub selected_symptoms: RwSignal<Vec<&'static Symptom>>,
    pub media_files: RwSignal<Vec<MediaFile>, LocalStorage>,
    pub recording: RwSignal<Option<RecordingKind>>,
    pub is_analyzing: RwSignal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            language: RwSignal::new(prefs::load_language()),
            screen: RwSignal::new_local(Screen::Home),
            notice: RwSignal::new(None),
            voice_supported: voice::is_supported(),
            is_listening: RwSignal::new(false),
            transcript: RwSignal::new(String::new()),
            selected_symptoms: RwSignal::new(Vec::new()),
            media_files: RwSignal::new_local(Vec::new()),
            recording: RwSignal::new(None),
            is_analyzing: RwSignal::new(false),
        }
    }

    pub fn set_language(&self, language: Language) {
        self.language.set(language);
        prefs::store_language(language);
    }

    pub fn notify_info(&self, text: impl Into<String>) {
        self.notice.set(Some(Notice::info(text)));
    }

    pub fn notify_error(&self, text: impl Into<String>) {
        self.notice.set(Some(Notice::error(text)));
    }
}
