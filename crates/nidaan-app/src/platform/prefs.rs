//! The one piece of persisted configuration: the UI language.

use web_sys::Storage;

use nidaan_core::language::Language;

const LANGUAGE_KEY: &str = "nidaan.language";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Reads the persisted language, falling back to English when the key is
/// absent, unreadable, or holds an unknown code.
pub fn load_language() -> Language {
    local_storage()
        .and_then(|storage| storage.get_item(LANGUAGE_KEY).ok().flatten())
        .and_then(|code| Language::from_code(&code))
        .unwrap_or_default()
}

pub fn store_language(language: Language) {
    let Some(storage) = local_storage() else {
        log::warn!("localStorage unavailable, language preference not persisted");
        return;
    };
    if let Err(e) = storage.set_item(LANGUAGE_KEY, language.code()) {
        log::warn!("failed to persist language preference: {e:?}");
    }
}
