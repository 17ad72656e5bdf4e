//! Flat key/value translation tables, one per [`Language`]. A missing key
//! resolves to the key itself rather than an error.

use crate::language::Language;

/// String keys used by the UI.
pub mod key {
    pub const NAV_HOME: &str = "nav.home";
    pub const NAV_DIAGNOSIS: &str = "nav.diagnosis";
    pub const NAV_FIRST_AID: &str = "nav.firstAid";
    pub const NAV_RESULTS: &str = "nav.results";

    pub const HOME_TITLE: &str = "home.title";
    pub const HOME_SUBTITLE: &str = "home.subtitle";
    pub const HOME_FEATURE_DIAGNOSIS: &str = "home.features.diagnosis";
    pub const HOME_FEATURE_DIAGNOSIS_DESC: &str = "home.features.diagnosis.desc";
    pub const HOME_FEATURE_FIRST_AID: &str = "home.features.firstAid";
    pub const HOME_FEATURE_FIRST_AID_DESC: &str = "home.features.firstAid.desc";
    pub const HOME_FEATURE_VOICE: &str = "home.features.voice";
    pub const HOME_FEATURE_VOICE_DESC: &str = "home.features.voice.desc";
    pub const HOME_CTA: &str = "home.cta";

    pub const DIAGNOSIS_TITLE: &str = "diagnosis.title";
    pub const DIAGNOSIS_SYMPTOMS: &str = "diagnosis.symptoms";
    pub const DIAGNOSIS_BODY_MAP: &str = "diagnosis.bodyMap";
    pub const DIAGNOSIS_VOICE_INPUT: &str = "diagnosis.voiceInput";
    pub const DIAGNOSIS_ANALYZE: &str = "diagnosis.analyze";
    pub const DIAGNOSIS_LISTENING: &str = "diagnosis.listening";
    pub const DIAGNOSIS_START_RECORDING: &str = "diagnosis.startRecording";
    pub const DIAGNOSIS_STOP_RECORDING: &str = "diagnosis.stopRecording";

    pub const FIRST_AID_TITLE: &str = "firstAid.title";
    pub const FIRST_AID_EMERGENCY: &str = "firstAid.emergency";
    pub const FIRST_AID_SEARCH: &str = "firstAid.search";

    pub const COMMON_LOADING: &str = "common.loading";
    pub const COMMON_ERROR: &str = "common.error";
    pub const COMMON_BACK: &str = "common.back";
    pub const COMMON_NEXT: &str = "common.next";
    pub const COMMON_SUBMIT: &str = "common.submit";
    pub const COMMON_CANCEL: &str = "common.cancel";
}

/// Look up `key` in `language`'s table. Unknown keys come back unchanged.
pub fn translate<'a>(language: Language, key: &'a str) -> &'a str {
    table(language)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or(key)
}

fn table(language: Language) -> &'static [(&'static str, &'static str)] {
    match language {
        Language::En => EN,
        Language::Es => ES,
        Language::Fr => FR,
        Language::De => DE,
        Language::Zh => ZH,
    }
}

static EN: &[(&str, &str)] = &[
    (key::NAV_HOME, "Home"),
    (key::NAV_DIAGNOSIS, "Diagnosis"),
    (key::NAV_FIRST_AID, "First Aid"),
    (key::NAV_RESULTS, "Results"),
    (key::HOME_TITLE, "AI Medical Assistant"),
    (
        key::HOME_SUBTITLE,
        "Get instant medical guidance with AI-powered diagnosis and first aid support",
    ),
    (key::HOME_FEATURE_DIAGNOSIS, "Smart Diagnosis"),
    (key::HOME_FEATURE_DIAGNOSIS_DESC, "AI-powered symptom analysis"),
    (key::HOME_FEATURE_FIRST_AID, "First Aid Guide"),
    (key::HOME_FEATURE_FIRST_AID_DESC, "Step-by-step emergency instructions"),
    (key::HOME_FEATURE_VOICE, "Voice Assistant"),
    (key::HOME_FEATURE_VOICE_DESC, "Hands-free interaction"),
    (key::HOME_CTA, "Start Diagnosis"),
    (key::DIAGNOSIS_TITLE, "Medical Diagnosis"),
    (key::DIAGNOSIS_SYMPTOMS, "Select Your Symptoms"),
    (key::DIAGNOSIS_BODY_MAP, "Body Map"),
    (key::DIAGNOSIS_VOICE_INPUT, "Voice Input"),
    (key::DIAGNOSIS_ANALYZE, "Analyze Symptoms"),
    (key::DIAGNOSIS_LISTENING, "Listening..."),
    (key::DIAGNOSIS_START_RECORDING, "Start Recording"),
    (key::DIAGNOSIS_STOP_RECORDING, "Stop Recording"),
    (key::FIRST_AID_TITLE, "First Aid Guide"),
    (key::FIRST_AID_EMERGENCY, "Emergency Situations"),
    (key::FIRST_AID_SEARCH, "Search conditions..."),
    (key::COMMON_LOADING, "Loading..."),
    (key::COMMON_ERROR, "Error occurred"),
    (key::COMMON_BACK, "Back"),
    (key::COMMON_NEXT, "Next"),
    (key::COMMON_SUBMIT, "Submit"),
    (key::COMMON_CANCEL, "Cancel"),
];

static ES: &[(&str, &str)] = &[
    (key::NAV_HOME, "Inicio"),
    (key::NAV_DIAGNOSIS, "Diagnóstico"),
    (key::NAV_FIRST_AID, "Primeros Auxilios"),
    (key::NAV_RESULTS, "Resultados"),
    (key::HOME_TITLE, "Asistente Médico IA"),
    (
        key::HOME_SUBTITLE,
        "Obtén orientación médica instantánea con diagnóstico y soporte de primeros auxilios impulsado por IA",
    ),
    (key::HOME_FEATURE_DIAGNOSIS, "Diagnóstico Inteligente"),
    (key::HOME_FEATURE_DIAGNOSIS_DESC, "Análisis de síntomas impulsado por IA"),
    (key::HOME_FEATURE_FIRST_AID, "Guía de Primeros Auxilios"),
    (key::HOME_FEATURE_FIRST_AID_DESC, "Instrucciones de emergencia paso a paso"),
    (key::HOME_FEATURE_VOICE, "Asistente de Voz"),
    (key::HOME_FEATURE_VOICE_DESC, "Interacción manos libres"),
    (key::HOME_CTA, "Iniciar Diagnóstico"),
    (key::DIAGNOSIS_TITLE, "Diagnóstico Médico"),
    (key::DIAGNOSIS_SYMPTOMS, "Selecciona Tus Síntomas"),
    (key::DIAGNOSIS_BODY_MAP, "Mapa Corporal"),
    (key::DIAGNOSIS_VOICE_INPUT, "Entrada de Voz"),
    (key::DIAGNOSIS_ANALYZE, "Analizar Síntomas"),
    (key::DIAGNOSIS_LISTENING, "Escuchando..."),
    (key::DIAGNOSIS_START_RECORDING, "Iniciar Grabación"),
    (key::DIAGNOSIS_STOP_RECORDING, "Detener Grabación"),
    (key::FIRST_AID_TITLE, "Guía de Primeros Auxilios"),
    (key::FIRST_AID_EMERGENCY, "Situaciones de Emergencia"),
    (key::FIRST_AID_SEARCH, "Buscar condiciones..."),
    (key::COMMON_LOADING, "Cargando..."),
    (key::COMMON_ERROR, "Ocurrió un error"),
    (key::COMMON_BACK, "Atrás"),
    (key::COMMON_NEXT, "Siguiente"),
    (key::COMMON_SUBMIT, "Enviar"),
    (key::COMMON_CANCEL, "Cancelar"),
];

static FR: &[(&str, &str)] = &[
    (key::NAV_HOME, "Accueil"),
    (key::NAV_DIAGNOSIS, "Diagnostic"),
    (key::NAV_FIRST_AID, "Premiers Secours"),
    (key::NAV_RESULTS, "Résultats"),
    (key::HOME_TITLE, "Assistant Médical IA"),
    (
        key::HOME_SUBTITLE,
        "Obtenez des conseils médicaux instantanés avec un diagnostic et un support de premiers secours alimentés par IA",
    ),
    (key::HOME_FEATURE_DIAGNOSIS, "Diagnostic Intelligent"),
    (key::HOME_FEATURE_DIAGNOSIS_DESC, "Analyse de symptômes alimentée par IA"),
    (key::HOME_FEATURE_FIRST_AID, "Guide des Premiers Secours"),
    (key::HOME_FEATURE_FIRST_AID_DESC, "Instructions d'urgence étape par étape"),
    (key::HOME_FEATURE_VOICE, "Assistant Vocal"),
    (key::HOME_FEATURE_VOICE_DESC, "Interaction mains libres"),
    (key::HOME_CTA, "Commencer le Diagnostic"),
    (key::DIAGNOSIS_TITLE, "Diagnostic Médical"),
    (key::DIAGNOSIS_SYMPTOMS, "Sélectionnez Vos Symptômes"),
    (key::DIAGNOSIS_BODY_MAP, "Carte Corporelle"),
    (key::DIAGNOSIS_VOICE_INPUT, "Entrée Vocale"),
    (key::DIAGNOSIS_ANALYZE, "Analyser les Symptômes"),
    (key::DIAGNOSIS_LISTENING, "Écoute..."),
    (key::DIAGNOSIS_START_RECORDING, "Commencer l'Enregistrement"),
    (key::DIAGNOSIS_STOP_RECORDING, "Arrêter l'Enregistrement"),
    (key::FIRST_AID_TITLE, "Guide des Premiers Secours"),
    (key::FIRST_AID_EMERGENCY, "Situations d'Urgence"),
    (key::FIRST_AID_SEARCH, "Rechercher des conditions..."),
    (key::COMMON_LOADING, "Chargement..."),
    (key::COMMON_ERROR, "Erreur survenue"),
    (key::COMMON_BACK, "Retour"),
    (key::COMMON_NEXT, "Suivant"),
    (key::COMMON_SUBMIT, "Soumettre"),
    (key::COMMON_CANCEL, "Annuler"),
];

static DE: &[(&str, &str)] = &[
    (key::NAV_HOME, "Startseite"),
    (key::NAV_DIAGNOSIS, "Diagnose"),
    (key::NAV_FIRST_AID, "Erste Hilfe"),
    (key::NAV_RESULTS, "Ergebnisse"),
    (key::HOME_TITLE, "KI-Medizinassistent"),
    (
        key::HOME_SUBTITLE,
        "Erhalten Sie sofortige medizinische Beratung mit KI-gestützter Diagnose und Erste-Hilfe-Unterstützung",
    ),
    (key::HOME_FEATURE_DIAGNOSIS, "Intelligente Diagnose"),
    (key::HOME_FEATURE_DIAGNOSIS_DESC, "KI-gestützte Symptomanalyse"),
    (key::HOME_FEATURE_FIRST_AID, "Erste-Hilfe-Leitfaden"),
    (key::HOME_FEATURE_FIRST_AID_DESC, "Schritt-für-Schritt Notfallanweisungen"),
    (key::HOME_FEATURE_VOICE, "Sprachassistent"),
    (key::HOME_FEATURE_VOICE_DESC, "Freisprechende Interaktion"),
    (key::HOME_CTA, "Diagnose Starten"),
    (key::DIAGNOSIS_TITLE, "Medizinische Diagnose"),
    (key::DIAGNOSIS_SYMPTOMS, "Wählen Sie Ihre Symptome"),
    (key::DIAGNOSIS_BODY_MAP, "Körperkarte"),
    (key::DIAGNOSIS_VOICE_INPUT, "Spracheingabe"),
    (key::DIAGNOSIS_ANALYZE, "Symptome Analysieren"),
    (key::DIAGNOSIS_LISTENING, "Höre zu..."),
    (key::DIAGNOSIS_START_RECORDING, "Aufnahme Starten"),
    (key::DIAGNOSIS_STOP_RECORDING, "Aufnahme Stoppen"),
    (key::FIRST_AID_TITLE, "Erste-Hilfe-Leitfaden"),
    (key::FIRST_AID_EMERGENCY, "Notfallsituationen"),
    (key::FIRST_AID_SEARCH, "Zustände suchen..."),
    (key::COMMON_LOADING, "Laden..."),
    (key::COMMON_ERROR, "Fehler aufgetreten"),
    (key::COMMON_BACK, "Zurück"),
    (key::COMMON_NEXT, "Weiter"),
    (key::COMMON_SUBMIT, "Senden"),
    (key::COMMON_CANCEL, "Abbrechen"),
];

static ZH: &[(&str, &str)] = &[
    (key::NAV_HOME, "首页"),
    (key::NAV_DIAGNOSIS, "诊断"),
    (key::NAV_FIRST_AID, "急救"),
    (key::NAV_RESULTS, "结果"),
    (key::HOME_TITLE, "AI医疗助手"),
    (key::HOME_SUBTITLE, "通过AI驱动的诊断和急救支持获得即时医疗指导"),
    (key::HOME_FEATURE_DIAGNOSIS, "智能诊断"),
    (key::HOME_FEATURE_DIAGNOSIS_DESC, "AI驱动的症状分析"),
    (key::HOME_FEATURE_FIRST_AID, "急救指南"),
    (key::HOME_FEATURE_FIRST_AID_DESC, "逐步紧急指导"),
    (key::HOME_FEATURE_VOICE, "语音助手"),
    (key::HOME_FEATURE_VOICE_DESC, "免提交互"),
    (key::HOME_CTA, "开始诊断"),
    (key::DIAGNOSIS_TITLE, "医疗诊断"),
    (key::DIAGNOSIS_SYMPTOMS, "选择您的症状"),
    (key::DIAGNOSIS_BODY_MAP, "身体图"),
    (key::DIAGNOSIS_VOICE_INPUT, "语音输入"),
    (key::DIAGNOSIS_ANALYZE, "分析症状"),
    (key::DIAGNOSIS_LISTENING, "正在听..."),
    (key::DIAGNOSIS_START_RECORDING, "开始录音"),
    (key::DIAGNOSIS_STOP_RECORDING, "停止录音"),
    (key::FIRST_AID_TITLE, "急救指南"),
    (key::FIRST_AID_EMERGENCY, "紧急情况"),
    (key::FIRST_AID_SEARCH, "搜索症状..."),
    (key::COMMON_LOADING, "加载中..."),
    (key::COMMON_ERROR, "发生错误"),
    (key::COMMON_BACK, "返回"),
    (key::COMMON_NEXT, "下一步"),
    (key::COMMON_SUBMIT, "提交"),
    (key::COMMON_CANCEL, "取消"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_key_resolves_per_language() {
        assert_eq!(translate(Language::En, key::NAV_HOME), "Home");
        assert_eq!(translate(Language::Es, key::NAV_HOME), "Inicio");
        assert_eq!(translate(Language::Zh, key::NAV_HOME), "首页");
    }

    #[test]
    fn missing_key_falls_back_to_the_key_itself() {
        assert_eq!(translate(Language::En, "nav.settings"), "nav.settings");
        assert_eq!(translate(Language::De, ""), "");
    }

    #[test]
    fn every_language_covers_the_english_key_set() {
        for lang in Language::ALL {
            for (k, _) in EN {
                assert_ne!(
                    translate(lang, k),
                    *k,
                    "{} missing in {}",
                    k,
                    lang.code()
                );
            }
            assert_eq!(table(lang).len(), EN.len(), "extra keys in {}", lang.code());
        }
    }

    #[test]
    fn switching_language_changes_rendered_labels() {
        let before = translate(Language::En, key::DIAGNOSIS_ANALYZE);
        let after = translate(Language::Fr, key::DIAGNOSIS_ANALYZE);
        assert_ne!(before, after);
    }
}
