/// Languages the UI ships translation tables for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    De,
    Zh,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::En,
        Language::Es,
        Language::Fr,
        Language::De,
        Language::Zh,
    ];

    /// Two-letter code used for persistence and the language selector.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::De => "de",
            Self::Zh => "zh",
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Español",
            Self::Fr => "Français",
            Self::De => "Deutsch",
            Self::Zh => "中文",
        }
    }

    /// BCP-47 locale handed to speech recognition and synthesis.
    pub fn locale(self) -> &'static str {
        match self {
            Self::En => "en-US",
            Self::Es => "es-ES",
            Self::Fr => "fr-FR",
            Self::De => "de-DE",
            Self::Zh => "zh-CN",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_roundtrips_for_every_language() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
    }

    #[test]
    fn unknown_code_is_none() {
        assert_eq!(Language::from_code("pt"), None);
        assert_eq!(Language::from_code(""), None);
        assert_eq!(Language::from_code("EN"), None);
    }

    #[test]
    fn recognition_locales_are_regional() {
        assert_eq!(Language::En.locale(), "en-US");
        assert_eq!(Language::Zh.locale(), "zh-CN");
        for lang in Language::ALL {
            assert!(lang.locale().contains('-'));
        }
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Language::default(), Language::En);
    }
}
