//! Supported UI locales and locale-prefixed path helpers.
//!
//! Every studio URL starts with a locale segment (`/en`, `/zh/...`). The
//! language selector swaps that segment and keeps the rest of the path.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Zh,
    De,
    Es,
    Fr,
    Ru,
    Ja,
    Ko,
    It,
    Id,
    Pt,
}

const ALL: [Locale; 11] = [
    Locale::En,
    Locale::Zh,
    Locale::De,
    Locale::Es,
    Locale::Fr,
    Locale::Ru,
    Locale::Ja,
    Locale::Ko,
    Locale::It,
    Locale::Id,
    Locale::Pt,
];

impl Locale {
    /// All locales in selector order.
    #[must_use]
    pub fn all() -> &'static [Locale] {
        &ALL
    }

    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        ALL.iter().copied().find(|l| l.code() == code)
    }

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
            Self::De => "de",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::Ru => "ru",
            Self::Ja => "ja",
            Self::Ko => "ko",
            Self::It => "it",
            Self::Id => "id",
            Self::Pt => "pt",
        }
    }

    /// Name of the language in that language.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Zh => "中文",
            Self::De => "Deutsch",
            Self::Es => "Español",
            Self::Fr => "Français",
            Self::Ru => "Русский",
            Self::Ja => "日本語",
            Self::Ko => "한국어",
            Self::It => "Italiano",
            Self::Id => "Bahasa Indonesia",
            Self::Pt => "Português",
        }
    }

    /// BCP 47 tag handed to the speech recognizer.
    #[must_use]
    pub fn speech_lang(self) -> &'static str {
        match self {
            Self::En => "en-US",
            Self::Zh => "zh-CN",
            Self::De => "de-DE",
            Self::Es => "es-ES",
            Self::Fr => "fr-FR",
            Self::Ru => "ru-RU",
            Self::Ja => "ja-JP",
            Self::Ko => "ko-KR",
            Self::It => "it-IT",
            Self::Id => "id-ID",
            Self::Pt => "pt-BR",
        }
    }
}

/// Resolve a route parameter, falling back to the default locale.
#[must_use]
pub fn locale_or_default(code: Option<&str>) -> Locale {
    code.and_then(Locale::parse).unwrap_or_default()
}

/// Rewrite `path` so it lives under `locale`.
///
/// A leading segment that is a known locale is replaced; otherwise the locale
/// is prefixed. Query strings and fragments are not expected here.
#[must_use]
pub fn path_for_locale(path: &str, locale: Locale) -> String {
    let trimmed = path.trim_start_matches('/');
    let (first, rest) = match trimmed.split_once('/') {
        Some((first, rest)) => (first, Some(rest)),
        None => (trimmed, None),
    };

    let tail = if Locale::parse(first).is_some() {
        rest.unwrap_or("")
    } else {
        trimmed
    };

    if tail.is_empty() {
        format!("/{}", locale.code())
    } else {
        format!("/{}/{tail}", locale.code())
    }
}
