use super::*;

#[test]
fn default_locale_is_english() {
    assert_eq!(Locale::default(), Locale::En);
    assert_eq!(Locale::default().code(), "en");
}

#[test]
fn all_locales_parse_from_their_code() {
    assert_eq!(Locale::all().len(), 11);
    for &locale in Locale::all() {
        assert_eq!(Locale::parse(locale.code()), Some(locale));
    }
}

#[test]
fn parse_rejects_unknown_and_case_variants() {
    assert_eq!(Locale::parse("xx"), None);
    assert_eq!(Locale::parse("EN"), None);
    assert_eq!(Locale::parse(""), None);
}

#[test]
fn display_names_are_native() {
    assert_eq!(Locale::Zh.display_name(), "中文");
    assert_eq!(Locale::Id.display_name(), "Bahasa Indonesia");
    assert_eq!(Locale::Pt.display_name(), "Português");
}

#[test]
fn locale_or_default_falls_back() {
    assert_eq!(locale_or_default(Some("ja")), Locale::Ja);
    assert_eq!(locale_or_default(Some("klingon")), Locale::En);
    assert_eq!(locale_or_default(None), Locale::En);
}

#[test]
fn speech_lang_is_region_tagged() {
    assert_eq!(Locale::En.speech_lang(), "en-US");
    assert_eq!(Locale::Zh.speech_lang(), "zh-CN");
}

#[test]
fn path_for_locale_swaps_leading_segment() {
    assert_eq!(path_for_locale("/en", Locale::De), "/de");
    assert_eq!(path_for_locale("/en/", Locale::De), "/de");
    assert_eq!(path_for_locale("/zh/studio/deck", Locale::Fr), "/fr/studio/deck");
}

#[test]
fn path_for_locale_prefixes_unlocalized_paths() {
    assert_eq!(path_for_locale("/", Locale::Ko), "/ko");
    assert_eq!(path_for_locale("", Locale::Ko), "/ko");
    assert_eq!(path_for_locale("/about", Locale::Es), "/es/about");
}
