/// Fallback locale when no language preference is known.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Canonicalizes a language tag into a full locale.
///
/// `None` or an empty tag falls back to [`DEFAULT_LOCALE`]. Tags that
/// already carry a region (`pt-BR`) pass through unchanged, as do short
/// codes outside the supported set. Pure and total.
pub fn normalize_locale(lang: Option<&str>) -> String {
    let Some(lang) = lang.filter(|tag| !tag.is_empty()) else {
        return DEFAULT_LOCALE.to_string();
    };
    if lang.contains('-') {
        return lang.to_string();
    }
    match lang {
        "pt" => "pt-BR",
        "en" => "en-US",
        "es" => "es-ES",
        "fr" => "fr-FR",
        other => other,
    }
    .to_string()
}
