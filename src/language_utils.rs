use isolang::Language;

// Language utilities for the translation prompt.
// The target language is normally given as a name ("French"); lowercase ISO
// 639-1 and ISO 639-2 codes are accepted as well and resolved to their English
// name. Three-letter input only resolves when written in lowercase and when the
// language also has a two-letter code, so names such as "Mon" or "Ewe" stay as
// typed.

/// Map an ISO 639-2/B code to its ISO 639-2/T equivalent
fn bibliographic_to_terminology(code: &str) -> Option<&'static str> {
    let part2t = match code {
        "fre" => "fra",
        "ger" => "deu",
        "dut" => "nld",
        "gre" => "ell",
        "chi" => "zho",
        "cze" => "ces",
        "ice" => "isl",
        "alb" => "sqi",
        "arm" => "hye",
        "baq" => "eus",
        "bur" => "mya",
        "per" => "fas",
        "geo" => "kat",
        "may" => "msa",
        "mac" => "mkd",
        "rum" => "ron",
        "slo" => "slk",
        "wel" => "cym",
        _ => return None,
    };
    Some(part2t)
}

/// Look up a language from a lowercase ISO 639-1 or ISO 639-2 code
pub fn language_from_code(code: &str) -> Option<Language> {
    let code = code.trim();
    if !code.chars().all(|c| c.is_ascii_lowercase()) {
        return None;
    }

    match code.len() {
        2 => Language::from_639_1(code),
        3 => Language::from_639_3(code)
            .filter(|lang| lang.to_639_1().is_some())
            .or_else(|| bibliographic_to_terminology(code).and_then(Language::from_639_3)),
        _ => None,
    }
}

/// Name of the target language as it should appear in the prompt.
///
/// ISO codes resolve to the English language name; anything else is
/// returned trimmed but otherwise untouched.
pub fn prompt_language_name(target_language: &str) -> String {
    match language_from_code(target_language) {
        Some(lang) => lang.to_name().to_string(),
        None => target_language.trim().to_string(),
    }
}
