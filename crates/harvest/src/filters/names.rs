// ABOUTME: Name validity filter and suffix/context based gender classification.
// ABOUTME: Also cleans raw candidates into capitalized single-word names.

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

use crate::text::{capitalize, cyrillic_tokens, is_cyrillic_letter, is_cyrillic_word};

const MIN_NAME_CHARS: usize = 2;
const MAX_NAME_CHARS: usize = 20;

/// Page-chrome words that show up in name lists but are never names.
static NAME_STOP_WORDS: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::new(["имя", "имена", "список", "категория", "страница", "википедия"]).unwrap()
});

static MALE_INDICATORS: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::new(["мужск", "мальчик", "папа", "сын", "брат", "муж"]).unwrap()
});

static FEMALE_INDICATORS: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::new(["женск", "девочка", "мама", "дочь", "сестра", "жена"]).unwrap()
});

const MALE_ENDINGS: &[&str] = &["ов", "ев", "ин", "ский", "цкий", "ич", "он", "ен"];
const FEMALE_ENDINGS: &[&str] = &["а", "я", "ова", "ева", "ина", "ская", "цкая"];

/// Grammatical gender assigned to a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

/// Returns true if `text` looks like a Russian name.
///
/// Accepts 2 to 20 characters made of Russian letters, whitespace and hyphens,
/// as long as none of the stop words appears anywhere in the lowercased text.
pub fn is_russian_name(text: &str) -> bool {
    let len = text.chars().count();
    if !(MIN_NAME_CHARS..=MAX_NAME_CHARS).contains(&len) {
        return false;
    }

    if !text
        .chars()
        .all(|c| is_cyrillic_letter(c) || c.is_whitespace() || c == '-')
    {
        return false;
    }

    !NAME_STOP_WORDS.is_match(&text.to_lowercase())
}

/// Decides the gender of `name` using the surrounding markup and the name's ending.
///
/// Context indicators win over endings, male over female at each step:
/// male context, female context, male ending, female ending. Names matching
/// none of them are unclassified and get `None`.
pub fn classify_gender(name: &str, context: &str) -> Option<Gender> {
    let context = context.to_lowercase();
    if MALE_INDICATORS.is_match(&context) {
        return Some(Gender::Male);
    }
    if FEMALE_INDICATORS.is_match(&context) {
        return Some(Gender::Female);
    }

    let name = name.to_lowercase();
    if MALE_ENDINGS.iter().any(|e| name.ends_with(e)) {
        return Some(Gender::Male);
    }
    if FEMALE_ENDINGS.iter().any(|e| name.ends_with(e)) {
        return Some(Gender::Female);
    }
    None
}

/// Pulls every Cyrillic word out of free text that passes [`is_russian_name`].
pub fn extract_name_tokens(text: &str) -> Vec<&str> {
    cyrillic_tokens(text).filter(|t| is_russian_name(t)).collect()
}

/// Normalizes a raw candidate into a capitalized single-word name.
///
/// Everything except word characters and hyphens is dropped first; the rest
/// must then be 2 to 20 Russian letters, so hyphenated names are rejected.
pub fn clean_name(raw: &str) -> Option<String> {
    let stripped: String = raw
        .trim()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-')
        .collect();

    let len = stripped.chars().count();
    if !(MIN_NAME_CHARS..=MAX_NAME_CHARS).contains(&len) || !is_cyrillic_word(&stripped) {
        return None;
    }
    Some(capitalize(&stripped))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_russian_name_accepts_plain_names() {
        assert!(is_russian_name("Анна"));
        assert!(is_russian_name("Анна-Мария"));
        assert!(is_russian_name("Пётр Ильич"));
        assert!(is_russian_name("Ян"));
    }

    #[test]
    fn test_is_russian_name_rejects() {
        assert!(!is_russian_name(""));
        assert!(!is_russian_name("Я"));
        assert!(!is_russian_name("Anna"));
        assert!(!is_russian_name("Анна1"));
        assert!(!is_russian_name("Очень длинное название раздела"));
        assert!(!is_russian_name("Мужские имена"));
        assert!(!is_russian_name("Википедия"));
        // stop words match as substrings
        assert!(!is_russian_name("Имяреков"));
    }

    #[test]
    fn test_classify_by_context() {
        assert_eq!(
            classify_gender("Саша", r#"<ul class="мужские">"#),
            Some(Gender::Male)
        );
        assert_eq!(
            classify_gender("Никита", "<div>Женские имена</div>"),
            Some(Gender::Female)
        );
        // male indicators are checked before female ones
        assert_eq!(
            classify_gender("Саша", "мальчик и девочка"),
            Some(Gender::Male)
        );
    }

    #[test]
    fn test_classify_by_ending() {
        assert_eq!(classify_gender("Антон", ""), Some(Gender::Male));
        assert_eq!(classify_gender("Никитин", ""), Some(Gender::Male));
        assert_eq!(classify_gender("Мария", ""), Some(Gender::Female));
        assert_eq!(classify_gender("Ольга", ""), Some(Gender::Female));
        assert_eq!(classify_gender("Иван", ""), None);
        assert_eq!(classify_gender("Игорь", ""), None);
    }

    #[test]
    fn test_extract_name_tokens() {
        let tokens = extract_name_tokens("Популярные: Анна, Иван и Я. Список");
        assert_eq!(tokens, vec!["Популярные", "Анна", "Иван"]);
    }

    #[test]
    fn test_clean_name() {
        assert_eq!(clean_name("  аННА! ").as_deref(), Some("Анна"));
        assert_eq!(clean_name("ёлка").as_deref(), Some("Ёлка"));
        assert_eq!(clean_name("Анна-Мария"), None);
        assert_eq!(clean_name("Пётр Ильич").as_deref(), Some("Пётрильич"));
        assert_eq!(clean_name("Я"), None);
        assert_eq!(clean_name("Anna"), None);
    }
}
