// ABOUTME: Word validity filter, cleaner and keyword-based topical categorization.
// ABOUTME: CategorizedWords serializes as a JSON object with categories in a fixed order.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::text::is_cyrillic_word;

const MIN_WORD_CHARS: usize = 2;
const MAX_WORD_CHARS: usize = 20;

const CATEGORY_COUNT: usize = 13;

/// Wiki interface words that appear as link captions on dictionary pages.
const WORD_STOP_LIST: &[&str] = &[
    "категория",
    "страница",
    "вики",
    "ссылка",
    "редактировать",
    "обсуждение",
    "история",
    "создать",
    "поиск",
    "навигация",
    "меню",
    "заголовок",
];

/// Returns true if `word` is 2 to 20 Russian letters and not interface vocabulary.
pub fn is_valid_word(word: &str) -> bool {
    let len = word.chars().count();
    if !(MIN_WORD_CHARS..=MAX_WORD_CHARS).contains(&len) || !is_cyrillic_word(word) {
        return false;
    }
    !WORD_STOP_LIST.contains(&word.to_lowercase().as_str())
}

/// Trims and lowercases a raw word.
pub fn clean_word(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Topical bucket of a word. Declaration order is the output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Nature,
    Animals,
    People,
    Professions,
    Home,
    Food,
    Clothing,
    Transport,
    City,
    Time,
    Colors,
    Qualities,
    Other,
}

impl Category {
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Nature,
        Category::Animals,
        Category::People,
        Category::Professions,
        Category::Home,
        Category::Food,
        Category::Clothing,
        Category::Transport,
        Category::City,
        Category::Time,
        Category::Colors,
        Category::Qualities,
        Category::Other,
    ];

    /// JSON key of the category.
    pub fn key(self) -> &'static str {
        match self {
            Category::Nature => "nature",
            Category::Animals => "animals",
            Category::People => "people",
            Category::Professions => "professions",
            Category::Home => "home",
            Category::Food => "food",
            Category::Clothing => "clothing",
            Category::Transport => "transport",
            Category::City => "city",
            Category::Time => "time",
            Category::Colors => "colors",
            Category::Qualities => "qualities",
            Category::Other => "other",
        }
    }

    /// Words that place a word in this category. `Other` has none.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Nature => &[
                "солнце", "луна", "звезда", "небо", "дождь", "снег", "ветер", "река", "море",
                "гора", "лес", "дерево", "цветок",
            ],
            Category::Animals => &[
                "собака", "кошка", "лошадь", "корова", "птица", "рыба", "волк", "медведь",
                "лиса", "заяц",
            ],
            Category::People => &[
                "человек", "мужчина", "женщина", "ребёнок", "мать", "отец", "сын", "дочь",
                "брат", "сестра",
            ],
            Category::Professions => &[
                "учитель", "врач", "повар", "водитель", "строитель", "художник", "писатель",
                "музыкант",
            ],
            Category::Home => &[
                "дом", "квартира", "комната", "кухня", "окно", "дверь", "стол", "стул",
                "кровать", "шкаф",
            ],
            Category::Food => &[
                "хлеб", "мясо", "рыба", "молоко", "сыр", "яйцо", "картофель", "яблоко", "чай",
                "кофе",
            ],
            Category::Clothing => &[
                "рубашка", "платье", "брюки", "пиджак", "шапка", "обувь", "туфли", "сапоги",
            ],
            Category::Transport => &[
                "машина", "автобус", "поезд", "самолёт", "корабль", "велосипед", "мотоцикл",
            ],
            Category::City => &[
                "улица", "дорога", "площадь", "парк", "магазин", "ресторан", "больница", "школа",
            ],
            Category::Time => &[
                "время", "час", "день", "неделя", "месяц", "год", "утро", "вечер", "ночь",
            ],
            Category::Colors => &[
                "красный", "синий", "зелёный", "жёлтый", "чёрный", "белый", "серый",
            ],
            Category::Qualities => &[
                "большой", "маленький", "хороший", "плохой", "красивый", "новый", "старый",
            ],
            Category::Other => &[],
        }
    }

    /// First category whose keyword list contains `word`, else `Other`.
    pub fn of(word: &str) -> Category {
        Category::ALL
            .into_iter()
            .find(|c| c.keywords().contains(&word))
            .unwrap_or(Category::Other)
    }
}

/// Words grouped by [`Category`], each bucket keeping input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorizedWords {
    buckets: [Vec<String>; CATEGORY_COUNT],
}

impl CategorizedWords {
    pub fn get(&self, category: Category) -> &[String] {
        &self.buckets[category as usize]
    }

    /// Categories in output order with their words.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        Category::ALL
            .into_iter()
            .map(move |c| (c, self.buckets[c as usize].as_slice()))
    }
}

impl Serialize for CategorizedWords {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.buckets.len()))?;
        for (category, words) in self.iter() {
            map.serialize_entry(category.key(), words)?;
        }
        map.end()
    }
}

/// Sorts words into categories.
pub fn categorize<S: AsRef<str>>(words: &[S]) -> CategorizedWords {
    let mut out = CategorizedWords::default();
    for word in words {
        let word = word.as_ref();
        out.buckets[Category::of(word) as usize].push(word.to_string());
    }
    out
}
