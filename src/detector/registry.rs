//! Pattern registry used for command classification
//!
//! Rules are grouped per category and listed in priority order. The category
//! order comes from [`CommandCategory::DETECTION_ORDER`], so the tie-break
//! between overlapping rules ("ustaw przypomnienie" vs "ustaw głośność") is
//! declared in one place instead of following map iteration order.
//! Every pattern is case-insensitive and may match anywhere in the text.

use super::types::CommandCategory;
use regex::Regex;
use std::sync::LazyLock;

/// A single classification rule
#[derive(Debug)]
pub struct MatchRule {
    pub name: &'static str,
    pub category: CommandCategory,
    regex: Regex,
}

impl MatchRule {
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

/// Ordered rule list of one category
#[derive(Debug)]
pub struct CategoryRules {
    pub category: CommandCategory,
    pub rules: Vec<MatchRule>,
}

// === Calendar Rules ===
// "dodaj wydarzenie", "zaplanuj nowe spotkanie w kalendarzu", "zapisz to w kalendarzu"
const CALENDAR_RULES: &[(&str, &str)] = &[
    (
        "calendar_create_event",
        r"(?i)(?:utwórz|dodaj|zaplanuj)(?:\s+(?:nowe|nowy))?\s+(?:wydarzenie|spotkanie)(?:\s+w\s+(?:kalendarzu|google\s+calendar))?",
    ),
    (
        "calendar_save",
        r"(?i)zapisz(?:\s+to)?\s+w\s+(?:kalendarzu|google\s+calendar)",
    ),
];

// === Reminder Rules ===
// "ustaw przypomnienie", "przypomnij mi o ...", "zapisz przypomnienie"
const REMINDER_RULES: &[(&str, &str)] = &[
    (
        "reminder_create",
        r"(?i)(?:utwórz|dodaj|ustaw)(?:\s+(?:nowe|nowy|nową))?\s+(?:przypomn?ienie|alert|powiadomienie)",
    ),
    (
        "reminder_remind_me",
        r"(?i)przypomnij(?:\s+(?:mi|nam))?\s+(?:o|że|aby)\b",
    ),
    (
        "reminder_save",
        r"(?i)zapisz\s+przypomn?ienie",
    ),
];

// === Weather Rules ===
// "jaka jest pogoda", "jak będzie pogoda", "sprawdź dzisiejszą pogodę"
const WEATHER_RULES: &[(&str, &str)] = &[
    (
        "weather_ask",
        r"(?i)(?:jaka|jak)(?:\s+jest|\s+będzie)?\s+pogoda",
    ),
    (
        "weather_check",
        r"(?i)sprawdź(?:\s+(?:aktualną|dzisiejszą|jutrzejszą))?\s+pogodę",
    ),
];

// === Email Rules ===
// "wyślij email do ...", "napisz nową wiadomość", "utwórz nowy mail"
const EMAIL_RULES: &[(&str, &str)] = &[
    (
        "email_send",
        r"(?i)(?:wyślij|napisz)(?:\s+(?:nowy|nowego|nową))?\s+(?:e-?mail|mail|wiadomość)",
    ),
    (
        "email_create",
        r"(?i)(?:stwórz|utwórz)(?:\s+(?:nowy|nowego|nową))?\s+(?:e-?mail|mail|wiadomość)",
    ),
];

// === Music Rules ===
// playback control, volume and "włącz <coś>" search requests
const MUSIC_RULES: &[(&str, &str)] = &[
    (
        "music_pause",
        r"(?i)(?:zatrzymaj|pauza|wstrzymaj|\bstop\b)",
    ),
    (
        "music_resume",
        r"(?i)(?:wznów|kontynuuj|odtwórz|\bplay\b|graj)",
    ),
    (
        "music_next",
        r"(?i)(?:następn[ya]|kolejn[ya])",
    ),
    (
        "music_previous",
        r"(?i)(?:poprzedni[ya]?|wcześniejsz[ya])",
    ),
    (
        "music_volume_up",
        r"(?i)(?:zwiększ|podgłośnij|podnieś)(?:\s+(?:głośność|volume))?",
    ),
    (
        "music_volume_down",
        r"(?i)(?:zmniejsz|ścisz)(?:\s+(?:głośność|volume))?",
    ),
    (
        "music_volume_set",
        r"(?i)ustaw\s+(?:głośność|volume)",
    ),
    (
        "music_play_request",
        r"(?i)(?:włącz|puść)",
    ),
];

fn rule_table(category: CommandCategory) -> &'static [(&'static str, &'static str)] {
    match category {
        CommandCategory::Calendar => CALENDAR_RULES,
        CommandCategory::Reminder => REMINDER_RULES,
        CommandCategory::Weather => WEATHER_RULES,
        CommandCategory::Email => EMAIL_RULES,
        CommandCategory::Music => MUSIC_RULES,
        CommandCategory::Unknown => &[],
    }
}

static REGISTRY: LazyLock<Vec<CategoryRules>> = LazyLock::new(|| {
    CommandCategory::DETECTION_ORDER
        .iter()
        .map(|&category| CategoryRules {
            category,
            rules: rule_table(category)
                .iter()
                .map(|&(name, pattern)| MatchRule {
                    name,
                    category,
                    regex: Regex::new(pattern).unwrap(),
                })
                .collect(),
        })
        .collect()
});

/// All categories with their rules, in detection order
pub fn registry() -> &'static [CategoryRules] {
    &REGISTRY
}

/// Rules of a single category, empty for [`CommandCategory::Unknown`]
pub fn rules_for(category: CommandCategory) -> &'static [MatchRule] {
    registry()
        .iter()
        .find(|group| group.category == category)
        .map(|group| group.rules.as_slice())
        .unwrap_or(&[])
}

/// Total number of classification rules
pub fn rule_count() -> usize {
    registry().iter().map(|group| group.rules.len()).sum()
}
