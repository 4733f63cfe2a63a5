//! Parameter extraction for detected commands
//!
//! Each category has its own ordered sub-pattern lists. For every field the
//! first sub-pattern that matches wins. Nothing is resolved against the clock:
//! "jutro" stays the literal token "jutro".

use super::types::{
    CommandCategory, MusicAction, MusicParams, ParameterSet, ScheduleParams, SearchType,
    TargetPlatform, WeatherParams,
};
use regex::Regex;
use std::sync::LazyLock;

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
}

// === Date Patterns ===
// "12-05-2025", "12.05", "na jutro", "pojutrze", "za 3 dni", "jutrzejszy dzień", "w piątek"
static DATE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)\b(\d{1,2}[.\-/]\d{1,2}[.\-/]\d{2,4})\b",
        r"(?i)\b(\d{1,2}[.\-/]\d{1,2})\b",
        r"(?i)\bna\s+(jutro|pojutrze|dziś|dzisiaj)\b",
        r"(?i)\b(jutro|pojutrze|dzisiaj|dziś|za\s+tydzień|za\s+\d+\s+dni)\b",
        r"(?i)\b(jutrzejs(?:zy|ki)\s+dzie[ńn])\b",
        r"(?i)\b(pojutrzejs(?:zy|ki)\s+dzie[ńn])\b",
        r"(?i)\bwe?\s+(poniedziałek|poniedzialek|wtorek|środę|srode|czwartek|piątek|piatek|sobotę|sobote|niedzielę|niedziele)\b",
    ])
});

static DAY_AFTER_TOMORROW_PHRASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^pojutrzejs(?:zy|ki)\s+dzie[ńn]$").unwrap()
});

static TOMORROW_PHRASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^jutrzejs(?:zy|ki)\s+dzie[ńn]$").unwrap()
});

// === Time Patterns ===
// "15:30", "o godzinie 8", "na godzinę 9:15", "o 7 rano", "o 18", "na 10"
static TIME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)\b(\d{1,2}:\d{2})\b",
        r"(?i)\bo\s+godzin(?:ie|e|nie)?\s+(\d{1,2}(?::\d{2})?)",
        r"(?i)\bna\s+godzin(?:ę|e|nie)?\s+(\d{1,2}(?::\d{2})?)",
        r"(?i)\bo\s+(\d{1,2})(?::\d{2})?\s+(?:rano|wieczorem|po\s+południu|w\s+nocy)",
        r"(?i)\bo\s+(\d{1,2}(?::\d{2})?)\b",
        r"(?i)\b(?:na|o)\s+(\d{1,2})\b",
    ])
});

// "24.12" after "na" is a date, not an hour
static DATE_CONTINUATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[.\-/]\d").unwrap()
});

// === Title Patterns ===
// "temat: spotkanie", "przypomnienie o: zakupy", "przypomnij mi aby zadzwonić, ..."
static TITLE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r#"(?i)\b(?:temat|tytuł|nazwa|treść|tresc)(?:\s+to)?:?\s+["„”]?([^"„”\n]+)["„”]?"#,
        r#"(?i)\b(?:przypomn?ienie|alert|powiadomienie)(?:\s+o:?|:)\s+["„”]?([^"„”\n\d][^"„”\n]*)["„”]?"#,
        r"(?i)\bprzypomn?ij(?:\s+mi)?\s+(?:o|że|aby)\s+([^,.]+)",
    ])
});

// === Weather Pattern ===
// "pogoda w Warszawie", "pogodę dla Nowego Sączu"
static LOCATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bpogod[aęy](?:\s+(?:w|we|dla))?\s+([^\s,.?!]+(?:\s+[^\s,.?!]+)?)").unwrap()
});

// === Music Action Patterns ===
static PAUSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:zatrzymaj|pauza|pauzę|wstrzymaj|\bstop\b)").unwrap()
});

// "wznów", "kontynuuj", or a bare "włącz muzykę" / "graj" with nothing to search for
static RESUME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:wznów|kontynuuj)|(?:włącz|odtwórz|\bplay|graj|puść)(?:\s+(?:muzykę|muzyke|odtwarzanie))?(?:\s+(?:na|w)\s+spotify)?[.!]?$",
    )
    .unwrap()
});

static NEXT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:następn[ya]|kolejn[ya])").unwrap()
});

static PREVIOUS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:poprzedni[ya]?|wcześniejsz[ya])").unwrap()
});

static VOLUME_UP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:zwiększ|podgłośnij|podnieś)").unwrap()
});

static VOLUME_DOWN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:zmniejsz|ścisz)").unwrap()
});

static VOLUME_SET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)ustaw\s+(?:głośność|volume)(?:\s+na)?(?:\s+([0-9]+)(?:\s*%|\s+procent)?)?").unwrap()
});

// "o 20", "do 80%", "o 15 procent"
static VOLUME_DELTA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:o|do)\s*([0-9]+)(?:\s*%|\s+procent)?").unwrap()
});

// === Music Search Patterns ===
// Ordered from the most specific phrasing to the bare "włącz <query>"
static SEARCH_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)(?:włącz|odtwórz|graj|puść)\s+(?:piosenkę|piosenke|utwór|utwor)(?:\s+pod\s+tytułem)?\s+(.+)",
        r"(?i)(?:włącz|odtwórz|graj|puść)\s+(?:muzykę|muzyke|utwory|piosenki)(?:\s+(?:wykonawcy|artysty|zespołu))?\s+(.+)",
        r"(?i)(?:włącz|odtwórz|graj|puść)\s+(?:album|płytę|plytę)(?:\s+pod\s+tytułem)?\s+(.+)",
        r"(?i)(?:włącz|odtwórz|graj|puść)\s+(?:playlistę|playliste|playlist)(?:\s+pod\s+nazwą)?\s+(.+)",
        r"(?i)(?:włącz|odtwórz|graj|puść)\s+(.+)",
    ])
});

static SEARCH_TYPE_KEYWORDS: LazyLock<Vec<(Regex, SearchType)>> = LazyLock::new(|| {
    vec![
        (Regex::new(r"(?i)\b(?:piosenkę|piosenke|utwór|utwor)\b").unwrap(), SearchType::Track),
        (Regex::new(r"(?i)\b(?:wykonawcy|artysty|zespołu)\b").unwrap(), SearchType::Artist),
        (Regex::new(r"(?i)\b(?:album|albumu|płytę|plytę)\b").unwrap(), SearchType::Album),
        (Regex::new(r"(?i)\b(?:playlistę|playliste|playlist)\b").unwrap(), SearchType::Playlist),
    ]
});

static SPOTIFY_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*\b(?:na|w)\s+spotify\s*[.!?]?\s*$").unwrap()
});

static SPOTIFY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bspotify\b").unwrap()
});

/// Extract the parameters of an already classified utterance.
///
/// Categories without parameters, and `Unknown`, yield [`ParameterSet::Empty`].
pub fn extract(text: &str, category: CommandCategory) -> ParameterSet {
    match category {
        CommandCategory::Calendar => ParameterSet::Calendar(extract_schedule(text)),
        CommandCategory::Reminder => ParameterSet::Reminder(extract_schedule(text)),
        CommandCategory::Weather => ParameterSet::Weather(extract_weather(text)),
        CommandCategory::Music => ParameterSet::Music(extract_music(text)),
        CommandCategory::Email | CommandCategory::Unknown => ParameterSet::Empty,
    }
}

/// Capture group 1 of the first pattern that matches
fn first_capture<'t>(patterns: &[Regex], text: &'t str) -> Option<&'t str> {
    patterns
        .iter()
        .find_map(|re| re.captures(text).and_then(|caps| caps.get(1)))
        .map(|m| m.as_str())
}

fn extract_schedule(text: &str) -> ScheduleParams {
    ScheduleParams {
        date: extract_date(text),
        time: extract_time(text),
        title: extract_title(text),
    }
}

pub(crate) fn extract_date(text: &str) -> Option<String> {
    let value = first_capture(&DATE_PATTERNS, text)?.trim();

    let date = if TOMORROW_PHRASE_RE.is_match(value) {
        "jutro".to_string()
    } else if DAY_AFTER_TOMORROW_PHRASE_RE.is_match(value) {
        "pojutrze".to_string()
    } else {
        value.to_lowercase()
    };
    Some(date)
}

pub(crate) fn extract_time(text: &str) -> Option<String> {
    let value = TIME_PATTERNS
        .iter()
        .flat_map(|re| re.captures_iter(text))
        .filter_map(|caps| caps.get(1))
        .find(|m| !DATE_CONTINUATION_RE.is_match(&text[m.end()..]))?
        .as_str()
        .trim();
    if value.contains(':') {
        Some(value.to_string())
    } else {
        Some(format!("{}:00", value))
    }
}

pub(crate) fn extract_title(text: &str) -> Option<String> {
    TITLE_PATTERNS.iter().find_map(|re| {
        let caps = re.captures(text)?;
        let title = caps.get(1)?.as_str().trim();
        if title.is_empty() {
            None
        } else {
            Some(title.to_string())
        }
    })
}

fn is_location_preposition(word: &str) -> bool {
    matches!(word.to_lowercase().as_str(), "w" | "we" | "dla")
}

fn extract_weather(text: &str) -> WeatherParams {
    let location = LOCATION_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| {
            // a dangling "w" with no place after it is not a location
            let words: Vec<&str> = m.as_str().split_whitespace().collect();
            match words.as_slice() {
                [] => None,
                [first, ..] if is_location_preposition(first) => None,
                [first, last] if is_location_preposition(last) => Some(first.to_string()),
                _ => Some(words.join(" ")),
            }
        });
    WeatherParams { location }
}

fn extract_music(text: &str) -> MusicParams {
    let mut params = MusicParams {
        target_platform: if SPOTIFY_RE.is_match(text) {
            TargetPlatform::Spotify
        } else {
            TargetPlatform::Unspecified
        },
        ..Default::default()
    };

    if PAUSE_RE.is_match(text) {
        params.action = Some(MusicAction::Pause);
    } else if RESUME_RE.is_match(text) {
        params.action = Some(MusicAction::Resume);
    } else if NEXT_RE.is_match(text) {
        params.action = Some(MusicAction::Next);
    } else if PREVIOUS_RE.is_match(text) {
        params.action = Some(MusicAction::Previous);
    } else if VOLUME_UP_RE.is_match(text) {
        params.action = Some(MusicAction::VolumeUp);
        params.value = volume_delta(text);
    } else if VOLUME_DOWN_RE.is_match(text) {
        params.action = Some(MusicAction::VolumeDown);
        params.value = volume_delta(text);
    } else if let Some(caps) = VOLUME_SET_RE.captures(text) {
        params.action = Some(MusicAction::VolumeSet);
        // The only value the extractor fills in on its own
        params.value = caps
            .get(1)
            .and_then(|m| m.as_str().parse().ok())
            .or(Some(50));
    }

    if params.action.is_none() && SEARCH_PATTERNS.iter().any(|re| re.is_match(text)) {
        params.action = Some(MusicAction::Search);
        params.search_type = Some(search_type(text));
        params.query = search_query(text);
    }

    params
}

fn volume_delta(text: &str) -> Option<u32> {
    VOLUME_DELTA_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

fn search_type(text: &str) -> SearchType {
    SEARCH_TYPE_KEYWORDS
        .iter()
        .find(|(re, _)| re.is_match(text))
        .map(|(_, search_type)| *search_type)
        .unwrap_or_default()
}

fn search_query(text: &str) -> Option<String> {
    let raw = first_capture(&SEARCH_PATTERNS, text)?;
    let query = SPOTIFY_SUFFIX_RE.replace(raw, "");
    let query = query.trim().trim_end_matches(['.', '!', '?']).trim_end();
    if query.is_empty() {
        None
    } else {
        Some(query.to_string())
    }
}
