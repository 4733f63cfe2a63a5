//! Response composition
//!
//! Maps a category and its parameters to the handler identifier and the
//! confirmation sentence spoken back to the user. Defaults for missing
//! fields are applied here, never during extraction.

use super::types::{
    CommandCategory, ComposedResponse, MusicAction, MusicParams, ParameterSet, ScheduleParams,
    SearchType, WeatherParams,
};

const CALENDAR_DEFAULT_DATE: &str = "nieokreślonej dacie";
const CALENDAR_DEFAULT_TIME: &str = "nieokreślonym czasie";
const CALENDAR_DEFAULT_TITLE: &str = "Nowe wydarzenie";

const REMINDER_DEFAULT_DATE: &str = "dziś";
const REMINDER_DEFAULT_TIME: &str = "wkrótce";
const REMINDER_DEFAULT_TITLE: &str = "przypomnienie";

const WEATHER_DEFAULT_LOCATION: &str = "Twojej lokalizacji";

const VOLUME_SET_DEFAULT: u32 = 50;

pub const UNKNOWN_MESSAGE: &str = "Wykryłam polecenie, ale nie rozpoznaję jego dokładnego typu.";

/// Downstream handler responsible for a category
pub fn handler_id(category: CommandCategory) -> Option<&'static str> {
    match category {
        CommandCategory::Calendar => Some("calendar_handler"),
        CommandCategory::Reminder => Some("reminder_handler"),
        CommandCategory::Weather => Some("weather_handler"),
        CommandCategory::Email => Some("email_handler"),
        CommandCategory::Music => Some("music_handler"),
        CommandCategory::Unknown => None,
    }
}

/// Short Polish label of what the command does
pub fn description(category: CommandCategory) -> &'static str {
    match category {
        CommandCategory::Calendar => "Dodanie wydarzenia do kalendarza",
        CommandCategory::Reminder => "Ustawienie przypomnienia",
        CommandCategory::Weather => "Sprawdzenie pogody",
        CommandCategory::Email => "Operacja na email",
        CommandCategory::Music => "Kontrola odtwarzania muzyki",
        CommandCategory::Unknown => "Nierozpoznane polecenie",
    }
}

/// Compose the handler identifier and confirmation message.
///
/// Total over all inputs: a parameter set that does not belong to the
/// category is treated as if nothing was extracted.
pub fn compose(category: CommandCategory, parameters: &ParameterSet) -> ComposedResponse {
    let message = match category {
        CommandCategory::Calendar => calendar_message(schedule_or_default(parameters)),
        CommandCategory::Reminder => reminder_message(schedule_or_default(parameters)),
        CommandCategory::Weather => {
            weather_message(parameters.weather().unwrap_or(&WeatherParams::default()))
        },
        CommandCategory::Email => "Wykryłam polecenie związane z obsługą email.".to_string(),
        CommandCategory::Music => {
            music_message(parameters.music().unwrap_or(&MusicParams::default()))
        },
        CommandCategory::Unknown => UNKNOWN_MESSAGE.to_string(),
    };

    ComposedResponse {
        handler_id: handler_id(category),
        message,
    }
}

fn schedule_or_default(parameters: &ParameterSet) -> ScheduleParams {
    parameters.schedule().cloned().unwrap_or_default()
}

fn calendar_message(params: ScheduleParams) -> String {
    let title = params.title.as_deref().unwrap_or(CALENDAR_DEFAULT_TITLE);
    let date = params.date.as_deref().unwrap_or(CALENDAR_DEFAULT_DATE);
    let time = params.time.as_deref().unwrap_or(CALENDAR_DEFAULT_TIME);
    format!(
        "Wykryłam polecenie utworzenia wydarzenia '{}' w kalendarzu na {} o godzinie {}.",
        title, date, time
    )
}

fn reminder_message(params: ScheduleParams) -> String {
    let title = params.title.as_deref().unwrap_or(REMINDER_DEFAULT_TITLE);
    let date = params.date.as_deref().unwrap_or(REMINDER_DEFAULT_DATE);
    let time = params.time.as_deref().unwrap_or(REMINDER_DEFAULT_TIME);

    // "jutro" and "pojutrze" read naturally without the preposition
    let date_text = match date {
        "jutro" | "pojutrze" => date.to_string(),
        other => format!("na {}", other),
    };

    format!(
        "Wykryłam polecenie ustawienia przypomnienia '{}' {} o godzinie {}.",
        title, date_text, time
    )
}

fn weather_message(params: &WeatherParams) -> String {
    let location = params.location.as_deref().unwrap_or(WEATHER_DEFAULT_LOCATION);
    format!("Wykryłam polecenie sprawdzenia pogody w {}.", location)
}

fn music_message(params: &MusicParams) -> String {
    let Some(action) = params.action else {
        return "Wykryłam polecenie kontroli muzyki.".to_string();
    };

    match action {
        MusicAction::Pause => "Wykryłam polecenie zatrzymania odtwarzania muzyki.".to_string(),
        MusicAction::Resume => "Wykryłam polecenie wznowienia odtwarzania muzyki.".to_string(),
        MusicAction::Next => "Wykryłam polecenie przejścia do następnego utworu.".to_string(),
        MusicAction::Previous => "Wykryłam polecenie przejścia do poprzedniego utworu.".to_string(),
        MusicAction::VolumeUp => match params.value {
            Some(value) => format!("Wykryłam polecenie zwiększenia głośności o {}%.", value),
            None => "Wykryłam polecenie zwiększenia głośności.".to_string(),
        },
        MusicAction::VolumeDown => match params.value {
            Some(value) => format!("Wykryłam polecenie zmniejszenia głośności o {}%.", value),
            None => "Wykryłam polecenie zmniejszenia głośności.".to_string(),
        },
        MusicAction::VolumeSet => format!(
            "Wykryłam polecenie ustawienia głośności na {}%.",
            params.value.unwrap_or(VOLUME_SET_DEFAULT)
        ),
        MusicAction::Search => search_message(params),
    }
}

fn search_message(params: &MusicParams) -> String {
    let subject = match params.search_type.unwrap_or_default() {
        SearchType::Track => "utworu",
        SearchType::Artist => "muzyki artysty",
        SearchType::Album => "albumu",
        SearchType::Playlist => "playlisty",
    };
    match params.query.as_deref() {
        Some(query) => format!(
            "Wykryłam polecenie wyszukania i odtworzenia {} \"{}\".",
            subject, query
        ),
        None => format!("Wykryłam polecenie wyszukania i odtworzenia {}.", subject),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::types::TargetPlatform;

    fn music(action: MusicAction, value: Option<u32>) -> ParameterSet {
        ParameterSet::Music(MusicParams {
            action: Some(action),
            value,
            ..Default::default()
        })
    }

    fn message(category: CommandCategory, parameters: &ParameterSet) -> String {
        compose(category, parameters).message
    }

    // === Handler Tests ===

    #[test]
    fn test_handler_ids() {
        assert_eq!(handler_id(CommandCategory::Calendar), Some("calendar_handler"));
        assert_eq!(handler_id(CommandCategory::Reminder), Some("reminder_handler"));
        assert_eq!(handler_id(CommandCategory::Weather), Some("weather_handler"));
        assert_eq!(handler_id(CommandCategory::Email), Some("email_handler"));
        assert_eq!(handler_id(CommandCategory::Music), Some("music_handler"));
        assert_eq!(handler_id(CommandCategory::Unknown), None);
    }

    #[test]
    fn test_unknown_message() {
        let response = compose(CommandCategory::Unknown, &ParameterSet::Empty);
        assert!(response.handler_id.is_none());
        assert_eq!(response.message, UNKNOWN_MESSAGE);
    }

    // === Calendar Tests ===

    #[test]
    fn test_calendar_full() {
        let params = ParameterSet::Calendar(ScheduleParams {
            date: Some("12-05-2025".to_string()),
            time: Some("10:00".to_string()),
            title: Some("Przegląd projektu".to_string()),
        });
        assert_eq!(
            message(CommandCategory::Calendar, &params),
            "Wykryłam polecenie utworzenia wydarzenia 'Przegląd projektu' w kalendarzu na 12-05-2025 o godzinie 10:00."
        );
    }

    #[test]
    fn test_calendar_defaults() {
        let params = ParameterSet::Calendar(ScheduleParams::default());
        assert_eq!(
            message(CommandCategory::Calendar, &params),
            "Wykryłam polecenie utworzenia wydarzenia 'Nowe wydarzenie' w kalendarzu na nieokreślonej dacie o godzinie nieokreślonym czasie."
        );
    }

    // === Reminder Tests ===

    #[test]
    fn test_reminder_tomorrow_has_no_preposition() {
        let params = ParameterSet::Reminder(ScheduleParams {
            date: Some("jutro".to_string()),
            time: Some("15:00".to_string()),
            title: Some("spotkanie z Tomkiem".to_string()),
        });
        assert_eq!(
            message(CommandCategory::Reminder, &params),
            "Wykryłam polecenie ustawienia przypomnienia 'spotkanie z Tomkiem' jutro o godzinie 15:00."
        );
    }

    #[test]
    fn test_reminder_other_date_gets_preposition() {
        let params = ParameterSet::Reminder(ScheduleParams {
            date: Some("piątek".to_string()),
            ..Default::default()
        });
        assert_eq!(
            message(CommandCategory::Reminder, &params),
            "Wykryłam polecenie ustawienia przypomnienia 'przypomnienie' na piątek o godzinie wkrótce."
        );
    }

    #[test]
    fn test_reminder_defaults() {
        let params = ParameterSet::Reminder(ScheduleParams::default());
        assert_eq!(
            message(CommandCategory::Reminder, &params),
            "Wykryłam polecenie ustawienia przypomnienia 'przypomnienie' na dziś o godzinie wkrótce."
        );
    }

    // === Weather and Email Tests ===

    #[test]
    fn test_weather_location() {
        let params = ParameterSet::Weather(WeatherParams {
            location: Some("Warszawie".to_string()),
        });
        assert_eq!(
            message(CommandCategory::Weather, &params),
            "Wykryłam polecenie sprawdzenia pogody w Warszawie."
        );
    }

    #[test]
    fn test_weather_default_location() {
        assert_eq!(
            message(CommandCategory::Weather, &ParameterSet::Empty),
            "Wykryłam polecenie sprawdzenia pogody w Twojej lokalizacji."
        );
    }

    #[test]
    fn test_email() {
        let response = compose(CommandCategory::Email, &ParameterSet::Empty);
        assert_eq!(response.handler_id, Some("email_handler"));
        assert_eq!(response.message, "Wykryłam polecenie związane z obsługą email.");
    }

    // === Music Tests ===

    #[test]
    fn test_music_playback_messages() {
        let cases = [
            (MusicAction::Pause, "Wykryłam polecenie zatrzymania odtwarzania muzyki."),
            (MusicAction::Resume, "Wykryłam polecenie wznowienia odtwarzania muzyki."),
            (MusicAction::Next, "Wykryłam polecenie przejścia do następnego utworu."),
            (MusicAction::Previous, "Wykryłam polecenie przejścia do poprzedniego utworu."),
        ];
        for (action, expected) in cases {
            assert_eq!(message(CommandCategory::Music, &music(action, None)), expected);
        }
    }

    #[test]
    fn test_volume_with_and_without_delta() {
        assert_eq!(
            message(CommandCategory::Music, &music(MusicAction::VolumeDown, Some(20))),
            "Wykryłam polecenie zmniejszenia głośności o 20%."
        );
        assert_eq!(
            message(CommandCategory::Music, &music(MusicAction::VolumeDown, None)),
            "Wykryłam polecenie zmniejszenia głośności."
        );
        assert_eq!(
            message(CommandCategory::Music, &music(MusicAction::VolumeUp, Some(10))),
            "Wykryłam polecenie zwiększenia głośności o 10%."
        );
        assert_eq!(
            message(CommandCategory::Music, &music(MusicAction::VolumeUp, None)),
            "Wykryłam polecenie zwiększenia głośności."
        );
    }

    #[test]
    fn test_volume_set_fallback() {
        assert_eq!(
            message(CommandCategory::Music, &music(MusicAction::VolumeSet, None)),
            "Wykryłam polecenie ustawienia głośności na 50%."
        );
        assert_eq!(
            message(CommandCategory::Music, &music(MusicAction::VolumeSet, Some(150))),
            "Wykryłam polecenie ustawienia głośności na 150%."
        );
    }

    #[test]
    fn test_search_with_query_per_type() {
        let cases = [
            (SearchType::Track, "Wykryłam polecenie wyszukania i odtworzenia utworu \"X\"."),
            (SearchType::Artist, "Wykryłam polecenie wyszukania i odtworzenia muzyki artysty \"X\"."),
            (SearchType::Album, "Wykryłam polecenie wyszukania i odtworzenia albumu \"X\"."),
            (SearchType::Playlist, "Wykryłam polecenie wyszukania i odtworzenia playlisty \"X\"."),
        ];
        for (search_type, expected) in cases {
            let params = ParameterSet::Music(MusicParams {
                action: Some(MusicAction::Search),
                query: Some("X".to_string()),
                search_type: Some(search_type),
                target_platform: TargetPlatform::Spotify,
                ..Default::default()
            });
            assert_eq!(message(CommandCategory::Music, &params), expected);
        }
    }

    #[test]
    fn test_search_without_query() {
        let params = ParameterSet::Music(MusicParams {
            action: Some(MusicAction::Search),
            search_type: Some(SearchType::Album),
            ..Default::default()
        });
        assert_eq!(
            message(CommandCategory::Music, &params),
            "Wykryłam polecenie wyszukania i odtworzenia albumu."
        );
    }

    #[test]
    fn test_music_without_action_is_generic() {
        assert_eq!(
            message(CommandCategory::Music, &ParameterSet::Music(MusicParams::default())),
            "Wykryłam polecenie kontroli muzyki."
        );
    }

    // === Totality ===

    #[test]
    fn test_mismatched_parameters_treated_as_empty() {
        let weather = ParameterSet::Weather(WeatherParams {
            location: Some("Gdańsku".to_string()),
        });
        assert_eq!(
            message(CommandCategory::Calendar, &weather),
            message(CommandCategory::Calendar, &ParameterSet::Empty)
        );
        assert_eq!(
            message(CommandCategory::Music, &weather),
            "Wykryłam polecenie kontroli muzyki."
        );
    }

    #[test]
    fn test_every_category_has_message() {
        let all = CommandCategory::DETECTION_ORDER
            .iter()
            .copied()
            .chain([CommandCategory::Unknown]);
        for category in all {
            assert!(!message(category, &ParameterSet::Empty).is_empty());
            assert!(!description(category).is_empty());
        }
    }
}
