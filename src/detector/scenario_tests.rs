//! End-to-end tests for the detection pipeline
//!
//! These tests cover the full journey from raw text through classification,
//! parameter extraction and composition of the confirmation message.

use super::classifier::CommandDetector;
use super::types::*;
use serde_json::json;

/// Run the whole pipeline the way the request layer does
fn run_pipeline(input: &str) -> (DetectionResult, Option<CommandInfo>) {
    let result = CommandDetector::detect(input);
    let info = result
        .category
        .map(|category| CommandDetector::describe(category, &result.parameters));
    (result, info)
}

// === End-to-End Scenarios ===

#[test]
fn test_e2e_reminder_with_date_time_title() {
    let (result, info) = run_pipeline("ustaw przypomnienie na jutro o 15:00 temat: spotkanie z Tomkiem");
    assert!(result.matched);
    assert_eq!(result.category, Some(CommandCategory::Reminder));
    assert_eq!(
        serde_json::to_value(&result.parameters).unwrap(),
        json!({"date": "jutro", "time": "15:00", "title": "spotkanie z Tomkiem"})
    );

    let info = info.unwrap();
    assert_eq!(info.handler, Some("reminder_handler"));
    assert!(info.user_message.contains("jutro"));
    assert!(info.user_message.contains("15:00"));
    assert!(info.user_message.contains("spotkanie z Tomkiem"));
}

#[test]
fn test_e2e_volume_down() {
    let (result, info) = run_pipeline("zmniejsz głośność o 20");
    assert_eq!(result.category, Some(CommandCategory::Music));

    let music = result.parameters.music().unwrap();
    assert_eq!(music.action, Some(MusicAction::VolumeDown));
    assert_eq!(music.value, Some(20));
    assert_eq!(info.unwrap().user_message, "Wykryłam polecenie zmniejszenia głośności o 20%.");
}

#[test]
fn test_e2e_spotify_search() {
    let (result, info) = run_pipeline("włącz utwór Shape of You na spotify");
    assert_eq!(result.category, Some(CommandCategory::Music));
    assert_eq!(
        serde_json::to_value(&result.parameters).unwrap(),
        json!({
            "action": "search",
            "query": "Shape of You",
            "search_type": "track",
            "targetPlatform": "Spotify"
        })
    );
    assert_eq!(
        info.unwrap().user_message,
        "Wykryłam polecenie wyszukania i odtworzenia utworu \"Shape of You\"."
    );
}

#[test]
fn test_e2e_weather_location() {
    let (result, info) = run_pipeline("jaka jest pogoda w Warszawie");
    assert_eq!(result.category, Some(CommandCategory::Weather));
    assert_eq!(
        serde_json::to_value(&result.parameters).unwrap(),
        json!({"location": "Warszawie"})
    );
    assert_eq!(info.unwrap().user_message, "Wykryłam polecenie sprawdzenia pogody w Warszawie.");
}

#[test]
fn test_e2e_small_talk_falls_through() {
    let (result, info) = run_pipeline("opowiedz mi żart");
    assert!(!result.matched);
    assert!(result.category.is_none());
    assert!(result.parameters.is_empty());
    assert!(info.is_none());
}

// === Properties ===

#[test]
fn test_time_without_minutes_normalized() {
    let (result, _) = run_pipeline("przypomnij mi o treningu jutro o 8");
    let schedule = result.parameters.schedule().unwrap();
    assert_eq!(schedule.time, Some("8:00".to_string()));
    assert_eq!(schedule.date, Some("jutro".to_string()));
}

#[test]
fn test_volume_not_clamped() {
    let (result, info) = run_pipeline("ustaw głośność na 150");
    assert_eq!(result.category, Some(CommandCategory::Music));
    assert_eq!(result.parameters.music().unwrap().value, Some(150));
    assert_eq!(info.unwrap().user_message, "Wykryłam polecenie ustawienia głośności na 150%.");
}

#[test]
fn test_output_is_byte_identical_across_calls() {
    let inputs = [
        "dodaj spotkanie w piątek o 10 tytuł: przegląd kwartalny",
        "sprawdź pogodę w Zielonej Górze",
        "puść muzykę artysty Dawid Podsiadło",
    ];
    for input in inputs {
        let first = serde_json::to_string(&run_pipeline(input).1).unwrap();
        let second = serde_json::to_string(&run_pipeline(input).1).unwrap();
        assert_eq!(first, second, "{}", input);
    }
}

#[test]
fn test_keys_are_category_specific() {
    let cases = [
        ("dodaj wydarzenie jutro o 9", &["date", "time"][..]),
        ("jaka jest pogoda w Krakowie", &["location"][..]),
        ("wyślij email do Ani", &[][..]),
        ("zatrzymaj muzykę", &["action", "targetPlatform"][..]),
    ];
    for (input, expected) in cases {
        let (result, _) = run_pipeline(input);
        let value = serde_json::to_value(&result.parameters).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        keys.sort();
        assert_eq!(keys, expected, "{}", input);
    }
}

#[test]
fn test_calendar_event_with_weekday() {
    let (result, info) = run_pipeline("dodaj spotkanie w piątek o 10 tytuł: przegląd kwartalny");
    assert_eq!(result.category, Some(CommandCategory::Calendar));
    assert_eq!(
        info.unwrap().user_message,
        "Wykryłam polecenie utworzenia wydarzenia 'przegląd kwartalny' w kalendarzu na piątek o godzinie 10:00."
    );
}

#[test]
fn test_uppercase_input_keeps_captured_casing() {
    let (result, _) = run_pipeline("JAKA JEST POGODA W GDAŃSKU");
    assert_eq!(result.category, Some(CommandCategory::Weather));
    assert_eq!(
        result.parameters.weather().unwrap().location,
        Some("GDAŃSKU".to_string())
    );
}
