//! Property-based invariant tests for the start page core.
//!
//! Verifies:
//! 1. Greeting classification covers every hour with the 12/18 boundaries
//! 2. Clock text is always `HH:MM:SS` and parses back to the same components
//! 3. Clock updates are idempotent for a fixed instant
//! 4. Redirect URLs always carry the search text as the last query pair
//! 5. Only Enter submits; every other normalized key is ignored

use homepage_core::input::normalize_dom_key;
use homepage_core::{
    ClockFrame, ClockUpdater, FixedClock, Greeting, KeyCode, KeyInput, KeyOutcome, LocalTime,
    MemorySurface, RecordingNavigator, SearchEngine, StartPage, StartPageConfig, WallClock,
};
use proptest::prelude::*;

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_local_time() -> impl Strategy<Value = LocalTime> {
    (0u32..86_400).prop_map(LocalTime::from_seconds_of_day)
}

fn arb_non_enter_key() -> impl Strategy<Value = (String, String)> {
    prop_oneof![
        "[a-zA-Z0-9]".prop_map(|k| (k.clone(), format!("Key{}", k.to_uppercase()))),
        Just(("Escape".to_owned(), "Escape".to_owned())),
        Just(("Tab".to_owned(), "Tab".to_owned())),
        Just(("Backspace".to_owned(), "Backspace".to_owned())),
        Just(("ArrowDown".to_owned(), "ArrowDown".to_owned())),
        Just(("Shift".to_owned(), "ShiftLeft".to_owned())),
        Just((" ".to_owned(), "Space".to_owned())),
    ]
}

// ── Properties ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn greeting_matches_hour_ranges(hour in 0u8..24) {
        let expected = if hour < 12 {
            Greeting::Morning
        } else if hour <= 18 {
            Greeting::Afternoon
        } else {
            Greeting::Evening
        };
        prop_assert_eq!(Greeting::for_hour(hour), expected);
    }

    #[test]
    fn clock_text_is_zero_padded(now in arb_local_time()) {
        let text = now.clock_text();
        prop_assert_eq!(text.len(), 8);
        let parts: Vec<&str> = text.split(':').collect();
        prop_assert_eq!(parts.len(), 3);
        for part in &parts {
            prop_assert_eq!(part.len(), 2);
            prop_assert!(part.bytes().all(|b| b.is_ascii_digit()));
        }
        prop_assert_eq!(parts[0].parse::<u8>().unwrap(), now.hour());
        prop_assert_eq!(parts[1].parse::<u8>().unwrap(), now.minute());
        prop_assert_eq!(parts[2].parse::<u8>().unwrap(), now.second());
    }

    #[test]
    fn clock_update_is_idempotent(now in arb_local_time(), name in "[A-Za-z ]{0,16}") {
        let updater = ClockUpdater::new(name.clone());
        let mut surface = MemorySurface::default();
        let first = updater.update(&mut surface, now);
        let after_first = surface.clone();
        let second = updater.update(&mut surface, now);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(after_first.clock_text, surface.clock_text);
        prop_assert_eq!(after_first.title, surface.title);
        prop_assert_eq!(first, ClockFrame::render(now, &name));
    }

    #[test]
    fn redirect_carries_text_verbatim(text in any::<String>()) {
        let url = SearchEngine::default().redirect_url(&text);
        let (key, value) = url.query_pairs().last().expect("query pair");
        prop_assert_eq!(key.as_ref(), "q");
        prop_assert_eq!(value.as_ref(), text.as_str());
        prop_assert!(url.fragment().is_none());
        prop_assert!(!url.query().unwrap_or("").contains(' '));
    }

    #[test]
    fn non_enter_keys_never_redirect((key, code) in arb_non_enter_key(), text in ".{0,20}") {
        let page = StartPage::new(&StartPageConfig::default()).unwrap();
        let mut nav = RecordingNavigator::new();
        let input = KeyInput::from_dom(&key, &code, 0, false);
        let outcome = page.handle_key(&input, &text, &mut nav).unwrap();
        prop_assert_eq!(outcome, KeyOutcome::Ignored);
        prop_assert!(nav.visited().is_empty());
    }

    #[test]
    fn enter_redirects_exactly_once(text in ".{0,20}") {
        let page = StartPage::new(&StartPageConfig::default()).unwrap();
        let mut nav = RecordingNavigator::new();
        let input = KeyInput::from_dom("Enter", "Enter", 13, false);
        page.handle_key(&input, &text, &mut nav).unwrap();
        prop_assert_eq!(nav.visited().len(), 1);
    }
}

#[test]
fn one_day_of_ticks_cycles_greetings_in_order() {
    let page = StartPage::new(&StartPageConfig::default()).unwrap();
    let mut clock = FixedClock::new(LocalTime::MIDNIGHT);
    let mut surface = MemorySurface::default();
    let mut seen = Vec::new();
    for _ in 0..24 {
        let frame = page.tick(&clock, &mut surface);
        if seen.last() != Some(&frame.greeting) {
            seen.push(frame.greeting);
        }
        clock.advance_secs(3600);
    }
    assert_eq!(
        seen,
        vec![Greeting::Morning, Greeting::Afternoon, Greeting::Evening]
    );
    assert_eq!(clock.now_local(), LocalTime::MIDNIGHT);
}

#[test]
fn numpad_enter_counts_as_enter() {
    assert_eq!(normalize_dom_key("Enter", "NumpadEnter", 13), KeyCode::Enter);
}
