use cricket_history::reference::{Era, Role};
use cricket_history::state::{
    AppState, Delta, PlayerProfile, PlayerStatLine, ProviderCommand, Screen, apply_delta,
};

fn names(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("Player {i}")).collect()
}

fn sample_profile(name: &str) -> PlayerProfile {
    PlayerProfile {
        full_name: name.to_string(),
        nickname: None,
        date_of_birth: "18 July 1848".to_string(),
        place_of_birth: "Downend".to_string(),
        country: "England".to_string(),
        playing_era: "1865 - 1908".to_string(),
        role: Role::AllRounder,
        batting_style: "Right-handed".to_string(),
        bowling_style: "Right-arm medium".to_string(),
        formats_played: vec!["Test".to_string()],
        career_statistics: vec![PlayerStatLine {
            format: "Test".to_string(),
            matches: 22,
            runs: Some(1098),
            wickets: Some(9),
            average: 32.29,
            strike_rate: None,
            economy: None,
        }],
        era_rating: "Founding giant".to_string(),
        major_achievements: vec!["First Test century for England".to_string()],
        iconic_moments: Vec::new(),
        strengths: String::new(),
        impact: String::new(),
        interesting_facts: Vec::new(),
        legacy_summary: "Shaped modern batting.".to_string(),
    }
}

fn era_request(cmd: &ProviderCommand) -> u64 {
    match cmd {
        ProviderCommand::LoadEra { request, .. } => *request,
        other => panic!("expected era load, got {other:?}"),
    }
}

/// Starts an era load and resolves it with `count` names.
fn loaded_state(count: usize) -> AppState {
    let mut state = AppState::new();
    let cmd = state.begin_era_load();
    apply_delta(
        &mut state,
        Delta::EraLoaded {
            request: era_request(&cmd),
            players: names(count),
            insight: "Two paragraphs.".to_string(),
        },
    );
    state
}

#[test]
fn golden_age_load_applies_list_and_insight_together() {
    let mut state = AppState::new();
    assert_eq!(state.era, Era::GoldenAge);

    let cmd = state.begin_era_load();
    match &cmd {
        ProviderCommand::LoadEra { era, filters, .. } => {
            assert_eq!(*era, Era::GoldenAge);
            assert!(filters.is_empty());
        }
        other => panic!("unexpected command {other:?}"),
    }
    assert!(state.is_loading());
    assert!(state.players.is_empty());
    assert!(state.insight.is_empty());

    apply_delta(
        &mut state,
        Delta::EraLoaded {
            request: era_request(&cmd),
            players: names(8),
            insight: "Grace, then Bradman.".to_string(),
        },
    );
    assert!(!state.is_loading());
    assert_eq!(state.players.len(), 8);
    assert_eq!(state.insight, "Grace, then Bradman.");
}

#[test]
fn superseded_era_results_are_dropped() {
    let mut state = AppState::new();
    let first = state.begin_era_load();
    let second = state.next_era().expect("golden age has a successor");

    apply_delta(
        &mut state,
        Delta::EraLoaded {
            request: era_request(&first),
            players: names(3),
            insight: "stale".to_string(),
        },
    );
    assert!(state.players.is_empty());
    assert!(state.era_loading());

    apply_delta(
        &mut state,
        Delta::EraLoaded {
            request: era_request(&second),
            players: names(8),
            insight: "fresh".to_string(),
        },
    );
    assert_eq!(state.era, Era::PostWar);
    assert_eq!(state.insight, "fresh");
    assert!(!state.era_loading());
}

#[test]
fn choosing_the_current_era_does_not_reload() {
    let mut state = AppState::new();
    assert!(state.set_era(Era::GoldenAge).is_none());
    assert!(state.set_era(Era::ModernT20).is_some());
    assert!(state.next_era().is_none());
    assert_eq!(state.era, Era::ModernT20);
}

#[test]
fn filter_changes_reload_but_typing_does_not() {
    let mut state = loaded_state(8);

    let cmd = state.cycle_country();
    match cmd {
        ProviderCommand::LoadEra { filters, .. } => assert_eq!(filters.country, Some("England")),
        other => panic!("unexpected command {other:?}"),
    }

    let cmd = state.cycle_role();
    match cmd {
        ProviderCommand::LoadEra { filters, .. } => assert_eq!(filters.role, Some(Role::Batter)),
        other => panic!("unexpected command {other:?}"),
    }

    state.start_search();
    for ch in "bodyline".chars() {
        state.push_search_char(ch);
    }
    state.pop_search_char();
    assert_eq!(state.filters.search, "bodylin");
    assert!(state.search_active);

    let cmd = state.submit_search();
    assert!(!state.search_active);
    match cmd {
        ProviderCommand::LoadEra { filters, .. } => {
            assert_eq!(filters.search, "bodylin");
            assert_eq!(filters.country, Some("England"));
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn clearing_filters_resets_all_three_and_reloads() {
    let mut state = AppState::new();
    let _ = state.cycle_country();
    let _ = state.cycle_role();
    state.push_search_char('x');
    let cmd = state.begin_era_load();
    apply_delta(
        &mut state,
        Delta::EraLoaded {
            request: era_request(&cmd),
            players: Vec::new(),
            insight: String::new(),
        },
    );
    assert!(state.players.is_empty());

    let cmd = state.clear_filters();
    assert!(state.filters.is_empty());
    assert!(state.filters.country.is_none());
    assert!(state.filters.role.is_none());
    assert!(state.filters.search.is_empty());
    assert!(state.era_loading());
    match cmd {
        ProviderCommand::LoadEra { filters, .. } => assert!(filters.is_empty()),
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn profile_then_back_keeps_list_and_filters() {
    let mut state = AppState::new();
    let _ = state.cycle_country();
    let cmd = state.begin_era_load();
    apply_delta(
        &mut state,
        Delta::EraLoaded {
            request: era_request(&cmd),
            players: names(8),
            insight: "narrative".to_string(),
        },
    );
    state.select_next();
    state.select_down();
    assert_eq!(state.selected, 5);
    let filters_before = state.filters.clone();
    let requests_before = state.era_request;

    let cmd = state.select_player().expect("a card is selected");
    let request = match cmd {
        ProviderCommand::LoadProfile { request, name } => {
            assert_eq!(name, "Player 6");
            request
        }
        other => panic!("unexpected command {other:?}"),
    };
    apply_delta(
        &mut state,
        Delta::ProfileLoaded {
            request,
            name: "Player 6".to_string(),
            profile: Some(sample_profile("Player 6")),
        },
    );
    assert_eq!(state.screen, Screen::Profile);
    assert!(state.profile.is_some());

    state.back_to_archive();
    assert_eq!(state.screen, Screen::Archive);
    assert!(state.profile.is_none());
    assert_eq!(state.players, names(8));
    assert_eq!(state.insight, "narrative");
    assert_eq!(state.filters, filters_before);
    assert_eq!(state.era_request, requests_before);
    assert!(!state.is_loading());
}

#[test]
fn missing_profile_stays_on_the_list() {
    let mut state = loaded_state(4);
    let request = match state.select_player() {
        Some(ProviderCommand::LoadProfile { request, .. }) => request,
        other => panic!("unexpected command {other:?}"),
    };
    apply_delta(
        &mut state,
        Delta::ProfileLoaded {
            request,
            name: "Player 1".to_string(),
            profile: None,
        },
    );
    assert_eq!(state.screen, Screen::Archive);
    assert!(state.profile.is_none());
    assert!(!state.is_loading());
    assert!(state.logs.iter().any(|l| l.starts_with("[WARN]")));
}

#[test]
fn no_selection_without_players() {
    let mut state = loaded_state(0);
    assert!(state.select_player().is_none());
}

#[test]
fn grid_navigation_stays_in_bounds() {
    let mut state = loaded_state(6);
    state.select_up();
    assert_eq!(state.selected, 0);
    state.select_down();
    assert_eq!(state.selected, 4);
    state.select_down();
    assert_eq!(state.selected, 4);
    state.select_next();
    state.select_next();
    assert_eq!(state.selected, 5);
    state.select_prev();
    assert_eq!(state.selected, 4);
}

#[test]
fn console_log_is_bounded() {
    let mut state = AppState::new();
    for i in 0..250 {
        apply_delta(&mut state, Delta::Log(format!("[INFO] line {i}")));
    }
    assert_eq!(state.logs.len(), 200);
    assert_eq!(state.logs.back().map(String::as_str), Some("[INFO] line 249"));
}

#[test]
fn superseded_profile_is_dropped_without_switching_screen() {
    let mut state = loaded_state(8);
    let first = match state.select_player() {
        Some(ProviderCommand::LoadProfile { request, .. }) => request,
        other => panic!("unexpected command {other:?}"),
    };
    state.select_next();
    let second = match state.select_player() {
        Some(ProviderCommand::LoadProfile { request, name }) => {
            assert_eq!(name, "Player 2");
            request
        }
        other => panic!("unexpected command {other:?}"),
    };
    assert_ne!(first, second);

    apply_delta(
        &mut state,
        Delta::ProfileLoaded {
            request: first,
            name: "Player 1".to_string(),
            profile: Some(sample_profile("Player 1")),
        },
    );
    assert_eq!(state.screen, Screen::Archive);
    assert!(state.profile.is_none());
    assert_eq!(state.pending_profile, Some(second));
    assert!(state.is_loading());

    apply_delta(
        &mut state,
        Delta::ProfileLoaded {
            request: second,
            name: "Player 2".to_string(),
            profile: Some(sample_profile("Player 2")),
        },
    );
    assert_eq!(state.screen, Screen::Profile);
    assert_eq!(
        state.profile.as_ref().map(|p| p.full_name.as_str()),
        Some("Player 2")
    );
}

#[test]
fn profile_scroll_stops_at_content_end() {
    let mut state = AppState::new();
    for _ in 0..10 {
        state.scroll_profile_down(3);
    }
    assert_eq!(state.profile_scroll, 3);
    state.scroll_profile_down(1);
    assert_eq!(state.profile_scroll, 1);
    state.scroll_profile_up();
    state.scroll_profile_up();
    assert_eq!(state.profile_scroll, 0);
}
