use betvalue_terminal::fake_feed::{seed_matches, seed_results};
use betvalue_terminal::select::{LeagueFilter, SortKey};
use betvalue_terminal::state::{AppState, Delta, Screen, apply_delta};

fn loaded_state() -> AppState {
    let mut state = AppState::new();
    state.screen = Screen::Dashboard;
    state.sort = SortKey::ExpectedValue;
    state.league_filter = LeagueFilter::All;
    apply_delta(&mut state, Delta::SetMatches(seed_matches()));
    apply_delta(&mut state, Delta::SetResults(seed_results()));
    state
}

#[test]
fn filtered_view_applies_search_and_league_criteria() {
    let mut state = loaded_state();
    assert_eq!(state.filtered_matches().len(), 3);

    state.search = "bar".to_string();
    let filtered = state.filtered_matches();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].home, "Barcelona");

    state.search.clear();
    state.league_filter = LeagueFilter::League("Bundesliga".to_string());
    let filtered = state.filtered_matches();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].home, "Bayern Munich");
}

#[test]
fn refresh_preserves_selection_by_match_id() {
    let mut state = loaded_state();
    // Under EV sort the Bayern fixture sits at index 1.
    state.selected = 1;
    let before = state.selected_match_id();

    apply_delta(&mut state, Delta::SetMatches(seed_matches()));
    assert_eq!(state.selected_match_id(), before);
}

#[test]
fn refresh_resets_selection_when_match_disappears() {
    let mut state = loaded_state();
    // Under EV sort index 2 is the Barcelona fixture.
    state.selected = 2;

    let mut shrunk = seed_matches();
    shrunk.retain(|m| m.league != "La Liga");
    apply_delta(&mut state, Delta::SetMatches(shrunk));

    assert_eq!(state.selected, 0);
    assert_eq!(state.filtered_matches().len(), 2);
}

#[test]
fn set_matches_clears_refreshing_and_stamps_time() {
    let mut state = AppState::new();
    state.refreshing = true;
    assert!(state.last_refresh.is_none());

    apply_delta(&mut state, Delta::SetMatches(seed_matches()));
    assert!(!state.refreshing);
    assert!(state.last_refresh.is_some());
}

#[test]
fn set_matches_closes_detail_when_selection_is_gone() {
    let mut state = loaded_state();
    state.selected = 0;
    state.detail_open = true;

    apply_delta(&mut state, Delta::SetMatches(Vec::new()));
    assert!(!state.detail_open);
}

#[test]
fn search_editing_resets_selection() {
    let mut state = loaded_state();
    state.selected = 2;

    state.search_input('b');
    state.search_input('a');
    state.search_input('r');
    assert_eq!(state.search, "bar");
    assert_eq!(state.selected, 0);

    state.search_backspace();
    assert_eq!(state.search, "ba");

    state.clear_search();
    assert!(state.search.is_empty());
    assert!(!state.search_active);
}

#[test]
fn cycle_league_filter_walks_the_loaded_leagues() {
    let mut state = loaded_state();
    assert_eq!(
        state.league_options(),
        vec!["Bundesliga", "La Liga", "Premier League"]
    );

    let mut seen = vec![state.league_filter.label().to_string()];
    for _ in 0..3 {
        state.cycle_league_filter();
        seen.push(state.league_filter.label().to_string());
    }
    assert_eq!(
        seen,
        vec!["ALL", "Bundesliga", "La Liga", "Premier League"]
    );

    state.cycle_league_filter();
    assert_eq!(state.league_filter, LeagueFilter::All);
}

#[test]
fn cycle_sort_keeps_the_selected_match() {
    let mut state = loaded_state();
    // EV order: Man City (0), Bayern (1), Barcelona (2).
    state.selected = 2;
    let before = state.selected_match_id();

    state.cycle_sort();
    assert_eq!(state.sort, SortKey::Confidence);
    assert_eq!(state.selected_match_id(), before);
    // Confidence order: 82, 78, 65 -> Barcelona moved to the bottom.
    assert_eq!(state.selected, 2);

    state.cycle_sort();
    assert_eq!(state.sort, SortKey::Date);
    assert_eq!(state.selected_match_id(), before);
}

#[test]
fn selection_wraps_in_both_directions() {
    let mut state = loaded_state();
    assert_eq!(state.selected, 0);

    state.select_prev();
    assert_eq!(state.selected, 2);
    state.select_next();
    assert_eq!(state.selected, 0);
    state.select_next();
    assert_eq!(state.selected, 1);
}

#[test]
fn selection_is_safe_on_an_empty_view() {
    let mut state = AppState::new();
    state.select_next();
    assert_eq!(state.selected, 0);
    state.select_prev();
    assert_eq!(state.selected, 0);
    state.clamp_selection();
    assert_eq!(state.selected, 0);
    assert!(state.selected_match().is_none());
}

#[test]
fn log_ring_is_bounded() {
    let mut state = AppState::new();
    for i in 0..250 {
        state.push_log(format!("[INFO] line {i}"));
    }
    assert_eq!(state.logs.len(), 200);
    assert_eq!(state.logs.front().map(String::as_str), Some("[INFO] line 50"));
}

#[test]
fn summary_derives_from_loaded_records() {
    let state = loaded_state();
    let summary = state.summary();

    assert_eq!(summary.tracked, 6);
    let hit_rate = summary.hit_rate.expect("results are loaded");
    assert!((hit_rate - 200.0 / 3.0).abs() < 0.01);
    let avg_ev = summary.avg_expected_value.expect("matches are loaded");
    assert!((avg_ev - (15.2 + 8.7 + 12.3) / 3.0).abs() < 0.01);
    assert!((summary.profit - 30.5).abs() < 0.001);
}

#[test]
fn summary_handles_an_empty_session() {
    let state = AppState::new();
    let summary = state.summary();
    assert_eq!(summary.tracked, 0);
    assert!(summary.hit_rate.is_none());
    assert!(summary.avg_expected_value.is_none());
    assert_eq!(summary.profit, 0.0);
}
