use std::collections::VecDeque;
use std::env;
use std::time::{Duration, SystemTime};

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::select::{self, LeagueFilter, SortKey};

pub const FORM_LEN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Home,
    Draw,
    Away,
}

impl Outcome {
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Home => "home",
            Outcome::Draw => "draw",
            Outcome::Away => "away",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormOutcome {
    Win,
    Draw,
    Loss,
}

impl FormOutcome {
    pub fn letter(self) -> char {
        match self {
            FormOutcome::Win => 'W',
            FormOutcome::Draw => 'D',
            FormOutcome::Loss => 'L',
        }
    }
}

// Decimal 1X2 odds; each leg is strictly greater than 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchOdds {
    pub home: f32,
    pub draw: f32,
    pub away: f32,
}

// Supplied precomputed by the provider; nothing in-process updates these.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Prediction {
    pub outcome: Outcome,
    pub confidence: u8,
    pub expected_value: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HeadToHead {
    pub home: u8,
    pub draw: u8,
    pub away: u8,
}

impl HeadToHead {
    // Lookback window size = sum of the tally counts.
    pub fn window(&self) -> u8 {
        self.home
            .saturating_add(self.draw)
            .saturating_add(self.away)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InjuryCount {
    pub home: u8,
    pub away: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: u32,
    pub home: String,
    pub away: String,
    pub league: String,
    pub date: NaiveDate,
    pub kickoff: NaiveTime,
    pub odds: MatchOdds,
    pub bookmaker: String,
    pub prediction: Prediction,
    pub home_form: Vec<FormOutcome>,
    pub away_form: Vec<FormOutcome>,
    pub h2h: HeadToHead,
    pub injuries: InjuryCount,
}

impl Match {
    pub fn fixture_label(&self) -> String {
        format!("{} vs {}", self.home, self.away)
    }

    // Display-only: twice the expected-value percentage, in account currency.
    pub fn suggested_stake(&self) -> f32 {
        self.prediction.expected_value * 2.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub id: u32,
    pub label: String,
    pub predicted: Outcome,
    pub actual: Outcome,
    pub profit: f32,
    pub confidence: u8,
}

impl MatchResult {
    pub fn correct(&self) -> bool {
        self.predicted == self.actual
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Results,
    Admin,
}

#[derive(Debug, Clone, Copy)]
pub struct DashboardSummary {
    pub tracked: usize,
    pub hit_rate: Option<f32>,
    pub avg_expected_value: Option<f32>,
    pub profit: f32,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: Screen,
    pub sort: SortKey,
    pub league_filter: LeagueFilter,
    pub search: String,
    pub search_active: bool,
    pub selected: usize,
    pub matches: Vec<Match>,
    pub results: Vec<MatchResult>,
    pub detail_open: bool,
    pub help_overlay: bool,
    pub refreshing: bool,
    pub last_refresh: Option<SystemTime>,
    pub logs: VecDeque<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        let sort = env::var("BETVALUE_SORT")
            .ok()
            .and_then(|val| SortKey::from_label(&val))
            .unwrap_or(SortKey::ExpectedValue);
        let league_filter = env::var("BETVALUE_LEAGUE")
            .ok()
            .map(|val| LeagueFilter::from_label(&val))
            .unwrap_or(LeagueFilter::All);
        Self {
            screen: Screen::Dashboard,
            sort,
            league_filter,
            search: String::new(),
            search_active: false,
            selected: 0,
            matches: Vec::with_capacity(32),
            results: Vec::with_capacity(32),
            detail_open: false,
            help_overlay: false,
            refreshing: false,
            last_refresh: None,
            logs: VecDeque::with_capacity(200),
        }
    }

    pub fn filtered_matches(&self) -> Vec<&Match> {
        select::select_opportunities(
            &self.matches,
            &self.league_filter,
            &self.search,
            Some(self.sort),
        )
    }

    pub fn selected_match(&self) -> Option<&Match> {
        self.filtered_matches().get(self.selected).copied()
    }

    pub fn selected_match_id(&self) -> Option<u32> {
        self.selected_match().map(|m| m.id)
    }

    pub fn select_next(&mut self) {
        let total = self.filtered_matches().len();
        if total == 0 {
            self.selected = 0;
            return;
        }
        self.selected = (self.selected + 1) % total;
    }

    pub fn select_prev(&mut self) {
        let total = self.filtered_matches().len();
        if total == 0 {
            self.selected = 0;
            return;
        }
        if self.selected == 0 {
            self.selected = total - 1;
        } else {
            self.selected -= 1;
        }
    }

    pub fn clamp_selection(&mut self) {
        let total = self.filtered_matches().len();
        if total == 0 {
            self.selected = 0;
        } else if self.selected >= total {
            self.selected = total - 1;
        }
    }

    pub fn cycle_sort(&mut self) {
        let keep = self.selected_match_id();
        self.sort = match self.sort {
            SortKey::ExpectedValue => SortKey::Confidence,
            SortKey::Confidence => SortKey::Date,
            SortKey::Date => SortKey::ExpectedValue,
        };
        self.restore_selection(keep);
    }

    pub fn league_options(&self) -> Vec<String> {
        let mut leagues: Vec<String> = self.matches.iter().map(|m| m.league.clone()).collect();
        leagues.sort();
        leagues.dedup();
        leagues
    }

    pub fn cycle_league_filter(&mut self) {
        let options = self.league_options();
        let next = match &self.league_filter {
            LeagueFilter::All => match options.first() {
                Some(first) => LeagueFilter::League(first.clone()),
                None => LeagueFilter::All,
            },
            LeagueFilter::League(current) => {
                match options.iter().position(|name| name == current) {
                    Some(pos) if pos + 1 < options.len() => {
                        LeagueFilter::League(options[pos + 1].clone())
                    }
                    _ => LeagueFilter::All,
                }
            }
        };
        self.league_filter = next;
        self.selected = 0;
        self.detail_open = false;
        self.push_log(format!(
            "[INFO] League filter: {}",
            self.league_filter.label()
        ));
    }

    pub fn search_input(&mut self, c: char) {
        self.search.push(c);
        self.selected = 0;
    }

    pub fn search_backspace(&mut self) {
        self.search.pop();
        self.selected = 0;
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
        self.search_active = false;
        self.selected = 0;
    }

    pub fn summary(&self) -> DashboardSummary {
        let settled = self.results.len();
        let correct = self.results.iter().filter(|r| r.correct()).count();
        let hit_rate = if settled > 0 {
            Some(correct as f32 / settled as f32 * 100.0)
        } else {
            None
        };
        let avg_expected_value = if self.matches.is_empty() {
            None
        } else {
            Some(
                self.matches
                    .iter()
                    .map(|m| m.prediction.expected_value)
                    .sum::<f32>()
                    / self.matches.len() as f32,
            )
        };
        let profit = self.results.iter().map(|r| r.profit).sum();
        DashboardSummary {
            tracked: settled + self.matches.len(),
            hit_rate,
            avg_expected_value,
            profit,
        }
    }

    pub fn last_refresh_age(&self) -> Option<Duration> {
        let stamp = self.last_refresh?;
        SystemTime::now().duration_since(stamp).ok()
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        const MAX_LOGS: usize = 200;
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }

    fn restore_selection(&mut self, id: Option<u32>) {
        let pos = id.and_then(|id| self.filtered_matches().iter().position(|m| m.id == id));
        self.selected = pos.unwrap_or(0);
    }
}

#[derive(Debug, Clone)]
pub enum Delta {
    SetMatches(Vec<Match>),
    SetResults(Vec<MatchResult>),
    Log(String),
}

#[derive(Debug, Clone)]
pub enum ProviderCommand {
    FetchMatches,
    FetchResults,
    RetrainModel,
}

pub fn apply_delta(state: &mut AppState, delta: Delta) {
    match delta {
        Delta::SetMatches(matches) => {
            let keep = state.selected_match_id();
            state.matches = matches;
            state.refreshing = false;
            state.last_refresh = Some(SystemTime::now());
            state.restore_selection(keep);
            if state.selected_match().is_none() {
                state.detail_open = false;
            }
        }
        Delta::SetResults(results) => {
            state.results = results;
        }
        Delta::Log(msg) => state.push_log(msg),
    }
}
