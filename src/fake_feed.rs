use std::env;
use std::fs;
use std::path::Path;
use std::sync::mpsc::{Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use rand::Rng;
use serde::Deserialize;

use crate::state::{
    Delta, FormOutcome, HeadToHead, InjuryCount, Match, MatchOdds, MatchResult, Outcome,
    Prediction, ProviderCommand,
};

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderBook {
    pub matches: Vec<Match>,
    #[serde(default)]
    pub results: Vec<MatchResult>,
}

static SEED_BOOK: Lazy<ProviderBook> = Lazy::new(|| ProviderBook {
    matches: seed_matches(),
    results: seed_results(),
});

pub fn spawn_mock_provider(tx: Sender<Delta>, cmd_rx: Receiver<ProviderCommand>) {
    thread::spawn(move || {
        let mut rng = rand::thread_rng();
        let throttle = Duration::from_secs(
            env::var("BETVALUE_THROTTLE_SECS")
                .ok()
                .and_then(|val| val.parse::<u64>().ok())
                .unwrap_or(2)
                .max(1),
        );
        let latency_ms = env::var("BETVALUE_FEED_LATENCY_MS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .unwrap_or(600)
            .min(5_000);

        let book = load_book(&tx);
        let mut last_match_fetch = Instant::now() - throttle;
        let mut last_result_fetch = Instant::now() - throttle;

        // Initial snapshot so the UI has data before any refresh request.
        let _ = tx.send(Delta::SetMatches(book.matches.clone()));
        let _ = tx.send(Delta::SetResults(book.results.clone()));
        let _ = tx.send(Delta::Log(format!(
            "[INFO] Provider ready: {} fixtures, {} settled results",
            book.matches.len(),
            book.results.len()
        )));

        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                ProviderCommand::FetchMatches => {
                    if last_match_fetch.elapsed() < throttle {
                        let _ = tx.send(Delta::Log(format!(
                            "[INFO] Refresh throttled ({}s)",
                            throttle.as_secs()
                        )));
                        continue;
                    }
                    simulate_latency(&mut rng, latency_ms);
                    let _ = tx.send(Delta::SetMatches(book.matches.clone()));
                    let _ = tx.send(Delta::Log(format!(
                        "[INFO] Match data updated ({} fixtures)",
                        book.matches.len()
                    )));
                    last_match_fetch = Instant::now();
                }
                ProviderCommand::FetchResults => {
                    if last_result_fetch.elapsed() < throttle {
                        let _ = tx.send(Delta::Log(format!(
                            "[INFO] Results refresh throttled ({}s)",
                            throttle.as_secs()
                        )));
                        continue;
                    }
                    simulate_latency(&mut rng, latency_ms);
                    let _ = tx.send(Delta::SetResults(book.results.clone()));
                    let _ = tx.send(Delta::Log(format!(
                        "[INFO] Results updated ({} settled)",
                        book.results.len()
                    )));
                    last_result_fetch = Instant::now();
                }
                ProviderCommand::RetrainModel => {
                    // There is no in-process model. The pass re-supplies the
                    // provider's precomputed figures unchanged.
                    simulate_latency(&mut rng, latency_ms.saturating_mul(3));
                    let _ = tx.send(Delta::SetMatches(book.matches.clone()));
                    let _ = tx.send(Delta::Log(
                        "[INFO] Model pass complete, predictions unchanged".to_string(),
                    ));
                    last_match_fetch = Instant::now();
                }
            }
        }
    });
}

fn simulate_latency(rng: &mut impl Rng, base_ms: u64) {
    if base_ms == 0 {
        return;
    }
    let jitter = rng.gen_range(0..=base_ms / 2);
    thread::sleep(Duration::from_millis(base_ms / 2 + jitter));
}

fn load_book(tx: &Sender<Delta>) -> ProviderBook {
    let Some(path) = opt_env("BETVALUE_FIXTURES_FILE") else {
        return SEED_BOOK.clone();
    };
    match read_book(Path::new(&path)) {
        Ok(book) if !book.matches.is_empty() => {
            let _ = tx.send(Delta::Log(format!("[INFO] Fixtures loaded from {path}")));
            sanitize(book)
        }
        Ok(_) => {
            let _ = tx.send(Delta::Log(format!(
                "[WARN] Fixtures file {path} holds no matches, using built-in data"
            )));
            SEED_BOOK.clone()
        }
        Err(err) => {
            let _ = tx.send(Delta::Log(format!("[WARN] Fixtures file error: {err:#}")));
            SEED_BOOK.clone()
        }
    }
}

fn read_book(path: &Path) -> Result<ProviderBook> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&raw).context("parse fixtures json")
}

// External files may carry out-of-range confidence figures.
fn sanitize(mut book: ProviderBook) -> ProviderBook {
    for m in &mut book.matches {
        m.prediction.confidence = m.prediction.confidence.min(100);
    }
    for r in &mut book.results {
        r.confidence = r.confidence.min(100);
    }
    book
}

fn opt_env(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|val| {
        let trimmed = val.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

pub fn seed_matches() -> Vec<Match> {
    use FormOutcome::{Loss, Win};

    vec![
        Match {
            id: 1,
            home: "Manchester City".to_string(),
            away: "Liverpool".to_string(),
            league: "Premier League".to_string(),
            date: day(2025, 8, 15),
            kickoff: hm(15, 0),
            odds: MatchOdds {
                home: 2.10,
                draw: 3.40,
                away: 3.20,
            },
            bookmaker: "Bet365".to_string(),
            prediction: Prediction {
                outcome: Outcome::Home,
                confidence: 78,
                expected_value: 15.2,
            },
            home_form: vec![Win, Win, Loss, Win, Win],
            away_form: vec![Win, Loss, Win, Win, Loss],
            h2h: HeadToHead {
                home: 3,
                draw: 1,
                away: 2,
            },
            injuries: InjuryCount { home: 1, away: 3 },
        },
        Match {
            id: 2,
            home: "Barcelona".to_string(),
            away: "Real Madrid".to_string(),
            league: "La Liga".to_string(),
            date: day(2025, 8, 15),
            kickoff: hm(20, 0),
            odds: MatchOdds {
                home: 2.50,
                draw: 3.10,
                away: 2.80,
            },
            bookmaker: "William Hill".to_string(),
            prediction: Prediction {
                outcome: Outcome::Away,
                confidence: 65,
                expected_value: 8.7,
            },
            home_form: vec![Win, Loss, Win, Win, Loss],
            away_form: vec![Win, Win, Win, Loss, Win],
            h2h: HeadToHead {
                home: 2,
                draw: 2,
                away: 4,
            },
            injuries: InjuryCount { home: 2, away: 1 },
        },
        Match {
            id: 3,
            home: "Bayern Munich".to_string(),
            away: "Borussia Dortmund".to_string(),
            league: "Bundesliga".to_string(),
            date: day(2025, 8, 16),
            kickoff: hm(18, 30),
            odds: MatchOdds {
                home: 1.85,
                draw: 3.60,
                away: 4.20,
            },
            bookmaker: "Betfair".to_string(),
            prediction: Prediction {
                outcome: Outcome::Home,
                confidence: 82,
                expected_value: 12.3,
            },
            home_form: vec![Win, Win, Win, Loss, Win],
            away_form: vec![Loss, Win, Loss, Win, Win],
            h2h: HeadToHead {
                home: 5,
                draw: 1,
                away: 2,
            },
            injuries: InjuryCount { home: 0, away: 2 },
        },
    ]
}

pub fn seed_results() -> Vec<MatchResult> {
    vec![
        MatchResult {
            id: 1,
            label: "Chelsea vs Arsenal".to_string(),
            predicted: Outcome::Home,
            actual: Outcome::Home,
            profit: 12.5,
            confidence: 75,
        },
        MatchResult {
            id: 2,
            label: "PSG vs Lyon".to_string(),
            predicted: Outcome::Away,
            actual: Outcome::Draw,
            profit: -10.0,
            confidence: 68,
        },
        MatchResult {
            id: 3,
            label: "Juventus vs AC Milan".to_string(),
            predicted: Outcome::Draw,
            actual: Outcome::Draw,
            profit: 28.0,
            confidence: 71,
        },
    ]
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn hm(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).unwrap_or_default()
}
