use betvalue_terminal::fake_feed::{ProviderBook, seed_matches, seed_results};
use betvalue_terminal::state::{FORM_LEN, FormOutcome, Outcome};

#[test]
fn seed_odds_all_carry_an_implied_loss_margin() {
    for m in seed_matches() {
        assert!(m.odds.home > 1.0, "{}: home odds", m.fixture_label());
        assert!(m.odds.draw > 1.0, "{}: draw odds", m.fixture_label());
        assert!(m.odds.away > 1.0, "{}: away odds", m.fixture_label());
    }
}

#[test]
fn seed_confidence_stays_within_percent_range() {
    for m in seed_matches() {
        assert!(m.prediction.confidence <= 100);
    }
    for r in seed_results() {
        assert!(r.confidence <= 100);
    }
}

#[test]
fn seed_form_sequences_have_the_agreed_length() {
    for m in seed_matches() {
        assert_eq!(m.home_form.len(), FORM_LEN, "{}", m.fixture_label());
        assert_eq!(m.away_form.len(), FORM_LEN, "{}", m.fixture_label());
    }
}

#[test]
fn seed_h2h_window_is_the_tally_sum() {
    for m in seed_matches() {
        let h2h = m.h2h;
        assert_eq!(
            h2h.window(),
            h2h.home + h2h.draw + h2h.away,
            "{}",
            m.fixture_label()
        );
        assert!(h2h.window() > 0);
    }
}

#[test]
fn seed_expected_values_match_the_published_book() {
    let evs: Vec<f32> = seed_matches()
        .iter()
        .map(|m| m.prediction.expected_value)
        .collect();
    assert_eq!(evs, vec![15.2, 8.7, 12.3]);
}

#[test]
fn fixtures_json_deserializes_into_a_book() {
    let raw = r#"{
        "matches": [{
            "id": 7,
            "home": "Ajax",
            "away": "PSV",
            "league": "Eredivisie",
            "date": "2025-09-01",
            "kickoff": "19:45:00",
            "odds": { "home": 2.4, "draw": 3.3, "away": 2.9 },
            "bookmaker": "Unibet",
            "prediction": { "outcome": "away", "confidence": 61, "expected_value": 6.4 },
            "home_form": ["win", "draw", "loss", "win", "win"],
            "away_form": ["loss", "loss", "win", "draw", "win"],
            "h2h": { "home": 4, "draw": 1, "away": 3 },
            "injuries": { "home": 0, "away": 1 }
        }]
    }"#;

    let book: ProviderBook = serde_json::from_str(raw).expect("fixtures json should parse");
    assert!(book.results.is_empty());
    assert_eq!(book.matches.len(), 1);

    let m = &book.matches[0];
    assert_eq!(m.fixture_label(), "Ajax vs PSV");
    assert_eq!(m.prediction.outcome, Outcome::Away);
    assert_eq!(m.home_form[0], FormOutcome::Win);
    assert_eq!(m.h2h.window(), 8);
    assert_eq!(m.date.to_string(), "2025-09-01");
}

#[test]
fn seed_results_derive_correctness_from_outcomes() {
    let results = seed_results();
    let verdicts: Vec<bool> = results.iter().map(|r| r.correct()).collect();
    assert_eq!(verdicts, vec![true, false, true]);

    let total: f32 = results.iter().map(|r| r.profit).sum();
    assert!((total - 30.5).abs() < 0.001);
}
