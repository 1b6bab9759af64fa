use std::cmp::Ordering;

use crate::state::Match;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    ExpectedValue,
    Confidence,
    Date,
}

impl SortKey {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "ev" | "expectedvalue" | "expected_value" | "expected value" => {
                Some(SortKey::ExpectedValue)
            }
            "conf" | "confidence" => Some(SortKey::Confidence),
            "date" => Some(SortKey::Date),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::ExpectedValue => "EV",
            SortKey::Confidence => "CONF",
            SortKey::Date => "DATE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeagueFilter {
    All,
    League(String),
}

impl LeagueFilter {
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            LeagueFilter::All
        } else {
            LeagueFilter::League(trimmed.to_string())
        }
    }

    // League names match case-sensitively exact; "all" retains everything.
    pub fn accepts(&self, m: &Match) -> bool {
        match self {
            LeagueFilter::All => true,
            LeagueFilter::League(name) => m.league == *name,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            LeagueFilter::All => "ALL",
            LeagueFilter::League(name) => name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueTier {
    High,
    Medium,
    Low,
}

/// Bucket an expected-value percentage for display emphasis.
/// Total over all reals; zero and negatives land in `Low`.
pub fn classify_value(expected_value_percent: f32) -> ValueTier {
    if expected_value_percent > 10.0 {
        ValueTier::High
    } else if expected_value_percent > 5.0 {
        ValueTier::Medium
    } else {
        ValueTier::Low
    }
}

/// Filter and rank a read-only view of the provider's match book.
/// Sorting is stable, so `Date` ties keep the provider's relative order.
pub fn select_opportunities<'a>(
    matches: &'a [Match],
    league: &LeagueFilter,
    search: &str,
    sort: Option<SortKey>,
) -> Vec<&'a Match> {
    let needle = search.trim().to_lowercase();
    let mut picked: Vec<&Match> = matches
        .iter()
        .filter(|m| league.accepts(m))
        .filter(|m| {
            needle.is_empty()
                || m.home.to_lowercase().contains(&needle)
                || m.away.to_lowercase().contains(&needle)
        })
        .collect();

    match sort {
        Some(SortKey::ExpectedValue) => picked.sort_by(|a, b| {
            b.prediction
                .expected_value
                .partial_cmp(&a.prediction.expected_value)
                .unwrap_or(Ordering::Equal)
        }),
        Some(SortKey::Confidence) => {
            picked.sort_by(|a, b| b.prediction.confidence.cmp(&a.prediction.confidence))
        }
        Some(SortKey::Date) => picked.sort_by(|a, b| a.date.cmp(&b.date)),
        None => {}
    }

    picked
}
