//! Evaluation Service - per-piece windows and text search

use serde::Deserialize;
use utoipa::IntoParams;

use crate::codec::input::parse_date;
use crate::domain::{
    DEFAULT_EVALUATION_DATE, DEFAULT_WINDOW_LENGTH, DomainError, EvaluationRepository,
    EvaluationWindow,
};
use crate::models::Evaluation;

/// Raw `?date=&start=&end=` parameters
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WindowQuery {
    pub date: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

impl WindowQuery {
    /// Apply defaults; unparseable offsets fall back to them as well
    pub fn into_window(self, piece_id: i32) -> Result<EvaluationWindow, DomainError> {
        let raw_date = self
            .date
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_EVALUATION_DATE.to_string());
        let date = parse_date(&raw_date)
            .ok_or_else(|| DomainError::Validation(format!("Invalid date {}", raw_date)))?;

        Ok(EvaluationWindow {
            piece_id,
            date,
            start: parse_or(self.start, 0),
            length: parse_or(self.end, DEFAULT_WINDOW_LENGTH),
        })
    }
}

// SQLite binds OFFSET/LIMIT as i64
const MAX_BOUND: u64 = i64::MAX as u64;

fn parse_or(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
        .map_or(default, |n| n.min(MAX_BOUND))
}

/// `?pattern=` parameter; absent means match everything
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PatternQuery {
    #[serde(default)]
    pub pattern: String,
}

/// Evaluations of a piece on one date, positions `[start, start + end)`
pub async fn evaluations_for_piece(
    repo: &dyn EvaluationRepository,
    piece_id: i32,
    query: WindowQuery,
) -> Result<Vec<Evaluation>, DomainError> {
    let window = query.into_window(piece_id)?;
    repo.find_in_window(window).await
}

/// Evaluations whose text contains the pattern
pub async fn search_evaluations(
    repo: &dyn EvaluationRepository,
    query: PatternQuery,
) -> Result<Vec<Evaluation>, DomainError> {
    repo.find_by_text(&query.pattern).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn window_defaults() {
        let window = WindowQuery::default().into_window(3).unwrap();
        assert_eq!(
            window,
            EvaluationWindow {
                piece_id: 3,
                date: NaiveDate::from_ymd_opt(2022, 12, 13).unwrap(),
                start: 0,
                length: 100,
            }
        );
    }

    #[test]
    fn unparseable_offsets_fall_back() {
        let query = WindowQuery {
            date: Some("2021-08-11".into()),
            start: Some("-1".into()),
            end: Some("two".into()),
        };
        let window = query.into_window(1).unwrap();
        assert_eq!((window.start, window.length), (0, 100));
    }

    #[test]
    fn huge_offsets_are_clamped() {
        let query = WindowQuery {
            start: Some("18446744073709551615".into()),
            end: Some("9223372036854775808".into()),
            ..Default::default()
        };
        let window = query.into_window(1).unwrap();
        assert_eq!(window.start, i64::MAX as u64);
        assert_eq!(window.length, i64::MAX as u64);
    }

    #[test]
    fn bad_date_is_rejected() {
        let query = WindowQuery {
            date: Some("yesterday".into()),
            ..Default::default()
        };
        assert!(matches!(
            query.into_window(1),
            Err(DomainError::Validation(_))
        ));
    }
}
