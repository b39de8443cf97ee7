use super::domain::ClaimRecord;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

/// Inclusive submission-date window. Only constructible with both endpoints;
/// a single-ended selection is not a valid filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn from_endpoints(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<Self> {
        match (start, end) {
            (Some(start), Some(end)) => Some(Self { start, end }),
            _ => None,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// The widget selections for one render pass, exactly as the UI hands them
/// over: a payer multi-select and an optionally half-filled date picker.
#[derive(Debug, Clone, Default)]
pub struct FilterSelection {
    pub payers: Vec<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl FilterSelection {
    /// Validates the selection into an applicable filter. A date range with
    /// only one endpoint is dropped (never an error) and flagged so the
    /// caller can tell the user the filter was ignored.
    pub fn resolve(self) -> ResolvedFilter {
        let date_range = DateRange::from_endpoints(self.start_date, self.end_date);
        let date_range_ignored =
            date_range.is_none() && (self.start_date.is_some() || self.end_date.is_some());

        if date_range_ignored {
            debug!(
                start = ?self.start_date,
                end = ?self.end_date,
                "single-ended date range ignored"
            );
        }

        ResolvedFilter {
            filter: ClaimFilter {
                payers: self.payers,
                date_range,
            },
            date_range_ignored,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedFilter {
    pub filter: ClaimFilter,
    pub date_range_ignored: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ClaimFilter {
    pub payers: Vec<String>,
    pub date_range: Option<DateRange>,
}

impl ClaimFilter {
    pub fn is_unfiltered(&self) -> bool {
        self.payers.is_empty() && self.date_range.is_none()
    }

    fn matches(&self, claim: &ClaimRecord) -> bool {
        if !self.payers.is_empty() && !self.payers.iter().any(|payer| payer == &claim.payer) {
            return false;
        }

        match self.date_range {
            Some(range) => range.contains(claim.submission_date),
            None => true,
        }
    }
}

/// Returns the subset of claims matching the filter, in source order. The
/// source table is never mutated.
pub fn filter_claims(claims: &[ClaimRecord], filter: &ClaimFilter) -> Vec<ClaimRecord> {
    claims
        .iter()
        .filter(|claim| filter.matches(claim))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::domain::ClaimStatus;

    fn claim(payer: &str, date: (i32, u32, u32), status: ClaimStatus) -> ClaimRecord {
        ClaimRecord {
            payer: payer.to_string(),
            submission_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2)
                .expect("valid claim date"),
            status,
            processing_days: 14.0,
        }
    }

    fn sample_claims() -> Vec<ClaimRecord> {
        vec![
            claim("Aetna", (2024, 1, 5), ClaimStatus::Paid),
            claim("Cigna", (2024, 2, 10), ClaimStatus::Pending),
        ]
    }

    #[test]
    fn payer_filter_retains_only_members() {
        let claims = sample_claims();
        let filter = ClaimFilter {
            payers: vec!["Aetna".to_string()],
            date_range: None,
        };

        let result = filter_claims(&claims, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].payer, "Aetna");
    }

    #[test]
    fn date_range_is_inclusive_at_both_endpoints() {
        let claims = sample_claims();
        let filter = ClaimFilter {
            payers: Vec::new(),
            date_range: DateRange::from_endpoints(
                NaiveDate::from_ymd_opt(2024, 1, 5),
                NaiveDate::from_ymd_opt(2024, 2, 10),
            ),
        };

        let result = filter_claims(&claims, &filter);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn conjunction_of_payer_and_date_predicates() {
        let claims = sample_claims();
        let filter = ClaimFilter {
            payers: vec!["Aetna".to_string(), "Cigna".to_string()],
            date_range: DateRange::from_endpoints(
                NaiveDate::from_ymd_opt(2024, 2, 1),
                NaiveDate::from_ymd_opt(2024, 2, 28),
            ),
        };

        let result = filter_claims(&claims, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].payer, "Cigna");
    }

    #[test]
    fn empty_selection_returns_table_unchanged() {
        let claims = sample_claims();
        let resolved = FilterSelection::default().resolve();

        assert!(resolved.filter.is_unfiltered());
        assert!(!resolved.date_range_ignored);
        assert_eq!(filter_claims(&claims, &resolved.filter), claims);
    }

    #[test]
    fn single_ended_range_is_dropped_and_flagged() {
        let claims = sample_claims();
        let resolved = FilterSelection {
            payers: Vec::new(),
            start_date: NaiveDate::from_ymd_opt(2024, 2, 1),
            end_date: None,
        }
        .resolve();

        assert!(resolved.date_range_ignored);
        assert!(resolved.filter.date_range.is_none());
        assert_eq!(filter_claims(&claims, &resolved.filter).len(), claims.len());
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let claims = sample_claims();
        let filter = ClaimFilter {
            payers: Vec::new(),
            date_range: DateRange::from_endpoints(
                NaiveDate::from_ymd_opt(2024, 3, 1),
                NaiveDate::from_ymd_opt(2024, 1, 1),
            ),
        };

        assert!(filter_claims(&claims, &filter).is_empty());
    }
}
