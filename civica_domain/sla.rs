//! SLA window derivation.
//!
//! The resolution deadline is a pure function of the priority score at the
//! moment the clock is (re)started. Breach is never detected by a scheduled
//! job; callers evaluate it lazily on read via `Report::sla_status`.

/// Days-to-resolve tier for a priority score. Boundary scores map to the
/// tier with fewer days (inclusive lower bound).
pub fn days_for_score(score: u32) -> u32 {
    if score >= 60 {
        2
    } else if score >= 30 {
        4
    } else {
        7
    }
}

/// Urgency score combining admin-assigned severity and community votes.
pub fn priority_score(severity: u8, votes: u32) -> u32 {
    severity as u32 * 10 + votes * 5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_formula() {
        assert_eq!(priority_score(3, 0), 30);
        assert_eq!(priority_score(5, 0), 50);
        assert_eq!(priority_score(5, 4), 70);
        assert_eq!(priority_score(1, 0), 10);
    }

    #[test]
    fn score_is_monotonic_in_votes_and_severity() {
        for severity in 1..=5u8 {
            let mut previous = 0;
            for votes in 0..20u32 {
                let score = priority_score(severity, votes);
                assert!(score >= previous);
                previous = score;
            }
        }
        for votes in [0u32, 3, 10] {
            for severity in 1..5u8 {
                assert!(priority_score(severity + 1, votes) > priority_score(severity, votes));
            }
        }
    }

    #[test]
    fn tier_boundaries_are_inclusive_toward_fewer_days() {
        assert_eq!(days_for_score(60), 2);
        assert_eq!(days_for_score(61), 2);
        assert_eq!(days_for_score(59), 4);
        assert_eq!(days_for_score(30), 4);
        assert_eq!(days_for_score(29), 7);
        assert_eq!(days_for_score(0), 7);
    }
}
