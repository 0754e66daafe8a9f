use std::collections::HashSet;

use chrono::NaiveDate;

/// Consecutive-complete-day statistics, recomputed from scratch on demand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreakStats {
    /// Consecutive complete days ending at today or, if today is incomplete, yesterday
    pub current: u32,
    /// Longest run of consecutive complete days anywhere in history
    pub longest: u32,
}

/// Compute streak statistics over the set of complete days.
///
/// `complete_days` may arrive in any order and may contain duplicates; both
/// are normalized here rather than assumed away. `today` is caller-supplied
/// so the computation is independent of wall-clock time.
pub fn compute_streak(complete_days: &[NaiveDate], today: NaiveDate) -> StreakStats {
    if complete_days.is_empty() {
        return StreakStats::default();
    }

    let complete: HashSet<NaiveDate> = complete_days.iter().copied().collect();

    // A day not yet logged doesn't break the streak until tomorrow.
    let anchor = if complete.contains(&today) {
        Some(today)
    } else {
        today.pred_opt()
    };

    let mut current = 0u32;
    let mut day = anchor;
    while let Some(d) = day {
        if !complete.contains(&d) {
            break;
        }
        current += 1;
        day = d.pred_opt();
    }

    let mut days: Vec<NaiveDate> = complete.into_iter().collect();
    days.sort_unstable();

    let mut longest = 1u32;
    let mut run = 1u32;
    for pair in days.windows(2) {
        if pair[0].succ_opt() == Some(pair[1]) {
            run += 1;
        } else {
            longest = longest.max(run);
            run = 1;
        }
    }
    longest = longest.max(run);

    StreakStats { current, longest }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn days_back(today: NaiveDate, offsets: &[u64]) -> Vec<NaiveDate> {
        offsets
            .iter()
            .map(|&o| today.checked_sub_days(Days::new(o)).unwrap())
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let today = d(2025, 6, 15);
        assert_eq!(compute_streak(&[], today), StreakStats::default());
    }

    #[test]
    fn test_only_today_complete() {
        let today = d(2025, 6, 15);
        let stats = compute_streak(&[today], today);
        assert_eq!(stats, StreakStats { current: 1, longest: 1 });
    }

    #[test]
    fn test_only_yesterday_complete() {
        let today = d(2025, 6, 15);
        let stats = compute_streak(&days_back(today, &[1]), today);
        assert_eq!(stats, StreakStats { current: 1, longest: 1 });
    }

    #[test]
    fn test_two_days_ago_breaks_current() {
        let today = d(2025, 6, 15);
        let stats = compute_streak(&days_back(today, &[2]), today);
        assert_eq!(stats, StreakStats { current: 0, longest: 1 });
    }

    #[test]
    fn test_gap_separates_runs() {
        // D, D+1, D+2, D+4, D+5 where D+5 = today
        let today = d(2025, 6, 15);
        let stats = compute_streak(&days_back(today, &[5, 4, 3, 1, 0]), today);
        assert_eq!(stats, StreakStats { current: 2, longest: 3 });
    }

    #[test]
    fn test_longest_does_not_leak_across_gap() {
        let today = d(2025, 6, 30);
        // Two runs of 2 around a one-day gap, plus today
        let stats = compute_streak(&days_back(today, &[6, 5, 3, 2, 0]), today);
        assert_eq!(stats, StreakStats { current: 1, longest: 2 });
    }

    #[test]
    fn test_current_walk_stops_at_first_gap() {
        let today = d(2025, 6, 15);
        // Long history run must not inflate the current streak
        let stats = compute_streak(&days_back(today, &[0, 2, 3, 4, 5, 6]), today);
        assert_eq!(stats, StreakStats { current: 1, longest: 5 });
    }

    #[test]
    fn test_order_invariance() {
        let today = d(2025, 6, 15);
        let asc = days_back(today, &[5, 4, 3, 1, 0]);
        let mut desc = asc.clone();
        desc.reverse();
        let shuffled = vec![asc[2], asc[4], asc[0], asc[3], asc[1]];

        let expected = compute_streak(&asc, today);
        assert_eq!(compute_streak(&desc, today), expected);
        assert_eq!(compute_streak(&shuffled, today), expected);
    }

    #[test]
    fn test_duplicates_tolerated() {
        let today = d(2025, 6, 15);
        let mut days = days_back(today, &[0, 1, 2]);
        days.extend(days_back(today, &[1, 1, 2]));
        let stats = compute_streak(&days, today);
        assert_eq!(stats, StreakStats { current: 3, longest: 3 });
    }

    #[test]
    fn test_streak_spanning_month_boundary() {
        let today = d(2025, 7, 2);
        let days = vec![d(2025, 6, 29), d(2025, 6, 30), d(2025, 7, 1), d(2025, 7, 2)];
        let stats = compute_streak(&days, today);
        assert_eq!(stats, StreakStats { current: 4, longest: 4 });
    }

    #[test]
    fn test_current_never_exceeds_longest() {
        let today = d(2025, 6, 15);
        let cases: &[&[u64]] = &[
            &[0],
            &[1],
            &[2],
            &[0, 1, 2],
            &[5, 4, 3, 1, 0],
            &[0, 2, 3, 4, 5, 6],
            &[10, 9, 8, 7],
        ];
        for offsets in cases {
            let stats = compute_streak(&days_back(today, offsets), today);
            assert!(
                stats.current <= stats.longest,
                "current {} > longest {} for offsets {:?}",
                stats.current,
                stats.longest,
                offsets
            );
        }
    }
}
