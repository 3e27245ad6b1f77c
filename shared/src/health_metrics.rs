//! Health metrics calculations module
//!
//! Provides the numeric derivations that feed the generators: BMI
//! computation and categorization, workout streaks, and weekly journal
//! aggregates.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Recomputed, never cached**: BMI is derived fresh on every request
//! 3. **Total where possible**: categorization covers all positive reals

use crate::models::JournalEntry;
use crate::units::UnitSystem;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Default lookback window for streak calculation, in days
pub const STREAK_WINDOW_DAYS: u32 = 30;

/// Default lookback window for weekly aggregates, in days
pub const WEEKLY_WINDOW_DAYS: u32 = 7;

// ============================================================================
// BMI
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Human-readable label, used when interpolating plan descriptions
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// BMI calculation result, rounded to one decimal place
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    pub value: f64,
    pub category: BmiCategory,
}

/// Calculate BMI from height and weight in the given unit system.
///
/// Metric: `weight_kg / (height_cm / 100)^2`.
/// Imperial: `703 * weight_lb / height_in^2`.
///
/// Returns `None` for non-positive or non-finite inputs; callers must not
/// proceed with generation in that case.
pub fn compute_bmi(height: f64, weight: f64, units: UnitSystem) -> Option<BmiResult> {
    if !height.is_finite() || !weight.is_finite() || height <= 0.0 || weight <= 0.0 {
        return None;
    }

    let raw = match units {
        UnitSystem::Metric => {
            let height_m = height / 100.0;
            weight / (height_m * height_m)
        }
        UnitSystem::Imperial => 703.0 * weight / (height * height),
    };

    let value = (raw * 10.0).round() / 10.0;
    Some(BmiResult {
        value,
        category: categorize(value),
    })
}

/// Classify a BMI value into its category.
///
/// Thresholds: `<18.5` underweight, `[18.5, 25)` normal, `[25, 30)`
/// overweight, `>=30` obese. Exactly 25.0 is overweight, not normal.
pub fn categorize(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

// ============================================================================
// Streaks
// ============================================================================

/// Count consecutive completed days walking backward from `reference`.
///
/// A day counts when it has at least one completed item. The reference day
/// itself may be absent without breaking the streak (the user may simply not
/// have trained yet today); any gap on an earlier day terminates the scan.
pub fn compute_streak(
    completed_dates: &HashSet<NaiveDate>,
    reference: NaiveDate,
    window_days: u32,
) -> u32 {
    let mut streak = 0;
    for offset in 0..window_days {
        let day = reference - Duration::days(i64::from(offset));
        if completed_dates.contains(&day) {
            streak += 1;
        } else if offset > 0 {
            break;
        }
    }
    streak
}

// ============================================================================
// Weekly aggregates
// ============================================================================

/// Rolling aggregate over recent journal entries
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct WeeklyAggregate {
    pub avg_sleep: f64,
    pub avg_water: f64,
    pub workout_days: u32,
    pub avg_score: f64,
    pub total_entries: usize,
}

/// Aggregate entries dated within `window_days` before `reference`.
///
/// Averages divide by `max(count, 1)`, so an empty window yields all-zero
/// aggregates rather than failing. Entries without an analysis contribute a
/// zero score.
pub fn compute_weekly_aggregate(
    entries: &[JournalEntry],
    reference: NaiveDate,
    window_days: u32,
) -> WeeklyAggregate {
    let cutoff = reference - Duration::days(i64::from(window_days));
    let window: Vec<&JournalEntry> = entries.iter().filter(|e| e.date >= cutoff).collect();

    let count = window.len();
    let divisor = count.max(1) as f64;

    let sleep_total: f64 = window.iter().map(|e| e.sleep_hours).sum();
    let water_total: f64 = window.iter().map(|e| e.water_intake).sum();
    let score_total: f64 = window
        .iter()
        .map(|e| {
            e.ai_analysis
                .as_ref()
                .map_or(0.0, |a| f64::from(a.overall_score))
        })
        .sum();
    let workout_days = window.iter().filter(|e| e.workout_done).count() as u32;

    WeeklyAggregate {
        avg_sleep: sleep_total / divisor,
        avg_water: water_total / divisor,
        workout_days,
        avg_score: score_total / divisor,
        total_entries: count,
    }
}

/// Completion rate as a whole percentage; 0 when nothing is scheduled
pub fn completion_rate(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AiAnalysis, Mood};
    use proptest::prelude::*;
    use rstest::rstest;

    fn entry(date: NaiveDate, sleep: f64, water: f64, workout: bool, score: Option<u8>) -> JournalEntry {
        JournalEntry {
            id: date.to_string(),
            date,
            content: "entry".to_string(),
            mood: Mood::Neutral,
            workout_done: workout,
            sleep_hours: sleep,
            water_intake: water,
            ai_analysis: score.map(|s| AiAnalysis {
                summary: String::new(),
                positives: vec![],
                improvements: vec![],
                recommendations: vec![],
                overall_score: s,
            }),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // =========================================================================
    // BMI Tests
    // =========================================================================

    #[test]
    fn test_bmi_metric_example() {
        // 175cm, 70kg -> 22.9, normal
        let result = compute_bmi(175.0, 70.0, UnitSystem::Metric).unwrap();
        assert_eq!(result.value, 22.9);
        assert_eq!(result.category, BmiCategory::Normal);
    }

    #[test]
    fn test_bmi_imperial_example() {
        // 69in, 154lb -> 22.7 (+-0.1), normal
        let result = compute_bmi(69.0, 154.0, UnitSystem::Imperial).unwrap();
        assert!((result.value - 22.7).abs() <= 0.1);
        assert_eq!(result.category, BmiCategory::Normal);
    }

    #[test]
    fn test_bmi_rejects_bad_input() {
        assert!(compute_bmi(0.0, 70.0, UnitSystem::Metric).is_none());
        assert!(compute_bmi(175.0, 0.0, UnitSystem::Metric).is_none());
        assert!(compute_bmi(-175.0, 70.0, UnitSystem::Metric).is_none());
        assert!(compute_bmi(f64::NAN, 70.0, UnitSystem::Metric).is_none());
        assert!(compute_bmi(175.0, f64::INFINITY, UnitSystem::Metric).is_none());
    }

    #[rstest]
    #[case(18.4, BmiCategory::Underweight)]
    #[case(18.5, BmiCategory::Normal)]
    #[case(24.9, BmiCategory::Normal)]
    #[case(25.0, BmiCategory::Overweight)]
    #[case(29.9, BmiCategory::Overweight)]
    #[case(30.0, BmiCategory::Obese)]
    #[case(45.0, BmiCategory::Obese)]
    fn test_categorize_boundaries(#[case] bmi: f64, #[case] expected: BmiCategory) {
        assert_eq!(categorize(bmi), expected);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: every positive BMI gets exactly one category matching
        /// the threshold table
        #[test]
        fn prop_categorize_total(bmi in 0.1f64..100.0) {
            let category = categorize(bmi);
            let expected = if bmi < 18.5 {
                BmiCategory::Underweight
            } else if bmi < 25.0 {
                BmiCategory::Normal
            } else if bmi < 30.0 {
                BmiCategory::Overweight
            } else {
                BmiCategory::Obese
            };
            prop_assert_eq!(category, expected);
        }

        /// Property: the computed value carries one decimal place
        #[test]
        fn prop_bmi_one_decimal(height in 100.0f64..250.0, weight in 20.0f64..300.0) {
            let result = compute_bmi(height, weight, UnitSystem::Metric).unwrap();
            let scaled = result.value * 10.0;
            prop_assert!((scaled - scaled.round()).abs() < 1e-6);
            prop_assert!(result.value > 0.0);
        }

        /// Property: non-positive inputs never produce a result
        #[test]
        fn prop_bmi_none_for_non_positive(height in -200.0f64..=0.0, weight in 20.0f64..300.0) {
            prop_assert!(compute_bmi(height, weight, UnitSystem::Metric).is_none());
            prop_assert!(compute_bmi(weight, height, UnitSystem::Metric).is_none());
        }
    }

    // =========================================================================
    // Streak Tests
    // =========================================================================

    #[test]
    fn test_streak_three_days_ending_today() {
        let today = date(2024, 6, 10);
        // {today, today-1, today-2} completed, today-3 absent
        let completed: HashSet<NaiveDate> = (0..3).map(|i| today - Duration::days(i)).collect();
        assert_eq!(compute_streak(&completed, today, 10), 3);
    }

    #[test]
    fn test_streak_tolerates_gap_on_reference_day_only() {
        let today = date(2024, 6, 10);
        // Nothing completed today, but yesterday and the day before
        let completed: HashSet<NaiveDate> =
            [today - Duration::days(1), today - Duration::days(2)].into_iter().collect();
        assert_eq!(compute_streak(&completed, today, STREAK_WINDOW_DAYS), 2);
    }

    #[test]
    fn test_streak_breaks_on_interior_gap() {
        let today = date(2024, 6, 10);
        // today and today-2 completed, today-1 absent: only today counts
        let completed: HashSet<NaiveDate> =
            [today, today - Duration::days(2)].into_iter().collect();
        assert_eq!(compute_streak(&completed, today, STREAK_WINDOW_DAYS), 1);
    }

    #[test]
    fn test_streak_empty() {
        let completed = HashSet::new();
        assert_eq!(compute_streak(&completed, date(2024, 6, 10), STREAK_WINDOW_DAYS), 0);
    }

    #[test]
    fn test_streak_capped_by_window() {
        let today = date(2024, 6, 30);
        let completed: HashSet<NaiveDate> = (0..60).map(|i| today - Duration::days(i)).collect();
        assert_eq!(compute_streak(&completed, today, STREAK_WINDOW_DAYS), 30);
    }

    // =========================================================================
    // Weekly Aggregate Tests
    // =========================================================================

    #[test]
    fn test_weekly_aggregate_empty_window_is_all_zero() {
        let aggregate = compute_weekly_aggregate(&[], date(2024, 6, 10), WEEKLY_WINDOW_DAYS);
        assert_eq!(aggregate, WeeklyAggregate::default());
    }

    #[test]
    fn test_weekly_aggregate_averages() {
        let today = date(2024, 6, 10);
        let entries = vec![
            entry(today, 8.0, 10.0, true, Some(90)),
            entry(today - Duration::days(1), 6.0, 6.0, false, Some(50)),
            // Outside the 7-day window, must be excluded
            entry(today - Duration::days(10), 4.0, 2.0, true, Some(10)),
        ];
        let aggregate = compute_weekly_aggregate(&entries, today, WEEKLY_WINDOW_DAYS);
        assert_eq!(aggregate.total_entries, 2);
        assert_eq!(aggregate.workout_days, 1);
        assert!((aggregate.avg_sleep - 7.0).abs() < 1e-9);
        assert!((aggregate.avg_water - 8.0).abs() < 1e-9);
        assert!((aggregate.avg_score - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_weekly_aggregate_missing_analysis_scores_zero() {
        let today = date(2024, 6, 10);
        let entries = vec![
            entry(today, 8.0, 8.0, true, Some(80)),
            entry(today - Duration::days(1), 8.0, 8.0, true, None),
        ];
        let aggregate = compute_weekly_aggregate(&entries, today, WEEKLY_WINDOW_DAYS);
        assert!((aggregate.avg_score - 40.0).abs() < 1e-9);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: aggregates never exceed the per-entry bounds
        #[test]
        fn prop_aggregate_bounds(
            sleeps in proptest::collection::vec(0.0f64..=24.0, 0..10),
        ) {
            let today = date(2024, 6, 10);
            let entries: Vec<JournalEntry> = sleeps
                .iter()
                .enumerate()
                .map(|(i, &s)| entry(today - Duration::days(i as i64 % 7), s, 8.0, false, None))
                .collect();
            let aggregate = compute_weekly_aggregate(&entries, today, WEEKLY_WINDOW_DAYS);
            prop_assert!(aggregate.avg_sleep >= 0.0 && aggregate.avg_sleep <= 24.0);
            prop_assert!(aggregate.total_entries <= entries.len());
        }
    }

    // =========================================================================
    // Completion Rate Tests
    // =========================================================================

    #[test]
    fn test_completion_rate() {
        assert_eq!(completion_rate(0, 0), 0);
        assert_eq!(completion_rate(1, 2), 50);
        assert_eq!(completion_rate(2, 3), 67);
        assert_eq!(completion_rate(3, 3), 100);
    }
}
