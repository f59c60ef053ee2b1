//! Chapter gap detection.
//!
//! A "gap" is a whole chapter number in the range `1..=max` that is absent
//! from the locally recorded chapter set. Sub-chapters (12.5, 12.6) collapse
//! into their parent chapter, so a title carrying only split releases still
//! counts the parent chapter as present.

use std::collections::HashSet;

/// Counts the whole chapter numbers missing from a raw chapter sequence.
///
/// Every input number is floored to its integer part and deduplicated; the
/// range `1..=max` is then scanned for absences. Chapter 0 (prologues) sits
/// outside the scan range and is never penalized.
///
/// An empty sequence yields 0 — the max-based scan is undefined for it and
/// must not run.
pub fn count_missing_chapters(chapters: &[f64]) -> u32 {
    if chapters.is_empty() {
        return 0;
    }

    let present: HashSet<i64> = chapters.iter().map(|ch| ch.floor() as i64).collect();
    let max_chapter = present.iter().copied().max().unwrap_or(0);

    let mut missing_count = 0;
    for i in 1..=max_chapter {
        if !present.contains(&i) {
            missing_count += 1;
        }
    }

    missing_count
}

/// Ratio of missing chapters to the total the server claims to know about.
///
/// The denominator uses the externally supplied authoritative total rather
/// than the deduplicated set size, since duplicates and sub-chapters make the
/// two diverge. Returns 0.0 when both counts are zero.
pub fn missing_ratio(missing_count: u32, total_chapter_count: u32) -> f64 {
    let denominator = total_chapter_count + missing_count;
    if denominator == 0 {
        return 0.0;
    }
    f64::from(missing_count) / f64::from(denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[1.0, 2.0, 3.0], 0)]
    #[case(&[1.0, 2.0, 4.0], 1)]
    #[case(&[2.0], 1)]
    #[case(&[1.0, 5.0], 3)]
    #[case(&[1.0, 1.0, 2.0, 2.5, 3.0], 0)]
    #[case(&[10.0], 9)]
    fn test_count_missing(#[case] chapters: &[f64], #[case] expected: u32) {
        assert_eq!(count_missing_chapters(chapters), expected);
    }

    #[test]
    fn test_empty_sequence_is_guarded() {
        assert_eq!(count_missing_chapters(&[]), 0);
        assert_eq!(missing_ratio(0, 0), 0.0);
    }

    #[test]
    fn test_prologue_only() {
        // Chapter 0 is outside the 1..=max scan range.
        assert_eq!(count_missing_chapters(&[0.0]), 0);
    }

    #[test]
    fn test_subchapters_collapse_into_one_bucket() {
        assert_eq!(count_missing_chapters(&[0.5, 1.5, 2.9]), 0);
        assert_eq!(count_missing_chapters(&[1.0, 1.1, 1.2]), 0);
    }

    #[test]
    fn test_ratio_uses_authoritative_total() {
        // Gap at chapter 3, server reports 3 known chapters.
        let missing = count_missing_chapters(&[1.0, 2.0, 4.0]);
        assert_eq!(missing, 1);
        let ratio = missing_ratio(missing, 3);
        assert!((ratio - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ratio_never_nan() {
        assert!(!missing_ratio(0, 0).is_nan());
    }
}
