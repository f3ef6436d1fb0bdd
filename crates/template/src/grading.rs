//! Score-to-letter mapping used by transcript rows.

/// Threshold table: the first entry whose minimum the score reaches wins.
const GRADE_SCALE: &[(f64, &str)] = &[(90.0, "A"), (80.0, "B"), (70.0, "C"), (60.0, "D")];

/// Maps a percentage score to its letter grade. Scores below every
/// threshold map to "F".
pub fn letter_for(score: f64) -> &'static str {
    for &(minimum, letter) in GRADE_SCALE {
        if score >= minimum {
            return letter;
        }
    }
    "F"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_thresholds() {
        assert_eq!(letter_for(95.0), "A");
        assert_eq!(letter_for(90.0), "A");
        assert_eq!(letter_for(89.9), "B");
        assert_eq!(letter_for(70.0), "C");
        assert_eq!(letter_for(60.0), "D");
        assert_eq!(letter_for(59.9), "F");
        assert_eq!(letter_for(0.0), "F");
    }
}
