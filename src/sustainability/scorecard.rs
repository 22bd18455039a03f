//! Additive score adjustment skeleton shared by the scoring heuristics

use tracing::debug;

/// Score every heuristic starts from before adjustments
pub(crate) const BASE_SCORE: i32 = 60;
/// Lowest published score
pub(crate) const SCORE_FLOOR: i32 = 20;
/// Highest published score
pub(crate) const SCORE_CEILING: i32 = 99;

/// Accumulates labeled additive adjustments on top of a base score and
/// clamps the result into the published range
///
/// Adjustments are independent and additive, so application order never
/// affects the final score; each signal is applied at most once.
#[derive(Debug)]
pub(crate) struct ScoreCard {
    score: i32,
    reasoning: Vec<String>,
}

impl ScoreCard {
    pub(crate) fn new(base: i32) -> Self {
        Self {
            score: base,
            reasoning: Vec::new(),
        }
    }

    /// Apply one adjustment and record why it fired
    pub(crate) fn adjust(&mut self, delta: i32, reason: &str) {
        debug!("Score adjustment {delta:+}: {reason}");
        self.score += delta;
        self.reasoning.push(format!("{delta:+}: {reason}"));
    }

    /// Clamp into the published range and hand back score plus reasoning
    pub(crate) fn finish(self) -> (u8, Vec<String>) {
        let clamped = self.score.clamp(SCORE_FLOOR, SCORE_CEILING);
        (clamped as u8, self.reasoning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_passes_through_unadjusted() {
        let (score, reasoning) = ScoreCard::new(BASE_SCORE).finish();
        assert_eq!(score, 60);
        assert!(reasoning.is_empty());
    }

    #[test]
    fn test_adjustments_accumulate() {
        let mut card = ScoreCard::new(BASE_SCORE);
        card.adjust(15, "low tourism density");
        card.adjust(-10, "no transit");
        let (score, reasoning) = card.finish();
        assert_eq!(score, 65);
        assert_eq!(reasoning.len(), 2);
        assert!(reasoning[0].starts_with("+15:"));
        assert!(reasoning[1].starts_with("-10:"));
    }

    #[test]
    fn test_clamps_to_floor() {
        let mut card = ScoreCard::new(BASE_SCORE);
        card.adjust(-100, "stress test");
        let (score, _) = card.finish();
        assert_eq!(score, 20);
    }

    #[test]
    fn test_clamps_to_ceiling() {
        let mut card = ScoreCard::new(BASE_SCORE);
        card.adjust(100, "stress test");
        let (score, _) = card.finish();
        assert_eq!(score, 99);
    }

    #[test]
    fn test_order_does_not_matter() {
        let mut forward = ScoreCard::new(BASE_SCORE);
        forward.adjust(10, "a");
        forward.adjust(-8, "b");
        let mut reverse = ScoreCard::new(BASE_SCORE);
        reverse.adjust(-8, "b");
        reverse.adjust(10, "a");
        assert_eq!(forward.finish().0, reverse.finish().0);
    }
}
