use crate::judge::GradedEvent;

/// Longest run of hits. Any miss resets the run; grade is irrelevant.
pub fn max_combo(graded: &[GradedEvent]) -> u32 {
    let mut combo = 0u32;
    let mut max = 0u32;
    for event in graded {
        if event.is_miss() {
            max = max.max(combo);
            combo = 0;
        } else {
            combo += 1;
        }
    }
    max.max(combo)
}
