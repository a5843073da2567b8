/// Crisis-indicator phrases checked before an entry is submitted
pub const DANGER_PHRASES: [&str; 18] = [
    "suicide",
    "kill myself",
    "end my life",
    "die",
    "self-harm",
    "hurt myself",
    "worthless",
    "depressed",
    "depression",
    "addiction",
    "alcoholism",
    "drug abuse",
    "bullying",
    "harassment",
    "violence",
    "can't go on",
    "empty inside",
    "no way out",
];

/// Case-insensitive substring check against [`DANGER_PHRASES`].
///
/// A coarse safety net: "die" also matches "diet". Hits raise a warning
/// notice and never block submission.
pub struct DangerWordScanner;

impl DangerWordScanner {
    pub fn scan(text: &str) -> bool {
        let lowered = text.to_lowercase();
        DANGER_PHRASES.iter().any(|phrase| lowered.contains(phrase))
    }

    /// Every phrase present in the text, in list order
    pub fn matches(text: &str) -> Vec<&'static str> {
        let lowered = text.to_lowercase();
        DANGER_PHRASES
            .iter()
            .copied()
            .filter(|phrase| lowered.contains(phrase))
            .collect()
    }
}
