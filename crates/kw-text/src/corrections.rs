//! Rendering for typo-check results.

use kw_core::entities::TypoCorrection;

use crate::highlight::{Marker, highlight_terms};
use crate::normalize::{ScriptPair, normalize_cached};

/// How a correction was applied to the corrected text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrectionKind {
    /// The suggested replacement was kept.
    Kept,
    /// The learner changed the replacement.
    Edited,
    /// The replacement is blank, so the flagged span is deleted.
    Removed,
}

impl CorrectionKind {
    #[must_use]
    pub fn of(correction: &TypoCorrection) -> Self {
        if correction.is_removal() {
            Self::Removed
        } else if normalize_cached(correction.replacement.trim()).traditional
            == normalize_cached(correction.suggested.trim()).traditional
        {
            Self::Kept
        } else {
            Self::Edited
        }
    }
}

/// Original text in both variants with every flagged span marked red.
#[must_use]
pub fn mark_flagged(traditional: &str, simplified: &str, corrections: &[TypoCorrection]) -> ScriptPair {
    let flagged: Vec<&str> = corrections.iter().map(|c| c.flagged.as_str()).collect();
    highlight_terms(traditional, simplified, &flagged, &Marker::background(Marker::RED))
}

/// Traditional text with each correction applied.
///
/// Kept suggestions are marked yellow, edited replacements green, and
/// removals delete the flagged span outright.
#[must_use]
pub fn corrected_text(traditional: &str, corrections: &[TypoCorrection]) -> String {
    let kept = Marker::background(Marker::YELLOW);
    let edited = Marker::background(Marker::GREEN);

    corrections.iter().fold(traditional.to_string(), |text, correction| {
        let flagged = normalize_cached(correction.flagged.trim()).traditional;
        if flagged.is_empty() {
            return text;
        }
        let replacement = match CorrectionKind::of(correction) {
            CorrectionKind::Removed => String::new(),
            CorrectionKind::Kept => kept.wrap(correction.replacement.trim()),
            CorrectionKind::Edited => edited.wrap(correction.replacement.trim()),
        };
        text.replace(&flagged, &replacement)
    })
}

/// Traditional text with each correction applied and no markup.
#[must_use]
pub fn apply_corrections(traditional: &str, corrections: &[TypoCorrection]) -> String {
    corrections.iter().fold(traditional.to_string(), |text, correction| {
        let flagged = normalize_cached(correction.flagged.trim()).traditional;
        if flagged.is_empty() {
            return text;
        }
        text.replace(&flagged, correction.replacement.trim())
    })
}
