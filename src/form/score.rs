use crate::model::{ScoreSet, Section};
use crate::score::rounded_total_score;

/// Text inputs for one exam attempt, with the total kept in sync.
///
/// Section inputs only ever hold ASCII digits. The total is recomputed on
/// every accepted edit as long as at least one section is filled in, with
/// empty sections counted as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreEditor {
    listening: String,
    structure: String,
    reading: String,
    total: String,
}

/// Parsed values of a [`ScoreEditor`], empty inputs as `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreValues {
    pub listening: Option<u32>,
    pub structure: Option<u32>,
    pub reading: Option<u32>,
    pub total: Option<f64>,
}

impl ScoreEditor {
    /// Seed the inputs from stored scores; the stored total is shown as-is.
    pub fn from_scores(scores: &ScoreSet) -> Self {
        let text = |v: Option<u32>| v.map(|n| n.to_string()).unwrap_or_default();
        Self {
            listening: text(scores.listening),
            structure: text(scores.structure),
            reading: text(scores.reading),
            total: scores.total.map(|t| t.to_string()).unwrap_or_default(),
        }
    }

    pub fn value(&self, section: Section) -> &str {
        match section {
            Section::Listening => &self.listening,
            Section::Structure => &self.structure,
            Section::Reading => &self.reading,
        }
    }

    /// Current total, empty until a section is entered or a total was loaded.
    pub fn total(&self) -> &str {
        &self.total
    }

    /// Total as displayed, `"0"` when there is none.
    pub fn total_display(&self) -> &str {
        if self.total.is_empty() {
            "0"
        } else {
            &self.total
        }
    }

    /// Replace one section's input. Returns `false` and leaves the editor
    /// untouched when `value` is not a digit string (or too large to be a
    /// score). An empty string clears the section.
    pub fn set(&mut self, section: Section, value: &str) -> bool {
        if !value.is_empty()
            && (!value.bytes().all(|b| b.is_ascii_digit()) || value.parse::<u32>().is_err())
        {
            return false;
        }

        let slot = match section {
            Section::Listening => &mut self.listening,
            Section::Structure => &mut self.structure,
            Section::Reading => &mut self.reading,
        };
        *slot = value.to_string();
        self.recompute_total();
        true
    }

    pub fn clear(&mut self, section: Section) {
        self.set(section, "");
    }

    pub fn values(&self) -> ScoreValues {
        ScoreValues {
            listening: parse_digits(&self.listening),
            structure: parse_digits(&self.structure),
            reading: parse_digits(&self.reading),
            total: if self.total.is_empty() {
                None
            } else {
                self.total.parse().ok()
            },
        }
    }

    fn recompute_total(&mut self) {
        // With every section cleared the last total stays on screen.
        if self.listening.is_empty() && self.structure.is_empty() && self.reading.is_empty() {
            return;
        }
        let l = parse_digits(&self.listening).unwrap_or(0);
        let s = parse_digits(&self.structure).unwrap_or(0);
        let r = parse_digits(&self.reading).unwrap_or(0);
        self.total = rounded_total_score(s, l, r).to_string();
    }
}

fn parse_digits(value: &str) -> Option<u32> {
    if value.is_empty() {
        None
    } else {
        value.parse().ok()
    }
}
