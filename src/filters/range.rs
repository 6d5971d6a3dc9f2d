use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub min: u32,
    pub max: u32,
}

impl Range {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Numeric range filter (level, ATK, DEF).
///
/// `reset` restores the construction-time default unless the filter is
/// locked; `shown` only tracks UI expand/collapse.
#[derive(Debug, Clone)]
pub struct RangeFilter {
    default: Range,
    selected: Range,
    locked: bool,
    shown: bool,
}

impl RangeFilter {
    pub fn new(default: Range) -> Self {
        Self {
            default,
            selected: default,
            locked: false,
            shown: false,
        }
    }

    pub fn selected(&self) -> Range {
        self.selected
    }

    pub fn select(&mut self, range: Range) {
        self.selected = range;
    }

    pub fn reset(&mut self) {
        if !self.locked {
            self.selected = self.default;
        }
    }

    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }

    pub fn locked(&self) -> bool {
        self.locked
    }

    pub fn show(&mut self, shown: bool) {
        self.shown = shown;
    }

    pub fn shown(&self) -> bool {
        self.shown
    }
}
