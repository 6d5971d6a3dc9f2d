use chrono::NaiveDate;

/// Optional date bounds; `None` means the bound is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

/// Release-date range filter, same controls as [`super::RangeFilter`].
#[derive(Debug, Clone)]
pub struct DateRangeFilter {
    default: DateRange,
    selected: DateRange,
    locked: bool,
    shown: bool,
}

impl DateRangeFilter {
    pub fn new(default: DateRange) -> Self {
        Self {
            default,
            selected: default,
            locked: false,
            shown: false,
        }
    }

    pub fn selected(&self) -> DateRange {
        self.selected
    }

    pub fn select(&mut self, range: DateRange) {
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
