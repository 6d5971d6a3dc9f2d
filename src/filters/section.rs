/// Flat multi-select filter over a fixed option list (attributes, frame
/// types, banlist states). Defaults to everything selected.
#[derive(Debug, Clone)]
pub struct SectionFilter {
    options: Vec<String>,
    selected: Vec<String>,
    locked: bool,
    shown: bool,
}

impl SectionFilter {
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        Self {
            selected: options.clone(),
            options,
            locked: false,
            shown: false,
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn set_selected<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected = values.into_iter().map(Into::into).collect();
    }

    pub fn reset(&mut self) {
        if !self.locked {
            self.selected = self.options.clone();
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_all_options_selected() {
        let filter = SectionFilter::new(["DARK", "LIGHT", "WATER"]);
        assert_eq!(filter.selected(), filter.options());
    }

    #[test]
    fn reset_respects_lock() {
        let mut filter = SectionFilter::new(["DARK", "LIGHT", "WATER"]);
        filter.set_selected(["DARK"]);
        filter.lock();
        filter.reset();
        assert_eq!(filter.selected(), ["DARK".to_string()]);

        filter.unlock();
        filter.reset();
        assert_eq!(filter.selected().len(), 3);
    }
}
