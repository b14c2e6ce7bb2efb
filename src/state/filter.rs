//! Portfolio category filter.
//!
//! Items are tagged with a category; filter buttons name either a category
//! or the reserved "show all" sentinel. Purely presentational: nothing here
//! is persisted.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Inline styles applied to a revealed item before the fade-in starts.
pub const FADE_START: &[(&str, &str)] = &[("display", ""), ("opacity", "0"), ("transform", "translateY(20px)")];

/// Inline styles applied once the fade-in delay elapses.
pub const FADE_END: &[(&str, &str)] = &[
    ("transition", "opacity 0.5s ease, transform 0.5s ease"),
    ("opacity", "1"),
    ("transform", "translateY(0)"),
];

/// Inline style applied to filtered-out items.
pub const HIDDEN: &[(&str, &str)] = &[("display", "none")];

/// Category chosen by a filter button.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FilterSelection {
    #[default]
    All,
    Category(String),
}

impl FilterSelection {
    /// Interpret a button's `data-filter` value against the sentinel.
    #[must_use]
    pub fn parse(raw: &str, all_sentinel: &str) -> Self {
        if raw == all_sentinel {
            Self::All
        } else {
            Self::Category(raw.to_owned())
        }
    }

    /// Whether an item tagged `category` is shown under this selection.
    #[must_use]
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Category(selected) => category == Some(selected.as_str()),
        }
    }
}

/// Visibility decision for one item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    /// Inline style steps applied immediately for this decision.
    #[must_use]
    pub fn immediate_styles(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Shown => FADE_START,
            Self::Hidden => HIDDEN,
        }
    }
}

/// Tracks the active selection and decides item visibility.
#[derive(Clone, Debug)]
pub struct CategoryFilter {
    all_sentinel: String,
    selected: FilterSelection,
}

impl CategoryFilter {
    pub fn new(all_sentinel: impl Into<String>) -> Self {
        Self { all_sentinel: all_sentinel.into(), selected: FilterSelection::All }
    }

    #[must_use]
    pub fn selected(&self) -> &FilterSelection {
        &self.selected
    }

    /// Select the category named by a button's `data-filter` value.
    pub fn select(&mut self, raw: &str) -> &FilterSelection {
        self.selected = FilterSelection::parse(raw, &self.all_sentinel);
        &self.selected
    }

    #[must_use]
    pub fn visibility(&self, category: Option<&str>) -> Visibility {
        if self.selected.matches(category) { Visibility::Shown } else { Visibility::Hidden }
    }

    /// Visibility for each item category, in order.
    pub fn apply<'a, I>(&self, categories: I) -> Vec<Visibility>
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        categories.into_iter().map(|category| self.visibility(category)).collect()
    }
}
