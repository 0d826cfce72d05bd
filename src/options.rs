use std::collections::BTreeSet;

/// Holiday category a rule module can populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Category {
    Public,
    Bank,
    Government,
    School,
    Workday,
    ArmedForces,
    HalfDay,
    Optional,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Category::Public => "public",
            Category::Bank => "bank",
            Category::Government => "government",
            Category::School => "school",
            Category::Workday => "workday",
            Category::ArmedForces => "armed_forces",
            Category::HalfDay => "half_day",
            Category::Optional => "optional",
        })
    }
}

/// Configuration of a [`Holidays`](crate::Holidays) container.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HolidaysOptions {
    /// Years populated eagerly on construction.
    pub years: BTreeSet<i32>,
    /// Populate a year on demand the first time a date in it is looked up.
    pub expand: bool,
    /// Add observed-day entries for holidays falling on days off.
    pub observed: bool,
    /// Subdivision code or alias; `None` picks the country default.
    pub subdivision: Option<String>,
    /// Empty means [`Category::Public`].
    pub categories: BTreeSet<Category>,
    /// Suffix estimated Islamic holiday names with ` (estimated)`.
    pub islamic_show_estimated: bool,
}

impl Default for HolidaysOptions {
    fn default() -> Self {
        HolidaysOptions {
            years: BTreeSet::new(),
            expand: true,
            observed: true,
            subdivision: None,
            categories: BTreeSet::new(),
            islamic_show_estimated: true,
        }
    }
}

impl HolidaysOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn year(mut self, year: i32) -> Self {
        self.years.insert(year);
        self
    }

    pub fn years<I: IntoIterator<Item = i32>>(mut self, years: I) -> Self {
        self.years.extend(years);
        self
    }

    pub fn expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    pub fn observed(mut self, observed: bool) -> Self {
        self.observed = observed;
        self
    }

    pub fn subdivision(mut self, subdivision: impl Into<String>) -> Self {
        self.subdivision = Some(subdivision.into());
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.categories.insert(category);
        self
    }

    pub fn categories<I: IntoIterator<Item = Category>>(mut self, categories: I) -> Self {
        self.categories.extend(categories);
        self
    }

    pub fn islamic_show_estimated(mut self, show: bool) -> Self {
        self.islamic_show_estimated = show;
        self
    }

    /// Requested categories, defaulting to [`Category::Public`].
    pub(crate) fn effective_categories(&self) -> BTreeSet<Category> {
        if self.categories.is_empty() {
            BTreeSet::from([Category::Public])
        } else {
            self.categories.clone()
        }
    }

    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
