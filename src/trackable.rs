/// Everything that fades in when scrolled into view.
pub const TRACKED_SELECTOR: &str = "section > .container > *, .step, .feature-card, .tech-category, .metric-card, .problem-stat-card, .db-stat, .info-card";

/// Cards that also get the hover transition.
pub const HOVER_CARD_SELECTOR: &str =
    ".step, .feature-card, .tech-category, .metric-card, .problem-stat-card";

/// Children whose text holds an animatable number.
pub const NUMERIC_CHILD_SELECTOR: &str = ".stat-number, .metric-value, .db-stat-number";

/// What a tracked element is, decided once from its classes at discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackableKind {
    Stat,
    MetricCard,
    ProblemStatCard,
    DbStat,
    Plain,
}

impl TrackableKind {
    pub fn from_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> Self {
        let classes: Vec<&str> = classes.into_iter().collect();
        let has = |name: &str| classes.contains(&name);

        if has("stat") {
            TrackableKind::Stat
        } else if has("metric-card") {
            TrackableKind::MetricCard
        } else if has("problem-stat-card") {
            TrackableKind::ProblemStatCard
        } else if has("db-stat") {
            TrackableKind::DbStat
        } else {
            TrackableKind::Plain
        }
    }

    pub fn classify(element: &web_sys::Element) -> Self {
        Self::from_classes(element.class_name().split_whitespace())
    }

    /// Whether the element may hold a number worth counting up.
    pub fn has_counter(self) -> bool {
        !matches!(self, TrackableKind::Plain)
    }
}
