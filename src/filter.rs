//! Issue filter engine.
//!
//! Owns the full issue set and a derived view: the indices of records that
//! satisfy every active criterion. An unset criterion matches everything.

use crate::issues::{IssueRecord, IssueStats, IssueStatus, Priority, TechLevel};

/// Active filter criteria; `None` means "match all" for that dimension
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub status: Option<IssueStatus>,
    pub priority: Option<Priority>,
    pub tech_level: Option<TechLevel>,
    pub search: Option<String>,
}

impl FilterCriteria {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.priority.is_none() && self.tech_level.is_none() && self.search.is_none()
    }

    /// Conjunction of all active criteria
    #[must_use]
    pub fn matches(&self, record: &IssueRecord) -> bool {
        let status_match = self.status.map_or(true, |s| record.status == s);
        let priority_match = self.priority.map_or(true, |p| record.priority == Some(p));
        let tech_level_match = self.tech_level.map_or(true, |t| record.tech_level == Some(t));
        let search_match = self
            .search
            .as_deref()
            .map_or(true, |query| record.search_text().to_lowercase().contains(&query.to_lowercase()));

        status_match && priority_match && tech_level_match && search_match
    }
}

#[derive(Debug, Clone, Default)]
pub struct IssueFilterEngine {
    records: Vec<IssueRecord>,
    visible: Vec<usize>,
    criteria: FilterCriteria,
    stats: IssueStats,
}

impl IssueFilterEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the full set, recompute the counters and re-apply the criteria
    pub fn load(&mut self, records: Vec<IssueRecord>) {
        self.stats = IssueStats::from_records(&records);
        self.records = records;
        self.apply();
    }

    pub fn set_status(&mut self, status: Option<IssueStatus>) {
        self.criteria.status = status;
        self.apply();
    }

    pub fn set_priority(&mut self, priority: Option<Priority>) {
        self.criteria.priority = priority;
        self.apply();
    }

    pub fn set_tech_level(&mut self, tech_level: Option<TechLevel>) {
        self.criteria.tech_level = tech_level;
        self.apply();
    }

    /// An empty query unsets the search criterion
    pub fn set_search(&mut self, query: &str) {
        self.criteria.search = if query.is_empty() { None } else { Some(query.to_string()) };
        self.apply();
    }

    /// Reset every criterion and recompute the view
    pub fn clear_all(&mut self) {
        self.criteria = FilterCriteria::default();
        self.apply();
    }

    /// Advance the status criterion: unset -> Pending -> In Progress -> Completed -> unset
    pub fn cycle_status(&mut self) {
        self.set_status(cycle(self.criteria.status, &IssueStatus::ALL));
    }

    pub fn cycle_priority(&mut self) {
        self.set_priority(cycle(self.criteria.priority, &Priority::ALL));
    }

    pub fn cycle_tech_level(&mut self) {
        self.set_tech_level(cycle(self.criteria.tech_level, &TechLevel::ALL));
    }

    fn apply(&mut self) {
        self.visible = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.criteria.matches(record))
            .map(|(index, _)| index)
            .collect();
    }

    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Records in the current view, in server order
    #[must_use]
    pub fn filtered(&self) -> Vec<&IssueRecord> {
        self.visible.iter().map(|&index| &self.records[index]).collect()
    }

    #[must_use]
    pub fn filtered_len(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_visible(&self, report_id: i64) -> bool {
        self.visible.iter().any(|&index| self.records[index].report_id == report_id)
    }

    #[must_use]
    pub fn find(&self, report_id: i64) -> Option<&IssueRecord> {
        self.records.iter().find(|record| record.report_id == report_id)
    }

    /// "Showing X of Y issues"
    #[must_use]
    pub fn summary(&self) -> String {
        format!("Showing {} of {} issues", self.filtered_len(), self.total())
    }

    /// Counters over the full set, as computed at the last load
    #[must_use]
    pub fn stats(&self) -> IssueStats {
        self.stats
    }
}

fn cycle<T: Copy + PartialEq>(current: Option<T>, values: &[T]) -> Option<T> {
    match current {
        None => values.first().copied(),
        Some(value) => {
            let position = values.iter().position(|v| *v == value)?;
            values.get(position + 1).copied()
        }
    }
}
