//! Read-only dashboard projections.
//!
//! Computed fresh from current state on every call; nothing here is
//! cached, so the numbers can never go stale relative to the lists.

use super::AppStore;
use crate::model::project::Project;
use crate::storage::StateStorage;

/// Headline counters shown on the dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardCounts {
    pub total_projects: usize,
    pub open_tasks: usize,
    pub completed_tasks: usize,
}

impl<S: StateStorage> AppStore<S> {
    /// Computes the dashboard counters from current state.
    pub fn dashboard_counts(&self) -> DashboardCounts {
        let completed_tasks = self
            .snapshot
            .tasks
            .iter()
            .filter(|task| task.completed)
            .count();

        DashboardCounts {
            total_projects: self.snapshot.projects.len(),
            open_tasks: self.snapshot.tasks.len() - completed_tasks,
            completed_tasks,
        }
    }

    /// Returns the first `limit` projects in insertion order.
    pub fn recent_projects(&self, limit: usize) -> &[Project] {
        let end = limit.min(self.snapshot.projects.len());
        &self.snapshot.projects[..end]
    }
}
