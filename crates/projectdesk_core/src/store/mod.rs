//! Application state store.
//!
//! # Responsibility
//! - Own the in-memory domain snapshot plus transient UI state.
//! - Route every mutation through validated operations and persist the
//!   full snapshot synchronously after each one.
//!
//! # Invariants
//! - Entity lists are append-only except for explicit removal; insertion
//!   order is the display order.
//! - Each successful mutation of persisted fields is its own durable
//!   commit (no debouncing, no batching).
//! - A failed durable write degrades the session to in-memory operation;
//!   it never fails the mutation that triggered it.
//! - Transient UI state (page, modal) is never persisted.

use crate::model::project::{NewProject, Project, ProjectId};
use crate::model::snapshot::Snapshot;
use crate::model::task::{NewTask, Task, TaskId};
use crate::model::team::{MemberId, NewTeamMember, TeamMember};
use crate::model::ValidationError;
use crate::storage::{StateStorage, StorageResult};
use log::{debug, error, info, warn};
use std::time::{SystemTime, UNIX_EPOCH};

mod dashboard;

pub use dashboard::DashboardCounts;

/// Storage key holding the serialized domain snapshot.
pub const STATE_KEY: &str = "pm_app_state";

/// Navigation target currently shown by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Projects,
    Tasks,
    Team,
    Calendar,
    Reports,
    Settings,
}

/// Which creation dialog is open, when one is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Project,
    Task,
}

/// In-memory state store synchronized to a [`StateStorage`] backend.
///
/// Views read through the accessors; mutations go through the operations
/// below only, which keeps the persist-on-mutation invariant intact.
pub struct AppStore<S: StateStorage> {
    storage: S,
    snapshot: Snapshot,
    current_page: Page,
    modal: Option<ModalKind>,
    degraded: bool,
}

impl<S: StateStorage> AppStore<S> {
    /// Loads the persisted snapshot and builds a ready store.
    ///
    /// # Contract
    /// - Absent or unparsable blob yields an empty snapshot; a parse
    ///   failure is logged and treated as absent, never surfaced.
    /// - Storage read errors propagate: a broken durable backend at
    ///   startup is the caller's decision to handle.
    pub fn open(storage: S) -> StorageResult<Self> {
        let snapshot = match storage.get(STATE_KEY)? {
            Some(raw) => match Snapshot::from_json(&raw) {
                Ok(snapshot) => snapshot,
                Err(err) => {
                    warn!(
                        "event=state_load module=store status=recovered \
                         error_code=snapshot_parse_failed error={err}"
                    );
                    Snapshot::default()
                }
            },
            None => Snapshot::default(),
        };

        info!(
            "event=state_load module=store status=ok projects={} tasks={} team={}",
            snapshot.projects.len(),
            snapshot.tasks.len(),
            snapshot.team.len()
        );

        Ok(Self {
            storage,
            snapshot,
            current_page: Page::default(),
            modal: None,
            degraded: false,
        })
    }

    /// Creates a project and appends it to the project list.
    ///
    /// Validation failure leaves all state untouched so the triggering
    /// interaction can stay open for correction.
    pub fn add_project(&mut self, input: NewProject) -> Result<ProjectId, ValidationError> {
        let project = Project::create(input, now_epoch_ms())?;
        let id = project.id;
        self.snapshot.projects.push(project);
        self.save();
        info!("event=project_add module=store status=ok id={id}");
        Ok(id)
    }

    /// Creates a task and appends it to the task list.
    pub fn add_task(&mut self, input: NewTask) -> Result<TaskId, ValidationError> {
        let task = Task::create(input, now_epoch_ms())?;
        let id = task.id;
        self.snapshot.tasks.push(task);
        self.save();
        info!("event=task_add module=store status=ok id={id}");
        Ok(id)
    }

    /// Creates a team member and appends it to the team list.
    pub fn add_member(&mut self, input: NewTeamMember) -> Result<MemberId, ValidationError> {
        let member = TeamMember::create(input)?;
        let id = member.id;
        self.snapshot.team.push(member);
        self.save();
        info!("event=member_add module=store status=ok id={id}");
        Ok(id)
    }

    /// Flips a task's completion state.
    ///
    /// Unknown ids are a no-op returning `false`: a stale reference from
    /// the UI must not crash the session or touch the list.
    pub fn toggle_task_completion(&mut self, id: TaskId) -> bool {
        match self.snapshot.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.toggle_completion();
                self.save();
                true
            }
            None => {
                debug!("event=task_toggle module=store status=ignored reason=unknown_id id={id}");
                false
            }
        }
    }

    /// Removes a project by id. Remaining entries keep their ids and
    /// relative order. Unknown ids are a `false` no-op.
    pub fn remove_project(&mut self, id: ProjectId) -> bool {
        let before = self.snapshot.projects.len();
        self.snapshot.projects.retain(|project| project.id != id);
        if self.snapshot.projects.len() == before {
            return false;
        }
        self.save();
        info!("event=project_remove module=store status=ok id={id}");
        true
    }

    /// Removes a task by id, with the same contract as [`Self::remove_project`].
    pub fn remove_task(&mut self, id: TaskId) -> bool {
        let before = self.snapshot.tasks.len();
        self.snapshot.tasks.retain(|task| task.id != id);
        if self.snapshot.tasks.len() == before {
            return false;
        }
        self.save();
        info!("event=task_remove module=store status=ok id={id}");
        true
    }

    /// Switches the shown page. Transient: not persisted.
    pub fn set_current_page(&mut self, page: Page) {
        self.current_page = page;
    }

    /// Opens the creation dialog of the given kind. Transient.
    pub fn open_modal(&mut self, kind: ModalKind) {
        self.modal = Some(kind);
    }

    /// Closes any open dialog. Transient.
    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Serializes the full snapshot and overwrites the persisted copy.
    ///
    /// Called after every persisted-field mutation. A write failure flips
    /// the store into degraded in-memory mode for the rest of the session;
    /// later mutations skip the backend instead of retrying.
    pub fn save(&mut self) {
        if self.degraded {
            debug!("event=state_save module=store status=skipped reason=degraded");
            return;
        }

        let raw = match self.snapshot.to_json() {
            Ok(raw) => raw,
            Err(err) => {
                error!(
                    "event=state_save module=store status=error \
                     error_code=snapshot_encode_failed error={err}"
                );
                self.degraded = true;
                return;
            }
        };

        if let Err(err) = self.storage.set(STATE_KEY, &raw) {
            error!(
                "event=state_save module=store status=error \
                 error_code=storage_write_failed error={err}"
            );
            self.degraded = true;
        }
    }

    /// Projects in insertion order.
    pub fn projects(&self) -> &[Project] {
        &self.snapshot.projects
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.snapshot.tasks
    }

    /// Team members in insertion order.
    pub fn team(&self) -> &[TeamMember] {
        &self.snapshot.team
    }

    pub fn current_page(&self) -> Page {
        self.current_page
    }

    pub fn modal(&self) -> Option<ModalKind> {
        self.modal
    }

    /// Whether durable persistence has failed this session.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Consumes the store and returns its storage backend.
    pub fn into_storage(self) -> S {
        self.storage
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
