//! Observable project store.
//!
//! # Responsibility
//! - Append projects in insertion order and fan out change notifications.
//! - Stay storage-free: the board lives in memory for the process lifetime.
//!
//! # Invariants
//! - The store is constructed explicitly and shared by handle; there is no
//!   process-global instance.
//! - `add_project` produces exactly one synchronous notification round.
//! - Every listener call receives its own snapshot clone; mutating a
//!   snapshot never affects the owned sequence.
//! - Listeners must not call back into the store during notification.

use crate::model::project::{Project, ProjectId};
use log::info;
use std::cell::RefCell;
use std::rc::Rc;

/// Change subscriber invoked with a snapshot of the full project sequence.
pub type ProjectListener = Box<dyn FnMut(Vec<Project>)>;

/// Shared single-threaded handle to one store instance.
///
/// Cloning the handle preserves single-instance semantics: a project added
/// through one clone is visible through every other.
pub type SharedBoardStore = Rc<RefCell<BoardStore>>;

/// Ordered project sequence plus its change listeners.
#[derive(Default)]
pub struct BoardStore {
    projects: Vec<Project>,
    listeners: Vec<ProjectListener>,
}

impl BoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps this store into a shareable handle for view composition.
    pub fn into_shared(self) -> SharedBoardStore {
        Rc::new(RefCell::new(self))
    }

    /// Registers one change listener.
    ///
    /// No duplicate detection and no unregistration: listeners live as long
    /// as the store.
    pub fn add_listener(&mut self, listener: ProjectListener) {
        self.listeners.push(listener);
    }

    /// Appends a new active project and notifies every listener.
    ///
    /// # Contract
    /// - Field values are assumed pre-validated by the caller.
    /// - The new project gets a fresh id and `ProjectStatus::Active`.
    /// - Returns the generated stable id.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: i64,
    ) -> ProjectId {
        let project = Project::new(title, description, people);
        let id = project.id;
        info!(
            "event=project_added module=store status=ok id={} people={} total={}",
            id,
            project.people,
            self.projects.len() + 1
        );
        self.projects.push(project);
        self.notify_listeners();
        id
    }

    /// Returns the owned sequence in insertion order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Returns a defensive copy of the full sequence.
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.clone()
    }

    /// Returns one project by stable id.
    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == *id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify_listeners(&mut self) {
        let snapshot = self.projects.clone();
        for listener in &mut self.listeners {
            listener(snapshot.clone());
        }
    }
}
