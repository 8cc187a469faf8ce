//! Board column view and drop target.
//!
//! # Responsibility
//! - Subscribe to the board store, filter each snapshot by status, and
//!   repaint the column on every notification.
//! - Accept the drop handshake: inspect declared payload kinds, toggle the
//!   droppable affordance, and observe dropped identifiers.
//!
//! # Invariants
//! - The column renders exactly the projects carrying its own status, in
//!   store insertion order.
//! - `on_drop` observes the transferred identifier only; it never mutates
//!   the board.

use crate::dnd::transfer::{DragTransfer, TEXT_PLAIN};
use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::store::board_store::SharedBoardStore;
use crate::ui::component::ViewComponent;
use crate::ui::project_item::ProjectItem;
use crate::ui::surface::SharedSurface;
use log::{debug, info, warn};
use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

/// Column component for one project status.
pub struct ProjectList {
    status: ProjectStatus,
    surface: SharedSurface,
    projects: Vec<Project>,
}

impl ProjectList {
    pub fn new(status: ProjectStatus, surface: SharedSurface) -> Self {
        Self {
            status,
            surface,
            projects: Vec::new(),
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Projects currently rendered by this column.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Registers this column as a store listener.
    ///
    /// The listener is an explicit closure capturing the component handle;
    /// it receives each snapshot and triggers the filter-and-repaint pass.
    pub fn subscribe(this: &Rc<RefCell<Self>>, store: &SharedBoardStore) {
        let handle = Rc::clone(this);
        store
            .borrow_mut()
            .add_listener(Box::new(move |snapshot| handle.borrow_mut().receive(snapshot)));
    }

    /// Applies one store snapshot: filter by status, then repaint.
    pub fn receive(&mut self, snapshot: Vec<Project>) {
        self.projects = snapshot
            .into_iter()
            .filter(|project| project.status == self.status)
            .collect();
        self.render();
    }

    /// Drag-over hook.
    ///
    /// Returns `true` when the transfer declares a plain-text payload; the
    /// caller must then suppress the platform's default reject behavior.
    /// Accepting also applies the droppable affordance.
    pub fn on_drag_over(&mut self, transfer: &DragTransfer) -> bool {
        if !transfer.has_kind(TEXT_PLAIN) {
            return false;
        }
        self.surface
            .borrow_mut()
            .set_drop_highlight(self.status, true);
        true
    }

    /// Drop hook: reads the transferred identifier.
    ///
    /// The identifier is observed and logged only; the board is not
    /// mutated and no status transition happens here.
    pub fn on_drop(&mut self, transfer: &DragTransfer) -> Option<ProjectId> {
        let payload = transfer.data(TEXT_PLAIN)?;
        match Uuid::parse_str(payload.trim()) {
            Ok(id) => {
                info!(
                    "event=drop_observed module=ui status=ok column={} id={id}",
                    self.status.as_str()
                );
                Some(id)
            }
            Err(_) => {
                warn!(
                    "event=drop_ignored module=ui status=error column={} payload={payload}",
                    self.status.as_str()
                );
                None
            }
        }
    }

    /// Drag-leave hook: removes the droppable affordance.
    pub fn on_drag_leave(&mut self) {
        self.surface
            .borrow_mut()
            .set_drop_highlight(self.status, false);
    }

    fn heading(&self) -> String {
        format!("{} PROJECTS", self.status.as_str().to_ascii_uppercase())
    }
}

impl ViewComponent for ProjectList {
    fn configure(&mut self) {
        let heading = self.heading();
        self.surface
            .borrow_mut()
            .set_column_header(self.status, &heading);
        debug!(
            "event=column_ready module=ui status=ok column={}",
            self.status.as_str()
        );
    }

    fn render(&mut self) {
        self.surface.borrow_mut().clear_column(self.status);
        for project in &self.projects {
            let mut item = ProjectItem::new(project.clone(), Rc::clone(&self.surface));
            item.render();
        }
    }
}
