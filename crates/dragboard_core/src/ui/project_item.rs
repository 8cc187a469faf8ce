//! Single project row view and drag source.
//!
//! # Responsibility
//! - Render one project's fields into its column.
//! - Originate the drag gesture: attach the project id as the plain-text
//!   payload and declare the move effect.

use crate::dnd::transfer::{DragTransfer, DropEffect, TEXT_PLAIN};
use crate::model::project::Project;
use crate::ui::component::ViewComponent;
use crate::ui::surface::{RowContent, SharedSurface};
use log::debug;

/// Row component for one project.
pub struct ProjectItem {
    project: Project,
    surface: SharedSurface,
}

impl ProjectItem {
    pub fn new(project: Project, surface: SharedSurface) -> Self {
        Self { project, surface }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Row projection rendered for this project.
    pub fn row_content(&self) -> RowContent {
        RowContent::for_project(&self.project)
    }

    /// Drag-start hook: attaches the id payload and declares `Move`.
    pub fn on_drag_start(&self, transfer: &mut DragTransfer) {
        transfer.set_data(TEXT_PLAIN, self.project.id.to_string());
        transfer.set_effect_allowed(DropEffect::Move);
        debug!(
            "event=drag_start module=dnd status=ok id={} column={}",
            self.project.id,
            self.project.status.as_str()
        );
    }

    /// Drag-end hook: observability only, no state change.
    pub fn on_drag_end(&self, _transfer: &DragTransfer) {
        debug!(
            "event=drag_end module=dnd status=ok id={}",
            self.project.id
        );
    }
}

impl ViewComponent for ProjectItem {
    fn configure(&mut self) {
        debug!(
            "event=row_ready module=ui status=ok id={}",
            self.project.id
        );
    }

    fn render(&mut self) {
        let row = self.row_content();
        self.surface
            .borrow_mut()
            .append_row(self.project.status, row);
    }
}
