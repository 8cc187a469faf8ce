//! Host render-surface contract.
//!
//! # Responsibility
//! - Name every platform primitive the views are allowed to call: template
//!   instantiation, text assignment, class toggling, the blocking alert,
//!   and form clearing.
//!
//! # Invariants
//! - Implementations are dumb sinks; all filtering and formatting happens
//!   in the components before a call crosses this boundary.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use std::cell::RefCell;
use std::rc::Rc;

/// Rendered fields of one project row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowContent {
    pub project_id: ProjectId,
    pub title: String,
    pub description: String,
    /// Pre-formatted head-count line, e.g. `"3 persons assigned"`.
    pub people_line: String,
}

impl RowContent {
    /// Builds the row projection for one project.
    pub fn for_project(project: &Project) -> Self {
        Self {
            project_id: project.id,
            title: project.title.clone(),
            description: project.description.clone(),
            people_line: format!("{} assigned", project.people_label()),
        }
    }
}

/// Host-UI primitives the view components render through.
pub trait RenderSurface {
    /// Assigns the heading text of one column.
    fn set_column_header(&mut self, column: ProjectStatus, text: &str);

    /// Removes every rendered row from one column.
    fn clear_column(&mut self, column: ProjectStatus);

    /// Appends one rendered row to one column.
    fn append_row(&mut self, column: ProjectStatus, row: RowContent);

    /// Toggles the droppable affordance on one column.
    fn set_drop_highlight(&mut self, column: ProjectStatus, highlighted: bool);

    /// Surfaces one blocking alert dialog.
    fn show_alert(&mut self, message: &str);

    /// Clears all intake form fields.
    fn clear_form(&mut self);
}

/// Shared single-threaded handle to the host surface.
pub type SharedSurface = Rc<RefCell<dyn RenderSurface>>;

#[cfg(test)]
mod tests {
    use super::RowContent;
    use crate::model::project::Project;

    #[test]
    fn row_content_formats_people_line() {
        let solo = Project::new("Solo", "A description", 1);
        assert_eq!(RowContent::for_project(&solo).people_line, "1 person assigned");

        let team = Project::new("Team", "A description", 4);
        assert_eq!(RowContent::for_project(&team).people_line, "4 persons assigned");
    }
}
