//! Intake form view.
//!
//! # Responsibility
//! - Hand raw submissions to the draft service and reflect the outcome on
//!   the surface: clear the fields on success, one blocking alert on any
//!   failure.
//!
//! # Invariants
//! - All-or-nothing per submission; a rejected draft never mutates the
//!   board.
//! - The store borrow is released before the surface is touched, so store
//!   listeners may render freely during the same submission.

use crate::config::ValidationPolicy;
use crate::model::project::ProjectId;
use crate::service::board_service::{submit_draft, DraftError, ProjectDraft};
use crate::store::board_store::SharedBoardStore;
use crate::ui::component::ViewComponent;
use crate::ui::surface::SharedSurface;
use log::debug;

/// Message shown for every rejected submission.
pub const INVALID_INPUT_ALERT: &str = "Invalid input, please try again!";

/// Form component feeding validated drafts into the board store.
pub struct ProjectInput {
    store: SharedBoardStore,
    surface: SharedSurface,
    policy: ValidationPolicy,
}

impl ProjectInput {
    pub fn new(store: SharedBoardStore, surface: SharedSurface, policy: ValidationPolicy) -> Self {
        Self {
            store,
            surface,
            policy,
        }
    }

    /// Processes one submission of the three raw field values.
    ///
    /// # Contract
    /// - On success the form fields are cleared and the new id returned.
    /// - On failure a single blocking alert is surfaced and the error
    ///   reports every failing field.
    pub fn handle_submit(&mut self, draft: ProjectDraft) -> Result<ProjectId, DraftError> {
        let outcome = submit_draft(&mut self.store.borrow_mut(), &self.policy, &draft);
        match outcome {
            Ok(id) => {
                self.surface.borrow_mut().clear_form();
                Ok(id)
            }
            Err(err) => {
                self.surface.borrow_mut().show_alert(INVALID_INPUT_ALERT);
                Err(err)
            }
        }
    }
}

impl ViewComponent for ProjectInput {
    fn configure(&mut self) {
        debug!("event=form_ready module=ui status=ok");
    }

    fn render(&mut self) {
        // The form template is static; nothing to repaint.
    }
}
