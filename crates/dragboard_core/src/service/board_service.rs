//! Draft intake use-case service.
//!
//! # Responsibility
//! - Turn three raw form fields into a validated project appended to the
//!   board, or into an aggregated rejection.
//!
//! # Invariants
//! - All three field rules are evaluated; any failure means no mutation.
//! - The head-count field is validated as text (`required`) before being
//!   parsed; a non-numeric value marks the people field invalid.

use crate::config::ValidationPolicy;
use crate::model::project::ProjectId;
use crate::store::board_store::BoardStore;
use crate::validation::{validate, FieldRule};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Raw form submission: three field values as read from the host UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    /// Head count still in textual form; parsed during intake.
    pub people: String,
}

impl ProjectDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people: people.into(),
        }
    }
}

/// The three draft fields, used to report which checks failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Description,
    People,
}

impl DraftField {
    /// Stable string id used in logs and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::People => "people",
        }
    }
}

/// Aggregated rejection envelope for one draft submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftError {
    /// Every field that failed validation, in form order.
    pub fields: Vec<DraftField>,
}

impl DraftError {
    pub fn contains(&self, field: DraftField) -> bool {
        self.fields.contains(&field)
    }
}

impl Display for DraftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.fields.iter().map(|field| field.as_str()).collect();
        write!(f, "draft rejected, invalid fields: {}", names.join(", "))
    }
}

impl Error for DraftError {}

/// Validates one draft and appends it to the board on success.
///
/// # Contract
/// - Builds the three field rules from `policy` and requires all of them to
///   pass (all-or-nothing per submission).
/// - On success calls `BoardStore::add_project` and returns the new id.
/// - On failure returns every failing field and leaves the store untouched.
pub fn submit_draft(
    store: &mut BoardStore,
    policy: &ValidationPolicy,
    draft: &ProjectDraft,
) -> Result<ProjectId, DraftError> {
    let mut failed = Vec::new();

    if !validate(&policy.title_rule(&draft.title)) {
        failed.push(DraftField::Title);
    }
    if !validate(&policy.description_rule(&draft.description)) {
        failed.push(DraftField::Description);
    }

    match parse_people(policy, &draft.people) {
        Some(people) if failed.is_empty() => {
            let id = store.add_project(draft.title.clone(), draft.description.clone(), people);
            info!("event=draft_accepted module=service status=ok id={id}");
            Ok(id)
        }
        maybe_people => {
            if maybe_people.is_none() {
                failed.push(DraftField::People);
            }
            let names: Vec<&str> = failed.iter().map(|field| field.as_str()).collect();
            info!(
                "event=draft_rejected module=service status=error fields={}",
                names.join(",")
            );
            Err(DraftError { fields: failed })
        }
    }
}

/// Returns the parsed head count when the field passes all people checks.
fn parse_people(policy: &ValidationPolicy, raw: &str) -> Option<i64> {
    let mut presence = FieldRule::text(raw);
    presence.required = true;
    if !validate(&presence) {
        return None;
    }

    let people: i64 = raw.trim().parse().ok()?;
    if !validate(&policy.people_rule(people)) {
        return None;
    }
    Some(people)
}

#[cfg(test)]
mod tests {
    use super::{parse_people, submit_draft, DraftField, ProjectDraft};
    use crate::config::ValidationPolicy;
    use crate::store::board_store::BoardStore;

    #[test]
    fn parse_people_requires_presence_numeric_form_and_bounds() {
        let policy = ValidationPolicy::default();
        assert_eq!(parse_people(&policy, "3"), Some(3));
        assert_eq!(parse_people(&policy, " 2 "), Some(2));
        assert_eq!(parse_people(&policy, ""), None);
        assert_eq!(parse_people(&policy, "many"), None);
        assert_eq!(parse_people(&policy, "5"), None);
        assert_eq!(parse_people(&policy, "0"), None);
    }

    #[test]
    fn rejection_aggregates_every_failing_field() {
        let mut store = BoardStore::new();
        let policy = ValidationPolicy::default();
        let draft = ProjectDraft::new("", "abcd", "9");

        let err = submit_draft(&mut store, &policy, &draft)
            .expect_err("draft with three bad fields must fail");
        assert!(err.contains(DraftField::Title));
        assert!(err.contains(DraftField::Description));
        assert!(err.contains(DraftField::People));
        assert!(store.is_empty());
    }

    #[test]
    fn draft_error_display_lists_field_names() {
        let mut store = BoardStore::new();
        let policy = ValidationPolicy::default();
        let draft = ProjectDraft::new("ok title", "abcd", "3");

        let err = submit_draft(&mut store, &policy, &draft)
            .expect_err("short description must fail");
        assert_eq!(err.to_string(), "draft rejected, invalid fields: description");
    }

    #[test]
    fn accepted_draft_appends_exactly_one_project() {
        let mut store = BoardStore::new();
        let policy = ValidationPolicy::default();
        let draft = ProjectDraft::new("Learn Systems Design", "Study the paper", "3");

        let id = submit_draft(&mut store, &policy, &draft).expect("valid draft must pass");

        assert_eq!(store.len(), 1);
        let project = store.get(&id).expect("accepted project should be stored");
        assert_eq!(project.title, "Learn Systems Design");
        assert_eq!(project.description, "Study the paper");
        assert_eq!(project.people, 3);
    }
}
