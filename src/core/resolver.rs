use crate::core::{Milestone, PersonDirectory};
use crate::utils::error::{Result, SyncError};

/// Attaches the Basecamp id of the milestone's assignee.
///
/// A blank assignee falls back to `default_assignee_id`; a named assignee
/// missing from the directory is an error.
pub fn resolve(
    mut milestone: Milestone,
    directory: &PersonDirectory,
    default_assignee_id: &str,
) -> Result<Milestone> {
    let id = if milestone.assigned.is_empty() {
        default_assignee_id
    } else {
        directory
            .get(&milestone.assigned)
            .ok_or_else(|| SyncError::UnresolvedAssignee {
                name: milestone.assigned.clone(),
            })?
    };

    milestone.assigned_id = Some(id.to_string());
    Ok(milestone)
}

/// Resolves every milestone, stopping at the first unknown assignee.
pub fn resolve_all(
    milestones: Vec<Milestone>,
    directory: &PersonDirectory,
    default_assignee_id: &str,
) -> Result<Vec<Milestone>> {
    milestones
        .into_iter()
        .map(|m| resolve(m, directory, default_assignee_id))
        .collect()
}
