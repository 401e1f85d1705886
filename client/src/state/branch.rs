//! Branch-selection state: which store the user is currently working in.
//!
//! DESIGN
//! ======
//! `loading` stays true until the persisted selection has been restored, so the
//! session gate does not bounce a returning user to the branch picker.

#[cfg(test)]
#[path = "branch_test.rs"]
mod branch_test;

use crate::net::types::Branch;

/// `localStorage` key holding the last selected branch.
pub const SELECTED_BRANCH_KEY: &str = "stockdesk_selected_branch";

/// Selected branch plus the list of branches available to the user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BranchState {
    pub selected_branch: Option<Branch>,
    pub branches: Vec<Branch>,
    pub loading: bool,
    pub error: Option<String>,
}

impl BranchState {
    /// State before the persisted selection has been read.
    pub fn pending() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Select `branch`. The list is left as-is.
    pub fn select(&mut self, branch: Branch) {
        self.selected_branch = Some(branch);
        self.error = None;
    }

    /// Drop the selection, e.g. on logout or when switching branch.
    pub fn clear_selection(&mut self) {
        self.selected_branch = None;
    }

    /// Replace the branch list from a fetch result.
    ///
    /// A selected branch that no longer appears in the list is dropped.
    pub fn apply_branches(&mut self, result: Result<Vec<Branch>, String>) {
        self.loading = false;
        match result {
            Ok(branches) => {
                if let Some(selected) = &self.selected_branch {
                    if !branches.iter().any(|b| b.id == selected.id) {
                        self.selected_branch = None;
                    }
                }
                self.branches = branches;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
    }
}
