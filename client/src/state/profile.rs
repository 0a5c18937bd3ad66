//! Employee self-service state: the signed-in user's profile and its form.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::types::{Profile, ProfileInput};
use crate::state::employees::{DraftField, FormError, parse_joining_date, required};
use crate::state::error::ViewError;

/// Raw profile form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
    pub email: String,
    pub department: String,
    pub role: String,
    pub joining_date: String,
}

impl ProfileDraft {
    #[must_use]
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            department: profile.department.clone(),
            role: profile.role.clone(),
            joining_date: profile.joining_date.format("%Y-%m-%d").to_string(),
        }
    }

    /// Current value of `field`; `Salary` is not part of a profile.
    #[must_use]
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Email => &self.email,
            DraftField::Department => &self.department,
            DraftField::Role => &self.role,
            DraftField::JoiningDate => &self.joining_date,
            DraftField::Salary => "",
        }
    }

    pub fn set_field(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::Name => &mut self.name,
            DraftField::Email => &mut self.email,
            DraftField::Department => &mut self.department,
            DraftField::Role => &mut self.role,
            DraftField::JoiningDate => &mut self.joining_date,
            DraftField::Salary => return,
        };
        *slot = value;
    }

    /// Convert to a request body.
    ///
    /// # Errors
    ///
    /// Returns the first failing field in form order.
    pub fn validate(&self) -> Result<ProfileInput, FormError> {
        Ok(ProfileInput {
            name: required(&self.name, DraftField::Name)?,
            email: required(&self.email, DraftField::Email)?,
            department: required(&self.department, DraftField::Department)?,
            role: required(&self.role, DraftField::Role)?,
            joining_date: parse_joining_date(&self.joining_date)?,
        })
    }
}

/// Employee self-service view state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileState {
    pub profile: Option<Profile>,
    pub draft: ProfileDraft,
    pub loading: bool,
    pub saving: bool,
    pub notice: Option<String>,
    pub error: Option<ViewError>,
}

impl ProfileState {
    /// Show a freshly fetched or saved profile and reset the draft to it.
    pub fn apply_profile(&mut self, profile: Profile) {
        self.draft = ProfileDraft::from_profile(&profile);
        self.profile = Some(profile);
        self.loading = false;
        self.saving = false;
        self.error = None;
    }

    /// Claim the form for one save. `None` while a save is in flight or when
    /// validation fails (stored as a recoverable error).
    pub fn begin_save(&mut self) -> Option<ProfileInput> {
        if self.saving {
            return None;
        }
        self.notice = None;
        match self.draft.validate() {
            Ok(input) => {
                self.saving = true;
                self.error = None;
                Some(input)
            }
            Err(err) => {
                self.error = Some(ViewError::recoverable(err.to_string()));
                None
            }
        }
    }

    pub fn fail(&mut self, error: ViewError) {
        self.loading = false;
        self.saving = false;
        self.error = Some(error);
    }
}
