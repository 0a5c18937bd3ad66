//! Admin dashboard state: employee form draft and analytics.
//!
//! DESIGN
//! ======
//! Drafts hold raw input strings exactly as typed. Conversion to wire types
//! happens once, in `validate`, so the backend always receives a numeric
//! salary and an ISO date.

#[cfg(test)]
#[path = "employees_test.rs"]
mod employees_test;

use chrono::NaiveDate;

use crate::net::types::{DepartmentCount, Employee, EmployeeInput, parse_date_prefix};
use crate::state::error::ViewError;
use crate::state::resource::Resource;

impl Resource for Employee {
    fn key(&self) -> i64 {
        self.id
    }
}

/// Why a draft could not become a request body.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required.")]
    Missing(&'static str),
    #[error("Joining date must be a valid date (YYYY-MM-DD).")]
    InvalidDate,
    #[error("Salary must be a non-negative number.")]
    InvalidSalary,
}

/// Editable input fields shared by the employee and profile forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DraftField {
    Name,
    Email,
    Department,
    Role,
    JoiningDate,
    Salary,
}

impl DraftField {
    pub const EMPLOYEE: [Self; 6] =
        [Self::Name, Self::Email, Self::Department, Self::Role, Self::JoiningDate, Self::Salary];
    pub const PROFILE: [Self; 5] = [Self::Name, Self::Email, Self::Department, Self::Role, Self::JoiningDate];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Department => "Department",
            Self::Role => "Role",
            Self::JoiningDate => "Joining Date",
            Self::Salary => "Salary",
        }
    }

    /// HTML input type for the field.
    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::JoiningDate => "date",
            Self::Salary => "number",
            Self::Name | Self::Department | Self::Role => "text",
        }
    }
}

/// Raw employee form input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub name: String,
    pub email: String,
    pub department: String,
    pub role: String,
    pub joining_date: String,
    pub salary: String,
}

impl Default for EmployeeDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            department: String::new(),
            role: "employee".to_owned(),
            joining_date: String::new(),
            salary: String::new(),
        }
    }
}

impl EmployeeDraft {
    #[must_use]
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            email: employee.email.clone(),
            department: employee.department.clone(),
            role: employee.role.clone(),
            joining_date: employee.joining_date.format("%Y-%m-%d").to_string(),
            // `f64` Display is the shortest string that parses back to the same value.
            salary: employee.salary.to_string(),
        }
    }

    #[must_use]
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Email => &self.email,
            DraftField::Department => &self.department,
            DraftField::Role => &self.role,
            DraftField::JoiningDate => &self.joining_date,
            DraftField::Salary => &self.salary,
        }
    }

    pub fn set_field(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::Name => &mut self.name,
            DraftField::Email => &mut self.email,
            DraftField::Department => &mut self.department,
            DraftField::Role => &mut self.role,
            DraftField::JoiningDate => &mut self.joining_date,
            DraftField::Salary => &mut self.salary,
        };
        *slot = value;
    }

    /// Convert to a request body.
    ///
    /// # Errors
    ///
    /// Returns the first failing field in form order.
    pub fn validate(&self) -> Result<EmployeeInput, FormError> {
        let name = required(&self.name, DraftField::Name)?;
        let email = required(&self.email, DraftField::Email)?;
        let department = required(&self.department, DraftField::Department)?;
        let role = required(&self.role, DraftField::Role)?;
        let joining_date = parse_joining_date(&self.joining_date)?;
        let salary = parse_salary(&self.salary)?;
        Ok(EmployeeInput { name, email, department, role, joining_date, salary })
    }
}

pub(crate) fn required(raw: &str, field: DraftField) -> Result<String, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FormError::Missing(field.label()));
    }
    Ok(trimmed.to_owned())
}

pub(crate) fn parse_joining_date(raw: &str) -> Result<NaiveDate, FormError> {
    if raw.trim().is_empty() {
        return Err(FormError::Missing(DraftField::JoiningDate.label()));
    }
    parse_date_prefix(raw).ok_or(FormError::InvalidDate)
}

fn parse_salary(raw: &str) -> Result<f64, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FormError::Missing(DraftField::Salary.label()));
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(FormError::InvalidSalary),
    }
}

/// Render a salary without a trailing `.0` for whole amounts.
#[must_use]
pub fn format_salary(salary: f64) -> String {
    if salary.fract() == 0.0 { format!("{salary:.0}") } else { format!("{salary:.2}") }
}

/// Whether the form creates a new record or edits an existing one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit(i64),
}

/// One accepted form submission.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub seq: u64,
    pub mode: FormMode,
    pub input: EmployeeInput,
}

/// Full state of the add/edit employee form.
///
/// `submitting` stays set until the in-flight submission finishes, even if
/// the draft is replaced meanwhile, so only one request is ever outstanding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub draft: EmployeeDraft,
    pub mode: FormMode,
    pub submitting: bool,
    pub error: Option<String>,
    seq: u64,
    in_flight: Option<u64>,
    draft_replaced: bool,
}

impl EmployeeForm {
    /// Switch to editing `employee`, prefilled from its current values.
    pub fn start_edit(&mut self, employee: &Employee) {
        self.replace_draft(EmployeeDraft::from_employee(employee), FormMode::Edit(employee.id));
    }

    /// Return to an empty create form.
    pub fn reset(&mut self) {
        self.replace_draft(EmployeeDraft::default(), FormMode::Create);
    }

    fn replace_draft(&mut self, draft: EmployeeDraft, mode: FormMode) {
        self.draft = draft;
        self.mode = mode;
        self.error = None;
        if self.in_flight.is_some() {
            self.draft_replaced = true;
        }
    }

    /// Claim the form for one submission. Returns the validated body, or
    /// `None` when a submission is already in flight or validation failed
    /// (the failure is stored in `error`).
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.submitting {
            return None;
        }
        match self.draft.validate() {
            Ok(input) => {
                self.seq += 1;
                self.in_flight = Some(self.seq);
                self.draft_replaced = false;
                self.submitting = true;
                self.error = None;
                Some(Submission { seq: self.seq, mode: self.mode, input })
            }
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }

    /// Finish submission `seq`. Success clears the draft it was taken from;
    /// failure keeps that draft and shows `message`. A draft the user opened
    /// while the request was in flight is left alone. Returns `false` for a
    /// submission that is not the one in flight.
    pub fn finish_submit(&mut self, seq: u64, outcome: Result<(), String>) -> bool {
        if self.in_flight != Some(seq) {
            return false;
        }
        self.in_flight = None;
        self.submitting = false;
        let replaced = std::mem::take(&mut self.draft_replaced);
        match outcome {
            Ok(()) if !replaced => self.reset(),
            Ok(()) => {}
            Err(message) => self.error = Some(message),
        }
        true
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add New Employee",
            FormMode::Edit(_) => "Edit Employee",
        }
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add Employee",
            FormMode::Edit(_) => "Update Employee",
        }
    }
}

/// Department counts and head-count, fetched alongside the employee list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalyticsState {
    pub departments: Vec<DepartmentCount>,
    pub total: Option<u64>,
    pub loading: bool,
    pub error: Option<ViewError>,
    seq: u64,
}

impl AnalyticsState {
    /// Start a fetch; only the response carrying the latest sequence applies.
    pub fn begin_fetch(&mut self) -> u64 {
        self.seq += 1;
        self.loading = true;
        self.seq
    }

    pub fn apply(&mut self, seq: u64, departments: Vec<DepartmentCount>, total: u64) -> bool {
        if seq != self.seq {
            return false;
        }
        self.departments = departments;
        self.total = Some(total);
        self.loading = false;
        self.error = None;
        true
    }

    /// Keep the last figures on screen alongside the error.
    pub fn fail(&mut self, seq: u64, error: ViewError) -> bool {
        if seq != self.seq {
            return false;
        }
        self.loading = false;
        self.error = Some(error);
        true
    }
}
