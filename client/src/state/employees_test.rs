use super::*;

fn employee(id: i64) -> Employee {
    Employee {
        id,
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        department: "Engineering".to_owned(),
        role: "employee".to_owned(),
        joining_date: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
        salary: 5000.0,
    }
}

fn filled_draft() -> EmployeeDraft {
    EmployeeDraft {
        name: " Ada ".to_owned(),
        email: "ada@example.com".to_owned(),
        department: "Engineering".to_owned(),
        role: "employee".to_owned(),
        joining_date: "2024-02-29".to_owned(),
        salary: "5000.5".to_owned(),
    }
}

// =============================================================
// EmployeeDraft
// =============================================================

#[test]
fn default_draft_presets_employee_role() {
    let draft = EmployeeDraft::default();
    assert_eq!(draft.role, "employee");
    assert!(draft.name.is_empty());
}

#[test]
fn validate_trims_and_converts_salary_and_date() {
    let input = filled_draft().validate().unwrap();
    assert_eq!(input.name, "Ada");
    assert_eq!(input.joining_date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    assert!((input.salary - 5000.5).abs() < f64::EPSILON);
}

#[test]
fn validate_reports_first_missing_field() {
    let mut draft = filled_draft();
    draft.department = "  ".to_owned();
    draft.salary = String::new();
    assert_eq!(draft.validate(), Err(FormError::Missing("Department")));
    assert_eq!(FormError::Missing("Department").to_string(), "Department is required.");
}

#[test]
fn validate_rejects_bad_date_and_salary() {
    let mut draft = filled_draft();
    draft.joining_date = "2023-02-29".to_owned();
    assert_eq!(draft.validate(), Err(FormError::InvalidDate));

    let mut draft = filled_draft();
    draft.salary = "-1".to_owned();
    assert_eq!(draft.validate(), Err(FormError::InvalidSalary));

    draft.salary = "abc".to_owned();
    assert_eq!(draft.validate(), Err(FormError::InvalidSalary));
}

#[test]
fn from_employee_prefills_every_field() {
    let draft = EmployeeDraft::from_employee(&employee(4));
    assert_eq!(draft.joining_date, "2024-02-29");
    assert_eq!(draft.salary, "5000");
    for field in DraftField::EMPLOYEE {
        assert!(!draft.field(field).is_empty(), "{field:?}");
    }
}

#[test]
fn set_field_writes_the_named_slot() {
    let mut draft = EmployeeDraft::default();
    draft.set_field(DraftField::Salary, "12".to_owned());
    draft.set_field(DraftField::Email, "x@y.z".to_owned());
    assert_eq!(draft.salary, "12");
    assert_eq!(draft.field(DraftField::Email), "x@y.z");
}

#[test]
fn field_metadata_matches_inputs() {
    assert_eq!(DraftField::JoiningDate.label(), "Joining Date");
    assert_eq!(DraftField::JoiningDate.input_type(), "date");
    assert_eq!(DraftField::Salary.input_type(), "number");
    assert_eq!(DraftField::Email.input_type(), "email");
    assert_eq!(DraftField::Name.input_type(), "text");
    assert!(!DraftField::PROFILE.contains(&DraftField::Salary));
}

#[test]
fn edit_prefill_keeps_salary_exact() {
    for salary in [1234.567, 50_000.0, 0.1 + 0.2, 98_765.432_1] {
        let record = Employee { salary, ..employee(4) };
        let draft = EmployeeDraft::from_employee(&record);
        assert_eq!(draft.validate().unwrap().salary.to_bits(), salary.to_bits());
    }
    assert_eq!(EmployeeDraft::from_employee(&employee(4)).salary, "5000");
}

#[test]
fn format_salary_drops_trailing_zero_fraction() {
    assert_eq!(format_salary(4000.0), "4000");
    assert_eq!(format_salary(4000.5), "4000.50");
}

// =============================================================
// EmployeeForm
// =============================================================

#[test]
fn start_edit_switches_mode_and_labels() {
    let mut form = EmployeeForm::default();
    assert_eq!(form.title(), "Add New Employee");
    assert_eq!(form.submit_label(), "Add Employee");
    form.start_edit(&employee(9));
    assert_eq!(form.mode, FormMode::Edit(9));
    assert_eq!(form.title(), "Edit Employee");
    assert_eq!(form.submit_label(), "Update Employee");
}

#[test]
fn begin_submit_blocks_concurrent_submissions() {
    let mut form = EmployeeForm { draft: filled_draft(), ..EmployeeForm::default() };
    let submission = form.begin_submit().unwrap();
    assert_eq!(submission.mode, FormMode::Create);
    assert!(form.submitting);
    assert!(form.begin_submit().is_none());
}

#[test]
fn begin_submit_stores_validation_error() {
    let mut form = EmployeeForm::default();
    assert!(form.begin_submit().is_none());
    assert!(!form.submitting);
    assert_eq!(form.error.as_deref(), Some("Name is required."));
}

#[test]
fn finish_submit_success_resets_to_create() {
    let mut form = EmployeeForm::default();
    form.start_edit(&employee(2));
    let submission = form.begin_submit().unwrap();
    assert!(form.finish_submit(submission.seq, Ok(())));
    assert_eq!(form, EmployeeForm::default());
}

#[test]
fn finish_submit_failure_keeps_draft_and_unlocks() {
    let mut form = EmployeeForm { draft: filled_draft(), ..EmployeeForm::default() };
    let submission = form.begin_submit().unwrap();
    form.finish_submit(submission.seq, Err("server said no".to_owned()));
    assert!(!form.submitting);
    assert_eq!(form.draft, filled_draft());
    assert_eq!(form.error.as_deref(), Some("server said no"));
}

#[test]
fn cancel_during_submit_keeps_duplicate_gate_closed() {
    let mut form = EmployeeForm::default();
    form.start_edit(&employee(3));
    let first = form.begin_submit().unwrap();

    form.reset();
    assert!(form.submitting);
    form.draft = filled_draft();
    assert!(form.begin_submit().is_none());

    assert!(form.finish_submit(first.seq, Ok(())));
    assert!(!form.submitting);
    assert!(form.begin_submit().is_some());
}

#[test]
fn finishing_a_submit_leaves_draft_opened_meanwhile() {
    let mut form = EmployeeForm::default();
    form.start_edit(&employee(3));
    let first = form.begin_submit().unwrap();

    form.start_edit(&employee(8));
    form.draft.name = "Grace".to_owned();
    assert!(form.finish_submit(first.seq, Ok(())));

    assert_eq!(form.mode, FormMode::Edit(8));
    assert_eq!(form.draft.name, "Grace");
    assert!(!form.submitting);
}

#[test]
fn finish_for_unknown_submission_is_ignored() {
    let mut form = EmployeeForm { draft: filled_draft(), ..EmployeeForm::default() };
    let submission = form.begin_submit().unwrap();
    assert!(!form.finish_submit(submission.seq + 1, Ok(())));
    assert!(form.submitting);
    assert!(form.finish_submit(submission.seq, Err("nope".to_owned())));
    assert!(!form.finish_submit(submission.seq, Ok(())));
    assert_eq!(form.error.as_deref(), Some("nope"));
}

#[test]
fn employee_key_is_its_id() {
    assert_eq!(employee(31).key(), 31);
}

fn counts(pairs: &[(&str, u64)]) -> Vec<DepartmentCount> {
    pairs.iter().map(|(d, c)| DepartmentCount { department: (*d).to_owned(), count: *c }).collect()
}

#[test]
fn analytics_ignores_superseded_fetch() {
    let mut analytics = AnalyticsState::default();
    let first = analytics.begin_fetch();
    let second = analytics.begin_fetch();

    assert!(analytics.apply(second, counts(&[("Engineering", 3)]), 3));
    assert!(!analytics.apply(first, counts(&[("Engineering", 2)]), 2));
    assert_eq!(analytics.total, Some(3));
    assert_eq!(analytics.departments, counts(&[("Engineering", 3)]));
    assert!(!analytics.loading);
}

#[test]
fn analytics_failure_keeps_previous_figures() {
    let mut analytics = AnalyticsState::default();
    let seq = analytics.begin_fetch();
    analytics.apply(seq, counts(&[("Sales", 1)]), 1);

    let seq = analytics.begin_fetch();
    assert!(analytics.fail(seq, ViewError::recoverable("Failed to load analytics: offline")));
    assert_eq!(analytics.total, Some(1));
    assert!(analytics.error.is_some());
    assert!(!analytics.loading);
}
