use super::*;

// =============================================================
// Employee decoding
// =============================================================

#[test]
fn employee_decodes_numeric_fields_from_strings() {
    let raw = serde_json::json!({
        "id": "12",
        "name": "Ada",
        "email": "ada@example.com",
        "department": "Engineering",
        "role": "employee",
        "joining_date": "2024-03-01T00:00:00.000Z",
        "salary": "5500.50"
    });
    let employee: Employee = serde_json::from_value(raw).unwrap();
    assert_eq!(employee.id, 12);
    assert_eq!(employee.joining_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    assert!((employee.salary - 5500.5).abs() < f64::EPSILON);
}

#[test]
fn employee_decodes_plain_numbers_and_dates() {
    let raw = serde_json::json!({
        "id": 3,
        "name": "Grace",
        "email": "grace@example.com",
        "department": "Ops",
        "role": "manager",
        "joining_date": "2023-11-20",
        "salary": 7200
    });
    let employee: Employee = serde_json::from_value(raw).unwrap();
    assert_eq!(employee.id, 3);
    assert_eq!(employee.joining_date, NaiveDate::from_ymd_opt(2023, 11, 20).unwrap());
    assert!((employee.salary - 7200.0).abs() < f64::EPSILON);
}

#[test]
fn employee_rejects_non_numeric_salary() {
    let raw = serde_json::json!({
        "id": 3,
        "name": "Grace",
        "email": "grace@example.com",
        "department": "Ops",
        "role": "manager",
        "joining_date": "2023-11-20",
        "salary": "lots"
    });
    assert!(serde_json::from_value::<Employee>(raw).is_err());
}

#[test]
fn employee_input_serializes_salary_as_number_and_date_as_iso() {
    let input = EmployeeInput {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        department: "Engineering".to_owned(),
        role: "employee".to_owned(),
        joining_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        salary: 4000.0,
    };
    let value = serde_json::to_value(&input).unwrap();
    assert_eq!(value["salary"], serde_json::json!(4000.0));
    assert_eq!(value["joining_date"], serde_json::json!("2024-01-05"));
}

// =============================================================
// Analytics decoding
// =============================================================

#[test]
fn department_count_accepts_string_count() {
    let rows: Vec<DepartmentCount> =
        serde_json::from_str(r#"[{"department":"HR","count":"4"},{"department":"IT","count":9}]"#).unwrap();
    assert_eq!(rows[0], DepartmentCount { department: "HR".to_owned(), count: 4 });
    assert_eq!(rows[1].count, 9);
}

#[test]
fn department_count_rejects_negative_count() {
    assert!(serde_json::from_str::<DepartmentCount>(r#"{"department":"HR","count":-1}"#).is_err());
}

#[test]
fn total_employees_accepts_string_or_number() {
    let a: TotalEmployees = serde_json::from_str(r#"{"total_employees":"17"}"#).unwrap();
    let b: TotalEmployees = serde_json::from_str(r#"{"total_employees":17}"#).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.total_employees, 17);
}

// =============================================================
// Login + profile
// =============================================================

#[test]
fn login_response_ignores_extra_fields() {
    let resp: LoginResponse = serde_json::from_str(r#"{"token":"abc","message":"ok"}"#).unwrap();
    assert_eq!(resp.token, "abc");
}

#[test]
fn profile_round_trips_through_json_without_id_or_salary() {
    let profile: Profile = serde_json::from_str(
        r#"{"name":"Lin","email":"lin@example.com","department":"Sales","role":"employee","joining_date":"2022-02-02"}"#,
    )
    .unwrap();
    let value = serde_json::to_value(&profile).unwrap();
    assert!(value.get("id").is_none());
    assert!(value.get("salary").is_none());
    assert_eq!(value["joining_date"], "2022-02-02");
}

// =============================================================
// parse_date_prefix
// =============================================================

#[test]
fn parse_date_prefix_handles_plain_and_timestamp_forms() {
    let expected = NaiveDate::from_ymd_opt(2021, 7, 9);
    assert_eq!(parse_date_prefix("2021-07-09"), expected);
    assert_eq!(parse_date_prefix(" 2021-07-09T10:00:00Z "), expected);
    assert_eq!(parse_date_prefix("2021-07-09 10:00:00"), expected);
}

#[test]
fn parse_date_prefix_rejects_garbage() {
    assert_eq!(parse_date_prefix(""), None);
    assert_eq!(parse_date_prefix("2021-13-01"), None);
    assert_eq!(parse_date_prefix("2021-07-091"), None);
    assert_eq!(parse_date_prefix("yesterday"), None);
}
