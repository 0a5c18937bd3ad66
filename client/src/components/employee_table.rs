//! Employee list table with per-row edit and delete actions.

use leptos::prelude::*;

use crate::net::types::Employee;
use crate::state::employees::format_salary;
use crate::state::resource::ResourceState;

const COLUMNS: [&str; 7] = ["Name", "Email", "Department", "Role", "Joining Date", "Salary", "Actions"];

#[component]
pub fn EmployeeTable(
    employees: RwSignal<ResourceState<Employee>>,
    on_edit: Callback<Employee>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    view! {
        <div class="employee-table">
            <table class="employee-table__table">
                <thead>
                    <tr>{COLUMNS.into_iter().map(|c| view! { <th>{c}</th> }).collect::<Vec<_>>()}</tr>
                </thead>
                <tbody>
                    {move || {
                        employees.with(|state| {
                            state
                                .items()
                                .iter()
                                .cloned()
                                .map(|employee| view! { <EmployeeRow employee on_edit on_delete/> })
                                .collect::<Vec<_>>()
                        })
                    }}
                </tbody>
            </table>
            <Show when=move || employees.with(|s| s.items().is_empty() && !s.loading)>
                <p class="employee-table__empty">"No employees yet."</p>
            </Show>
        </div>
    }
}

#[component]
fn EmployeeRow(employee: Employee, on_edit: Callback<Employee>, on_delete: Callback<i64>) -> impl IntoView {
    let id = employee.id;
    let joining_date = employee.joining_date.format("%Y-%m-%d").to_string();
    let salary = format_salary(employee.salary);
    let target = employee.clone();

    view! {
        <tr>
            <td>{employee.name}</td>
            <td>{employee.email}</td>
            <td>{employee.department}</td>
            <td>{employee.role}</td>
            <td>{joining_date}</td>
            <td>{salary}</td>
            <td class="employee-table__actions">
                <button class="btn btn--edit" on:click=move |_| on_edit.run(target.clone())>
                    "Edit"
                </button>
                <button class="btn btn--danger" on:click=move |_| on_delete.run(id)>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
