//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard panels from state handed in as signals and
//! report user intent back through callbacks; pages own the API calls.

pub mod analytics_card;
pub mod employee_form;
pub mod employee_table;
pub mod field_input;
pub mod profile_form;
