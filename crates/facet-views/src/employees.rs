//! Employee master list view (HR).
//!
//! Unlike the other pages, the stat tiles here follow the active filters
//! (`StatBasis::Filtered`), so narrowing to a department updates the
//! headcount.

use chrono::NaiveDate;
use facet_engine::{EngineConfig, Reducer, StatBasis};
use facet_query::Value;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    Active,
    Inactive,
    Terminated,
    OnLeave,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "active",
            EmployeeStatus::Inactive => "inactive",
            EmployeeStatus::Terminated => "terminated",
            EmployeeStatus::OnLeave => "on_leave",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Intern,
}

impl EmploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "full_time",
            EmploymentType::PartTime => "part_time",
            EmploymentType::Contract => "contract",
            EmploymentType::Intern => "intern",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub employee_code: String,
    pub full_name: String,
    pub email: String,
    pub designation: String,
    pub department: String,
    pub status: EmployeeStatus,
    pub employment_type: EmploymentType,
    pub date_of_joining: NaiveDate,
    pub experience_years: f64,
}

pub fn engine_config() -> EngineConfig<Employee> {
    EngineConfig::<Employee>::new()
        .search_field("full_name", |r, out| out.push(r.full_name.clone()))
        .search_field("employee_code", |r, out| out.push(r.employee_code.clone()))
        .search_field("email", |r, out| out.push(r.email.clone()))
        .search_field("designation", |r, out| out.push(r.designation.clone()))
        .facet("department", |r| Some(r.department.as_str()))
        .facet("status", |r| Some(r.status.as_str()))
        .facet("employment_type", |r| Some(r.employment_type.as_str()))
        .date_field(|r| Some(r.date_of_joining))
        .sort_field("full_name", |r| Value::from(r.full_name.as_str()))
        .sort_field("date_of_joining", |r| Value::from(r.date_of_joining))
        .sort_field("department", |r| Value::from(r.department.as_str()))
        .sort_field("experience", |r| Value::from(r.experience_years))
        .stat("headcount", StatBasis::Filtered, Reducer::Count)
        .stat(
            "active",
            StatBasis::Filtered,
            Reducer::CountWhere(|r| r.status == EmployeeStatus::Active),
        )
        .stat(
            "avg_experience",
            StatBasis::Filtered,
            Reducer::Average(|r| Some(r.experience_years)),
        )
}

/// The records the page ships with in place of a remote data source.
pub fn sample_records() -> Vec<Employee> {
    vec![
        employee(
            "1",
            "EMP-001",
            "Rajesh Kumar",
            "rajesh.kumar@example.com",
            "Production Manager",
            "Production",
            EmployeeStatus::Active,
            EmploymentType::FullTime,
            (2018, 4, 9),
            9.5,
        ),
        employee(
            "2",
            "EMP-002",
            "Priya Sharma",
            "priya.sharma@example.com",
            "Design Lead",
            "Design",
            EmployeeStatus::Active,
            EmploymentType::FullTime,
            (2020, 7, 1),
            7.0,
        ),
        employee(
            "3",
            "EMP-003",
            "Arun Nair",
            "arun.nair@example.com",
            "Quality Inspector",
            "Quality",
            EmployeeStatus::OnLeave,
            EmploymentType::FullTime,
            (2021, 2, 15),
            4.0,
        ),
        employee(
            "4",
            "EMP-004",
            "Sneha Patil",
            "sneha.patil@example.com",
            "Junior Designer",
            "Design",
            EmployeeStatus::Active,
            EmploymentType::Contract,
            (2023, 11, 20),
            1.5,
        ),
        employee(
            "5",
            "EMP-005",
            "Vikram Singh",
            "vikram.singh@example.com",
            "Stores Assistant",
            "Production",
            EmployeeStatus::Terminated,
            EmploymentType::PartTime,
            (2019, 8, 5),
            6.0,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn employee(
    id: &str,
    code: &str,
    name: &str,
    email: &str,
    designation: &str,
    department: &str,
    status: EmployeeStatus,
    employment_type: EmploymentType,
    joined: (i32, u32, u32),
    experience_years: f64,
) -> Employee {
    let (year, month, day) = joined;
    Employee {
        id: id.into(),
        employee_code: code.into(),
        full_name: name.into(),
        email: email.into(),
        designation: designation.into(),
        department: department.into(),
        status,
        employment_type,
        date_of_joining: NaiveDate::from_ymd_opt(year, month, day).expect("fixture date"),
        experience_years,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_is_valid() {
        assert!(engine_config().validate().is_ok());
    }
}
