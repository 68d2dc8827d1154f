//! Mock directory used when no remote API is configured.

use chrono::NaiveDate;

use crate::model::{Employee, EmployeeId};

fn employee(
    id: u64,
    name: (&str, &str),
    email: &str,
    department: &str,
    role: &str,
    hired: (i32, u32, u32),
    score: i32,
) -> Employee {
    Employee {
        id: EmployeeId(id),
        first_name: name.0.to_string(),
        last_name: name.1.to_string(),
        email: email.to_string(),
        department: department.to_string(),
        role: role.to_string(),
        hire_date: NaiveDate::from_ymd_opt(hired.0, hired.1, hired.2).unwrap_or_default(),
        performance_score: score,
    }
}

pub fn mock_employees() -> Vec<Employee> {
    vec![
        employee(
            1,
            ("Ava", "Stone"),
            "ava.stone@pulse.hr",
            "People Operations",
            "HR Director",
            (2021, 3, 14),
            92,
        ),
        employee(
            2,
            ("Marcus", "Lee"),
            "marcus.lee@sales.hr",
            "Sales",
            "People Partner",
            (2022, 6, 20),
            87,
        ),
        employee(
            3,
            ("Nia", "Patel"),
            "nia.patel@analytics.hr",
            "Analytics",
            "People Analyst",
            (2020, 11, 5),
            81,
        ),
        employee(
            4,
            ("Jonah", "Berg"),
            "jonah.berg@talent.hr",
            "Talent Acquisition",
            "Recruiter",
            (2019, 1, 18),
            78,
        ),
        employee(
            5,
            ("Camila", "Flores"),
            "camila.flores@product.hr",
            "Product",
            "HRBP",
            (2023, 2, 10),
            90,
        ),
    ]
}
