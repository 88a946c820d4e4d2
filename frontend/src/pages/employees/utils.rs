use crate::api::{CreateEmployee, Employee, UpdateEmployee};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFormState {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

impl EmployeeFormState {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            employee_id: employee.employee_id.clone(),
            full_name: employee.full_name.clone(),
            email: employee.email.clone(),
            department: employee.department.clone(),
        }
    }

    /// All four fields are required; whitespace-only values do not count.
    pub fn is_valid(&self) -> bool {
        !(self.employee_id.trim().is_empty()
            || self.full_name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.department.trim().is_empty())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_create(&self) -> CreateEmployee {
        CreateEmployee {
            employee_id: self.employee_id.trim().to_string(),
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            department: self.department.trim().to_string(),
        }
    }

    pub fn to_update(&self) -> UpdateEmployee {
        UpdateEmployee {
            employee_id: Some(self.employee_id.trim().to_string()),
            full_name: Some(self.full_name.trim().to_string()),
            email: Some(self.email.trim().to_string()),
            department: Some(self.department.trim().to_string()),
        }
    }
}

/// Case-insensitive substring match over name, email, department and
/// employee code, narrowed by an exact department selection. Pure
/// projection over the fetched roster; never touches the network.
pub fn filter_employees(employees: &[Employee], search: &str, department: &str) -> Vec<Employee> {
    let needle = search.trim().to_lowercase();
    employees
        .iter()
        .filter(|employee| {
            let matches_search = needle.is_empty()
                || employee.full_name.to_lowercase().contains(&needle)
                || employee.email.to_lowercase().contains(&needle)
                || employee.department.to_lowercase().contains(&needle)
                || employee.employee_id.to_lowercase().contains(&needle);
            let matches_department = department.is_empty() || employee.department == department;
            matches_search && matches_department
        })
        .cloned()
        .collect()
}

/// Distinct department names for the filter dropdown, sorted.
pub fn department_options(employees: &[Employee]) -> Vec<String> {
    let mut departments: Vec<String> = employees
        .iter()
        .map(|employee| employee.department.clone())
        .collect();
    departments.sort();
    departments.dedup();
    departments
}

/// Up-to-two-letter monogram for the roster avatar.
pub fn initials(full_name: &str) -> String {
    full_name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn form_state_round_trips_in_browser() {
        let mut state = EmployeeFormState::default();
        assert!(!state.is_valid());

        state.employee_id = "EMP001".into();
        state.full_name = "Alice Smith".into();
        state.email = "alice@example.com".into();
        state.department = "Engineering".into();
        assert!(state.is_valid());

        state.reset();
        assert!(!state.is_valid());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: i64, code: &str, name: &str, email: &str, department: &str) -> Employee {
        Employee {
            id,
            employee_id: code.into(),
            full_name: name.into(),
            email: email.into(),
            department: department.into(),
        }
    }

    fn roster() -> Vec<Employee> {
        vec![
            employee(1, "EMP001", "Alice Smith", "alice@example.com", "Engineering"),
            employee(2, "EMP002", "Bob Jones", "bob@example.com", "Sales"),
            employee(3, "EMP003", "Carol White", "carol@example.com", "Engineering"),
        ]
    }

    #[test]
    fn empty_form_is_invalid() {
        let mut state = EmployeeFormState::default();
        assert!(!state.is_valid());

        state.employee_id = "EMP010".into();
        state.full_name = "Dana Black".into();
        state.email = "dana@example.com".into();
        assert!(!state.is_valid());

        state.department = "HR".into();
        assert!(state.is_valid());
    }

    #[test]
    fn whitespace_only_fields_are_invalid() {
        let state = EmployeeFormState {
            employee_id: "EMP010".into(),
            full_name: "   ".into(),
            email: "dana@example.com".into(),
            department: "HR".into(),
        };
        assert!(!state.is_valid());
    }

    #[test]
    fn payloads_are_trimmed() {
        let state = EmployeeFormState {
            employee_id: " EMP010 ".into(),
            full_name: " Dana Black ".into(),
            email: " dana@example.com ".into(),
            department: " HR ".into(),
        };
        let create = state.to_create();
        assert_eq!(create.employee_id, "EMP010");
        assert_eq!(create.full_name, "Dana Black");

        let update = state.to_update();
        assert_eq!(update.email.as_deref(), Some("dana@example.com"));
        assert_eq!(update.department.as_deref(), Some("HR"));
    }

    #[test]
    fn search_matches_across_fields_case_insensitively() {
        let roster = roster();
        assert_eq!(filter_employees(&roster, "alice", "").len(), 1);
        assert_eq!(filter_employees(&roster, "EXAMPLE.COM", "").len(), 3);
        assert_eq!(filter_employees(&roster, "emp002", "").len(), 1);
        assert_eq!(filter_employees(&roster, "engineering", "").len(), 2);
        assert_eq!(filter_employees(&roster, "nobody", "").len(), 0);
    }

    #[test]
    fn department_narrows_the_search() {
        let roster = roster();
        assert_eq!(filter_employees(&roster, "", "Engineering").len(), 2);
        assert_eq!(filter_employees(&roster, "carol", "Engineering").len(), 1);
        assert_eq!(filter_employees(&roster, "bob", "Engineering").len(), 0);
    }

    #[test]
    fn department_options_are_sorted_and_distinct() {
        assert_eq!(
            department_options(&roster()),
            vec!["Engineering".to_string(), "Sales".to_string()]
        );
    }

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("Alice Smith"), "AS");
        assert_eq!(initials("Carol Jane White"), "CJ");
        assert_eq!(initials("bob"), "B");
        assert_eq!(initials(""), "");
    }
}
