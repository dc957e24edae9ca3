pub mod add_employee;
pub mod remove_employee;
pub mod update_employee_salary;

pub use add_employee::*;
pub use remove_employee::*;
pub use update_employee_salary::*;
