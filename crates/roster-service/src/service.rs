//! # Employee Service
//!
//! Business rules over an [`EmployeeRepository`].
//!
//! | Operation            | Rule                                           |
//! |----------------------|------------------------------------------------|
//! | `save_employee`      | trim, validate, reject an existing email       |
//! | `get_all_employees`  | pass-through                                   |
//! | `get_employee_by_id` | pass-through, `None` when absent               |
//! | `update_employee`    | trim, validate, save (no email lookup)         |
//! | `delete_employee`    | pass-through, absent id is a no-op             |

use roster_core::validation::validate_employee;
use roster_core::Employee;
use roster_db::EmployeeRepository;
use tracing::{debug, info, warn};

use crate::error::{ServiceError, ServiceResult};

/// Employee operations with email uniqueness on create.
#[derive(Debug, Clone)]
pub struct EmployeeService<R> {
    repository: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    pub fn new(repository: R) -> Self {
        EmployeeService { repository }
    }

    /// The wrapped repository, for lookups the service does not expose.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Creates an employee.
    ///
    /// ## Errors
    /// * `ServiceError::ResourceConflict` - email already taken; nothing written
    /// * `ServiceError::Validation` - empty names or malformed email
    pub async fn save_employee(&self, employee: Employee) -> ServiceResult<Employee> {
        let employee = employee.trimmed();
        validate_employee(&employee)?;

        if let Some(existing) = self.repository.find_by_email(&employee.email).await? {
            warn!(
                email = %employee.email,
                existing_id = ?existing.id,
                "Rejected employee with duplicate email"
            );
            return Err(ServiceError::conflict(employee.email));
        }

        let saved = self.repository.save(employee).await?;
        info!(id = ?saved.id, name = %saved.full_name(), email = %saved.email, "Employee saved");
        Ok(saved)
    }

    pub async fn get_all_employees(&self) -> ServiceResult<Vec<Employee>> {
        Ok(self.repository.find_all().await?)
    }

    pub async fn get_employee_by_id(&self, id: i64) -> ServiceResult<Option<Employee>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Saves changes to an existing employee.
    ///
    /// The email is not looked up first. Moving onto another employee's
    /// email is still refused by the store and reported as a conflict.
    pub async fn update_employee(&self, employee: Employee) -> ServiceResult<Employee> {
        let employee = employee.trimmed();
        validate_employee(&employee)?;

        let updated = self.repository.save(employee).await?;
        debug!(id = ?updated.id, "Employee updated");
        Ok(updated)
    }

    pub async fn delete_employee(&self, id: i64) -> ServiceResult<()> {
        self.repository.delete_by_id(id).await?;
        debug!(id, "Employee deleted");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
