use crate::database::models::{Employee, EmployeeInput, EmployeeRole, UpdateEmployeeInput};
use crate::database::repositories::EmployeeRepository;
use crate::error::AppError;

#[derive(Clone)]
pub struct EmployeeService {
    repository: EmployeeRepository,
}

impl EmployeeService {
    pub fn new(repository: EmployeeRepository) -> Self {
        Self { repository }
    }

    pub async fn create_employee(&self, input: EmployeeInput) -> Result<Employee, AppError> {
        self.validate_new_employee(&input).await?;

        let employee = self.repository.create_employee(input).await?;
        log::info!(
            "Created employee {} ({}) with id {}",
            employee.employee_id,
            employee.full_name(),
            employee.id
        );

        Ok(employee)
    }

    pub async fn get_employee_by_id(&self, id: i64) -> Result<Employee, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Employee not found with id: {}", id)))
    }

    pub async fn get_employee_by_employee_id(&self, employee_id: &str) -> Result<Employee, AppError> {
        self.repository
            .find_by_employee_id(employee_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!(
                    "Employee not found with employeeId: {}",
                    employee_id
                ))
            })
    }

    pub async fn update_employee(
        &self,
        id: i64,
        input: UpdateEmployeeInput,
    ) -> Result<Employee, AppError> {
        self.get_employee_by_id(id).await?;

        // Email must stay unique, ignoring the employee being updated
        if let Some(existing) = self.repository.find_by_email(&input.email).await? {
            if existing.id != id {
                return Err(AppError::validation("Email already in use"));
            }
        }
        validate_limits(input.max_shifts_per_week, input.min_rest_hours)?;

        let employee = self
            .repository
            .update_employee(id, input)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Employee not found with id: {}", id)))?;
        log::info!("Updated employee {}", employee.id);

        Ok(employee)
    }

    /// Soft delete. The record stays retrievable with `is_active = false`.
    pub async fn deactivate_employee(&self, id: i64) -> Result<Employee, AppError> {
        let employee = self
            .repository
            .set_active(id, false)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Employee not found with id: {}", id)))?;
        log::info!("Deactivated employee {}", employee.id);

        Ok(employee)
    }

    pub async fn get_active_employees(&self) -> Result<Vec<Employee>, AppError> {
        Ok(self.repository.find_active().await?)
    }

    pub async fn get_employees_by_role(&self, role: EmployeeRole) -> Result<Vec<Employee>, AppError> {
        Ok(self.repository.find_by_role(role).await?)
    }

    async fn validate_new_employee(&self, input: &EmployeeInput) -> Result<(), AppError> {
        if input.employee_id.trim().is_empty() {
            return Err(AppError::validation("Employee ID is required"));
        }

        if self
            .repository
            .find_by_employee_id(&input.employee_id)
            .await?
            .is_some()
        {
            return Err(AppError::validation("Employee ID already exists"));
        }

        if self.repository.find_by_email(&input.email).await?.is_some() {
            return Err(AppError::validation("Email already in use"));
        }

        validate_limits(input.max_shifts_per_week, input.min_rest_hours)
    }
}

fn validate_limits(
    max_shifts_per_week: Option<i32>,
    min_rest_hours: Option<i32>,
) -> Result<(), AppError> {
    if max_shifts_per_week.is_some_and(|max| max < 0) {
        return Err(AppError::validation(
            "Maximum shifts per week cannot be negative",
        ));
    }

    if min_rest_hours.is_some_and(|hours| hours < 0) {
        return Err(AppError::validation("Minimum rest hours cannot be negative"));
    }

    Ok(())
}
