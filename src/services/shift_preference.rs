use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::database::models::{
    PreferenceType, ShiftPreference, ShiftPreferenceInput, UpdateShiftPreferenceInput,
};
use crate::database::repositories::ShiftPreferenceRepository;
use crate::error::AppError;
use crate::services::{EmployeeService, ShiftService};

/// Upper bound on UNAVAILABLE preferences held by one employee.
pub const MAX_UNAVAILABLE_PREFERENCES: i64 = 7;

/// Smallest number of preferences forming a sequence.
pub const MIN_SEQUENCE_LENGTH: usize = 2;

#[derive(Clone)]
pub struct ShiftPreferenceService {
    repository: ShiftPreferenceRepository,
    employee_service: EmployeeService,
    shift_service: ShiftService,
}

impl ShiftPreferenceService {
    pub fn new(
        repository: ShiftPreferenceRepository,
        employee_service: EmployeeService,
        shift_service: ShiftService,
    ) -> Self {
        Self {
            repository,
            employee_service,
            shift_service,
        }
    }

    pub async fn create_preference(
        &self,
        input: ShiftPreferenceInput,
    ) -> Result<ShiftPreference, AppError> {
        self.validate_preference(input.employee_id, input.shift_id, None)
            .await?;

        if input.preference_type == PreferenceType::Unavailable {
            self.ensure_unavailable_quota(input.employee_id, 0).await?;
        }

        let preference = self.repository.create_preference(&input).await?;
        log::info!(
            "Created {} preference {} for employee {} on shift {}",
            preference.preference_type,
            preference.id,
            preference.employee_id,
            preference.shift_id
        );

        Ok(preference)
    }

    /// Creates a batch of preferences sharing one freshly generated sequence
    /// id. Either every entry is persisted or none is.
    pub async fn create_sequence_preferences(
        &self,
        inputs: Vec<ShiftPreferenceInput>,
    ) -> Result<Vec<ShiftPreference>, AppError> {
        if inputs.len() < MIN_SEQUENCE_LENGTH {
            return Err(AppError::validation(format!(
                "Sequence must contain at least {} preferences",
                MIN_SEQUENCE_LENGTH
            )));
        }

        let sequence_id = Uuid::new_v4().to_string();
        let mut seen_pairs = HashSet::new();
        let mut pending_unavailable: HashMap<i64, i64> = HashMap::new();

        for input in &inputs {
            self.validate_preference(input.employee_id, input.shift_id, None)
                .await?;

            if !seen_pairs.insert((input.employee_id, input.shift_id)) {
                return Err(AppError::validation(format!(
                    "Sequence contains more than one preference for employee {} and shift {}",
                    input.employee_id, input.shift_id
                )));
            }

            if input.preference_type == PreferenceType::Unavailable {
                let pending = pending_unavailable.entry(input.employee_id).or_insert(0);
                self.ensure_unavailable_quota(input.employee_id, *pending)
                    .await?;
                *pending += 1;
            }
        }

        let preferences = self.repository.create_sequence(&inputs, &sequence_id).await?;
        log::info!(
            "Created sequence {} with {} preferences",
            sequence_id,
            preferences.len()
        );

        Ok(preferences)
    }

    /// Lists an employee's preferences, optionally narrowed to one type.
    pub async fn get_preferences_by_employee(
        &self,
        employee_id: i64,
        preference_type: Option<PreferenceType>,
    ) -> Result<Vec<ShiftPreference>, AppError> {
        self.employee_service.get_employee_by_id(employee_id).await?;

        let preferences = match preference_type {
            Some(preference_type) => {
                self.repository
                    .find_by_employee_and_type(employee_id, preference_type)
                    .await?
            }
            None => self.repository.find_by_employee(employee_id).await?,
        };

        Ok(preferences)
    }

    pub async fn get_sequence_preferences_by_employee(
        &self,
        employee_id: i64,
    ) -> Result<Vec<ShiftPreference>, AppError> {
        self.employee_service.get_employee_by_id(employee_id).await?;
        Ok(self.repository.find_sequences_by_employee(employee_id).await?)
    }

    pub async fn get_preferences_by_shift(
        &self,
        shift_id: i64,
    ) -> Result<Vec<ShiftPreference>, AppError> {
        self.shift_service.get_shift_by_id(shift_id).await?;
        Ok(self.repository.find_by_shift(shift_id).await?)
    }

    /// Only the preference type changes. The stored employee and shift
    /// references are what get re-validated.
    pub async fn update_preference(
        &self,
        id: i64,
        input: UpdateShiftPreferenceInput,
    ) -> Result<ShiftPreference, AppError> {
        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Preference not found with id: {}", id)))?;

        self.validate_preference(existing.employee_id, existing.shift_id, Some(existing.id))
            .await?;

        if input.preference_type == PreferenceType::Unavailable
            && existing.preference_type != PreferenceType::Unavailable
        {
            self.ensure_unavailable_quota(existing.employee_id, 0).await?;
        }

        let preference = self
            .repository
            .update_preference_type(id, input.preference_type)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Preference not found with id: {}", id)))?;
        log::info!(
            "Updated preference {} to {}",
            preference.id,
            preference.preference_type
        );

        Ok(preference)
    }

    async fn validate_preference(
        &self,
        employee_id: i64,
        shift_id: i64,
        preference_id: Option<i64>,
    ) -> Result<(), AppError> {
        self.employee_service.get_employee_by_id(employee_id).await?;
        self.shift_service.get_shift_by_id(shift_id).await?;

        if let Some(existing) = self
            .repository
            .find_by_employee_and_shift(employee_id, shift_id)
            .await?
        {
            if Some(existing.id) != preference_id {
                return Err(AppError::validation(
                    "Preference already exists for this employee and shift",
                ));
            }
        }

        Ok(())
    }

    /// `pending` counts UNAVAILABLE entries not yet persisted for the same
    /// employee (earlier members of the same batch).
    async fn ensure_unavailable_quota(&self, employee_id: i64, pending: i64) -> Result<(), AppError> {
        let stored = self
            .repository
            .count_by_employee_and_type(employee_id, PreferenceType::Unavailable)
            .await?;

        if stored + pending >= MAX_UNAVAILABLE_PREFERENCES {
            return Err(AppError::validation(
                "Employee has reached maximum number of unavailable shifts",
            ));
        }

        Ok(())
    }
}
