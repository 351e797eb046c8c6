use crate::database::models::{Shift, ShiftInput, is_valid_day_of_week};
use crate::database::repositories::{ShiftPreferenceRepository, ShiftRepository};
use crate::error::AppError;

#[derive(Clone)]
pub struct ShiftService {
    repository: ShiftRepository,
    preference_repository: ShiftPreferenceRepository,
}

impl ShiftService {
    pub fn new(
        repository: ShiftRepository,
        preference_repository: ShiftPreferenceRepository,
    ) -> Self {
        Self {
            repository,
            preference_repository,
        }
    }

    pub async fn create_shift(&self, input: ShiftInput) -> Result<Shift, AppError> {
        self.validate_shift(&input, None).await?;

        let shift = self.repository.create_shift(input).await?;
        log::info!(
            "Created shift '{}' (id {}) on day {} {}-{}",
            shift.name,
            shift.id,
            shift.day_of_week,
            shift.start_time,
            shift.end_time
        );

        Ok(shift)
    }

    pub async fn get_shift_by_id(&self, id: i64) -> Result<Shift, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Shift not found with id: {}", id)))
    }

    pub async fn get_all_shifts(&self) -> Result<Vec<Shift>, AppError> {
        Ok(self.repository.find_all().await?)
    }

    /// Full replace of the shift's fields, re-validated against the other
    /// shifts of the (possibly new) day.
    pub async fn update_shift(&self, id: i64, input: ShiftInput) -> Result<Shift, AppError> {
        self.get_shift_by_id(id).await?;
        self.validate_shift(&input, Some(id)).await?;

        let shift = self
            .repository
            .update_shift(id, input)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Shift not found with id: {}", id)))?;
        log::info!("Updated shift {}", shift.id);

        Ok(shift)
    }

    /// Hard delete. Shifts still referenced by preferences are kept.
    pub async fn delete_shift(&self, id: i64) -> Result<(), AppError> {
        self.get_shift_by_id(id).await?;

        let preference_count = self.preference_repository.count_by_shift(id).await?;
        if preference_count > 0 {
            return Err(AppError::validation(format!(
                "Shift {} still has {} preference(s) and cannot be deleted",
                id, preference_count
            )));
        }

        if !self.repository.delete_shift(id).await? {
            return Err(AppError::not_found(format!("Shift not found with id: {}", id)));
        }
        log::info!("Deleted shift {}", id);

        Ok(())
    }

    pub async fn get_shifts_by_day(&self, day_of_week: i32) -> Result<Vec<Shift>, AppError> {
        if !is_valid_day_of_week(day_of_week) {
            return Err(AppError::validation("Day of week must be between 1 and 7"));
        }

        Ok(self.repository.find_by_day(day_of_week).await?)
    }

    async fn validate_shift(&self, input: &ShiftInput, shift_id: Option<i64>) -> Result<(), AppError> {
        if input.start_time == input.end_time {
            return Err(AppError::validation(
                "Start time and end time cannot be the same",
            ));
        }

        if !is_valid_day_of_week(input.day_of_week) {
            return Err(AppError::validation("Day of week must be between 1 and 7"));
        }

        let same_day = self.repository.find_by_day(input.day_of_week).await?;
        if let Some(conflict) = same_day
            .iter()
            .filter(|existing| Some(existing.id) != shift_id)
            .find(|existing| input.overlaps_with(existing))
        {
            return Err(AppError::validation(format!(
                "Shift overlaps with existing shift: {}",
                conflict.name
            )));
        }

        Ok(())
    }
}
