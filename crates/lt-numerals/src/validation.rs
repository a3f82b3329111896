use crate::ValidationError;

/// Checks that `min <= value <= max`, failing if the range itself is inverted
pub fn check_value_between(min: i64, max: i64, value: i64) -> Result<(), ValidationError> {
    if min > max {
        return Err(ValidationError::InvalidRange { min, max });
    }

    if value < min {
        return Err(ValidationError::BelowMinimum { value, min });
    }

    if value > max {
        return Err(ValidationError::AboveMaximum { value, max });
    }
    Ok(())
}

pub fn check_not_negative(value: i64) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::NegativeValue(value));
    }
    Ok(())
}
