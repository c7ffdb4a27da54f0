use rust_decimal::Decimal;
use std::collections::HashSet;

use super::{Catalog, ValidationError, ValidationResult};

/// Trait for validating input models
pub trait Validate {
    fn validate(&self) -> ValidationResult<()>;
}

/// Validation constants
pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;
pub const MAX_HOUR: u32 = 23;
pub const MAX_PRICE_SCALE: u32 = 2;
pub const MAX_PRICE: Decimal = Decimal::from_parts(999999, 0, 0, false, 2); // 9999.99
pub const MAX_BASE_MINUTES: u32 = 24 * 60;

impl Validate for Catalog {
    fn validate(&self) -> ValidationResult<()> {
        let mut seen_categories = HashSet::new();
        let mut seen_items = HashSet::new();

        for category in &self.categories {
            validate_name("category_name", &category.name)?;
            if !seen_categories.insert(category.name.as_str()) {
                return Err(ValidationError::Duplicate {
                    field: "category_name".to_string(),
                    value: category.name.clone(),
                });
            }

            if category.items.is_empty() {
                return Err(ValidationError::RequiredField {
                    field: format!("categories[{}].items", category.name),
                });
            }

            for item in &category.items {
                validate_name("item_name", item)?;
                if !seen_items.insert(item.as_str()) {
                    return Err(ValidationError::Duplicate {
                        field: "item_name".to_string(),
                        value: item.clone(),
                    });
                }

                match self.prices.get(item) {
                    Some(price) => validate_price(item, price)?,
                    None => {
                        return Err(ValidationError::RequiredField {
                            field: format!("prices[{}]", item),
                        })
                    }
                }
            }
        }

        if self.locations.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "locations".to_string(),
            });
        }

        let mut seen_locations = HashSet::new();
        for location in &self.locations {
            validate_name("location_name", &location.name)?;
            if !seen_locations.insert(location.name.as_str()) {
                return Err(ValidationError::Duplicate {
                    field: "location_name".to_string(),
                    value: location.name.clone(),
                });
            }
            validate_base_minutes(&location.name, location.base_minutes)?;
        }

        Ok(())
    }
}

/// Validate a category, item or location name
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::RequiredField {
            field: field.to_string(),
        });
    }

    if name.chars().any(char::is_control) {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: name.to_string(),
            reason: "Contains invalid control characters".to_string(),
        });
    }

    Ok(())
}

/// Validate an item price
pub fn validate_price(item: &str, price: &Decimal) -> ValidationResult<()> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ValidationError::InvalidValue {
            field: format!("prices[{}]", item),
            value: price.to_string(),
            reason: "Price cannot be negative".to_string(),
        });
    }

    if *price > MAX_PRICE {
        return Err(ValidationError::OutOfRange {
            field: format!("prices[{}]", item),
            min: "0".to_string(),
            max: MAX_PRICE.to_string(),
            value: price.to_string(),
        });
    }

    if price.normalize().scale() > MAX_PRICE_SCALE {
        return Err(ValidationError::InvalidValue {
            field: format!("prices[{}]", item),
            value: price.to_string(),
            reason: "Price cannot have more than 2 decimal places".to_string(),
        });
    }

    Ok(())
}

/// Validate a location's base delivery time
pub fn validate_base_minutes(location: &str, minutes: u32) -> ValidationResult<()> {
    if minutes == 0 || minutes > MAX_BASE_MINUTES {
        return Err(ValidationError::OutOfRange {
            field: format!("locations[{}].base_minutes", location),
            min: "1".to_string(),
            max: MAX_BASE_MINUTES.to_string(),
            value: minutes.to_string(),
        });
    }

    Ok(())
}

pub fn is_valid_rating(rating: i32) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}

pub fn is_valid_hour(hour: u32) -> bool {
    hour <= MAX_HOUR
}
