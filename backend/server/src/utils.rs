use std::num::IntErrorKind;

use menu::Constraints;
use serde::Deserialize;

use crate::error::AppError;

/// Raw filter parameters as they arrive in the query string.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuQuery {
    pub name: Option<String>,
    pub category: Option<String>,
    pub cuisine: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub availability: Option<String>,
    pub min_servings: Option<String>,
    pub max_servings: Option<String>,
}

impl TryFrom<MenuQuery> for Constraints {
    type Error = AppError;

    fn try_from(query: MenuQuery) -> Result<Self, Self::Error> {
        Ok(Constraints {
            name: non_empty(query.name),
            category: non_empty(query.category),
            cuisine: non_empty(query.cuisine),
            min_price: parse_bound("minPrice", query.min_price)?,
            max_price: parse_bound("maxPrice", query.max_price)?,
            // anything but the exact literal "true" means unavailable
            availability: query.availability.map(|value| value == "true"),
            min_servings: parse_bound("minServings", query.min_servings)?,
            max_servings: parse_bound("maxServings", query.max_servings)?,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

fn parse_bound(param: &str, value: Option<String>) -> Result<Option<i64>, AppError> {
    let Some(value) = non_empty(value) else {
        return Ok(None);
    };

    value.trim().parse::<i64>().map(Some).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            AppError::out_of_range(param, &value)
        }
        _ => AppError::invalid_number(param, &value),
    })
}

/// Item ids that are not a positive integer can never match.
pub fn parse_id(raw: &str) -> Result<u32, AppError> {
    raw.parse::<u32>()
        .ok()
        .filter(|&id| id > 0)
        .ok_or(AppError::NotFound)
}
