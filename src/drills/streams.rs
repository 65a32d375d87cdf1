//! Menu and number drills.

use std::collections::HashSet;

use crate::error::PipelineResult;
use crate::processing::Pipeline;
use crate::types::Dish;

/// Vegetarian dishes, in menu order.
pub fn vegetarian_dishes(menu: &[Dish]) -> Vec<Dish> {
    Pipeline::new(menu.to_vec())
        .filter(|d| d.vegetarian)
        .collect()
}

/// Even numbers without repeats, in first-seen order.
pub fn unique_even_numbers(numbers: &[i32]) -> Vec<i32> {
    Pipeline::new(numbers.to_vec())
        .filter(|n| n % 2 == 0)
        .distinct()
        .collect()
}

/// Length of each dish name, in characters.
pub fn dish_name_lengths(menu: &[Dish]) -> Vec<usize> {
    Pipeline::new(menu.to_vec())
        .map(|d| d.name)
        .map(|name| name.chars().count())
        .collect()
}

/// `true` if at least one dish is vegetarian.
pub fn is_menu_vegetarian_friendly(menu: &[Dish]) -> bool {
    Pipeline::new(menu.to_vec()).any_match(|d| d.vegetarian)
}

/// Some vegetarian dish, if the menu has one.
pub fn vegetarian_dish(menu: &[Dish]) -> Option<Dish> {
    Pipeline::new(menu.to_vec())
        .filter(|d| d.vegetarian)
        .find_any()
}

/// `true` if every dish is under 1000 calories; vacuously `true` for an empty menu.
pub fn is_everything_under_1000_calories(menu: &[Dish]) -> bool {
    Pipeline::new(menu.to_vec()).all_match(|d| d.calories < 1000)
}

/// `true` if no dish exceeds 1000 calories.
pub fn is_nothing_over_1000_calories(menu: &[Dish]) -> bool {
    Pipeline::new(menu.to_vec()).none_match(|d| d.calories > 1000)
}

/// Names of the three lightest dishes above 300 calories.
pub fn three_high_caloric_dish_names(menu: &[Dish]) -> Vec<String> {
    Pipeline::new(menu.to_vec())
        .filter(|d| d.calories > 300)
        .sorted_by_key(|d| d.calories)
        .map(|d| d.name)
        .limit(3)
        .collect()
}

/// Number of dishes on the menu.
pub fn how_many_dishes(menu: &[Dish]) -> usize {
    Pipeline::new(menu.to_vec()).count()
}

/// Every country the menu's dishes come from.
///
/// Fails if any dish has an unknown country of origin; no partial set is returned.
pub fn countries_of_origin(menu: &[Dish]) -> PipelineResult<HashSet<String>> {
    Ok(Pipeline::new(menu.to_vec())
        .try_map(|d| d.country_of_origin().map(str::to_owned))?
        .collect_set())
}
