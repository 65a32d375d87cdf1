//! Loop-style computations rewritten as pipelines.

use crate::processing::Pipeline;
use crate::types::{Card, Dish, Rank, Suit, User};

/// Square root of every number. Negative inputs yield `NaN`.
pub fn square_roots(numbers: &[i32]) -> Vec<f64> {
    Pipeline::new(numbers.to_vec())
        .map(|n| f64::from(n).sqrt())
        .collect()
}

/// The age of every user, in input order.
pub fn ages_of_users(users: &[User]) -> Vec<u32> {
    Pipeline::new(users.to_vec()).map(|u| u.age).collect()
}

/// Ages without repeats, in first-seen order.
pub fn distinct_ages(users: &[User]) -> Vec<u32> {
    Pipeline::new(users.to_vec())
        .map(|u| u.age)
        .distinct()
        .collect()
}

/// At most `limit` users, from the front of the list.
pub fn limited_users(users: &[User], limit: usize) -> Vec<User> {
    Pipeline::new(users.to_vec()).limit(limit).collect()
}

pub fn count_users_older_than_25(users: &[User]) -> usize {
    Pipeline::new(users.to_vec())
        .map(|u| u.age)
        .filter(|age| *age > 25)
        .count()
}

/// A user named exactly `name`, if there is one.
pub fn find_user_by_name(users: &[User], name: &str) -> Option<User> {
    Pipeline::new(users.to_vec())
        .filter(|u| u.name == name)
        .find_any()
}

/// Names of dishes under 400 calories, lightest first.
pub fn low_calorie_dish_names_by_calories(menu: &[Dish]) -> Vec<String> {
    Pipeline::new(menu.to_vec())
        .filter(|d| d.calories < 400)
        .sorted_by_key(|d| d.calories)
        .map(|d| d.name)
        .collect()
}

/// A full 52-card deck, suit-major in declaration order.
pub fn new_deck() -> Vec<Card> {
    Pipeline::new(Suit::ALL.to_vec())
        .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(suit, rank)))
        .collect()
}
