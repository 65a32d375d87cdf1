//! Collection-processing drills.
//!
//! Each drill is a single [`crate::processing::Pipeline`] instantiation over one of the
//! [`crate::datasets`]:
//!
//! - [`convert`]: numbers, users, low-calorie dishes and deck generation
//! - [`streams`]: menu queries (vegetarian, calories, countries of origin)
//! - [`transactions`]: trader/transaction questions

pub mod convert;
pub mod streams;
pub mod transactions;

pub use transactions::TransactionQuestions;
