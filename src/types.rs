//! Immutable value records the drills run over.
//!
//! Every record is a plain value: equality and hashing are structural, and nothing is mutated
//! after construction.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::UnknownCountryOfOrigin;

/// A named user with an age.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub age: u32,
}

impl User {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

/// A dish on a menu.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dish {
    pub name: String,
    pub vegetarian: bool,
    pub calories: u32,
    /// `None` when the origin is unknown; see [`Dish::country_of_origin`].
    pub country: Option<String>,
}

impl Dish {
    /// Create a dish with a known country of origin.
    pub fn new(
        name: impl Into<String>,
        vegetarian: bool,
        calories: u32,
        country: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            vegetarian,
            calories,
            country: Some(country.into()),
        }
    }

    /// Create a dish whose country of origin is unknown.
    pub fn without_origin(name: impl Into<String>, vegetarian: bool, calories: u32) -> Self {
        Self {
            name: name.into(),
            vegetarian,
            calories,
            country: None,
        }
    }

    /// Resolve the dish's country of origin.
    pub fn country_of_origin(&self) -> Result<&str, UnknownCountryOfOrigin> {
        self.country
            .as_deref()
            .ok_or_else(|| UnknownCountryOfOrigin {
                dish: self.name.clone(),
            })
    }
}

impl fmt::Display for Dish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Card suit, in deck order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// Every suit in declaration order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
}

/// Card rank, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Every rank in declaration order.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} of {:?}", self.rank, self.suit)
    }
}

/// A trader working in a city.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Trader {
    pub name: String,
    pub city: String,
}

impl Trader {
    pub fn new(name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
        }
    }
}

impl fmt::Display for Trader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.city)
    }
}

/// A trade made by a trader in a given year.
///
/// The trader is shared between transactions. `Arc<Trader>` compares and hashes by value, so two
/// transactions by equal traders see the same logical trader regardless of allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transaction {
    pub trader: Arc<Trader>,
    pub year: u32,
    pub value: u32,
}

impl Transaction {
    pub fn new(trader: &Arc<Trader>, year: u32, value: u32) -> Self {
        Self {
            trader: Arc::clone(trader),
            year,
            value,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, year: {}, value: {}}}", self.trader, self.year, self.value)
    }
}
