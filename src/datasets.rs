//! Fixed in-memory sample datasets used by the drills, tests and benches.

use std::sync::Arc;

use crate::types::{Dish, Trader, Transaction, User};

/// The restaurant menu, in menu order.
pub fn menu() -> Vec<Dish> {
    vec![
        Dish::new("pork", false, 800, "China"),
        Dish::new("beef", false, 700, "Argentina"),
        Dish::new("chicken", false, 400, "USA"),
        Dish::new("french fries", true, 530, "Belgium"),
        Dish::new("rice", true, 350, "China"),
        Dish::new("season fruit", true, 120, "Spain"),
        Dish::new("pizza", true, 550, "Italy"),
        Dish::new("prawns", true, 300, "Thailand"),
    ]
}

/// A small list of users with repeated ages.
pub fn users() -> Vec<User> {
    vec![
        User::new("Ada", 36),
        User::new("Grace", 24),
        User::new("Linus", 25),
        User::new("Barbara", 36),
        User::new("Ken", 28),
        User::new("Margaret", 24),
    ]
}

/// The traders behind [`transactions`]: Raoul, Mario, Alan and Brian.
#[derive(Debug, Clone)]
pub struct Traders {
    pub raoul: Arc<Trader>,
    pub mario: Arc<Trader>,
    pub alan: Arc<Trader>,
    pub brian: Arc<Trader>,
}

impl Default for Traders {
    fn default() -> Self {
        Self {
            raoul: Arc::new(Trader::new("Raoul", "Cambridge")),
            mario: Arc::new(Trader::new("Mario", "Milan")),
            alan: Arc::new(Trader::new("Alan", "Cambridge")),
            brian: Arc::new(Trader::new("Brian", "Cambridge")),
        }
    }
}

/// The trading transactions, sharing trader references from `traders`.
pub fn transactions(traders: &Traders) -> Vec<Transaction> {
    vec![
        Transaction::new(&traders.brian, 2011, 300),
        Transaction::new(&traders.raoul, 2012, 1000),
        Transaction::new(&traders.raoul, 2011, 400),
        Transaction::new(&traders.mario, 2012, 710),
        Transaction::new(&traders.mario, 2012, 700),
        Transaction::new(&traders.alan, 2012, 950),
    ]
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{menu, transactions, Traders};

    #[test]
    fn every_menu_dish_has_a_known_origin() {
        assert_eq!(menu().len(), 8);
        assert!(menu().iter().all(|d| d.country_of_origin().is_ok()));
    }

    #[test]
    fn transactions_share_trader_references() {
        let traders = Traders::default();
        let txs = transactions(&traders);
        assert_eq!(txs.len(), 6);
        assert!(Arc::ptr_eq(&txs[3].trader, &txs[4].trader));
        assert_eq!(Arc::strong_count(&traders.mario), 3);
    }
}
