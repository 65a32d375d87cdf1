//! Questions over the trader/transaction dataset.

use std::sync::Arc;

use crate::datasets::{self, Traders};
use crate::processing::{Comparator, Pipeline, SortDirection};
use crate::types::{Trader, Transaction};

const CAMBRIDGE: &str = "Cambridge";
const MILAN: &str = "Milan";

/// Answers questions about a fixed list of transactions.
///
/// The transactions are never modified.
#[derive(Debug, Clone)]
pub struct TransactionQuestions {
    transactions: Vec<Transaction>,
}

impl Default for TransactionQuestions {
    fn default() -> Self {
        Self::new(datasets::transactions(&Traders::default()))
    }
}

impl TransactionQuestions {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    fn pipeline(&self) -> Pipeline<Transaction> {
        Pipeline::new(self.transactions.clone())
    }

    /// Transactions from 2011, smallest value first.
    pub fn transactions_2011(&self) -> Vec<Transaction> {
        self.pipeline()
            .filter(|t| t.year == 2011)
            .sorted_by_key(|t| t.value)
            .collect()
    }

    /// Cities traders work in, without repeats, in first-seen order.
    pub fn unique_cities(&self) -> Vec<String> {
        self.pipeline()
            .map(|t| t.trader)
            .map(|trader| trader.city.clone())
            .distinct()
            .collect()
    }

    /// Traders based in Cambridge, sorted by name.
    pub fn cambridge_traders(&self) -> Vec<Arc<Trader>> {
        self.pipeline()
            .map(|t| t.trader)
            .filter(|trader| trader.city == CAMBRIDGE)
            .distinct()
            .sorted_by(
                &Comparator::by_key(|trader: &Arc<Trader>| trader.name.clone()),
                SortDirection::Ascending,
            )
            .collect()
    }

    /// Every trader name once, sorted alphabetically, concatenated with no separator.
    pub fn trader_names(&self) -> String {
        self.pipeline()
            .map(|t| t.trader.name.clone())
            .distinct()
            .sorted()
            .join("")
    }

    pub fn is_milan_based(&self) -> bool {
        self.pipeline()
            .map(|t| t.trader)
            .any_match(|trader| trader.city == MILAN)
    }

    /// Hand the value of every Cambridge trader's transaction to `consumer`, in order.
    ///
    /// Pass `|v| println!("{v}")` to print them.
    pub fn print_cambridge_transactions<F>(&self, consumer: F)
    where
        F: FnMut(u32),
    {
        self.pipeline()
            .filter(|t| t.trader.city == CAMBRIDGE)
            .map(|t| t.value)
            .for_each(consumer);
    }

    /// The highest transaction value, if any transaction exists.
    pub fn highest_value_trade(&self) -> Option<u32> {
        self.pipeline().map(|t| t.value).max()
    }

    /// The transaction with the smallest value, if any.
    pub fn smallest_transaction(&self) -> Option<Transaction> {
        self.pipeline()
            .min_by(&Comparator::by_key(|t: &Transaction| t.value))
    }
}
