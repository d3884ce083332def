use ndarray::ArrayView2;

/// An item of an uncertain transaction together with its existential probability.
#[derive(Debug, Clone, PartialEq)]
pub struct Item<L> {
    pub label: L,
    pub probability: f64,
}

impl<L> Item<L> {
    pub fn new(label: L, probability: f64) -> Self {
        Self { label, probability }
    }
}

impl<L> From<(L, f64)> for Item<L> {
    fn from((label, probability): (L, f64)) -> Self {
        Self { label, probability }
    }
}

pub type Transaction<L> = Vec<Item<L>>;

/// A frequent item after preprocessing: `item` is the global rank of its label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedItem {
    pub item: usize,
    pub probability: f64,
}

/// An in-memory uncertain transactional database.
#[derive(Debug, Clone, PartialEq)]
pub struct UncertainDatabase<L> {
    transactions: Vec<Transaction<L>>,
}

impl<L> Default for UncertainDatabase<L> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<L> UncertainDatabase<L> {
    pub fn new(transactions: Vec<Transaction<L>>) -> Self {
        Self { transactions }
    }

    /// Builds a database from `(label, probability)` pairs.
    pub fn from_pairs<I, T>(transactions: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: IntoIterator<Item = (L, f64)>,
    {
        Self::new(
            transactions
                .into_iter()
                .map(|tx| tx.into_iter().map(Item::from).collect())
                .collect(),
        )
    }

    pub fn push(&mut self, transaction: Transaction<L>) {
        self.transactions.push(transaction);
    }

    pub fn transactions(&self) -> &[Transaction<L>] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl UncertainDatabase<usize> {
    /// Converts a dense probability matrix (rows are transactions, columns are
    /// items) into a database labelled by column index. Zero entries are absent items.
    pub fn from_matrix(matrix: ArrayView2<f64>) -> Self {
        let transactions = matrix
            .rows()
            .into_iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|&(_, &p)| p != 0.0)
                    .map(|(item, &p)| Item::new(item, p))
                    .collect()
            })
            .collect();

        Self::new(transactions)
    }
}
