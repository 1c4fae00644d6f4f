//! Rankings over the state-wise purchase table.

/// One row of the state purchase dataset. State names are taken as-is;
/// uniqueness is not enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct StatePurchase {
    pub state: String,
    pub purchased_kg: f64,
}

/// Immutable table of state purchases in original file order.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseTable {
    rows: Vec<StatePurchase>,
}

impl PurchaseTable {
    pub fn new(rows: Vec<StatePurchase>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[StatePurchase] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows sorted by purchased volume, largest first. The sort is
    /// stable: ties keep their original file order.
    pub fn sorted_descending(&self) -> Vec<StatePurchase> {
        let mut sorted = self.rows.clone();
        sorted.sort_by(|a, b| b.purchased_kg.total_cmp(&a.purchased_kg));
        sorted
    }

    /// The `n` rows with the largest purchased volume, or the whole table
    /// if it has fewer than `n` rows.
    pub fn top_n(&self, n: usize) -> Vec<StatePurchase> {
        let mut sorted = self.sorted_descending();
        sorted.truncate(n);
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(state: &str, purchased_kg: f64) -> StatePurchase {
        StatePurchase {
            state: state.to_string(),
            purchased_kg,
        }
    }

    fn sample() -> PurchaseTable {
        PurchaseTable::new(vec![
            row("Kerala", 120.0),
            row("Gujarat", 540.0),
            row("Punjab", 310.0),
            row("Assam", 95.0),
            row("Bihar", 310.0),
            row("Goa", 20.0),
        ])
    }

    #[test]
    fn test_sorted_descending_is_a_permutation() {
        let table = sample();
        let sorted = table.sorted_descending();
        assert_eq!(sorted.len(), table.len());
        for original in table.rows() {
            assert!(sorted.contains(original));
        }
        for pair in sorted.windows(2) {
            assert!(pair[0].purchased_kg >= pair[1].purchased_kg);
        }
    }

    #[test]
    fn test_ties_keep_file_order() {
        let sorted = sample().sorted_descending();
        // Punjab precedes Bihar in the file; both purchased 310 kg.
        assert_eq!(sorted[1].state, "Punjab");
        assert_eq!(sorted[2].state, "Bihar");
    }

    #[test]
    fn test_top_n_bounds_excluded_rows() {
        let table = sample();
        let top = table.top_n(5);
        assert_eq!(top.len(), 5);
        let cutoff = top.last().unwrap().purchased_kg;
        for excluded in table.rows().iter().filter(|r| !top.contains(r)) {
            assert!(excluded.purchased_kg <= cutoff);
        }
    }

    #[test]
    fn test_top_n_on_short_table() {
        let table = PurchaseTable::new(vec![row("Goa", 20.0)]);
        assert_eq!(table.top_n(5).len(), 1);
    }
}
