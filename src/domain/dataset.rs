//! DatasetSource Trait
//!
//! Abstraction for the records a widget displays, so a live backend can replace
//! the bundled sample data without touching rendering code.

use std::sync::Arc;

/// Provides an immutable, ordered set of records to a single widget
pub trait DatasetSource<T>: Send + Sync + 'static {
    /// All records, in display order
    fn records(&self) -> Arc<[T]>;

    /// Get the total number of records
    fn len(&self) -> usize {
        self.records().len()
    }

    /// Check if empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory dataset fixed at construction
#[derive(Debug)]
pub struct StaticDataset<T> {
    records: Arc<[T]>,
}

impl<T: Send + Sync + 'static> StaticDataset<T> {
    /// Create a new dataset
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Dataset with no records
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Wrap into the shared handle widgets accept
    pub fn shared(self) -> Arc<dyn DatasetSource<T>> {
        Arc::new(self)
    }
}

impl<T: Send + Sync + 'static> DatasetSource<T> for StaticDataset<T> {
    fn records(&self) -> Arc<[T]> {
        self.records.clone()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_order_and_length() {
        let dataset = StaticDataset::new(vec![3, 1, 2]);
        assert_eq!(dataset.len(), 3);
        assert!(!dataset.is_empty());
        assert_eq!(&*dataset.records(), &[3, 1, 2]);
    }

    #[test]
    fn records_are_shared_not_copied() {
        let dataset = StaticDataset::new(vec!["a".to_string()]);
        let first = dataset.records();
        let second = dataset.records();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn empty_dataset() {
        let source = StaticDataset::<u32>::empty().shared();
        assert!(source.is_empty());
        assert!(source.records().is_empty());
    }
}
