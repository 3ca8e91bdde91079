//! Item-list serialization into the backend's `sku-quantity` tokens.

use indexmap::IndexMap;

/// The two accepted input shapes: a plain sku sequence (one of each) or an
/// ordered sku→quantity mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemSelection {
    Skus(Vec<String>),
    Quantities(IndexMap<String, u32>),
}

impl ItemSelection {
    /// Wire tokens, one `"<sku>-<quantity>"` per entry, preserving input
    /// iteration order. Sequence form implies quantity 1.
    pub fn tokens(&self) -> Vec<String> {
        match self {
            ItemSelection::Skus(skus) => skus.iter().map(|sku| format!("{sku}-1")).collect(),
            ItemSelection::Quantities(map) => map
                .iter()
                .map(|(sku, quantity)| format!("{sku}-{quantity}"))
                .collect(),
        }
    }
}

impl From<Vec<String>> for ItemSelection {
    fn from(skus: Vec<String>) -> Self {
        ItemSelection::Skus(skus)
    }
}

impl From<Vec<u64>> for ItemSelection {
    fn from(skus: Vec<u64>) -> Self {
        ItemSelection::Skus(skus.into_iter().map(|s| s.to_string()).collect())
    }
}

impl From<IndexMap<String, u32>> for ItemSelection {
    fn from(map: IndexMap<String, u32>) -> Self {
        ItemSelection::Quantities(map)
    }
}
