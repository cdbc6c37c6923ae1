//! News Types
//!
//! Identifiers, opaque records and per-item lookup outcomes.

use serde_json::Value;

use super::client::SourceError;

/// Identifier of a news item on the remote API.
pub type ItemId = u64;

/// Item detail as returned by the remote API. Passed through untouched.
pub type ItemRecord = Value;

// == Top Id List ==
/// Ranked identifiers, truncated to the requested count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopIdList(Vec<ItemId>);

impl TopIdList {
    /// Keeps the first `num_items` identifiers of `ranking`, in ranking order.
    ///
    /// A ranking shorter than `num_items` is kept whole.
    pub fn from_ranking(mut ranking: Vec<ItemId>, num_items: u32) -> Self {
        ranking.truncate(num_items as usize);
        Self(ranking)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemId> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// == Item Lookup ==
/// Outcome of resolving one identifier.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemLookup {
    /// The detail endpoint returned the record
    Resolved(ItemRecord),
    /// The lookup failed; the identifier is dropped from the result
    Failed { id: ItemId, reason: String },
}

impl ItemLookup {
    /// Classifies the result of a detail fetch for `id`.
    pub fn from_result(id: ItemId, result: std::result::Result<ItemRecord, SourceError>) -> Self {
        match result {
            Ok(record) => ItemLookup::Resolved(record),
            Err(err) => ItemLookup::Failed {
                id,
                reason: err.to_string(),
            },
        }
    }

    /// Returns the record, or `None` for a failed lookup.
    pub fn into_record(self) -> Option<ItemRecord> {
        match self {
            ItemLookup::Resolved(record) => Some(record),
            ItemLookup::Failed { .. } => None,
        }
    }
}

/// Keeps the resolved records, in their original relative order.
pub fn collect_resolved<I>(lookups: I) -> Vec<ItemRecord>
where
    I: IntoIterator<Item = ItemLookup>,
{
    lookups
        .into_iter()
        .filter_map(ItemLookup::into_record)
        .collect()
}
