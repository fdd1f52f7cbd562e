//! Partition-merge combinator behind directory listing and search.
//!
//! An actor's view of the corpus is the union of independent partition
//! queries (owned, shared, public). Rather than hand-writing duplicate
//! elimination at each call site, the union is one reusable combinator:
//! partitions merge in the order given, first writer wins per key, and the
//! caller applies whatever ordering policy the surface needs — recency for
//! the full listing, preserved relevance order for search.

use std::collections::HashSet;
use std::hash::Hash;

use crate::types::Document;

/// Union partitions with first-writer-wins deduplication by key.
///
/// A record appearing in several partitions is kept once, attributed to
/// whichever partition was merged first. Relative order within each
/// partition is preserved.
#[must_use]
pub fn merge_partitions<T, K, F>(partitions: impl IntoIterator<Item = Vec<T>>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    let mut merged = Vec::new();

    for partition in partitions {
        for item in partition {
            if seen.insert(key(&item)) {
                merged.push(item);
            }
        }
    }

    merged
}

/// Order documents by `last_modified` descending, ties broken by id
/// ascending so the listing is deterministic under clock coarsening.
pub fn sort_by_recency(documents: &mut [Document]) {
    documents.sort_by(|a, b| {
        b.last_modified
            .cmp(&a.last_modified)
            .then_with(|| a.id.cmp(&b.id))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DocumentId, UserId};
    use chrono::{Duration, Utc};
    use std::collections::BTreeSet;

    fn doc(id: DocumentId, title: &str, modified_offset_secs: i64) -> Document {
        Document {
            id,
            title: title.to_string(),
            owner: UserId::new(),
            is_public: false,
            shared_with: BTreeSet::new(),
            created: Utc::now(),
            last_modified: Utc::now() + Duration::seconds(modified_offset_secs),
        }
    }

    #[test]
    fn test_merge_deduplicates_by_id() {
        let id = DocumentId::new();
        let owned = vec![doc(id, "mine", 0)];
        let public = vec![doc(id, "mine", 0), doc(DocumentId::new(), "other", 0)];

        let merged = merge_partitions([owned, public], |d: &Document| d.id);
        assert_eq!(merged.len(), 2);

        let ids: Vec<_> = merged.iter().map(|d| d.id).collect();
        let unique: HashSet<_> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len());
    }

    #[test]
    fn test_first_partition_wins() {
        let id = DocumentId::new();
        let first = vec![doc(id, "from-owned", 0)];
        let second = vec![doc(id, "from-public", 0)];

        let merged = merge_partitions([first, second], |d: &Document| d.id);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].title, "from-owned");
    }

    #[test]
    fn test_merge_preserves_partition_order() {
        let a = DocumentId::new();
        let b = DocumentId::new();
        let c = DocumentId::new();
        let merged = merge_partitions(
            [vec![doc(a, "a", 0), doc(b, "b", 0)], vec![doc(c, "c", 0)]],
            |d: &Document| d.id,
        );
        let ids: Vec<_> = merged.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![a, b, c]);
    }

    #[test]
    fn test_merge_empty_partitions() {
        let merged = merge_partitions(Vec::<Vec<Document>>::new(), |d| d.id);
        assert!(merged.is_empty());

        let merged = merge_partitions([Vec::<Document>::new(), Vec::new()], |d| d.id);
        assert!(merged.is_empty());
    }

    #[test]
    fn test_sort_by_recency_descending() {
        let old = doc(DocumentId::new(), "old", -100);
        let new = doc(DocumentId::new(), "new", 100);
        let mid = doc(DocumentId::new(), "mid", 0);

        let mut docs = vec![old.clone(), new.clone(), mid.clone()];
        sort_by_recency(&mut docs);

        let titles: Vec<_> = docs.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_sort_ties_break_by_id_ascending() {
        let ts = Utc::now();
        let mut a = doc(DocumentId::new(), "a", 0);
        let mut b = doc(DocumentId::new(), "b", 0);
        a.last_modified = ts;
        b.last_modified = ts;

        let expected_first = a.id.min(b.id);

        let mut docs = vec![b.clone(), a.clone()];
        sort_by_recency(&mut docs);
        assert_eq!(docs[0].id, expected_first);

        // Same outcome regardless of input order.
        let mut docs = vec![a, b];
        sort_by_recency(&mut docs);
        assert_eq!(docs[0].id, expected_first);
    }
}
