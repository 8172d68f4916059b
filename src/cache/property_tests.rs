//! Property-Based Tests for the Cache Module
//!
//! Uses proptest to verify the store's behavioral laws over arbitrary
//! operation sequences.

use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

use crate::cache::TodoCache;

// == Test Configuration ==
const TEST_CAPACITY: usize = 50;
const TEST_MAX_AGE_SECS: u64 = 3600;

// == Strategies ==
/// Generates short todo ids; the narrow shape makes sequences revisit ids
fn id_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,8}".prop_map(|s| s)
}

/// Generates todo text
fn text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,64}".prop_map(|s| s)
}

/// A cache operation as issued by the resolvers
#[derive(Debug, Clone)]
enum CacheOp {
    Insert { id: String, text: String },
    Get { id: String },
    Remove { id: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (id_strategy(), text_strategy())
            .prop_map(|(id, text)| CacheOp::Insert { id, text }),
        id_strategy().prop_map(|id| CacheOp::Get { id }),
        id_strategy().prop_map(|id| CacheOp::Remove { id }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any sequence of operations, the number of live entries never
    // exceeds the configured capacity.
    #[test]
    fn prop_capacity_bound(ops in prop::collection::vec(cache_op_strategy(), 1..120)) {
        let mut cache = TodoCache::new(TEST_CAPACITY, TEST_MAX_AGE_SECS);

        for op in ops {
            match op {
                CacheOp::Insert { id, text } => cache.insert(id, text),
                CacheOp::Get { id } => { cache.get(&id); }
                CacheOp::Remove { id } => { cache.remove(&id); }
            }
            prop_assert!(cache.len() <= TEST_CAPACITY, "Live count exceeded capacity");
            prop_assert!(cache.entries().len() <= TEST_CAPACITY, "Listing exceeded capacity");
        }
    }

    // For any id and text, storing the pair and then retrieving it (before
    // expiration or eviction) returns the exact text that was stored.
    #[test]
    fn prop_roundtrip_storage(id in id_strategy(), text in text_strategy()) {
        let mut cache = TodoCache::new(TEST_CAPACITY, TEST_MAX_AGE_SECS);

        cache.insert(id.clone(), text.clone());

        prop_assert_eq!(cache.get(&id), Some(text));
    }

    // Inserting under a never-seen id creates a retrievable entry; this is
    // the upsert law the update operation relies on.
    #[test]
    fn prop_upsert_creates(id in id_strategy(), text in text_strategy()) {
        let mut cache = TodoCache::new(TEST_CAPACITY, TEST_MAX_AGE_SECS);

        prop_assert_eq!(cache.get(&id), None);
        cache.insert(id.clone(), text.clone());

        let ids: HashSet<String> = cache.entries().into_iter().map(|(i, _)| i).collect();
        prop_assert!(ids.contains(&id));
    }

    // After a remove, the id reads as absent, and repeating the remove any
    // number of times leaves identical observable state.
    #[test]
    fn prop_remove_idempotent(id in id_strategy(), text in text_strategy(), repeats in 1usize..5) {
        let mut cache = TodoCache::new(TEST_CAPACITY, TEST_MAX_AGE_SECS);

        cache.insert(id.clone(), text);
        prop_assert!(cache.remove(&id));

        let after_first = cache.entries();
        for _ in 0..repeats {
            prop_assert!(!cache.remove(&id));
            prop_assert_eq!(cache.entries(), after_first.clone());
        }
        prop_assert_eq!(cache.get(&id), None);
    }

    // For any sequence of inserts and removes (no expiry in play), the
    // listing matches a plain map driven by the same operations, as long as
    // the model stays under capacity.
    #[test]
    fn prop_listing_matches_model(ops in prop::collection::vec(cache_op_strategy(), 1..40)) {
        let mut cache = TodoCache::new(TEST_CAPACITY, TEST_MAX_AGE_SECS);
        let mut model: HashMap<String, String> = HashMap::new();

        for op in ops {
            match op {
                CacheOp::Insert { id, text } => {
                    cache.insert(id.clone(), text.clone());
                    model.insert(id, text);
                }
                CacheOp::Get { id } => { cache.get(&id); }
                CacheOp::Remove { id } => {
                    cache.remove(&id);
                    model.remove(&id);
                }
            }
        }

        // Fewer inserts than capacity, so no eviction occurred
        let listed: HashMap<String, String> = cache.entries().into_iter().collect();
        prop_assert_eq!(listed, model);
    }

    // For any sequence of operations, hit and miss counters reflect exactly
    // the lookups that occurred.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let mut cache = TodoCache::new(TEST_CAPACITY, TEST_MAX_AGE_SECS);
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Insert { id, text } => cache.insert(id, text),
                CacheOp::Get { id } => match cache.get(&id) {
                    Some(_) => expected_hits += 1,
                    None => expected_misses += 1,
                },
                CacheOp::Remove { id } => { cache.remove(&id); }
            }
        }

        let stats = cache.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert_eq!(stats.live_entries, cache.len(), "Live entries mismatch");
    }
}
