#![cfg(test)]

// Property tests for Hashtable kept inside the crate so they can inspect
// the modification counter directly.

use crate::error::IterError;
use crate::hashtable::Hashtable;
use proptest::prelude::*;
use std::collections::BTreeMap;
use std::hash::{BuildHasher, Hasher};

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Put(usize, i32),
    Delete(usize),
    Get(usize),
    GetKey(i32),
    Clear,
    Keys,
    Cursor,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=8).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            4 => (idx.clone(), 0i32..4).prop_map(|(i, v)| OpI::Put(i, v)),
            2 => idx.clone().prop_map(OpI::Delete),
            2 => idx.clone().prop_map(OpI::Get),
            1 => (0i32..4).prop_map(OpI::GetKey),
            1 => Just(OpI::Clear),
            1 => Just(OpI::Keys),
            1 => Just(OpI::Cursor),
        ];
        proptest::collection::vec(op, 1..60).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Drives one scenario against a BTreeMap model. Invariants checked:
// - put succeeds iff the key is absent; rejected puts leave len and mod_count alone.
// - delete succeeds iff the key is present.
// - get/get_key agree with the model (get_key: some key mapped to the value).
// - keys() equals the model's ascending key sequence.
// - A cursor taken before a successful mutation reports Stale; otherwise it
//   walks the same keys as the model.
// - len/is_empty parity after every op.
fn run_scenario<S: BuildHasher>(
    mut sut: Hashtable<String, i32, S>,
    pool: Vec<String>,
    ops: Vec<OpI>,
) -> Result<(), TestCaseError> {
    let mut model: BTreeMap<String, i32> = BTreeMap::new();
    let mut pending = sut.key_cursor();
    let mut dirty = false;

    for op in ops {
        let before = sut.generation();
        let mutated = match op {
            OpI::Put(i, v) => {
                let k = pool[i].clone();
                let already = model.contains_key(&k);
                let ok = sut.put(k.clone(), v);
                prop_assert_eq!(ok, !already, "put must succeed iff key is absent");
                if ok {
                    model.insert(k, v);
                } else {
                    prop_assert_eq!(sut.generation(), before);
                }
                ok
            }
            OpI::Delete(i) => {
                let k = &pool[i];
                let ok = sut.delete(k.as_str());
                prop_assert_eq!(ok, model.remove(k).is_some());
                ok
            }
            OpI::Get(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.get(k.as_str()), model.get(k));
                false
            }
            OpI::GetKey(v) => {
                match sut.get_key(&v) {
                    Some(k) => {
                        prop_assert_eq!(model.get(k), Some(&v));
                    }
                    None => {
                        prop_assert!(model.values().all(|mv| *mv != v));
                    }
                }
                false
            }
            OpI::Clear => {
                sut.clear();
                model.clear();
                true
            }
            OpI::Keys => {
                let s_keys: Vec<&String> = sut.keys().collect();
                let m_keys: Vec<&String> = model.keys().collect();
                prop_assert_eq!(s_keys, m_keys);
                false
            }
            OpI::Cursor => {
                let mut seen = Vec::new();
                if dirty {
                    prop_assert_eq!(pending.has_next(&sut), Err(IterError::Stale));
                } else {
                    while pending.has_next(&sut)? {
                        seen.push(pending.next(&sut)?);
                    }
                    let m_keys: Vec<String> = model.keys().cloned().collect();
                    prop_assert_eq!(seen, m_keys);
                }
                pending = sut.key_cursor();
                dirty = false;
                false
            }
        };

        if mutated {
            prop_assert!(sut.generation().mod_count() > before.mod_count());
            dirty = true;
        } else {
            prop_assert_eq!(sut.generation(), before);
        }
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario(), capacity in 1usize..=9) {
        run_scenario(Hashtable::with_capacity(capacity), pool, ops)?;
    }
}

// Collision variant using a constant hasher to stress equality resolution.
#[derive(Clone, Default)]
struct ConstBuildHasher;
struct ConstHasher;
impl BuildHasher for ConstBuildHasher {
    type Hasher = ConstHasher;
    fn build_hasher(&self) -> Self::Hasher {
        ConstHasher
    }
}
impl Hasher for ConstHasher {
    fn write(&mut self, _bytes: &[u8]) {}
    fn finish(&self) -> u64 {
        0
    }
}

// Property: same state-machine invariants when every key shares a chain.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario(), capacity in 1usize..=9) {
        run_scenario(Hashtable::with_capacity_and_hasher(capacity, ConstBuildHasher), pool, ops)?;
    }
}
