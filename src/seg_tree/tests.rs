use super::{BitsTree, Monoid, SegTree};
use crate::{bits::Bits, oracle::Oracle};
use proptest::prelude::*;
use rand::prelude::*;
use rand::Rng;

fn bits(positions: &[u32]) -> Bits {
    Bits::from_positions(positions.iter().copied()).unwrap()
}

fn build(items: &[Bits]) -> BitsTree {
    let mut tree = BitsTree::new(items.len());
    for (i, &item) in items.iter().enumerate() {
        tree.insert(i + 1, item);
    }
    tree
}

fn random_items(rng: &mut StdRng, len: usize) -> Vec<Bits> {
    (0..len)
        .map(|_| {
            let count = rng.gen_range(0..=2);
            Bits::from_positions((0..count).map(|_| rng.gen_range(1..=30))).unwrap()
        })
        .collect()
}

/// 全ての内部節点が左右の子の合成になっているか確かめる.
fn assert_invariant<T: Monoid + std::fmt::Debug>(tree: &SegTree<T>, node: usize, lo: usize, hi: usize) {
    if lo == hi {
        return;
    }
    let mid = (lo + hi) / 2;
    assert_eq!(
        tree.vec[node],
        tree.vec[node * 2].op(tree.vec[node * 2 + 1]),
        "node: {} [{}, {}]",
        node,
        lo,
        hi
    );
    assert_invariant(tree, node * 2, lo, mid);
    assert_invariant(tree, node * 2 + 1, mid + 1, hi);
}

#[test]
fn simple_case() {
    let tree = build(&[bits(&[1]), bits(&[2, 17]), bits(&[])]);
    assert_eq!(tree.query(1, 2), bits(&[1, 2, 17]));
    assert_eq!(tree.query(3, 3), Bits::EMPTY);
    assert_eq!(tree.query(1, 3), bits(&[1, 2, 17]));
    assert_eq!(tree.query(2, 3), bits(&[2, 17]));
    assert_invariant(&tree, 1, 1, 3);
}

#[test]
fn single_leaf() {
    let tree = build(&[bits(&[30])]);
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.query(1, 1), bits(&[30]));
}

#[test]
fn insert_accumulates() {
    let mut tree = BitsTree::new(5);
    tree.insert(3, bits(&[4]));
    tree.insert(3, bits(&[7]));
    tree.insert(3, bits(&[4]));
    assert_eq!(tree.query(3, 3), bits(&[4, 7]));
    assert_eq!(tree.query(1, 5), bits(&[4, 7]));
    assert_eq!(tree.query(1, 2), Bits::EMPTY);
    assert_invariant(&tree, 1, 1, 5);
}

#[test]
fn untouched_tree_is_identity() {
    let tree = BitsTree::new(7);
    assert!(!tree.is_empty());
    assert_eq!(tree.query(1, 7), Bits::EMPTY);
    assert!(BitsTree::new(0).is_empty());
}

#[test]
#[should_panic(expected = "out of range")]
fn insert_out_of_range() {
    let mut tree = BitsTree::new(4);
    tree.insert(5, bits(&[1]));
}

#[test]
#[should_panic(expected = "out of range")]
fn insert_zero_index() {
    let mut tree = BitsTree::new(4);
    tree.insert(0, bits(&[1]));
}

#[test]
#[should_panic(expected = "out of range")]
fn query_reversed_range() {
    let tree = BitsTree::new(4);
    tree.query(3, 2);
}

#[test]
fn random_against_oracle() {
    // fixed rng for stabilize test results
    let mut rng = StdRng::seed_from_u64(0);
    for len in (1..=64).chain([1000, 1023, 1024, 1025].iter().copied()) {
        let items = random_items(&mut rng, len);
        let tree = build(&items);
        let oracle = Oracle::new(items);
        assert_invariant(&tree, 1, 1, len);
        for _ in 0..200 {
            let l = rng.gen_range(1..=len);
            let r = rng.gen_range(l..=len);
            assert_eq!(tree.query(l, r), oracle.brute_or(l, r), "len: {} [{}, {}]", len, l, r);
        }
    }
}

fn items_strategy() -> impl Strategy<Value = Vec<Bits>> {
    prop::collection::vec(
        prop::collection::vec(1..=30u32, 0..=2)
            .prop_map(|positions| Bits::from_positions(positions).unwrap()),
        1..200,
    )
}

fn items_and_range() -> impl Strategy<Value = (Vec<Bits>, usize, usize)> {
    items_strategy().prop_flat_map(|items| {
        let len = items.len();
        (Just(items), 1..=len)
            .prop_flat_map(move |(items, l)| (Just(items), Just(l), l..=len))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_equals_oracle((items, l, r) in items_and_range()) {
        let tree = build(&items);
        let oracle = Oracle::new(items);
        prop_assert_eq!(tree.query(l, r), oracle.brute_or(l, r));
    }

    #[test]
    fn prop_single_point(items in items_strategy()) {
        let tree = build(&items);
        for (i, &item) in items.iter().enumerate() {
            prop_assert_eq!(tree.query(i + 1, i + 1), item);
        }
    }

    #[test]
    fn prop_monotone((items, l, r) in items_and_range()) {
        let tree = build(&items);
        let outer = tree.query(l, r);
        for inner_l in l..=r {
            prop_assert!(outer.contains(tree.query(inner_l, r)));
            prop_assert!(outer.contains(tree.query(l, inner_l)));
        }
    }

    #[test]
    fn prop_rebuild_is_deterministic(items in items_strategy()) {
        prop_assert_eq!(build(&items), build(&items));
    }
}
