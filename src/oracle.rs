use crate::{bits::Bits, seg_tree::Monoid};

/// `Oracle` は各添字の値をそのまま持ち, 区間の計算を毎回 O(N) で走査して求める.
///
/// `SegTree` の答え合わせ用.
#[derive(Debug, Clone)]
pub struct Oracle {
    items: Vec<Bits>,
}

impl Oracle {
    pub fn new(items: Vec<Bits>) -> Self {
        Self { items }
    }

    pub fn brute_or(&self, l: usize, r: usize) -> Bits {
        self.items[l - 1..r]
            .iter()
            .fold(Bits::identity(), |acc, &bits| acc.op(bits))
    }
}

#[test]
fn test_brute_or() {
    let items = vec![
        Bits::from_positions(vec![1]).unwrap(),
        Bits::from_positions(vec![2, 17]).unwrap(),
        Bits::EMPTY,
    ];
    let oracle = Oracle::new(items);
    assert_eq!(oracle.brute_or(1, 2).to_string(), "1 2 17");
    assert_eq!(oracle.brute_or(2, 3).to_string(), "2 17");
    assert_eq!(oracle.brute_or(3, 3), Bits::EMPTY);
}
