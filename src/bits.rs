use {
    crate::seg_tree::Monoid,
    anyhow::{ensure, Result},
    std::fmt,
};

/// 立てられる位置の最大値. 位置は 1 から `MAX_POS` まで.
pub const MAX_POS: u32 = 30;

/// 空の集合を出力するときの記号.
pub const EMPTY_SENTINEL: &str = "%";

/// `Bits` は 1 から 30 までの位置の集合を表す.
///
/// 位置 `p` が含まれるとき, かつそのときに限り `p - 1` ビット目が立つ. `MAX_POS` を超えるビットは立たない.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bits(u32);

impl fmt::Debug for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#032b}", self.0)
    }
}

impl Bits {
    pub const EMPTY: Bits = Bits(0);

    pub fn from_positions(positions: impl IntoIterator<Item = u32>) -> Result<Self> {
        let mut bits = 0;
        for pos in positions {
            ensure!(
                (1..=MAX_POS).contains(&pos),
                "position must be in 1..={}, but found {}",
                MAX_POS,
                pos
            );
            bits |= 1 << (pos - 1);
        }
        Ok(Self(bits))
    }

    pub fn raw(self) -> u32 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// `other` の位置をすべて含むかどうか.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// 含まれる位置を昇順に列挙する.
    pub fn positions(self) -> impl Iterator<Item = u32> {
        (1..=MAX_POS).filter(move |&pos| self.0 >> (pos - 1) & 1 == 1)
    }
}

impl Monoid for Bits {
    fn identity() -> Self {
        Self::EMPTY
    }

    fn op(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl fmt::Display for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str(EMPTY_SENTINEL);
        }
        let mut positions = self.positions();
        if let Some(first) = positions.next() {
            write!(f, "{}", first)?;
        }
        for pos in positions {
            write!(f, " {}", pos)?;
        }
        Ok(())
    }
}

#[test]
fn test_from_positions() {
    let bits = Bits::from_positions(vec![2, 17]).unwrap();
    assert_eq!(bits.raw(), 1 << 1 | 1 << 16);
    assert_eq!(bits.positions().collect::<Vec<_>>(), vec![2, 17]);

    assert_eq!(Bits::from_positions(vec![30]).unwrap().raw(), 1 << 29);
    assert!(Bits::from_positions(vec![0]).is_err());
    assert!(Bits::from_positions(vec![31]).is_err());
    assert!(Bits::from_positions(vec![]).unwrap().is_empty());
}

#[test]
fn test_display() {
    assert_eq!(Bits::from_positions(vec![1, 2, 17]).unwrap().to_string(), "1 2 17");
    assert_eq!(Bits::from_positions(vec![30]).unwrap().to_string(), "30");
    assert_eq!(Bits::EMPTY.to_string(), "%");
}

#[test]
fn test_op_is_union() {
    let a = Bits::from_positions(vec![1, 5]).unwrap();
    let b = Bits::from_positions(vec![5, 9]).unwrap();
    let ab = a.op(b);
    assert_eq!(ab.positions().collect::<Vec<_>>(), vec![1, 5, 9]);
    assert!(ab.contains(a) && ab.contains(b));
    assert_eq!(a.op(Bits::identity()), a);
}
