use crate::bits::Bits;

#[cfg(test)]
mod tests;

/// Monoid は以下を満たさなければならない.
/// ```rs
/// fn test<M: Monoid>(m: M, n: M, l: M) {
///     m.op(M::identity()) == m;
///     M::identity().op(m) == m;
///     m.op(n.op(l)) == m.op(n).op(l);
/// }
/// ```
pub trait Monoid: Clone + Copy + PartialEq {
    fn identity() -> Self;
    fn op(self, other: Self) -> Self;
}

/// セグメント木, 添字 1 から `len` までの Monoid に対して値の挿入と範囲内の計算結果を以下の計算量で行う.
/// 挿入: O(log N), クエリ: O(log N)
///
/// 節点 1 が根で `[1, len]` を担当し, 節点 `k` の子は `2k` と `2k + 1` になる.
/// 内部節点の値は常に左右の子の値を `op` したものに等しい.
#[derive(Debug, Clone, PartialEq)]
pub struct SegTree<T> {
    vec: Vec<T>,
    len: usize,
}

/// 位置集合を載せたセグメント木.
pub type BitsTree = SegTree<Bits>;

impl<T: Monoid> SegTree<T> {
    /// どんな `len` でも完全二分木が収まるように `4 * len` 個の節点を確保する.
    pub fn new(len: usize) -> Self {
        Self {
            vec: vec![T::identity(); len * 4],
            len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 葉 `index` に `value` を `op` で合成する. 上書きはしない.
    pub fn insert(&mut self, index: usize, value: T) {
        assert!(
            1 <= index && index <= self.len,
            "index {} is out of range [1, {}]",
            index,
            self.len
        );
        self.insert_sub(1, 1, self.len, index, value);
    }

    fn insert_sub(&mut self, node: usize, lo: usize, hi: usize, index: usize, value: T) {
        if lo == hi {
            self.vec[node] = self.vec[node].op(value);
            return;
        }
        let mid = (lo + hi) / 2;
        if index <= mid {
            self.insert_sub(node * 2, lo, mid, index, value);
        } else {
            self.insert_sub(node * 2 + 1, mid + 1, hi, index, value);
        }
        self.vec[node] = self.vec[node * 2].op(self.vec[node * 2 + 1]);
    }

    /// `[l, r]` の全ての葉を `op` した結果を返す.
    pub fn query(&self, l: usize, r: usize) -> T {
        assert!(
            1 <= l && l <= r && r <= self.len,
            "range [{}, {}] is out of range [1, {}]",
            l,
            r,
            self.len
        );
        self.query_sub(1, 1, self.len, l, r)
    }

    fn query_sub(&self, node: usize, lo: usize, hi: usize, l: usize, r: usize) -> T {
        if lo == l && hi == r {
            // 担当区間とクエリが一致するので潜らない
            return self.vec[node];
        }
        let mid = (lo + hi) / 2;
        if r <= mid {
            self.query_sub(node * 2, lo, mid, l, r)
        } else if mid < l {
            self.query_sub(node * 2 + 1, mid + 1, hi, l, r)
        } else {
            self.query_sub(node * 2, lo, mid, l, mid)
                .op(self.query_sub(node * 2 + 1, mid + 1, hi, mid + 1, r))
        }
    }
}
