use {
    crate::{
        bits::{Bits, MAX_POS},
        case::TestCase,
    },
    rand::Rng,
};

/// 生成するテストケースの規模.
#[derive(Debug, Clone)]
pub struct GenParams {
    pub cases: usize,
    pub max_items: usize,
    pub max_queries: usize,
}

impl Default for GenParams {
    fn default() -> Self {
        Self {
            cases: 10,
            max_items: 100000,
            max_queries: 10000,
        }
    }
}

/// 1 つの要素の位置集合を作る. 位置は 1 個か 2 個で, 2 個目は 1 個目から 15 から 29 程度までの間隔の中で選ぶ.
fn gen_item(rng: &mut impl Rng) -> Bits {
    let first = rng.gen_range(1..=MAX_POS);
    let interval = rng.gen_range(15..30);
    let second = rng.gen_range(first + 1..first + interval);

    let positions = if second <= MAX_POS {
        vec![first, second]
    } else {
        vec![first]
    };
    Bits::from_positions(positions).expect("generated positions must be within 1..=MAX_POS")
}

fn gen_case(rng: &mut impl Rng, params: &GenParams) -> TestCase {
    let n = rng.gen_range(1..=params.max_items);
    let items = (0..n).map(|_| gen_item(rng)).collect();

    let q = rng.gen_range(1..=params.max_queries);
    let queries = (0..q)
        .map(|_| {
            let l = rng.gen_range(1..=n);
            let r = rng.gen_range(l..=n);
            (l, r)
        })
        .collect();

    TestCase { items, queries }
}

pub fn generate(rng: &mut impl Rng, params: &GenParams) -> Vec<TestCase> {
    (0..params.cases).map(|_| gen_case(rng, params)).collect()
}

#[test]
fn test_generate_constraints() {
    use rand::prelude::*;

    let mut rng = StdRng::seed_from_u64(0);
    let params = GenParams {
        cases: 10,
        max_items: 500,
        max_queries: 200,
    };
    let cases = generate(&mut rng, &params);
    assert_eq!(cases.len(), 10);

    for case in &cases {
        let n = case.items.len();
        assert!(1 <= n && n <= params.max_items);
        assert!(1 <= case.queries.len() && case.queries.len() <= params.max_queries);

        for item in &case.items {
            let count = item.positions().count();
            assert!(count == 1 || count == 2, "{:?}", item);
        }
        for &(l, r) in &case.queries {
            assert!(1 <= l && l <= r && r <= n);
        }
    }
}

#[test]
fn test_gen_item_positions() {
    use rand::prelude::*;

    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..10000 {
        let positions = gen_item(&mut rng).positions().collect::<Vec<_>>();
        assert!(positions.len() == 1 || positions.len() == 2, "{:?}", positions);
        assert!(positions.iter().all(|&pos| 1 <= pos && pos <= MAX_POS));
        assert!(positions.windows(2).all(|w| w[1] - w[0] < 30));
    }
}

#[test]
fn test_generate_is_deterministic() {
    use rand::prelude::*;

    let params = GenParams {
        cases: 3,
        max_items: 100,
        max_queries: 100,
    };
    let a = generate(&mut StdRng::seed_from_u64(42), &params);
    let b = generate(&mut StdRng::seed_from_u64(42), &params);
    assert_eq!(a, b);
}
