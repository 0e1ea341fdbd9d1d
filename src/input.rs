use {
    crate::{
        bits::{Bits, MAX_POS},
        case::TestCase,
    },
    anyhow::{ensure, Context as _, Result},
    std::{
        fmt::Display,
        io::{Read, Write},
        str::{FromStr, SplitAsciiWhitespace},
    },
};

struct Tokens<'a> {
    inner: SplitAsciiWhitespace<'a>,
    src_len: usize,
}

impl<'a> Tokens<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            inner: src.split_ascii_whitespace(),
            src_len: src.len(),
        }
    }

    /// 要素 1 つにつき少なくとも 1 トークン要るので, 入力の長さを超えて確保しない.
    fn capacity_for(&self, count: usize) -> usize {
        count.min(self.src_len)
    }

    fn next<T>(&mut self, what: impl Display) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let token = self
            .inner
            .next()
            .with_context(|| format!("expected {}, but found none", what))?;
        token
            .parse()
            .with_context(|| format!("failed to parse {}: '{}'", what, token))
    }
}

/// 入力全体を読み, テストケースの列にする.
///
/// ```text
/// T
/// N
/// m idx_1 .. idx_m   (N 行)
/// Q
/// l r                (Q 行)
/// ```
/// を T 回繰り返したもの. 空白と改行は区別しない.
pub fn read_cases(mut data: impl Read) -> Result<Vec<TestCase>> {
    let mut src = String::new();
    data.read_to_string(&mut src)
        .context("failed to read input")?;
    parse_cases(&src)
}

pub fn parse_cases(src: &str) -> Result<Vec<TestCase>> {
    let mut tokens = Tokens::new(src);

    let case_count: usize = tokens.next("number of test cases")?;
    let mut cases = Vec::with_capacity(tokens.capacity_for(case_count));

    for case_no in 1..=case_count {
        let case = parse_case(&mut tokens).with_context(|| format!("in case {}", case_no))?;
        cases.push(case);
    }

    Ok(cases)
}

fn parse_case(tokens: &mut Tokens) -> Result<TestCase> {
    let n: usize = tokens.next("number of items")?;
    let mut items = Vec::with_capacity(tokens.capacity_for(n));

    for item in 1..=n {
        let m: u32 = tokens.next(format_args!("bit count of item {}", item))?;
        ensure!(
            m <= MAX_POS,
            "bit count of item {} must be at most {}, but found {}",
            item,
            MAX_POS,
            m
        );

        let mut positions = Vec::with_capacity(m as _);
        for _ in 0..m {
            let pos: u32 = tokens.next(format_args!("bit position of item {}", item))?;
            if let Some(&last) = positions.last() {
                ensure!(
                    last < pos,
                    "bit positions of item {} must be strictly increasing, but found {} after {}",
                    item,
                    pos,
                    last
                );
            }
            positions.push(pos);
        }

        let bits = Bits::from_positions(positions).with_context(|| format!("in item {}", item))?;
        items.push(bits);
    }

    let q: usize = tokens.next("number of queries")?;
    let mut queries = Vec::with_capacity(tokens.capacity_for(q));

    for query in 1..=q {
        let l: usize = tokens.next(format_args!("left end of query {}", query))?;
        let r: usize = tokens.next(format_args!("right end of query {}", query))?;
        ensure!(
            1 <= l && l <= r && r <= n,
            "query {} must satisfy 1 <= l <= r <= {}, but found ({}, {})",
            query,
            n,
            l,
            r
        );
        queries.push((l, r));
    }

    Ok(TestCase { items, queries })
}

/// `read_cases` で読める形式で書き出す. ケースの間には空行を入れる.
pub fn write_cases(mut out: impl Write, cases: &[TestCase]) -> Result<()> {
    writeln!(out, "{}", cases.len())?;
    for (i, case) in cases.iter().enumerate() {
        if i != 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", case.items.len())?;
        for item in &case.items {
            write!(out, "{}", item.positions().count())?;
            for pos in item.positions() {
                write!(out, " {}", pos)?;
            }
            writeln!(out)?;
        }
        writeln!(out, "{}", case.queries.len())?;
        for (l, r) in &case.queries {
            writeln!(out, "{} {}", l, r)?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "1
3
1 1
2 2 17
0
2
1 2
3 3
";

    #[test]
    fn test_parse_sample() {
        let cases = parse_cases(SAMPLE).unwrap();
        assert_eq!(cases.len(), 1);
        let case = &cases[0];
        assert_eq!(case.items.len(), 3);
        assert_eq!(case.items[1].to_string(), "2 17");
        assert!(case.items[2].is_empty());
        assert_eq!(case.queries, vec![(1, 2), (3, 3)]);
    }

    #[test]
    fn test_blank_lines_between_cases() {
        let cases = parse_cases("2\n1\n1 5\n1\n1 1\n\n\n2\n0\n1 30\n1\n2 2\n").unwrap();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[1].items[1].to_string(), "30");
    }

    #[test]
    fn test_malformed() {
        // missing query
        assert!(parse_cases("1\n1\n1 1\n2\n1 1\n").is_err());
        // position out of range
        assert!(parse_cases("1\n1\n1 31\n1\n1 1\n").is_err());
        assert!(parse_cases("1\n1\n1 0\n1\n1 1\n").is_err());
        // not increasing
        assert!(parse_cases("1\n1\n2 3 3\n1\n1 1\n").is_err());
        // bad ranges
        assert!(parse_cases("1\n2\n0\n0\n1\n2 1\n").is_err());
        assert!(parse_cases("1\n2\n0\n0\n1\n1 3\n").is_err());
        assert!(parse_cases("1\n2\n0\n0\n1\n0 1\n").is_err());
        // not a number
        assert!(parse_cases("x\n").is_err());
    }

    #[test]
    fn test_huge_counts() {
        let err = parse_cases("18446744073709551615\n").unwrap_err();
        assert!(format!("{:#}", err).contains("in case 1"), "{:#}", err);

        let err = parse_cases("1\n1099511627776\n").unwrap_err();
        assert!(format!("{:#}", err).contains("bit count of item 1"), "{:#}", err);

        let err = parse_cases("1\n1\n0\n1099511627776\n").unwrap_err();
        assert!(format!("{:#}", err).contains("left end of query 1"), "{:#}", err);
    }

    #[test]
    fn test_error_names_case() {
        let err = parse_cases("2\n1\n0\n1\n1 1\n1\n0\n1\n1 2\n").unwrap_err();
        assert!(format!("{:#}", err).contains("in case 2"), "{:#}", err);
    }

    #[test]
    fn test_write_then_read() {
        let cases = parse_cases(SAMPLE).unwrap();
        let mut buf = vec![];
        write_cases(&mut buf, &cases).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), SAMPLE);
    }
}
