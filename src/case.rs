use {
    crate::{
        bits::Bits,
        input,
        oracle::Oracle,
        seg_tree::BitsTree,
    },
    anyhow::{Context as _, Result},
    std::io::{Read, Write},
};


/// `TestCase` は 1 つのテストケースを表す. `items[i - 1]` が添字 `i` の位置集合, `queries` は `(l, r)` の列.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    pub items: Vec<Bits>,
    pub queries: Vec<(usize, usize)>,
}

impl TestCase {
    /// ケースごとに新しい木を作る. ケースをまたいで木を使い回さない.
    pub fn build_tree(&self) -> BitsTree {
        let mut tree = BitsTree::new(self.items.len());
        for (i, &bits) in self.items.iter().enumerate() {
            tree.insert(i + 1, bits);
        }
        tree
    }

    pub fn solve(&self) -> Vec<Bits> {
        let tree = self.build_tree();
        self.queries.iter().map(|&(l, r)| tree.query(l, r)).collect()
    }

    pub fn solve_brute(&self) -> Vec<Bits> {
        let oracle = Oracle::new(self.items.clone());
        self.queries
            .iter()
            .map(|&(l, r)| oracle.brute_or(l, r))
            .collect()
    }
}

pub fn write_case(mut out: impl Write, case_no: usize, answers: &[Bits]) -> Result<()> {
    writeln!(out, "Case {}:", case_no)?;
    for answer in answers {
        writeln!(out, "{}", answer)?;
    }
    Ok(())
}

/// 全ての解答を出力の形式で文字列にする.
pub fn render(answers: &[Vec<Bits>]) -> Result<String> {
    let mut buf = vec![];
    for (i, case) in answers.iter().enumerate() {
        write_case(&mut buf, i + 1, case)?;
    }
    String::from_utf8(buf).context("rendered answers are not UTF-8")
}

/// 入力を全て読んでから, ケースを入力順に 1 つずつ解いて出力する.
pub fn run(data: impl Read, mut out: impl Write) -> Result<()> {
    let cases = input::read_cases(data)?;
    info!("{} cases", cases.len());

    for (i, case) in cases.iter().enumerate() {
        let case_no = i + 1;
        debug!(
            "case {}: {} items, {} queries",
            case_no,
            case.items.len(),
            case.queries.len()
        );
        let answers = case.solve();
        write_case(&mut out, case_no, &answers)
            .with_context(|| format!("failed to write answers of case {}", case_no))?;
        out.flush().context("failed to flush output")?;
    }

    Ok(())
}
