/// 出力と解答を比べた結果.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    /// `line` は最初に食い違った行 (1 始まり).
    WrongAnswer { line: usize },
}

/// 行ごとに末尾の空白を無視して比べる. 末尾の空行も無視する.
pub fn compare(output: &str, answer: &str) -> Verdict {
    let output = output.lines().map(str::trim_end).collect::<Vec<_>>();
    let answer = answer.lines().map(str::trim_end).collect::<Vec<_>>();

    let significant = |lines: &[&str]| {
        lines
            .iter()
            .rposition(|line| !line.is_empty())
            .map_or(0, |last| last + 1)
    };
    let output = &output[..significant(&output[..])];
    let answer = &answer[..significant(&answer[..])];

    for (i, (out, ans)) in output.iter().zip(answer).enumerate() {
        if out != ans {
            return Verdict::WrongAnswer { line: i + 1 };
        }
    }
    if output.len() != answer.len() {
        return Verdict::WrongAnswer {
            line: output.len().min(answer.len()) + 1,
        };
    }
    Verdict::Accepted
}

#[test]
fn test_compare() {
    assert_eq!(compare("Case 1:\n1 2\n", "Case 1:\n1 2\n"), Verdict::Accepted);
    assert_eq!(compare("Case 1:  \n1 2\n\n\n", "Case 1:\n1 2"), Verdict::Accepted);
    assert_eq!(compare("", "\n\n"), Verdict::Accepted);
    assert_eq!(
        compare("Case 1:\n1 3\n", "Case 1:\n1 2\n"),
        Verdict::WrongAnswer { line: 2 }
    );
    assert_eq!(
        compare("Case 1:\n", "Case 1:\n%\n"),
        Verdict::WrongAnswer { line: 2 }
    );
    assert_eq!(
        compare(" Case 1:\n", "Case 1:\n"),
        Verdict::WrongAnswer { line: 1 }
    );
}
