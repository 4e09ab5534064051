#![cfg(test)]
use fibo_common::config::Config;
use fibo_core::fibonacci::{self, Fibonacci};
use fibo_core::runner::{self, RunSummary};
use num_bigint::BigUint;

fn render(length: usize) -> anyhow::Result<(String, RunSummary)> {
    let mut out: Vec<u8> = Vec::new();
    let summary = runner::run(&Config::with_length(length), &mut out)?;
    Ok((String::from_utf8(out)?, summary))
}

fn values(output: &str) -> Vec<BigUint> {
    output
        .lines()
        .map(|line| {
            line.strip_prefix("-> ")
                .expect("line without arrow marker")
                .parse()
                .expect("line without a number")
        })
        .collect()
}

fn small(values: &[u64]) -> Vec<BigUint> {
    values.iter().map(|v| BigUint::from(*v)).collect()
}

/// Zero terms prints nothing at all, not even a newline.
#[test]
fn zero_terms_prints_nothing() {
    let (output, summary) = render(0).unwrap();
    assert_eq!(output, "");
    assert_eq!(summary.terms, 0);
}

#[test]
fn default_run_matches_reference_output() {
    let mut out: Vec<u8> = Vec::new();
    runner::run(&Config::default(), &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "-> 0\n-> 1\n-> 1\n-> 2\n-> 3\n"
    );
}

#[test]
fn ten_terms() {
    let (output, summary) = render(10).unwrap();
    assert_eq!(values(&output), small(&[0, 1, 1, 2, 3, 5, 8, 13, 21, 34]));
    assert_eq!(summary.last, Some(BigUint::from(34u8)));
    assert_eq!(output.lines().count(), 10);
}

/// 300 terms runs well past what fits in any primitive integer.
#[test]
fn long_run_follows_recurrence() {
    let (output, summary) = render(300).unwrap();
    let printed = values(&output);
    assert_eq!(printed.len(), 300);
    assert_eq!(summary.terms, 300);
    assert_eq!(&printed[..2], &small(&[0, 1])[..]);
    for n in 2..printed.len() {
        assert_eq!(printed[n], &printed[n - 1] + &printed[n - 2], "term {n}");
    }
    assert_eq!(
        output.lines().last(),
        Some("-> 137347080577163115432025771710279131845700275212767467264610201")
    );
}

#[test]
fn repeated_runs_are_identical() {
    let first = render(25).unwrap().0;
    for _ in 0..3 {
        assert_eq!(render(25).unwrap().0, first);
    }
}

#[test]
fn iterator_and_helpers_agree() {
    let lazy: Vec<BigUint> = Fibonacci::new().take(200).collect();
    assert_eq!(fibonacci::sequence(200), lazy);
    for (n, value) in lazy.iter().enumerate() {
        assert_eq!(&fibonacci::term(n), value);
    }
}
