use colored::*;
use fibo_common::success;
use fibo_core::runner::RunSummary;
use num_bigint::BigUint;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::{banner, colors, logging::PRINT_TARGET};

pub const TOTAL_WIDTH: usize = 64;
const MAX_INLINE_DIGITS: usize = 24;

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

pub fn banner(no_banner: bool, verbose: u8) {
    if no_banner || verbose == 0 {
        return;
    }

    let text_content: String = format!("⟦ FIBO v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═"
        .repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2)
        .color(colors::SEPARATOR);
    let output: String = format!("{}{}{}", sep, text, sep);

    print(&output);
    banner::print();
}

pub fn header(msg: &str, verbose: u8) {
    if verbose == 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().color(colors::PRIMARY),
        "─".repeat(right)
    )
    .color(colors::SEPARATOR);

    print(&format!("{}", line));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR);
    print(&format!("{}", sep));
}

pub fn centerln(msg: &str) {
    print(&centered(msg));
}

/// Left-pads `msg` so it sits in the middle of the terminal width.
fn centered(msg: &str) -> String {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    format!("{}{}", space, msg)
}

/// Long terms are summarised by their digit count.
fn describe_term(value: &BigUint) -> String {
    let digits = value.to_string();
    if digits.len() <= MAX_INLINE_DIGITS {
        digits
    } else {
        format!("<{} digits>", digits.len())
    }
}

pub fn summary(summary: &RunSummary, verbose: u8) {
    if verbose == 0 {
        return;
    }

    let terms: ColoredString = format!("{} terms", summary.terms).bold().color(colors::PRIMARY);
    let elapsed: ColoredString =
        format!("{:.2}ms", summary.elapsed.as_secs_f64() * 1000.0).bold().color(colors::ACCENT);
    let last: ColoredString = match &summary.last {
        Some(value) => describe_term(value).color(colors::TERM_VALUE),
        None => "none".dimmed(),
    };

    fat_separator();
    centerln(&format!(
        "{}",
        format!("Sequence Complete: {terms} in {elapsed}, last term {last}")
            .color(colors::TEXT_DEFAULT)
    ));
    success!("wrote {} terms to stdout", summary.terms);
}
