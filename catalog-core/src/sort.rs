//! Natural, case- and accent-insensitive ordering of product descriptions.
//!
//! Digit runs compare by value ("Item 2" < "Item 10"), letters compare by their base
//! form ("Água" == "agua"), and within a run the usual collation classes apply:
//! whitespace < punctuation < digits < letters.

use std::cmp::Ordering;
use std::iter::Peekable;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::model::Product;

pub fn compare_descriptions(a: &str, b: &str) -> Ordering {
    let mut left = folded(a).peekable();
    let mut right = folded(b).peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let l_run = take_digits(&mut left);
                let r_run = take_digits(&mut right);
                match compare_digit_runs(&l_run, &r_run) {
                    Ordering::Equal => continue,
                    other => return other,
                }
            }
            (Some(l), Some(r)) => {
                let ordering = (class(l), l).cmp(&(class(r), r));
                if ordering != Ordering::Equal {
                    return ordering;
                }
                left.next();
                right.next();
            }
        }
    }
}

/// Stable sort by description.
pub fn sort_by_description(products: &mut [Product]) {
    products.sort_by(|a, b| compare_descriptions(&a.description, &b.description));
}

pub fn sorted_by_description(mut products: Vec<Product>) -> Vec<Product> {
    sort_by_description(&mut products);
    products
}

fn take_digits<I: Iterator<Item = char>>(chars: &mut Peekable<I>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.next_if(|c| c.is_ascii_digit()) {
        run.push(c);
    }
    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn class(c: char) -> u8 {
    if c.is_whitespace() {
        0
    } else if c.is_ascii_digit() {
        2
    } else if c.is_alphanumeric() {
        3
    } else {
        1
    }
}

/// Lowercase, decompose, drop the combining marks.
fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars()
        .flat_map(char::to_lowercase)
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(base_letter)
}

// Stroked letters have no canonical decomposition.
fn base_letter(c: char) -> char {
    match c {
        'ł' => 'l',
        'ø' => 'o',
        'đ' => 'd',
        'ħ' => 'h',
        'ŧ' => 't',
        'ı' => 'i',
        other => other,
    }
}
