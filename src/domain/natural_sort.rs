// Natural ("human") string ordering.
//
// Both strings are split into maximal runs of ASCII digits and runs of
// everything else, then compared run by run:
//
//   digits vs digits    compared by numeric value, leading zeros ignored
//   anything else       compared byte-wise
//
// Digit runs with the same value are ordered by their length, so the one
// with fewer leading zeros comes first ("1.2" < "1.02"). A string that runs
// out of runs first is the lesser one. If every run still ties the whole
// strings are compared byte-wise, so the ordering only reports Equal for
// identical strings.
//
//   example: 2.1.0 < 9.0.0 < 10.0.0
//            file2 < file10 < file10a

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Run<'a> {
    Digits(&'a str),
    Text(&'a str),
}

struct Runs<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = *self.rest.as_bytes().first()?;
        let digits = first.is_ascii_digit();
        let end = self
            .rest
            .bytes()
            .position(|b| b.is_ascii_digit() != digits)
            .unwrap_or(self.rest.len());

        // ASCII digits are single bytes, so `end` is always a char boundary
        let (run, rest) = self.rest.split_at(end);
        self.rest = rest;

        Some(if digits { Run::Digits(run) } else { Run::Text(run) })
    }
}

fn runs(s: &str) -> Runs<'_> {
    Runs { rest: s }
}

fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a_value = a.trim_start_matches('0');
    let b_value = b.trim_start_matches('0');
    a_value
        .len()
        .cmp(&b_value.len())
        .then_with(|| a_value.cmp(b_value))
        .then_with(|| a.len().cmp(&b.len()))
}

/// Compare two strings in natural order
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = runs(a);
    let mut right = runs(b);

    loop {
        let ord = match (left.next(), right.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(Run::Digits(x)), Some(Run::Digits(y))) => cmp_digits(x, y),
            (Some(Run::Digits(x) | Run::Text(x)), Some(Run::Digits(y) | Run::Text(y))) => {
                x.cmp(y)
            }
        };

        if ord != Ordering::Equal {
            return ord;
        }
    }
}
