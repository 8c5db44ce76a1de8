//! Locale-aware string ordering for table sorting.
//!
//! Uses the Unicode Collation Algorithm with the CLDR root collation and
//! non-ignorable variable weighting, the default of a browser's
//! `localeCompare`: punctuation sorts before symbols, symbols before digits,
//! digits before letters, accented letters next to their base letter, and
//! lowercase before uppercase only when the strings are otherwise equal.

use std::cell::RefCell;
use std::cmp::Ordering;

use feruca::{Collator, Locale, Tailoring};

thread_local! {
    static COLLATOR: RefCell<Collator> =
        RefCell::new(Collator::new(Tailoring::Cldr(Locale::Root), false, true));
}

pub fn locale_compare(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| collator.borrow_mut().collate(a, b))
}
