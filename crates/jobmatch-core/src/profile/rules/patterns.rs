//! Common regex patterns for resume field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Email: local part, '@', dotted domain ending in a 2+ letter label
    pub static ref EMAIL: Regex = Regex::new(
        r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b"
    ).unwrap();

    // Phone: optional +country code, optional parenthesised area code,
    // groups separated by space, dot or hyphen
    pub static ref PHONE: Regex = Regex::new(
        r"(?:\+\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}"
    ).unwrap();

    // Professional network profile URL
    pub static ref PROFESSIONAL_LINK: Regex = Regex::new(
        r"(?i)(?:https?://)?(?:[a-z]{2,3}\.)?linkedin\.com/in/[\w-]+"
    ).unwrap();

    pub static ref URL_SCHEME: Regex = Regex::new(
        r"(?i)^https?://"
    ).unwrap();
}
