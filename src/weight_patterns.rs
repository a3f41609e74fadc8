//! # Weight Patterns Module
//!
//! This module contains regex patterns and constants used for detecting
//! quantity+unit tokens embedded in product names, and for recognizing
//! catalog document identifiers.

use lazy_static::lazy_static;
use regex::Regex;

/// Numeric token followed by a mass/volume unit, Hebrew or Latin.
/// Longer unit spellings come first so the alternation prefers them
/// (e.g. `ק"ג` over a bare `ג`, `kg` over `g`, `ml` over `l`).
pub const WEIGHT_TOKEN_PATTERN: &str =
    r#"(?i)(\d+(?:\.\d+)?)\s*(ק["״]ג|קילו|גרם|מ["״]ל|ליטר|kg|ml|g|l)\b"#;

/// 24-character hexadecimal document identifier.
pub const DOCUMENT_ID_PATTERN: &str = r"^[0-9a-fA-F]{24}$";

lazy_static! {
    pub static ref WEIGHT_TOKEN_REGEX: Regex =
        Regex::new(WEIGHT_TOKEN_PATTERN).expect("Weight token pattern should be valid");
    pub static ref DOCUMENT_ID_REGEX: Regex =
        Regex::new(DOCUMENT_ID_PATTERN).expect("Document id pattern should be valid");
}
