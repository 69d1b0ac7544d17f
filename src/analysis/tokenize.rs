//! Word tokenization and frequency counting.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Maximal runs of Latin letters plus the Spanish accented vowels and ñ.
    /// Everything outside the alphabet is a token boundary and is discarded.
    static ref WORD_RE: Regex =
        Regex::new(r"[A-Za-zÁÉÍÓÚÜÑáéíóúüñ]+").expect("word pattern is valid");
}

/// Tokenize raw text into normalized lowercase words.
///
/// Deterministic and stateless: the same text always yields the same token
/// sequence, and text with no alphabetic runs yields an empty one.
///
/// # Examples
///
/// ```
/// use pdf_lexstat::analysis::tokenize::tokenize;
///
/// let tokens = tokenize("El Ñandú corre; 42 veces.");
/// assert_eq!(tokens, ["el", "ñandú", "corre", "veces"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Count occurrences of each distinct token.
///
/// The sum of all counts equals the number of input tokens; keys are the
/// exact normalized strings the tokenizer produced.
pub fn frequency_table(tokens: &[String]) -> HashMap<String, u64> {
    let mut table = HashMap::new();
    for token in tokens {
        *table.entry(token.clone()).or_insert(0u64) += 1;
    }
    table
}
