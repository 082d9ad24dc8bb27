use std::collections::HashMap;

use super::quotes_errors::{QuoteError, Result};

/// Transforms one feed item's raw description into a mapping of quote
/// identifier to numeric value.
///
/// Tokens are consumed strictly in pairs: `[id, value, id, value, ...]`.
/// Identifiers are upper-cased before keying; a repeated identifier keeps
/// the later value. Parsing stops at the first value token that is not a
/// number, returning no partial result.
pub fn parse_payload(description: &str) -> Result<HashMap<String, f64>> {
    let tokens: Vec<&str> = description.split_whitespace().collect();

    // the token stream must not be empty or hold an odd number of items
    if tokens.is_empty() || tokens.len() % 2 != 0 {
        return Err(QuoteError::InvalidPayloadFormat);
    }

    let mut values = HashMap::with_capacity(tokens.len() / 2);

    for pair in tokens.chunks_exact(2) {
        let value = pair[1]
            .parse::<f64>()
            .map_err(|source| QuoteError::ValueParse {
                token: pair[1].to_string(),
                source,
            })?;

        values.insert(pair[0].to_uppercase(), value);
    }

    Ok(values)
}
