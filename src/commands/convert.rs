//! Symbol conversion command
//!
//! Converts tokens between any two registered codes, either one symbol at a
//! time or as a single assembled sequence.

use crate::codes;
use crate::core::{CodeConverter, CodeError, Symbol};

/// How the input tokens are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConvertMode {
    /// Each token is one symbol, converted independently
    #[default]
    Each,
    /// All tokens form one sequence, assembled the way the target joins symbols
    Sequence,
    /// Each token is tried as one symbol, then as a sequence of its characters
    Auto,
}

/// Configuration for a conversion
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub from: String,
    pub to: String,
    pub tokens: Vec<String>,
    pub mode: ConvertMode,
}

/// Result of a conversion
#[derive(Debug)]
pub struct ConvertResult {
    pub from: &'static str,
    pub to: &'static str,
    pub pivot: &'static str,
    pub inputs: Vec<String>,
    pub outputs: Vec<Symbol>,
}

/// Run a conversion
///
/// # Errors
///
/// Returns an error if:
/// - Either code name is not registered
/// - The two codes share no ancestor
/// - A token cannot be read or converted
pub fn convert_tokens(config: ConvertConfig) -> Result<ConvertResult, String> {
    let (from_name, from) =
        codes::entry(&config.from).ok_or_else(|| format!("Unknown code '{}'", config.from))?;
    let (to_name, to) =
        codes::entry(&config.to).ok_or_else(|| format!("Unknown code '{}'", config.to))?;

    let converter = CodeConverter::new(from, to).map_err(|e| e.to_string())?;

    let outputs = match config.mode {
        ConvertMode::Each => config
            .tokens
            .iter()
            .map(|token| {
                let symbol = from.parse_token(token)?;
                converter.convert_symbol(symbol)
            })
            .collect::<Result<Vec<_>, CodeError>>(),
        ConvertMode::Sequence => config
            .tokens
            .iter()
            .map(|token| from.parse_token(token))
            .collect::<Result<Vec<_>, CodeError>>()
            .and_then(|symbols| converter.convert_sequence(symbols))
            .map(|symbol| vec![symbol]),
        ConvertMode::Auto => config
            .tokens
            .iter()
            .map(|token| {
                let symbol = from
                    .parse_token(token)
                    .unwrap_or_else(|_| Symbol::from(token.as_str()));
                converter.convert(symbol)
            })
            .collect::<Result<Vec<_>, CodeError>>(),
    }
    .map_err(|e| e.to_string())?;

    Ok(ConvertResult {
        from: from_name,
        to: to_name,
        pivot: converter.pivot().name(),
        inputs: config.tokens,
        outputs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(from: &str, to: &str, tokens: &[&str], mode: ConvertMode) -> ConvertConfig {
        ConvertConfig {
            from: from.to_string(),
            to: to.to_string(),
            tokens: tokens.iter().map(ToString::to_string).collect(),
            mode,
        }
    }

    #[test]
    fn each_token_separately() {
        let result =
            convert_tokens(config("numpad", "compass", &["9", "2"], ConvertMode::Each)).unwrap();
        assert_eq!(result.pivot, "arrows");
        assert_eq!(result.outputs, [Symbol::from("NE"), Symbol::from("S")]);
    }

    #[test]
    fn sequence_is_assembled() {
        let result = convert_tokens(config(
            "braille",
            "braille-unicode",
            &["25", "1"],
            ConvertMode::Sequence,
        ))
        .unwrap();
        assert_eq!(result.outputs, [Symbol::from("\u{2819}\u{2801}")]);
        assert_eq!(result.pivot, "braille-binary");
    }

    #[test]
    fn auto_falls_back_to_characters() {
        let result =
            convert_tokens(config("alphabet", "amino", &["D", "IA"], ConvertMode::Auto)).unwrap();
        assert_eq!(
            result.outputs,
            [
                Symbol::from("ASP"),
                Symbol::Seq(vec![Symbol::from("ILE"), Symbol::from("ALA")])
            ]
        );
    }

    #[test]
    fn errors_are_reported() {
        assert!(convert_tokens(config("morse", "elvish", &[], ConvertMode::Each)).is_err());
        let err =
            convert_tokens(config("morse", "alphabet", &["......."], ConvertMode::Each)).unwrap_err();
        assert!(err.contains("......."));
        // 6-dot target rejects a dot-7 pattern
        assert!(
            convert_tokens(config(
                "braille-unicode",
                "braille",
                &["\u{2840}"],
                ConvertMode::Each
            ))
            .is_err()
        );
    }
}
