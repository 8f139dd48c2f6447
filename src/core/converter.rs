//! Conversion between two codes through their nearest shared ancestor

use super::{Code, CodeError, Symbol, ancestors};

#[derive(Debug, Clone, Copy)]
enum Step {
    /// Check the value against a code's domain
    Check(&'static dyn Code),
    /// Apply `to_parent` of a code on the source side
    Up(&'static dyn Code),
    /// Apply `from_parent` of a code on the target side
    Down(&'static dyn Code),
}

/// A composed conversion from one code to another
///
/// Built once per `(from, to)` pair and reused for any number of symbols.
/// Holds no mutable state.
///
/// # Examples
/// ```
/// use puzzle_codes::codes::MORSE;
/// use puzzle_codes::core::{ALPHABET, CodeConverter, Symbol};
///
/// let to_morse = CodeConverter::new(&ALPHABET, &MORSE).unwrap();
/// assert_eq!(to_morse.convert_symbol(Symbol::Char('E')).unwrap(), Symbol::from("."));
/// ```
#[derive(Debug, Clone)]
pub struct CodeConverter {
    from: &'static dyn Code,
    to: &'static dyn Code,
    pivot: &'static dyn Code,
    steps: Vec<Step>,
}

/// Position of the first `from` ancestor that also appears on the `to` side
fn find_common_ancestor(
    from_chain: &[&'static dyn Code],
    to_chain: &[&'static dyn Code],
) -> Option<(usize, usize)> {
    from_chain.iter().enumerate().find_map(|(fpos, a)| {
        to_chain
            .iter()
            .position(|b| b.name() == a.name())
            .map(|tpos| (fpos, tpos))
    })
}

impl CodeConverter {
    /// Build the converter from `from` to `to`
    ///
    /// # Errors
    /// Returns `CodeError::NoCommonAncestor` if the two parent chains never meet.
    pub fn new(from: &'static dyn Code, to: &'static dyn Code) -> Result<Self, CodeError> {
        let from_chain = ancestors(from);
        let to_chain = ancestors(to);

        let (fpos, tpos) = find_common_ancestor(&from_chain, &to_chain).ok_or(
            CodeError::NoCommonAncestor {
                from: from.name(),
                to: to.name(),
            },
        )?;

        let mut steps = vec![Step::Check(from)];
        for &code in &from_chain[..fpos] {
            steps.push(Step::Up(code));
            steps.push(Step::Check(code.parent()));
        }
        for &code in to_chain[..tpos].iter().rev() {
            steps.push(Step::Down(code));
            steps.push(Step::Check(code));
        }
        // Target is the pivot itself: its own domain may be narrower than the
        // pivot value reached from the source side.
        if tpos == 0 && fpos > 0 {
            steps.push(Step::Check(to));
        }

        let pivot = to_chain[tpos];
        tracing::debug!(
            from = from.name(),
            to = to.name(),
            pivot = pivot.name(),
            steps = steps.len(),
            "built code converter"
        );

        Ok(Self {
            from,
            to,
            pivot,
            steps,
        })
    }

    /// Chain `self` with `next`, which must start where `self` ends
    ///
    /// The shared code validates the value on both sides, so composing through
    /// a stricter variant of a pivot narrows the accepted domain. The composed
    /// pivot is whichever leg's pivot sits nearer the root.
    ///
    /// # Errors
    /// Returns `CodeError::NoCommonAncestor` if `next` does not start at `self`'s target.
    pub fn then(mut self, next: Self) -> Result<Self, CodeError> {
        if self.to.name() != next.from.name() {
            return Err(CodeError::NoCommonAncestor {
                from: self.to.name(),
                to: next.from.name(),
            });
        }
        if ancestors(next.pivot).len() < ancestors(self.pivot).len() {
            self.pivot = next.pivot;
        }
        self.steps.extend(next.steps);
        self.to = next.to;
        Ok(self)
    }

    #[must_use]
    pub fn from_code(&self) -> &'static dyn Code {
        self.from
    }

    #[must_use]
    pub fn to_code(&self) -> &'static dyn Code {
        self.to
    }

    /// The common ancestor the conversion was routed through
    #[must_use]
    pub fn pivot(&self) -> &'static dyn Code {
        self.pivot
    }

    /// Convert exactly one symbol
    ///
    /// # Errors
    /// Propagates the first `CodeError::InvalidSymbol` raised by any step.
    pub fn convert_symbol(&self, symbol: Symbol) -> Result<Symbol, CodeError> {
        let mut value = symbol;
        for step in &self.steps {
            value = match *step {
                Step::Check(code) => {
                    code.validate(&value)?;
                    value
                }
                Step::Up(code) => code.to_parent(value)?,
                Step::Down(code) => code.from_parent(value)?,
            };
        }
        Ok(value)
    }

    /// Convert each symbol and keep them as separate values
    ///
    /// # Errors
    /// Fails on the first symbol that cannot be converted.
    pub fn convert_each<I>(&self, symbols: I) -> Result<Vec<Symbol>, CodeError>
    where
        I: IntoIterator<Item = Symbol>,
    {
        symbols
            .into_iter()
            .map(|symbol| self.convert_symbol(symbol))
            .collect()
    }

    /// Convert a sequence of symbols and assemble it the way the target code joins symbols
    ///
    /// # Errors
    /// Fails on the first symbol that cannot be converted.
    pub fn convert_sequence<I>(&self, symbols: I) -> Result<Symbol, CodeError>
    where
        I: IntoIterator<Item = Symbol>,
    {
        let items = self.convert_each(symbols)?;
        Ok(self.to.sequence_kind().assemble(items))
    }

    /// Convenience dispatch for ambiguous input
    ///
    /// Tries `input` as one symbol first; if that fails and the input has
    /// elements, tries it as a sequence. If both fail, the single-symbol error
    /// is returned. Prefer [`Self::convert_symbol`] or
    /// [`Self::convert_sequence`] when the caller knows which one it means.
    ///
    /// # Errors
    /// Returns the single-symbol failure when neither interpretation converts.
    pub fn convert(&self, input: Symbol) -> Result<Symbol, CodeError> {
        let elements = input.elements();
        match self.convert_symbol(input) {
            Ok(value) => Ok(value),
            Err(single) => elements
                .and_then(|items| self.convert_sequence(items).ok())
                .ok_or(single),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::{
        AMINO_ABBR, BRAILLE_BINARY, BRAILLE_BINARY_EXTENDED, BRAILLE_DOTS, BRAILLE_UNICODE,
        DIRECTION_COMPASS, DIRECTION_NUMPAD, DIRECTION_ROGUE, MORSE,
    };
    use crate::core::ALPHABET;

    #[derive(Debug)]
    struct Orphan;
    static ORPHAN: Orphan = Orphan;

    impl Code for Orphan {
        fn name(&self) -> &'static str {
            "orphan"
        }
        fn parent(&self) -> &'static dyn Code {
            &ORPHAN
        }
        fn to_parent(&self, symbol: Symbol) -> Result<Symbol, CodeError> {
            Ok(symbol)
        }
        fn from_parent(&self, symbol: Symbol) -> Result<Symbol, CodeError> {
            Ok(symbol)
        }
    }

    #[test]
    fn same_code_is_identity() {
        let codes: [&'static dyn Code; 4] = [&ALPHABET, &MORSE, &BRAILLE_UNICODE, &DIRECTION_ROGUE];
        for code in codes {
            let conv = CodeConverter::new(code, code).unwrap();
            assert_eq!(conv.pivot().name(), code.name());
        }
        let conv = CodeConverter::new(&MORSE, &MORSE).unwrap();
        assert_eq!(
            conv.convert_symbol(Symbol::from("-.-.")).unwrap(),
            Symbol::from("-.-.")
        );
        let conv = CodeConverter::new(&BRAILLE_BINARY, &BRAILLE_BINARY).unwrap();
        assert_eq!(conv.convert_symbol(Symbol::Int(25)).unwrap(), Symbol::Int(25));
    }

    #[test]
    fn nearest_pivot_is_shared_parent() {
        let conv = CodeConverter::new(&BRAILLE_UNICODE, &BRAILLE_DOTS).unwrap();
        assert_eq!(conv.pivot().name(), "braille-binary");

        let conv = CodeConverter::new(&DIRECTION_NUMPAD, &DIRECTION_COMPASS).unwrap();
        assert_eq!(conv.pivot().name(), "arrows");
        assert_eq!(
            conv.convert_symbol(Symbol::Char('9')).unwrap(),
            Symbol::from("NE")
        );

        let conv = CodeConverter::new(&MORSE, &BRAILLE_UNICODE).unwrap();
        assert_eq!(conv.pivot().name(), "alphabet");
    }

    #[test]
    fn composition_matches_direct_conversion() {
        let morse_to_alpha = CodeConverter::new(&MORSE, &ALPHABET).unwrap();
        let alpha_to_dots = CodeConverter::new(&ALPHABET, &BRAILLE_DOTS).unwrap();
        let direct = CodeConverter::new(&MORSE, &BRAILLE_DOTS).unwrap();
        let chained = morse_to_alpha.then(alpha_to_dots).unwrap();

        for code in ["-..", ".-", "--..", "..."] {
            assert_eq!(
                chained.convert_symbol(Symbol::from(code)).unwrap(),
                direct.convert_symbol(Symbol::from(code)).unwrap()
            );
        }
    }

    #[test]
    fn composed_pivot_is_the_higher_one() {
        let to_wide = CodeConverter::new(&BRAILLE_UNICODE, &BRAILLE_BINARY_EXTENDED).unwrap();
        assert_eq!(to_wide.pivot().name(), BRAILLE_BINARY_EXTENDED.name());
        let to_morse = CodeConverter::new(&BRAILLE_BINARY_EXTENDED, &MORSE).unwrap();
        assert_eq!(to_morse.pivot().name(), "alphabet");

        let chained = to_wide.then(to_morse).unwrap();
        assert_eq!(chained.pivot().name(), "alphabet");

        let back = CodeConverter::new(&MORSE, &BRAILLE_BINARY_EXTENDED).unwrap();
        let from_wide = CodeConverter::new(&BRAILLE_BINARY_EXTENDED, &BRAILLE_UNICODE).unwrap();
        assert_eq!(back.then(from_wide).unwrap().pivot().name(), "alphabet");
    }

    #[test]
    fn then_requires_matching_ends() {
        let a = CodeConverter::new(&MORSE, &ALPHABET).unwrap();
        let b = CodeConverter::new(&BRAILLE_DOTS, &ALPHABET).unwrap();
        assert!(matches!(
            a.then(b),
            Err(CodeError::NoCommonAncestor { .. })
        ));
    }

    #[test]
    fn disjoint_chains_have_no_common_ancestor() {
        let err = CodeConverter::new(&ORPHAN, &MORSE).unwrap_err();
        assert_eq!(
            err,
            CodeError::NoCommonAncestor {
                from: "orphan",
                to: "morse"
            }
        );
    }

    #[test]
    fn narrow_target_rejects_wide_pivot_values() {
        let conv = CodeConverter::new(&BRAILLE_UNICODE, &BRAILLE_BINARY).unwrap();
        assert_eq!(
            conv.convert_symbol(Symbol::Char('\u{2819}')).unwrap(),
            Symbol::Int(25)
        );
        assert!(conv.convert_symbol(Symbol::Char('\u{28ff}')).is_err());

        let wide = CodeConverter::new(&BRAILLE_UNICODE, &BRAILLE_BINARY_EXTENDED).unwrap();
        assert_eq!(
            wide.convert_symbol(Symbol::Char('\u{28ff}')).unwrap(),
            Symbol::Int(255)
        );
    }

    #[test]
    fn sequence_uses_target_joiner() {
        let to_unicode = CodeConverter::new(&ALPHABET, &BRAILLE_UNICODE).unwrap();
        let out = to_unicode
            .convert_sequence("AB".chars().map(Symbol::Char))
            .unwrap();
        assert_eq!(out, Symbol::from("\u{2801}\u{2803}"));

        let to_amino = CodeConverter::new(&ALPHABET, &AMINO_ABBR).unwrap();
        let out = to_amino
            .convert_sequence("DIA".chars().map(Symbol::Char))
            .unwrap();
        assert_eq!(
            out,
            Symbol::Seq(vec![
                Symbol::from("ASP"),
                Symbol::from("ILE"),
                Symbol::from("ALA")
            ])
        );
    }

    #[test]
    fn convert_falls_back_to_sequence() {
        let to_amino = CodeConverter::new(&ALPHABET, &AMINO_ABBR).unwrap();
        assert_eq!(
            to_amino.convert(Symbol::Char('D')).unwrap(),
            Symbol::from("ASP")
        );
        assert_eq!(
            to_amino.convert(Symbol::from("DI")).unwrap(),
            Symbol::Seq(vec![Symbol::from("ASP"), Symbol::from("ILE")])
        );

        // Both interpretations fail: the single-symbol error surfaces
        let err = to_amino.convert(Symbol::from("D1")).unwrap_err();
        assert_eq!(err, CodeError::invalid("alphabet", "D1"));
    }

    #[test]
    fn invalid_symbol_propagates() {
        let to_morse = CodeConverter::new(&ALPHABET, &MORSE).unwrap();
        assert!(matches!(
            to_morse.convert_symbol(Symbol::Char('%')),
            Err(CodeError::InvalidSymbol { code: "morse", .. })
        ));
    }
}
