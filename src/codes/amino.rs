//! Amino acids and nucleotide sequences
//!
//! Two codes over the plain alphabet, where the plain symbol is the
//! one-letter amino acid abbreviation: [`AMINO_ABBR`] spells it with the
//! three-letter abbreviation and [`CODON`] with a DNA codon. Stop codons
//! translate to `#`.
//!
//! # Examples
//! ```
//! use puzzle_codes::codes::amino::{NucleotideSequence, StartBehavior, amino_encode};
//!
//! let n = NucleotideSequence::new("GATATCGCA").unwrap();
//! assert_eq!(n.rna_string(), "GAUAUCGCA");
//! assert_eq!(n.conjugate().dna_string(), "TGCGATATC");
//! assert_eq!(n.to_amino(StartBehavior::Keep).long_form().unwrap(), ["ASP", "ILE", "ALA"]);
//! assert_eq!(amino_encode("GAUAUCGCA").unwrap(), "DIA");
//! ```

use crate::core::{ALPHABET, Code, CodeError, SequenceKind, Symbol};
use crate::tables::{self, Record, TableError, index_by, parse_char};
use rustc_hash::FxHashMap;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use std::sync::LazyLock;

/// One amino acid (or ambiguity/stop marker)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AminoAcid {
    pub letter: char,
    pub abbr: String,
    pub name: String,
}

impl Record for AminoAcid {
    const FIELDS: &'static [&'static str] = &["letter", "abbr", "name"];

    fn from_fields(fields: &[&str]) -> Result<Self, TableError> {
        if fields[1].len() != 3 {
            return Err(TableError::BadField {
                field: "abbr",
                value: fields[1].to_string(),
            });
        }
        Ok(Self {
            letter: parse_char("letter", fields[0])?,
            abbr: fields[1].to_string(),
            name: fields[2].to_string(),
        })
    }
}

/// One row of the standard genetic code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodonEntry {
    pub codon: String,
    pub letter: char,
}

impl Record for CodonEntry {
    const FIELDS: &'static [&'static str] = &["codon", "letter"];

    fn from_fields(fields: &[&str]) -> Result<Self, TableError> {
        let codon = fields[0];
        if codon.len() != 3 || !codon.bytes().all(|b| b"ACGT".contains(&b)) {
            return Err(TableError::BadField {
                field: "codon",
                value: codon.to_string(),
            });
        }
        Ok(Self {
            codon: codon.to_string(),
            letter: parse_char("letter", fields[1])?,
        })
    }
}

/// The twenty standard amino acids
pub static AMINO_ACIDS: LazyLock<Vec<AminoAcid>> =
    LazyLock::new(|| tables::records(tables::AMINO));

/// Standard amino acids followed by the rare and ambiguous ones and the stop marker
pub static AMINO_ACIDS_EXTENDED: LazyLock<Vec<AminoAcid>> = LazyLock::new(|| {
    let mut all = AMINO_ACIDS.clone();
    all.extend(tables::records::<AminoAcid, _, _>(tables::AMINO_EXTRA));
    all
});

/// All 64 codons in table order
pub static GENETIC_CODE: LazyLock<Vec<CodonEntry>> =
    LazyLock::new(|| tables::records(tables::GENETIC_CODE));

struct AminoMaps {
    one_to_three: FxHashMap<char, String>,
    three_to_one: FxHashMap<String, char>,
    codon_to_letter: FxHashMap<&'static str, char>,
    letter_to_codon: FxHashMap<char, &'static str>,
}

static MAPS: LazyLock<AminoMaps> = LazyLock::new(|| {
    let acids: &'static [AminoAcid] = &AMINO_ACIDS_EXTENDED;
    let codons: &'static [CodonEntry] = &GENETIC_CODE;
    AminoMaps {
        one_to_three: index_by(acids, |a| a.letter)
            .into_iter()
            .map(|(letter, a)| (letter, a.abbr.to_ascii_uppercase()))
            .collect(),
        three_to_one: index_by(acids, |a| a.abbr.to_ascii_uppercase())
            .into_iter()
            .map(|(abbr, a)| (abbr, a.letter))
            .collect(),
        codon_to_letter: index_by(codons, |c| c.codon.as_str())
            .into_iter()
            .map(|(codon, c)| (codon, c.letter))
            .collect(),
        // first codon in table order wins
        letter_to_codon: index_by(codons, |c| c.letter)
            .into_iter()
            .map(|(letter, c)| (letter, c.codon.as_str()))
            .collect(),
    }
});

/// Three-letter amino acid abbreviations (`"ASP"`) over one-letter codes
#[derive(Debug, Clone, Copy, Default)]
pub struct AminoAbbr;

pub static AMINO_ABBR: AminoAbbr = AminoAbbr;

impl Code for AminoAbbr {
    fn name(&self) -> &'static str {
        "amino"
    }

    fn parent(&self) -> &'static dyn Code {
        &ALPHABET
    }

    fn to_parent(&self, symbol: Symbol) -> Result<Symbol, CodeError> {
        symbol
            .as_str()
            .and_then(|abbr| MAPS.three_to_one.get(&abbr.to_ascii_uppercase()))
            .map(|&c| Symbol::Char(c))
            .ok_or_else(|| CodeError::invalid(self.name(), &symbol))
    }

    fn from_parent(&self, symbol: Symbol) -> Result<Symbol, CodeError> {
        symbol
            .as_char()
            .and_then(|c| MAPS.one_to_three.get(&c.to_ascii_uppercase()))
            .map(|abbr| Symbol::Text(abbr.clone()))
            .ok_or_else(|| CodeError::invalid(self.name(), &symbol))
    }
}

/// DNA codons over one-letter amino acid codes
///
/// Decoding is many-to-one; encoding picks the first codon listed for the
/// letter, so `CODON` round-trips letters but not codons.
#[derive(Debug, Clone, Copy, Default)]
pub struct Codon;

pub static CODON: Codon = Codon;

impl Code for Codon {
    fn name(&self) -> &'static str {
        "codon"
    }

    fn parent(&self) -> &'static dyn Code {
        &ALPHABET
    }

    fn to_parent(&self, symbol: Symbol) -> Result<Symbol, CodeError> {
        symbol
            .as_str()
            .map(|codon| codon.to_ascii_uppercase().replace('U', "T"))
            .and_then(|codon| MAPS.codon_to_letter.get(codon.as_str()).copied())
            .map(Symbol::Char)
            .ok_or_else(|| CodeError::invalid(self.name(), &symbol))
    }

    fn from_parent(&self, symbol: Symbol) -> Result<Symbol, CodeError> {
        symbol
            .as_char()
            .and_then(|c| MAPS.letter_to_codon.get(&c.to_ascii_uppercase()))
            .map(|&codon| Symbol::from(codon))
            .ok_or_else(|| CodeError::invalid(self.name(), &symbol))
    }

    fn sequence_kind(&self) -> SequenceKind {
        SequenceKind::Concat
    }
}

/// Where translation starts and stops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartBehavior {
    /// Translate the whole sequence
    #[default]
    Keep,
    /// Translate everything, then drop one leading Met and any trailing stops
    Chop,
    /// Start after the first ATG and stop at the first stop codon
    Search,
}

impl FromStr for StartBehavior {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keep" => Ok(Self::Keep),
            "chop" => Ok(Self::Chop),
            "search" => Ok(Self::Search),
            _ => Err(format!(
                "Unrecognized start behavior '{s}'. Allowed behaviors are keep, chop, search."
            )),
        }
    }
}

/// A DNA or RNA strand, stored as DNA
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NucleotideSequence {
    bases: String,
}

impl NucleotideSequence {
    /// Read a strand; case-insensitive, `U` reads as `T`, whitespace is ignored
    ///
    /// # Errors
    /// Returns `CodeError::InvalidSymbol` on anything other than A, C, G, T, U.
    pub fn new(seq: &str) -> Result<Self, CodeError> {
        let mut bases = String::with_capacity(seq.len());
        for c in seq.chars().filter(|c| !c.is_whitespace()) {
            match c.to_ascii_uppercase() {
                b @ ('A' | 'C' | 'G' | 'T') => bases.push(b),
                'U' => bases.push('T'),
                _ => return Err(CodeError::invalid("nucleotide", c)),
            }
        }
        Ok(Self { bases })
    }

    #[must_use]
    pub fn dna_string(&self) -> &str {
        &self.bases
    }

    #[must_use]
    pub fn rna_string(&self) -> String {
        self.bases.replace('T', "U")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// The reverse complement
    #[must_use]
    pub fn conjugate(&self) -> Self {
        let bases = self
            .bases
            .chars()
            .rev()
            .map(|b| match b {
                'A' => 'T',
                'T' => 'A',
                'C' => 'G',
                _ => 'C',
            })
            .collect();
        Self { bases }
    }

    /// Sub-strand by base positions; `None` if the range is out of bounds
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> Option<Self> {
        self.bases.get(range).map(|bases| Self {
            bases: bases.to_string(),
        })
    }

    /// Complete codons from the start; a trailing partial codon is dropped
    pub fn codons(&self) -> impl Iterator<Item = &str> + '_ {
        (0..self.bases.len().saturating_sub(2))
            .step_by(3)
            .map(move |i| &self.bases[i..i + 3])
    }

    /// Translate with the standard genetic code
    #[must_use]
    pub fn to_amino(&self, start: StartBehavior) -> AminoSequence {
        let coding = match start {
            StartBehavior::Search => match self.bases.find("ATG") {
                Some(at) => &self.bases[at + 3..],
                None => "",
            },
            StartBehavior::Keep | StartBehavior::Chop => self.bases.as_str(),
        };

        let mut acids: String = (0..coding.len().saturating_sub(2))
            .step_by(3)
            // every ACGT triple is in the table
            .map(|i| {
                MAPS.codon_to_letter
                    .get(&coding[i..i + 3])
                    .copied()
                    .unwrap_or('X')
            })
            .collect();

        match start {
            StartBehavior::Keep => {}
            StartBehavior::Search => {
                if let Some(stop) = acids.find('#') {
                    acids.truncate(stop);
                }
            }
            StartBehavior::Chop => {
                if acids.starts_with('M') {
                    acids.remove(0);
                }
                let end = acids.trim_end_matches('#').len();
                acids.truncate(end);
            }
        }
        AminoSequence { acids }
    }
}

impl fmt::Display for NucleotideSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bases)
    }
}

/// A chain of one-letter amino acid codes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AminoSequence {
    acids: String,
}

impl AminoSequence {
    #[must_use]
    pub fn new(acids: &str) -> Self {
        Self {
            acids: acids.to_uppercase(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.acids
    }

    /// Three-letter abbreviations, uppercase
    ///
    /// # Errors
    /// Returns `CodeError::InvalidSymbol` for a letter with no amino acid.
    pub fn long_form(&self) -> Result<Vec<String>, CodeError> {
        self.acids
            .chars()
            .map(|c| {
                MAPS.one_to_three
                    .get(&c)
                    .cloned()
                    .ok_or_else(|| CodeError::invalid(AMINO_ABBR.name(), c))
            })
            .collect()
    }

    /// Read three-letter abbreviations; anything that is not a letter is ignored
    ///
    /// # Errors
    /// Returns `CodeError::InvalidSymbol` for an unknown abbreviation.
    ///
    /// # Examples
    /// ```
    /// use puzzle_codes::codes::amino::AminoSequence;
    ///
    /// let a = AminoSequence::from_long_form("ALA SER ASP PHE").unwrap();
    /// assert_eq!(a.as_str(), "ASDF");
    /// ```
    pub fn from_long_form(s: &str) -> Result<Self, CodeError> {
        let letters: Vec<char> = s
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_uppercase())
            .collect();
        let acids = letters
            .chunks_exact(3)
            .map(|abbr| {
                let abbr: String = abbr.iter().collect();
                MAPS.three_to_one
                    .get(&abbr)
                    .copied()
                    .ok_or_else(|| CodeError::invalid(AMINO_ABBR.name(), abbr))
            })
            .collect::<Result<String, _>>()?;
        Ok(Self { acids })
    }
}

impl fmt::Display for AminoSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.acids)
    }
}

/// Translate a DNA or RNA string to one-letter amino acids
///
/// # Errors
/// Returns `CodeError::InvalidSymbol` if the input is not a nucleotide string.
pub fn amino_encode(seq: &str) -> Result<String, CodeError> {
    Ok(NucleotideSequence::new(seq)?
        .to_amino(StartBehavior::Keep)
        .to_string())
}
