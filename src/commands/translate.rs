//! DNA/RNA translation command

use crate::codes::amino::{AminoSequence, NucleotideSequence, StartBehavior};

/// Result of translating a strand
#[derive(Debug)]
pub struct TranslateResult {
    pub dna: String,
    pub rna: String,
    /// Whether the reverse complement was translated instead of the input
    pub conjugated: bool,
    pub start: StartBehavior,
    pub amino: AminoSequence,
    pub long_form: Vec<String>,
}

/// Translate a nucleotide string, optionally from its reverse complement
///
/// # Errors
///
/// Returns an error if the input contains anything other than nucleotides,
/// or if a translated letter has no three-letter abbreviation.
pub fn translate_sequence(
    sequence: &str,
    start: StartBehavior,
    conjugate: bool,
) -> Result<TranslateResult, String> {
    let strand = NucleotideSequence::new(sequence).map_err(|e| format!("Invalid strand: {e}"))?;
    let strand = if conjugate { strand.conjugate() } else { strand };

    let amino = strand.to_amino(start);
    let long_form = amino
        .long_form()
        .map_err(|e| format!("Invalid translation: {e}"))?;

    Ok(TranslateResult {
        dna: strand.dna_string().to_string(),
        rna: strand.rna_string(),
        conjugated: conjugate,
        start,
        amino,
        long_form,
    })
}
