use std::fmt;

/// Amino-acid identity carried by a codon or a tRNA, as written in the
/// `three.letter` column (e.g. `Ala`, `iMet`, `Stop`).
///
/// Labels are compared verbatim. No case folding or alias resolution is
/// applied, so a codon labelled `Ala` and a tRNA labelled `ALA` are treated
/// as carrying different amino acids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AminoAcidLabel(String);

impl AminoAcidLabel {
    pub fn new(label: &str) -> Self {
        Self(label.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AminoAcidLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AminoAcidLabel {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}
