use std::fmt;

/// The relationship between a tRNA and a codon it can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PairingCategory {
    /// Watson-Crick pairing at all three positions.
    WatsonCrickCognate,
    /// Wobble pairing at the third position, same amino acid.
    WobbleCognate,
    /// Base-pairs with the codon but carries a different amino acid, or pairs
    /// only loosely at an outer position.
    NearCognate,
}

impl PairingCategory {
    pub const ALL: [PairingCategory; 3] = [
        PairingCategory::WatsonCrickCognate,
        PairingCategory::WobbleCognate,
        PairingCategory::NearCognate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PairingCategory::WatsonCrickCognate => "cognate.wc",
            PairingCategory::WobbleCognate => "cognate.wobble",
            PairingCategory::NearCognate => "nearcognate",
        }
    }
}

impl fmt::Display for PairingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
