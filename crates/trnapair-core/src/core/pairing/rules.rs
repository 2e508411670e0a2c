//! Base-pairing tables.
//!
//! Each table maps a codon nucleotide to the string of tRNA symbols it accepts
//! at the facing anticodon position. Modified-base codes follow the
//! single-character MODOMICS alphabet and only occur at the anticodon wobble
//! position, so only the third-position tables list them.

use phf::{Map, phf_map};

/// Canonical Watson-Crick complements, used at codon positions 1 and 2.
pub static WATSON_CRICK: Map<char, &'static str> = phf_map! {
    'A' => "U",
    'C' => "G",
    'G' => "C",
    'U' => "A",
};

/// Watson-Crick pairing at codon position 3, including modified bases that
/// read like their unmodified parent (U-like, G-like, C-like).
pub static THIRD_WATSON_CRICK: Map<char, &'static str> = phf_map! {
    'A' => "U&31~NS){V}P",
    'C' => "G#W",
    'G' => "CB",
    'U' => "A",
};

/// Mismatches tolerated at codon position 1 in near-cognate pairs.
pub static FIRST_WOBBLE: Map<char, &'static str> = phf_map! {
    'A' => "A",
    'C' => "AU",
    'G' => "AU",
    'U' => "GU",
};

/// Wobble pairing at codon position 3.
pub static THIRD_WOBBLE: Map<char, &'static str> = phf_map! {
    'A' => "AIM?",
    'C' => "AUPI?",
    'G' => "AU&31~NS){VPQ?M",
    'U' => "G#WUVPIQ",
};

/// Looks up `codon_nt` in `table` and checks whether `trna_nt` is accepted.
/// Codon symbols absent from the table never pair.
#[inline]
pub fn accepts(table: &Map<char, &'static str>, codon_nt: char, trna_nt: char) -> bool {
    table
        .get(&codon_nt)
        .is_some_and(|accepted| accepted.contains(trna_nt))
}
