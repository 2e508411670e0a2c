use super::rules::{FIRST_WOBBLE, THIRD_WATSON_CRICK, THIRD_WOBBLE, WATSON_CRICK, accepts};
use crate::core::models::sequence::{Position, Triplet};

#[inline]
fn pairs(
    table: &phf::Map<char, &'static str>,
    codon: &Triplet,
    anticodon: &Triplet,
    at: Position,
) -> bool {
    accepts(table, codon.at(at), anticodon.at(at.paired()))
}

/// Strict Watson-Crick pairing of a single nucleotide pair.
#[inline]
pub fn matches_watson_crick(codon_nt: char, trna_nt: char) -> bool {
    accepts(&WATSON_CRICK, codon_nt, trna_nt)
}

/// Codon position 1 against anticodon position 3, standard bases only.
#[inline]
pub fn first_watson_crick(codon: &Triplet, anticodon: &Triplet) -> bool {
    pairs(&WATSON_CRICK, codon, anticodon, Position::First)
}

/// Codon position 2 against anticodon position 2, standard bases only.
#[inline]
pub fn second_watson_crick(codon: &Triplet, anticodon: &Triplet) -> bool {
    pairs(&WATSON_CRICK, codon, anticodon, Position::Second)
}

/// Codon position 3 against anticodon position 1, accepting modified bases
/// that read like their parent nucleotide.
#[inline]
pub fn third_watson_crick(codon: &Triplet, anticodon: &Triplet) -> bool {
    pairs(&THIRD_WATSON_CRICK, codon, anticodon, Position::Third)
}

#[inline]
pub fn first_wobble(codon: &Triplet, anticodon: &Triplet) -> bool {
    pairs(&FIRST_WOBBLE, codon, anticodon, Position::First)
}

#[inline]
pub fn third_wobble(codon: &Triplet, anticodon: &Triplet) -> bool {
    pairs(&THIRD_WOBBLE, codon, anticodon, Position::Third)
}
