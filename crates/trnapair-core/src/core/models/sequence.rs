use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A position within a triplet, numbered 5' to 3'.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    First,
    Second,
    Third,
}

impl Position {
    pub const ALL: [Position; 3] = [Position::First, Position::Second, Position::Third];

    fn index(self) -> usize {
        match self {
            Position::First => 0,
            Position::Second => 1,
            Position::Third => 2,
        }
    }

    /// The anticodon position that base-pairs with this codon position.
    ///
    /// Codon and anticodon pair antiparallel, so codon position *i* faces
    /// anticodon position *4 - i*.
    pub fn paired(self) -> Position {
        match self {
            Position::First => Position::Third,
            Position::Second => Position::Second,
            Position::Third => Position::First,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TripletError {
    #[error("expected exactly 3 nucleotide symbols, found {0}")]
    InvalidLength(usize),
}

/// A codon or anticodon: three nucleotide symbols, 5' to 3'.
///
/// Symbols are kept exactly as given. Codons normally use `A`, `C`, `G`, `U`;
/// anticodons may carry modified-base codes (`I`, `Q`, `&`, `#`, ...) at their
/// first (wobble) position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triplet([char; 3]);

impl Triplet {
    pub fn new(symbols: [char; 3]) -> Self {
        Self(symbols)
    }

    #[inline]
    pub fn at(&self, position: Position) -> char {
        self.0[position.index()]
    }

    pub fn symbols(&self) -> [char; 3] {
        self.0
    }
}

impl FromStr for Triplet {
    type Err = TripletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        match chars.as_slice() {
            [a, b, c] => Ok(Self([*a, *b, *c])),
            other => Err(TripletError::InvalidLength(other.len())),
        }
    }
}

impl fmt::Display for Triplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0 {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_three_symbol_strings() {
        let t: Triplet = "GCU".parse().unwrap();
        assert_eq!(t.at(Position::First), 'G');
        assert_eq!(t.at(Position::Second), 'C');
        assert_eq!(t.at(Position::Third), 'U');
    }

    #[test]
    fn parses_modified_base_symbols_and_trims_whitespace() {
        let t: Triplet = " #UU\t".parse().unwrap();
        assert_eq!(t.symbols(), ['#', 'U', 'U']);
    }

    #[test]
    fn rejects_wrong_lengths() {
        assert_eq!("AU".parse::<Triplet>(), Err(TripletError::InvalidLength(2)));
        assert_eq!("AUGC".parse::<Triplet>(), Err(TripletError::InvalidLength(4)));
        assert_eq!("".parse::<Triplet>(), Err(TripletError::InvalidLength(0)));
    }

    #[test]
    fn does_not_fold_case() {
        let t: Triplet = "aug".parse().unwrap();
        assert_eq!(t.at(Position::First), 'a');
    }

    #[test]
    fn paired_positions_are_antiparallel() {
        assert_eq!(Position::First.paired(), Position::Third);
        assert_eq!(Position::Second.paired(), Position::Second);
        assert_eq!(Position::Third.paired(), Position::First);
        for p in Position::ALL {
            assert_eq!(p.paired().paired(), p);
        }
    }

    #[test]
    fn display_round_trips_symbols() {
        let t: Triplet = "~UU".parse().unwrap();
        assert_eq!(t.to_string(), "~UU");
    }
}
