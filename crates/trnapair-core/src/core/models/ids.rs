use slotmap::new_key_type;
use std::sync::atomic::{AtomicU64, Ordering};

new_key_type! {
    pub struct CodonId;
    pub struct TrnaId;
}

/// Identifies one constructed [`CodonSet`](super::codon::CodonSet) or
/// [`TrnaSet`](super::trna::TrnaSet) for the lifetime of the process.
///
/// Slot-map keys restart for every new set, so two sets built from tables of
/// the same length share their keys. Tokens are never reused; clones of a set
/// keep its token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SetToken(u64);

impl SetToken {
    pub(crate) fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}
