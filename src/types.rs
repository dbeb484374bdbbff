//! Core scalar types shared across the ledger and aggregation layers.

/// Share count of a trade. Signed: a negative count is a short position and
/// scales profit with the opposite sign.
pub type Quantity = i64;

/// Price per share, in the quote currency.
pub type PerShare = f64;

/// Owner name meaning "unassigned / shared".
///
/// It is an ordinary owner name everywhere: it takes a slot in the owner
/// directory and is matched by exact comparison like any other.
pub const UNASSIGNED: &str = "";
