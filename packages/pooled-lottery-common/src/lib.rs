pub mod randomness;
pub mod types;

pub use randomness::{draw_seed, winning_index};
pub use types::DrawEntropy;

/// Smallest accepted entry, in base units: 0.01 of an 18-decimal coin.
pub const MIN_ENTRY_AMOUNT: u128 = 10_000_000_000_000_000;

/// Native denom used when instantiation does not name one.
pub const DEFAULT_DENOM: &str = "inj";
