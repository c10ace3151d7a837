use sha2::{Digest, Sha256};

use crate::types::DrawEntropy;

/// Domain tag prepended to every draw seed pre-image.
const SEED_DOMAIN: &[u8] = b"pooled-lottery/draw/v1";

/// Derive the 32-byte draw seed from environment values.
///
/// `seed = sha256( domain || len(chain_id) || chain_id || height_be || time_nanos_be
///   || tx_flag || tx_index_be || len(contract) || contract || len(caller) || caller
///   || pool_amount_u128_be || num_players_be || round_be )`
///
/// Variable-length strings are prefixed with their u32 big-endian length so that
/// no two distinct inputs share a pre-image. The output is deterministic and NOT
/// cryptographically unpredictable.
pub fn draw_seed(entropy: &DrawEntropy) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(SEED_DOMAIN);
    update_str(&mut hasher, &entropy.chain_id);
    hasher.update(entropy.block_height.to_be_bytes());
    hasher.update(entropy.block_time_nanos.to_be_bytes());
    match entropy.tx_index {
        Some(index) => {
            hasher.update([0x01]);
            hasher.update(index.to_be_bytes());
        }
        None => hasher.update([0x00]),
    }
    update_str(&mut hasher, &entropy.contract);
    update_str(&mut hasher, &entropy.caller);
    hasher.update(entropy.pool_amount.u128().to_be_bytes());
    hasher.update(entropy.num_players.to_be_bytes());
    hasher.update(entropy.round.to_be_bytes());
    hasher.finalize().into()
}

/// Reduce a seed to an index in `[0, count)`.
///
/// Takes the first 16 bytes as a big-endian u128, modulo `count`.
/// Returns `None` for an empty participant list.
pub fn winning_index(seed: &[u8; 32], count: u64) -> Option<u64> {
    if count == 0 {
        return None;
    }
    let mut head = [0u8; 16];
    head.copy_from_slice(&seed[0..16]);
    let raw = u128::from_be_bytes(head);
    Some((raw % count as u128) as u64)
}

fn update_str(hasher: &mut Sha256, value: &str) {
    hasher.update((value.len() as u32).to_be_bytes());
    hasher.update(value.as_bytes());
}
