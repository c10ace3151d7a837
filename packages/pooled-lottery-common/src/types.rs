use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

/// Environment values that feed a draw.
///
/// Every field is visible to the block proposer before the draw transaction
/// is final, so the resulting seed is predictable to anyone who can inspect
/// or order transactions. It spreads wins across entries; it does not make
/// them unbiasable.
#[cw_serde]
pub struct DrawEntropy {
    pub chain_id: String,
    pub block_height: u64,
    pub block_time_nanos: u64,
    /// Index of the draw transaction within its block, when the chain reports one.
    pub tx_index: Option<u32>,
    pub contract: String,
    pub caller: String,
    pub pool_amount: Uint128,
    pub num_players: u64,
    pub round: u64,
}
