use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;

pub const CONFIG: Item<LotteryConfig> = Item::new("config");
pub const ROUND_STATE: Item<RoundState> = Item::new("round_state");

#[cw_serde]
pub struct LotteryConfig {
    /// Instantiating address. Never rewritten.
    pub manager: Addr,
    /// Native denom entries are paid in and the pool is paid out in
    pub denom: String,
    /// Smallest accepted entry, in base units of `denom`
    pub min_entry: Uint128,
}

#[cw_serde]
pub struct RoundState {
    /// 1-based counter of the round currently accepting entries
    pub round: u64,
    /// One slot per successful entry, in entry order
    pub players: Vec<Addr>,
}
