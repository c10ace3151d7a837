use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Coin};

use crate::state::LotteryConfig;

#[cw_serde]
pub struct InstantiateMsg {
    /// Native denom for entries and payout. Defaults to "inj".
    pub denom: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Join the current round. Send at least the minimum entry in info.funds.
    Enter {},
    /// Draw a winner, pay out the whole pool and start a new round.
    /// Manager only.
    PickWinner {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Addr)]
    Manager {},

    /// Participants of the current round, one slot per entry.
    #[returns(Vec<Addr>)]
    Players {},

    #[returns(LotteryConfig)]
    Config {},

    #[returns(PoolResponse)]
    Pool {},
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct PoolResponse {
    pub round: u64,
    pub num_players: u64,
    /// Contract bank balance in the lottery denom
    pub balance: Coin,
}
