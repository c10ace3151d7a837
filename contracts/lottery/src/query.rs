use cosmwasm_std::{to_json_binary, Binary, Deps, Env, StdResult};

use crate::msg::PoolResponse;
use crate::state::{CONFIG, ROUND_STATE};

pub fn query_manager(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config.manager)
}

/// Queries carry no authenticated sender, so the list is readable by anyone.
pub fn query_players(deps: Deps) -> StdResult<Binary> {
    let state = ROUND_STATE.load(deps.storage)?;
    to_json_binary(&state.players)
}

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_pool(deps: Deps, env: Env) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    let state = ROUND_STATE.load(deps.storage)?;
    let balance = deps
        .querier
        .query_balance(env.contract.address, config.denom)?;

    to_json_binary(&PoolResponse {
        round: state.round,
        num_players: state.players.len() as u64,
        balance,
    })
}
