use cosmwasm_std::{
    entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response, StdResult, Uint128,
};
use cw2::{get_contract_version, set_contract_version};
use pooled_lottery_common::{DEFAULT_DENOM, MIN_ENTRY_AMOUNT};

use crate::error::ContractError;
use crate::execute::{self, PAYOUT_REPLY_ID};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query;
use crate::state::{LotteryConfig, RoundState, CONFIG, ROUND_STATE};

const CONTRACT_NAME: &str = "crates.io:pooled-lottery";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let denom = msg.denom.unwrap_or_else(|| DEFAULT_DENOM.to_string());
    if denom.trim().is_empty() {
        return Err(ContractError::InvalidDenom);
    }

    let config = LotteryConfig {
        manager: info.sender.clone(),
        denom: denom.clone(),
        min_entry: Uint128::new(MIN_ENTRY_AMOUNT),
    };
    CONFIG.save(deps.storage, &config)?;

    ROUND_STATE.save(
        deps.storage,
        &RoundState {
            round: 1,
            players: vec![],
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "pooled-lottery")
        .add_attribute("manager", info.sender.to_string())
        .add_attribute("denom", denom))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Enter {} => execute::enter(deps, env, info),
        ExecuteMsg::PickWinner {} => execute::pick_winner(deps, env, info),
    }
}

#[entry_point]
pub fn reply(_deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        PAYOUT_REPLY_ID => execute::handle_payout_reply(msg),
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

#[entry_point]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Manager {} => query::query_manager(deps),
        QueryMsg::Players {} => query::query_players(deps),
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::Pool {} => query::query_pool(deps, env),
    }
}

#[entry_point]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::Unauthorized {
            reason: "Cannot migrate from different contract type".to_string(),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}
