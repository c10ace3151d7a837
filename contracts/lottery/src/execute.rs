use cosmwasm_std::{
    BankMsg, DepsMut, Env, Event, MessageInfo, Reply, Response, SubMsg, SubMsgResult,
};
use pooled_lottery_common::{draw_seed, winning_index, DrawEntropy};

use crate::error::ContractError;
use crate::state::{CONFIG, ROUND_STATE};

/// Reply id of the payout sub-message sent by `pick_winner`.
pub const PAYOUT_REPLY_ID: u64 = 1;

/// Enter the current round. Anyone may enter, any number of times.
pub fn enter(deps: DepsMut, _env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    // Validate funds: exactly one coin of the lottery denom
    if info.funds.is_empty() {
        return Err(ContractError::NoFundsSent);
    }
    if info.funds.len() != 1 {
        return Err(ContractError::InvalidFunds);
    }
    let sent = &info.funds[0];
    if sent.denom != config.denom {
        return Err(ContractError::WrongDenom {
            denom: sent.denom.clone(),
        });
    }
    if sent.amount < config.min_entry {
        return Err(ContractError::BelowMinimumEntry {
            amount: sent.amount,
            min_entry: config.min_entry,
        });
    }

    let mut state = ROUND_STATE.load(deps.storage)?;
    state.players.push(info.sender.clone());
    ROUND_STATE.save(deps.storage, &state)?;

    Ok(Response::new()
        .add_attribute("action", "enter")
        .add_attribute("player", info.sender.to_string())
        .add_attribute("amount", sent.amount.to_string())
        .add_attribute("round", state.round.to_string())
        .add_event(
            Event::new("lottery_entered")
                .add_attribute("player", info.sender.to_string())
                .add_attribute("amount", sent.amount.to_string())
                .add_attribute("round", state.round.to_string())
                .add_attribute("num_players", state.players.len().to_string()),
        ))
}

/// Draw a winner and pay out the whole pool. Manager only.
///
/// The winner is `players[u128(seed[0..16]) % players.len()]` where the seed
/// hashes block and call context (see `DrawEntropy`). This is predictable to
/// block producers and is not a secure source of randomness.
///
/// The list is cleared and the round advanced in this call; the payout goes
/// out as a reply-on-error sub-message so a failed transfer reverts both.
pub fn pick_winner(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.manager {
        return Err(ContractError::Unauthorized {
            reason: "only the manager can pick a winner".to_string(),
        });
    }

    let mut state = ROUND_STATE.load(deps.storage)?;
    if state.players.is_empty() {
        return Err(ContractError::NoParticipants);
    }

    let pool = deps
        .querier
        .query_balance(env.contract.address.to_string(), config.denom.clone())?;
    if pool.amount.is_zero() {
        return Err(ContractError::PayoutFailed {
            reason: format!("no {} held by the lottery", config.denom),
        });
    }

    let num_players = state.players.len() as u64;
    let entropy = DrawEntropy {
        chain_id: env.block.chain_id.clone(),
        block_height: env.block.height,
        block_time_nanos: env.block.time.nanos(),
        tx_index: env.transaction.as_ref().map(|tx| tx.index),
        contract: env.contract.address.to_string(),
        caller: info.sender.to_string(),
        pool_amount: pool.amount,
        num_players,
        round: state.round,
    };
    let seed = draw_seed(&entropy);
    let index = winning_index(&seed, num_players).ok_or(ContractError::NoParticipants)?;
    let winner = state.players[index as usize].clone();

    // Reset for the next round
    let drawn_round = state.round;
    state.players.clear();
    state.round += 1;
    ROUND_STATE.save(deps.storage, &state)?;

    let payout = SubMsg::reply_on_error(
        BankMsg::Send {
            to_address: winner.to_string(),
            amount: vec![pool.clone()],
        },
        PAYOUT_REPLY_ID,
    );

    Ok(Response::new()
        .add_submessage(payout)
        .add_attribute("action", "pick_winner")
        .add_attribute("winner", winner.to_string())
        .add_attribute("amount", pool.amount.to_string())
        .add_attribute("round", drawn_round.to_string())
        .add_event(
            Event::new("lottery_draw_result")
                .add_attribute("round", drawn_round.to_string())
                .add_attribute("winner", winner.to_string())
                .add_attribute("winning_index", index.to_string())
                .add_attribute("num_players", num_players.to_string())
                .add_attribute("amount", pool.amount.to_string())
                .add_attribute("denom", config.denom)
                .add_attribute("seed", hex::encode(seed))
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        ))
}

/// Turn a failed payout into a contract error so the chain reverts the draw.
///
/// The payout is sent reply-on-error, so a success reply under this id was
/// never requested and is rejected.
pub fn handle_payout_reply(msg: Reply) -> Result<Response, ContractError> {
    match msg.result {
        SubMsgResult::Err(reason) => Err(ContractError::PayoutFailed { reason }),
        SubMsgResult::Ok(_) => Err(ContractError::UnknownReplyId { id: msg.id }),
    }
}
