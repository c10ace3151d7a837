use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("entry amount {amount} is below minimum {min_entry}")]
    BelowMinimumEntry { amount: Uint128, min_entry: Uint128 },

    #[error("no funds sent with entry")]
    NoFundsSent,

    #[error("must send exactly one coin")]
    InvalidFunds,

    #[error("must send the lottery denom, got {denom}")]
    WrongDenom { denom: String },

    #[error("no participants in the current round")]
    NoParticipants,

    #[error("payout failed: {reason}")]
    PayoutFailed { reason: String },

    #[error("denom must not be empty")]
    InvalidDenom,

    #[error("unknown reply id {id}")]
    UnknownReplyId { id: u64 },
}
