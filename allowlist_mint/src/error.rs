use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Sender is not on the allow list")]
    NotAllowListed,

    #[error("Already minted one per address")]
    AlreadyMinted,

    #[error("Max supply reached")]
    SupplyExhausted,
}
