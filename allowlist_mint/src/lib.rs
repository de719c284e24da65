#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;

use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Order, Response, StdResult,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;

pub mod error;
pub mod msg;
pub mod state;


use crate::error::ContractError;
use crate::msg::{
    AdminResponse, AllowListResponse, AllowListStatusResponse, ConfigResponse,
    CurrentTokenIdResponse, ExecuteMsg, HasMintedResponse, InstantiateMsg, OwnerOfResponse,
    QueryMsg,
};
use crate::state::{Config, ALLOW_LIST, CONFIG, MINTED_BY, OWNERS, TOTAL_MINTED};

const CONTRACT_NAME: &str = "crates.io:allowlist_mint";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_LIMIT: u32 = 30;
const MAX_LIMIT: u32 = 100;

// -------------------- instantiate --------------------
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let admin = match msg.admin {
        Some(a) => deps.api.addr_validate(&a)?,
        None => info.sender,
    };

    let cfg = Config {
        admin,
        max_supply: msg.max_supply,
    };
    CONFIG.save(deps.storage, &cfg)?;
    TOTAL_MINTED.save(deps.storage, &0)?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", cfg.admin)
        .add_attribute("max_supply", cfg.max_supply.to_string()))
}

// -------------------- helpers --------------------
fn ensure_admin(cfg: &Config, sender: &Addr) -> Result<(), ContractError> {
    if &cfg.admin != sender {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

// -------------------- execute --------------------
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::TransferAdmin { new_admin } => execute_transfer_admin(deps, info, new_admin),
        ExecuteMsg::AddToAllowList { address } => execute_add_to_allow_list(deps, info, address),
        ExecuteMsg::RemoveFromAllowList { address } => {
            execute_remove_from_allow_list(deps, info, address)
        }
        ExecuteMsg::Mint {} => execute_mint(deps, info),
    }
}

fn execute_transfer_admin(
    deps: DepsMut,
    info: MessageInfo,
    new_admin: String,
) -> Result<Response, ContractError> {
    let mut cfg = CONFIG.load(deps.storage)?;
    ensure_admin(&cfg, &info.sender)?;

    // 現 admin と同じでもそのまま上書き
    let new_admin = deps.api.addr_validate(&new_admin)?;
    let previous = std::mem::replace(&mut cfg.admin, new_admin);
    CONFIG.save(deps.storage, &cfg)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_admin")
        .add_attribute("previous_admin", previous)
        .add_attribute("admin", cfg.admin))
}

fn execute_add_to_allow_list(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let cfg = CONFIG.load(deps.storage)?;
    ensure_admin(&cfg, &info.sender)?;

    let addr = deps.api.addr_validate(&address)?;
    ALLOW_LIST.save(deps.storage, &addr, &())?;

    Ok(Response::new()
        .add_attribute("action", "add_to_allow_list")
        .add_attribute("address", addr))
}

fn execute_remove_from_allow_list(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let cfg = CONFIG.load(deps.storage)?;
    ensure_admin(&cfg, &info.sender)?;

    // MINTED_BY には触れない（再追加されても二度目のミントは不可）
    let addr = deps.api.addr_validate(&address)?;
    ALLOW_LIST.remove(deps.storage, &addr);

    Ok(Response::new()
        .add_attribute("action", "remove_from_allow_list")
        .add_attribute("address", addr))
}

fn execute_mint(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let minter = info.sender;

    // チェック順がそのままエラーの優先順位
    if !ALLOW_LIST.has(deps.storage, &minter) {
        return Err(ContractError::NotAllowListed);
    }
    if MINTED_BY.has(deps.storage, &minter) {
        return Err(ContractError::AlreadyMinted);
    }
    let cfg = CONFIG.load(deps.storage)?;
    let total = TOTAL_MINTED.load(deps.storage)?;
    if total >= cfg.max_supply {
        return Err(ContractError::SupplyExhausted);
    }

    // ここまで書き込みなし。total < max_supply なので +1 は溢れない
    let token_id = total + 1;
    TOTAL_MINTED.save(deps.storage, &token_id)?;
    MINTED_BY.save(deps.storage, &minter, &token_id)?;
    OWNERS.save(deps.storage, token_id, &minter)?;

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_attribute("minter", minter)
        .add_attribute("token_id", token_id.to_string()))
}

// -------------------- query --------------------
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Admin {} => to_json_binary(&query_admin(deps)?),
        QueryMsg::IsOnAllowList { address } => {
            to_json_binary(&query_is_on_allow_list(deps, address)?)
        }
        QueryMsg::HasMinted { address } => to_json_binary(&query_has_minted(deps, address)?),
        QueryMsg::CurrentTokenId {} => to_json_binary(&query_current_token_id(deps)?),
        QueryMsg::OwnerOf { token_id } => to_json_binary(&query_owner_of(deps, token_id)?),
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::AllowList { start_after, limit } => {
            to_json_binary(&query_allow_list(deps, start_after, limit)?)
        }
    }
}

fn query_admin(deps: Deps) -> StdResult<AdminResponse> {
    let cfg = CONFIG.load(deps.storage)?;
    Ok(AdminResponse {
        admin: cfg.admin.into_string(),
    })
}

// 参照系は検証しない。不正な文字列はどのキーとも一致せず false になるだけ
fn query_is_on_allow_list(deps: Deps, address: String) -> StdResult<AllowListStatusResponse> {
    let addr = Addr::unchecked(address);
    Ok(AllowListStatusResponse {
        allowed: ALLOW_LIST.has(deps.storage, &addr),
    })
}

fn query_has_minted(deps: Deps, address: String) -> StdResult<HasMintedResponse> {
    let addr = Addr::unchecked(address);
    let token_id = MINTED_BY.may_load(deps.storage, &addr)?;
    Ok(HasMintedResponse {
        minted: token_id.is_some(),
        token_id,
    })
}

fn query_current_token_id(deps: Deps) -> StdResult<CurrentTokenIdResponse> {
    let token_id = TOTAL_MINTED.load(deps.storage)?;
    Ok(CurrentTokenIdResponse { token_id })
}

fn query_owner_of(deps: Deps, token_id: u64) -> StdResult<OwnerOfResponse> {
    let owner = OWNERS.may_load(deps.storage, token_id)?;
    Ok(OwnerOfResponse {
        owner: owner.map(Addr::into_string),
    })
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let cfg = CONFIG.load(deps.storage)?;
    let total = TOTAL_MINTED.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: cfg.admin.into_string(),
        max_supply: cfg.max_supply,
        total_minted: total,
    })
}

fn query_allow_list(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<AllowListResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;

    let start_addr = start_after.map(Addr::unchecked);
    let start = start_addr.as_ref().map(Bound::exclusive);

    let addresses = ALLOW_LIST
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(Addr::into_string))
        .collect::<StdResult<Vec<_>>>()?;

    let next = if addresses.len() == limit {
        addresses.last().cloned()
    } else {
        None
    };
    Ok(AllowListResponse {
        addresses,
        next_start_after: next,
    })
}
