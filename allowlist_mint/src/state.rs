use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    pub admin: Addr,
    // 発行上限（instantiate 時に固定）
    pub max_supply: u64,
}

pub const CONFIG: Item<Config> = Item::new("config");

// 総ミント数 = 最後に発行した token_id
pub const TOTAL_MINTED: Item<u64> = Item::new("total_minted");

// 許可リスト（キーの存在 = メンバー）
pub const ALLOW_LIST: Map<&Addr, ()> = Map::new("allow_list");

// アドレスごとのミント済み token_id。許可リストから外しても消さない
pub const MINTED_BY: Map<&Addr, u64> = Map::new("minted_by");

pub const OWNERS: Map<u64, Addr> = Map::new("owners");
