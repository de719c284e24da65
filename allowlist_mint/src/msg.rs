use cosmwasm_schema::{cw_serde, QueryResponses};

#[cw_serde]
pub struct InstantiateMsg {
    /// 省略時は instantiate の送信者
    pub admin: Option<String>,
    pub max_supply: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    TransferAdmin { new_admin: String },
    AddToAllowList { address: String },
    RemoveFromAllowList { address: String },
    /// 送信者自身に次の token_id を発行
    Mint {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(AdminResponse)]
    Admin {},

    #[returns(AllowListStatusResponse)]
    IsOnAllowList { address: String },

    #[returns(HasMintedResponse)]
    HasMinted { address: String },

    #[returns(CurrentTokenIdResponse)]
    CurrentTokenId {},

    #[returns(OwnerOfResponse)]
    OwnerOf { token_id: u64 },

    #[returns(ConfigResponse)]
    Config {},

    #[returns(AllowListResponse)]
    AllowList {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct AdminResponse {
    pub admin: String,
}

#[cw_serde]
pub struct AllowListStatusResponse {
    pub allowed: bool,
}

#[cw_serde]
pub struct HasMintedResponse {
    pub minted: bool,
    pub token_id: Option<u64>,
}

#[cw_serde]
pub struct CurrentTokenIdResponse {
    pub token_id: u64,
}

#[cw_serde]
pub struct OwnerOfResponse {
    pub owner: Option<String>,
}

#[cw_serde]
pub struct ConfigResponse {
    pub admin: String,
    pub max_supply: u64,
    pub total_minted: u64,
}

#[cw_serde]
pub struct AllowListResponse {
    pub addresses: Vec<String>,
    pub next_start_after: Option<String>,
}
