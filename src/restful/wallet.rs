use super::models::{AccountType, BalanceResponse, Coin, TransferResponse, TransferType};
use crate::client::BybitClient;
use anyhow::Result;
use std::collections::BTreeMap;

impl BybitClient {
    /// Wallet balance of one coin
    /// GET /v2/private/wallet/balance
    pub async fn wallet_balance(&self, coin: Coin) -> Result<BalanceResponse> {
        let mut params: BTreeMap<String, String> = BTreeMap::new();
        params.insert("coin".into(), coin.0);
        Ok(self
            .get::<BalanceResponse>("/v2/private/wallet/balance", &params)
            .await?)
    }

    /// Move funds between two account types under the same uid
    /// POST /asset/v1/private/transfer
    pub async fn internal_transfer(
        &self,
        coin: Coin,
        amount: f64,
        from_account_type: AccountType,
        to_account_type: AccountType,
    ) -> Result<TransferResponse> {
        let mut params: BTreeMap<String, String> = BTreeMap::new();
        params.insert("coin".into(), coin.0);
        params.insert("amount".into(), amount.to_string());
        params.insert(
            "from_account_type".into(),
            from_account_type.as_str().into(),
        );
        params.insert("to_account_type".into(), to_account_type.as_str().into());
        Ok(self
            .post::<TransferResponse>("/asset/v1/private/transfer", &params)
            .await?)
    }

    /// Move funds between the main account and a sub account
    /// POST /asset/v1/private/sub-member/transfe
    /// The truncated last segment is the path the exchange actually serves.
    pub async fn sub_account_transfer(
        &self,
        coin: Coin,
        amount: f64,
        sub_user_id: &str,
        transfer_type: TransferType,
    ) -> Result<TransferResponse> {
        let mut params: BTreeMap<String, String> = BTreeMap::new();
        params.insert("coin".into(), coin.0);
        params.insert("amount".into(), amount.to_string());
        params.insert("sub_user_id".into(), sub_user_id.into());
        params.insert("type".into(), transfer_type.as_str().into());
        Ok(self
            .post::<TransferResponse>("/asset/v1/private/sub-member/transfe", &params)
            .await?)
    }
}
