use std::collections::HashMap;
use std::fmt;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Common response envelope carried by every private endpoint.
#[derive(Deserialize, Serialize, Debug)]
pub struct RestApi<T> {
    #[serde(default)]
    pub ret_code: i64,
    #[serde(default)]
    pub ret_msg: String,
    #[serde(default)]
    pub ext_code: String,
    #[serde(default)]
    pub ext_info: String,
    #[serde(default)]
    pub time_now: String,
    pub result: T,
}

/// Asset symbol, e.g. "BTC" or "USDT". Opaque to this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coin(pub String);

impl Coin {
    pub fn new(coin: impl Into<String>) -> Self {
        Coin(coin.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Coin {
    fn from(coin: &str) -> Self {
        Coin(coin.to_owned())
    }
}

impl From<String> for Coin {
    fn from(coin: String) -> Self {
        Coin(coin)
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Account category a transfer moves funds from/to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Contract,
    Spot,
    Investment,
    Option,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Contract => "CONTRACT",
            AccountType::Spot => "SPOT",
            AccountType::Investment => "INVESTMENT",
            AccountType::Option => "OPTION",
        }
    }
}

/// Direction of a sub-account transfer, seen from the main account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransferType {
    In,
    Out,
}

impl TransferType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferType::In => "IN",
            TransferType::Out => "OUT",
        }
    }
}

/// Wallet state of a single coin.
/// GET /v2/private/wallet/balance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Balance {
    pub equity: f64,
    pub available_balance: f64,
    pub used_margin: f64,
    pub order_margin: f64,
    pub position_margin: f64,
    pub occ_closing_fee: f64,
    pub occ_funding_fee: f64,
    pub wallet_balance: f64,
    pub realised_pnl: f64,
    pub unrealised_pnl: f64,
    pub cum_realised_pnl: f64,
    pub given_cash: f64,
    pub service_cash: f64,
}

/// Balances keyed by coin. The wire shape is a JSON object whose keys are
/// coin symbols; duplicate keys collapse last-write-wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BalanceResult {
    pub balance: HashMap<Coin, Balance>,
}

impl<'de> Deserialize<'de> for BalanceResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed = HashMap::<String, Balance>::deserialize(deserializer)?;
        let balance = parsed
            .into_iter()
            .map(|(coin, data)| (Coin(coin), data))
            .collect();
        Ok(BalanceResult { balance })
    }
}

impl Serialize for BalanceResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.balance.iter().map(|(coin, data)| (&coin.0, data)))
    }
}

/// Server-assigned id of a newly created transfer.
/// POST /asset/v1/private/transfer
/// POST /asset/v1/private/sub-member/transfe
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransferResult {
    pub transfer_id: String,
}

pub type BalanceResponse = RestApi<BalanceResult>;
pub type TransferResponse = RestApi<TransferResult>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_result_rekeys_coins() {
        let raw = r#"{
            "BTC": {
                "equity": 1.002,
                "available_balance": 0.998,
                "used_margin": 0.004,
                "order_margin": 0.001,
                "position_margin": 0.003,
                "occ_closing_fee": 0.0001,
                "occ_funding_fee": 0.0002,
                "wallet_balance": 1.0,
                "realised_pnl": 0.05,
                "unrealised_pnl": -0.002,
                "cum_realised_pnl": 0.25,
                "given_cash": 0.0,
                "service_cash": 0.0
            },
            "ETH": {
                "equity": 20.5,
                "available_balance": 18.25,
                "used_margin": 2.25,
                "order_margin": 1.0,
                "position_margin": 1.25,
                "occ_closing_fee": 0.01,
                "occ_funding_fee": 0.02,
                "wallet_balance": 20.0,
                "realised_pnl": 1.5,
                "unrealised_pnl": 0.5,
                "cum_realised_pnl": 3.75,
                "given_cash": 0.1,
                "service_cash": 0.2
            }
        }"#;

        let result: BalanceResult = serde_json::from_str(raw).unwrap();
        assert_eq!(result.balance.len(), 2);

        let btc = &result.balance[&Coin::from("BTC")];
        assert_eq!(btc.equity, 1.002);
        assert_eq!(btc.available_balance, 0.998);
        assert_eq!(btc.used_margin, 0.004);
        assert_eq!(btc.order_margin, 0.001);
        assert_eq!(btc.position_margin, 0.003);
        assert_eq!(btc.occ_closing_fee, 0.0001);
        assert_eq!(btc.occ_funding_fee, 0.0002);
        assert_eq!(btc.wallet_balance, 1.0);
        assert_eq!(btc.realised_pnl, 0.05);
        assert_eq!(btc.unrealised_pnl, -0.002);
        assert_eq!(btc.cum_realised_pnl, 0.25);
        assert_eq!(btc.given_cash, 0.0);
        assert_eq!(btc.service_cash, 0.0);

        let eth = &result.balance[&Coin::from("ETH")];
        assert_eq!(eth.equity, 20.5);
        assert_eq!(eth.wallet_balance, 20.0);
    }

    #[test]
    fn balance_result_round_trips() {
        let mut balance = HashMap::new();
        balance.insert(
            Coin::from("USDT"),
            Balance {
                equity: 1000.5,
                available_balance: 900.25,
                wallet_balance: 1000.0,
                ..Balance::default()
            },
        );
        let original = BalanceResult { balance };

        let encoded = serde_json::to_string(&original).unwrap();
        let decoded: BalanceResult = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn missing_balance_fields_default_to_zero() {
        let result: BalanceResult = serde_json::from_str(r#"{"XRP": {"equity": 5.0}}"#).unwrap();
        let xrp = &result.balance[&Coin::from("XRP")];
        assert_eq!(xrp.equity, 5.0);
        assert_eq!(xrp.available_balance, 0.0);
        assert_eq!(xrp.cum_realised_pnl, 0.0);
    }

    #[test]
    fn envelope_keeps_business_error_codes() {
        let raw = r#"{
            "ret_code": 10005,
            "ret_msg": "Permission denied",
            "ext_code": "",
            "ext_info": "",
            "time_now": "1577480599.000000",
            "result": {"transfer_id": ""}
        }"#;

        let res: TransferResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(res.ret_code, 10005);
        assert_eq!(res.ret_msg, "Permission denied");
        assert_eq!(res.result.transfer_id, "");
    }

    #[test]
    fn account_and_transfer_tokens() {
        assert_eq!(AccountType::Contract.as_str(), "CONTRACT");
        assert_eq!(AccountType::Spot.as_str(), "SPOT");
        assert_eq!(
            serde_json::to_string(&AccountType::Investment).unwrap(),
            "\"INVESTMENT\""
        );
        assert_eq!(serde_json::to_string(&TransferType::In).unwrap(), "\"IN\"");
        assert_eq!(TransferType::Out.as_str(), "OUT");
    }
}
