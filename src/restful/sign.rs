use anyhow::{bail, Context, Result};
use hmac::{Hmac, Mac};
use serde::de::DeserializeOwned;
use sha2::Sha256;
use std::collections::BTreeMap;
use tracing::debug;

use crate::client::BybitClient;

type HmacSha256 = Hmac<Sha256>;

impl BybitClient {
    pub async fn get<T>(
        &self,
        request_path: &str,
        parameters: &BTreeMap<String, String>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.build_private_url(request_path, parameters)?;

        debug!(%url, ?parameters, "GET {}", request_path);

        let resp = self.http.get(&url).send().await?.text().await?;

        debug!(body = %resp, "GET {} response", request_path);

        Ok(serde_json::from_str::<T>(&resp)?)
    }

    pub async fn post<T>(
        &self,
        request_path: &str,
        parameters: &BTreeMap<String, String>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.build_private_url(request_path, parameters)?;
        let body = serde_json::to_string(parameters)
            .with_context(|| format!("json marshal for {}", request_path))?;

        debug!(%url, %body, "POST {}", request_path);

        let resp = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?
            .text()
            .await?;

        debug!(body = %resp, "POST {} response", request_path);

        Ok(serde_json::from_str::<T>(&resp)?)
    }

    /// Signed URL for a private endpoint. `api_key` and `timestamp` join the
    /// business parameters, the query string is assembled in ASCII key order,
    /// signed, and the signature appended as the final `sign` parameter. The
    /// caller's map is left untouched so POST bodies carry business
    /// parameters only.
    pub(crate) fn build_private_url(
        &self,
        path: &str,
        params: &BTreeMap<String, String>,
    ) -> Result<String> {
        if self.api_key.is_empty() || self.secret_key.is_empty() {
            bail!("missing api credentials for private endpoint {}", path);
        }

        let mut signed: BTreeMap<String, String> = params.clone();
        signed.insert("api_key".into(), self.api_key.clone());
        signed.insert("timestamp".into(), self.get_timestamp());

        let query_string = Self::build_query_string(&signed);
        let sign = self.sign(&query_string);

        Ok(format!(
            "{}{}?{}&sign={}",
            self.domain, path, query_string, sign
        ))
    }

    /// HMAC-SHA256 over the query string, hex encoded.
    fn sign(&self, message: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.secret_key.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(message.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// `key=value` pairs joined with `&`, keys already in ASCII order.
    fn build_query_string(params: &BTreeMap<String, String>) -> String {
        params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn get_timestamp(&self) -> String {
        chrono::Utc::now().timestamp_millis().to_string()
    }
}
