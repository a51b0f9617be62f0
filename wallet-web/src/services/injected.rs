//! Injected wallet providers via wasm-bindgen
//!
//! Browser implementation of [`ProviderSource`] over `window.ethereum` and
//! `window.solana`. The globals are read on every lookup, since extensions
//! may inject late or overwrite each other after page load.

use js_sys::{Array, Reflect};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

use super::provider::{Eip1193Provider, ProviderFlags, ProviderSource, SolanaProvider};
use crate::error::ProviderError;
use crate::utils::constants::{FLAG_COINBASE, FLAG_METAMASK, FLAG_PHANTOM};

#[wasm_bindgen(inline_js = "
export function injectedEthereum() {
    return window.ethereum ? window.ethereum : null;
}

export function injectedSolana() {
    return window.solana ? window.solana : null;
}

export function providerFlag(provider, flag) {
    return !!provider && provider[flag] === true;
}

export function subProviders(provider) {
    if (provider && Array.isArray(provider.providers)) {
        return provider.providers;
    }
    return [];
}

export async function providerRequest(provider, method, params) {
    return await provider.request({ method: method, params: params });
}

export async function solanaConnect(provider) {
    const response = await provider.connect();
    return response.publicKey.toString();
}
")]
extern "C" {
    fn injectedEthereum() -> Option<JsValue>;

    fn injectedSolana() -> Option<JsValue>;

    fn providerFlag(provider: &JsValue, flag: &str) -> bool;

    fn subProviders(provider: &JsValue) -> Array;

    #[wasm_bindgen(catch)]
    async fn providerRequest(provider: &JsValue, method: &str, params: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn solanaConnect(provider: &JsValue) -> Result<JsValue, JsValue>;
}

/// Decode a JS rejection (`{ code, message }`, an `Error`, or anything else).
fn provider_error(err: JsValue) -> ProviderError {
    let code = Reflect::get(&err, &JsValue::from_str("code"))
        .ok()
        .and_then(|value| value.as_f64())
        .map(|value| value as i64);

    let message = Reflect::get(&err, &JsValue::from_str("message"))
        .ok()
        .and_then(|value| value.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err));

    ProviderError { code, message }
}

/// An EVM provider object from `window.ethereum` or its `providers` array.
#[derive(Clone, Debug)]
pub struct JsEvmProvider(JsValue);

impl Eip1193Provider for JsEvmProvider {
    fn flags(&self) -> ProviderFlags {
        ProviderFlags {
            is_metamask: providerFlag(&self.0, FLAG_METAMASK),
            is_coinbase_wallet: providerFlag(&self.0, FLAG_COINBASE),
            is_phantom: providerFlag(&self.0, FLAG_PHANTOM),
        }
    }

    fn providers(&self) -> Vec<Self> {
        subProviders(&self.0).iter().map(JsEvmProvider).collect()
    }

    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        let params = params
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| ProviderError::without_code(format!("Failed to encode params: {}", e)))?;

        log::debug!("EVM request {}", method);
        let response = providerRequest(&self.0, method, params)
            .await
            .map_err(provider_error)?;

        if response.is_undefined() || response.is_null() {
            return Ok(Value::Null);
        }
        serde_wasm_bindgen::from_value(response)
            .map_err(|e| ProviderError::without_code(format!("Failed to decode response: {}", e)))
    }
}

/// The `window.solana` provider.
#[derive(Clone, Debug)]
pub struct JsSolanaProvider(JsValue);

impl SolanaProvider for JsSolanaProvider {
    fn is_phantom(&self) -> bool {
        providerFlag(&self.0, FLAG_PHANTOM)
    }

    async fn connect(&self) -> Result<String, ProviderError> {
        let public_key = solanaConnect(&self.0).await.map_err(provider_error)?;
        public_key
            .as_string()
            .ok_or_else(|| ProviderError::without_code("PublicKey is not a string"))
    }
}

/// Providers injected into the current page.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserProviders;

impl ProviderSource for BrowserProviders {
    type Evm = JsEvmProvider;
    type Solana = JsSolanaProvider;

    fn ethereum(&self) -> Option<JsEvmProvider> {
        injectedEthereum().map(JsEvmProvider)
    }

    fn solana(&self) -> Option<JsSolanaProvider> {
        injectedSolana().map(JsSolanaProvider)
    }
}
