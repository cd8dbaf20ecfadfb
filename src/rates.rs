//! Currency exchange rate resolution
//!
//! Rates are looked up in a durable local cache keyed by `(date, from, to)`
//! and fetched from a remote source on a miss. Resolution never fails: with
//! no source the identity rate is returned, and a source failure degrades to
//! the cached value or identity. Callers always get a usable positive number,
//! so an unreachable rate API cannot block document save or submit flows.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use chrono::{Local, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::warn;

use super::error::{CacheError, RateError};

pub const RATE_API_URL: &str = "https://api.vatcomply.com/rates";

const CACHE_KEY_PREFIX: &str = "currencyExchangeRate";

/// Cache key for a rate lookup, e.g. `currencyExchangeRate:2024-01-01:USD:EUR`.
pub fn cache_key(date: NaiveDate, from: &str, to: &str) -> String {
    format!("{CACHE_KEY_PREFIX}:{}:{from}:{to}", date.format("%Y-%m-%d"))
}

/// A cached rate. The rate is stored as a decimal string so no precision is
/// lost in the round-trip through storage.
#[derive(Debug, Clone, PartialEq, Eq, minicbor::Encode, minicbor::Decode)]
pub struct CacheEntry {
    #[n(0)]
    rate: String,
    #[n(1)]
    fetched_at: i64,
}

impl CacheEntry {
    pub fn new(rate: Decimal) -> Self {
        Self {
            rate: rate.to_string(),
            fetched_at: Utc::now().timestamp(),
        }
    }

    pub fn rate(&self) -> Option<Decimal> {
        Decimal::from_str(&self.rate).ok()
    }

    pub fn fetched_at(&self) -> i64 {
        self.fetched_at
    }
}

/// Keyed rate storage. The sled implementation is durable across process
/// restarts; entries are superseded by later writes, never purged.
pub trait RateCache {
    fn get(&self, key: &str) -> Result<Option<CacheEntry>, CacheError>;
    fn put(&self, key: &str, entry: &CacheEntry) -> Result<(), CacheError>;
}

impl<C: RateCache + ?Sized> RateCache for &C {
    fn get(&self, key: &str) -> Result<Option<CacheEntry>, CacheError> {
        (**self).get(key)
    }

    fn put(&self, key: &str, entry: &CacheEntry) -> Result<(), CacheError> {
        (**self).put(key, entry)
    }
}

pub struct SledRateCache {
    instance: Arc<sled::Db>,
}

impl SledRateCache {
    pub fn new(instance: Arc<sled::Db>) -> Self {
        Self { instance }
    }
}

impl RateCache for SledRateCache {
    fn get(&self, key: &str) -> Result<Option<CacheEntry>, CacheError> {
        let Some(bytes) = self.instance.get(key.as_bytes())? else {
            return Ok(None);
        };
        let entry: CacheEntry = minicbor::decode(&bytes)?;
        Ok(Some(entry))
    }

    fn put(&self, key: &str, entry: &CacheEntry) -> Result<(), CacheError> {
        let encoded =
            minicbor::to_vec(entry).map_err(|err| CacheError::Encode(err.to_string()))?;
        self.instance.insert(key.as_bytes(), encoded)?;
        Ok(())
    }
}

/// In-memory cache for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryRateCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl MemoryRateCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RateCache for MemoryRateCache {
    fn get(&self, key: &str) -> Result<Option<CacheEntry>, CacheError> {
        let entries = self.entries.lock().expect("rate cache lock poisoned");
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, entry: &CacheEntry) -> Result<(), CacheError> {
        let mut entries = self.entries.lock().expect("rate cache lock poisoned");
        entries.insert(key.to_string(), entry.clone());
        Ok(())
    }
}

/// Remote rate source for a base/symbol pair on a date.
pub trait RateSource {
    fn fetch(&self, date: NaiveDate, base: &str, symbol: &str) -> Result<Decimal, RateError>;
}

#[derive(Deserialize)]
struct RateResponse {
    rates: HashMap<String, Decimal>,
}

/// Fetches rates over HTTP from a vatcomply-style endpoint.
pub struct HttpRateSource {
    base_url: String,
    agent: ureq::Agent,
}

impl HttpRateSource {
    pub fn new() -> Self {
        Self::with_base_url(RATE_API_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            agent: ureq::agent(),
        }
    }
}

impl Default for HttpRateSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RateSource for HttpRateSource {
    fn fetch(&self, date: NaiveDate, base: &str, symbol: &str) -> Result<Decimal, RateError> {
        let url = format!(
            "{}?date={}&base={base}&symbols={symbol}",
            self.base_url,
            date.format("%Y-%m-%d"),
        );

        let response = self
            .agent
            .get(&url)
            .call()
            .map_err(|err| RateError::Request(err.to_string()))?;
        let body: RateResponse = serde_json::from_reader(response.into_reader())?;

        let rate = body
            .rates
            .get(symbol)
            .copied()
            .ok_or_else(|| RateError::MissingSymbol(symbol.to_string()))?;
        if rate <= Decimal::ZERO {
            return Err(RateError::NonPositiveRate(symbol.to_string()));
        }

        Ok(rate)
    }
}

/// Where a resolved rate came from. `Fallback` marks a degraded result so
/// callers can tell identity/stale rates from fresh ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateOrigin {
    Fresh,
    Cached,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub rate: Decimal,
    pub origin: RateOrigin,
}

pub struct ExchangeRateResolver<C: RateCache> {
    cache: C,
    source: Option<Box<dyn RateSource>>,
}

impl<C: RateCache> ExchangeRateResolver<C> {
    pub fn new(cache: C, source: Box<dyn RateSource>) -> Self {
        Self {
            cache,
            source: Some(source),
        }
    }

    /// A resolver with no network capability. Every resolution yields the
    /// identity rate.
    pub fn offline(cache: C) -> Self {
        Self {
            cache,
            source: None,
        }
    }

    /// Resolves the rate for one unit of `from` in `to` on `date` (today
    /// when omitted). Infallible; the result is always a positive decimal.
    pub fn resolve(&self, from: &str, to: &str, date: Option<NaiveDate>) -> Resolution {
        let Some(source) = &self.source else {
            return Resolution {
                rate: Decimal::ONE,
                origin: RateOrigin::Fallback,
            };
        };

        let date = date.unwrap_or_else(|| Local::now().date_naive());
        let key = cache_key(date, from, to);

        let cached = match self.cache.get(&key) {
            Ok(entry) => entry.and_then(|e| e.rate()).filter(|r| *r > Decimal::ZERO),
            Err(err) => {
                warn!(%key, error = %err, "rate cache read failed");
                None
            }
        };

        // a cached 1 is the "unknown" sentinel and triggers a refetch
        if let Some(rate) = cached {
            if rate != Decimal::ONE {
                return Resolution {
                    rate,
                    origin: RateOrigin::Cached,
                };
            }
        }

        match source.fetch(date, from, to) {
            Ok(rate) => {
                if let Err(err) = self.cache.put(&key, &CacheEntry::new(rate)) {
                    warn!(%key, error = %err, "rate cache write failed");
                }
                Resolution {
                    rate,
                    origin: RateOrigin::Fresh,
                }
            }
            Err(err) => {
                warn!(from, to, %date, error = %err, "rate fetch failed, degrading");
                Resolution {
                    rate: cached.unwrap_or(Decimal::ONE),
                    origin: RateOrigin::Fallback,
                }
            }
        }
    }
}
