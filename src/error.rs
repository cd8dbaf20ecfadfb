#[derive(thiserror::Error, Debug)]
pub enum RateError {
    #[error("rate request failed: {0}")]
    Request(String),
    #[error("rate response had no entry for symbol {0}")]
    MissingSymbol(String),
    #[error("rate for {0} was not a positive number")]
    NonPositiveRate(String),
    #[error("failed to decode rate response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum CacheError {
    #[error("cache read/write failed: {0}")]
    Storage(#[from] sled::Error),
    #[error("failed to decode cache entry: {0}")]
    Decode(#[from] minicbor::decode::Error),
    #[error("failed to encode cache entry: {0}")]
    Encode(String),
}
