//! Bincode encoding for values stored in redb tables.
//!
//! Tables store raw `&[u8]` values rather than implementing `redb::Value`
//! for each record, so decode failures surface as
//! [`StoreError::Decode`](crate::errors::StoreError::Decode) instead of a
//! panic inside the engine.

use bincode::config::{Configuration, standard};

use crate::errors::StoreResult;

const CONFIG: Configuration = standard();

pub fn encode<T: bincode::Encode>(value: &T) -> StoreResult<Vec<u8>> {
    Ok(bincode::encode_to_vec(value, CONFIG)?)
}

pub fn decode<T: bincode::Decode<()>>(bytes: &[u8]) -> StoreResult<T> {
    let (value, _) = bincode::decode_from_slice(bytes, CONFIG)?;
    Ok(value)
}
