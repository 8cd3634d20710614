//! Human-readable export of a [`Snapshot`].
//!
//! The export document is a JSON object with four arrays, `experiences`,
//! `companies`, `jobs` and `templates`, pretty-printed with two-space
//! indentation. There is no import counterpart.

use std::io::Write;

use crate::bulk::Snapshot;
use crate::errors::StoreResult;

impl Snapshot {
    pub fn to_json_pretty(&self) -> StoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json<W: Write>(&self, mut writer: W) -> StoreResult<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}
