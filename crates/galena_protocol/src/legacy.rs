use thiserror::Error;

use crate::packets::PacketType;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LegacyNameError {
    #[error("class name {0:?} contains no digits to infer an id from")]
    NoDigits(String),
    #[error("class name {name:?} infers id {id}, which has no registered packet type")]
    UnknownId { name: String, id: u32 },
}

/// Concatenates every digit run in `name` in order of appearance, so
/// `"Packet29DestroyEntity"` yields 29 and `"Shape42Thing7"` yields 427.
fn concat_digit_runs(name: &str) -> Option<u32> {
    let mut id: Option<u32> = None;
    for c in name.chars() {
        if let Some(digit) = c.to_digit(10) {
            let sum = id.unwrap_or(0);
            id = Some(sum.saturating_mul(10).saturating_add(digit));
        }
    }
    id
}

impl PacketType {
    /// Resolves a packet type from an upstream class name by the digits the
    /// name embeds. Only registered ids resolve; a name without any digits is
    /// an error rather than a silent fallback to id 0.
    pub fn from_legacy_name(name: &str) -> Result<PacketType, LegacyNameError> {
        let id = concat_digit_runs(name).ok_or_else(|| LegacyNameError::NoDigits(name.into()))?;
        u8::try_from(id)
            .ok()
            .and_then(|id| PacketType::from_id(id).ok())
            .ok_or_else(|| LegacyNameError::UnknownId {
                name: name.into(),
                id,
            })
    }
}
