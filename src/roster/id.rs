//! Record id generation
//!
//! Ids are a base-36 millisecond timestamp followed by six random hex
//! characters. They are unique within a process lifetime, not globally.

use chrono::Utc;
use uuid::Uuid;

const RANDOM_SUFFIX_LEN: usize = 6;

/// Generate a fresh record id
pub fn generate_record_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let random = Uuid::new_v4().simple().to_string();
    format!("{}{}", to_base36(millis), &random[..RANDOM_SUFFIX_LEN])
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
