const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Identifier for an empty slot that was rendered without a stable id.
///
/// Format: `empty-{unix_ms}-{9 base36 chars}`.
pub fn placeholder_brick_id(now_ms: i64) -> String {
    let uuid = uuid::Uuid::new_v4();
    let suffix: String = uuid.as_bytes()[..9]
        .iter()
        .map(|b| BASE36[(*b as usize) % BASE36.len()] as char)
        .collect();
    format!("empty-{now_ms}-{suffix}")
}

/// Identifier an empty brick reports when clicked directly without an id.
///
/// Format: `slide-{unix_ms}-section-{0..999}`.
pub fn fallback_section_id(now_ms: i64) -> String {
    let bytes = uuid::Uuid::new_v4().into_bytes();
    let n = u16::from_le_bytes([bytes[0], bytes[1]]) % 1000;
    format!("slide-{now_ms}-section-{n}")
}

/// Stable identifier for a slide section: `slide-{slide}-{kind}-{n}`.
pub fn section_brick_id(slide: u32, kind: &str, n: u32) -> String {
    format!("slide-{slide}-{kind}-{n}")
}
