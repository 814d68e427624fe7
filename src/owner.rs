/// Owner resolution and display shortening
///
/// Maps the polymorphic `Owner` wire shape to a displayable string. The
/// sentinel `"Unknown"` stands in for shared, immutable, and unrecognized
/// owners; resolution is total and never panics.

use crate::types::Owner;

/// Sentinel shown when no accountable address can be extracted
pub const UNKNOWN_OWNER: &str = "Unknown";

/// Extract the accountable address (or owning object id) from an owner
/// descriptor. Object-owned objects display their parent's id; that is an
/// owner for display purposes, not a resolved account.
pub fn resolve(owner: &Owner) -> &str {
    match owner {
        Owner::Address { address } => address,
        Owner::Object { object_id } => object_id,
        Owner::Shared { .. } | Owner::Other(_) => UNKNOWN_OWNER,
    }
}

/// Shorten an address to `first 6 + "..." + last 4` for compact display.
/// The `"Unknown"` sentinel passes through, as does anything too short to
/// elide. Lossy on purpose; full addresses appear in the created-objects
/// section and in node logs.
pub fn shorten(addr: &str) -> String {
    if addr == UNKNOWN_OWNER || addr.chars().count() <= 10 {
        return addr.to_string();
    }
    let head: String = addr.chars().take(6).collect();
    let tail: String = addr.chars().skip(addr.chars().count() - 4).collect();
    format!("{}...{}", head, tail)
}
