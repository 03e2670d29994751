use std::net::Ipv4Addr;

use crate::{Rejection, RejectionKind, Value};

use super::{require_text, RuleResult};

/// Validates a dotted-quad IPv4 address.
///
/// Private ranges (`10/8`, `172.16/12`, `192.168/16`) and reserved ranges
/// (`0/8`, `127/8`, `169.254/16`, `224/4`, `240/4`) are rejected unless the
/// matching flag is set.
pub(crate) fn ipv4(
    value: &Value,
    accept_private: bool,
    accept_reserved: bool,
) -> RuleResult<String> {
    let text = require_text(value)?;

    let addr: Ipv4Addr = text
        .parse()
        .map_err(|_| Rejection::new(RejectionKind::Malformed, "not a dotted-quad address"))?;

    // Round-tripping rejects leading zeros and any other non-canonical spelling.
    let canonical = addr.to_string();
    if canonical != text {
        return Err(Rejection::new(
            RejectionKind::Malformed,
            "address is not in canonical form",
        ));
    }

    if !accept_private && addr.is_private() {
        return Err(Rejection::new(
            RejectionKind::PrivateRange,
            "address is in a private range",
        ));
    }
    if !accept_reserved && is_reserved(addr) {
        return Err(Rejection::new(
            RejectionKind::ReservedRange,
            "address is in a reserved range",
        ));
    }

    Ok(canonical)
}

fn is_reserved(addr: Ipv4Addr) -> bool {
    let [first, ..] = addr.octets();
    first == 0
        || addr.is_loopback()
        || addr.is_link_local()
        || addr.is_multicast()
        // 240.0.0.0/4, including the limited broadcast address
        || first >= 240
}
