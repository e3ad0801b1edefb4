// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{validate_ip, AddrError, IPV4_LEN};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

/// Limited broadcast address, 255.255.255.255.
pub const IPV4_BCAST: Ipv4Addr = Ipv4Addr::BROADCAST;
/// All-systems multicast group, 224.0.0.1.
pub const IPV4_ALLSYS: Ipv4Addr = Ipv4Addr::new(224, 0, 0, 1);
/// All-routers multicast group, 224.0.0.2.
pub const IPV4_ALLROUTER: Ipv4Addr = Ipv4Addr::new(224, 0, 0, 2);
pub const IPV4_ZERO: Ipv4Addr = Ipv4Addr::UNSPECIFIED;
pub const IPV6_ZERO: Ipv6Addr = Ipv6Addr::UNSPECIFIED;

/**
Build an [IpAddr] from its raw bytes.

### Errors
Same as [validate_ip]: anything other than 4 or 16 bytes.
*/
pub fn ip_from_bytes(addr: &[u8]) -> Result<IpAddr, AddrError> {
    validate_ip(addr)?;

    if let Ok(octets) = <[u8; IPV4_LEN]>::try_from(addr) {
        return Ok(IpAddr::V4(Ipv4Addr::from(octets)));
    }
    let mut octets: [u8; 16] = [0; 16];
    octets.copy_from_slice(addr);
    Ok(IpAddr::V6(Ipv6Addr::from(octets)))
}

/// IP address and port of a socket address; `(None, 0)` if there is none.
pub fn ip_and_port_from_addr(addr: Option<&SocketAddr>) -> (Option<IpAddr>, u16) {
    match addr {
        Some(sa) => (Some(sa.ip()), sa.port()),
        None => (None, 0),
    }
}

/* -------------------------------------------------------------------------- */
