// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{strings::*, AddrCause, AddrError, LengthError, IPV4_LEN, IPV6_LEN};
use std::{
    fmt,
    net::{Ipv4Addr, Ipv6Addr},
};

/**
Validate a raw (binary) IP address.

Only the length is checked: 4 bytes for IPv4 and 16 bytes for IPv6. The
content itself is never inspected, so reserved or otherwise special addresses
pass as long as they have the right size.

### Errors
[AddrError] with an [AddrCause::Empty] cause for an empty slice, and
[AddrCause::Length] for any other length. Both carry a [LengthError].
*/
pub fn validate_ip(addr: &[u8]) -> Result<(), AddrError> {
    let cause: AddrCause = match addr.len() {
        IPV4_LEN | IPV6_LEN => return Ok(()),
        0 => AddrCause::Empty(LengthError::ip(0)),
        n => AddrCause::Length(LengthError::ip(n)),
    };
    Err(AddrError {
        addr: IpDisplay(addr).to_string(),
        cause,
    })
}

/* -------------------------------------------------------------------------- */

/**
Textual rendering of a raw IP address.

- empty: `<nil>`
- 4 bytes: dotted decimal
- 16 bytes: dotted decimal for IPv4-mapped addresses, IPv6 text otherwise
- anything else: `?` followed by the bytes in lowercase hex, f.ex. `?010203`
*/
#[derive(Clone, Copy, Debug)]
pub struct IpDisplay<'a>(pub &'a [u8]);

impl fmt::Display for IpDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str(NIL);
        }
        if let Ok(octets) = <[u8; IPV4_LEN]>::try_from(self.0) {
            return write!(f, "{}", Ipv4Addr::from(octets));
        }
        if let Ok(octets) = <[u8; IPV6_LEN]>::try_from(self.0) {
            let v6: Ipv6Addr = Ipv6Addr::from(octets);
            return match v6.to_ipv4_mapped() {
                Some(v4) => write!(f, "{v4}"),
                None => write!(f, "{v6}"),
            };
        }

        f.write_str(HEX_PREFIX)?;
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/* -------------------------------------------------------------------------- */
