// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{AddrCause, AddrError, MAX_IPV6_GROUPS};

const ELLIPSIS: &[u8] = b"::";
const MAX_GROUP_VALUE: u32 = 0xffff;
const MAX_OCTET_VALUE: u16 = 255;

/**
Whether `s` is a valid textual IPv4 or IPv6 address.

Accepts exactly what a strict address parser accepts: dotted-decimal IPv4
without leading zeros, and IPv6 with at most one `::`, an optional embedded
IPv4 tail and an optional non-empty `%zone` suffix. Nothing is allocated and
no address value is built; this is a single forward scan over the bytes.

```
use netutils::is_valid_ip_string;

assert!(is_valid_ip_string("192.0.2.1"));
assert!(is_valid_ip_string("::ffff:192.168.140.255"));
assert!(is_valid_ip_string("fe80::1%eth0"));
assert!(!is_valid_ip_string("1.2.3.04"));
assert!(!is_valid_ip_string("::cd96::626b::"));
```
*/
pub fn is_valid_ip_string(s: &str) -> bool {
    let b: &[u8] = s.as_bytes();

    // The first separator decides the family.
    for &c in b {
        match c {
            b'.' => return is_valid_ipv4(b),
            b':' => return is_valid_ipv6(b),
            // zone without an address
            b'%' => return false,
            _ => {}
        }
    }
    false
}

/// Same as [is_valid_ip_string], but reports a rejected literal as an [AddrError].
pub fn validate_ip_string(s: &str) -> Result<(), AddrError> {
    if is_valid_ip_string(s) {
        return Ok(());
    }
    Err(AddrError {
        addr: s.to_string(),
        cause: AddrCause::Syntax,
    })
}

/* -------------------------------------------------------------------------- */

/// Dotted-decimal IPv4: four 0..=255 octets, no leading zeros, nothing else.
fn is_valid_ipv4(b: &[u8]) -> bool {
    let mut val: u16 = 0;
    let mut digits: u8 = 0;
    let mut dots: u8 = 0;

    for (i, &c) in b.iter().enumerate() {
        match c {
            b'0'..=b'9' => {
                if digits == 1 && val == 0 {
                    return false;
                }
                val = val * 10 + u16::from(c - b'0');
                digits += 1;
                if val > MAX_OCTET_VALUE {
                    return false;
                }
            }
            b'.' => {
                // ".1.2.3", "1..2.3", "1.2.3."
                if digits == 0 || i == b.len() - 1 {
                    return false;
                }
                if dots == 3 {
                    return false;
                }
                dots += 1;
                val = 0;
                digits = 0;
            }
            _ => return false,
        }
    }
    dots == 3 && digits > 0
}

/* ---------------------------------- */

/// Scan state of an IPv6 literal. An embedded IPv4 tail counts as two groups.
#[derive(Clone, Copy, Debug, Default)]
struct Ipv6Scan {
    groups: u8,
    /// number of groups written before the `::`, if one was seen
    ellipsis: Option<u8>,
}

impl Ipv6Scan {
    /// Record a `::`. Only one is allowed.
    #[inline]
    fn set_ellipsis(&mut self) -> bool {
        if self.ellipsis.is_some() {
            return false;
        }
        self.ellipsis = Some(self.groups);
        true
    }

    /// An IPv4 tail replaces the last two groups, or follows a `::` with room to spare.
    #[inline]
    fn ipv4_tail_fits(&self) -> bool {
        let at_end: bool = self.groups == MAX_IPV6_GROUPS - 2;
        (self.ellipsis.is_some() || at_end) && self.groups + 2 <= MAX_IPV6_GROUPS
    }

    /// Without `::` all 8 groups are written; with it, the `::` stands for
    /// at least one zero group.
    #[inline]
    fn is_complete(&self) -> bool {
        match self.ellipsis {
            None => self.groups == MAX_IPV6_GROUPS,
            Some(_) => self.groups < MAX_IPV6_GROUPS,
        }
    }
}

fn is_valid_ipv6(b: &[u8]) -> bool {
    let Some(mut rest) = strip_zone(b) else {
        return false;
    };
    let mut scan = Ipv6Scan::default();

    if rest.starts_with(ELLIPSIS) {
        scan.set_ellipsis();
        rest = &rest[ELLIPSIS.len()..];
        if rest.is_empty() {
            return true;
        }
    }

    while scan.groups < MAX_IPV6_GROUPS {
        let Some(digits) = hex_group_len(rest) else {
            return false;
        };
        if digits == 0 {
            return false;
        }

        if rest.get(digits) == Some(&b'.') {
            // the digits just read are the first octet of an IPv4 tail
            if !scan.ipv4_tail_fits() || !is_valid_ipv4(rest) {
                return false;
            }
            scan.groups += 2;
            rest = &[];
            break;
        }

        scan.groups += 1;
        rest = &rest[digits..];
        if rest.is_empty() {
            break;
        }

        // a group is followed by ':' and something more
        if rest[0] != b':' || rest.len() == 1 {
            return false;
        }
        rest = &rest[1..];

        if rest[0] == b':' {
            if !scan.set_ellipsis() {
                return false;
            }
            rest = &rest[1..];
            if rest.is_empty() {
                break;
            }
        }
    }

    rest.is_empty() && scan.is_complete()
}

/**
Split off a `%zone` suffix at the first `%`.

Returns the address part, or `None` if the zone is empty or contains another
`%` or a `:`.
*/
#[inline]
fn strip_zone(b: &[u8]) -> Option<&[u8]> {
    let Some(pct) = b.iter().position(|&c| c == b'%') else {
        return Some(b);
    };
    let zone: &[u8] = &b[pct + 1..];
    if zone.is_empty() || zone.iter().any(|&c| c == b'%' || c == b':') {
        return None;
    }
    Some(&b[..pct])
}

/// Number of leading hex digits in `b`, or `None` if their value exceeds 16 bits.
/// Leading zeros do not count against the limit.
#[inline]
fn hex_group_len(b: &[u8]) -> Option<usize> {
    let mut acc: u32 = 0;
    let mut len: usize = 0;
    for &c in b {
        let Some(d) = char::from(c).to_digit(16) else {
            break;
        };
        acc = (acc << 4) | d;
        if acc > MAX_GROUP_VALUE {
            return None;
        }
        len += 1;
    }
    Some(len)
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::IpAddr;

    const TEST_IPV4: &str = "1.2.3.4";
    const TEST_IPV6: &str = "1234::cdef";

    #[rustfmt::skip]
    const GOOD: &[&str] = &[
        TEST_IPV4,
        TEST_IPV6,
        "0.0.0.0",
        "255.255.255.255",
        "::",
        "::1",
        "1::",
        "::ffff:192.168.140.255",
        "::192.168.140.255",
        "1:2:3:4:5:6:1.2.3.4",
        "1:2:3:4:5::1.2.3.4",
        "fd7a:115c:a1e0:ab12:4843:cd96:626b:430b%eth0",
        "fd7a:115c:a1e0:ab12:4843:cd96:626b::",
        "FD7A:115C:A1E0:AB12:4843:CD96:626B:430B",
        "000000::",
        "0000:0000:0000:0000:0000:0000:0000:0000",
        "2001:db8::68",
        "fe80::1%en0.100",
        "::1.2.3.4%1",
    ];

    #[rustfmt::skip]
    const BAD: &[&str] = &[
        "",
        " ",
        ":",
        "%",
        "not_ip",
        "1.2.3",
        "1.ff.3.4",
        "1.2.3.4.5",
        "1.2.3.4567",
        "1.2.3.04",
        "1.2.3.00",
        "1.2.3.256",
        "1.2.3.4.",
        ".1.2.3.4",
        "1..2.3",
        "1.2.3.4%eth0",
        " 1.2.3.4",
        "1::2.3",
        "fd7a:115c:a1e0:ab12:4843:cd96:626b::430b",
        "::cd96::626b::",
        "::fffff",
        "::626b:430b:",
        "::%",
        "%eth0",
        "2001:db8:::",
        ":::",
        "1:::2",
        ":1::",
        "1:2:3:4:5:6:7",
        "1:2:3:4:5:6:7:8:9",
        "1:2:3:4:5:6:7:8::",
        "2001:db8:a1e0:ab12:4843:cd96:626b:ffff:ffff",
        "1:2:3:1.2.3.4",
        "1:2:3:4:5:6:7:1.2.3.4",
        "::1:2:3:4:5:6:1.2.3.4",
        "1.2.3.4::",
        "::1.2.3.04",
        "::1%eth%0",
        "::1%eth:0",
        "::g",
        "1:2:3:4:5:6:7:8 ",
    ];

    #[test]
    fn test_good() {
        for ip in GOOD {
            assert!(is_valid_ip_string(ip), "should accept: '{ip}'");
        }
    }

    #[test]
    fn test_bad() {
        for ip in BAD {
            assert!(!is_valid_ip_string(ip), "should reject: '{ip}'");
        }
    }

    #[test]
    fn test_ipv4_leading_zeros() {
        assert!(is_valid_ip_string("0.0.0.0"));
        assert!(is_valid_ip_string("10.20.100.0"));
        for octet in ["00", "01", "04", "010", "099", "000"] {
            let ip = format!("1.2.3.{octet}");
            assert!(!is_valid_ip_string(&ip), "should reject: '{ip}'");
        }
    }

    #[test]
    fn test_ipv6_group_overflow() {
        assert!(is_valid_ip_string("::ffff"));
        assert!(is_valid_ip_string("::0ffff"));
        assert!(!is_valid_ip_string("::10000"));
        assert!(!is_valid_ip_string("::fffff"));
    }

    #[test]
    fn test_ipv6_group_count() {
        // 7 written groups leave exactly one for the ellipsis
        assert!(is_valid_ip_string("1:2:3:4:5:6:7::"));
        assert!(is_valid_ip_string("::2:3:4:5:6:7:8"));
        assert!(is_valid_ip_string("1:2:3::5:6:7:8"));
        assert!(!is_valid_ip_string("1:2:3:4::5:6:7:8"));
        assert!(!is_valid_ip_string("::1:2:3:4:5:6:7:8"));
    }

    #[test]
    fn test_zone() {
        for zone in ["eth0", "1", "en0.100", "wlan-0_x", "äö"] {
            let ip = format!("{TEST_IPV6}%{zone}");
            assert!(is_valid_ip_string(&ip), "should accept: '{ip}'");
        }
        assert!(!is_valid_ip_string(&format!("{TEST_IPV6}%")));
        assert!(!is_valid_ip_string(&format!("{TEST_IPV4}%eth0")));
    }

    #[test]
    fn test_validate_ip_string() {
        assert_eq!(validate_ip_string(TEST_IPV4), Ok(()));
        let err = validate_ip_string("1.2.3").unwrap_err();
        assert_eq!(err.cause, AddrCause::Syntax);
        assert_eq!(err.to_string(), "bad ip address \"1.2.3\": invalid ip address syntax");
    }

    #[test]
    fn test_deterministic() {
        for ip in GOOD.iter().chain(BAD) {
            let first = is_valid_ip_string(ip);
            for _ in 0..3 {
                assert_eq!(is_valid_ip_string(ip), first);
            }
        }
    }

    /* ---------------------------------- */

    /// xorshift64, enough to drive a reproducible corpus
    struct Rng(u64);

    impl Rng {
        fn next(&mut self) -> u64 {
            self.0 ^= self.0 << 13;
            self.0 ^= self.0 >> 7;
            self.0 ^= self.0 << 17;
            self.0
        }

        fn below(&mut self, n: usize) -> usize {
            (self.next() % n as u64) as usize
        }
    }

    const ALPHABET: &[u8] = b"0123456789abcdefABCDEFx:.%: .";
    const SEEDS: &[&str] = &[
        "",
        " ",
        "192.0.2.1",
        "2001:db8::68",
        "::ffff:192.168.140.255",
        "1.2.3",
        "1::2.3",
        "1:2:3:4:5:6:7:8",
        "1:2:3:4:5:6:1.2.3.4",
        "::",
    ];

    /// The std parser caps hex groups at 4 digits and knows nothing of zones;
    /// everything else must agree with it.
    fn comparable(s: &str) -> bool {
        let mut run: usize = 0;
        for c in s.bytes() {
            if c == b'%' {
                return false;
            }
            run = if c.is_ascii_hexdigit() { run + 1 } else { 0 };
            if run > 4 {
                return false;
            }
        }
        true
    }

    #[test]
    fn test_matches_std_parser() {
        let mut rng = Rng(0x9e37_79b9_7f4a_7c15);
        let mut checked: usize = 0;
        let mut accepted: usize = 0;

        for _ in 0..50_000 {
            let mut buf: Vec<u8> = SEEDS[rng.below(SEEDS.len())].as_bytes().to_vec();
            for _ in 0..rng.below(4) {
                let c = ALPHABET[rng.below(ALPHABET.len())];
                match rng.below(3) {
                    0 => buf.insert(rng.below(buf.len() + 1), c),
                    1 if !buf.is_empty() => {
                        buf.remove(rng.below(buf.len()));
                    }
                    _ if !buf.is_empty() => {
                        let i = rng.below(buf.len());
                        buf[i] = c;
                    }
                    _ => buf.push(c),
                }
            }

            let s = String::from_utf8(buf).unwrap();
            if !comparable(&s) {
                continue;
            }
            let want = s.parse::<IpAddr>().is_ok();
            assert_eq!(is_valid_ip_string(&s), want, "disagrees with std on '{s}'");
            checked += 1;
            accepted += want as usize;
        }

        assert!(checked > 10_000);
        assert!(accepted > 100);
    }
}
