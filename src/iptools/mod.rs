// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! IP address validation, both textual (literal syntax) and binary (length).

mod binary;
mod convert;
mod strings;
mod validate;

use serde::Serialize;
use std::{error, fmt};
use strings::*;

pub use binary::*;
pub use convert::*;
pub use validate::*;

pub(crate) const IPV4_LEN: usize = 4;
pub(crate) const IPV6_LEN: usize = 16;
/// Allowed lengths of a binary address, sorted ascending.
pub(crate) const ALLOWED_LENGTHS: &[usize] = &[IPV4_LEN, IPV6_LEN];
pub(crate) const MAX_IPV6_GROUPS: u8 = 8;

/* -------------------------------------------------------------------------- */

/// Length of an address-like byte sequence is not one of the allowed ones.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct LengthError {
    /// actual length observed
    pub length: usize,
    /// always sorted ascending
    pub allowed: &'static [usize],
}

impl LengthError {
    pub(crate) fn ip(length: usize) -> Self {
        Self {
            length,
            allowed: ALLOWED_LENGTHS,
        }
    }
}

impl fmt::Display for LengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{ERR_BAD_LEN} {}, {ERR_ALLOWED} [", self.length)?;
        for (i, len) in self.allowed.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{len}")?;
        }
        f.write_str("]")
    }
}

impl error::Error for LengthError {}

/* ---------------------------------- */

/// The reason an address was rejected.
#[rustfmt::skip]
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum AddrCause {
    /// nil or zero-length address; still a length problem
    Empty(LengthError),
    Length(LengthError),
    /// textual literal is not a valid IPv4 or IPv6 address
    Syntax,
}

impl AddrCause {
    /// The underlying [LengthError], if this is a length problem of any kind.
    pub fn as_length(&self) -> Option<&LengthError> {
        match self {
            AddrCause::Empty(e) | AddrCause::Length(e) => Some(e),
            AddrCause::Syntax => None,
        }
    }
}

impl fmt::Display for AddrCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddrCause::Empty(_) => f.write_str(ERR_EMPTY),
            AddrCause::Length(e) => write!(f, "{e}"),
            AddrCause::Syntax => f.write_str(ERR_SYNTAX),
        }
    }
}

/**
An address failed validation.

Carries the textual rendering of the attempted address together with the
[AddrCause]. For length problems the inner [LengthError] is reachable both
through [AddrError::length_error] and through [error::Error::source], so
callers can branch on either level:

```
use netutils::{validate_ip, LengthError};
use std::error::Error;

let err = validate_ip(&[1, 2, 3]).unwrap_err();
let len = err.source().and_then(|e| e.downcast_ref::<LengthError>());
assert_eq!(len.map(|e| e.length), Some(3));
```
*/
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct AddrError {
    pub addr: String,
    pub cause: AddrCause,
}

impl AddrError {
    pub fn length_error(&self) -> Option<&LengthError> {
        self.cause.as_length()
    }
}

impl fmt::Display for AddrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{ERR_BAD_ADDR} \"{}\": {}", self.addr, self.cause)
    }
}

impl error::Error for AddrError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        self.cause.as_length().map(|e| e as &(dyn error::Error + 'static))
    }
}

/* -------------------------------------------------------------------------- */
