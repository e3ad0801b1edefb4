// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
Allocation-free IP address validation and a few small network helpers.

- [is_valid_ip_string]: does a string hold a valid IPv4 or IPv6 literal?
- [validate_ip]: does a byte slice have the length of an IP address?
- [logutil]: logging of deferred cleanup errors and recovered panics.
*/

mod iptools;
pub mod logutil;

pub use iptools::*;
