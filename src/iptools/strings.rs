// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

// mod.rs
pub(crate) static ERR_BAD_ADDR: &str = "bad ip address";
pub(crate) static ERR_BAD_LEN: &str = "bad ip address length";
pub(crate) static ERR_ALLOWED: &str = "allowed:";
pub(crate) static ERR_EMPTY: &str = "ip address is empty";
pub(crate) static ERR_SYNTAX: &str = "invalid ip address syntax";

// binary.rs
pub(crate) static NIL: &str = "<nil>";
pub(crate) static HEX_PREFIX: &str = "?";
