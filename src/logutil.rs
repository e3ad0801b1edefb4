// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logging helpers for deferred cleanup and panic recovery.

use std::{
    any::Any,
    backtrace::Backtrace,
    fmt::Display,
    fs::File,
    io::{self, BufWriter, Write},
    panic::{self, UnwindSafe},
};
use tracing::{debug, error, info, trace, warn, Level};

/// A resource with an explicit, fallible close.
pub trait Close {
    type Error: Display;

    fn close(self) -> Result<(), Self::Error>;
}

impl Close for File {
    type Error = io::Error;

    /// Flush OS buffers to disk before the handle is dropped.
    fn close(self) -> Result<(), io::Error> {
        self.sync_all()
    }
}

impl<W: Write> Close for BufWriter<W> {
    type Error = io::Error;

    fn close(self) -> Result<(), io::Error> {
        self.into_inner().map(drop).map_err(|e| e.into_error())
    }
}

/**
Close `closer` and log the error, if any, at `level`. The point is to not
lose errors from cleanup that would otherwise be silently dropped.

Instead of:
```ignore
drop(writer);
```
You can now write:
```ignore
close_and_log(Some(writer), Level::DEBUG);
```

A `None` closer is simply ignored.
*/
pub fn close_and_log<C: Close>(closer: Option<C>, level: Level) {
    let Some(closer) = closer else {
        return;
    };
    let Err(err) = closer.close() else {
        return;
    };

    // tracing wants the level at compile time
    if level == Level::ERROR {
        error!(error = %err, "deferred closing");
    } else if level == Level::WARN {
        warn!(error = %err, "deferred closing");
    } else if level == Level::INFO {
        info!(error = %err, "deferred closing");
    } else if level == Level::DEBUG {
        debug!(error = %err, "deferred closing");
    } else {
        trace!(error = %err, "deferred closing");
    }
}

/**
Run `f`, recovering from a panic inside it.

On panic, the panic value and a stack trace are logged at ERROR level and
`None` is returned. Otherwise the result of `f` is returned as-is.
*/
pub fn recover_and_log<F, T>(f: F) -> Option<T>
where
    F: FnOnce() -> T + UnwindSafe,
{
    let payload: Box<dyn Any + Send> = match panic::catch_unwind(f) {
        Ok(val) => return Some(val),
        Err(payload) => payload,
    };

    match panic_value(payload.as_ref()) {
        Some(val) => error!(value = val, "recovered from panic"),
        None => error!("recovered from panic"),
    }
    error!(stack = %Backtrace::force_capture(), "panic stack");
    None
}

/// Panic payloads from `panic!` are either `&str` or `String`.
fn panic_value(payload: &(dyn Any + Send)) -> Option<&str> {
    if let Some(s) = payload.downcast_ref::<&str>() {
        return Some(s);
    }
    payload.downcast_ref::<String>().map(String::as_str)
}

/* ######################################################################### */
