#![cfg(test)]

//! Test-only bootstrap helpers (logging).

pub mod logging;
