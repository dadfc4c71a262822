// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! xclog library
//!
//! This module exports the command line configuration and run pipeline of
//! xclog for use in integration tests and as a library.

pub mod classify;
pub mod config;
pub mod logging;
pub mod pipeline;
