// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! entrypoint - container entrypoint for lando
//!
//! `upgrade_db [target]`, `downgrade_db <target>` and `revision_db <message>`
//! run the migration tool and exit with its status. Anything else is exec'd
//! in place of this process.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod dispatch;
mod error;
mod logging;

use anyhow::Result;
use le_adapters::{ManageAdapter, ReplaceAdapter, TracedExecAdapter, TracedMigrationAdapter};
use le_core::{Config, Invocation};

use crate::error::DispatchError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logging::setup_logging()?;

    let invocation = Invocation::from_env();
    let exec = TracedExecAdapter::new(ReplaceAdapter::new());

    let result = dispatch::dispatch(&invocation, &exec, || {
        let config = Config::load()?;
        let manage = ManageAdapter::from_config(&config)?;
        Ok::<_, DispatchError>(TracedMigrationAdapter::new(manage))
    })
    .await;

    let code = match result {
        Ok(outcome) => outcome.code(),
        Err(err) => {
            err.report(std::io::stderr().lock());
            err.exit_code()
        }
    };

    std::process::exit(code)
}
