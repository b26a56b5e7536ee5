use std::process::ExitCode;

use argslot_core::{ArgParseError, Command, Name, Result, Schema, run_main};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

/// Two positional values and two flags, echoed back after parsing.
#[derive(Debug, Deserialize)]
struct Demo {
    arg1: String,
    arg2: String,
    flag1: bool,
    flag2: bool,
}

impl Command for Demo {
    fn schema() -> Schema {
        Schema::new("argslot-demo")
            .argument("arg1", "Description for arg1")
            .argument("arg2", "Description for arg2")
            .flag("flag1", Name::long("long"), false, "Description for long flag1")
            .flag("flag2", Name::Short('s'), false, "Description for short flag2")
    }

    fn validate(&self) -> Result<()> {
        if self.arg1 == self.arg2 {
            return Err(ArgParseError::external("Validation failed"));
        }
        Ok(())
    }

    fn run(&mut self) -> Result<()> {
        println!("arg1: {}", self.arg1);
        println!("arg2: {}", self.arg2);
        println!("flag1 = {}", self.flag1);
        println!("flag2 = {}", self.flag2);
        Ok(())
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    run_main::<Demo>()
}
