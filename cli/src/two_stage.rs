//! Builds the two-stage image: boot sector and OSLoad only.

use std::process::ExitCode;

use arctic_cli::config::TWO_STAGE;

fn main() -> ExitCode {
    arctic_cli::run(&TWO_STAGE)
}
