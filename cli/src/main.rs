//! Builds the three-stage image: boot sector, OSLoad, Rekanto kernel.

use std::process::ExitCode;

use arctic_cli::config::THREE_STAGE;

fn main() -> ExitCode {
    arctic_cli::run(&THREE_STAGE)
}
