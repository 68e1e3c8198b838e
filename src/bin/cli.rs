// src/bin/cli.rs
use kogi_pathfinder::cli;

fn main() -> color_eyre::Result<()> {
    cli::run()
}
