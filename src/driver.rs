use std::io::{BufRead, Write};

use log::info;

use super::error::Result;
use super::protocol::Input;
use super::strategy::Strategy;
use super::world::World;

/// Reads the setup block once, then answers every turn with exactly one command line until the
/// input ends. The first error stops the loop before anything is written for that turn.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W) -> Result<()> {
    let mut input = Input::new(input);

    let (grid, constants) = input.read_setup()?;
    info!("\n{grid}");
    info!("{constants:?}");

    let strategy = Strategy::new(grid, constants);

    let mut turn = 0;
    while let Some(records) = input.read_turn()? {
        turn += 1;
        info!("turn {turn}: {} entities", records.len());

        let world = World::classify(&records)?;
        let command = strategy.play(&world)?;

        writeln!(output, "{command}")?;
        output.flush()?;
    }

    info!("input closed after {turn} turns");
    Ok(())
}
