// Headless sweep demo - fills the entire output grid with no interaction
// Useful for checking the pooling output end to end without a terminal UI.

use std::io::{self, Write};

use pool_grid::display::{write_computation, write_input_grid, write_output_grid};
use pool_grid::{PoolConfig, PoolSession};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = PoolConfig::default();
    let mut session = PoolSession::new(config)?;
    let mut stdout = io::stdout();

    writeln!(stdout, "=== INPUT GRID ({0}x{0}) ===", session.config().input_size)?;
    write_input_grid(&mut stdout, session.input_grid(), None)?;

    session.sweep()?;

    writeln!(
        stdout,
        "\n=== OUTPUT GRID ({0}x{0}, {1} cells filled) ===",
        session.config().output_size(),
        session.filled_cells()
    )?;
    write_output_grid(&mut stdout, session.output_grid(), None)?;

    if let Some(computation) = session.last_computation() {
        writeln!(stdout, "\nLast window computed:")?;
        write_computation(&mut stdout, computation, session.config().window_size)?;
    }
    stdout.flush()?;

    Ok(())
}
