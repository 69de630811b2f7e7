// Pooling session - the single owned state struct behind the demo
// Owns the config, grids, and cursor; every external command (navigate,
// reset, randomize, reconfigure) flows through here, and renderers read
// state back through the snapshot accessors only.

use crate::config::PoolConfig;
use crate::grid::{
    compute_max, GridStore, NavDirection, PoolComputation, PoolCursor, PoolResult,
};
use log::{debug, info};

pub struct PoolSession {
    config: PoolConfig,
    store: GridStore,
    cursor: PoolCursor,
    last_computation: Option<PoolComputation>,
}

impl PoolSession {
    /// Build a session and compute the initial (0, 0) window, so the first
    /// output cell is filled before any navigation arrives.
    pub fn new(config: PoolConfig) -> PoolResult<Self> {
        config.validate()?;
        let store = GridStore::new(&config)?;
        let cursor = PoolCursor::new(config.output_size());

        let mut session = Self {
            config,
            store,
            cursor,
            last_computation: None,
        };
        session.compute_current()?;
        info!(
            "session ready: {}x{} input, {}x{} window, {}x{} output",
            session.config.input_size,
            session.config.input_size,
            session.config.window_size,
            session.config.window_size,
            session.config.output_size(),
            session.config.output_size()
        );
        Ok(session)
    }

    /// Handle one navigation event: one move, one recompute, one output
    /// write. A move rejected at a boundary returns Ok(false) and changes
    /// nothing - no recompute, no write, no last-computation update.
    pub fn handle_nav(&mut self, direction: NavDirection) -> PoolResult<bool> {
        if !self.cursor.move_by(direction.delta()) {
            debug!(
                "move {:?} rejected at cursor {:?}",
                direction,
                self.cursor.position()
            );
            return Ok(false);
        }
        debug!("cursor moved {:?} to {:?}", direction, self.cursor.position());
        self.compute_current()?;
        Ok(true)
    }

    /// Blank the output grid and return the cursor to (0, 0), leaving the
    /// input grid as-is, then recompute the initial window.
    pub fn reset(&mut self) -> PoolResult<()> {
        self.cursor.reset();
        self.store.clear_output();
        self.last_computation = None;
        self.compute_current()?;
        info!("session reset, cursor back at (0, 0)");
        Ok(())
    }

    /// Replace the input grid wholesale, blank the output, return the cursor
    /// to (0, 0), and recompute.
    pub fn randomize(&mut self) -> PoolResult<()> {
        self.store.randomize(&self.config);
        self.cursor.reset();
        self.last_computation = None;
        self.compute_current()?;
        info!("input grid regenerated");
        Ok(())
    }

    /// Regenerate under a new configuration. The incoming config is
    /// validated before any state is touched; on error the session is
    /// fully preserved.
    pub fn reconfigure(&mut self, config: PoolConfig) -> PoolResult<()> {
        config.validate()?;
        self.store = GridStore::new(&config)?;
        self.cursor = PoolCursor::new(config.output_size());
        self.config = config;
        self.last_computation = None;
        self.compute_current()?;
        info!(
            "reconfigured: {}x{} input, {}x{} window",
            self.config.input_size,
            self.config.input_size,
            self.config.window_size,
            self.config.window_size
        );
        Ok(())
    }

    /// Visit every output cell via a serpentine walk (right across even
    /// rows, left across odd rows, down between them), computing and
    /// writing each; fills the whole output grid using only unit moves.
    pub fn sweep(&mut self) -> PoolResult<()> {
        let m = self.config.output_size();
        self.cursor.reset();
        self.compute_current()?;
        for _ in 1..m * m {
            let across = if self.cursor.row() % 2 == 0 {
                NavDirection::Right
            } else {
                NavDirection::Left
            };
            if !self.cursor.move_by(across.delta()) {
                self.cursor.move_by(NavDirection::Down.delta());
            }
            self.compute_current()?;
        }
        Ok(())
    }

    // Snapshot accessors consumed by renderers

    pub fn input_grid(&self) -> &Vec<Vec<i32>> {
        self.store.input()
    }

    pub fn output_grid(&self) -> &Vec<Vec<Option<i32>>> {
        self.store.output()
    }

    pub fn cursor(&self) -> &PoolCursor {
        &self.cursor
    }

    pub fn last_computation(&self) -> Option<&PoolComputation> {
        self.last_computation.as_ref()
    }

    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    pub fn filled_cells(&self) -> usize {
        self.store.filled_cells()
    }

    fn compute_current(&mut self) -> PoolResult<()> {
        let computation = compute_max(
            self.store.input(),
            &self.cursor,
            self.config.window_size,
            self.config.stride(),
        )?;
        let (row, col) = computation.output_cell;
        self.store.set_output(row, col, computation.max_value)?;
        debug!(
            "window at {:?} -> max {} at {:?}",
            computation.origin, computation.max_value, computation.max_position
        );
        self.last_computation = Some(computation);
        Ok(())
    }
}
