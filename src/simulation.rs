//! Step abstraction and the bounded run driver.
//!
//! A run owns exactly one grid: each step reads it whole, produces the next
//! one, and hands the new grid to the caller's frame callback (typically a
//! renderer). A run ends after a fixed number of steps.

use tracing::{info, trace, warn};

use crate::automaton::{random_grid, BinaryGrid, Rule};
use crate::config::{Dynamics, LifeParameters, PhaseParameters, SimulationParameters};
use crate::error::Result;
use crate::phase_field::{random_field, step_conserved, step_non_conserved, ScalarField};

/// A pure update from one grid to the next.
pub trait Stepper: Sync {
    type Grid: Clone + Send + Sync;

    fn name(&self) -> &'static str;

    fn step(&self, grid: &Self::Grid) -> Self::Grid;
}

/// Life-like automaton under a birth/survival rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct Automaton {
    pub rule: Rule,
}

impl Stepper for Automaton {
    type Grid = BinaryGrid;

    fn name(&self) -> &'static str {
        "automaton"
    }

    fn step(&self, grid: &BinaryGrid) -> BinaryGrid {
        crate::automaton::next_generation(grid, &self.rule)
    }
}

/// Relaxation-type phase-field update.
#[derive(Debug, Clone, Copy)]
pub struct NonConservedField {
    pub params: PhaseParameters,
}

impl Stepper for NonConservedField {
    type Grid = ScalarField;

    fn name(&self) -> &'static str {
        "non_conserved_field"
    }

    fn step(&self, field: &ScalarField) -> ScalarField {
        step_non_conserved(field, &self.params)
    }
}

/// Mass-conserving phase-field update.
#[derive(Debug, Clone, Copy)]
pub struct ConservedField {
    pub params: PhaseParameters,
}

impl Stepper for ConservedField {
    type Grid = ScalarField;

    fn name(&self) -> &'static str {
        "conserved_field"
    }

    fn step(&self, field: &ScalarField) -> ScalarField {
        step_conserved(field, &self.params)
    }
}

/// Iterator over the grids of a run: yields each new grid, `nstep` in total.
pub struct Evolution<'a, S: Stepper> {
    stepper: &'a S,
    current: S::Grid,
    remaining: usize,
}

impl<S: Stepper> Iterator for Evolution<'_, S> {
    type Item = S::Grid;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.current = self.stepper.step(&self.current);
        Some(self.current.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<S: Stepper> ExactSizeIterator for Evolution<'_, S> {}

/// Lazily step `initial` forward `nstep` times.
pub fn evolve<S: Stepper>(stepper: &S, initial: S::Grid, nstep: usize) -> Evolution<'_, S> {
    Evolution {
        stepper,
        current: initial,
        remaining: nstep,
    }
}

/// Runs steppers inside a dedicated rayon pool.
pub struct Runner {
    /// `None` when no dedicated pool could be built; steps then use the global pool.
    thread_pool: Option<rayon::ThreadPool>,
}

impl Runner {
    /// Create a runner. `threads` of `None` or 0 uses one thread per core.
    pub fn new(threads: Option<usize>) -> Self {
        let num_threads = threads.unwrap_or(0);
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .or_else(|err| {
                warn!(%err, num_threads, "falling back to a single-threaded step pool");
                rayon::ThreadPoolBuilder::new().num_threads(1).build()
            })
            .map_err(|err| warn!(%err, "using the global rayon pool"))
            .ok();

        Runner { thread_pool }
    }

    pub fn num_threads(&self) -> usize {
        self.thread_pool
            .as_ref()
            .map_or_else(rayon::current_num_threads, rayon::ThreadPool::current_num_threads)
    }

    fn step<S: Stepper>(&self, stepper: &S, grid: &S::Grid) -> S::Grid {
        match &self.thread_pool {
            Some(pool) => pool.install(|| stepper.step(grid)),
            None => stepper.step(grid),
        }
    }

    /// Advance `initial` exactly `nstep` times, passing every new grid to
    /// `on_frame`, and return the last grid.
    pub fn run<S, F>(&self, stepper: &S, initial: S::Grid, nstep: usize, mut on_frame: F) -> S::Grid
    where
        S: Stepper,
        F: FnMut(&S::Grid),
    {
        info!(stepper = stepper.name(), nstep, "starting run");

        let mut grid = initial;
        for step in 0..nstep {
            grid = self.step(stepper, &grid);
            trace!(stepper = stepper.name(), step, "step complete");
            on_frame(&grid);
        }

        info!(stepper = stepper.name(), nstep, "run finished");
        grid
    }
}

impl Default for Runner {
    fn default() -> Self {
        Runner::new(None)
    }
}

/// Seed a random automaton from `params` and run it to completion.
pub fn run_life<F>(params: &LifeParameters, on_frame: F) -> Result<BinaryGrid>
where
    F: FnMut(&BinaryGrid),
{
    params.validate()?;
    let grid = random_grid(params.n, params.on_probability, params.seed)?;
    info!(
        n = params.n,
        rule = %params.rule,
        population = grid.population(),
        "seeded automaton"
    );

    let stepper = Automaton { rule: params.rule };
    Ok(Runner::new(params.threads).run(&stepper, grid, params.nstep, on_frame))
}

/// Seed a random phase field from `params` and run it to completion.
pub fn run_phase_field<F>(params: &SimulationParameters, on_frame: F) -> Result<ScalarField>
where
    F: FnMut(&ScalarField),
{
    params.validate()?;
    let field = random_field(params.n, params.profile, params.seed)?;
    info!(
        n = params.n,
        aa = params.aa,
        d = params.d,
        dynamics = ?params.dynamics,
        mean = field.mean(),
        "seeded phase field"
    );

    let runner = Runner::new(params.threads);
    let last = match params.dynamics {
        Dynamics::NonConserved => {
            let stepper = NonConservedField {
                params: params.phase(),
            };
            runner.run(&stepper, field, params.nstep, on_frame)
        }
        Dynamics::Conserved => {
            let stepper = ConservedField {
                params: params.phase(),
            };
            runner.run(&stepper, field, params.nstep, on_frame)
        }
    };
    Ok(last)
}
