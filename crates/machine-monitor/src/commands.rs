use std::io::{BufRead, Stderr, StdinLock, Stdout, Write};
use std::process::ExitCode;

use anyhow::Result;
use application::{
    ReadingService, SetupService, SimulationCount, SimulationService, StatusReporter,
};
use chrono::{DateTime, Utc};
use domain::machine::MachineId;
use domain::reading::ReadingValues;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{error, info};

use crate::cli::Command;
use crate::context::AppContext;
use crate::prompt::prompt_number;

pub const USAGE: &str = "\
Usage:
  machine-monitor --setup
  machine-monitor --add-reading=<MACHINE_ID> [--temperature=<C>] [--speed=<M_PER_MIN>] [--recorded-at=<RFC3339>]
  machine-monitor --simulate[=<COUNT>]   (default: 10 readings per machine)
  machine-monitor --status [--json]
  machine-monitor --usage
";

/// Completion status of one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failure => ExitCode::FAILURE,
        }
    }
}

/// Operator terminal: where prompts are read and results/errors written
pub struct Console<R, W, E> {
    pub input: R,
    pub out: W,
    pub err: E,
}

impl Console<StdinLock<'static>, Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self {
            input: std::io::stdin().lock(),
            out: std::io::stdout(),
            err: std::io::stderr(),
        }
    }
}

/// Routes a [`Command`] to its use case and reports the outcome.
///
/// Every failure is caught here, printed, and turned into
/// [`Outcome::Failure`]; nothing propagates further.
pub struct Dispatcher<'a, G> {
    ctx: &'a AppContext,
    rng: G,
}

impl<'a> Dispatcher<'a, StdRng> {
    pub fn new(ctx: &'a AppContext) -> Self {
        Self::with_rng(ctx, StdRng::from_entropy())
    }
}

impl<'a, G: Rng> Dispatcher<'a, G> {
    /// Use a specific randomness source for `--simulate`
    pub fn with_rng(ctx: &'a AppContext, rng: G) -> Self {
        Self { ctx, rng }
    }

    pub async fn execute<R, W, E>(&mut self, command: Command, console: &mut Console<R, W, E>) -> Outcome
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let result = match command {
            Command::Usage => console.out.write_all(USAGE.as_bytes()).map_err(anyhow::Error::from),
            Command::Setup => self.setup(&mut console.out).await,
            Command::AddReading {
                machine_id,
                temperature,
                speed,
                recorded_at,
            } => {
                self.add_reading(machine_id, temperature, speed, recorded_at, console)
                    .await
            }
            Command::Simulate { count } => self.simulate(count.as_deref(), &mut console.out).await,
            Command::Status { json } => self.status(json, &mut console.out).await,
        };

        match result {
            Ok(()) => Outcome::Success,
            Err(e) => {
                error!(error = %e, "Command failed");
                let _ = writeln!(console.err, "Error: {}", e);
                Outcome::Failure
            }
        }
    }

    async fn setup<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let service = SetupService::new(self.ctx.schema.clone(), self.ctx.machines.clone());
        let outcome = service.run().await?;
        writeln!(out, "{}", outcome)?;
        Ok(())
    }

    async fn add_reading<R: BufRead, W: Write, E: Write>(
        &mut self,
        machine_id: MachineId,
        temperature: Option<f64>,
        speed: Option<f64>,
        recorded_at: Option<DateTime<Utc>>,
        console: &mut Console<R, W, E>,
    ) -> Result<()> {
        let service = ReadingService::new(self.ctx.machines.clone(), self.ctx.readings.clone());

        // Fail on an unknown machine before asking for any values
        let machine = service.machine(machine_id).await?;
        info!(machine_id, name = %machine.name, "Adding reading");

        let temperature = match temperature {
            Some(t) => t,
            None => prompt_number(&mut console.input, &mut console.out, "Temperature (°C)")?,
        };
        let speed = match speed {
            Some(s) => s,
            None => prompt_number(&mut console.input, &mut console.out, "Conveyor speed (m/min)")?,
        };

        let added = service
            .add_reading(machine_id, ReadingValues::new(temperature, speed), recorded_at)
            .await?;
        writeln!(console.out, "{}", added)?;
        Ok(())
    }

    async fn simulate<W: Write>(&mut self, count: Option<&str>, out: &mut W) -> Result<()> {
        let count = SimulationCount::parse_optional(count)?;
        let service = SimulationService::new(self.ctx.machines.clone(), self.ctx.readings.clone());
        let report = service.simulate(count, &mut self.rng).await?;
        writeln!(out, "{}", report)?;
        Ok(())
    }

    async fn status<W: Write>(&mut self, json: bool, out: &mut W) -> Result<()> {
        let reporter = StatusReporter::new(self.ctx.machines.clone(), self.ctx.readings.clone());
        let report = reporter.report().await?;
        if json {
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        } else {
            write!(out, "{}", report)?;
        }
        Ok(())
    }
}
