use clap::{Parser, Subcommand, ValueEnum};
use prodmix_core::model::{
    BASELINE_LABOR_HOURS, BASELINE_PUMPS, BASELINE_TUBING_FEET, Resource, ResourceEnvelope,
};

mod logging;
mod report;

#[derive(Parser, Debug)]
#[command(name = "prodmix")]
#[command(about = "Product-mix planner with resource sensitivity analysis")]
struct Args {
    /// Pumps available in the baseline envelope
    #[arg(long, default_value_t = BASELINE_PUMPS)]
    pumps: f64,

    /// Labor hours available in the baseline envelope
    #[arg(long, default_value_t = BASELINE_LABOR_HOURS)]
    labor_hours: f64,

    /// Feet of tubing available in the baseline envelope
    #[arg(long, default_value_t = BASELINE_TUBING_FEET)]
    tubing_feet: f64,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve the product mix and print the optimal plan
    Baseline {
        /// Emit JSON instead of the textual report
        #[arg(long)]
        json: bool,
    },
    /// Sweep one resource and locate its marginal-value breakpoint
    Sweep {
        /// Resource dimension to vary
        resource: ResourceArg,

        /// First quantity to test
        #[arg(long)]
        start: u32,

        /// Last quantity to test (inclusive)
        #[arg(long)]
        stop: u32,

        /// Emit JSON instead of the textual report
        #[arg(long)]
        json: bool,
    },
    /// Run the full report: baseline plus all three resource questions
    Analyze {
        /// Emit JSON instead of the textual report
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ResourceArg {
    Pumps,
    Labor,
    Tubing,
}

impl From<ResourceArg> for Resource {
    fn from(arg: ResourceArg) -> Self {
        match arg {
            ResourceArg::Pumps => Resource::Pumps,
            ResourceArg::Labor => Resource::LaborHours,
            ResourceArg::Tubing => Resource::TubingFeet,
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    logging::init(&args.log_level);

    let envelope = ResourceEnvelope::new(args.pumps, args.labor_hours, args.tubing_feet);

    match args.command {
        Command::Baseline { json } => report::baseline(&envelope, json)?,
        Command::Sweep {
            resource,
            start,
            stop,
            json,
        } => report::sweep_report(resource.into(), start, stop, &envelope, json)?,
        Command::Analyze { json } => report::analyze(&envelope, json)?,
    }

    Ok(())
}
