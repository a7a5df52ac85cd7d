use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use metro_planner::domain::StationId;
use metro_planner::network::{Network, Topology, delhi_metro};
use metro_planner::planner::{
    FareDay, Planner, PlannerConfig, RouteQuery, RouteResult, Selection, Step,
};

/// Plan journeys on a metro network.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Topology JSON file; the built-in Delhi network is used if omitted
    #[arg(long, global = true)]
    network: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find the fastest route between two stations
    Route(RouteArgs),
    /// List station names
    Stations,
    /// Print the network as topology JSON
    Export,
}

#[derive(Args)]
struct RouteArgs {
    /// Origin station name or id
    from: String,
    /// Destination station name or id
    to: String,

    /// Use holiday fares
    #[arg(long)]
    holiday: bool,

    /// Travel date (YYYY-MM-DD); Sundays use holiday fares
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Apply the travel card discount
    #[arg(long)]
    card: bool,

    /// Card discount in percent
    #[arg(long, default_value_t = 10)]
    card_discount: u32,

    /// Shortest-path selection strategy
    #[arg(long, value_enum, default_value_t = SelectionArg::Scan)]
    selection: SelectionArg,

    /// Print the route as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum SelectionArg {
    Scan,
    Heap,
}

impl From<SelectionArg> for Selection {
    fn from(arg: SelectionArg) -> Self {
        match arg {
            SelectionArg::Scan => Selection::LinearScan,
            SelectionArg::Heap => Selection::BinaryHeap,
        }
    }
}

fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    init_logger();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let network = match &cli.network {
        Some(path) => {
            info!(path = %path.display(), "Loading network");
            Network::from_topology(&Topology::from_path(path)?)?
        }
        None => delhi_metro()?,
    };

    match cli.command {
        Command::Route(args) => route(&network, &args),
        Command::Stations => {
            for name in network.station_names() {
                println!("{name}");
            }
            Ok(())
        }
        Command::Export => {
            println!("{}", Topology::from_network(&network).to_json_pretty()?);
            Ok(())
        }
    }
}

fn route(network: &Network, args: &RouteArgs) -> Result<(), Box<dyn std::error::Error>> {
    let start = resolve(network, &args.from)?;
    let end = resolve(network, &args.to)?;
    let holiday = args.holiday || args.date.is_some_and(|d| FareDay::for_date(d).is_holiday());

    let config = PlannerConfig::new(args.selection.into(), args.card_discount);
    let query = RouteQuery::new(start, end).holiday(holiday).card(args.card);
    let result = Planner::new(network, &config).plan(&query)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_route(&result, config.card_discount_percent);
    }
    Ok(())
}

/// Accept a numeric id or a station name (lowest id wins for interchanges).
fn resolve(network: &Network, arg: &str) -> Result<StationId, String> {
    if let Ok(n) = arg.parse::<usize>() {
        return Ok(StationId(n));
    }
    network
        .resolve(arg)
        .ok_or_else(|| format!("unknown station: {arg}"))
}

fn print_route(result: &RouteResult, discount_percent: u32) {
    let (Some(first), Some(last)) = (result.stops.first(), result.stops.last()) else {
        return;
    };

    println!("Route from {} to {}", first.name, last.name);
    println!("Time: {} minutes", result.total_minutes);
    println!("Distance: {:.2} km", result.total_km);

    let mut fare = if result.discounted() {
        format!(
            "Fare: {} -> {} ({discount_percent}% card discount)",
            result.base_fare, result.final_fare
        )
    } else {
        format!("Fare: {}", result.final_fare)
    };
    if result.is_holiday {
        fare.push_str(" (holiday rate)");
    }
    println!("{fare}");

    println!("Path:");
    for (n, step) in result.directions.iter().enumerate() {
        let text = match step {
            Step::Start { station, line, .. } => {
                format!("Start at {} on the {line} line", describe(result, *station))
            }
            Step::Continue { station, .. } => format!("-> {}", describe(result, *station)),
            Step::Change { line, name, .. } => format!("Change to the {line} line at {name}"),
        };
        println!("{:>3}. {text}", n + 1);
    }

    for warning in &result.warnings {
        println!("warning: {warning}");
    }
}

fn describe(result: &RouteResult, id: StationId) -> String {
    result
        .stops
        .iter()
        .find(|s| s.id == id)
        .map(ToString::to_string)
        .unwrap_or_else(|| id.to_string())
}
