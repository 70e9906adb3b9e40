use biodivine_lib_param_bn::BooleanNetwork;
use biodivine_lib_param_bn::symbolic_async_graph::SymbolicAsyncGraph;
use biodivine_succession_diagram::config::SdConfig;
use biodivine_succession_diagram::control::ControlMode;
use biodivine_succession_diagram::results;
use biodivine_succession_diagram::succession_diagram::SuccessionDiagram;
use biodivine_succession_diagram::trap_space::BacktrackingOracle;
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "sd_control")]
#[command(about = "Find driver sets that force convergence to a chosen node of the succession diagram")]
struct Args {
    /// Path to a Boolean network file (.aeon, .bnet, etc.)
    #[arg(value_name = "FILE")]
    file: String,

    /// A comma-separated list of `name=0`/`name=1` literals identifying the target node: the
    /// first expanded node whose trap space fixes every given literal.
    #[arg(long, value_name = "LITERALS", require_equals = true)]
    target: String,

    /// Which driver sets to report
    #[arg(long, default_value = "any-one-minimum", require_equals = true)]
    mode: ModeArg,

    /// Seed for the NFVS solver and the retained-set/simulation PRNGs
    #[arg(long, default_value_t = 0, require_equals = true)]
    seed: u64,

    /// Logging verbosity (use -v for info, or -v=LEVEL for specific level)
    #[arg(long, short = 'v', value_name = "LEVEL", num_args = 0..=1, default_missing_value = "info", require_equals = true)]
    verbose: Option<Option<LogLevel>>,
}

#[derive(Clone, clap::ValueEnum)]
enum ModeArg {
    AllMinimal,
    AllMinimum,
    AnyOneMinimum,
}

impl From<ModeArg> for ControlMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::AllMinimal => ControlMode::AllMinimal,
            ModeArg::AllMinimum => ControlMode::AllMinimum,
            ModeArg::AnyOneMinimum => ControlMode::AnyOneMinimum,
        }
    }
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
        }
    }
}

fn main() {
    let args = Args::parse();

    let log_level = match args.verbose {
        None => LevelFilter::Off,
        Some(None) => LevelFilter::Info,
        Some(Some(level)) => level.into(),
    };
    Builder::from_default_env().filter_level(log_level).init();

    let bn = BooleanNetwork::try_from_file(&args.file).unwrap_or_else(|e| {
        eprintln!("Failed to load BN file {}: {}", args.file, e);
        std::process::exit(1);
    });

    let graph = SymbolicAsyncGraph::new(&bn).unwrap_or_else(|e| {
        eprintln!("Failed to create symbolic async graph: {}", e);
        std::process::exit(1);
    });

    let target_literals = parse_literals(&bn, &args.target).unwrap_or_else(|e| {
        eprintln!("Failed to parse --target: {e}");
        std::process::exit(1);
    });

    let config = SdConfig::new().with_rng_seed(args.seed);
    let mut sd = SuccessionDiagram::new(graph.clone(), bn, Box::new(BacktrackingOracle), config);
    if let Err(e) = sd.expand() {
        eprintln!("Failed to expand succession diagram: {e}");
        std::process::exit(1);
    }

    let target = sd
        .nodes()
        .iter()
        .find(|n| target_literals.iter().all(|&(var, val)| n.space.get(var) == Some(val)))
        .unwrap_or_else(|| {
            eprintln!("No node found whose trap space fixes every given literal.");
            std::process::exit(1);
        })
        .id;

    let result = results::control(&graph, &sd, target, args.mode.into());
    println!("Driver sets for node {}: {}", result.target.0, result.driver_sets.len());
    for (i, driver_set) in result.driver_sets.iter().enumerate() {
        println!("  #{}: {} literal(s)", i + 1, driver_set.len());
    }
}

fn parse_literals(
    bn: &BooleanNetwork,
    spec: &str,
) -> Result<Vec<(biodivine_lib_param_bn::VariableId, bool)>, String> {
    spec.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| {
            let (name, value) = part
                .trim()
                .split_once('=')
                .ok_or_else(|| format!("malformed literal `{part}`"))?;
            let var = bn
                .as_graph()
                .find_variable(name)
                .ok_or_else(|| format!("unknown variable `{name}`"))?;
            let value = match value {
                "0" => false,
                "1" => true,
                other => return Err(format!("literal value must be 0 or 1, got `{other}`")),
            };
            Ok((var, value))
        })
        .collect()
}
