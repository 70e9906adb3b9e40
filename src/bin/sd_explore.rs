use biodivine_lib_param_bn::BooleanNetwork;
use biodivine_lib_param_bn::symbolic_async_graph::SymbolicAsyncGraph;
use biodivine_succession_diagram::config::{ExpansionStrategy, SdConfig};
use biodivine_succession_diagram::results;
use biodivine_succession_diagram::succession_diagram::SuccessionDiagram;
use biodivine_succession_diagram::trap_space::BacktrackingOracle;
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "sd_explore")]
#[command(about = "Build and summarize the succession diagram of a Boolean network")]
struct Args {
    /// Path to a Boolean network file (.aeon, .bnet, etc.)
    #[arg(value_name = "FILE")]
    file: String,

    /// Traversal order used while expanding the diagram
    #[arg(long, default_value = "bfs", require_equals = true)]
    order: Order,

    /// Stop expanding once every minimal trap space has been reached
    #[arg(long)]
    minimal_only: bool,

    /// Disable block decomposition during expansion
    #[arg(long)]
    no_block_decomposition: bool,

    /// Abort once the diagram holds this many nodes
    #[arg(long, default_value_t = SdConfig::new().max_sd_nodes, require_equals = true)]
    max_nodes: usize,

    /// Seed for the NFVS solver and the retained-set/simulation PRNGs
    #[arg(long, default_value_t = 0, require_equals = true)]
    seed: u64,

    /// Logging verbosity (use -v for info, or -v=LEVEL for specific level)
    #[arg(long, short = 'v', value_name = "LEVEL", num_args = 0..=1, default_missing_value = "info", require_equals = true)]
    verbose: Option<Option<LogLevel>>,
}

#[derive(Clone, clap::ValueEnum)]
enum Order {
    Bfs,
    Dfs,
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
    println!("Loaded BN with {} variables.", bn.num_vars());

    let graph = SymbolicAsyncGraph::new(&bn).unwrap_or_else(|e| {
        eprintln!("Failed to create symbolic async graph: {}", e);
        std::process::exit(1);
    });

    let mut config = SdConfig::new()
        .with_rng_seed(args.seed)
        .with_block_decomposition(!args.no_block_decomposition);
    config.max_sd_nodes = args.max_nodes;
    config.expansion = if args.minimal_only {
        ExpansionStrategy::MinimalOnly
    } else {
        match args.order {
            Order::Bfs => ExpansionStrategy::Bfs,
            Order::Dfs => ExpansionStrategy::Dfs,
        }
    };

    let mut sd = SuccessionDiagram::new(graph, bn, Box::new(BacktrackingOracle), config);
    if let Err(e) = sd.expand() {
        eprintln!("Failed to expand succession diagram: {e}");
        std::process::exit(1);
    }

    let summary = results::summary(&sd);
    println!("Nodes: {}", summary.node_count);
    println!("Minimal trap spaces: {}", summary.minimal_node_count);
    println!("Attractors found: {}", summary.attractor_count);
    println!("Depth: {}", summary.depth);
    for (depth, count) in &summary.attractors_by_node {
        println!("  attractors at depth {depth}: {count}");
    }
}
