use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;
use warehouse_planner::{
    DEFAULT_MAX_ITER, DEFAULT_N_INIT, Dataset, DatasetFormat, KMeans, KMeansInit,
    PlacementReport, Selection,
};

#[derive(Parser)]
#[command(
    name = "warehouse-planner",
    version,
    about = "Propose warehouse sites by clustering geolocated demand points"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Cluster the selected demand points and print one site per cluster
    Plan(PlanArgs),
    /// List the categories and regions found in a dataset
    Options {
        #[command(flatten)]
        source: Source,
    },
}

#[derive(Args)]
struct Source {
    /// Demand records (CSV with a header row, or a JSON array)
    #[arg(short, long)]
    input: PathBuf,

    /// Table format; inferred from the file extension when omitted
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
}

impl Source {
    fn load(&self) -> Result<Dataset> {
        let format = self
            .format
            .map(DatasetFormat::from)
            .unwrap_or_else(|| DatasetFormat::from_path(&self.input));
        Dataset::open_as(&self.input, format)
            .with_context(|| format!("Failed to load dataset {}", self.input.display()))
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Csv,
    Json,
}

impl From<FormatArg> for DatasetFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => DatasetFormat::Csv,
            FormatArg::Json => DatasetFormat::Json,
        }
    }
}

#[derive(Args)]
struct PlanArgs {
    #[command(flatten)]
    source: Source,

    /// Category to include (repeatable)
    #[arg(short, long = "category", required = true)]
    categories: Vec<String>,

    /// Region/state to include (repeatable)
    #[arg(short, long = "region", required = true)]
    regions: Vec<String>,

    /// Number of warehouses (clusters)
    #[arg(short = 'k', long, default_value_t = 3)]
    warehouses: usize,

    /// Seed for reproducible placement; a random one is reported when omitted
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = DEFAULT_MAX_ITER)]
    max_iter: usize,

    /// Independent initializations, best kept
    #[arg(long, default_value_t = DEFAULT_N_INIT)]
    n_init: usize,

    #[arg(long, value_enum, default_value_t = InitArg::KmeansPlusPlus)]
    init: InitArg,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum InitArg {
    #[value(name = "kmeans++")]
    KmeansPlusPlus,
    Random,
}

impl From<InitArg> for KMeansInit {
    fn from(arg: InitArg) -> Self {
        match arg {
            InitArg::KmeansPlusPlus => KMeansInit::KMeansPlusPlus,
            InitArg::Random => KMeansInit::Random,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Plan(args) => plan(args),
        Command::Options { source } => list_options(&source),
    }
}

fn plan(args: PlanArgs) -> Result<()> {
    let start = Instant::now();

    // Step 1: Load and filter demand points
    let dataset = args.source.load()?;
    let selection =
        Selection::new(&args.categories, &args.regions).context("Invalid selection")?;
    let points = selection.apply(dataset.points());
    info!(
        loaded = dataset.len(),
        selected = points.len(),
        "selection applied"
    );

    // Step 2: Cluster
    let km = KMeans::new(args.warehouses)
        .max_iter(args.max_iter)
        .n_init(args.n_init)
        .seed(args.seed)
        .init(args.init.into());
    let result = km.fit(&points).with_context(|| {
        format!(
            "Failed to place {} warehouses over {} selected points",
            args.warehouses,
            points.len()
        )
    })?;

    // Step 3: Report
    let report = PlacementReport::build(&points, &result, km.options());
    if args.json {
        println!("{}", report.to_json().context("Failed to encode report")?);
    } else {
        println!("{}", report);
    }

    info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        "plan complete"
    );
    Ok(())
}

fn list_options(source: &Source) -> Result<()> {
    let dataset = source.load()?;

    println!("Categories:");
    for category in dataset.categories() {
        println!("  {}", category);
    }

    println!("Regions:");
    for region in dataset.regions() {
        println!("  {}", region);
    }

    Ok(())
}
