use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use truewage_cli::cli::{
    handle_audit_command, handle_calc_command, handle_export_command, handle_project_command,
    handle_quick_command, handle_record_command, CalcArgs, ExportArgs, ProjectArgs, QuickArgs,
    RecordCommands,
};
use truewage_cli::config::{paths::DATA_DIR_ENV, Settings, TrueWagePaths};
use truewage_cli::storage::{initialize_storage, Storage};

/// Environment variable holding the log filter
const LOG_ENV: &str = "TRUEWAGE_LOG";

#[derive(Parser)]
#[command(
    name = "truewage",
    author = "Kaylee Beyene",
    version,
    about = "Calculate your true hourly wage after commute time and costs",
    long_about = "TrueWage converts your take-home pay into an hourly wage, then \
                  charges your commute against it: its costs come out of your income \
                  and its time is added to the hours that income pays for."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Full calculator with every commute option
    Calc(CalcArgs),

    /// Quick bi-weekly calculator for car commuters
    Quick(QuickArgs),

    /// Measure an expense in hours of work
    Project(ProjectArgs),

    /// Saved record commands
    #[command(subcommand)]
    Record(RecordCommands),

    /// Export saved records
    Export(ExportArgs),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Step-by-step interactive calculator
    #[command(alias = "i")]
    Interactive,

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TrueWagePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Calc(args)) => {
            handle_calc_command(&storage, &settings, args)?;
        }
        Some(Commands::Quick(args)) => {
            handle_quick_command(&storage, &settings, args)?;
        }
        Some(Commands::Project(args)) => {
            handle_project_command(&storage, &settings, args)?;
        }
        Some(Commands::Record(cmd)) => {
            handle_record_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&storage, args)?;
        }
        Some(Commands::Audit { limit }) => {
            handle_audit_command(&storage, limit)?;
        }
        Some(Commands::Interactive) => {
            truewage_cli::wizard::run(&storage, &settings)?;
        }
        Some(Commands::Init) => {
            println!("Initializing TrueWage at: {}", paths.base_dir().display());
            initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'truewage interactive' for a guided calculation.");
        }
        Some(Commands::Config) => {
            let engine = &settings.engine;
            println!("TrueWage Configuration");
            println!("======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!("(Override with {})", DATA_DIR_ENV);
            println!();
            println!("Settings:");
            println!("  Default pay frequency: {}", settings.default_frequency.description());
            println!("  Currency symbol:       {}", settings.currency_symbol);
            println!();
            println!("Engine:");
            println!("  Work weeks per year:        {}", engine.work_weeks_per_year);
            println!("  Weeks per month:            {}", engine.weeks_per_month);
            println!("  Labor hours per day:        {}", engine.affordability_hours_per_day);
            println!("  Labor days per week:        {}", engine.affordability_days_per_week);
            println!("  IRS mileage rate:           ${:.2}/mile", engine.irs_mileage_rate);
            println!("  Quick maintenance estimate: ${:.2}/mile", engine.quick_maintenance_per_mile);
        }
        None => {
            println!("TrueWage - what you really earn per hour");
            println!();
            println!("Run 'truewage --help' for usage information.");
            println!("Run 'truewage interactive' for a guided calculation.");
        }
    }

    Ok(())
}
