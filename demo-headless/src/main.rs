use clap::{Parser, ValueEnum};
use moderator_chem_core::{
    mev_per_gram_per_second_to_mgy_per_second, HydrogenMethod, ModeratorConditions,
    ModeratorTable, MolesPerJoule, ProductionReport, YieldConstants,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Hydrogen and polymer production in a liquid methane moderator
#[derive(Parser, Debug)]
#[command(name = "moderator-report")]
#[command(about = "Radiolysis production rates for a CH4 moderator", long_about = None)]
struct Args {
    /// JSON file with moderator conditions (defaults to the ISIS reference point)
    #[arg(short, long)]
    conditions: Option<PathBuf>,

    /// Methane volume in cm3
    #[arg(long)]
    volume: Option<f64>,

    /// Methane mass in g
    #[arg(long)]
    mass: Option<f64>,

    /// Methane specific gravity
    #[arg(long)]
    sg: Option<f64>,

    /// Dose rate in MGy/s
    #[arg(short, long)]
    dose_rate: Option<f64>,

    /// Polymer chain length n of (-CH2-)n
    #[arg(short = 'n', long)]
    chain_length: Option<u32>,

    /// Radical G-value in mol/J
    #[arg(long, default_value_t = 0.66e-6)]
    radical_g: f64,

    /// Polymer G-value in mol/J
    #[arg(long, default_value_t = 0.22e-6)]
    polymer_g: f64,

    /// Hydrogen estimate to print
    #[arg(short, long, value_enum, default_value_t = MethodArg::Both)]
    method: MethodArg,

    /// Moderator data table (CSV with an exported index column)
    #[arg(short, long)]
    table: Option<PathBuf>,

    /// Energy deposition column (MeV/g/s) to convert to a dose rate
    #[arg(long, requires = "table")]
    column: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MethodArg {
    Evans,
    Energy,
    Both,
}

impl MethodArg {
    fn methods(self) -> &'static [HydrogenMethod] {
        match self {
            MethodArg::Evans => &[HydrogenMethod::Evans],
            MethodArg::Energy => &[HydrogenMethod::EnergyDeposition],
            MethodArg::Both => &HydrogenMethod::ALL,
        }
    }
}

fn build_conditions(args: &Args) -> Result<ModeratorConditions, String> {
    let mut conditions = match &args.conditions {
        Some(path) => ModeratorConditions::from_json_file(path).map_err(|e| e.to_string())?,
        None => ModeratorConditions::isis_reference(),
    };

    if let Some(volume) = args.volume {
        conditions.ch4_volume = volume.into();
    }
    if let Some(mass) = args.mass {
        conditions.ch4_mass = mass.into();
    }
    if let Some(sg) = args.sg {
        conditions.specific_gravity = sg.into();
    }
    if let Some(dose_rate) = args.dose_rate {
        conditions = conditions.with_dose_rate(dose_rate);
    }
    if let Some(n) = args.chain_length {
        conditions = conditions.with_chain_length(n);
    }

    Ok(conditions)
}

fn report_table(path: &Path, column: Option<&str>) -> Result<(), String> {
    let table = ModeratorTable::load(path).map_err(|e| e.to_string())?;
    println!(
        "\nTable {}: {} rows x {} columns",
        path.display(),
        table.row_count(),
        table.column_count()
    );
    println!("Columns: {}", table.headers().join(", "));

    if let Some(column) = column {
        let energy = table.column_f64(column).map_err(|e| e.to_string())?;
        let doses: Vec<f64> = energy
            .iter()
            .copied()
            .filter(|e| !e.is_nan())
            .map(mev_per_gram_per_second_to_mgy_per_second)
            .collect();

        if doses.is_empty() {
            println!("Column '{column}' has no values");
        } else {
            let mean = doses.iter().sum::<f64>() / doses.len() as f64;
            let max = doses.iter().copied().fold(f64::MIN, f64::max);
            println!("'{column}' as dose rate: mean {mean:e} MGy/s, max {max:e} MGy/s");
        }
    }

    Ok(())
}

fn run(args: &Args) -> Result<(), String> {
    let conditions = build_conditions(args)?;
    let constants = YieldConstants {
        radical_g_value: MolesPerJoule::new(args.radical_g),
        polymer_g_value: MolesPerJoule::new(args.polymer_g),
    };
    info!(conditions = %conditions.name, "evaluating production rates");

    let report = ProductionReport::evaluate(&conditions, &constants);
    println!("{report}");

    println!("\nHydrogen production:");
    for &method in args.method.methods() {
        println!("  {:<18} {:e} cm3/s", method.name(), report.hydrogen(method));
    }

    let density_mass = conditions.density_mass();
    if (*density_mass - *conditions.ch4_mass).abs() > 1e-9 * conditions.ch4_mass.abs() {
        println!(
            "  note: volume x SG = {:.1} g differs from the charge mass {:.1} g",
            *density_mass, *conditions.ch4_mass
        );
    }

    if let Some(path) = &args.table {
        report_table(path, args.column.as_deref())?;
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
