#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use effectif::{
    io,
    model::{Demand, WeekLabels},
    planner::{PlanError, Planner},
    report::{ReportRenderer, TextReport},
    solver::GoodLpSolver,
    storage::{JsonStorage, Storage},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de dimensionnement d'effectif (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON du dernier plan calculé
    #[arg(long, global = true, default_value = "plan.json")]
    plan: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Calculer le plan d'effectif minimal pour une demande
    Solve {
        /// Demande inline : "31,45,40,40,48,30,25" (7 valeurs)
        #[arg(long)]
        demand: Option<String>,
        /// Demande depuis un CSV `day,demand` (7 lignes)
        #[arg(long)]
        csv: Option<String>,
        /// Libellés des jours : "Monday,Tuesday,..." (7 valeurs)
        #[arg(long)]
        labels: Option<String>,
        /// Export JSON du plan (optionnel)
        #[arg(long)]
        out_json: Option<String>,
        /// Export CSV de la matrice de couverture (optionnel)
        #[arg(long)]
        coverage_csv: Option<String>,
        /// Export CSV de la synthèse journalière (optionnel)
        #[arg(long)]
        summary_csv: Option<String>,
    },

    /// Réafficher le dernier plan calculé
    Show,

    /// Vérifier que la couverture atteint la demande chaque jour
    Check,

    /// Exporter le dernier plan calculé
    Export {
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        coverage_csv: Option<String>,
        #[arg(long)]
        summary_csv: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.plan)?;

    let code = match cli.cmd {
        Commands::Solve {
            demand,
            csv,
            labels,
            out_json,
            coverage_csv,
            summary_csv,
        } => {
            let (csv_labels, demand) = match (demand, csv) {
                (Some(_), Some(_)) => bail!("provide either --demand or --csv, not both"),
                (Some(raw), None) => (None, parse_demand(&raw)?),
                (None, Some(path)) => {
                    let (labels, demand) = io::import_demand_csv(path)?;
                    (Some(labels), demand)
                }
                (None, None) => bail!("provide a demand with --demand or --csv"),
            };
            let labels = match labels {
                Some(raw) => parse_labels(&raw)?,
                None => csv_labels.unwrap_or_default(),
            };

            let planner = Planner::new();
            let plan = planner.plan(&demand, labels, &GoodLpSolver)?;

            println!("{}", TextReport.render(&plan));

            if let Some(path) = out_json {
                io::export_plan_json(path, &plan)?;
            }
            if let Some(path) = coverage_csv {
                io::export_coverage_csv(path, &plan)?;
            }
            if let Some(path) = summary_csv {
                io::export_summary_csv(path, &plan)?;
            }
            storage.save(&plan)?;
            0
        }
        Commands::Show => {
            let plan = storage.load()?;
            println!("{}", TextReport.render(&plan));
            0
        }
        Commands::Check => {
            let plan = storage.load()?;
            let deficits = plan.deficits();
            if deficits.is_empty() {
                println!("OK: demand covered every day");
                0
            } else {
                eprintln!("Found {} day(s) in deficit", deficits.len());
                for d in deficits {
                    eprintln!(
                        "{}: demand {} supply {} slack {}",
                        plan.labels.get(d.day),
                        d.demand,
                        d.supply,
                        d.slack
                    );
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
        Commands::Export {
            out_json,
            coverage_csv,
            summary_csv,
        } => {
            let plan = storage.load()?;
            if let Some(path) = out_json {
                io::export_plan_json(path, &plan)?;
            }
            if let Some(path) = coverage_csv {
                io::export_coverage_csv(path, &plan)?;
            }
            if let Some(path) = summary_csv {
                io::export_summary_csv(path, &plan)?;
            }
            0
        }
    };

    std::process::exit(code);
}

fn parse_demand(raw: &str) -> Result<Demand> {
    let mut values = Vec::new();
    for chunk in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let v: i64 = chunk
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid demand value: {chunk}"))?;
        values.push(v);
    }
    Ok(Demand::from_signed(&values).map_err(PlanError::InvalidDemand)?)
}

fn parse_labels(raw: &str) -> Result<WeekLabels> {
    let labels: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    Ok(WeekLabels::new(labels).map_err(PlanError::InvalidLabels)?)
}
