#![forbid(unsafe_code)]
use anyhow::Result;
use rotaplan::{
    io,
    model::EmployeeId,
    render::{ScheduleRenderer, TextRenderer},
    scheduler::{submit_schedule, ScheduleOptions, Scheduler},
    storage::{JsonDirSource, JsonFileSink},
};
use clap::{Parser, Subcommand};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de rotation d'équipes (semaines 23 à 26)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Répertoire des fichiers JSON d'entrée
    #[arg(long, global = true, default_value = "data")]
    data: String,

    /// Format des dates de début de semaine
    #[arg(long, global = true, default_value = "%Y/%m/%d")]
    date_format: String,

    /// Nom de la règle d'effectif par shift
    #[arg(long, global = true, default_value = rotaplan::model::EMPLOYEES_PER_SHIFT)]
    rule: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lister les employés (ordre de rotation)
    Employees,

    /// Afficher le calendrier d'un employé
    Show {
        #[arg(long)]
        employee: i64,
        /// Sortie JSON au lieu du texte
        #[arg(long)]
        json: bool,
        /// Export CSV des évènements (optionnel)
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Vérifier la couverture des shifts
    Check,

    /// Soumettre le planning complet
    Submit {
        #[arg(long)]
        out: String,
        /// Copie JSON lisible (optionnelle)
        #[arg(long)]
        pretty_copy: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init();
    }

    let source = JsonDirSource::open(&cli.data)?;
    let opts = ScheduleOptions {
        rule_name: cli.rule,
        date_format: cli.date_format,
    };
    let scheduler = Scheduler::with_options(&source, opts);

    let code = match cli.cmd {
        Commands::Employees => {
            for e in scheduler.list_employees()? {
                println!("{} | {}", e.id, e.name);
            }
            0
        }
        Commands::Show {
            employee,
            json,
            out_csv,
        } => {
            let renderer = TextRenderer;
            match scheduler.get_schedule(EmployeeId::new(employee)) {
                Ok(view) => {
                    if let Some(path) = out_csv {
                        io::export_events_csv(path, &view.events)?;
                    }
                    if json {
                        println!("{}", serde_json::to_string_pretty(&view)?);
                    } else {
                        print!("{}", renderer.render(&view));
                    }
                    0
                }
                Err(err) => {
                    eprint!("{}", renderer.render_error(&err));
                    1
                }
            }
        }
        Commands::Check => {
            let plan = scheduler.build_schedule()?;
            println!(
                "{} per shift: {}/{} shifts scheduled",
                plan.staff_count, plan.actual_shifts, plan.required_shifts
            );
            match plan.note {
                Some(note) => {
                    eprintln!("{note}");
                    // Code 2 = WARNING/INCOMPLETE
                    2
                }
                None => {
                    println!("OK: full coverage");
                    0
                }
            }
        }
        Commands::Submit { out, pretty_copy } => {
            let plan = scheduler.build_schedule()?;
            if let Some(path) = pretty_copy {
                io::export_schedule_json(path, &plan.weeks)?;
            }
            let response = submit_schedule(&plan, &JsonFileSink::new(&out))?;
            println!("{response}");
            if let Some(note) = plan.note {
                eprintln!("{note}");
            }
            0
        }
    };

    std::process::exit(code);
}
