use clap::{Parser, Subcommand};
use optativas::utils::{logger, validation::Validate};
use optativas::{AssignOutcome, AuditLog, CatalogEngine, CliConfig, JsonCatalogStore};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "optativas")]
#[command(about = "Elective course catalog: ranked search and seat-aware enrollment transfers")]
struct Cli {
    #[command(flatten)]
    config: CliConfig,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the course catalog
    List,
    /// Search the catalog (`word` matches, `word***` boosts, `!word` excludes)
    Search {
        #[arg(required = true)]
        query: Vec<String>,
    },
    /// Apply a transfer batch from a file, or stdin when omitted.
    /// The literal batch `TODO` clears every assignment.
    Assign {
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Add students ("name words... group", one per line) from a file or stdin
    AddStudents {
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Remove students by "name words... group" lines; `TODO` empties the roster
    RemoveStudents {
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Validate and install a replacement course catalog (JSON array)
    UploadCourses { file: PathBuf },
    /// Validate and install a replacement student roster (JSON array)
    UploadStudents { file: PathBuf },
}

fn read_input(file: Option<&PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => Ok(std::io::read_to_string(std::io::stdin())?),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.config.verbose);

    let config = match cli.config.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Could not load config file: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        std::process::exit(1);
    }

    let store = JsonCatalogStore::new(&config);
    let engine = CatalogEngine::new(store);
    let audit = AuditLog::new(Path::new(&config.data_dir).join(&config.audit_file));

    match cli.command {
        Command::List => {
            let courses = engine.list_courses().await?;
            if courses.is_empty() {
                println!("The catalog is empty.");
            }
            for course in &courses {
                println!(
                    "{} (instructor: {}, seats: {})",
                    course.name, course.instructor, course.capacity
                );
            }
        }
        Command::Search { query } => {
            let results = engine.search(&query.join(" ")).await?;
            if results.is_empty() {
                println!("No matching courses.");
            }
            for (i, course) in results.iter().enumerate() {
                println!("{}. {} — {}", i + 1, course.name, course.description);
            }
        }
        Command::Assign { file } => {
            let batch = read_input(file.as_ref())?;
            match engine.assign(&batch).await? {
                AssignOutcome::Cleared(n) => {
                    audit.record(&config.operator, &format!("cleared {} assignment(s)", n));
                    println!("Cleared {} assignment(s).", n);
                }
                AssignOutcome::Transferred(report) => {
                    audit.record(
                        &config.operator,
                        &format!("assigned {} student(s)", report.assigned),
                    );
                    println!("{} student(s) assigned.", report.assigned);
                    if !report.failures.is_empty() {
                        println!("Failures:");
                        for failure in &report.failures {
                            println!("  {}", failure);
                        }
                    }
                }
            }
        }
        Command::AddStudents { file } => {
            let text = read_input(file.as_ref())?;
            let report = engine.add_students(&text).await?;
            audit.record(&config.operator, &format!("added {} student(s)", report.changed));
            println!("{} student(s) added.", report.changed);
            for skipped in &report.skipped {
                println!("  skipped: {}", skipped);
            }
        }
        Command::RemoveStudents { file } => {
            let text = read_input(file.as_ref())?;
            let report = engine.remove_students(&text).await?;
            audit.record(&config.operator, &format!("removed {} student(s)", report.changed));
            println!("{} student(s) removed.", report.changed);
            for skipped in &report.skipped {
                println!("  skipped: {}", skipped);
            }
        }
        Command::UploadCourses { file } => {
            let data = std::fs::read_to_string(&file)?;
            let courses = serde_json::from_str(&data)?;
            let count = engine.replace_courses(courses).await?;
            audit.record(&config.operator, &format!("replaced catalog ({} courses)", count));
            println!("Catalog replaced: {} course(s).", count);
        }
        Command::UploadStudents { file } => {
            let data = std::fs::read_to_string(&file)?;
            let students = serde_json::from_str(&data)?;
            let count = engine.replace_students(students).await?;
            audit.record(&config.operator, &format!("replaced roster ({} students)", count));
            println!("Roster replaced: {} student(s).", count);
        }
    }

    Ok(())
}
