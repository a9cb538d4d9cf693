// src/cli.rs
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::app_log;
use crate::core::{ConfigManager, FsOps};
use crate::decompose;
use crate::inference::{GenerationSettings, InferenceClient};
use crate::pipeline::CoverLetterPipeline;
use crate::types::{ApplicantDetails, DetailsOverrides};
use crate::utils::{timestamped_path, validate_file_extension, HTML_EXTENSIONS};

const HTML_SUFFIX: &str = ".html";

#[derive(Parser)]
#[command(name = "cover-letter")]
#[command(about = "Turn an HTML job posting and résumé into a generated cover letter")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (defaults to $COVER_LETTER_CONFIG or ./config.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Also write JSON logs to this file
    #[arg(long, global = true, env = "COVER_LETTER_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create the asset and output directories
    Init,
    /// List job postings and résumés available for selection
    List,
    /// Print the structured JSON extracted from a job posting
    DecomposeJob { file: PathBuf },
    /// Print the structured JSON extracted from a résumé
    DecomposeResume { file: PathBuf },
    /// Print the raw labelled lists found in a document
    Associate {
        file: PathBuf,
        /// Also report keyword hits from the configured vocabulary
        #[arg(long)]
        vocabulary: bool,
    },
    /// Generate a cover letter
    Generate(GenerateArgs),
    /// Show or change generation settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Job posting: index from `list`, a path, or a file name in the jobs directory
    #[arg(long)]
    pub job: String,
    /// Résumé: index from `list`, a path, or a file name in the résumés directory
    #[arg(long)]
    pub resume: String,
    /// TOML file with applicant and company details
    #[arg(long)]
    pub details: Option<PathBuf>,
    #[command(flatten)]
    pub overrides: DetailsArgs,
    /// Where to write the letter (defaults to the configured output file)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
    /// Add a timestamp to the output file name
    #[arg(long)]
    pub timestamped: bool,
    #[arg(long)]
    pub max_new_tokens: Option<u32>,
    #[arg(long)]
    pub repetition_penalty: Option<f32>,
    /// Print the prompt instead of calling the model
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Default)]
pub struct DetailsArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub phone_number: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub company_address_1: Option<String>,
    #[arg(long)]
    pub company_address_2: Option<String>,
    #[arg(long)]
    pub job_title: Option<String>,
}

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print the current generation settings
    Show,
    /// Change and save generation settings
    Set {
        #[arg(long)]
        max_new_tokens: Option<u32>,
        #[arg(long)]
        repetition_penalty: Option<f32>,
        /// Raise max_new_tokens by 10
        #[arg(long, conflicts_with = "fewer_tokens")]
        more_tokens: bool,
        /// Lower max_new_tokens by 10
        #[arg(long)]
        fewer_tokens: bool,
        /// Raise repetition_penalty by 0.1
        #[arg(long, conflicts_with = "less_penalty")]
        more_penalty: bool,
        /// Lower repetition_penalty by 0.1
        #[arg(long)]
        less_penalty: bool,
    },
}

impl From<DetailsArgs> for DetailsOverrides {
    fn from(args: DetailsArgs) -> Self {
        Self {
            name: args.name,
            address: args.address,
            phone_number: args.phone_number,
            email: args.email,
            company: args.company,
            company_address_1: args.company_address_1,
            company_address_2: args.company_address_2,
            job_title: args.job_title,
        }
    }
}

pub async fn handle_command(cli: Cli) -> Result<()> {
    let config_path = cli.config.unwrap_or_else(ConfigManager::config_path);
    let config = ConfigManager::load_with_env(&config_path)?;

    match cli.command {
        Command::Init => {
            config.ensure_directories().await?;
            println!("✅ Ready:");
            println!("   Job postings: {}", config.paths.jobs_dir.display());
            println!("   Résumés:      {}", config.paths.resumes_dir.display());
            println!("   Output:       {}", config.paths.output_file.display());
        }

        Command::List => {
            print_listing("Job descriptions", &config.paths.jobs_dir).await?;
            print_listing("Resumes", &config.paths.resumes_dir).await?;
        }

        Command::DecomposeJob { file } => {
            let html = read_html(&file).await?;
            let json = decompose::decompose_job(&html);
            if decompose::is_empty_extraction(&json) {
                anyhow::bail!("Could not decompose job description: {}", file.display());
            }
            println!("{}", json);
        }

        Command::DecomposeResume { file } => {
            let html = read_html(&file).await?;
            let json = decompose::decompose_resume(&html, &config.vocabulary);
            if decompose::is_empty_extraction(&json) {
                anyhow::bail!("Could not decompose resume: {}", file.display());
            }
            println!("{}", json);
        }

        Command::Associate { file, vocabulary } => {
            let html = read_html(&file).await?;
            let vocabulary = vocabulary.then_some(&config.vocabulary);
            let pairs = decompose::labelled_lists(&html, vocabulary)
                .with_context(|| format!("Nothing to associate in {}", file.display()))?;
            println!("{}", decompose::to_pretty_json(&pairs)?);
        }

        Command::Generate(args) => generate(args, &config).await?,

        Command::Settings { action } => handle_settings(action, config, &config_path)?,
    }

    Ok(())
}

async fn read_html(path: &Path) -> Result<String> {
    validate_file_extension(path, HTML_EXTENSIONS)?;
    FsOps::read_file_safe(path).await
}

async fn print_listing(title: &str, dir: &Path) -> Result<()> {
    let files = FsOps::list_files_with_extension(dir, HTML_SUFFIX).await?;

    println!("{} ({}):", title, dir.display());
    if files.is_empty() {
        println!("  (none)");
    }
    for (index, file) in files.iter().enumerate() {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!("  {}: {}", index, name);
    }
    Ok(())
}

async fn generate(args: GenerateArgs, config: &ConfigManager) -> Result<()> {
    let job_path = FsOps::select_file(&config.paths.jobs_dir, &args.job, HTML_SUFFIX)
        .await
        .context("Invalid job description selection")?;
    let resume_path = FsOps::select_file(&config.paths.resumes_dir, &args.resume, HTML_SUFFIX)
        .await
        .context("Invalid resume selection")?;

    let details = match &args.details {
        Some(path) => ApplicantDetails::from_toml_file(path)?,
        None => ApplicantDetails::default(),
    }
    .apply(args.overrides.into());

    let settings = resolve_settings(
        config.inference.generation,
        args.max_new_tokens,
        args.repetition_penalty,
    )?;
    let client = InferenceClient::new(
        &config.inference.base_url,
        config.inference.timeout_seconds,
        settings,
    )?;
    let pipeline = CoverLetterPipeline::new(client, config.vocabulary.clone());

    if args.dry_run {
        let job_html = read_html(&job_path).await?;
        let resume_html = read_html(&resume_path).await?;
        let prepared = pipeline.prepare(&job_html, &resume_html, &details)?;
        println!("{}", prepared.prompt);
        return Ok(());
    }

    let mut output = args
        .output
        .unwrap_or_else(|| config.paths.output_file.clone());
    if args.timestamped {
        output = timestamped_path(&output);
    }

    app_log!(info, "Job description: {}", job_path.display());
    app_log!(info, "Resume: {}", resume_path.display());

    let written = pipeline
        .generate_to_file(&job_path, &resume_path, &details, &output)
        .await?;
    println!("✅ Cover letter saved to {}", written.display());
    Ok(())
}

fn resolve_settings(
    mut settings: GenerationSettings,
    max_new_tokens: Option<u32>,
    repetition_penalty: Option<f32>,
) -> Result<GenerationSettings> {
    if let Some(tokens) = max_new_tokens {
        settings.max_new_tokens = tokens;
    }
    if let Some(penalty) = repetition_penalty {
        settings.repetition_penalty = penalty;
    }
    settings.validate()?;
    Ok(settings)
}

fn handle_settings(action: SettingsAction, mut config: ConfigManager, path: &Path) -> Result<()> {
    match action {
        SettingsAction::Show => print_settings(&config.inference.generation),

        SettingsAction::Set {
            max_new_tokens,
            repetition_penalty,
            more_tokens,
            fewer_tokens,
            more_penalty,
            less_penalty,
        } => {
            let mut settings =
                resolve_settings(config.inference.generation, max_new_tokens, repetition_penalty)?;

            if more_tokens {
                settings.more_tokens();
            }
            if fewer_tokens {
                settings.fewer_tokens();
            }
            if more_penalty {
                settings.more_penalty();
            }
            if less_penalty {
                settings.less_penalty();
            }
            settings.validate()?;

            config.inference.generation = settings;
            config.save_to(path)?;
            print_settings(&settings);
        }
    }
    Ok(())
}

fn print_settings(settings: &GenerationSettings) {
    println!("Settings:");
    println!("  Max New Tokens: {}", settings.max_new_tokens);
    println!("  Repetition Penalty: {}", settings.repetition_penalty);
}
