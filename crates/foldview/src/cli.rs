use super::commands;
use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use foldview_client::{PredictorConfig, DEFAULT_TIMEOUT_SECS, ESMFOLD_ENDPOINT};
use foldview_core::{ExampleProtein, InputSource};
use foldview_viewer::{ColorScheme, Representation, ViewerStyle};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Exactly one way of supplying the sequence.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct InputArgs {
    /// Protein sequence in one-letter amino acid code
    #[arg(short, long)]
    sequence: Option<String>,

    /// FASTA or plain-text file (.fasta, .fa, .txt); header lines are skipped
    #[arg(short, long)]
    fasta: Option<PathBuf>,

    /// Example protein
    #[arg(short, long, value_enum)]
    example: Option<ExampleProtein>,
}

impl InputArgs {
    fn source(&self) -> Result<InputSource> {
        match (&self.sequence, &self.fasta, &self.example) {
            (Some(sequence), _, _) => Ok(InputSource::Text(sequence.clone())),
            (_, Some(path), _) => Ok(InputSource::FastaFile(path.clone())),
            (_, _, Some(example)) => Ok(InputSource::Example(*example)),
            _ => Err(anyhow!("no input given")),
        }
    }
}

#[derive(Args, Debug)]
struct ViewArgs {
    /// Molecular representation
    #[arg(long, value_enum, default_value_t = Representation::Cartoon)]
    representation: Representation,

    /// Coloring
    #[arg(long, value_enum, default_value_t = ColorScheme::Spectrum)]
    color: ColorScheme,

    /// Rotate the structure continuously
    #[arg(long)]
    spin: bool,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 500)]
    height: u32,
}

impl ViewArgs {
    fn style(&self) -> ViewerStyle {
        ViewerStyle::builder()
            .representation(self.representation)
            .color(self.color)
            .spin(self.spin)
            .width(self.width)
            .height(self.height)
            .build()
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Predict a structure and write an HTML report plus the PDB file
    Predict {
        #[command(flatten)]
        input: InputArgs,

        /// Directory for report.html, viewer.html and predicted_structure.pdb
        #[arg(short, long, default_value = "foldview-output")]
        output_dir: PathBuf,

        /// Prediction service URL
        #[arg(long, env = "FOLDVIEW_ENDPOINT", default_value = ESMFOLD_ENDPOINT)]
        endpoint: String,

        /// Maximum wait for the prediction service
        #[arg(long, env = "FOLDVIEW_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
        timeout_secs: u64,

        #[command(flatten)]
        view: ViewArgs,
    },
    /// Validate a sequence and print its composition statistics
    Analyze {
        #[command(flatten)]
        input: InputArgs,

        /// Print the profile as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render a local structure file into a standalone viewer page
    Render {
        /// Structure file (PDB format)
        #[arg(short, long)]
        input: PathBuf,

        /// Output HTML file
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        view: ViewArgs,
    },
    /// List the example proteins
    Examples,
    /// About ESMFold
    About,
    /// Usage instructions, tips and troubleshooting
    Guide,
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Predict {
                input,
                output_dir,
                endpoint,
                timeout_secs,
                view,
            } => {
                let config = PredictorConfig::builder()
                    .endpoint(endpoint)
                    .timeout_secs(timeout_secs)
                    .build();
                commands::predict::execute(input.source()?, output_dir, config, view.style())
            }
            Commands::Analyze { input, json } => commands::analyze::execute(input.source()?, json),
            Commands::Render {
                input,
                output,
                view,
            } => commands::render::execute(input, output, view.style()),
            Commands::Examples => commands::info::examples(),
            Commands::About => commands::info::about(),
            Commands::Guide => commands::info::guide(),
        }
    }
}
