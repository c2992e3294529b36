//! vocstudio: Pascal VOC to Label Studio converter.
//!
//! vocstudio reads a directory of Pascal VOC XML annotation files (one per
//! image) and writes a single Label Studio task JSON file plus a matching
//! labeling config. Boxes are converted from VOC's pixel corners to Label
//! Studio's percentage-of-image rectangles.
//!
//! # Modules
//!
//! - [`ir`]: Annotation records, box types and the VOC / Label Studio adapters
//! - [`conversion`]: The end-to-end conversion pipeline and its report
//! - [`label_config`]: Labeling-config generation
//! - [`error`]: Error types for vocstudio operations

pub mod conversion;
pub mod error;
pub mod ir;
pub mod label_config;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

pub use conversion::{convert_voc_to_ls, ConversionReport, ConvertOptions};
pub use error::VocStudioError;
use ir::io_label_studio_json::OutType;

/// The vocstudio CLI application.
#[derive(Parser)]
#[command(name = "vocstudio")]
#[command(version, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Convert a directory of Pascal VOC XML files to Label Studio JSON.
    Voc(VocArgs),
}

/// Arguments for the voc subcommand.
#[derive(clap::Args)]
struct VocArgs {
    /// Directory with Pascal VOC XML annotation files.
    #[arg(short, long)]
    input: PathBuf,

    /// Output file with Label Studio JSON tasks.
    #[arg(short, long, default_value = "output.json")]
    output: PathBuf,

    /// Object name from the Label Studio labeling config.
    #[arg(long, default_value = conversion::DEFAULT_TO_NAME)]
    to_name: String,

    /// Control tag name from the Label Studio labeling config.
    #[arg(long, default_value = conversion::DEFAULT_FROM_NAME)]
    from_name: String,

    /// Annotation type.
    #[arg(long, value_enum, default_value_t = OutTypeArg::Annotations)]
    out_type: OutTypeArg,

    /// Root URL path where images will be hosted, e.g. http://example.com/images.
    #[arg(long, default_value = conversion::DEFAULT_IMAGE_ROOT_URL)]
    image_root_url: String,

    /// Skip annotation files without objects instead of emitting empty tasks.
    #[arg(long)]
    skip_empty: bool,
}

/// CLI spelling of [`OutType`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutTypeArg {
    Annotations,
    Predictions,
}

impl From<OutTypeArg> for OutType {
    fn from(arg: OutTypeArg) -> Self {
        match arg {
            OutTypeArg::Annotations => OutType::Annotations,
            OutTypeArg::Predictions => OutType::Predictions,
        }
    }
}

/// Run the vocstudio CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), VocStudioError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Voc(args)) => run_voc(args),
        None => {
            println!("vocstudio {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Convert Pascal VOC XML annotations into Label Studio tasks.");
            println!();
            println!("Run 'vocstudio --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the voc subcommand.
fn run_voc(args: VocArgs) -> Result<(), VocStudioError> {
    let opts = ConvertOptions {
        to_name: args.to_name,
        from_name: args.from_name,
        out_type: args.out_type.into(),
        image_root_url: args.image_root_url,
        skip_empty: args.skip_empty,
    };

    let report = convert_voc_to_ls(&args.input, &args.output, &opts)?;
    print!("{report}");
    Ok(())
}
