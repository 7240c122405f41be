use std::io;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use log::LevelFilter;

use watermark_blend::blending::EdgeMode;
use watermark_blend::prompt::{gather_job, JobOptions, Prompter};

#[derive(Parser)]
#[command(
    name = "watermark",
    about = "Blend a watermark onto an image",
    version,
    after_help = "Any input not given as a flag is asked for interactively on stdin.\n\n\
                  Example: watermark --image photo.png --watermark logo.png \\\n\
                  \x20        --weight 40 --placement grid -o marked.jpg"
)]
struct Cli {
    /// Base image file
    #[arg(long)]
    image: Option<PathBuf>,

    /// Watermark image file (must not be larger than the base image)
    #[arg(long)]
    watermark: Option<PathBuf>,

    /// Use the watermark's alpha channel (only for watermarks with alpha)
    #[arg(long)]
    use_alpha: Option<bool>,

    /// Transparency color "R G B", or "none" (only for watermarks without alpha)
    #[arg(long, value_name = "R G B")]
    transparency_color: Option<String>,

    /// Watermark weight in percent (0-100)
    #[arg(long)]
    weight: Option<String>,

    /// Placement method: single or grid
    #[arg(long)]
    placement: Option<String>,

    /// Watermark position "X Y" for single placement
    #[arg(long, value_name = "X Y")]
    position: Option<String>,

    /// Output file (.jpg or .png)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Blend one extra column and row past the watermark's right and bottom edges
    #[arg(long)]
    legacy_edge: bool,

    /// Enable verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Error
        } else {
            LevelFilter::Warn
        }
    }

    fn job_options(self) -> JobOptions {
        JobOptions {
            image: self.image,
            watermark: self.watermark,
            use_alpha: self.use_alpha,
            transparency_color: self.transparency_color,
            weight: self.weight,
            placement: self.placement,
            position: self.position,
            output: self.output,
            edge: if self.legacy_edge {
                EdgeMode::Inclusive
            } else {
                EdgeMode::Exclusive
            },
        }
    }
}

/// Printed on success regardless of the log level.
fn confirmation(path: &Path) -> String {
    format!("The watermarked image {} has been created.", path.display())
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let opts = cli.job_options();
    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());

    let result = gather_job(&mut prompter, &opts).and_then(|job| {
        let path = job.run()?.to_path_buf();
        Ok(path)
    });

    match result {
        Ok(path) => println!("{}", confirmation(&path)),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
