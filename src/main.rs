// Wed Feb 4 2026 - Alex

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use log::LevelFilter;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use xpa_offset_generator::ui::banner::{Banner, BannerStyle};
use xpa_offset_generator::{Config, Generator, GeneratorError};

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "XPA binding constants generator", long_about = None)]
struct Args {
    /// Output file for the generated constants; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write a JSON dump of the field descriptors
    #[arg(long)]
    json: Option<PathBuf>,

    /// Override the dynamic library path emitted into the output
    #[arg(long)]
    library: Option<String>,

    #[arg(short, long)]
    verbose: bool,

    #[arg(long)]
    no_banner: bool,

    /// Skip the library linkage probe even when built with native-probe
    #[arg(long)]
    skip_probe: bool,
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .init();

    if !args.no_banner {
        Banner::new("XPA Offset Generator")
            .with_subtitle("ABI introspection for the Julia binding")
            .with_version(env!("CARGO_PKG_VERSION"))
            .with_style(BannerStyle::Box)
            .print();
    }

    let mut config = Config::default();
    config.output_file = args.output.clone();
    config.json_file = args.json.clone();
    config.skip_probe = args.skip_probe;
    config.enable_verbose_output = args.verbose;
    if let Some(library) = args.library {
        config.library_path = library;
    }

    if let Err(e) = config.validate() {
        eprintln!("{} Invalid configuration: {}", "[!]".red(), e);
        std::process::exit(1);
    }

    let generator = build_generator(config.clone());

    if let Err(e) = run(&generator, &config) {
        eprintln!("{} {}", "[!]".red(), e);
        std::process::exit(1);
    }

    if let Some(output) = &config.output_file {
        eprintln!("{} Constants written to: {}", "[+]".green(), output.display());
    }
    if let Some(json) = &config.json_file {
        eprintln!("{} Descriptor dump written to: {}", "[+]".green(), json.display());
    }
}

#[cfg(feature = "native-probe")]
fn build_generator(config: Config) -> Generator {
    use xpa_offset_generator::xpa::probe::NativeProbe;

    let skip = config.skip_probe;
    let generator = Generator::new(config);
    if skip {
        generator
    } else {
        generator.with_probe(Box::new(NativeProbe))
    }
}

#[cfg(not(feature = "native-probe"))]
fn build_generator(config: Config) -> Generator {
    Generator::new(config)
}

fn run(generator: &Generator, config: &Config) -> anyhow::Result<()> {
    match &config.output_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            emit(generator, &mut writer)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            emit(generator, &mut writer)?;
            writer.flush()?;
        }
    }

    if let Some(json) = &config.json_file {
        generator
            .generate_json(json)
            .with_context(|| format!("failed to write {}", json.display()))?;
    }

    Ok(())
}

fn emit(generator: &Generator, writer: &mut dyn Write) -> anyhow::Result<()> {
    generator.generate(writer).map_err(|e| match e {
        GeneratorError::LinkageValidation { .. } => {
            anyhow::anyhow!("{} (offsets cannot be trusted, nothing emitted)", e)
        }
        other => anyhow::anyhow!(other),
    })
}
