mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use formatforge::{config, convert};
use formatforge_common::{catalog, classify};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "formatforge=trace,formatforge_av=trace,formatforge_common=debug".to_string()
        } else {
            "formatforge=warn,formatforge_av=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Inspect { file, json } => inspect_file(&file, json),
        Commands::Options { file, json } => show_options(&file, json),
        Commands::Convert {
            input,
            output,
            to,
            quality,
        } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(run_convert(
                input,
                output,
                &to,
                quality,
                cli.config.as_deref(),
            ))
        }
        Commands::CheckTools => check_tools(cli.config.as_deref()),
        Commands::Version => {
            println!("formatforge {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn inspect_file(file: &Path, json: bool) -> Result<()> {
    let detected = classify::classify(file);

    if json {
        println!("{}", serde_json::to_string_pretty(&detected)?);
        return Ok(());
    }

    println!("File: {}", file.display());
    if let Ok(meta) = std::fs::metadata(file) {
        println!("Size: {}", convert::format_file_size(meta.len()));
    }
    println!(
        "{} {} \u{2022} {} Format",
        detected.icon,
        detected.category.label(),
        detected.format.to_uppercase()
    );
    println!("{}", detected.description);

    Ok(())
}

fn show_options(file: &Path, json: bool) -> Result<()> {
    let detected = classify::classify(file);
    let options = catalog::recommend(detected.category, &detected.format);

    if json {
        println!("{}", serde_json::to_string_pretty(&options)?);
        return Ok(());
    }

    println!(
        "{} {} ({})",
        detected.icon,
        file.display(),
        detected.description
    );

    if options.is_empty() {
        println!("No conversion targets for this file type.");
        return Ok(());
    }

    println!("\nRecommended:");
    for format in &options.recommended {
        println!("  \u{2b50} {}", format.to_uppercase());
    }

    println!("\nAll formats:");
    for format in &options.all_formats {
        println!("  {}", format.to_uppercase());
    }

    Ok(())
}

fn check_tools(config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let converter =
        formatforge_av::tools::locate_converter_with(config.tools.ffmpeg_path.as_deref());
    let info = formatforge_av::tools::converter_info_at(&converter);

    let status = if info.available { "\u{2713}" } else { "\u{2717}" };
    print!("{} {}", status, info.name);
    if let Some(ref version) = info.version {
        print!(" ({})", version);
    }
    println!(" - {}", info.path.display());

    if !info.available {
        println!("\nThe converter is missing. Install FFmpeg from https://ffmpeg.org/download.html");
        println!("and make sure it is on your PATH.");
    }

    Ok(())
}

async fn run_convert(
    input: PathBuf,
    output: Option<PathBuf>,
    target: &str,
    quality: Option<u8>,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;

    if !input.exists() {
        anyhow::bail!("Input file does not exist: {:?}", input);
    }

    let detected = classify::classify(&input);
    if !convert::is_real_conversion(detected.category, target) {
        anyhow::bail!(
            "only video to GIF conversion is implemented; {} ({}) to {} is not supported",
            input.display(),
            detected.description,
            target
        );
    }

    let quality = quality.unwrap_or(config.conversion.default_quality);
    if quality > 100 {
        anyhow::bail!("quality must be between 0 and 100, got {quality}");
    }

    let converter =
        formatforge_av::tools::locate_converter_with(config.tools.ffmpeg_path.as_deref());
    let work_path = convert::default_output_path(&input, config.conversion.output_dir.as_deref());

    let job = convert::ConversionJob::new(input, work_path.clone(), quality);

    // Ctrl-C cancels the job and kills the encoder.
    let cancel = job.cancel_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("cancellation requested");
            cancel.cancel();
        }
    });

    // Progress flows through a channel so rendering never blocks the reader.
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<u8>();
    let printer = tokio::spawn(async move {
        while let Some(pct) = rx.recv().await {
            print!("\r{:>3}%  {}", pct, convert::phase_detail(pct));
            let _ = std::io::stdout().flush();
        }
    });

    println!("Converting to {}...", target.to_uppercase());
    let result = job
        .run(&converter, move |pct| {
            let _ = tx.send(pct);
        })
        .await;
    let _ = printer.await;

    match result {
        Ok(()) => {
            println!("\r100%  Done.                    ");
            let final_path = match output {
                Some(dest) => {
                    convert::deliver(&work_path, &dest)?;
                    dest
                }
                None => work_path,
            };
            println!("Converted file: {}", final_path.display());
            Ok(())
        }
        Err(e) => {
            println!();
            Err(e.into())
        }
    }
}
