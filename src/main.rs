mod cli;

use std::fmt::Write as FmtWrite;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use cli::{Commands, OutputFormat};
use nexp_lib::{
    export_selection, handoff_url, resolve_export_dir, write_envelope, Config, DocumentSnapshot,
    ErrorOutput, ExportSummary, NexpError, NexpOutput, NEXP_OUTPUT_VERSION,
};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> ExitCode {
    let args = cli::parse();
    init_tracing(args.verbose);

    match args.command {
        Commands::Export {
            document,
            out_dir,
            pretty,
            format,
            output,
        } => run_export(
            args.config.as_deref(),
            args.verbose,
            document,
            out_dir,
            pretty,
            format,
            output,
        ),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[allow(clippy::too_many_arguments)]
fn run_export(
    config_path: Option<&Path>,
    verbose: bool,
    document: PathBuf,
    out_dir: Option<PathBuf>,
    pretty: bool,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err, format, output.clone()),
    };
    let pretty = pretty || config.pretty;

    let doc = match DocumentSnapshot::from_json_file(&document) {
        Ok(doc) => doc,
        Err(err) => return render_error(err, format, output.clone()),
    };

    let export_dir =
        out_dir.unwrap_or_else(|| resolve_export_dir(config.export_root.as_deref()));
    if verbose {
        eprintln!(
            "Exporting {} selected layer(s) to {}…",
            doc.selection.len(),
            export_dir.display()
        );
    }

    let report = match export_selection(&doc, &export_dir) {
        Ok(report) => report,
        Err(err) => return render_error(err, format, output.clone()),
    };

    let export_file = match write_envelope(&report.envelope, &export_dir, pretty) {
        Ok(path) => path,
        Err(err) => return render_error(err, format, output.clone()),
    };

    let page_layer_count = report
        .envelope
        .pages
        .as_ref()
        .map(|pages| pages.iter().map(|page| page.layers.len()).sum())
        .unwrap_or(0);
    let summary = ExportSummary {
        version: NEXP_OUTPUT_VERSION.to_string(),
        handoff_url: handoff_url(&export_dir),
        export_dir,
        export_file,
        component_count: report.envelope.components.len(),
        page_layer_count,
        asset_count: report.assets_written,
        unknown_layer_count: report.unknown_layers,
    };

    let body = NexpOutput::Export(summary);
    if let Err(err) = write_output(&body, format, output.clone()) {
        return render_error(NexpError::Config(err.to_string()), format, output);
    }
    ExitCode::SUCCESS
}

fn load_config(path: Option<&Path>) -> Result<Config, NexpError> {
    let cfg = match path {
        Some(p) => Config::from_toml_file(p)
            .map_err(|e| NexpError::Config(format!("Failed to read config {}: {}", p.display(), e)))?,
        None => Config::default(),
    };
    cfg.validate()?;
    Ok(cfg)
}

fn write_output(
    body: &NexpOutput,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => {
            let content = serde_json::to_string(body)?;
            if let Some(path) = output {
                std::fs::write(path, content)?;
            } else {
                println!("{content}");
            }
        }
        OutputFormat::Pretty => write_pretty_output(body, output.as_deref())?,
    }
    Ok(())
}

fn write_pretty_output(body: &NexpOutput, output: Option<&Path>) -> std::io::Result<()> {
    let stdout_is_tty = std::io::stdout().is_terminal();
    let use_human = output.is_none() && stdout_is_tty;

    if use_human {
        let content = format_pretty(body, true);
        println!("{content}");
        return Ok(());
    }

    // Non-tty or file output: keep JSON shape for pipelines/files.
    let content =
        serde_json::to_string_pretty(body).unwrap_or_else(|_| "{\"mode\":\"error\"}".to_string());
    if let Some(path) = output {
        std::fs::write(path, &content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}

fn render_error(err: NexpError, format: OutputFormat, output: Option<PathBuf>) -> ExitCode {
    let error_payload = err.to_payload();
    let payload = NexpOutput::Error(ErrorOutput {
        version: NEXP_OUTPUT_VERSION.to_string(),
        message: Some(error_payload.message.clone()),
        error: error_payload,
    });

    match format {
        OutputFormat::Json => {
            let content =
                serde_json::to_string(&payload).unwrap_or_else(|_| "{\"mode\":\"error\"}".into());
            if let Some(path) = output {
                if let Err(write_err) = std::fs::write(&path, &content) {
                    eprintln!("Failed to write error output: {}", write_err);
                    println!("{content}");
                }
            } else {
                println!("{content}");
            }
        }
        OutputFormat::Pretty => {
            if let Err(write_err) = write_pretty_output(&payload, output.as_deref()) {
                eprintln!("Failed to write error output: {}", write_err);
            }
        }
    }

    ExitCode::from(2)
}

fn format_pretty(body: &NexpOutput, colorize: bool) -> String {
    match body {
        NexpOutput::Export(out) => {
            let mut buf = String::new();
            let header = color("[EXPORT]", "32", colorize);
            writeln!(buf, "{} Selection exported", header).ok();
            writeln!(buf, "Export directory: {}", out.export_dir.display()).ok();
            writeln!(buf, "Envelope:         {}", out.export_file.display()).ok();
            writeln!(
                buf,
                "Contents:         {} component(s), {} page layer(s), {} asset(s)",
                out.component_count, out.page_layer_count, out.asset_count
            )
            .ok();
            if out.unknown_layer_count > 0 {
                let warn = color("[WARN]", "33", colorize);
                writeln!(
                    buf,
                    "{} {} layer(s) were not supported and exported as stubs",
                    warn, out.unknown_layer_count
                )
                .ok();
            }
            writeln!(buf, "Handoff URL:      {}", out.handoff_url).ok();
            buf
        }
        NexpOutput::Error(out) => {
            let mut buf = String::new();
            let header = color("[ERROR]", "31", colorize);
            let message = out
                .message
                .as_deref()
                .unwrap_or_else(|| out.error.message.as_str());
            writeln!(buf, "{} {}", header, message).ok();
            if let Some(remediation) = &out.error.remediation {
                writeln!(buf, "Hint: {}", remediation).ok();
            }
            buf
        }
    }
}

fn color(text: &str, code: &str, colorize: bool) -> String {
    if colorize {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}
