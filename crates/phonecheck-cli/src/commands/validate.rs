use crate::commands::{build_classifier, print_json, Classifier, Context, PipelineArgs};
use crate::error::invalid_input;
use crate::summary_fmt::render_summary;
use crate::util::{display_path, now_rfc3339};
use anyhow::{Context as _, Result};
use clap::Args;
use phonecheck_config::parse_delimiter;
use phonecheck_core::{BatchSummary, Progress};
use phonecheck_table::{annotate, read_table_file, write_table, ColumnChoice, OutputColumns};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_OUTPUT_NAME: &str = "validated_numbers.csv";

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// CSV, Excel or OpenDocument file with a header row
    pub input: PathBuf,
    /// Phone column: header name or 1-based number
    #[arg(long, short)]
    pub column: Option<String>,
    /// Annotated CSV destination (`-` for stdout)
    #[arg(long, short)]
    pub out: Option<PathBuf>,
    /// Field delimiter for input and output
    #[arg(long)]
    pub delimiter: Option<String>,
    /// Report progress on stderr
    #[arg(long)]
    pub progress: bool,
    #[command(flatten)]
    pub pipeline: PipelineArgs,
}

#[derive(Debug, Serialize)]
struct ValidateReport {
    input: String,
    output: String,
    column: String,
    generated_at: String,
    valid_percent: f64,
    skipped_table_rows: usize,
    summary: BatchSummary,
}

pub fn validate(ctx: &Context<'_>, args: ValidateArgs) -> Result<()> {
    let out = args.out.as_deref().filter(|path| *path != Path::new("-"));
    if ctx.json && out.is_none() {
        return Err(invalid_input(format!(
            "--json needs --out; try --out {DEFAULT_OUTPUT_NAME}"
        )));
    }

    let delimiter = match args.delimiter.as_deref() {
        Some(raw) => parse_delimiter(raw)?,
        None => ctx.config.output.delimiter,
    };

    let table = read_table_file(&args.input, delimiter)?;
    let column = table.column_index(&ColumnChoice::from_arg(args.column.as_deref()))?;
    let column_name = table.headers[column].clone();
    debug!(column = %column_name, rows = table.len(), "phone column selected");

    let Classifier {
        classifier,
        skipped_table_rows,
    } = build_classifier(ctx, &args.pipeline)?;
    let labels = classifier.options().labels;
    let inputs = table.column_inputs(column);
    let outcome = if args.progress {
        classifier.run_batch(&inputs, report_progress)
    } else {
        classifier.run_batch(&inputs, |_| {})
    };

    let columns = OutputColumns {
        formatted_number: ctx.config.output.formatted_number,
        is_mobile: ctx.config.output.is_mobile || args.pipeline.disambiguate,
    };
    let annotated = annotate(&table, &outcome.records, labels, columns)?;

    match out {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_table(&mut writer, &annotated, delimiter)?;
            writer
                .flush()
                .with_context(|| format!("write {}", path.display()))?;
        }
        None => write_table(io::stdout().lock(), &annotated, delimiter)?,
    }

    if ctx.json {
        let report = ValidateReport {
            input: args.input.display().to_string(),
            output: display_path(out),
            column: column_name,
            generated_at: now_rfc3339(),
            valid_percent: outcome.summary.valid_percent(),
            skipped_table_rows,
            summary: outcome.summary,
        };
        return print_json(&report);
    }

    let mut text = render_summary(&outcome.summary, columns.is_mobile);
    if skipped_table_rows > 0 {
        text.push_str(&format!(
            "\nskipped {skipped_table_rows} prefix table rows"
        ));
    }
    if out.is_some() {
        println!("{text}");
        println!("wrote {}", display_path(out));
    } else {
        eprintln!("{text}");
    }
    Ok(())
}

fn report_progress(progress: Progress) {
    eprint!(
        "\rProcessing... {}/{} ({}%)",
        progress.processed,
        progress.total,
        progress.percent()
    );
    if progress.is_done() {
        eprintln!();
    }
}
