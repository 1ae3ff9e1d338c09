use anyhow::{Context as _, Result};
use clap::Args;
use phonecheck_config::AppConfig;
use phonecheck_core::{
    LabelPreset, NormalizeDefaults, PhoneClassifier, PipelineOptions, DEFAULT_COUNTRY_CODE,
};
use phonecheck_lookup::{LibDirectory, PrefixTables};
use serde::Serialize;
use std::io::{self, Write};

pub mod check;
pub mod columns;
pub mod completions;
pub mod validate;

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// Per-run overrides of the `[normalize]` and `[classify]` config sections.
#[derive(Debug, Args)]
pub struct PipelineArgs {
    /// Line type label set
    #[arg(long, value_enum)]
    pub labels: Option<LabelArg>,
    /// Resolve fixed-line-or-mobile numbers through the mobile area-code list
    #[arg(long)]
    pub disambiguate: bool,
    /// Default area code for seven-digit numbers
    #[arg(long)]
    pub area_code: Option<String>,
    /// Hand cells to the parser without digit normalization
    #[arg(long, conflicts_with = "area_code")]
    pub no_normalize: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum LabelArg {
    Legacy,
    Standard,
    Mobile,
}

impl From<LabelArg> for LabelPreset {
    fn from(arg: LabelArg) -> Self {
        match arg {
            LabelArg::Legacy => LabelPreset::Legacy,
            LabelArg::Standard => LabelPreset::Standard,
            LabelArg::Mobile => LabelPreset::Mobile,
        }
    }
}

pub fn pipeline_options(config: &AppConfig, args: &PipelineArgs) -> Result<PipelineOptions> {
    let mut options = config.pipeline.clone();

    if let Some(labels) = args.labels {
        options.labels = labels.into();
    }
    if args.disambiguate {
        options.classify.disambiguate = true;
    }
    if let Some(area_code) = args.area_code.as_deref() {
        let country_code = options
            .normalize
            .as_ref()
            .map(|defaults| defaults.country_code().to_string())
            .unwrap_or_else(|| DEFAULT_COUNTRY_CODE.to_string());
        options.normalize = Some(NormalizeDefaults::new(&country_code, area_code)?);
    }
    if args.no_normalize {
        options.normalize = None;
    }

    Ok(options)
}

/// A classifier plus the number of prefix table rows skipped while loading.
pub struct Classifier {
    pub classifier: PhoneClassifier<LibDirectory>,
    pub skipped_table_rows: usize,
}

pub fn build_classifier(ctx: &Context<'_>, args: &PipelineArgs) -> Result<Classifier> {
    let options = pipeline_options(ctx.config, args)?;
    let lookup = &ctx.config.lookup;
    let load = PrefixTables::load(
        lookup.carriers.as_deref(),
        lookup.locations.as_deref(),
        lookup.timezones.as_deref(),
    )
    .with_context(|| "load prefix tables")?;
    Ok(Classifier {
        classifier: PhoneClassifier::new(LibDirectory::new(load.tables), options),
        skipped_table_rows: load.warnings.len(),
    })
}
