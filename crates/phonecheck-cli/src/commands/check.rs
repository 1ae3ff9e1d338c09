use crate::commands::{build_classifier, print_json, Context, PipelineArgs};
use anyhow::Result;
use clap::Args;
use phonecheck_core::{RawInput, RecordDto};

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Numbers to validate
    #[arg(required = true)]
    pub numbers: Vec<String>,
    #[command(flatten)]
    pub pipeline: PipelineArgs,
}

pub fn check(ctx: &Context<'_>, args: CheckArgs) -> Result<()> {
    let classifier = build_classifier(ctx, &args.pipeline)?.classifier;
    let labels = classifier.options().labels;

    let results: Vec<RecordDto> = args
        .numbers
        .iter()
        .map(|number| {
            let record = classifier.validate(&RawInput::from_cell(number));
            RecordDto::from_record(number, &record, labels)
        })
        .collect();

    if ctx.json {
        return print_json(&results);
    }

    for (index, result) in results.iter().enumerate() {
        if index > 0 {
            println!();
        }
        print_record(result);
    }
    Ok(())
}

fn print_record(record: &RecordDto) {
    println!("{}", record.input);
    if !record.valid {
        println!("  invalid");
        return;
    }
    println!("  formatted:  {}", record.formatted_number);
    println!("  line type:  {}", record.line_type);
    println!("  mobile:     {}", if record.is_mobile { "yes" } else { "no" });
    println!("  carrier:    {}", record.carrier);
    println!("  location:   {}", record.location);
    println!("  timezones:  {}", record.timezones.join(", "));
    println!("  confidence: {:.1}", record.confidence);
}
