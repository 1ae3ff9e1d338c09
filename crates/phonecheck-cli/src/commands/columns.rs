use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use phonecheck_config::parse_delimiter;
use phonecheck_table::read_table_file;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ColumnsArgs {
    pub input: PathBuf,
    #[arg(long)]
    pub delimiter: Option<String>,
}

#[derive(Debug, Serialize)]
struct ColumnDto {
    index: usize,
    name: String,
    phone: bool,
}

pub fn list_columns(ctx: &Context<'_>, args: ColumnsArgs) -> Result<()> {
    let delimiter = match args.delimiter.as_deref() {
        Some(raw) => parse_delimiter(raw)?,
        None => ctx.config.output.delimiter,
    };
    let table = read_table_file(&args.input, delimiter)?;
    let detected = table.detect_phone_column();

    let columns: Vec<ColumnDto> = table
        .headers
        .iter()
        .enumerate()
        .map(|(index, name)| ColumnDto {
            index: index + 1,
            name: name.clone(),
            phone: detected == Some(index),
        })
        .collect();

    if ctx.json {
        return print_json(&columns);
    }

    for column in &columns {
        let marker = if column.phone { "  (phone)" } else { "" };
        println!("{:>3}  {}{}", column.index, column.name, marker);
    }
    Ok(())
}
