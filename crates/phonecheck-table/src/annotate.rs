use crate::error::{Result, TableError};
use crate::read::Table;
use csv::WriterBuilder;
use phonecheck_core::{LabelPreset, ValidationRecord};
use std::io::Write;

/// Columns appended to the input table, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputColumn {
    FormattedNumber,
    Valid,
    LineType,
    IsMobile,
    Carrier,
    Location,
    Timezone,
    Confidence,
}

impl OutputColumn {
    fn header(self) -> &'static str {
        match self {
            OutputColumn::FormattedNumber => "Formatted Number",
            OutputColumn::Valid => "Valid",
            OutputColumn::LineType => "Line Type",
            OutputColumn::IsMobile => "Is Mobile",
            OutputColumn::Carrier => "Carrier",
            OutputColumn::Location => "Location",
            OutputColumn::Timezone => "Timezone",
            OutputColumn::Confidence => "Confidence Score",
        }
    }

    fn value(self, record: &ValidationRecord, labels: LabelPreset) -> String {
        match self {
            OutputColumn::FormattedNumber => record.formatted_number.clone(),
            OutputColumn::Valid => format_bool(record.valid),
            OutputColumn::LineType => labels.label(record.line_type).to_string(),
            OutputColumn::IsMobile => format_bool(record.is_mobile),
            OutputColumn::Carrier => record.carrier.clone(),
            OutputColumn::Location => record.location.clone(),
            OutputColumn::Timezone => record.timezone_column(),
            OutputColumn::Confidence => format!("{:.1}", record.confidence),
        }
    }
}

/// Optional columns; the rest are always written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputColumns {
    pub formatted_number: bool,
    pub is_mobile: bool,
}

impl OutputColumns {
    fn selected(self) -> Vec<OutputColumn> {
        let mut columns = Vec::with_capacity(8);
        if self.formatted_number {
            columns.push(OutputColumn::FormattedNumber);
        }
        columns.push(OutputColumn::Valid);
        columns.push(OutputColumn::LineType);
        if self.is_mobile {
            columns.push(OutputColumn::IsMobile);
        }
        columns.extend([
            OutputColumn::Carrier,
            OutputColumn::Location,
            OutputColumn::Timezone,
            OutputColumn::Confidence,
        ]);
        columns
    }

    pub fn headers(self) -> Vec<&'static str> {
        self.selected().into_iter().map(OutputColumn::header).collect()
    }
}

/// Adds one set of result columns per row. A result column whose header
/// already exists in the input replaces that column in place.
pub fn annotate(
    table: &Table,
    records: &[ValidationRecord],
    labels: LabelPreset,
    columns: OutputColumns,
) -> Result<Table> {
    if records.len() != table.rows.len() {
        return Err(TableError::RecordCount {
            rows: table.rows.len(),
            records: records.len(),
        });
    }

    let selected = columns.selected();
    let mut headers = table.headers.clone();
    let positions: Vec<usize> = selected
        .iter()
        .map(|column| {
            match headers.iter().position(|header| header == column.header()) {
                Some(index) => index,
                None => {
                    headers.push(column.header().to_string());
                    headers.len() - 1
                }
            }
        })
        .collect();

    let rows = table
        .rows
        .iter()
        .zip(records)
        .map(|(row, record)| {
            let mut out = row.clone();
            out.resize(headers.len(), String::new());
            for (column, position) in selected.iter().zip(&positions) {
                out[*position] = column.value(record, labels);
            }
            out
        })
        .collect();

    Ok(Table { headers, rows })
}

pub fn write_table<W: Write>(writer: W, table: &Table, delimiter: u8) -> Result<()> {
    let mut csv = WriterBuilder::new().delimiter(delimiter).from_writer(writer);
    csv.write_record(&table.headers)?;
    for row in &table.rows {
        csv.write_record(row)?;
    }
    csv.flush()?;
    Ok(())
}

fn format_bool(value: bool) -> String {
    if value {
        "True".to_string()
    } else {
        "False".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{annotate, write_table, OutputColumns};
    use crate::error::TableError;
    use crate::read::{read_table, Table};
    use phonecheck_core::{LabelPreset, LineType, RawInput, ValidationRecord};

    fn mobile_record() -> ValidationRecord {
        ValidationRecord {
            valid: true,
            formatted_number: "+1 917-555-0123".to_string(),
            carrier: "Unknown".to_string(),
            location: "USA".to_string(),
            timezones: vec![
                "America/New_York".to_string(),
                "America/Chicago".to_string(),
            ],
            line_type: LineType::Mobile,
            is_mobile: true,
            confidence: 0.9,
        }
    }

    fn sample_table() -> Table {
        read_table("Name,Phone\nAda,917-555-0123\nGrace,\n".as_bytes(), b',').expect("read")
    }

    #[test]
    fn headers_follow_output_order() {
        let all = OutputColumns {
            formatted_number: true,
            is_mobile: true,
        };
        assert_eq!(
            all.headers(),
            vec![
                "Formatted Number",
                "Valid",
                "Line Type",
                "Is Mobile",
                "Carrier",
                "Location",
                "Timezone",
                "Confidence Score"
            ]
        );
        let minimal = OutputColumns {
            formatted_number: false,
            is_mobile: false,
        };
        assert_eq!(minimal.headers().len(), 6);
    }

    #[test]
    fn annotate_appends_result_columns() {
        let table = sample_table();
        let records = vec![mobile_record(), ValidationRecord::invalid(&RawInput::Missing)];
        let columns = OutputColumns {
            formatted_number: true,
            is_mobile: true,
        };
        let annotated = annotate(&table, &records, LabelPreset::Mobile, columns).expect("annotate");

        assert_eq!(annotated.headers.len(), 10);
        assert_eq!(
            annotated.rows[0],
            vec![
                "Ada",
                "917-555-0123",
                "+1 917-555-0123",
                "True",
                "Mobile",
                "True",
                "Unknown",
                "USA",
                "America/New_York,America/Chicago",
                "0.9"
            ]
        );
        assert_eq!(
            annotated.rows[1],
            vec!["Grace", "", "", "False", "Invalid", "False", "", "", "", "0.0"]
        );
    }

    #[test]
    fn annotate_overwrites_existing_result_columns() {
        let table = read_table("Phone,Valid\n917-555-0123,maybe\n".as_bytes(), b',').expect("read");
        let columns = OutputColumns {
            formatted_number: false,
            is_mobile: false,
        };
        let annotated =
            annotate(&table, &[mobile_record()], LabelPreset::Standard, columns).expect("annotate");
        assert_eq!(annotated.headers[1], "Valid");
        assert_eq!(annotated.rows[0][1], "True");
        assert_eq!(annotated.headers.len(), 7);
        assert_eq!(annotated.rows[0][2], "Cell");
    }

    #[test]
    fn annotate_requires_one_record_per_row() {
        let table = sample_table();
        let columns = OutputColumns {
            formatted_number: false,
            is_mobile: false,
        };
        let err = annotate(&table, &[mobile_record()], LabelPreset::Standard, columns).unwrap_err();
        assert!(matches!(err, TableError::RecordCount { rows: 2, records: 1 }));
    }

    #[test]
    fn write_table_quotes_embedded_delimiters() {
        let table = Table {
            headers: vec!["Location".to_string()],
            rows: vec![vec!["San Francisco, CA".to_string()]],
        };
        let mut out = Vec::new();
        write_table(&mut out, &table, b',').expect("write");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "Location\n\"San Francisco, CA\"\n"
        );
    }
}
