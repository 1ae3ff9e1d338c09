use crate::util::format_percent;
use phonecheck_core::{BatchSummary, LineTypeCount};

const BAR_WIDTH: usize = 30;

pub(crate) fn render_summary(summary: &BatchSummary, show_mobile: bool) -> String {
    if summary.is_empty() {
        return "no rows processed".to_string();
    }

    let mut lines = vec![
        format!("total:   {}", summary.total),
        format!(
            "valid:   {} ({})",
            summary.valid,
            format_percent(summary.valid_percent())
        ),
        format!(
            "invalid: {} ({})",
            summary.invalid,
            format_percent(summary.invalid_percent())
        ),
    ];
    if show_mobile {
        lines.push(format!("mobile:  {}", summary.mobile));
    }

    lines.push(String::new());
    lines.push("line types:".to_string());
    lines.extend(render_bars(&summary.line_types, summary.total));

    if show_mobile {
        lines.push(String::new());
        lines.push("mobile vs non-mobile:".to_string());
        lines.extend(render_bars(
            &[
                LineTypeCount {
                    label: "Mobile".to_string(),
                    count: summary.mobile,
                },
                LineTypeCount {
                    label: "Non-Mobile".to_string(),
                    count: summary.non_mobile,
                },
            ],
            summary.total,
        ));
    }

    lines.join("\n")
}

fn render_bars(counts: &[LineTypeCount], total: usize) -> Vec<String> {
    let width = counts
        .iter()
        .map(|entry| entry.label.chars().count())
        .max()
        .unwrap_or(0);
    counts
        .iter()
        .map(|entry| {
            format!(
                "  {:<width$}  {:<bar$}  {}",
                entry.label,
                bar(entry.count, total),
                entry.count,
                width = width,
                bar = BAR_WIDTH
            )
            .trim_end()
            .to_string()
        })
        .collect()
}

fn bar(count: usize, total: usize) -> String {
    if total == 0 || count == 0 {
        return String::new();
    }
    let filled = (count * BAR_WIDTH).div_ceil(total);
    "#".repeat(filled.min(BAR_WIDTH))
}

#[cfg(test)]
mod tests;
