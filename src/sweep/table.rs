//! Table rendering for sweep results
//!
//! Pure formatting of the driver's output: CSV for further processing
//! and booktabs LaTeX for the paper. Optional columns (SIR, L,
//! truncation) appear only when some entry carries them; LaTeX
//! additionally drops columns that are constant across the table.

use crate::sweep::{SweepKey, SweepResults};
use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::Path;

fn sorted_entries(results: &SweepResults) -> Vec<&(SweepKey, Vec<f64>)> {
    let mut rows: Vec<_> = results.entries().iter().collect();
    rows.sort_by(|(a, _), (b, _)| {
        a.snr_db
            .total_cmp(&b.snr_db)
            .then(opt_cmp(a.sir_db, b.sir_db))
            .then(opt_cmp(a.truncation, b.truncation))
            .then(a.interferers.cmp(&b.interferers))
            .then(a.alpha.total_cmp(&b.alpha))
    });
    rows
}

fn opt_cmp(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
    }
}

/// Column header for a BER-at-offset column, e.g. 0.05 -> "ber05".
fn offset_column(offset: f64) -> String {
    format!("ber{:02.0}", offset * 100.0)
}

/// Render results as CSV, one row per configuration.
///
/// `offsets` names the BER columns and must match the offsets the
/// sweep was run with.
pub fn to_csv(results: &SweepResults, offsets: &[f64]) -> String {
    let has_sir = results.entries().iter().any(|(k, _)| k.sir_db.is_some());
    let has_l = results.entries().iter().any(|(k, _)| k.interferers.is_some());
    let has_trunc = results.entries().iter().any(|(k, _)| k.truncation.is_some());

    let mut header = vec!["pulse".to_string(), "snr".to_string()];
    if has_sir {
        header.push("sir".to_string());
    }
    header.push("alpha".to_string());
    if has_l {
        header.push("L".to_string());
    }
    if has_trunc {
        header.push("trunc".to_string());
    }
    header.push("joint".to_string());
    for &off in offsets {
        header.push(offset_column(off));
    }

    let mut csv = header.join(",");
    csv.push('\n');

    for (key, ber) in sorted_entries(results) {
        let mut row = vec![key.pulse.label().to_string(), format!("{:?}", key.snr_db)];
        if has_sir {
            row.push(key.sir_db.map(|v| format!("{:?}", v)).unwrap_or_default());
        }
        row.push(format!("{:.2}", key.alpha));
        if has_l {
            row.push(key.interferers.map(|v| v.to_string()).unwrap_or_default());
        }
        if has_trunc {
            row.push(
                key.truncation
                    .map(|v| format!("{}", v as i64))
                    .unwrap_or_default(),
            );
        }
        row.push(key.joint.to_string());
        for &b in ber {
            row.push(format!("{:.6e}", b));
        }
        csv.push_str(&row.join(","));
        csv.push('\n');
    }
    csv
}

/// Write the CSV rendering to `path`, creating parent directories.
pub fn write_csv(results: &SweepResults, offsets: &[f64], path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, to_csv(results, offsets))
}

struct Column {
    header: String,
    cells: Vec<String>,
}

/// Render results as a booktabs LaTeX table.
///
/// Optional parameter columns are dropped when absent or constant
/// across all rows (the caption is expected to state fixed operating
/// points, as the paper does).
pub fn latex_table(results: &SweepResults, offsets: &[f64], caption: &str, label: &str) -> String {
    let rows = sorted_entries(results);

    let mut columns = vec![Column {
        header: r"\bfseries Pulse".to_string(),
        cells: rows
            .iter()
            .map(|(k, _)| format!(r"\bfseries {}", k.pulse.label()))
            .collect(),
    }];

    let snr: Vec<String> = rows.iter().map(|(k, _)| format!("{}", k.snr_db as i64)).collect();
    push_if_varying(&mut columns, r"\bfseries SNR (dB)", snr);

    let sir: Vec<String> = rows
        .iter()
        .map(|(k, _)| k.sir_db.map(|v| format!("{}", v as i64)).unwrap_or_default())
        .collect();
    push_if_varying(&mut columns, r"\bfseries SIR (dB)", sir);

    columns.push(Column {
        header: r"$\alpha$".to_string(),
        cells: rows.iter().map(|(k, _)| format!("{:.2}", k.alpha)).collect(),
    });

    let l: Vec<String> = rows
        .iter()
        .map(|(k, _)| k.interferers.map(|v| v.to_string()).unwrap_or_default())
        .collect();
    push_if_varying(&mut columns, r"$L$", l);

    let trunc: Vec<String> = rows
        .iter()
        .map(|(k, _)| k.truncation.map(|v| format!("{}", v as i64)).unwrap_or_default())
        .collect();
    push_if_varying(&mut columns, r"\bfseries trunc", trunc);

    for (j, off) in offsets.iter().enumerate() {
        let cells = rows
            .iter()
            .map(|(_, ber)| {
                ber.get(j)
                    .map(|b| format!("{:.2e}", b))
                    .unwrap_or_default()
            })
            .collect();
        columns.push(Column {
            header: format!(r"$t/T= \pm {:.2}$", off),
            cells,
        });
    }

    let col_spec: String = columns
        .iter()
        .map(|c| if c.header.contains("Pulse") { 'l' } else { 'c' })
        .collect();

    let mut out = String::new();
    out.push_str("\\begin{table}[h!]\n");
    out.push_str(&format!("  \\caption{{{}}}\n", caption));
    out.push_str(&format!("  \\label{{{}}}\n", label));
    out.push_str("  \\centering\n");
    out.push_str(&format!("  \\begin{{tabular}}{{{}}}\n", col_spec));
    out.push_str("    \\toprule\n");
    let header_row: Vec<&str> = columns.iter().map(|c| c.header.as_str()).collect();
    out.push_str(&format!("    {} \\\\\n", header_row.join(" & ")));
    out.push_str("    \\midrule\n");
    for i in 0..rows.len() {
        let cells: Vec<&str> = columns.iter().map(|c| c.cells[i].as_str()).collect();
        out.push_str(&format!("    {} \\\\\n", cells.join(" & ")));
    }
    out.push_str("    \\bottomrule\n");
    out.push_str("  \\end{tabular}\n");
    out.push_str("\\end{table}\n");
    out
}

fn push_if_varying(columns: &mut Vec<Column>, header: &str, cells: Vec<String>) {
    let nonempty = cells.iter().any(|c| !c.is_empty());
    let varying = cells.windows(2).any(|w| w[0] != w[1]);
    if nonempty && varying {
        columns.push(Column {
            header: header.to_string(),
            cells,
        });
    }
}
