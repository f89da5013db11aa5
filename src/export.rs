//! Output formats for headless searches

use std::io::Write;

use clap::ValueEnum;
use unicode_width::UnicodeWidthStr;

use crate::backend::types::{display, Prospect};
use crate::error::ExportError;
use crate::ui::table::{self, HEADERS};

const CSV_HEADERS: [&str; 8] = [
    "full_name",
    "role",
    "email",
    "fit",
    "profile_url",
    "location",
    "company",
    "matched_skills",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Aligned plain-text table with the same cells as the window
    #[default]
    Table,
    /// Raw fields, one record per line
    Csv,
    /// The received array, pretty-printed
    Json,
}

pub fn write<W: Write>(format: Format, prospects: &[Prospect], out: W) -> Result<(), ExportError> {
    match format {
        Format::Table => write_table(prospects, out),
        Format::Csv => write_csv(prospects, out),
        Format::Json => write_json(prospects, out),
    }
}

pub fn write_table<W: Write>(prospects: &[Prospect], mut out: W) -> Result<(), ExportError> {
    let lines: Vec<[String; 5]> = table::rows(prospects)
        .into_iter()
        .map(|row| {
            [
                row.name,
                row.role,
                row.email,
                row.fit,
                row.profile_url.unwrap_or_default(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.width());
    for line in &lines {
        for (width, value) in widths.iter_mut().zip(line) {
            *width = (*width).max(value.width());
        }
    }

    // Only cells followed by another non-empty cell are padded, so a line
    // never ends in spaces or a bare separator.
    let format_line = |cells: [&str; 5]| -> String {
        let last = cells.iter().rposition(|c| !c.is_empty()).unwrap_or(0);
        let mut line = String::new();
        for (i, (cell, width)) in cells.iter().zip(widths).enumerate().take(last + 1) {
            if i > 0 {
                line.push_str(" | ");
            }
            line.push_str(cell);
            if i < last {
                line.push_str(&" ".repeat(width.saturating_sub(cell.width())));
            }
        }
        line
    };

    writeln!(out, "{}", format_line(HEADERS))?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(out, "{}", rule.join("-+-"))?;
    for line in &lines {
        writeln!(out, "{}", format_line(line.each_ref().map(String::as_str)))?;
    }
    out.flush()?;
    Ok(())
}

pub fn write_csv<W: Write>(prospects: &[Prospect], out: W) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(CSV_HEADERS)?;

    for p in prospects {
        let fields = [
            &p.full_name,
            &p.role,
            &p.email,
            &p.fit,
            &p.profile_url,
            &p.location,
            &p.company,
            &p.matched_skills,
        ];
        writer.write_record(fields.map(|field| display(field.as_ref())))?;
    }

    writer.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(prospects: &[Prospect], mut out: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut out, prospects)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Prospect> {
        serde_json::from_str(
            r#"[
                {"full_name":"Ann","role":"Eng","email":"a@x.com","fit":"high","profile_url":"http://x/a"},
                {"full_name":"Bo","role":"Data, ML","fit":"partial","matched_skills":["python","sql"]}
            ]"#,
        )
        .unwrap()
    }

    fn render(format: Format, prospects: &[Prospect]) -> String {
        let mut buf = Vec::new();
        write(format, prospects, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_table_matches_window_cells() {
        let output = render(Format::Table, &sample());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Name"));
        assert!(lines[0].ends_with("Profile"));
        assert!(lines[2].contains("a@x.com"));
        assert!(lines[2].contains("http://x/a"));
        assert!(lines[3].contains("N/A"));
    }

    #[test]
    fn test_table_columns_are_aligned() {
        let output = render(Format::Table, &sample());
        let positions: Vec<Option<usize>> = output.lines().map(|l| l.find(" | ")).collect();

        assert_eq!(positions[0], positions[2]);
        assert_eq!(positions[0], positions[3]);
    }

    #[test]
    fn test_empty_table_has_header_only() {
        let output = render(Format::Table, &[]);
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_csv_keeps_raw_values() {
        let output = render(Format::Csv, &sample());
        let mut reader = csv::Reader::from_reader(output.as_bytes());

        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), CSV_HEADERS);

        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][2], "a@x.com");
        assert_eq!(&records[1][1], "Data, ML");
        assert_eq!(&records[1][2], "");
        assert_eq!(&records[1][7], "python; sql");
    }

    #[test]
    fn test_json_reproduces_received_array() {
        let raw = serde_json::json!([
            {"full_name": "Ann", "source": "serpapi", "summary": "s"},
            {"full_name": "Bo", "email": null, "fit": 0.5, "matched_skills": ["go"]}
        ]);
        let prospects: Vec<Prospect> = serde_json::from_value(raw.clone()).unwrap();

        let output = render(Format::Json, &prospects);
        let written: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(written, raw);
    }

    #[test]
    fn test_table_has_no_trailing_separator() {
        let output = render(Format::Table, &sample());
        for line in output.lines() {
            assert!(!line.ends_with(' '), "trailing space in {:?}", line);
            assert!(!line.ends_with('|'), "dangling separator in {:?}", line);
        }
    }

    #[test]
    fn test_table_aligns_wide_characters() {
        let prospects: Vec<Prospect> = serde_json::from_str(
            r#"[{"full_name":"山田太郎","role":"Eng","profile_url":"http://x/y"},{"full_name":"Ann","role":"Eng"}]"#,
        )
        .unwrap();
        let output = render(Format::Table, &prospects);
        let columns: Vec<usize> = output
            .lines()
            .filter(|l| !l.starts_with('-'))
            .map(|l| l[..l.find(" | ").unwrap()].width())
            .collect();

        assert_eq!(columns, [8, 8, 8]);
    }

    #[test]
    fn test_csv_stringifies_odd_values() {
        let prospects: Vec<Prospect> = serde_json::from_str(
            r#"[{"full_name":"Ann","company":{"name":"Acme"},"matched_skills":null,"location":42}]"#,
        )
        .unwrap();
        let output = render(Format::Csv, &prospects);
        let mut reader = csv::Reader::from_reader(output.as_bytes());
        let record = reader.records().next().unwrap().unwrap();

        assert_eq!(&record[5], "42");
        assert_eq!(&record[6], r#"{"name":"Acme"}"#);
        assert_eq!(&record[7], "");
    }
}
