//! Interview tracker export.
//!
//! The workbook is written by hand: a minimal SpreadsheetML package with a
//! single sheet and inline strings, so no shared-string table or styles part
//! is needed.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::fs::File;
use std::io::{Cursor, Seek, Write};
use std::path::Path;
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::ShortlistError;
use crate::interview::InterviewEntry;

pub const SHEET_NAME: &str = "Interviews";

pub const EXPORT_HEADERS: [&str; 5] = ["Name", "Interview Date", "Interviewer", "Outcome", "Notes"];

const COLUMNS: [char; 5] = ['A', 'B', 'C', 'D', 'E'];

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#;

const ROOT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

const WORKBOOK_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;

const SPREADSHEET_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const RELATIONSHIPS_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Output formats, chosen from the target file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Xlsx,
    Csv,
}

impl ExportFormat {
    pub fn from_path(path: &Path) -> Result<Self, ShortlistError> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "xlsx" => Ok(ExportFormat::Xlsx),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(ShortlistError::Export(format!(
                "cannot tell export format from '{}'. Use a .xlsx or .csv file name",
                path.display()
            ))),
        }
    }
}

/// Write entries to `path` in the format its extension names.
pub fn export_to_path(entries: &[InterviewEntry], path: &Path) -> Result<(), ShortlistError> {
    let format = ExportFormat::from_path(path)?;
    let file = File::create(path)?;
    match format {
        ExportFormat::Xlsx => {
            write_xlsx(entries, file)?;
        }
        ExportFormat::Csv => write_csv(entries, file)?,
    }
    debug!(path = %path.display(), rows = entries.len(), ?format, "interview tracker exported");
    Ok(())
}

fn entry_cells(entry: &InterviewEntry) -> [String; 5] {
    [
        entry.name.clone(),
        entry.date.format("%Y-%m-%d").to_string(),
        entry.interviewer.clone(),
        entry.outcome.to_string(),
        entry.notes.clone(),
    ]
}

pub fn write_csv<W: Write>(entries: &[InterviewEntry], writer: W) -> Result<(), ShortlistError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(EXPORT_HEADERS)?;
    for entry in entries {
        csv.write_record(entry_cells(entry))?;
    }
    csv.flush()?;
    Ok(())
}

pub fn write_xlsx<W: Write + Seek>(entries: &[InterviewEntry], writer: W) -> Result<W, ShortlistError> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut zip = ZipWriter::new(writer);

    let parts: [(&str, Vec<u8>); 5] = [
        ("[Content_Types].xml", CONTENT_TYPES_XML.as_bytes().to_vec()),
        ("_rels/.rels", ROOT_RELS_XML.as_bytes().to_vec()),
        ("xl/workbook.xml", workbook_xml()?),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS_XML.as_bytes().to_vec()),
        ("xl/worksheets/sheet1.xml", sheet_xml(entries)?),
    ];
    for (name, content) in parts {
        zip.start_file(name, options).map_err(export_error)?;
        zip.write_all(&content)?;
    }

    zip.finish().map_err(export_error)
}

fn export_error(e: impl std::fmt::Display) -> ShortlistError {
    ShortlistError::Export(e.to_string())
}

fn emit(writer: &mut Writer<Cursor<Vec<u8>>>, event: Event<'_>) -> Result<(), ShortlistError> {
    writer.write_event(event).map_err(export_error)
}

fn workbook_xml() -> Result<Vec<u8>, ShortlistError> {
    let mut w = Writer::new(Cursor::new(Vec::new()));
    emit(&mut w, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
    emit(
        &mut w,
        Event::Start(
            BytesStart::new("workbook")
                .with_attributes([("xmlns", SPREADSHEET_NS), ("xmlns:r", RELATIONSHIPS_NS)]),
        ),
    )?;
    emit(&mut w, Event::Start(BytesStart::new("sheets")))?;
    emit(
        &mut w,
        Event::Empty(BytesStart::new("sheet").with_attributes([
            ("name", SHEET_NAME),
            ("sheetId", "1"),
            ("r:id", "rId1"),
        ])),
    )?;
    emit(&mut w, Event::End(BytesEnd::new("sheets")))?;
    emit(&mut w, Event::End(BytesEnd::new("workbook")))?;
    Ok(w.into_inner().into_inner())
}

fn sheet_xml(entries: &[InterviewEntry]) -> Result<Vec<u8>, ShortlistError> {
    let mut w = Writer::new(Cursor::new(Vec::new()));
    emit(&mut w, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
    emit(
        &mut w,
        Event::Start(BytesStart::new("worksheet").with_attributes([("xmlns", SPREADSHEET_NS)])),
    )?;
    emit(&mut w, Event::Start(BytesStart::new("sheetData")))?;

    let header = EXPORT_HEADERS.map(String::from);
    let rows = std::iter::once(header).chain(entries.iter().map(entry_cells));
    for (index, cells) in rows.enumerate() {
        write_row(&mut w, index + 1, &cells)?;
    }

    emit(&mut w, Event::End(BytesEnd::new("sheetData")))?;
    emit(&mut w, Event::End(BytesEnd::new("worksheet")))?;
    Ok(w.into_inner().into_inner())
}

fn write_row(
    w: &mut Writer<Cursor<Vec<u8>>>,
    row_number: usize,
    cells: &[String; 5],
) -> Result<(), ShortlistError> {
    let row_ref = row_number.to_string();
    emit(w, Event::Start(BytesStart::new("row").with_attributes([("r", row_ref.as_str())])))?;
    for (column, value) in COLUMNS.iter().zip(cells) {
        let cell_ref = format!("{column}{row_number}");
        emit(
            w,
            Event::Start(
                BytesStart::new("c").with_attributes([("r", cell_ref.as_str()), ("t", "inlineStr")]),
            ),
        )?;
        emit(w, Event::Start(BytesStart::new("is")))?;
        let mut text = BytesStart::new("t");
        if value.starts_with(char::is_whitespace) || value.ends_with(char::is_whitespace) {
            text.push_attribute(("xml:space", "preserve"));
        }
        emit(w, Event::Start(text))?;
        emit(w, Event::Text(BytesText::new(value)))?;
        emit(w, Event::End(BytesEnd::new("t")))?;
        emit(w, Event::End(BytesEnd::new("is")))?;
        emit(w, Event::End(BytesEnd::new("c")))?;
    }
    emit(w, Event::End(BytesEnd::new("row")))
}
