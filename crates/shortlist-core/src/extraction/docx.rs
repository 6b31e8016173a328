//! Plain-text extraction for word-processor documents.
//!
//! A DOCX file is a zip container of WordprocessingML parts. Text is read from
//! the header parts, then the main document, then the footer parts, which is
//! the order a reader meets contact details on a typical résumé template.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

use crate::error::ShortlistError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Upper bound on the uncompressed size of a single XML part.
pub const MAX_PART_BYTES: u64 = 32 * 1024 * 1024;

/// Extract the text of a DOCX document.
pub fn extract_text(bytes: &[u8]) -> Result<String, ShortlistError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ShortlistError::Docx(format!("not a DOCX container: {e}")))?;

    let names: Vec<String> = archive.file_names().map(str::to_string).collect();
    if !names.iter().any(|n| n == DOCUMENT_PART) {
        return Err(ShortlistError::Docx(format!("missing {DOCUMENT_PART}")));
    }

    let mut parts = numbered_parts(&names, "word/header");
    parts.push(DOCUMENT_PART.to_string());
    parts.extend(numbered_parts(&names, "word/footer"));

    let mut text = String::new();
    for part in &parts {
        let xml = read_part(&mut archive, part)?;
        text.push_str(&wordml_to_text(&xml, part)?);
    }

    debug!(parts = parts.len(), chars = text.len(), "extracted DOCX text");
    Ok(text)
}

/// Part names like `word/header2.xml`, ordered by their number.
fn numbered_parts(names: &[String], prefix: &str) -> Vec<String> {
    let mut parts: Vec<(u32, String)> = names
        .iter()
        .filter_map(|name| {
            let number = name.strip_prefix(prefix)?.strip_suffix(".xml")?;
            let n = if number.is_empty() {
                0
            } else {
                number.parse().ok()?
            };
            Some((n, name.clone()))
        })
        .collect();
    parts.sort();
    parts.into_iter().map(|(_, name)| name).collect()
}

fn read_part(
    archive: &mut zip::ZipArchive<Cursor<&[u8]>>,
    part: &str,
) -> Result<String, ShortlistError> {
    let file = archive
        .by_name(part)
        .map_err(|e| ShortlistError::Docx(format!("cannot open {part}: {e}")))?;

    let mut xml = String::new();
    file.take(MAX_PART_BYTES + 1)
        .read_to_string(&mut xml)
        .map_err(|e| ShortlistError::Docx(format!("cannot read {part}: {e}")))?;

    if xml.len() as u64 > MAX_PART_BYTES {
        return Err(ShortlistError::Docx(format!(
            "{part} exceeds {} MiB",
            MAX_PART_BYTES / 1024 / 1024
        )));
    }
    Ok(xml)
}

/// Flatten one WordprocessingML part to text.
///
/// Only `w:t` runs contribute characters; `w:tab`, `w:br` and `w:cr` inside a
/// run become whitespace, and every paragraph ends with a newline.
fn wordml_to_text(xml: &str, part: &str) -> Result<String, ShortlistError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut out = String::new();
    let mut in_run = false;
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"r" => in_run = true,
                b"t" if in_run => in_text = true,
                b"tab" if in_run => out.push('\t'),
                b"br" | b"cr" if in_run => out.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"tab" if in_run => out.push('\t'),
                b"br" | b"cr" if in_run => out.push('\n'),
                b"p" => out.push('\n'),
                _ => {}
            },
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"r" => {
                    in_run = false;
                    in_text = false;
                }
                b"t" => in_text = false,
                b"p" => out.push('\n'),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text => {
                let s = t
                    .unescape()
                    .map_err(|e| ShortlistError::Docx(format!("bad text in {part}: {e}")))?;
                out.push_str(&s);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ShortlistError::Docx(format!(
                    "malformed XML in {part} at byte {}: {e}",
                    reader.buffer_position()
                )))
            }
            _ => {}
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn body(paragraphs: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{paragraphs}</w:body></w:document>"#
        )
    }

    fn docx(parts: &[(&str, String)]) -> Vec<u8> {
        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in parts {
            zip.start_file(*name, SimpleFileOptions::default()).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        zip.finish().unwrap().into_inner()
    }

    #[test]
    fn test_paragraphs_become_lines() {
        let bytes = docx(&[(
            DOCUMENT_PART,
            body(
                "<w:p><w:r><w:t>Date of Birth:</w:t></w:r><w:r><w:t xml:space=\"preserve\"> 1995-06-15</w:t></w:r></w:p>\
                 <w:p><w:r><w:t>O/L English</w:t><w:tab/><w:t>B</w:t></w:r></w:p>",
            ),
        )]);
        let text = extract_text(&bytes).unwrap();
        assert_eq!(text, "Date of Birth: 1995-06-15\nO/L English\tB\n");
    }

    #[test]
    fn test_entities_unescaped() {
        let bytes = docx(&[(
            DOCUMENT_PART,
            body("<w:p><w:r><w:t>Sales &amp; Customer Care</w:t></w:r></w:p>"),
        )]);
        assert_eq!(extract_text(&bytes).unwrap(), "Sales & Customer Care\n");
    }

    #[test]
    fn test_paragraph_tab_stops_ignored() {
        let bytes = docx(&[(
            DOCUMENT_PART,
            body(
                "<w:p><w:pPr><w:tabs><w:tab w:val=\"left\" w:pos=\"720\"/></w:tabs></w:pPr>\
                 <w:r><w:t>Address: Kandy</w:t></w:r></w:p>",
            ),
        )]);
        assert_eq!(extract_text(&bytes).unwrap(), "Address: Kandy\n");
    }

    #[test]
    fn test_header_before_body_before_footer() {
        let header = r#"<w:hdr xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:p><w:r><w:t>Ms. Jane</w:t></w:r></w:p></w:hdr>"#;
        let footer = r#"<w:ftr xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:p><w:r><w:t>References on request</w:t></w:r></w:p></w:ftr>"#;
        let bytes = docx(&[
            ("word/footer1.xml", footer.to_string()),
            (DOCUMENT_PART, body("<w:p><w:r><w:t>Receptionist</w:t></w:r></w:p>")),
            ("word/header1.xml", header.to_string()),
        ]);
        assert_eq!(
            extract_text(&bytes).unwrap(),
            "Ms. Jane\nReceptionist\nReferences on request\n"
        );
    }

    #[test]
    fn test_missing_document_part_rejected() {
        let bytes = docx(&[("word/styles.xml", "<w:styles/>".to_string())]);
        assert!(matches!(extract_text(&bytes), Err(ShortlistError::Docx(_))));
    }

    #[test]
    fn test_legacy_doc_is_not_a_container() {
        let legacy = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];
        assert!(matches!(extract_text(&legacy), Err(ShortlistError::Docx(_))));
    }

    #[test]
    fn test_numbered_parts_sorted_numerically() {
        let names = vec![
            "word/header10.xml".to_string(),
            "word/header2.xml".to_string(),
            "word/headers.xml".to_string(),
            "word/header1.xml".to_string(),
        ];
        assert_eq!(
            numbered_parts(&names, "word/header"),
            vec!["word/header1.xml", "word/header2.xml", "word/header10.xml"]
        );
    }
}
