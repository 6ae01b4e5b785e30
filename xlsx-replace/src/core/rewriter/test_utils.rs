use crate::core::rewriter::SHARED_STRINGS_ENTRY;
use anyhow::Result;
use std::fs::{self, File};
use std::io::{BufReader, Read as _, Write as _};
use std::path::Path;
use zip::result::ZipError;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

pub const SAMPLE_SHARED_STRINGS: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    "\n",
    r#"<sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="2" uniqueCount="2">"#,
    "<si><t>Hello World</t></si><si><t>Tom &amp; Jerry</t></si></sst>"
);

const WORKBOOK: &str = r#"<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheets><sheet name="Hello" sheetId="1"/></sheets></workbook>"#;

pub fn shared_strings_xml(strings: &[&str]) -> String {
    let items: String = strings
        .iter()
        .map(|s| format!("<si><t>{s}</t></si>"))
        .collect();
    format!(
        r#"<sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="{0}" uniqueCount="{0}">{items}</sst>"#,
        strings.len()
    )
}

/// Writes a minimal workbook, with `xl/sharedStrings.xml` only when given.
pub fn create_xlsx(path: &Path, shared_strings: Option<&str>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut zip = ZipWriter::new(File::create(path)?);
    let options =
        FileOptions::<()>::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("[Content_Types].xml", options)?;
    zip.write_all(b"<Types/>")?;
    zip.start_file("xl/workbook.xml", options)?;
    zip.write_all(WORKBOOK.as_bytes())?;
    if let Some(xml) = shared_strings {
        zip.start_file(SHARED_STRINGS_ENTRY, options)?;
        zip.write_all(xml.as_bytes())?;
    }
    zip.start_file("xl/worksheets/sheet1.xml", options)?;
    zip.write_all(b"<worksheet/>")?;

    zip.finish()?;
    Ok(())
}

pub fn read_entry(path: &Path, name: &str) -> Result<Option<String>> {
    let mut zip = ZipArchive::new(BufReader::new(File::open(path)?))?;
    let mut entry = match zip.by_name(name) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    let mut text = String::new();
    entry.read_to_string(&mut text)?;
    Ok(Some(text))
}

pub fn entry_names(path: &Path) -> Result<Vec<String>> {
    let mut zip = ZipArchive::new(BufReader::new(File::open(path)?))?;
    let mut names = Vec::with_capacity(zip.len());
    for index in 0..zip.len() {
        names.push(zip.by_index_raw(index)?.name().to_owned());
    }
    Ok(names)
}
