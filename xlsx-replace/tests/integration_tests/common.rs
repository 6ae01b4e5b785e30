// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs::{self, File};
use std::io::{BufReader, Read as _, Write as _};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use xlsx_replace::SHARED_STRINGS_ENTRY;
use zip::result::ZipError;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

pub fn shared_strings_xml(strings: &[&str]) -> String {
    let items: String = strings
        .iter()
        .map(|s| format!("<si><t>{s}</t></si>"))
        .collect();
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            "\n",
            r#"<sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="{0}" uniqueCount="{0}">{1}</sst>"#
        ),
        strings.len(),
        items
    )
}

pub fn create_xlsx(dir: &Path, name: &str, strings: Option<&[&str]>) -> Result<PathBuf> {
    create_xlsx_with(dir, name, strings, CompressionMethod::Deflated)
}

pub fn create_xlsx_with(
    dir: &Path,
    name: &str,
    strings: Option<&[&str]>,
    compression: CompressionMethod,
) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut zip = ZipWriter::new(File::create(&path)?);
    let options = FileOptions::<()>::default().compression_method(compression);

    zip.start_file("[Content_Types].xml", options)?;
    zip.write_all(br#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"/>"#)?;
    zip.start_file("xl/workbook.xml", options)?;
    zip.write_all(b"<workbook><sheets><sheet name=\"old\" sheetId=\"1\"/></sheets></workbook>")?;
    if let Some(strings) = strings {
        zip.start_file(SHARED_STRINGS_ENTRY, options)?;
        zip.write_all(shared_strings_xml(strings).as_bytes())?;
    }
    zip.start_file("xl/worksheets/sheet1.xml", options)?;
    zip.write_all(b"<worksheet><sheetData><row r=\"1\"><c r=\"A1\" t=\"s\"><v>0</v></c></row></sheetData></worksheet>")?;

    zip.finish()?;
    Ok(path)
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

pub fn read_shared_strings(path: &Path) -> Result<Option<String>> {
    read_entry(path, SHARED_STRINGS_ENTRY)
}

pub fn entry_compression(path: &Path, name: &str) -> Result<CompressionMethod> {
    let mut zip = ZipArchive::new(BufReader::new(File::open(path)?))?;
    let entry = zip.by_name(name)?;
    Ok(entry.compression())
}

/// Three matching archives, one without the term, one without shared strings
/// and a few files that are not archives at all.
pub fn setup_test_directory() -> Result<TempDir> {
    let dir = TempDir::new()?;

    create_xlsx(dir.path(), "report.xlsx", Some(&["old name", "plain"]))?;
    create_xlsx(dir.path(), "archive/2023/summary.XLSX", Some(&["the old one"]))?;
    create_xlsx(dir.path(), "archive/2024/budget.xlsx", Some(&["old", "old again"]))?;
    create_xlsx(dir.path(), "archive/other.xlsx", Some(&["nothing to see"]))?;
    create_xlsx(dir.path(), "empty/no_strings.xlsx", None)?;

    fs::write(dir.path().join("notes.txt"), "old notes")?;
    fs::write(dir.path().join("archive/broken.xlsx.bak"), "old backup")?;

    Ok(dir)
}
