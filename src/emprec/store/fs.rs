use super::DataStore;
use crate::error::{EmprecError, Result};
use crate::model::Employee;
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};
use serde_json::Value;
use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

const INDENT: &[u8] = b"    ";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(EmprecError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "employees".to_string());
        let tmp_name = format!(".{}-{}.tmp", file_name, Uuid::new_v4());
        match self.path.parent() {
            Some(parent) => parent.join(tmp_name),
            None => PathBuf::from(tmp_name),
        }
    }
}

/// Decodes a stored document, falling back to an empty collection on anything malformed.
fn decode_collection(bytes: &[u8], path: &Path) -> Vec<Employee> {
    let value: Value = match serde_json::from_slice(bytes) {
        Ok(value) => value,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "data file is not valid JSON, starting empty");
            return Vec::new();
        }
    };

    if !value.is_array() {
        warn!(path = %path.display(), "data file does not hold a JSON array, starting empty");
        return Vec::new();
    }

    match serde_json::from_value(value) {
        Ok(employees) => employees,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "data file holds malformed records, starting empty");
            Vec::new()
        }
    }
}

/// Pretty printer that keeps the file pure ASCII: anything outside `' '..='~'`
/// inside a string becomes a lowercase `\uXXXX` escape, with surrogate pairs
/// above the BMP. Files written by older tooling in this format re-save unchanged.
struct AsciiPrettyFormatter<'a> {
    inner: PrettyFormatter<'a>,
}

impl<'a> AsciiPrettyFormatter<'a> {
    fn with_indent(indent: &'a [u8]) -> Self {
        Self {
            inner: PrettyFormatter::with_indent(indent),
        }
    }
}

impl Formatter for AsciiPrettyFormatter<'_> {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if (' '..='~').contains(&ch) {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

fn encode_collection(employees: &[Employee]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, AsciiPrettyFormatter::with_indent(INDENT));
    employees
        .serialize(&mut ser)
        .map_err(EmprecError::Serialization)?;
    Ok(buf)
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Employee>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no data file yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(EmprecError::Io(e)),
        };

        let employees = decode_collection(&bytes, &self.path);
        debug!(path = %self.path.display(), count = employees.len(), "loaded employees");
        Ok(employees)
    }

    fn save(&mut self, employees: &[Employee]) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = encode_collection(employees)?;

        // Write to a sibling temp file, then rename over the target.
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, content).map_err(EmprecError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(EmprecError::Io(e));
        }

        debug!(path = %self.path.display(), count = employees.len(), "saved employees");
        Ok(())
    }
}
