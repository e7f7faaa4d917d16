use crate::error::{BioError, BioResult};
use crate::io::{ParseConfig, ReadReport, SkippedRecord, SymbolPolicy};
use crate::seq::record::Record;
use crate::seq::symbols::InvalidSymbols;
use log::{debug, warn};
use memchr::memchr2;
use std::borrow::Borrow;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Cursor, Write};
use std::iter::FusedIterator;
use std::mem;
use std::path::Path;

pub const DEFAULT_LINE_WIDTH: usize = 60;

/// Streaming FASTA parser yielding one [`Record`] per pull.
///
/// Holds at most one line and one record body at a time, plus the
/// identifiers seen so far when `unique_ids` is set. A non-header line
/// before the first header, an I/O error, or any error under
/// [`SymbolPolicy::Strict`] ends the stream. Under
/// [`SymbolPolicy::LenientStrip`] header errors only drop their record.
pub struct FastaReader<R> {
    reader: R,
    config: ParseConfig,
    line_no: usize,
    pending_header: Option<(Vec<u8>, usize)>,
    buf_line: Vec<u8>,
    seq_buf: Vec<u8>,
    invalid: InvalidSymbols,
    seen_ids: HashSet<Box<str>>,
    finished: bool,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, ParseConfig::default())
    }

    pub fn with_config(reader: R, config: ParseConfig) -> Self {
        Self {
            reader,
            config,
            line_no: 0,
            pending_header: None,
            buf_line: Vec::new(),
            seq_buf: Vec::new(),
            invalid: InvalidSymbols::new(),
            seen_ids: HashSet::new(),
            finished: false,
        }
    }

    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Number of lines consumed so far.
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Reads the next line into `buf_line` without its terminator.
    fn read_line(&mut self) -> BioResult<bool> {
        self.buf_line.clear();
        if self.reader.read_until(b'\n', &mut self.buf_line)? == 0 {
            return Ok(false);
        }
        self.line_no += 1;
        trim_eol(&mut self.buf_line);
        Ok(true)
    }

    fn next_header(&mut self) -> BioResult<Option<(Vec<u8>, usize)>> {
        if let Some(pending) = self.pending_header.take() {
            return Ok(Some(pending));
        }

        while self.read_line()? {
            if self.buf_line.first() == Some(&b'>') {
                return Ok(Some((mem::take(&mut self.buf_line), self.line_no)));
            }
            if is_blank(&self.buf_line) {
                continue;
            }
            return Err(BioError::MalformedRecord { line: self.line_no });
        }
        Ok(None)
    }

    /// Accumulates body lines into `seq_buf` until the next header or end of input.
    fn read_body(&mut self) -> BioResult<()> {
        self.seq_buf.clear();
        self.invalid.clear();
        let alphabet = self.config.kind.alphabet();

        while self.read_line()? {
            if self.buf_line.first() == Some(&b'>') {
                self.pending_header = Some((mem::take(&mut self.buf_line), self.line_no));
                break;
            }
            if is_blank(&self.buf_line) {
                continue;
            }
            for (col, &raw) in self.buf_line.iter().enumerate() {
                let b = raw.to_ascii_uppercase();
                if alphabet.contains(b) {
                    self.seq_buf.push(b);
                    continue;
                }
                match self.config.policy {
                    SymbolPolicy::Strict => {
                        return Err(BioError::InvalidSymbol {
                            ch: raw as char,
                            line: self.line_no,
                            column: col + 1,
                        })
                    }
                    SymbolPolicy::LenientStrip => self.invalid.record(raw),
                }
            }
        }
        Ok(())
    }

    fn skip_body(&mut self) -> BioResult<()> {
        while self.read_line()? {
            if self.buf_line.first() == Some(&b'>') {
                self.pending_header = Some((mem::take(&mut self.buf_line), self.line_no));
                break;
            }
        }
        Ok(())
    }

    /// Drops the current record after a header error.
    fn discard_record(&mut self, err: BioError) -> BioResult<Record> {
        if self.config.policy == SymbolPolicy::LenientStrip {
            warn!("skipping record: {err}");
            self.skip_body()?;
        }
        Err(err)
    }

    fn next_record(&mut self) -> Option<BioResult<Record>> {
        let (header_line, header_line_no) = match self.next_header() {
            Ok(Some(header)) => header,
            Ok(None) => return None,
            Err(err) => return Some(Err(err)),
        };

        let (id, desc) = match parse_header(&header_line, header_line_no) {
            Ok(parsed) => parsed,
            Err(err) => return Some(self.discard_record(err)),
        };

        if self.config.unique_ids && !self.seen_ids.insert(id.clone()) {
            let err = BioError::DuplicateIdentifier {
                id: id.into(),
                line: header_line_no,
            };
            return Some(self.discard_record(err));
        }

        if let Err(err) = self.read_body() {
            return Some(Err(err));
        }

        let capacity = self.seq_buf.capacity();
        let seq = mem::replace(&mut self.seq_buf, Vec::with_capacity(capacity));
        let invalid = mem::take(&mut self.invalid);
        if !invalid.is_empty() {
            warn!(
                "record '{}': stripped {} invalid symbol(s)",
                id,
                invalid.total()
            );
        }
        debug!(
            "parsed record '{}' ({} symbols) from line {}",
            id,
            seq.len(),
            header_line_no
        );

        Some(Ok(Record::from_parts(
            id,
            desc,
            seq,
            self.config.kind,
            invalid,
        )))
    }
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = BioResult<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let item = self.next_record();
        match &item {
            None => self.finished = true,
            Some(Err(err))
                if !(err.is_record_level() && self.config.policy == SymbolPolicy::LenientStrip) =>
            {
                self.finished = true;
            }
            Some(_) => {}
        }
        item
    }
}

impl<R: BufRead> FusedIterator for FastaReader<R> {}

pub fn fasta_records_from_reader<R: BufRead>(reader: R) -> FastaReader<R> {
    FastaReader::new(reader)
}

/// Collects every record; the first error aborts the read.
pub fn read_fasta_records_from_reader<R: BufRead>(
    reader: R,
    config: ParseConfig,
) -> BioResult<Vec<Record>> {
    FastaReader::with_config(reader, config).collect()
}

pub fn read_fasta_records_from_path(
    path: impl AsRef<Path>,
    config: ParseConfig,
) -> BioResult<Vec<Record>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    read_fasta_records_from_reader(reader, config)
}

pub fn read_fasta_records_from_bytes(data: &[u8], config: ParseConfig) -> BioResult<Vec<Record>> {
    let reader = BufReader::new(Cursor::new(data));
    read_fasta_records_from_reader(reader, config)
}

/// Collects records, setting aside those dropped for header errors.
///
/// Fatal errors still abort. Under [`SymbolPolicy::Strict`] every error is fatal.
pub fn read_fasta_report_from_reader<R: BufRead>(
    reader: R,
    config: ParseConfig,
) -> BioResult<ReadReport<Vec<Record>>> {
    let mut data = Vec::new();
    let mut skipped = Vec::new();

    for item in FastaReader::with_config(reader, config) {
        match item {
            Ok(record) => data.push(record),
            Err(err) if err.is_record_level() && config.policy == SymbolPolicy::LenientStrip => {
                let id = match &err {
                    BioError::DuplicateIdentifier { id, .. } => Some(id.as_str().into()),
                    _ => None,
                };
                skipped.push(SkippedRecord {
                    line: err.line().unwrap_or(0),
                    id,
                    message: err.to_string().into(),
                });
            }
            Err(err) => return Err(err),
        }
    }

    Ok(ReadReport { data, skipped })
}

pub fn read_fasta_report_from_bytes(
    data: &[u8],
    config: ParseConfig,
) -> BioResult<ReadReport<Vec<Record>>> {
    let reader = BufReader::new(Cursor::new(data));
    read_fasta_report_from_reader(reader, config)
}

/// Writes records as `>id desc` headers with bodies wrapped at `line_width`.
pub fn write_fasta_records_to_writer<W, I>(writer: W, records: I, line_width: usize) -> BioResult<()>
where
    W: Write,
    I: IntoIterator,
    I::Item: Borrow<Record>,
{
    if line_width == 0 {
        return Err(BioError::InvalidLineWidth { width: line_width });
    }
    let mut writer = BufWriter::new(writer);
    for record in records {
        write_fasta_record(&mut writer, record.borrow(), line_width)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_fasta_records_to_path<I>(
    path: impl AsRef<Path>,
    records: I,
    line_width: usize,
) -> BioResult<()>
where
    I: IntoIterator,
    I::Item: Borrow<Record>,
{
    let file = File::create(path)?;
    write_fasta_records_to_writer(file, records, line_width)
}

fn write_fasta_record<W: Write>(writer: &mut W, record: &Record, line_width: usize) -> BioResult<()> {
    writer.write_all(b">")?;
    write_header_field(writer, record.id())?;
    if !record.desc().is_empty() {
        writer.write_all(b" ")?;
        write_header_field(writer, record.desc())?;
    }
    writer.write_all(b"\n")?;
    for chunk in record.seq().chunks(line_width) {
        writer.write_all(chunk)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

fn write_header_field<W: Write>(writer: &mut W, value: &str) -> BioResult<()> {
    let bytes = value.as_bytes();
    if memchr2(b'\n', b'\r', bytes).is_some() {
        for &b in bytes {
            match b {
                b'\n' | b'\r' => writer.write_all(b" ")?,
                _ => writer.write_all(&[b])?,
            }
        }
    } else {
        writer.write_all(bytes)?;
    }
    Ok(())
}

fn parse_header(header_line: &[u8], line_no: usize) -> BioResult<(Box<str>, Box<str>)> {
    let header = header_line
        .strip_prefix(b">")
        .ok_or(BioError::MalformedRecord { line: line_no })?;
    let header = std::str::from_utf8(header)
        .map_err(|_| BioError::HeaderEncoding { line: line_no })?
        .trim();
    if header.is_empty() {
        return Err(BioError::EmptyIdentifier { line: line_no });
    }

    let (id, desc) = match header.find(char::is_whitespace) {
        Some(idx) => (&header[..idx], header[idx..].trim()),
        None => (header, ""),
    };

    Ok((id.into(), desc.into()))
}

fn trim_eol(line: &mut Vec<u8>) {
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
}

#[inline]
fn is_blank(line: &[u8]) -> bool {
    line.iter().all(u8::is_ascii_whitespace)
}
