use std::collections::HashSet;

use glam::DVec3;
use tracing::{debug, warn};

use crate::error::{HouseLightsError, Result};
use crate::types::{BoundingBox, House, Level, Room};

/// Record types recognised by their leading tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecordTag {
    /// `ASCII <version>` format line.
    Preamble,
    /// `H`: house summary.
    Header,
    /// `R`: region.
    Region,
    /// `L`: level. Only the index and label are read.
    Level,
    /// Portals, surfaces, vertices, images, categories, objects,
    /// segments and anything unknown.
    Ignored,
}

impl RecordTag {
    fn from_token(token: &str) -> Self {
        match token {
            "ASCII" => RecordTag::Preamble,
            "H" => RecordTag::Header,
            "R" => RecordTag::Region,
            "L" => RecordTag::Level,
            _ => RecordTag::Ignored,
        }
    }

    /// Minimum token count (tag included) for a record to be usable.
    fn min_fields(self) -> usize {
        match self {
            RecordTag::Header => HEADER_BBOX + 6,
            RecordTag::Region => REGION_BBOX + 6,
            RecordTag::Level => LEVEL_LABEL + 1,
            RecordTag::Preamble | RecordTag::Ignored => 1,
        }
    }
}

const HEADER_NAME: usize = 1;
const HEADER_REGION_COUNT: usize = 10;
const HEADER_BBOX: usize = 18;

const REGION_INDEX: usize = 1;
const REGION_LEVEL: usize = 2;
const REGION_LABEL: usize = 5;
const REGION_BBOX: usize = 9;

const LEVEL_INDEX: usize = 1;
const LEVEL_LABEL: usize = 3;

struct Header {
    name: String,
    declared_regions: Option<usize>,
    bounds: BoundingBox,
}

/// Tokens of one record plus where it came from, for error context.
struct Record<'a> {
    source: &'a str,
    line: usize,
    tag: RecordTag,
    fields: Vec<&'a str>,
}

impl<'a> Record<'a> {
    fn error(&self, reason: impl Into<String>) -> HouseLightsError {
        HouseLightsError::malformed(self.source, Some(self.line), reason)
    }

    fn check_len(&self, what: &str) -> Result<()> {
        let need = self.tag.min_fields();
        if self.fields.len() < need {
            return Err(self.error(format!(
                "{what} record has {} fields, expected at least {need}",
                self.fields.len()
            )));
        }
        Ok(())
    }

    fn number(&self, i: usize) -> Result<f64> {
        let token = self.fields[i];
        let value: f64 = token
            .parse()
            .map_err(|_| self.error(format!("field {i} is not a number: '{token}'")))?;
        if !value.is_finite() {
            return Err(self.error(format!("field {i} is not finite: '{token}'")));
        }
        Ok(value)
    }

    fn index(&self, i: usize) -> Result<u32> {
        let token = self.fields[i];
        token
            .parse()
            .map_err(|_| self.error(format!("field {i} is not a valid index: '{token}'")))
    }

    /// Six numbers starting at `start`: min x/y/z then max x/y/z.
    fn bounds(&self, start: usize) -> Result<BoundingBox> {
        let min = DVec3::new(
            self.number(start)?,
            self.number(start + 1)?,
            self.number(start + 2)?,
        );
        let max = DVec3::new(
            self.number(start + 3)?,
            self.number(start + 4)?,
            self.number(start + 5)?,
        );
        let bb = BoundingBox::new(min, max);
        if !bb.is_ordered() {
            return Err(self.error(format!("bounding box min {min} exceeds max {max}")));
        }
        Ok(bb)
    }
}

/// Parse the textual content of one `.house` annotation file.
///
/// `source` names the house in error messages (usually the file stem).
/// Only the summary (`H`) and region (`R`) records are read; every other
/// record type is skipped.
pub fn parse_house(source: &str, content: &str) -> Result<House> {
    let mut header: Option<Header> = None;
    let mut rooms: Vec<Room> = Vec::new();
    let mut levels: Vec<Level> = Vec::new();
    let mut seen_ids: HashSet<u32> = HashSet::new();
    let mut skipped = 0usize;

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let record = Record {
            source,
            line: idx + 1,
            tag: RecordTag::from_token(fields[0]),
            fields,
        };

        match record.tag {
            RecordTag::Preamble => {
                if header.is_some() {
                    return Err(record.error("format line after the summary record"));
                }
            }
            RecordTag::Header => {
                if header.is_some() {
                    return Err(record.error("duplicate summary record"));
                }
                header = Some(parse_header(&record)?);
            }
            RecordTag::Region | RecordTag::Level | RecordTag::Ignored if header.is_none() => {
                return Err(record.error(format!(
                    "expected summary record 'H' before '{}' record",
                    record.fields[0]
                )));
            }
            RecordTag::Region => {
                let room = parse_region(&record)?;
                if !seen_ids.insert(room.id) {
                    return Err(record.error(format!("duplicate region index {}", room.id)));
                }
                rooms.push(room);
            }
            RecordTag::Level => match parse_level(&record) {
                Some(level) if levels.iter().all(|l| l.index != level.index) => {
                    levels.push(level);
                }
                Some(level) => {
                    debug!(
                        house = source,
                        line = record.line,
                        index = level.index,
                        "Duplicate level record skipped"
                    );
                    skipped += 1;
                }
                None => {
                    debug!(house = source, line = record.line, "Unreadable level record skipped");
                    skipped += 1;
                }
            },
            RecordTag::Ignored => skipped += 1,
        }
    }

    let Some(header) = header else {
        let reason = if content.trim().is_empty() {
            "file is empty"
        } else {
            "missing summary record 'H'"
        };
        return Err(HouseLightsError::malformed(source, None, reason));
    };

    if let Some(declared) = header.declared_regions {
        if declared != rooms.len() {
            warn!(
                house = source,
                declared,
                parsed = rooms.len(),
                "Region count differs from summary record"
            );
        }
    }

    debug!(
        house = source,
        name = %header.name,
        rooms = rooms.len(),
        levels = levels.len(),
        skipped,
        "Parsed house file"
    );

    Ok(House {
        name: header.name,
        bounds: header.bounds,
        rooms,
        levels,
    })
}

fn parse_header(record: &Record<'_>) -> Result<Header> {
    record.check_len("summary")?;
    let count = record.fields[HEADER_REGION_COUNT];
    let declared_regions = match count.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            warn!(
                house = record.source,
                line = record.line,
                value = count,
                "Summary region count is not a number; count check skipped"
            );
            None
        }
    };
    Ok(Header {
        name: record.fields[HEADER_NAME].to_string(),
        declared_regions,
        bounds: record.bounds(HEADER_BBOX)?,
    })
}

/// Level records are optional metadata: an unreadable one is skipped.
fn parse_level(record: &Record<'_>) -> Option<Level> {
    if record.fields.len() < record.tag.min_fields() {
        return None;
    }
    Some(Level {
        index: record.index(LEVEL_INDEX).ok()?,
        label: record.fields[LEVEL_LABEL].to_string(),
    })
}

fn parse_region(record: &Record<'_>) -> Result<Room> {
    record.check_len("region")?;
    Ok(Room {
        id: record.index(REGION_INDEX)?,
        level: record.index(REGION_LEVEL)?,
        label: record.fields[REGION_LABEL].to_string(),
        bounds: record.bounds(REGION_BBOX)?,
    })
}
