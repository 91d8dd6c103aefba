//! Parsing of a single `source;target;weight` record.

use std::net::Ipv4Addr;

use crate::errors::RecordError;

/// A validated record before its addresses are interned.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Record {
    pub(crate) source: Ipv4Addr,
    pub(crate) target: Ipv4Addr,
    pub(crate) weight: i64,
}

/// Splits `line` on `delimiter` and validates the three fields.
///
/// Fields are trimmed before validation. Addresses use the strict dotted-quad
/// grammar of [`Ipv4Addr`]'s `FromStr`, which rejects leading zeros, and the
/// weight is an optionally signed decimal `i64`.
pub(crate) fn parse_record(line: &str, delimiter: char) -> Result<Record, RecordError> {
    let fields: Vec<&str> = line.split(delimiter).map(str::trim).collect();
    let [source, target, weight] = fields.as_slice() else {
        return Err(RecordError::FieldCount {
            found: fields.len(),
        });
    };

    let source = parse_address(source)?;
    let target = parse_address(target)?;
    let weight = parse_weight(weight)?;
    if source == target {
        return Err(RecordError::SelfLoop { address: source });
    }
    Ok(Record {
        source,
        target,
        weight,
    })
}

/// Returns `true` when no field of `line` parses as an address or a weight.
///
/// A line that carries any address or integer is treated as data, so a
/// damaged first row is reported instead of being mistaken for column names.
pub(crate) fn is_header_like(line: &str, delimiter: char) -> bool {
    line.split(delimiter)
        .map(str::trim)
        .all(|field| parse_address(field).is_err() && parse_weight(field).is_err())
}

fn parse_address(field: &str) -> Result<Ipv4Addr, RecordError> {
    field.parse().map_err(|_| RecordError::InvalidAddress {
        field: field.to_owned(),
    })
}

fn parse_weight(field: &str) -> Result<i64, RecordError> {
    field.parse().map_err(|_| RecordError::InvalidWeight {
        field: field.to_owned(),
    })
}
