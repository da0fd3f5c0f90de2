//! Decoder for the compact grid-definition bitmap encoding.
//!
//! A dataset records the grid definitions it uses as a bitmap over the
//! catalog's integer codes. The stored form is a short text encoding:
//!
//! ```text
//! !3,7,12                   literal list of codes
//! start[<N>mult]:bits       bit string starting at code `start`
//! start:bits-rep/pattern-…  followed by repeated sections
//! start:-rep/{group}tail    a bracketed group repeated `rep` times
//! ```
//!
//! Each character of a bit string advances a cursor over the code space and
//! may emit the code under the cursor:
//!
//! | chars        | meaning                                   |
//! |--------------|-------------------------------------------|
//! | `0`          | skip 1                                    |
//! | `1`          | emit                                      |
//! | `A`..=`Z`    | emit 2..=27 consecutive codes             |
//! | `a`..=`z`    | skip 2..=27                               |
//! | `2`..=`9`    | skip 1..=8, then emit                     |
//! | `!`..=`+`    | skip 9..=19, then emit                    |
//! | `;`..=`@`    | skip 21..=26, then emit                   |
//! | `.`          | skip 27, then emit                        |
//!
//! With a multiplier `m`, each emitted code is reduced by a bias of
//! `m × (codes emitted so far)`.

use std::collections::BTreeSet;
use thiserror::Error;

/// Errors raised for malformed bitmap strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitmapError {
    #[error("invalid bit '{bit}' in bitmap '{bitmap}'")]
    InvalidBit { bit: char, bitmap: String },

    #[error("malformed bitmap section '{section}' in bitmap '{bitmap}'")]
    MalformedSection { section: String, bitmap: String },

    #[error("missing end-of-group delimiter in bitmap '{bitmap}'")]
    UnterminatedGroup { bitmap: String },

    #[error("invalid number '{value}' in bitmap '{bitmap}'")]
    InvalidNumber { value: String, bitmap: String },

    #[error("decoded code out of range in bitmap '{bitmap}'")]
    CodeOverflow { bitmap: String },
}

/// Decode a bitmap string into the grid-definition codes it references.
///
/// Codes come out in the order they are encoded, which is ascending for
/// every bitmap with a zero multiplier. A malformed bitmap is an error; no
/// partial result is returned.
pub fn decode(bitmap: &str) -> Result<Vec<i64>, BitmapError> {
    let Some(colon) = bitmap.find(':') else {
        return match bitmap.strip_prefix('!') {
            Some(list) => list
                .split(',')
                .map(|value| parse_number(value, bitmap))
                .collect(),
            None => Ok(Vec::new()),
        };
    };

    let prefix = &bitmap[..colon];
    let (start, multiplier) = match prefix.split_once("<N>") {
        Some((start, multiplier)) => (
            parse_number(start, bitmap)?,
            parse_number(multiplier, bitmap)?,
        ),
        None => (parse_number(prefix, bitmap)?, 0),
    };

    let mut decoder = Decoder {
        bitmap,
        next_val: i128::from(start),
        multiplier,
        values: Vec::new(),
    };

    let mut sections = bitmap[colon + 1..].split('-');
    if let Some(bits) = sections.next() {
        for bit in bits.chars() {
            decoder.decode_bit(bit)?;
        }
    }
    for section in sections {
        decoder.decode_section(section)?;
    }

    Ok(decoder.values)
}

/// Decode several bitmaps and merge their codes into one ordered set.
pub fn decode_many<I, S>(bitmaps: I) -> Result<BTreeSet<i64>, BitmapError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut codes = BTreeSet::new();
    for bitmap in bitmaps {
        codes.extend(decode(bitmap.as_ref())?);
    }
    Ok(codes)
}

struct Decoder<'a> {
    bitmap: &'a str,
    /// Cursor over the code space. Emitted codes are range-checked.
    next_val: i128,
    multiplier: i64,
    values: Vec<i64>,
}

impl Decoder<'_> {
    /// Decode one character with the bias taken from the current output size.
    fn decode_bit(&mut self, bit: char) -> Result<(), BitmapError> {
        let emitted = self.values.len();
        self.decode_bit_with(bit, emitted)
    }

    fn decode_bit_with(&mut self, bit: char, emitted: usize) -> Result<(), BitmapError> {
        let bias = i128::from(self.multiplier) * emitted as i128;
        let (skip, emit) = match bit {
            '0' => (1, 0),
            '1' => (0, 1),
            'A'..='Z' => (0, bit as i128 - 63),
            'a'..='z' => (bit as i128 - 95, 0),
            '2'..='9' => (bit as i128 - 49, 1),
            '!'..='+' => (bit as i128 - 24, 1),
            ';'..='@' => (bit as i128 - 38, 1),
            '.' => (27, 1),
            _ => {
                return Err(BitmapError::InvalidBit {
                    bit,
                    bitmap: self.bitmap.to_string(),
                })
            }
        };

        self.next_val += skip;
        for _ in 0..emit {
            let code =
                i64::try_from(self.next_val - bias).map_err(|_| BitmapError::CodeOverflow {
                    bitmap: self.bitmap.to_string(),
                })?;
            self.values.push(code);
            self.next_val += 1;
        }
        Ok(())
    }

    /// Decode a `repeat/pattern` section.
    fn decode_section(&mut self, section: &str) -> Result<(), BitmapError> {
        let (repeat, pattern) = section
            .split_once('/')
            .ok_or_else(|| self.malformed(section))?;
        let repeat = self.parse_repeat(repeat)?;

        let tail = if let Some(group) = pattern.strip_prefix('{') {
            let end = group.find('}').ok_or_else(|| BitmapError::UnterminatedGroup {
                bitmap: self.bitmap.to_string(),
            })?;
            for _ in 0..repeat {
                self.decode_group(&group[..end])?;
            }
            &group[end + 1..]
        } else {
            let mut chars = pattern.chars();
            let bit = chars.next().ok_or_else(|| self.malformed(section))?;
            for _ in 0..repeat {
                self.decode_bit(bit)?;
            }
            chars.as_str()
        };

        for bit in tail.chars() {
            self.decode_bit(bit)?;
        }
        Ok(())
    }

    /// Decode one pass over a bracketed group.
    ///
    /// The whole pass uses the bias in effect when it started.
    fn decode_group(&mut self, group: &str) -> Result<(), BitmapError> {
        let emitted = self.values.len();
        let mut parts = group.split('/');
        let (repeat, pattern) = match (parts.next(), parts.next(), parts.next()) {
            (Some(pattern), None, _) => (1, pattern),
            (Some(repeat), Some(pattern), None) => (self.parse_repeat(repeat)?, pattern),
            _ => return Err(self.malformed(group)),
        };

        let mut chars = pattern.chars();
        let bit = chars.next().ok_or_else(|| self.malformed(group))?;
        for _ in 0..repeat {
            self.decode_bit_with(bit, emitted)?;
        }
        for bit in chars {
            self.decode_bit_with(bit, emitted)?;
        }
        Ok(())
    }

    fn parse_repeat(&self, value: &str) -> Result<usize, BitmapError> {
        value.trim().parse().map_err(|_| BitmapError::InvalidNumber {
            value: value.to_string(),
            bitmap: self.bitmap.to_string(),
        })
    }

    fn malformed(&self, section: &str) -> BitmapError {
        BitmapError::MalformedSection {
            section: section.to_string(),
            bitmap: self.bitmap.to_string(),
        }
    }
}

fn parse_number(value: &str, bitmap: &str) -> Result<i64, BitmapError> {
    value.trim().parse().map_err(|_| BitmapError::InvalidNumber {
        value: value.to_string(),
        bitmap: bitmap.to_string(),
    })
}
