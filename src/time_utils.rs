// SPDX-License-Identifier: MIT

//! Shared helpers for date parsing.

use chrono::NaiveDate;

/// Wire format for the date-of-birth field.
pub const DOB_FORMAT: &str = "%Y-%m-%d";

/// Parse a date-of-birth string in `YYYY-MM-DD` form.
///
/// chrono alone is lenient about the shape: numeric fields accept sign and
/// space padding, and month and day may be unpadded. The digits-and-dashes
/// layout is therefore checked byte for byte before parsing; impossible
/// calendar dates are then rejected by the parse itself.
pub fn parse_dob(dob: &str) -> Option<NaiveDate> {
    let well_formed = dob.len() == 10
        && dob.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return None;
    }
    NaiveDate::parse_from_str(dob, DOB_FORMAT).ok()
}
