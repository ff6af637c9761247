// SPDX-License-Identifier: Apache-2.0
// SPDX-FileCopyrightText: Copyright The Lance Authors

use std::cmp::Ordering;

/// Return both argmin and minimal value over an iterator of fallible values,
/// stopping at the first error.
///
/// Only a strictly smaller value replaces the current minimum, so ties resolve
/// to the lowest index. Unordered values (`NaN`) are skipped.
///
/// Return
/// ------
/// - `Ok(Some(idx, min_value))` or
/// - `Ok(None)` if iterator is empty or holds only unordered values.
pub fn try_argmin_value<T: PartialOrd + Copy, E>(
    iter: impl Iterator<Item = std::result::Result<T, E>>,
) -> std::result::Result<Option<(u32, T)>, E> {
    let mut min: Option<(u32, T)> = None;
    for (idx, value) in iter.enumerate() {
        let value = value?;
        if value.partial_cmp(&value).is_none() {
            continue;
        }
        let replace = match min {
            None => true,
            Some((_, min_value)) => matches!(value.partial_cmp(&min_value), Some(Ordering::Less)),
        };
        if replace {
            min = Some((idx as u32, value));
        }
    }
    Ok(min)
}
