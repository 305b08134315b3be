use crate::point::Extent;

/// Byte offset reached by walking `extent` from the start of `text`.
///
/// Rows are crossed at `'\n'`; columns are counted in `char`s. A walk past the end of a row
/// or of the text stops there.
pub(crate) fn byte_offset_for_extent(text: &str, extent: Extent) -> usize {
    let mut row_start = 0;
    for _ in 0..extent.rows {
        match text[row_start..].find('\n') {
            Some(idx) => row_start += idx + 1,
            None => return text.len(),
        }
    }

    let row = &text[row_start..];
    let row_len = row.find('\n').unwrap_or(row.len());
    let column_offset = row[..row_len]
        .char_indices()
        .nth(extent.columns)
        .map_or(row_len, |(idx, _)| idx);
    row_start + column_offset
}

/// Split `text` at the position reached by `extent`.
pub(crate) fn split_at_extent(text: &str, extent: Extent) -> (&str, &str) {
    text.split_at(byte_offset_for_extent(text, extent))
}
