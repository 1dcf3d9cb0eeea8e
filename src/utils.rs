/// Calculates the 1-based line and column for a byte offset into the source text.
/// Columns count characters, not bytes. Only called once an error has occurred,
/// since it walks the text up to the offset.
pub fn get_line_and_column(source: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;
    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    (line, column)
}
