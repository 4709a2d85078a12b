/// Splits text into lines, dropping the line endings. A line ending right at
/// the end of the text doesn't start a new, empty line.
///
/// `\n`, `\r\n` and a lone `\r` are all treated as line endings.
///
/// ## Example
///
/// ```not_rust
/// "Hello\nWorld!" -> ["Hello", "World!"]
/// "Line 1\r\nLine 2\r\n" -> ["Line 1", "Line 2"]
/// ```
pub fn split_lines(text: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut line_start = 0;

    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c == '\n' {
            result.push(text[line_start..i].to_owned());
            line_start = i + 1;
        } else if c == '\r' {
            result.push(text[line_start..i].to_owned());
            if chars.peek() == Some(&(i + 1, '\n')) {
                chars.next(); // consume \n
                line_start = i + 2;
            } else {
                line_start = i + 1;
            }
        }
    }

    if line_start < text.len() {
        result.push(text[line_start..].to_owned());
    }

    result
}
