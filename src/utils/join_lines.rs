/// Join lines back into a single string, adding a `\n` after each line. This
/// is the reverse of splitting a text into lines.
#[must_use]
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut result = String::with_capacity(lines.iter().map(|line| line.as_ref().len() + 1).sum());
    for line in lines {
        result.push_str(line.as_ref());
        result.push('\n');
    }

    result
}
