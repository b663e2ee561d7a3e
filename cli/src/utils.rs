use std::fs;
use std::io::{self, Read};

use crate::error::Result;

/// Read text from a file or stdin
///
/// If `file` is `Some`, reads from the specified file path.
/// If `file` is `None`, reads from stdin.
/// One trailing line break is removed so `echo hi | henkan ...` encodes `hi`.
pub(crate) fn read_input(file: Option<&str>) -> Result<String> {
    let bytes = match file {
        Some(path) => fs::read(path)?,
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            buffer
        }
    };
    let mut text = String::from_utf8(bytes)?;
    strip_line_break(&mut text);
    Ok(text)
}

fn strip_line_break(text: &mut String) {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::strip_line_break;

    #[test]
    fn test_strip_line_break() {
        for (input, expected) in [
            ("hi\n", "hi"),
            ("hi\r\n", "hi"),
            ("hi\n\n", "hi\n"),
            ("hi", "hi"),
            ("", ""),
        ] {
            let mut text = input.to_string();
            strip_line_break(&mut text);
            assert_eq!(text, expected);
        }
    }
}
