//! Interactive yes/no console prompt.

use std::io::{BufRead, Write};

/// Ask a yes/no question on stdin/stdout.
///
/// An empty answer picks `default_yes`. Unrecognized answers re-ask.
pub fn yes_no(question: &str, default_yes: bool) -> bool {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    yes_no_with(question, default_yes, &mut input, &mut output)
}

fn yes_no_with(
    question: &str,
    default_yes: bool,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> bool {
    let hint = if default_yes { "[Y/n]" } else { "[y/N]" };

    loop {
        let _ = write!(output, "{question} {hint} ");
        let _ = output.flush();

        let mut line = String::new();
        if input.read_line(&mut line).is_err() {
            return default_yes;
        }

        match line.trim().to_ascii_lowercase().as_str() {
            "" => return default_yes,
            "y" | "yes" => return true,
            "n" | "no" => return false,
            other => {
                let _ = writeln!(output, "unrecognized answer {other:?}, expected y or n");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(answer: &str, default_yes: bool) -> bool {
        let mut input = answer.as_bytes();
        let mut output = Vec::new();
        yes_no_with("Continue?", default_yes, &mut input, &mut output)
    }

    #[test]
    fn test_explicit_answers() {
        assert!(ask("y\n", false));
        assert!(ask("yes\n", false));
        assert!(!ask("n\n", true));
        assert!(!ask("no\n", true));
    }

    #[test]
    fn test_empty_answer_uses_default() {
        assert!(!ask("\n", false));
        assert!(ask("\n", true));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(ask("YES\n", false));
        assert!(!ask("No\n", true));
    }

    #[test]
    fn test_reasks_on_garbage() {
        assert!(ask("maybe\ny\n", false));
    }

    #[test]
    fn test_eof_uses_default() {
        // read_line returning Ok(0) leaves the line empty
        assert!(!ask("", false));
    }
}
