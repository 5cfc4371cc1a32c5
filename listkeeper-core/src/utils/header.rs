//! Boxed banner printed above interactive sessions.

use std::io::{self, Write};

const TOTAL_WIDTH: usize = 60;
const BORDER: &str = "***";

/// Writes `msg` centred inside a 60 column box of `*`.
///
/// Messages too wide for the box are written without padding.
///
/// ```rust
/// use listkeeper_core::utils::pretty_header;
///
/// let mut out = Vec::new();
/// pretty_header(&mut out, "Hello").unwrap();
/// assert_eq!(String::from_utf8(out).unwrap().lines().count(), 3);
/// ```
pub fn pretty_header<W: Write + ?Sized>(out: &mut W, msg: &str) -> io::Result<()> {
    let edge = "*".repeat(TOTAL_WIDTH);
    let slack = TOTAL_WIDTH.saturating_sub(msg.chars().count() + 2 * BORDER.len());
    let padding = " ".repeat(slack / 2);
    let odd = if slack % 2 == 1 { " " } else { "" };

    writeln!(out, "{}", edge)?;
    writeln!(out, "{}{}{}{}{}{}", BORDER, padding, msg, padding, odd, BORDER)?;
    writeln!(out, "{}", edge)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(msg: &str) -> Vec<String> {
        let mut out = Vec::new();
        pretty_header(&mut out, msg).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_header_odd_slack_pads_right() {
        let lines = render("List Keeper");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "*".repeat(60));
        assert_eq!(lines[2], "*".repeat(60));
        assert_eq!(lines[1].len(), 60);
        assert!(lines[1].starts_with("***"));
        assert!(lines[1].ends_with("***"));
        // 60 - 11 - 6 = 43, so 21 spaces left and 22 right
        assert_eq!(lines[1], format!("***{}List Keeper{} ***", " ".repeat(21), " ".repeat(21)));
    }

    #[test]
    fn test_header_even_slack() {
        let lines = render("Menu");
        assert_eq!(lines[1].len(), 60);
        assert_eq!(lines[1], format!("***{}Menu{}***", " ".repeat(25), " ".repeat(25)));
    }

    #[test]
    fn test_header_message_wider_than_box() {
        let msg = "x".repeat(70);
        let lines = render(&msg);
        assert_eq!(lines[1], format!("***{}***", msg));
    }
}
