use crate::renderer::colours::RESET;

pub fn horizontal_line(width: usize) -> String {
    "─".repeat(width)
}

pub fn text(colour: &str, content: &str) -> String {
    format!("{}{}{}", colour, content, RESET)
}

/// Pads `content` to `width` display columns, counting characters rather than bytes.
pub fn pad_right(content: &str, width: usize) -> String {
    let len = content.chars().count();
    if len >= width {
        return content.to_string();
    }
    format!("{}{}", content, " ".repeat(width - len))
}

pub fn progress_bar(width: usize, percentage: f32, colour: &str) -> String {
    let inner = width.saturating_sub(2);
    let filled = ((percentage.clamp(0.0, 1.0) * inner as f32).round() as usize).min(inner);

    format!(
        "[{}{}{}{}]",
        colour,
        "█".repeat(filled),
        RESET,
        "░".repeat(inner - filled)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(s: &str) -> String {
        s.replace(RESET, "").replace("\x1b[0;34m", "")
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(strip(&progress_bar(12, 0.5, "\x1b[0;34m")), "[█████░░░░░]");
        assert_eq!(strip(&progress_bar(12, 0.0, "\x1b[0;34m")), "[░░░░░░░░░░]");
        assert_eq!(strip(&progress_bar(12, 1.7, "\x1b[0;34m")), "[██████████]");
        assert_eq!(strip(&progress_bar(1, 0.5, "\x1b[0;34m")), "[]");
    }

    #[test]
    fn test_pad_right_counts_characters() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_right("جاف", 5).chars().count(), 5);
        assert_eq!(pad_right("toolong", 3), "toolong");
    }

    #[test]
    fn test_horizontal_line() {
        assert_eq!(horizontal_line(3), "───");
    }
}
