use colored::Colorize;
use gradebook::api::{CmdMessage, CmdResult, GradeStats, MessageLevel};
use gradebook::model::Student;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

const ID_WIDTH: usize = 4;
const NAME_WIDTH: usize = 20;
const SUBJECT_WIDTH: usize = 15;
const GRADE_WIDTH: usize = 6;
const RULE_WIDTH: usize = 50;

pub(super) fn write_result<W: Write>(out: &mut W, result: &CmdResult) -> io::Result<()> {
    if !result.listed.is_empty() {
        write_students(out, &result.listed)?;
    }
    if let Some(stats) = &result.stats {
        write_stats(out, stats)?;
    }
    write_messages(out, &result.messages)
}

pub(super) fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
        }
    }
    Ok(())
}

pub(super) fn write_students<W: Write>(out: &mut W, students: &[Student]) -> io::Result<()> {
    writeln!(
        out,
        "{} {} {} {}",
        pad_right("id", ID_WIDTH),
        pad_right("name", NAME_WIDTH),
        pad_right("subject", SUBJECT_WIDTH),
        pad_left("grade", GRADE_WIDTH)
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    for s in students {
        let grade = s.grade.map(|g| g.to_string()).unwrap_or_default();
        writeln!(
            out,
            "{} {} {} {}",
            pad_right(&s.id.to_string(), ID_WIDTH),
            pad_right(&truncate(&s.name, NAME_WIDTH), NAME_WIDTH),
            pad_right(&truncate(&s.subject, SUBJECT_WIDTH), SUBJECT_WIDTH),
            pad_left(&grade, GRADE_WIDTH)
        )?;
    }
    Ok(())
}

pub(super) fn write_stats<W: Write>(out: &mut W, stats: &GradeStats) -> io::Result<()> {
    writeln!(out, "{}", stats.scope.to_string().bold())?;
    writeln!(out, " - Count: {}", stats.count)?;
    writeln!(out, " - Average grade: {:.2}", stats.mean)?;
    writeln!(out, " - Highest grade: {}", stats.highest)?;
    writeln!(out, " - Lowest grade: {}", stats.lowest)
}

/// Keeps the first `max_chars` characters of `s`.
fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

fn pad_right(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn pad_left(s: &str, width: usize) -> String {
    format!("{}{}", " ".repeat(width.saturating_sub(s.width())), s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradebook::api::StatsScope;
    use gradebook::model::Grade;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn table_has_fixed_columns() {
        let students = vec![
            Student::new(12, "Ada", "CS", Grade::new(95)),
            Student::new(3, "Alan", "Logic", None),
        ];
        let text = render(|out| write_students(out, &students));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "id   name                 subject          grade");
        assert_eq!(lines[1], "-".repeat(50));
        assert_eq!(lines[2], "12   Ada                  CS                  95");
        assert_eq!(lines[3], "3    Alan                 Logic                 ");
    }

    #[test]
    fn long_fields_are_truncated() {
        let students = vec![Student::new(
            1,
            "Bartholomew Fitzgerald-Huxley",
            "Advanced Mathematics",
            Grade::new(100),
        )];
        let text = render(|out| write_students(out, &students));
        let row = text.lines().nth(2).unwrap();

        assert!(row.contains("Bartholomew Fitzgera "));
        assert!(row.contains("Advanced Mathem "));
        assert!(!row.contains("Huxley"));
        assert!(row.ends_with("   100"));
    }

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate("日本語テキスト", 2), "日本");
        assert_eq!(truncate("日本語テキスト", 5), "日本語テキ");
        assert_eq!(truncate("short", 20), "short");
        assert_eq!(pad_right("日本", 6), "日本  ");
    }

    #[test]
    fn stats_block() {
        let stats = GradeStats {
            scope: StatsScope::Subject("Math".into()),
            count: 3,
            mean: 80.0,
            highest: 90,
            lowest: 70,
        };
        let text = render(|out| write_stats(out, &stats));
        assert_eq!(
            text,
            "Statistics for subject: Math\n - Count: 3\n - Average grade: 80.00\n - Highest grade: 90\n - Lowest grade: 70\n"
        );
    }

    #[test]
    fn result_renders_messages_after_rows() {
        let result = CmdResult::default()
            .with_listed(vec![Student::new(1, "Ada", "CS", Grade::new(95))])
            .with_message(CmdMessage::info("done"));
        let text = render(|out| write_result(out, &result));
        assert!(text.starts_with("id "));
        assert!(text.ends_with("done\n"));
    }
}
