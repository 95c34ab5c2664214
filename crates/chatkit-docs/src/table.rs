//! Fixed-width table rendering for one command category
//!
//! Cells are extracted from the command metadata, pipe characters escaped,
//! and every column padded to the widest cell in that column, header
//! included. Rows are sorted by display name.

use chatkit_core::Command;

/// Literal shown in the arguments column for commands without arguments
const NO_ARGS: &str = "<none>";

/// One rendered table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CommandRow {
    pub name: String,
    pub args: String,
    pub description: String,
}

impl CommandRow {
    fn format(&self, widths: (usize, usize, usize)) -> String {
        format!(
            "| {:<w0$} | {:<w1$} | {:<w2$} |",
            self.name,
            self.args,
            self.description,
            w0 = widths.0,
            w1 = widths.1,
            w2 = widths.2,
        )
    }
}

/// Escape pipes so a cell cannot break the table syntax
fn escape(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Extract the three documentation cells from a command
pub(crate) fn extract_row(command: &Command) -> CommandRow {
    let args = if command.arguments().is_empty() {
        NO_ARGS.to_string()
    } else {
        command
            .arguments()
            .iter()
            .map(|a| {
                if a.optional {
                    format!("({})", a.name)
                } else {
                    a.name.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    };

    CommandRow {
        name: escape(&command.names().join(", ")),
        args: escape(&args),
        description: escape(command.description()),
    }
}

/// Render one category's table
///
/// Column widths equal the longest cell in each column, header row included.
pub(crate) fn render_table(mut rows: Vec<CommandRow>) -> String {
    let header = CommandRow {
        name: "Commands".to_string(),
        args: "Arguments".to_string(),
        description: "Description".to_string(),
    };

    let widths = rows.iter().chain([&header]).fold(
        (0, 0, 0),
        |(name, args, description), row| {
            (
                name.max(row.name.len()),
                args.max(row.args.len()),
                description.max(row.description.len()),
            )
        },
    );

    rows.sort_by(|a, b| a.name.cmp(&b.name));

    let separator = CommandRow {
        name: "-".repeat(widths.0),
        args: "-".repeat(widths.1),
        description: "-".repeat(widths.2),
    };

    let body = rows
        .iter()
        .map(|row| row.format(widths))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{}\n{}\n{}\n",
        header.format(widths),
        separator.format(widths),
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatkit_core::handler_fn;

    fn command(names: &[&str], args: &[(&str, bool)], description: &str) -> Command {
        let mut builder = Command::builder(names[0]);
        for alias in &names[1..] {
            builder = builder.alias(*alias);
        }
        for (name, optional) in args {
            builder = if *optional {
                builder.optional_argument(*name)
            } else {
                builder.argument(*name)
            };
        }
        builder
            .description(description)
            .handler(handler_fn(|_e| async move { Ok(String::new()) }))
            .build("Utility")
            .unwrap()
    }

    #[test]
    fn test_no_args_renders_none_literal() {
        let row = extract_row(&command(&["Version", "V"], &[], "Display the version."));
        assert_eq!(row.args, "<none>");
    }

    #[test]
    fn test_optional_args_parenthesized() {
        let row = extract_row(&command(
            &["Echo"],
            &[("text", false), ("times", true)],
            "Echo the input.",
        ));
        assert_eq!(row.args, "text, (times)");
    }

    #[test]
    fn test_pipes_escaped_in_every_cell() {
        let row = extract_row(&command(&["a|b"], &[("x|y", false)], "one|two"));
        assert_eq!(row.name, "a\\|b");
        assert_eq!(row.args, "x\\|y");
        assert_eq!(row.description, "one\\|two");
    }

    #[test]
    fn test_version_table_layout() {
        let rows = vec![extract_row(&command(
            &["Version", "V"],
            &[],
            "Display the version.",
        ))];
        let table = render_table(rows);

        let expected = "\
| Commands   | Arguments | Description          |\n\
| ---------- | --------- | -------------------- |\n\
| Version, V | <none>    | Display the version. |\n";
        assert_eq!(table, expected);
    }

    #[test]
    fn test_column_widths_match_longest_cell() {
        let rows = vec![
            extract_row(&command(&["A"], &[], "short")),
            extract_row(&command(
                &["LongCommandName"],
                &[("first", false), ("second", true)],
                "x",
            )),
        ];
        let table = render_table(rows);

        let lines: Vec<&str> = table.lines().collect();
        // Every line is the same width
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));

        // Widths are the max cell length per column: name 15, args 15, description 11
        assert!(lines[0].starts_with("| Commands        | Arguments       | Description |"));
        assert!(lines[1].contains("| --------------- | --------------- | ----------- |"));
    }

    #[test]
    fn test_rows_sorted_by_name() {
        let rows = vec![
            extract_row(&command(&["Zulu"], &[], "z")),
            extract_row(&command(&["Alpha"], &[], "a")),
        ];
        let table = render_table(rows);

        let alpha = table.find("Alpha").unwrap();
        let zulu = table.find("Zulu").unwrap();
        assert!(alpha < zulu);
    }
}
