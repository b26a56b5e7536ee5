//! Usage and help text rendering.

use crate::slot::Schema;

const HELP_LINE: &str = "Show Help.";

/// Renders the usage/help text for `schema`.
///
/// Only structure is read; slot values are ignored. Labels are padded to a
/// shared column, the `ARGUMENTS` and `FLAGS` sections are skipped when
/// empty, and the `-h` line is always last.
///
/// # Examples
///
/// ```
/// use argslot_core::{Name, Schema, render_help};
///
/// let schema = Schema::new("tool")
///     .argument("input", "Input file")
///     .flag("force", Name::Short('f'), false, "Overwrite output");
///
/// let help = render_help(&schema);
/// assert!(help.starts_with("USAGE: tool <input> [<options>]\n"));
/// assert!(help.contains("\nARGUMENTS:\n  <input>\t\tInput file\n"));
/// assert!(help.contains("  -f     \t\tOverwrite output\n"));
/// assert!(help.ends_with("  -h     \t\tShow Help.\n"));
/// ```
pub fn render_help(schema: &Schema) -> String {
    let arguments: Vec<(String, &str)> = schema
        .positionals()
        .map(|p| (format!("<{}>", p.name), p.help.as_str()))
        .collect();
    let flags: Vec<(String, &str)> = schema
        .flags()
        .map(|f| (f.key.token(), f.help.as_str()))
        .collect();

    let widest_key = schema
        .positionals()
        .map(|p| p.name.chars().count())
        .chain(schema.flags().map(|f| f.key.key().chars().count()))
        .max()
        .unwrap_or(0);
    let width = widest_key + 2;

    let mut usage = vec![schema.program.clone()];
    usage.extend(arguments.iter().map(|(label, _)| label.clone()));
    if !flags.is_empty() {
        usage.push("[<options>]".to_string());
    }

    let mut out = format!("USAGE: {}\n", usage.join(" "));

    if !arguments.is_empty() {
        out.push_str("\nARGUMENTS:\n");
        for (label, help) in &arguments {
            out.push_str(&row(label, help, width));
        }
    }

    if !flags.is_empty() {
        out.push_str("\nFLAGS:\n");
        for (label, help) in &flags {
            out.push_str(&row(label, help, width));
        }
    }

    out.push_str(&row("-h", HELP_LINE, width));
    out
}

fn row(label: &str, help: &str, width: usize) -> String {
    format!("  {label:<width$}\t\t{help}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Name;

    fn squash(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_help_with_arguments_and_flags() {
        let schema = Schema::new("tool")
            .argument("argument1", "Description for argument1")
            .argument("argument2", "Description for argument2")
            .flag("flag1", Name::long("long"), false, "Description for long flag")
            .flag("flag2", Name::Short('s'), false, "Description for short flag");

        let help = render_help(&schema);

        assert_eq!(
            help,
            "USAGE: tool <argument1> <argument2> [<options>]\n\
             \n\
             ARGUMENTS:\n  \
             <argument1>\t\tDescription for argument1\n  \
             <argument2>\t\tDescription for argument2\n\
             \n\
             FLAGS:\n  \
             --long     \t\tDescription for long flag\n  \
             -s         \t\tDescription for short flag\n  \
             -h         \t\tShow Help.\n"
        );
    }

    #[test]
    fn test_help_without_flags() {
        let schema = Schema::new("tool")
            .argument("argument1", "Description for argument1")
            .argument("argument2", "Description for argument2");

        let help = render_help(&schema);

        assert!(help.starts_with("USAGE: tool <argument1> <argument2>\n"));
        assert!(!help.contains("[<options>]"));
        assert!(!help.contains("FLAGS:"));
        assert_eq!(
            squash(&help),
            "USAGE: tool <argument1> <argument2> ARGUMENTS: \
             <argument1> Description for argument1 \
             <argument2> Description for argument2 \
             -h Show Help."
        );
    }

    #[test]
    fn test_help_without_arguments() {
        let schema = Schema::new("tool").flag("verbose", Name::long("verbose"), false, "Be loud");

        let help = render_help(&schema);

        assert!(help.starts_with("USAGE: tool [<options>]\n"));
        assert!(!help.contains("ARGUMENTS:"));
        assert_eq!(
            squash(&help),
            "USAGE: tool [<options>] FLAGS: --verbose Be loud -h Show Help."
        );
    }

    #[test]
    fn test_help_for_empty_schema() {
        let help = render_help(&Schema::new("tool"));
        assert_eq!(help, "USAGE: tool\n  -h\t\tShow Help.\n");
    }
}
