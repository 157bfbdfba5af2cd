use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};

use crate::tables::MappingTables;

/// Print the effective translation tables, in the same TOML layout the config
/// file's `[tables]` section takes
pub fn print_tables(tables: &MappingTables) -> Result<()> {
    let stdout = BufWriter::new(io::stdout().lock());
    write_tables(tables, stdout).context("Failed to write to stdout")
}

fn write_tables(tables: &MappingTables, mut out: impl Write) -> Result<()> {
    let text = toml::to_string_pretty(tables).context("Failed to serialise tables")?;

    out.write_all(text.as_bytes())?;
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_tables;
    use crate::tables::MappingTables;

    #[test]
    fn printed_tables_load_as_config_section() {
        let mut tables = MappingTables::default();
        tables
            .event_types
            .entries
            .insert("scroll".to_string(), "scrollDepth".to_string());

        let mut out = vec![];
        write_tables(&tables, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("[event_types]"));
        assert!(text.contains("[condition_operators]"));

        let reread: MappingTables = toml::from_str(&text).unwrap();
        assert_eq!(reread, tables);
    }
}
