use colored::Colorize;
use evt_slim::{default_mask, slim_file};

use crate::cli::Cli;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let report = slim_file(&cli.input, &cli.output, &default_mask())?;
    println!(
        "{} Slimmed {} into {}",
        "✓".green().bold(),
        cli.input.display().to_string().bold(),
        cli.output.display().to_string().bold(),
    );
    println!(
        "  Records: {}   Fields kept: {} of {}",
        report.n_records.to_string().yellow(),
        report.fields_out.to_string().green(),
        report.fields_in.to_string().bold(),
    );
    if !report.dropped.is_empty() {
        println!("  Dropped: {}", report.dropped.join(", ").dimmed());
    }
    println!("  Wrote {} bytes", report.bytes_written.to_string().cyan());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use evt_container::{ContainerReader, ContainerWriter};
    use evt_slim::{EVENT_COUNT_OBJECT, TREE_OBJECT};
    use evt_types::{Field, ScalarRecord, Table};
    use tempfile::TempDir;

    fn write_raw_file(path: &std::path::Path, with_count: bool) {
        let table = Table::new(vec![
            Field::int("evtid", vec![7, 8]),
            Field::float("eventPrimaries.fSteps.fPy", vec![0.1, 0.2]),
        ])
        .unwrap();
        let mut writer = ContainerWriter::create(path).unwrap();
        writer.put_table(TREE_OBJECT, &table).unwrap();
        if with_count {
            writer
                .put_scalar(EVENT_COUNT_OBJECT, &ScalarRecord::new(vec![0, 0, 0, 2]))
                .unwrap();
        }
        writer.finish().unwrap();
    }

    #[test]
    fn run_slims_a_file_end_to_end() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("raw.evtc");
        let output = dir.path().join("slim.evtc");
        write_raw_file(&input, true);

        let cli = Cli {
            input: input.clone(),
            output: output.clone(),
            verbose: false,
        };
        run_command(cli).unwrap();

        let reader = ContainerReader::open(&output).unwrap();
        let table = reader.read_table(TREE_OBJECT).unwrap().unwrap();
        assert_eq!(table.field_names(), vec!["evtid"]);
        assert_eq!(table.n_records(), 2);
    }

    #[test]
    fn run_fails_when_event_count_is_missing() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("raw.evtc");
        let output = dir.path().join("slim.evtc");
        write_raw_file(&input, false);

        let cli = Cli {
            input,
            output: output.clone(),
            verbose: false,
        };
        let err = run_command(cli).unwrap_err();
        assert!(err.to_string().contains("NumberOfEvents"));
        assert!(!output.exists());
    }

    #[test]
    fn run_fails_on_unreadable_input() {
        let dir = TempDir::new().unwrap();
        let cli = Cli {
            input: dir.path().join("absent.evtc"),
            output: dir.path().join("slim.evtc"),
            verbose: false,
        };
        assert!(run_command(cli).is_err());
    }
}
