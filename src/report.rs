use std::fs::File;
use std::io::{self, BufWriter, Write};

use log::info;
use serde_json::json;

use crate::config::{Config, OutputMode};
use crate::pages::{render_page, Dashboard, Page};

/// Opens the report sink selected by the config: stdout, or a buffered file.
pub fn open_sink(config: &Config) -> Result<Box<dyn Write>, String> {
    match config.output_mode {
        OutputMode::Stdout => Ok(Box::new(io::stdout())),
        OutputMode::File => {
            let path = config
                .output_file
                .as_ref()
                .ok_or_else(|| "output_file is required when output mode is 'file'".to_string())?;
            let file = File::create(path).map_err(|err| err.to_string())?;
            info!("Writing report to {}", path);
            Ok(Box::new(BufWriter::new(file)))
        }
    }
}

/// Writes the selected page (or all pages) into the sink. With `--json` the
/// generated tables are dumped verbatim instead; undefined derived ratios
/// serialize as null.
pub fn write_report(out: &mut dyn Write, config: &Config, data: &Dashboard) -> Result<(), String> {
    if config.json {
        let doc = json!({
            "vehicles": data.vehicles,
            "drivers": data.drivers,
        });
        serde_json::to_writer_pretty(&mut *out, &doc).map_err(|err| err.to_string())?;
        writeln!(out).map_err(|err| err.to_string())?;
        return Ok(());
    }

    match config.page {
        Some(page) => render_page(page, out, data).map_err(|err| err.to_string()),
        None => {
            for page in Page::ALL.iter() {
                render_page(*page, out, data).map_err(|err| err.to_string())?;
                writeln!(out).map_err(|err| err.to_string())?;
            }
            Ok(())
        }
    }
}
