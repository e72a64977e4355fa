use std::fmt;

/// File formats offered by the export buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Json => "JSON",
            ExportFormat::Csv => "CSV",
        }
    }

    /// Element id of the trigger button
    pub fn button_id(&self) -> &'static str {
        match self {
            ExportFormat::Json => "exportJson",
            ExportFormat::Csv => "exportCsv",
        }
    }
}

/// A message for the user, shown instead of doing the work
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Handle an export trigger. Exporting is not implemented; no file is written.
pub fn trigger(format: ExportFormat) -> Notice {
    ::log::info!("{} export requested, but export is not available", format.label());
    Notice {
        message: format!("{} export is not available yet.", format.label()),
    }
}
