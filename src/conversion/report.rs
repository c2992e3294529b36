//! Conversion report returned by a VOC → Label Studio run.

use std::fmt;
use std::path::PathBuf;

/// What a conversion run read and wrote.
///
/// `output_file` and `label_config_file` are `None` when the run produced no
/// tasks and therefore wrote nothing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConversionReport {
    /// Annotation files found in the input directory.
    pub input_files: usize,
    /// Objects read across all files.
    pub annotations: usize,
    /// Distinct category labels.
    pub categories: usize,
    /// Tasks written (one per image).
    pub tasks: usize,
    /// Files that contained no `<object>`.
    pub empty_files: usize,
    pub output_file: Option<PathBuf>,
    pub label_config_file: Option<PathBuf>,
}

impl ConversionReport {
    /// Returns true if the run wrote its output files.
    pub fn is_written(&self) -> bool {
        self.output_file.is_some()
    }
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  {} files, {} tasks, {} categories, {} annotations",
            self.input_files, self.tasks, self.categories, self.annotations
        )?;

        if self.empty_files > 0 {
            writeln!(f, "  {} file(s) without objects", self.empty_files)?;
        }

        let (Some(output), Some(label_config)) = (&self.output_file, &self.label_config_file)
        else {
            return writeln!(f, "No labels converted");
        };

        writeln!(f)?;
        writeln!(f, "  1. Create a new project in Label Studio")?;
        writeln!(
            f,
            "  2. Use Labeling Config from \"{}\"",
            label_config.display()
        )?;
        writeln!(
            f,
            "  3. Setup serving for images [e.g. you can use Local Storage (or others):"
        )?;
        writeln!(f, "     https://labelstud.io/guide/storage.html#Local-storage]")?;
        writeln!(f, "  4. Import \"{}\" to the project", output.display())
    }
}
