//! The VOC → Label Studio conversion pipeline.
//!
//! A run lists the input directory, reads every file with the VOC reader,
//! aggregates the records into one task per image, then writes the task JSON
//! and its labeling config. Everything is read before anything is written, so
//! a failing input file leaves no partial output behind.

pub mod report;

pub use report::ConversionReport;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::{error, info, warn};
use rand::Rng;

use crate::error::VocStudioError;
use crate::ir::io_label_studio_json::{
    create_bbox, write_label_studio_json, ControlNames, LsTask, OutType,
};
use crate::ir::io_voc_xml::{list_annotation_files, read_pascal_voc};
use crate::ir::{CategorySet, ImageId};
use crate::label_config::{
    generate_label_config, label_config_path, write_label_config, ControlTag, TagMap,
};

/// Appended to `from_name` to name the rectangle control.
pub const RECTANGLES_SUFFIX: &str = "_rectangles";

pub const DEFAULT_TO_NAME: &str = "image";
pub const DEFAULT_FROM_NAME: &str = "label";
pub const DEFAULT_IMAGE_ROOT_URL: &str = "/data/local-files/?d=";

/// Options for one conversion run.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvertOptions {
    /// Object tag name in the labeling config.
    pub to_name: String,
    /// Control tag base name in the labeling config.
    pub from_name: String,
    pub out_type: OutType,
    /// Prefix joined with each `<filename>` to build `data.image`.
    pub image_root_url: String,
    /// Drop files without objects instead of emitting a task with no results.
    pub skip_empty: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            to_name: DEFAULT_TO_NAME.to_string(),
            from_name: DEFAULT_FROM_NAME.to_string(),
            out_type: OutType::Annotations,
            image_root_url: DEFAULT_IMAGE_ROOT_URL.to_string(),
            skip_empty: false,
        }
    }
}

impl ConvertOptions {
    /// Name of the rectangle control, e.g. `label_rectangles`.
    pub fn rectangles_from_name(&self) -> String {
        format!("{}{}", self.from_name, RECTANGLES_SUFFIX)
    }
}

/// Tasks and schema inputs aggregated from an input directory.
#[derive(Clone, Debug)]
pub struct TaskCollection {
    /// Tasks keyed (and therefore ordered) by image id.
    pub tasks: BTreeMap<ImageId, LsTask>,
    pub categories: CategorySet,
    pub tags: TagMap,
    pub input_files: usize,
    pub annotations: usize,
    pub empty_files: usize,
}

/// Read every file of `input_dir` and aggregate the records into tasks.
///
/// File `i` of the sorted listing gets image id `i`. The first file that fails
/// to read aborts the whole run.
pub fn collect_tasks<R: Rng + ?Sized>(
    input_dir: &Path,
    opts: &ConvertOptions,
    rng: &mut R,
) -> Result<TaskCollection, VocStudioError> {
    info!("Importing Pascal VOC annotations from {}", input_dir.display());
    let input_paths = list_annotation_files(input_dir)?;
    info!("Found {} input files", input_paths.len());

    let rectangles_from_name = opts.rectangles_from_name();
    let names = ControlNames {
        from_name: &rectangles_from_name,
        to_name: &opts.to_name,
    };

    let mut tasks: BTreeMap<ImageId, LsTask> = BTreeMap::new();
    let mut categories = CategorySet::new();
    let mut tags = TagMap::new();
    let mut annotations = 0;
    let mut empty_files = 0;

    for (idx, input_file) in input_paths.iter().enumerate() {
        info!(
            "Reading in file {} of {}: {}",
            idx,
            input_paths.len(),
            input_file.display()
        );
        let image_id = ImageId::from(idx);
        let voc = read_pascal_voc(input_file, image_id)?;
        categories.extend_from(&voc.categories);

        if voc.annotations.is_empty() {
            empty_files += 1;
            if opts.skip_empty {
                warn!("No objects in {}; skipping", input_file.display());
                continue;
            }
            warn!(
                "No objects in {}; emitting a task without results",
                input_file.display()
            );
        } else {
            // Every VOC record is a bounding box.
            tags.register(&rectangles_from_name, ControlTag::RectangleLabels);
        }

        let mut task = LsTask::new(opts.out_type, &opts.image_root_url, &voc.filename);
        for record in &voc.annotations {
            let result =
                create_bbox(record, &names, rng).ok_or_else(|| VocStudioError::ZeroImageSize {
                    image_id: record.image_id,
                    file_name: record.image_filename.clone(),
                })?;
            task.push_result(result, rng);
        }

        annotations += voc.annotations.len();
        tasks.insert(image_id, task);
    }

    info!(
        "Found {} input files with {} annotations",
        input_paths.len(),
        annotations
    );

    Ok(TaskCollection {
        tasks,
        categories,
        tags,
        input_files: input_paths.len(),
        annotations,
        empty_files,
    })
}

/// Convert a directory of VOC XML files to Label Studio JSON.
///
/// Writes `out_file` and its `.label_config.xml` sibling. When no task was
/// produced, logs "No labels converted" and writes nothing. If either write
/// fails, neither file is left behind.
pub fn convert_voc_to_ls(
    input_dir: &Path,
    out_file: &Path,
    opts: &ConvertOptions,
) -> Result<ConversionReport, VocStudioError> {
    convert_voc_to_ls_with_rng(input_dir, out_file, opts, &mut rand::rng())
}

/// [`convert_voc_to_ls`] with a caller-supplied random source for result ids
/// and label colours.
pub fn convert_voc_to_ls_with_rng<R: Rng + ?Sized>(
    input_dir: &Path,
    out_file: &Path,
    opts: &ConvertOptions,
    rng: &mut R,
) -> Result<ConversionReport, VocStudioError> {
    let collection = collect_tasks(input_dir, opts, rng)?;

    let mut report = ConversionReport {
        input_files: collection.input_files,
        annotations: collection.annotations,
        categories: collection.categories.len(),
        tasks: collection.tasks.len(),
        empty_files: collection.empty_files,
        ..Default::default()
    };

    if collection.tasks.is_empty() {
        error!("No labels converted");
        return Ok(report);
    }

    let label_config_file = label_config_path(out_file);
    let config = generate_label_config(
        &collection.categories.to_index_map(),
        &collection.tags,
        &opts.to_name,
        &opts.from_name,
        rng,
    );

    info!("Saving Label Studio JSON to {}", out_file.display());
    write_label_studio_json(out_file, &collection.tasks)?;

    if let Err(err) = write_label_config(&label_config_file, &config) {
        // Leave no half-finished output pair behind.
        if let Err(remove_err) = fs::remove_file(out_file) {
            warn!("Unable to remove {}: {remove_err}", out_file.display());
        }
        return Err(err);
    }
    info!("Saved label config to {}", label_config_file.display());

    report.output_file = Some(out_file.to_path_buf());
    report.label_config_file = Some(label_config_file);
    Ok(report)
}
