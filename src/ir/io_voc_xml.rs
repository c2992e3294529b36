//! Pascal VOC XML reader.
//!
//! One XML file describes one image. Boxes are read in VOC's two-corner
//! pixel form and handed on as upper-left + size records.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error, info};
use roxmltree::Node;
use walkdir::WalkDir;

use super::model::{AnnotationRecord, CategorySet, VocFile};
use super::{BBoxXYWH, ImageId, Pixel};
use crate::error::VocStudioError;

/// List the annotation files of an input directory.
///
/// Every regular file directly inside `dir` is returned, whatever its
/// extension; sub-directories are not descended into. The listing is sorted
/// by file name so image ids do not depend on the platform's directory order.
pub fn list_annotation_files(dir: &Path) -> Result<Vec<PathBuf>, VocStudioError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| VocStudioError::InputDirectory {
            path: dir.to_path_buf(),
            source,
        })?;

        if entry.file_type().is_file() {
            files.push(entry.into_path());
        } else {
            debug!("Skipping non-file entry {}", entry.path().display());
        }
    }

    Ok(files)
}

/// Read one Pascal VOC XML file.
///
/// `image_id` is the file's position in the input batch and is stamped on
/// every returned record. A file that cannot be read or parsed is logged and
/// the error returned; callers are expected to abort the run.
///
/// The file must be UTF-8. A document declaring another encoding (for
/// example `ISO-8859-1` with Latin-1 bytes) fails with
/// [`VocStudioError::VocXmlParse`].
pub fn read_pascal_voc(path: &Path, image_id: ImageId) -> Result<VocFile, VocStudioError> {
    let parsed = fs::read_to_string(path)
        .map_err(|source| VocStudioError::VocXmlParse {
            path: path.to_path_buf(),
            message: source.to_string(),
        })
        .and_then(|xml| parse_voc_xml_str(&xml, path, image_id));

    match parsed {
        Ok(voc) => {
            info!("Found {} labels in {}", voc.annotations.len(), path.display());
            for record in &voc.annotations {
                debug!("\t{record:?}");
            }
            Ok(voc)
        }
        Err(err) => {
            if matches!(err, VocStudioError::VocXmlParse { .. }) {
                error!(
                    "Unable to read {}. File is not xml or does not exist",
                    path.display()
                );
            }
            error!("{err}");
            Err(err)
        }
    }
}

/// Parse VOC XML from a UTF-8 string.
///
/// Records are stamped with image id 0. Useful for testing/fuzzing parse
/// behavior in-memory.
pub fn from_voc_xml_str(xml: &str) -> Result<VocFile, VocStudioError> {
    parse_voc_xml_str(xml, Path::new("<memory>"), ImageId::new(0))
}

/// Parse VOC XML from bytes.
///
/// The input must be valid UTF-8.
pub fn from_voc_xml_slice(bytes: &[u8]) -> Result<VocFile, VocStudioError> {
    let xml = std::str::from_utf8(bytes).map_err(|source| VocStudioError::VocXmlParse {
        path: PathBuf::from("<memory>"),
        message: format!("input is not valid UTF-8: {source}"),
    })?;
    from_voc_xml_str(xml)
}

fn parse_voc_xml_str(
    xml: &str,
    path: &Path,
    image_id: ImageId,
) -> Result<VocFile, VocStudioError> {
    let document =
        roxmltree::Document::parse(xml).map_err(|source| VocStudioError::VocXmlParse {
            path: path.to_path_buf(),
            message: source.to_string(),
        })?;

    let annotation = document.root_element();
    if annotation.tag_name().name() != "annotation" {
        return Err(missing(path, "annotation", "document root"));
    }

    let size = required_child_element(annotation, "size", path, "<annotation>")?;
    let width = parse_required_u32(size, "width", path, "<size>")?;
    let height = parse_required_u32(size, "height", path, "<size>")?;
    let filename = required_child_text(annotation, "filename", path, "<annotation>")?;

    let mut annotations = Vec::new();
    let mut categories = CategorySet::new();

    for object in annotation
        .children()
        .filter(|node| node.is_element() && node.tag_name().name() == "object")
    {
        let bndbox = required_child_element(object, "bndbox", path, "<object>")?;

        let xmin = parse_required_f64(bndbox, "xmin", path, "<bndbox>")?;
        let ymin = parse_required_f64(bndbox, "ymin", path, "<bndbox>")?;
        let xmax = parse_required_f64(bndbox, "xmax", path, "<bndbox>")?;
        let ymax = parse_required_f64(bndbox, "ymax", path, "<bndbox>")?;

        let label = required_child_text(object, "name", path, "<object>")?;
        categories.insert(&label);

        annotations.push(AnnotationRecord {
            bbox: BBoxXYWH::<Pixel>::from_voc_corners(xmin, ymin, xmax, ymax),
            label,
            image_filename: filename.clone(),
            image_width: width,
            image_height: height,
            image_id,
        });
    }

    Ok(VocFile {
        image_id,
        filename,
        width,
        height,
        annotations,
        categories,
    })
}

fn missing(path: &Path, tag: &str, context: &str) -> VocStudioError {
    VocStudioError::VocMissingNode {
        path: path.to_path_buf(),
        node: tag.to_string(),
        context: context.to_string(),
    }
}

fn required_child_element<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &str,
    path: &Path,
    context: &str,
) -> Result<Node<'a, 'input>, VocStudioError> {
    child_element(node, tag).ok_or_else(|| missing(path, tag, context))
}

fn required_child_text(
    node: Node<'_, '_>,
    tag: &str,
    path: &Path,
    context: &str,
) -> Result<String, VocStudioError> {
    optional_child_text(node, tag).ok_or_else(|| missing(path, tag, context))
}

fn parse_required_u32(
    node: Node<'_, '_>,
    tag: &str,
    path: &Path,
    context: &str,
) -> Result<u32, VocStudioError> {
    let raw = required_child_text(node, tag, path, context)?;
    raw.parse::<u32>()
        .map_err(|_| invalid_value(path, tag, raw, "an unsigned integer"))
}

fn parse_required_f64(
    node: Node<'_, '_>,
    tag: &str,
    path: &Path,
    context: &str,
) -> Result<f64, VocStudioError> {
    let raw = required_child_text(node, tag, path, context)?;
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(invalid_value(path, tag, raw, "a finite number")),
    }
}

fn invalid_value(path: &Path, tag: &str, raw: String, expected: &'static str) -> VocStudioError {
    VocStudioError::VocInvalidValue {
        path: path.to_path_buf(),
        node: tag.to_string(),
        value: raw,
        expected,
    }
}

fn child_element<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && child.tag_name().name() == tag)
}

fn optional_child_text(node: Node<'_, '_>, tag: &str) -> Option<String> {
    child_element(node, tag)
        .and_then(|child| child.text())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(ToOwned::to_owned)
}
