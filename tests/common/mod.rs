#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// One `<object>`: label plus `[xmin, ymin, xmax, ymax]`.
pub type VocObject<'a> = (&'a str, [f64; 4]);

pub fn voc_xml(filename: &str, width: u32, height: u32, objects: &[VocObject<'_>]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<annotation>\n");
    xml.push_str("  <folder>JPEGImages</folder>\n");
    xml.push_str(&format!("  <filename>{filename}</filename>\n"));
    xml.push_str(&format!(
        "  <size>\n    <width>{width}</width>\n    <height>{height}</height>\n    <depth>3</depth>\n  </size>\n"
    ));
    for (name, [xmin, ymin, xmax, ymax]) in objects {
        xml.push_str(&format!(
            "  <object>\n    <name>{name}</name>\n    <difficult>0</difficult>\n    <bndbox>\n      <xmin>{xmin}</xmin>\n      <ymin>{ymin}</ymin>\n      <xmax>{xmax}</xmax>\n      <ymax>{ymax}</ymax>\n    </bndbox>\n  </object>\n"
        ));
    }
    xml.push_str("</annotation>\n");
    xml
}

pub fn write_voc(dir: &Path, file: &str, xml: &str) {
    fs::create_dir_all(dir).expect("create input dir");
    fs::write(dir.join(file), xml).expect("write voc xml");
}

/// Writes a three-file sample: two annotated images sharing a category and
/// one image with an inverted box.
pub fn create_sample_voc_dir(dir: &Path) {
    write_voc(
        dir,
        "000001.xml",
        &voc_xml(
            "000001.jpg",
            200,
            100,
            &[("cat", [10.0, 20.0, 110.0, 70.0]), ("dog", [0.0, 0.0, 50.0, 25.0])],
        ),
    );
    write_voc(
        dir,
        "000002.xml",
        &voc_xml("000002.jpg", 400, 300, &[("dog", [40.0, 30.0, 240.0, 180.0])]),
    );
    write_voc(
        dir,
        "000003.xml",
        &voc_xml("000003.jpg", 100, 100, &[("bird", [60.0, 10.0, 20.0, 30.0])]),
    );
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
