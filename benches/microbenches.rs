//! Criterion microbenches for vocstudio parsing and task building.
//!
//! Run with: `cargo bench`
//!
//! These benchmarks measure the performance of:
//! - VOC XML parsing (from_voc_xml_str, from_voc_xml_slice)
//! - Label Studio task building and serialization

use std::collections::BTreeMap;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::{rngs::StdRng, SeedableRng};
use std::hint::black_box;

use vocstudio::ir::io_label_studio_json::{
    create_bbox, to_label_studio_string, ControlNames, LsTask, OutType,
};
use vocstudio::ir::io_voc_xml::{from_voc_xml_slice, from_voc_xml_str};
use vocstudio::ir::ImageId;

const VOC_FIXTURE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<annotation>
  <folder>VOC2012</folder>
  <filename>2007_000027.jpg</filename>
  <size>
    <width>486</width>
    <height>500</height>
    <depth>3</depth>
  </size>
  <object>
    <name>person</name>
    <pose>Unspecified</pose>
    <truncated>0</truncated>
    <difficult>0</difficult>
    <bndbox>
      <xmin>174</xmin>
      <ymin>101</ymin>
      <xmax>349</xmax>
      <ymax>351</ymax>
    </bndbox>
  </object>
  <object>
    <name>horse</name>
    <bndbox>
      <xmin>10</xmin>
      <ymin>20</ymin>
      <xmax>200</xmax>
      <ymax>300</ymax>
    </bndbox>
  </object>
  <object>
    <name>person</name>
    <bndbox>
      <xmin>300</xmin>
      <ymin>50</ymin>
      <xmax>480</xmax>
      <ymax>490</ymax>
    </bndbox>
  </object>
</annotation>
"#;

/// Benchmark VOC XML parsing from string.
fn bench_voc_parse_str(c: &mut Criterion) {
    let mut group = c.benchmark_group("voc_parse");
    group.throughput(Throughput::Bytes(VOC_FIXTURE.len() as u64));

    group.bench_function("from_voc_xml_str", |b| {
        b.iter(|| {
            let voc = from_voc_xml_str(black_box(VOC_FIXTURE)).unwrap();
            black_box(voc)
        })
    });

    group.finish();
}

/// Benchmark VOC XML parsing from byte slice.
fn bench_voc_parse_slice(c: &mut Criterion) {
    let bytes = VOC_FIXTURE.as_bytes();
    let mut group = c.benchmark_group("voc_parse");
    group.throughput(Throughput::Bytes(bytes.len() as u64));

    group.bench_function("from_voc_xml_slice", |b| {
        b.iter(|| {
            let voc = from_voc_xml_slice(black_box(bytes)).unwrap();
            black_box(voc)
        })
    });

    group.finish();
}

/// Benchmark building and serializing Label Studio tasks.
///
/// The fixture is parsed once; the timed region converts its records to
/// results for 100 images and writes the task array to a string.
fn bench_task_build(c: &mut Criterion) {
    let voc = from_voc_xml_str(VOC_FIXTURE).expect("Failed to parse VOC fixture");
    let names = ControlNames {
        from_name: "label_rectangles",
        to_name: "image",
    };

    let mut group = c.benchmark_group("task_build");
    group.throughput(Throughput::Elements(100 * voc.annotations.len() as u64));

    group.bench_function("to_label_studio_string", |b| {
        let mut rng = StdRng::seed_from_u64(0);
        b.iter(|| {
            let mut tasks = BTreeMap::new();
            for idx in 0..100usize {
                let mut task = LsTask::new(OutType::Annotations, "/data", &voc.filename);
                for record in &voc.annotations {
                    let result = create_bbox(record, &names, &mut rng).unwrap();
                    task.push_result(result, &mut rng);
                }
                tasks.insert(ImageId::from(idx), task);
            }
            let json = to_label_studio_string(black_box(&tasks)).unwrap();
            black_box(json)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_voc_parse_str,
    bench_voc_parse_slice,
    bench_task_build,
);
criterion_main!(benches);
