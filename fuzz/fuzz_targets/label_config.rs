//! Fuzz target for labeling-config generation.
//!
//! Arbitrary label names must always yield a well-formed XML document.

#![no_main]

use std::collections::BTreeMap;

use libfuzzer_sys::fuzz_target;
use rand::{rngs::StdRng, SeedableRng};
use vocstudio::label_config::{generate_label_config, TagMap};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let categories: BTreeMap<usize, String> = text
        .split('\n')
        .filter(|name| {
            name.chars()
                .all(|c| !c.is_control() && c != '\u{FFFE}' && c != '\u{FFFF}')
        })
        .map(str::to_string)
        .enumerate()
        .collect();

    let mut rng = StdRng::seed_from_u64(0);
    let xml = generate_label_config(&categories, &TagMap::new(), "image", "label", &mut rng);
    roxmltree::Document::parse(&xml).expect("label config must be well-formed");
});
