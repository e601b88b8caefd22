//! Compiles the bundled room table into a gzip'd bincode blob that
//! `src/lib.rs` embeds with `include_bytes!`.
use roomfinder_core::loader::builder::{build_dataset, CompressionMode};
use roomfinder_core::RoomIndex;
use std::path::PathBuf;

fn main() {
    let source = RoomIndex::default_dataset_path();
    println!("cargo:rerun-if-changed={}", source.display());
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let out = out_dir.join("classrooms.comp.bin");

    build_dataset(&source, &out, CompressionMode::Gzip)
        .unwrap_or_else(|e| panic!("building {}: {e}", source.display()));
    println!("cargo:rustc-env=ROOM_DB_PATH={}", out.display());
}
