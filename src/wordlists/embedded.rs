//! Embedded dictionaries
//!
//! Raw dictionary buffers compiled into the binary at build time.

// Include generated dictionaries from build script
include!(concat!(env!("OUT_DIR"), "/english.rs"));
include!(concat!(env!("OUT_DIR"), "/swedish.rs"));
