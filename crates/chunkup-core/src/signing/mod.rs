//! Release signing configuration for the Android embedding.
//!
//! This module resolves the signing profile for release builds from the
//! optional `android/key.properties` file and generates that file for
//! machines that receive their key material out of band.

pub mod android;

pub use android::*;
