//! Résumé ⇄ job-description comparison.
//!
//! Four pure stages in strict data-flow order: PDF text extraction,
//! text normalization, cosine similarity scoring, and term-gap detection.
//! `pipeline::compare` wires them together; `handlers` is the HTTP shell
//! around the pipeline.

pub mod extractor;
pub mod gaps;
pub mod handlers;
pub mod normalizer;
pub mod pipeline;
pub mod scorer;
