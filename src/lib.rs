//! Rewrites GLSL ES 3.00 shader source into equivalent GLSL ES 1.00 source,
//! so a single authored shader can run on backends that only speak the
//! legacy dialect.
//!
//! There is no parser, AST, or type checker here. The whole transform is an
//! ordered pipeline of lexical substitutions and conditional insertions over
//! the raw source text; see [`rules::RULES`] for the pipeline and
//! [`demodernize()`](demodernize::demodernize) for the driver.
//!
//! This is not a general dialect translator. It recognizes only the
//! syntactic subset used by the shader corpus it was written for, never
//! validates its input, and never fails: unrecognized constructs pass
//! through untouched.

pub mod demodernize;
pub mod rules;
pub mod stage;

pub use demodernize::demodernize;
pub use stage::ShaderStage;
