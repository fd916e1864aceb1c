//! Pipeline driver: folds a shader source through [`RULES`] in order.

use crate::rules::{Guard, RULES};
use crate::stage::ShaderStage;

/// Lowers a GLSL ES 3.00 shader to GLSL ES 1.00.
///
/// Total over all string inputs: patterns that do not occur are silent
/// no-ops, and out-of-corpus constructs pass through untouched, so this
/// never fails. The result is a new string; `source` is left alone.
///
/// Not idempotent. The output is legacy-dialect text, and feeding it back
/// in is undefined (for one, a depth-writing shader would grow a second
/// extension directive).
pub fn demodernize(source: &str, stage: ShaderStage) -> String {
    let mut text = source.to_owned();
    for rule in RULES {
        if !rule.stage.admits(stage) {
            continue;
        }
        if let Guard::ContentProbe(probe) = rule.guard {
            if !probe(&text) {
                continue;
            }
        }
        text = (rule.apply)(&text);
    }
    text
}
