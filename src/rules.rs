//! The ordered rewrite rules that lower GLSL ES 3.00 source to GLSL ES 1.00.
//!
//! Every rule is a lexical substitution over the full source text. Each
//! rule's input is the previous rule's output, so the order of [`RULES`]
//! carries real semantics: later rules see artifacts created by earlier
//! ones, and two rules here (`mrt-outputs` and `frag-color-output`) encode
//! an internal ordering dependency of their own.
//!
//! Matching is case-sensitive and pattern-literal. There is no attempt to
//! skip comments or string literals; the accepted shader corpus never
//! contains such confounders. A pattern that does not occur is a no-op,
//! never an error.

use std::sync::OnceLock;

use regex::Regex;

use crate::stage::ShaderStage;

/// Stage gate for a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageFilter {
    Any,
    FragmentOnly,
    VertexOnly,
}

impl StageFilter {
    pub fn admits(self, stage: ShaderStage) -> bool {
        match self {
            Self::Any => true,
            Self::FragmentOnly => stage.is_fragment(),
            Self::VertexOnly => !stage.is_fragment(),
        }
    }
}

/// Whether a rule always runs or only when a probe of the current text
/// succeeds.
///
/// A probe is evaluated against the intermediate state of the source, after
/// every earlier rule has run and before this rule rewrites (and possibly
/// destroys) the pattern it is probing for.
#[derive(Clone, Copy)]
pub enum Guard {
    Unconditional,
    ContentProbe(fn(&str) -> bool),
}

/// One step of the rewrite pipeline.
pub struct Rule {
    pub name: &'static str,
    pub stage: StageFilter,
    pub guard: Guard,
    pub apply: fn(&str) -> String,
}

/// The full pipeline, in execution order. Reordering entries changes
/// observable output.
pub const RULES: &[Rule] = &[
    Rule {
        name: "version-downgrade",
        stage: StageFilter::Any,
        guard: Guard::Unconditional,
        apply: downgrade_version,
    },
    Rule {
        name: "cube-sample-rename",
        stage: StageFilter::Any,
        guard: Guard::Unconditional,
        apply: rename_cube_samples,
    },
    Rule {
        name: "texture-call-rename",
        stage: StageFilter::Any,
        guard: Guard::Unconditional,
        apply: rename_texture_calls,
    },
    Rule {
        name: "fragment-input-qualifiers",
        stage: StageFilter::FragmentOnly,
        guard: Guard::Unconditional,
        apply: rewrite_fragment_inputs,
    },
    Rule {
        name: "vertex-io-qualifiers",
        stage: StageFilter::VertexOnly,
        guard: Guard::Unconditional,
        apply: rewrite_vertex_io,
    },
    Rule {
        name: "mrt-outputs",
        stage: StageFilter::FragmentOnly,
        guard: Guard::ContentProbe(has_indexed_frag_output),
        apply: rewrite_mrt_outputs,
    },
    Rule {
        name: "frag-color-output",
        stage: StageFilter::FragmentOnly,
        guard: Guard::Unconditional,
        apply: rewrite_frag_color,
    },
    Rule {
        name: "frag-depth-output",
        stage: StageFilter::FragmentOnly,
        guard: Guard::ContentProbe(writes_frag_depth),
        apply: rewrite_frag_depth,
    },
];

/// Prepends an `#extension` directive line ahead of the current text.
///
/// The single space after the newline matches the renderer this was written
/// against byte for byte. When two directives trigger in one run, the later
/// one lands closest to the top.
fn prepend_extension(source: &str, extension: &str) -> String {
    format!("#extension {extension} : enable\n {source}")
}

fn downgrade_version(source: &str) -> String {
    source.replace("version 300 es", "version 100")
}

fn rename_cube_samples(source: &str) -> String {
    source.replace("czm_textureCube", "textureCube")
}

/// Prefix rewrite only: the opening parenthesis anchors the match and the
/// call arguments are left untouched. Runs after `cube-sample-rename` so a
/// `textureCube(` call site no longer contains the bare `texture(` token.
fn rename_texture_calls(source: &str) -> String {
    source.replace("texture(", "texture2D(")
}

fn in_qualifier_re() -> &'static Regex {
    static IN_QUALIFIER_RE: OnceLock<Regex> = OnceLock::new();
    IN_QUALIFIER_RE.get_or_init(|| {
        Regex::new(r"in\s+(vec\d|mat\d|float)").expect("in-qualifier regex should compile")
    })
}

fn rewrite_fragment_inputs(source: &str) -> String {
    in_qualifier_re().replace_all(source, "varying $1").into_owned()
}

/// Vertex outputs are named interpolants, so the `out` pattern requires the
/// trailing identifier and semicolon; the `in` pattern does not.
fn rewrite_vertex_io(source: &str) -> String {
    static OUT_DECL_RE: OnceLock<Regex> = OnceLock::new();
    let out_decl = OUT_DECL_RE.get_or_init(|| {
        Regex::new(r"out\s+(vec\d|mat\d|float)\s+(\w+);")
            .expect("out-declaration regex should compile")
    });
    let text = in_qualifier_re().replace_all(source, "attribute $1");
    out_decl.replace_all(&text, "varying $1 $2;").into_owned()
}

fn frag_data_re() -> &'static Regex {
    static FRAG_DATA_RE: OnceLock<Regex> = OnceLock::new();
    FRAG_DATA_RE
        .get_or_init(|| Regex::new(r"out_FragData_(\d+)").expect("frag-data regex should compile"))
}

fn has_indexed_frag_output(source: &str) -> bool {
    frag_data_re().is_match(source)
}

/// Precondition: [`has_indexed_frag_output`] held for the incoming text.
///
/// The layout-declaration removal must run before the identifier rename:
/// the removal pattern matches the `out_FragData_<N>` spelling, which no
/// longer exists after the rename.
fn rewrite_mrt_outputs(source: &str) -> String {
    static LAYOUT_DECL_RE: OnceLock<Regex> = OnceLock::new();
    let layout_decl = LAYOUT_DECL_RE.get_or_init(|| {
        Regex::new(r"layout \(location = \d+\) vec4 out_FragData_\d+;")
            .expect("frag-data layout regex should compile")
    });
    let text = prepend_extension(source, "GL_EXT_draw_buffers");
    let text = layout_decl.replace_all(&text, "");
    frag_data_re().replace_all(&text, "gl_FragData[$1]").into_owned()
}

/// Unlike `mrt-outputs`, the rename here runs before the layout-declaration
/// removal, so the removal pattern (still spelled `out_FragColor`) can never
/// match and the renamed declaration line survives. This reproduces the
/// upstream renderer's output exactly; do not reorder.
fn rewrite_frag_color(source: &str) -> String {
    static INDEXED_FRAG_COLOR_RE: OnceLock<Regex> = OnceLock::new();
    let indexed = INDEXED_FRAG_COLOR_RE.get_or_init(|| {
        Regex::new(r"out_FragColor\[(\d+)\]").expect("indexed frag-color regex should compile")
    });
    let text = source.replace("out_FragColor", "gl_FragColor");
    let text = indexed.replace_all(&text, "gl_FragColor[$1]").into_owned();
    text.replace("layout (location = 0) vec4 out_FragColor", "")
}

fn writes_frag_depth(source: &str) -> bool {
    source.contains("gl_FragDepth")
}

/// Precondition: [`writes_frag_depth`] held for the incoming text. The
/// directive itself spells the extension in lower case, so the rename that
/// follows the prepend cannot touch it.
fn rewrite_frag_depth(source: &str) -> String {
    let text = prepend_extension(source, "GL_EXT_frag_depth");
    text.replace("gl_FragDepth", "gl_FragDepthEXT")
}
