use anyhow::{bail, Result};

/// Which pipeline stage a shader source unit targets.
///
/// Always supplied by the caller; never inferred from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn from_keyword(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "vertex" | "vert" | "vs" => Ok(Self::Vertex),
            "fragment" | "frag" | "fs" => Ok(Self::Fragment),
            _ => bail!("invalid shader stage '{value}' (expected 'vertex' or 'fragment')"),
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Vertex => "vertex",
            Self::Fragment => "fragment",
        }
    }

    pub fn is_fragment(self) -> bool {
        matches!(self, Self::Fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_keyword_accepts_canonical_names() {
        assert_eq!(
            ShaderStage::from_keyword("vertex").unwrap(),
            ShaderStage::Vertex
        );
        assert_eq!(
            ShaderStage::from_keyword("fragment").unwrap(),
            ShaderStage::Fragment
        );
    }

    #[test]
    fn from_keyword_accepts_short_forms_and_trims() {
        assert_eq!(
            ShaderStage::from_keyword(" vs ").unwrap(),
            ShaderStage::Vertex
        );
        assert_eq!(
            ShaderStage::from_keyword("FRAG").unwrap(),
            ShaderStage::Fragment
        );
    }

    #[test]
    fn from_keyword_rejects_unknown_stage() {
        let err = ShaderStage::from_keyword("geometry").unwrap_err();
        assert!(err.to_string().contains("geometry"));
    }

    #[test]
    fn keyword_round_trips() {
        for stage in [ShaderStage::Vertex, ShaderStage::Fragment] {
            assert_eq!(ShaderStage::from_keyword(stage.keyword()).unwrap(), stage);
        }
    }
}
