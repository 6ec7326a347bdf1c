//! Base/head reference selection for ref comparison
//!
//! Explicit inputs win over the runner's defaults. Empty strings count as
//! unset, since runners export `GITHUB_BASE_REF`/`GITHUB_HEAD_REF` as empty on
//! non pull request events.

/// Base used when nothing else names one
pub const DEFAULT_BASE_REF: &str = "main";

/// Every source a base or head reference can come from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefSpec {
    /// Explicit base override (`INPUT_BASE_REF`)
    pub base_override: Option<String>,
    /// Explicit head override (`INPUT_HEAD_REF`)
    pub head_override: Option<String>,
    /// Runner's base ref (`GITHUB_BASE_REF`)
    pub env_base: Option<String>,
    /// Runner's head ref (`GITHUB_HEAD_REF`)
    pub env_head: Option<String>,
    /// Commit that triggered the run (`GITHUB_SHA`)
    pub sha: Option<String>,
}

impl RefSpec {
    /// Base reference: override, then runner base, then `main`
    #[must_use]
    pub fn base(&self) -> &str {
        first_set([&self.base_override, &self.env_base]).unwrap_or(DEFAULT_BASE_REF)
    }

    /// Head reference: override, then runner head, then the triggering SHA
    #[must_use]
    pub fn head(&self) -> Option<&str> {
        first_set([&self.head_override, &self.env_head, &self.sha])
    }
}

fn first_set<const N: usize>(candidates: [&Option<String>; N]) -> Option<&str> {
    candidates.into_iter().flatten().map(String::as_str).find(|s| !s.is_empty())
}
