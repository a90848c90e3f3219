//! Alias naming and hit ownership.
//!
//! Physical partitions are named `<alias>-<suffix>`. A hit belongs to the alias
//! when its origin partition matches the glob `<alias>-*`; the bare alias name
//! does not match.

use regex::Regex;
use tracing::debug;

use crate::error::{Error, Result};
use crate::traits::HitMatcher;
use crate::types::{IndexedSegment, RawHit, SegmentHit};

pub const ALIAS: &str = "amooozeshyar";

/// Glob for partitions owned by [`ALIAS`].
pub fn pattern_for(alias: &str) -> String {
    format!("{alias}-*")
}

/// Compiles a shell-style glob (`*` any run, `?` one char) into an anchored,
/// case-sensitive regex. Every other character is literal.
pub fn compile_glob(glob: &str) -> Result<Regex> {
    let mut rx = String::from("(?s)^");
    let mut literal = String::new();
    for ch in glob.chars() {
        match ch {
            '*' | '?' => {
                rx.push_str(&regex::escape(&literal));
                literal.clear();
                rx.push_str(if ch == '*' { ".*" } else { "." });
            }
            c => literal.push(c),
        }
    }
    rx.push_str(&regex::escape(&literal));
    rx.push('$');
    Regex::new(&rx).map_err(|e| Error::InvalidPattern { pattern: glob.to_string(), reason: e.to_string() })
}

#[derive(Debug, Clone)]
pub struct AliasPattern {
    alias: String,
    glob: String,
    matcher: Regex,
}

impl AliasPattern {
    pub fn new(alias: &str) -> Result<Self> {
        if alias.is_empty() {
            return Err(Error::InvalidConfig("alias must not be empty".to_string()));
        }
        let glob = pattern_for(alias);
        let matcher = compile_glob(&glob)?;
        Ok(Self { alias: alias.to_string(), glob, matcher })
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn glob(&self) -> &str {
        &self.glob
    }

    pub fn matches_name(&self, partition: &str) -> bool {
        self.matcher.is_match(partition)
    }

    /// True when the hit's origin partition belongs to this alias.
    pub fn matches_origin(&self, hit: &RawHit) -> bool {
        self.matches_name(&hit.index)
    }
}

impl HitMatcher for AliasPattern {
    fn matches(&self, hit: &RawHit) -> bool {
        self.matches_origin(hit)
    }
}

#[derive(Debug, Default)]
pub struct RoutedHits {
    pub segments: Vec<SegmentHit>,
    pub declined: Vec<RawHit>,
}

/// Splits raw hits into segments claimed by the matcher and everything else.
pub struct HitRouter<M> {
    matcher: M,
}

impl<M: HitMatcher> HitRouter<M> {
    pub fn new(matcher: M) -> Self {
        Self { matcher }
    }

    pub fn route(&self, hits: Vec<RawHit>) -> anyhow::Result<RoutedHits> {
        let mut routed = RoutedHits::default();
        for hit in hits {
            if !self.matcher.matches(&hit) {
                routed.declined.push(hit);
                continue;
            }
            let segment: IndexedSegment = serde_json::from_value(hit.source)
                .map_err(|e| anyhow::anyhow!("Failed to read hit '{}' from '{}': {}", hit.id, hit.index, e))?;
            routed.segments.push(SegmentHit { partition: hit.index, id: hit.id, score: hit.score, segment });
        }
        debug!(claimed = routed.segments.len(), declined = routed.declined.len(), "routed hits");
        Ok(routed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hit(index: &str) -> RawHit {
        RawHit { index: index.to_string(), id: "1".into(), score: None, source: json!({ "text": "سلام" }) }
    }

    #[test]
    fn pattern_requires_separator() {
        let p = AliasPattern::new(ALIAS).unwrap();
        assert_eq!(p.glob(), "amooozeshyar-*");
        assert!(p.matches_origin(&hit("amooozeshyar-2024-01")));
        assert!(p.matches_origin(&hit("amooozeshyar-")));
        assert!(!p.matches_origin(&hit("amooozeshyar")));
        assert!(!p.matches_origin(&hit("otherindex-2024")));
    }

    #[test]
    fn literal_part_is_case_sensitive_and_anchored() {
        let p = AliasPattern::new(ALIAS).unwrap();
        assert!(!p.matches_name("Amooozeshyar-2024"));
        assert!(!p.matches_name("x-amooozeshyar-2024"));
    }

    #[test]
    fn glob_question_mark_and_regex_chars() {
        let rx = compile_glob("logs.?-*").unwrap();
        assert!(rx.is_match("logs.a-1"));
        assert!(!rx.is_match("logsXa-1"));
        assert!(!rx.is_match("logs.ab-1"));
        assert!(compile_glob("a+b(c)[d]").unwrap().is_match("a+b(c)[d]"));
    }

    #[test]
    fn empty_alias_is_rejected() {
        assert!(matches!(AliasPattern::new(""), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn router_splits_claimed_and_declined() {
        let router = HitRouter::new(AliasPattern::new(ALIAS).unwrap());
        let routed = router.route(vec![hit("amooozeshyar-2024.01"), hit("otherindex-2024"), hit("amooozeshyar")]).unwrap();
        assert_eq!(routed.segments.len(), 1);
        assert_eq!(routed.segments[0].partition, "amooozeshyar-2024.01");
        assert_eq!(routed.segments[0].segment.text, "سلام");
        assert_eq!(routed.declined.len(), 2);
    }

    #[test]
    fn router_accepts_closures() {
        let router = HitRouter::new(|h: &RawHit| h.index.ends_with("-keep"));
        let routed = router.route(vec![hit("a-keep"), hit("a-drop")]).unwrap();
        assert_eq!(routed.segments.len(), 1);
    }

    #[test]
    fn claimed_hit_with_bad_source_is_an_error() {
        let router = HitRouter::new(AliasPattern::new(ALIAS).unwrap());
        let mut bad = hit("amooozeshyar-1");
        bad.source = json!({ "text": 5 });
        assert!(router.route(vec![bad]).is_err());
    }
}
