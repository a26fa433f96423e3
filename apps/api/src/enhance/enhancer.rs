//! Fills a randomly chosen section template around the caller's text.

use std::sync::Arc;

use crate::enhance::templates::{templates_for, Section};
use crate::random::RandomSource;

/// Returned instead of an enhancement when the input is blank.
pub const EMPTY_CONTENT_PROMPT: &str = "Please provide content to enhance.";

/// Replacement text for the summary-only placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryProfile {
    pub domain: &'static str,
    pub role: &'static str,
    pub field: &'static str,
    pub industry: &'static str,
}

const DEVELOPER_PROFILE: SummaryProfile = SummaryProfile {
    domain: "software development",
    role: "developer",
    field: "technology",
    industry: "technology",
};

const MANAGER_PROFILE: SummaryProfile = SummaryProfile {
    domain: "project management",
    role: "manager",
    field: "leadership",
    industry: "business",
};

const GENERIC_PROFILE: SummaryProfile = SummaryProfile {
    domain: "their field",
    role: "professional",
    field: "their area of expertise",
    industry: "their industry",
};

/// Picks a profile from keywords in the text. First match wins.
pub fn detect_profile(content: &str) -> SummaryProfile {
    let lower = content.to_lowercase();
    if lower.contains("developer") {
        DEVELOPER_PROFILE
    } else if lower.contains("manager") {
        MANAGER_PROFILE
    } else {
        GENERIC_PROFILE
    }
}

pub struct Enhancer {
    rng: Arc<dyn RandomSource>,
}

impl Enhancer {
    pub fn new(rng: Arc<dyn RandomSource>) -> Self {
        Self { rng }
    }

    pub fn enhance(&self, section: &str, content: &str) -> String {
        if content.trim().is_empty() {
            return EMPTY_CONTENT_PROMPT.to_string();
        }

        let templates = templates_for(section);
        let template = templates[self.rng.pick(templates.len())];

        let profile = (section == Section::Summary.as_str()).then(|| detect_profile(content));
        fill_template(template, |name| match (name, profile) {
            ("original", _) => Some(content),
            ("domain", Some(p)) => Some(p.domain),
            ("role", Some(p)) => Some(p.role),
            ("field", Some(p)) => Some(p.field),
            ("industry", Some(p)) => Some(p.industry),
            _ => None,
        })
        .trim()
        .to_string()
    }
}

/// Single pass over `template`: each `{name}` token is replaced by
/// `lookup(name)`, or dropped when the lookup has nothing. Substituted
/// values are never rescanned, so braces in user text survive untouched.
fn fill_template<'a>(template: &str, lookup: impl Fn(&str) -> Option<&'a str>) -> String {
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) if is_placeholder_name(&after[..close]) => {
                if let Some(value) = lookup(&after[..close]) {
                    out.push_str(value);
                }
                rest = &after[close + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{FixedSequence, UuidEntropy};

    fn enhancer_with(values: Vec<u64>) -> Enhancer {
        Enhancer::new(Arc::new(FixedSequence::new(values)))
    }

    #[test]
    fn test_output_contains_original_and_no_placeholders() {
        let enhancer = Enhancer::new(Arc::new(UuidEntropy));
        for section in Section::ALL {
            for _ in 0..20 {
                let out = enhancer.enhance(section.as_str(), "Shipped the billing service");
                assert!(out.contains("Shipped the billing service"), "{section}: {out}");
                assert!(!out.contains('{'), "{section} leaked a placeholder: {out}");
            }
        }
    }

    #[test]
    fn test_blank_content_returns_prompt_for_every_section() {
        let enhancer = enhancer_with(vec![0]);
        for section in Section::ALL {
            assert_eq!(enhancer.enhance(section.as_str(), "   \n\t"), EMPTY_CONTENT_PROMPT);
            assert_eq!(enhancer.enhance(section.as_str(), ""), EMPTY_CONTENT_PROMPT);
        }
    }

    #[test]
    fn test_unknown_section_matches_experience() {
        let a = enhancer_with(vec![0, 1, 2]);
        let b = enhancer_with(vec![0, 1, 2]);
        for _ in 0..3 {
            assert_eq!(
                a.enhance("volunteering", "Ran the food bank"),
                b.enhance("experience", "Ran the food bank"),
            );
        }
    }

    #[test]
    fn test_developer_summary_uses_developer_profile() {
        let enhancer = enhancer_with(vec![0]);
        let out = enhancer.enhance("summary", "I am a developer");
        assert!(out.contains("I am a developer"));
        assert!(out.contains("software development"));
        assert!(!out.contains("{domain}"));
    }

    #[test]
    fn test_developer_keyword_wins_over_manager() {
        assert_eq!(detect_profile("Developer turned Manager"), DEVELOPER_PROFILE);
        assert_eq!(detect_profile("Engineering MANAGER"), MANAGER_PROFILE);
        assert_eq!(detect_profile("Chef"), GENERIC_PROFILE);
    }

    #[test]
    fn test_manager_summary_second_template() {
        let enhancer = enhancer_with(vec![1]);
        let out = enhancer.enhance("summary", "Seasoned manager.");
        assert_eq!(
            out,
            "Accomplished manager with extensive experience in leadership. Seasoned manager. \
             Known for exceptional problem-solving skills and commitment to excellence in all endeavors."
        );
    }

    #[test]
    fn test_generic_summary_third_template() {
        let enhancer = enhancer_with(vec![2]);
        let out = enhancer.enhance("summary", "Pastry chef");
        assert!(out.starts_with("Dynamic professional with a track record of success in their industry."));
    }

    #[test]
    fn test_result_is_trimmed_but_content_is_verbatim() {
        let enhancer = enhancer_with(vec![0]);
        let out = enhancer.enhance("skills", "  Rust  ");
        assert!(out.starts_with("Rust   - Demonstrated"));
    }

    #[test]
    fn test_braces_in_user_text_are_not_substituted() {
        let enhancer = enhancer_with(vec![0]);
        let out = enhancer.enhance("summary", "Wrote {domain} parsers as a developer");
        assert!(out.contains("Wrote {domain} parsers as a developer"));
    }

    #[test]
    fn test_fill_template_drops_unknown_placeholders() {
        let out = fill_template("a {x} b {original} {", |name| {
            (name == "original").then_some("X")
        });
        assert_eq!(out, "a  b X {");
    }
}
