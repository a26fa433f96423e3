//! Template bank holding the enhancement templates for each section.
//!
//! Every template contains `{original}`. Summary templates additionally use
//! `{domain}`, `{role}`, `{field}` and `{industry}`.

use std::fmt;
use std::str::FromStr;

/// The resume sections the enhancement endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Summary,
    Experience,
    Education,
    Skills,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Summary,
        Section::Experience,
        Section::Education,
        Section::Skills,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Summary => "summary",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Skills => "skills",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or(())
    }
}

const SUMMARY_TEMPLATES: &[&str] = &[
    "Results-driven professional with proven expertise in {domain}. {original} Demonstrated ability to lead cross-functional teams and deliver innovative solutions that drive business growth.",
    "Accomplished {role} with extensive experience in {field}. {original} Known for exceptional problem-solving skills and commitment to excellence in all endeavors.",
    "Dynamic professional with a track record of success in {industry}. {original} Passionate about leveraging cutting-edge technologies to create impactful solutions.",
];

const EXPERIENCE_TEMPLATES: &[&str] = &[
    "{original} Successfully collaborated with diverse stakeholders to ensure project alignment with business objectives and user requirements.",
    "{original} Implemented industry best practices and mentored junior team members, contributing to overall team productivity and knowledge sharing.",
    "{original} Utilized agile methodologies to streamline processes, resulting in improved efficiency and faster time-to-market for key initiatives.",
];

const EDUCATION_TEMPLATES: &[&str] = &[
    "{original} Completed rigorous coursework in advanced topics including data structures, algorithms, and software engineering principles.",
    "{original} Participated in research projects and maintained academic excellence while developing practical skills through hands-on learning experiences.",
    "{original} Engaged in collaborative learning environments and contributed to academic community through peer tutoring and study groups.",
];

const SKILLS_TEMPLATES: &[&str] = &[
    "{original} - Demonstrated through successful implementation in multiple high-impact projects and continuous professional development.",
    "{original} - Applied in real-world scenarios with measurable results and positive feedback from stakeholders and team members.",
    "{original} - Continuously expanding knowledge through ongoing training, certifications, and hands-on practice in emerging technologies.",
];

/// Returns the template set for a section name.
/// Names outside the four known sections get the experience set.
pub fn templates_for(section: &str) -> &'static [&'static str] {
    match section.parse::<Section>() {
        Ok(Section::Summary) => SUMMARY_TEMPLATES,
        Ok(Section::Education) => EDUCATION_TEMPLATES,
        Ok(Section::Skills) => SKILLS_TEMPLATES,
        Ok(Section::Experience) | Err(()) => EXPERIENCE_TEMPLATES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_template_has_original_placeholder() {
        for section in Section::ALL {
            for template in templates_for(section.as_str()) {
                assert!(
                    template.contains("{original}"),
                    "{section} template missing {{original}}: {template}"
                );
            }
        }
    }

    #[test]
    fn test_unknown_section_falls_back_to_experience() {
        assert_eq!(templates_for("hobbies"), templates_for("experience"));
        assert_eq!(templates_for(""), EXPERIENCE_TEMPLATES);
    }

    #[test]
    fn test_section_names_are_case_sensitive() {
        assert!("Summary".parse::<Section>().is_err());
        assert_eq!("skills".parse::<Section>(), Ok(Section::Skills));
    }

    #[test]
    fn test_only_summary_uses_profile_placeholders() {
        for section in [Section::Experience, Section::Education, Section::Skills] {
            for template in templates_for(section.as_str()) {
                assert!(!template.contains("{domain}"));
                assert!(!template.contains("{role}"));
            }
        }
    }
}
