//! Instruction text sent to the language model.

use chrono::NaiveDate;

/// Section headings the model may use, in output order.
pub const SECTION_HEADINGS: [&str; 4] = [
    "New Features",
    "Improvements",
    "Bug Fixes",
    "Additional Notes",
];

/// Content-style switches from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PromptStyle {
    pub summary: bool,
    pub fun: bool,
    pub emoji: bool,
}

/// Heading line for a release entry: `[v1.3.0] - 2024-05-01`
pub fn version_heading(version: &str, date: NaiveDate) -> String {
    format!("[{}] - {}", version, date.format("%Y-%m-%d"))
}

/// Build the instruction for summarizing the commits of `version`.
///
/// `context` is appended verbatim after the fixed rules.
pub fn build_prompt(
    version: &str,
    date: NaiveDate,
    style: PromptStyle,
    context: Option<&str>,
) -> String {
    let headings = SECTION_HEADINGS
        .iter()
        .map(|h| format!("\"{}\"", h))
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines = vec![
        "You are writing the changelog entry for a software release.".to_string(),
        "You will receive the list of commit messages included in the release as a JSON array."
            .to_string(),
        "Turn them into a changelog entry formatted as markdown.".to_string(),
        String::new(),
        "Rules:".to_string(),
        format!(
            "- Start with the version heading \"## {}\".",
            version_heading(version, date)
        ),
        format!(
            "- Group changes under \"### \" headings. The only allowed headings are {}.",
            headings
        ),
        "- Include a section only if it has at least one entry; never output an empty section."
            .to_string(),
        "- Write each change as a concise bullet point describing its effect for users."
            .to_string(),
        "- Do not include sensitive information such as credentials, internal hostnames or personal data."
            .to_string(),
        "- Do not reference issue numbers, pull request numbers or links to them.".to_string(),
        "- Keep the tone suitable for a public audience.".to_string(),
        "- Output only the markdown entry, with no preamble or closing remarks.".to_string(),
    ];

    if style.summary {
        lines.push(
            "- Below the version heading and above the sections, add a short summary paragraph of the release."
                .to_string(),
        );
    }

    if style.fun {
        lines.push(
            "- Use a light, playful tone; a joke or two is welcome, but keep the entry as short as it would otherwise be."
                .to_string(),
        );
    }

    if style.emoji {
        lines.push(
            "- Use emoji in the bullet points and summary text, but never in headings.".to_string(),
        );
    }

    let mut prompt = lines.join("\n");

    if let Some(context) = context {
        prompt.push_str("\n\n");
        prompt.push_str(context);
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[test]
    fn test_version_heading() {
        assert_eq!(version_heading("v1.3.0", date()), "[v1.3.0] - 2024-05-01");
    }

    #[test]
    fn test_prompt_contains_fixed_rules() {
        let prompt = build_prompt("v1.3.0", date(), PromptStyle::default(), None);

        assert!(prompt.contains("[v1.3.0] - 2024-05-01"));
        for heading in SECTION_HEADINGS {
            assert!(prompt.contains(heading), "missing heading {}", heading);
        }
        assert!(prompt.contains("sensitive information"));
        assert!(prompt.contains("pull request"));
        assert!(prompt.contains("public audience"));
    }

    #[test]
    fn test_style_flags_off_by_default() {
        let prompt = build_prompt("v1.0.0", date(), PromptStyle::default(), None);

        assert!(!prompt.contains("summary paragraph"));
        assert!(!prompt.contains("joke"));
        assert!(!prompt.contains("emoji"));
    }

    #[test]
    fn test_style_flags_add_instructions() {
        let style = PromptStyle {
            summary: true,
            fun: true,
            emoji: true,
        };
        let prompt = build_prompt("v1.0.0", date(), style, None);

        assert!(prompt.contains("summary paragraph"));
        assert!(prompt.contains("joke"));
        assert!(prompt.contains("never in headings"));
    }

    #[test]
    fn test_context_appended_verbatim() {
        let context = "This release targets the *2024 spring* cohort.\nMention the migration guide.";
        let prompt = build_prompt("v1.0.0", date(), PromptStyle::default(), Some(context));

        assert!(prompt.ends_with(context));
    }
}
