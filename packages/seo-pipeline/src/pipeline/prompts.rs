//! Backend instructions and response parsing for SEO generation.

use crate::types::seo::SeoSuggestion;

/// Fixed instruction sequence sent with every generation request.
///
/// Order matters: role first, then the output shape, then the constraints
/// the backend should apply before the pipeline re-validates locally.
pub const SEO_INSTRUCTIONS: &[&str] = &[
    "You are an SEO content assistant.",
    r#"Generate a JSON object containing the following:
{
    "summary": "...",
    "metaKeywords": "...",
    "metaDescription": "..."
}"#,
    "You use the language matching the language of the provided context.",
    "Make sure the character counts include whitespace.",
    "Truncate the text if it exceeds the limit.",
    "Ensure the output is a well-formed JSON object. Do not wrap it in a codeblock. Return it as plain text.",
    r#"Use these character limits:
- summary: max 200 characters
- metaKeywords: max 255 characters
- metaDescription: max 160 characters"#,
    "If any text exceeds its character limit, truncate it at the last complete word that fits within the limit.",
];

/// Parse a backend payload into a suggestion.
///
/// Tolerates a markdown code fence around the JSON even though the
/// instructions forbid one. Any other malformed payload is the caller's
/// signal to degrade to empty fields.
pub fn parse_seo_response(payload: &str) -> Result<SeoSuggestion, serde_json::Error> {
    serde_json::from_str(payload).or_else(|_| {
        let fenced = payload
            .trim()
            .trim_start_matches("```json")
            .trim_start_matches("```")
            .trim_end_matches("```")
            .trim();
        serde_json::from_str(fenced)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instructions_carry_the_budgets() {
        let joined = SEO_INSTRUCTIONS.join("\n");
        assert!(joined.contains("max 200 characters"));
        assert!(joined.contains("max 255 characters"));
        assert!(joined.contains("max 160 characters"));
    }

    #[test]
    fn test_parse_plain_json() {
        let parsed = parse_seo_response(
            r#"{"summary":"S","metaKeywords":"K","metaDescription":"D"}"#,
        )
        .unwrap();

        assert_eq!(parsed.summary, "S");
        assert_eq!(parsed.meta_keywords, "K");
        assert_eq!(parsed.meta_description, "D");
    }

    #[test]
    fn test_parse_fenced_json() {
        let payload = "```json\n{\"summary\":\"S\",\"metaKeywords\":\"K\",\"metaDescription\":\"D\"}\n```";
        let parsed = parse_seo_response(payload).unwrap();
        assert_eq!(parsed.summary, "S");
    }

    #[test]
    fn test_parse_rejects_prose() {
        assert!(parse_seo_response("Sorry, I cannot help with that.").is_err());
    }

    #[test]
    fn test_parse_rejects_missing_keys() {
        assert!(parse_seo_response(r#"{"summary":"S"}"#).is_err());
    }
}
