use latin_protocol::AnalysisGroup;

use crate::AnalysisError;

/// Decodes a provider response for `word`: a JSON array of analysis groups.
/// Missing fields and unknown categories are contract violations.
pub fn decode_analysis(word: &str, json: &str) -> Result<Vec<AnalysisGroup>, AnalysisError> {
    serde_json::from_str(json).map_err(|e| AnalysisError::ProviderContract {
        word: word.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use latin_protocol::{Case, PartOfSpeech};

    #[test]
    fn test_decode_groups() {
        let json = r#"[
            { "english_base": "we", "variants": [
                { "part_of_speech": "pronoun", "casus": "nominative", "english_equivalent": "we" },
                { "part_of_speech": "pronoun", "casus": "accusative", "english_equivalent": "us" }
            ] },
            { "english_base": "be", "variants": [
                { "part_of_speech": "verb", "english_equivalent": "we are" }
            ] }
        ]"#;

        let groups = decode_analysis("nos", json).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].variants[1].case, Some(Case::Accusative));
        assert_eq!(groups[1].variants[0].part_of_speech, PartOfSpeech::Verb);
        assert_eq!(groups[1].variants[0].case, None);
    }

    #[test]
    fn test_unknown_part_of_speech_fails_fast() {
        let json = r#"[{ "english_base": "x", "variants": [
            { "part_of_speech": "gerundive", "english_equivalent": "x" }
        ] }]"#;

        let err = decode_analysis("x", json).unwrap_err();
        assert!(matches!(err, AnalysisError::ProviderContract { ref word, .. } if word == "x"));
    }

    #[test]
    fn test_missing_equivalent_fails_fast() {
        let json = r#"[{ "english_base": "x", "variants": [{ "part_of_speech": "noun" }] }]"#;
        assert!(decode_analysis("x", json).is_err());
    }

    #[test]
    fn test_empty_response_is_not_a_contract_error() {
        // Selection reports the unknown word; decoding just yields nothing
        assert!(decode_analysis("x", "[]").unwrap().is_empty());
    }
}
