use crate::character::Character;
use crate::error::FetchError;
use serde::Deserialize;

/// Response envelope of the character listing endpoint.
///
/// Only `results` is read; `info` and other keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CharacterPage {
    #[serde(default)]
    pub results: Vec<Character>,
}

/// Decode a listing response body. A missing `results` field yields no characters.
pub fn parse_character_page(body: &str) -> Result<Vec<Character>, FetchError> {
    serde_json::from_str::<CharacterPage>(body)
        .map(|page| page.results)
        .map_err(|e| FetchError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_results() {
        let body = r#"{
            "info": { "count": 826, "pages": 42, "next": "https://rickandmortyapi.com/api/character/?page=2", "prev": null },
            "results": [
                { "id": 1, "name": "Rick Sanchez", "status": "Alive", "species": "Human", "image": "https://rickandmortyapi.com/api/character/avatar/1.jpeg" },
                { "id": 8, "name": "Adjudicator Rick", "status": "Dead", "species": "Human", "image": "https://rickandmortyapi.com/api/character/avatar/8.jpeg" }
            ]
        }"#;
        let characters = parse_character_page(body).unwrap();
        assert_eq!(characters.len(), 2);
        assert_eq!(characters[1].status, "Dead");
    }

    #[test]
    fn test_missing_results_is_empty() {
        assert_eq!(parse_character_page(r#"{"info": {}}"#).unwrap(), vec![]);
    }

    #[test]
    fn test_malformed_body_is_parse_error() {
        let err = parse_character_page("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
        assert!(!err.is_network());
    }
}
