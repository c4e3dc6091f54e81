use super::DeckListError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

pub const YDKE_PREFIX: &str = "ydke://";

/// Card IDs of the three sections of a ydke:// URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YdkeDeck {
    pub main: Vec<u32>,
    pub extra: Vec<u32>,
    pub side: Vec<u32>,
}

/// Decode `ydke://<main>!<extra>!<side>!`
///
/// Each section is base64 over little-endian u32 IDs; missing sections are
/// empty and a trailing partial word is dropped.
pub fn parse_ydke(url: &str) -> Result<YdkeDeck, DeckListError> {
    let body = url
        .strip_prefix(YDKE_PREFIX)
        .ok_or_else(|| DeckListError::InvalidYdkeUrl(url.chars().take(32).collect()))?;

    let mut sections = body.split('!');
    let mut next = |name: &'static str| decode_section(name, sections.next().unwrap_or(""));

    Ok(YdkeDeck {
        main: next("main")?,
        extra: next("extra")?,
        side: next("side")?,
    })
}

fn decode_section(name: &'static str, data: &str) -> Result<Vec<u32>, DeckListError> {
    if data.is_empty() {
        return Ok(Vec::new());
    }
    let bytes = STANDARD
        .decode(data)
        .map_err(|source| DeckListError::InvalidSection { section: name, source })?;

    Ok(bytes
        .chunks_exact(4)
        .map(|word| u32::from_le_bytes([word[0], word[1], word[2], word[3]]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(ids: &[u32]) -> String {
        let bytes: Vec<u8> = ids.iter().flat_map(|id| id.to_le_bytes()).collect();
        STANDARD.encode(bytes)
    }

    #[test]
    fn test_three_sections() {
        let url = format!(
            "ydke://{}!{}!{}!",
            encode(&[14558127, 14558127, 23434538]),
            encode(&[1]),
            encode(&[])
        );
        let deck = parse_ydke(&url).unwrap();
        assert_eq!(deck.main, vec![14558127, 14558127, 23434538]);
        assert_eq!(deck.extra, vec![1]);
        assert!(deck.side.is_empty());
    }

    #[test]
    fn test_missing_sections() {
        let url = format!("ydke://{}", encode(&[9, 10]));
        let deck = parse_ydke(&url).unwrap();
        assert_eq!(deck.main, vec![9, 10]);
        assert!(deck.extra.is_empty());
        assert!(deck.side.is_empty());
    }

    #[test]
    fn test_partial_word_is_dropped() {
        let mut bytes = 77u32.to_le_bytes().to_vec();
        bytes.extend_from_slice(&[1, 2]);
        let url = format!("ydke://{}!!", STANDARD.encode(bytes));
        assert_eq!(parse_ydke(&url).unwrap().main, vec![77]);
    }

    #[test]
    fn test_invalid_prefix() {
        assert!(matches!(
            parse_ydke("not-a-ydke"),
            Err(DeckListError::InvalidYdkeUrl(_))
        ));
    }

    #[test]
    fn test_invalid_base64() {
        let result = parse_ydke("ydke://@@@@!!");
        assert!(matches!(
            result,
            Err(DeckListError::InvalidSection { section: "main", .. })
        ));
    }
}
