//! Grouping collectibles into token family rows.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{Collectible, TokenFamily, SHOWCASE_STABLE_ID};

/// Card rows per family chunk; larger families are split into several items.
pub const ROWS_PER_CHUNK: usize = 50;

/// Cards per grid row.
pub const CARDS_PER_ROW: usize = 2;

pub const DEFAULT_SHOWCASE_LABEL: &str = "Showcase";

/// Matches the first "the " in a family name, with the whitespace before it
static ARTICLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s*the\s").expect("Invalid article regex pattern"));

/// Only the first match is dropped.
fn sort_key(family_name: &str) -> String {
    ARTICLE.replace(family_name, "").to_lowercase()
}

fn pair_rows(tokens: Vec<Collectible>) -> Vec<Vec<Collectible>> {
    let mut rows = Vec::with_capacity(tokens.len().div_ceil(CARDS_PER_ROW));
    let mut iter = tokens.into_iter().peekable();
    while iter.peek().is_some() {
        rows.push(iter.by_ref().take(CARDS_PER_ROW).collect());
    }
    rows
}

/// Build the collectibles section items.
///
/// Families keep first-seen order until sorted by name (ignoring the first
/// "the"). Showcased tokens, in selection order, form an extra family placed
/// first. `family_id` is the final position.
pub fn build_unique_token_list(
    collectibles: &[Collectible],
    showcase_ids: &[String],
    showcase_label: &str,
) -> Vec<TokenFamily> {
    let mut groups: Vec<(String, Vec<Collectible>)> = Vec::new();
    for token in collectibles {
        match groups.iter_mut().find(|(name, _)| *name == token.family_name) {
            Some((_, tokens)) => tokens.push(token.clone()),
            None => groups.push((token.family_name.clone(), vec![token.clone()])),
        }
    }

    let mut families = Vec::new();
    for (family_name, tokens) in groups {
        let children_amount = tokens.len();
        let family_image = tokens.first().and_then(|t| t.family_image.clone());
        let rows = pair_rows(tokens);
        let first_row_ids: Vec<&str> = rows
            .first()
            .map(|row| row.iter().map(|t| t.unique_id.as_str()).collect())
            .unwrap_or_default();

        let chunks: Vec<Vec<Vec<Collectible>>> =
            rows.chunks(ROWS_PER_CHUNK).map(|c| c.to_vec()).collect();
        for (index, chunk) in chunks.into_iter().enumerate() {
            let id = first_row_ids.join(&format!("__{}", index));
            families.push(TokenFamily {
                family_id: 0,
                family_name: family_name.clone(),
                family_image: family_image.clone(),
                children_amount,
                is_header: index == 0,
                unique_id: id.clone(),
                stable_id: id,
                tokens: chunk,
            });
        }
    }

    families.sort_by_cached_key(|family| sort_key(&family.family_name));

    let mut showcased: Vec<(usize, &Collectible)> = collectibles
        .iter()
        .filter_map(|token| {
            showcase_ids
                .iter()
                .position(|id| *id == token.unique_id)
                .map(|pos| (pos, token))
        })
        .collect();
    showcased.sort_by_key(|(pos, _)| *pos);

    if !showcased.is_empty() {
        let tokens: Vec<Collectible> = showcased.iter().map(|(_, t)| (*t).clone()).collect();
        let unique_id = format!(
            "sc_{}",
            tokens
                .iter()
                .map(|t| t.unique_id.as_str())
                .collect::<Vec<_>>()
                .join("__")
        );
        families.insert(
            0,
            TokenFamily {
                family_id: 0,
                family_name: showcase_label.to_string(),
                family_image: None,
                children_amount: tokens.len(),
                is_header: true,
                unique_id,
                stable_id: SHOWCASE_STABLE_ID.to_string(),
                tokens: pair_rows(tokens),
            },
        );
    }

    for (position, family) in families.iter_mut().enumerate() {
        family.family_id = position;
    }
    families
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(family: &str, id: &str) -> Collectible {
        Collectible {
            unique_id: format!("{}_{}", family, id),
            id: id.to_string(),
            contract_address: format!("0x{}", family),
            name: format!("{} #{}", family, id),
            family_name: family.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_pairs_into_rows() {
        let tokens: Vec<Collectible> = (0..5).map(|i| token("Punks", &i.to_string())).collect();
        let families = build_unique_token_list(&tokens, &[], DEFAULT_SHOWCASE_LABEL);
        assert_eq!(families.len(), 1);
        let family = &families[0];
        assert_eq!(family.children_amount, 5);
        assert_eq!(family.amount_of_rows(), 3);
        assert_eq!(family.tokens[2].len(), 1);
        assert!(family.is_header);
        assert_eq!(family.unique_id, "Punks_0__0Punks_1");
    }

    #[test]
    fn test_sort_ignores_leading_article() {
        let tokens = vec![
            token("Zorbs", "1"),
            token("The Apes", "1"),
            token("Blobs", "1"),
        ];
        let families = build_unique_token_list(&tokens, &[], DEFAULT_SHOWCASE_LABEL);
        let names: Vec<&str> = families.iter().map(|f| f.family_name.as_str()).collect();
        assert_eq!(names, vec!["The Apes", "Blobs", "Zorbs"]);
        let ids: Vec<usize> = families.iter().map(|f| f.family_id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_sort_key_drops_first_article_anywhere() {
        assert_eq!(sort_key("The Apes"), "apes");
        assert_eq!(sort_key("Legend of the Ape"), "legend ofape");
        assert_eq!(sort_key("The the Apes"), "the apes");
        assert_eq!(sort_key("Zorbs"), "zorbs");
    }

    #[test]
    fn test_sort_ignores_mid_name_article() {
        let tokens = vec![token("Legend of the Ape", "1"), token("Legend of Zeal", "1")];
        let families = build_unique_token_list(&tokens, &[], DEFAULT_SHOWCASE_LABEL);
        let names: Vec<&str> = families.iter().map(|f| f.family_name.as_str()).collect();
        assert_eq!(names, vec!["Legend of Zeal", "Legend of the Ape"]);
    }

    #[test]
    fn test_large_family_is_chunked() {
        let tokens: Vec<Collectible> = (0..(ROWS_PER_CHUNK * 2 + 3))
            .map(|i| token("Big", &i.to_string()))
            .collect();
        let families = build_unique_token_list(&tokens, &[], DEFAULT_SHOWCASE_LABEL);
        assert_eq!(families.len(), 2);
        assert!(families[0].is_header);
        assert!(!families[1].is_header);
        assert_eq!(families[0].amount_of_rows(), ROWS_PER_CHUNK);
        assert_eq!(families[1].amount_of_rows(), 2);
        assert_ne!(families[0].unique_id, families[1].unique_id);
    }

    #[test]
    fn test_showcase_family_first_in_selection_order() {
        let tokens = vec![token("Apes", "1"), token("Apes", "2"), token("Cats", "9")];
        let showcase = vec!["Cats_9".to_string(), "Apes_1".to_string()];
        let families = build_unique_token_list(&tokens, &showcase, "Featured");
        assert_eq!(families.len(), 3);

        let first = &families[0];
        assert!(first.is_showcase());
        assert_eq!(first.family_name, "Featured");
        assert_eq!(first.unique_id, "sc_Cats_9__Apes_1");
        assert_eq!(first.children_amount, 2);
        assert_eq!(first.family_id, 0);
        assert_eq!(families[1].family_name, "Apes");
    }

    #[test]
    fn test_unknown_showcase_ids_ignored() {
        let tokens = vec![token("Apes", "1")];
        let families =
            build_unique_token_list(&tokens, &["missing".to_string()], DEFAULT_SHOWCASE_LABEL);
        assert_eq!(families.len(), 1);
        assert!(!families[0].is_showcase());
    }
}
