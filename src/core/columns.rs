use crate::domain::model::{ColumnIndexMap, LogicalField};

/// Header predicate for one logical field: the lowercased header must contain
/// any of `any_of` and none of `none_of`.
#[derive(Debug, Clone, Copy)]
pub struct ColumnRule {
    pub field: LogicalField,
    pub any_of: &'static [&'static str],
    pub none_of: &'static [&'static str],
}

impl ColumnRule {
    pub fn matches(&self, header: &str) -> bool {
        let header = header.to_lowercase();
        self.any_of.iter().any(|s| header.contains(s))
            && !self.none_of.iter().any(|s| header.contains(s))
    }
}

// `shipping` excludes "ships from" but `shipsFrom` has no mirror exclusion.
pub const COLUMN_RULES: [ColumnRule; 9] = [
    ColumnRule {
        field: LogicalField::Winner,
        any_of: &["winner"],
        none_of: &["form"],
    },
    ColumnRule {
        field: LogicalField::Twitch,
        any_of: &["twitch"],
        none_of: &[],
    },
    ColumnRule {
        field: LogicalField::Discord,
        any_of: &["discord"],
        none_of: &[],
    },
    ColumnRule {
        field: LogicalField::Website,
        any_of: &["website"],
        none_of: &[],
    },
    ColumnRule {
        field: LogicalField::Giveaway,
        any_of: &["giveaway"],
        none_of: &["pictures"],
    },
    ColumnRule {
        field: LogicalField::Discount,
        any_of: &["discount"],
        none_of: &[],
    },
    ColumnRule {
        field: LogicalField::ShipsFrom,
        any_of: &["ships from", "where item ships"],
        none_of: &[],
    },
    ColumnRule {
        field: LogicalField::Shipping,
        any_of: &["shipping"],
        none_of: &["ships from"],
    },
    ColumnRule {
        field: LogicalField::PictureUrl,
        any_of: &["giveaway pictures"],
        none_of: &[],
    },
];

/// Resolves every logical field to the first matching header position.
pub fn resolve_columns<S: AsRef<str>>(headers: &[S]) -> ColumnIndexMap {
    let mut indices = [None; 9];
    for rule in &COLUMN_RULES {
        indices[rule.field.position()] = headers.iter().position(|h| rule.matches(h.as_ref()));
    }
    let map = ColumnIndexMap::new(indices);

    tracing::info!("Column indices:");
    for (field, index) in map.iter() {
        match index {
            Some(i) => tracing::info!("  {}: {}", field.key(), i),
            None => tracing::info!("  {}: not found", field.key()),
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_cover_every_field_in_order() {
        let fields: Vec<LogicalField> = COLUMN_RULES.iter().map(|r| r.field).collect();
        assert_eq!(fields, LogicalField::ALL.to_vec());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let lower = resolve_columns(&["Winner's Name", "Giveaway"]);
        let upper = resolve_columns(&["WINNER'S NAME", "GIVEAWAY"]);
        assert_eq!(lower, upper);
        assert_eq!(lower.get(LogicalField::Winner), Some(0));
        assert_eq!(lower.get(LogicalField::Giveaway), Some(1));
    }

    #[test]
    fn test_winner_form_link_is_excluded() {
        let map = resolve_columns(&["Winner Form Link", "Winner"]);
        assert_eq!(map.get(LogicalField::Winner), Some(1));

        let map = resolve_columns(&["Winner Form Link"]);
        assert_eq!(map.get(LogicalField::Winner), None);
    }

    #[test]
    fn test_giveaway_pictures_only_feeds_picture_url() {
        let map = resolve_columns(&["Giveaway Pictures", "Giveaway Item"]);
        assert_eq!(map.get(LogicalField::Giveaway), Some(1));
        assert_eq!(map.get(LogicalField::PictureUrl), Some(0));
    }

    #[test]
    fn test_ships_from_and_shipping_disambiguation() {
        let map = resolve_columns(&["Shipping Ships From", "Shipping Cost"]);
        assert_eq!(map.get(LogicalField::ShipsFrom), Some(0));
        assert_eq!(map.get(LogicalField::Shipping), Some(1));

        let map = resolve_columns(&["Where item ships", "Shipping"]);
        assert_eq!(map.get(LogicalField::ShipsFrom), Some(0));
        assert_eq!(map.get(LogicalField::Shipping), Some(1));
    }

    #[test]
    fn test_first_match_wins() {
        let map = resolve_columns(&["Twitch", "Twitch Backup"]);
        assert_eq!(map.get(LogicalField::Twitch), Some(0));
    }

    #[test]
    fn test_unmatched_fields_are_unresolved() {
        let map = resolve_columns(&["Timestamp", "Email"]);
        assert!(map.iter().all(|(_, index)| index.is_none()));

        let empty: [&str; 0] = [];
        assert_eq!(resolve_columns(&empty), ColumnIndexMap::default());
    }
}
