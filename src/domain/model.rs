use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Value written for any field whose cell is missing, empty or unresolved.
pub const PLACEHOLDER: &str = "N/A";

/// The nine normalized output keys, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalField {
    Winner,
    Twitch,
    Discord,
    Website,
    Giveaway,
    Discount,
    ShipsFrom,
    Shipping,
    PictureUrl,
}

impl LogicalField {
    pub const ALL: [LogicalField; 9] = [
        LogicalField::Winner,
        LogicalField::Twitch,
        LogicalField::Discord,
        LogicalField::Website,
        LogicalField::Giveaway,
        LogicalField::Discount,
        LogicalField::ShipsFrom,
        LogicalField::Shipping,
        LogicalField::PictureUrl,
    ];

    /// Key used in the JSON snapshot.
    pub fn key(self) -> &'static str {
        match self {
            LogicalField::Winner => "winner",
            LogicalField::Twitch => "twitch",
            LogicalField::Discord => "discord",
            LogicalField::Website => "website",
            LogicalField::Giveaway => "giveaway",
            LogicalField::Discount => "discount",
            LogicalField::ShipsFrom => "shipsFrom",
            LogicalField::Shipping => "shipping",
            LogicalField::PictureUrl => "pictureUrl",
        }
    }

    pub(crate) fn position(self) -> usize {
        self as usize
    }
}

/// Raw CSV text of one sheet export. Lives only for the duration of a run.
#[derive(Debug, Clone)]
pub struct SheetExport {
    pub csv: String,
}

/// One giveaway winner entry. Every field is either a cell value or
/// [`PLACEHOLDER`], never absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiveawayRecord {
    pub winner: String,
    pub twitch: String,
    pub discord: String,
    pub website: String,
    pub giveaway: String,
    pub discount: String,
    pub ships_from: String,
    pub shipping: String,
    pub picture_url: String,
}

impl GiveawayRecord {
    /// Builds a record by asking `value_of` for each logical field.
    pub fn from_fields<F>(mut value_of: F) -> Self
    where
        F: FnMut(LogicalField) -> String,
    {
        Self {
            winner: value_of(LogicalField::Winner),
            twitch: value_of(LogicalField::Twitch),
            discord: value_of(LogicalField::Discord),
            website: value_of(LogicalField::Website),
            giveaway: value_of(LogicalField::Giveaway),
            discount: value_of(LogicalField::Discount),
            ships_from: value_of(LogicalField::ShipsFrom),
            shipping: value_of(LogicalField::Shipping),
            picture_url: value_of(LogicalField::PictureUrl),
        }
    }

    pub fn get(&self, field: LogicalField) -> &str {
        match field {
            LogicalField::Winner => &self.winner,
            LogicalField::Twitch => &self.twitch,
            LogicalField::Discord => &self.discord,
            LogicalField::Website => &self.website,
            LogicalField::Giveaway => &self.giveaway,
            LogicalField::Discount => &self.discount,
            LogicalField::ShipsFrom => &self.ships_from,
            LogicalField::Shipping => &self.shipping,
            LogicalField::PictureUrl => &self.picture_url,
        }
    }
}

/// Resolved column position for each logical field; `None` when no header matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnIndexMap {
    indices: [Option<usize>; 9],
}

impl ColumnIndexMap {
    pub fn new(indices: [Option<usize>; 9]) -> Self {
        Self { indices }
    }

    pub fn get(&self, field: LogicalField) -> Option<usize> {
        self.indices[field.position()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (LogicalField, Option<usize>)> + '_ {
        LogicalField::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub columns: ColumnIndexMap,
    pub records: Vec<GiveawayRecord>,
}

/// The persisted artifact: generation time plus records in sheet order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub last_updated: String,
    pub data: Vec<GiveawayRecord>,
}

impl Snapshot {
    pub fn new(records: Vec<GiveawayRecord>) -> Self {
        Self::at(Utc::now(), records)
    }

    pub fn at(timestamp: DateTime<Utc>, records: Vec<GiveawayRecord>) -> Self {
        Self {
            last_updated: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            data: records,
        }
    }

    pub fn to_json_pretty(&self) -> crate::utils::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
