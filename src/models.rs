//! Data models for word records and their breakdowns.

use serde::{Deserialize, Serialize};

/// Language a card is currently displayed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DisplayLanguage {
    /// Every new card starts here.
    #[default]
    Sanskrit,
    Spanish,
    English,
}

impl DisplayLanguage {
    /// Selector order, left to right.
    pub const ALL: [DisplayLanguage; 3] = [Self::Sanskrit, Self::Spanish, Self::English];

    pub fn from_key(c: char) -> Option<Self> {
        match c {
            '1' | 's' => Some(Self::Sanskrit),
            '2' | 'e' => Some(Self::Spanish),
            '3' | 'i' => Some(Self::English),
            _ => None,
        }
    }

    /// Fixed label on the selector button.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sanskrit => "Sánscrito",
            Self::Spanish => "Español",
            Self::English => "Inglés",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Sanskrit => 0,
            Self::Spanish => 1,
            Self::English => 2,
        }
    }

    /// Headword shown as the card title in this language.
    pub fn headword<'a>(&self, word: &'a WordRecord) -> &'a str {
        match self {
            Self::Spanish => &word.spanish_form,
            Self::English => &word.english_form,
            Self::Sanskrit => &word.sanskrit_form,
        }
    }
}

/// Composite key of a breakdown entry. Carried along, never interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkId {
    #[serde(rename = "id_s", default)]
    pub headword_id: u64,
    #[serde(rename = "id_w", default)]
    pub subword_id: u64,
}

/// One unit of a headword's morphological breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSubWordLink", into = "RawSubWordLink")]
pub struct SubWordLink {
    pub link_id: LinkId,
    pub sans_word: String,
    pub spanish_word: String,
    pub english_word: String,
}

impl SubWordLink {
    pub fn new(sans_word: &str, spanish_word: &str, english_word: &str) -> Self {
        Self {
            link_id: LinkId::default(),
            sans_word: sans_word.to_string(),
            spanish_word: spanish_word.to_string(),
            english_word: english_word.to_string(),
        }
    }

    /// The three translations in display order: primary first.
    ///
    /// When neither is primary, Sanskrit always sits next to the active
    /// language.
    pub fn ordered(&self, language: DisplayLanguage) -> [&str; 3] {
        match language {
            DisplayLanguage::Spanish => [self.spanish_word.as_str(), self.sans_word.as_str(), self.english_word.as_str()],
            DisplayLanguage::English => [self.english_word.as_str(), self.sans_word.as_str(), self.spanish_word.as_str()],
            DisplayLanguage::Sanskrit => [self.sans_word.as_str(), self.spanish_word.as_str(), self.english_word.as_str()],
        }
    }
}

// Search service shape: the translations sit in a nested `word` object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawSubWordLink {
    #[serde(rename = "id_diccionary_word", default)]
    link_id: LinkId,
    #[serde(default)]
    word: RawSubWord,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawSubWord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<u64>,
    #[serde(default)]
    sans_word: String,
    #[serde(rename = "spanish_w", default)]
    spanish_word: String,
    #[serde(rename = "english_w", default)]
    english_word: String,
}

impl From<RawSubWordLink> for SubWordLink {
    fn from(raw: RawSubWordLink) -> Self {
        Self {
            link_id: raw.link_id,
            sans_word: raw.word.sans_word,
            spanish_word: raw.word.spanish_word,
            english_word: raw.word.english_word,
        }
    }
}

impl From<SubWordLink> for RawSubWordLink {
    fn from(link: SubWordLink) -> Self {
        Self {
            link_id: link.link_id,
            word: RawSubWord {
                id: Some(link.link_id.subword_id),
                sans_word: link.sans_word,
                spanish_word: link.spanish_word,
                english_word: link.english_word,
            },
        }
    }
}

/// A vocabulary entry as handed over by the search layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    #[serde(rename = "sansckrit", default)]
    pub sanskrit_form: String,
    #[serde(rename = "spanish", default)]
    pub spanish_form: String,
    #[serde(rename = "english", default)]
    pub english_form: String,

    /// Base64 image bytes.
    #[serde(rename = "imagen", default, skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,

    #[serde(rename = "diccionaryWordModels", default, deserialize_with = "null_as_empty")]
    pub breakdown: Vec<SubWordLink>,
}

impl WordRecord {
    pub fn new(sanskrit_form: &str, spanish_form: &str, english_form: &str) -> Self {
        Self {
            sanskrit_form: sanskrit_form.to_string(),
            spanish_form: spanish_form.to_string(),
            english_form: english_form.to_string(),
            image_data: None,
            breakdown: Vec::new(),
        }
    }

    pub fn with_breakdown(mut self, breakdown: Vec<SubWordLink>) -> Self {
        self.breakdown = breakdown;
        self
    }

    pub fn with_image(mut self, image_data: &str) -> Self {
        self.image_data = Some(image_data.to_string());
        self
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<SubWordLink>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<SubWordLink>>::deserialize(deserializer)?.unwrap_or_default())
}
