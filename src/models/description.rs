use serde::{Deserialize, Deserializer};

/// Item description normalized to an ordered list of paragraphs
///
/// Itinerary files carry either a single string or a list of strings. Both
/// shapes are accepted on decode; a single string is split on blank lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Description(Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDescription {
    Text(String),
    Paragraphs(Vec<String>),
}

impl Description {
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut paragraphs = Vec::new();
        let mut current: Vec<&str> = Vec::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                if !current.is_empty() {
                    paragraphs.push(current.join("\n"));
                    current.clear();
                }
            } else {
                current.push(line);
            }
        }
        if !current.is_empty() {
            paragraphs.push(current.join("\n"));
        }

        Self(paragraphs)
    }

    #[must_use]
    pub fn from_paragraphs<I, S>(paragraphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            paragraphs
                .into_iter()
                .map(|p| p.as_ref().trim().to_string())
                .filter(|p| !p.is_empty())
                .collect(),
        )
    }

    #[must_use]
    pub fn paragraphs(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for Description {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<RawDescription>::deserialize(deserializer)? {
            None => Self::default(),
            Some(RawDescription::Text(text)) => Self::from_text(&text),
            Some(RawDescription::Paragraphs(paragraphs)) => Self::from_paragraphs(paragraphs),
        })
    }
}
