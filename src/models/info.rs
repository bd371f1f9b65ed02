use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InfoLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InfoItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub links: Vec<InfoLink>,
    /// Markdown article under the trip's `info/` directory
    #[serde(default)]
    pub file: Option<String>,
}

impl InfoItem {
    /// File name of the markdown article, falling back to `{id}.md`
    #[must_use]
    pub fn article_file(&self) -> String {
        match self.file.as_deref().map(str::trim) {
            Some(file) if !file.is_empty() => file.to_string(),
            _ => format!("{}.md", self.id),
        }
    }
}
