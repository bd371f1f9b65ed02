use crate::models::Shop;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagFilter {
    #[default]
    All,
    Tag(String),
}

impl TagFilter {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Tag(tag) => tag,
        }
    }

    #[must_use]
    pub fn matches(&self, shop: &Shop) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => shop.has_tag(tag),
        }
    }
}

/// `All` followed by every distinct tag in first-seen order
#[must_use]
pub fn tag_options(shops: &[Shop]) -> Vec<TagFilter> {
    let mut options = vec![TagFilter::All];
    for tag in shops.iter().flat_map(|s| &s.tags) {
        if !options.iter().any(|o| matches!(o, TagFilter::Tag(t) if t == tag)) {
            options.push(TagFilter::Tag(tag.clone()));
        }
    }
    options
}

#[must_use]
pub fn filter_shops<'a>(shops: &'a [Shop], filter: &TagFilter) -> Vec<&'a Shop> {
    shops.iter().filter(|shop| filter.matches(shop)).collect()
}
