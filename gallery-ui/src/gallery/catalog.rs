//! Derived views over the last fetched poem list
//!
//! The catalog is a pure function of the most recent server response plus
//! the active filter; nothing here issues requests or fabricates poem
//! data. Server order is preserved everywhere; the client never sorts.

use poem_types::Poem;

/// Number of poems shown in the "Recent" rail.
pub const RECENT_LIMIT: usize = 10;

/// Tag buckets rendered as home-view carousels, in display order.
pub const HOME_TAG_BUCKETS: [&str; 5] = ["nature", "city", "night", "rain", "light"];

/// First poem flagged as featured, in server response order.
pub fn featured(poems: &[Poem]) -> Option<Poem> {
    poems.iter().find(|p| p.is_featured).cloned()
}

/// Every featured poem, order preserved, for the "Featured" rail.
pub fn featured_rail(poems: &[Poem]) -> Vec<Poem> {
    poems.iter().filter(|p| p.is_featured).cloned().collect()
}

/// First [`RECENT_LIMIT`] poems in server-returned order.
pub fn recent(poems: &[Poem]) -> Vec<Poem> {
    poems.iter().take(RECENT_LIMIT).cloned().collect()
}

/// Poems whose tag sequence contains `tag`, order preserved. No matches
/// is an empty rail, not an error.
pub fn by_tag(poems: &[Poem], tag: &str) -> Vec<Poem> {
    poems
        .iter()
        .filter(|p| p.tags.iter().any(|t| t == tag))
        .cloned()
        .collect()
}

/// Drop the poem itself from its related rail.
pub fn exclude_poem(poems: &[Poem], id: &str) -> Vec<Poem> {
    poems.iter().filter(|p| p.id != id).cloned().collect()
}

/// Counts shown on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub total: usize,
    pub featured: usize,
}

pub fn stats(poems: &[Poem]) -> CatalogStats {
    CatalogStats {
        total: poems.len(),
        featured: poems.iter().filter(|p| p.is_featured).count(),
    }
}

/// Use the cover unchanged when it is already absolute, otherwise prefix
/// the configured API base. Applied identically at every render site.
pub fn resolve_cover_url(base: &str, cover: &str) -> String {
    if cover.starts_with("http") {
        cover.to_string()
    } else {
        format!("{base}{cover}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poem(id: &str, featured: bool, tags: &[&str]) -> Poem {
        Poem {
            id: id.to_string(),
            title: format!("poem {id}"),
            excerpt: String::new(),
            is_featured: featured,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Poem::default()
        }
    }

    #[test]
    fn featured_is_the_earliest_flagged_poem() {
        let poems = vec![
            poem("a", false, &[]),
            poem("b", true, &[]),
            poem("c", true, &[]),
        ];
        assert_eq!(featured(&poems).unwrap().id, "b");
        assert!(featured(&[poem("a", false, &[])]).is_none());

        let rail = featured_rail(&poems);
        assert_eq!(
            rail.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
            vec!["b", "c"]
        );
    }

    #[test]
    fn recent_keeps_server_order_and_caps_at_ten() {
        let poems: Vec<Poem> = (0..15).map(|i| poem(&i.to_string(), false, &[])).collect();
        let rail = recent(&poems);
        assert_eq!(rail.len(), RECENT_LIMIT);
        assert_eq!(rail[0].id, "0");
        assert_eq!(rail[9].id, "9");

        // fewer than the cap means everything comes back
        assert_eq!(recent(&poems[..3]).len(), 3);
    }

    #[test]
    fn by_tag_is_an_order_preserving_subset() {
        let poems = vec![
            poem("a", false, &["rain", "night"]),
            poem("b", false, &["city"]),
            poem("c", false, &["rain"]),
        ];
        let rail = by_tag(&poems, "rain");
        assert_eq!(
            rail.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
            vec!["a", "c"]
        );
        assert!(by_tag(&poems, "light").is_empty());
    }

    #[test]
    fn related_rail_excludes_the_poem_itself() {
        let poems = vec![poem("a", false, &[]), poem("b", false, &[])];
        let rail = exclude_poem(&poems, "a");
        assert_eq!(rail.len(), 1);
        assert_eq!(rail[0].id, "b");
    }

    #[test]
    fn stats_count_totals_and_featured() {
        let poems = vec![
            poem("a", true, &[]),
            poem("b", false, &[]),
            poem("c", true, &[]),
        ];
        let s = stats(&poems);
        assert_eq!(s.total, 3);
        assert_eq!(s.featured, 2);
    }

    #[test]
    fn absolute_covers_pass_through_unchanged() {
        assert_eq!(
            resolve_cover_url("http://localhost:8000", "https://cdn.example/p.jpg"),
            "https://cdn.example/p.jpg"
        );
        assert_eq!(
            resolve_cover_url("http://localhost:8000", "/uploads/p.jpg"),
            "http://localhost:8000/uploads/p.jpg"
        );
        // empty base means same-origin
        assert_eq!(resolve_cover_url("", "/uploads/p.jpg"), "/uploads/p.jpg");
    }
}
