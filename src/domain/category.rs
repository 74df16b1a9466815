//! Storefront categories.

/// Name of the synthetic section holding every product on sale.
pub const SALE_SECTION: &str = "Ugens Tilbud";

/// Categories shown on the overview, in display order.
pub const OVERVIEW_CATEGORIES: &[&str] = &[
    "Kolonial",
    "Drikkevarer",
    "Mejeri",
    "Baby og småbørn",
    "Personlig pleje",
    "Husholdning",
    "Frugt & grønt",
    "Nemt & hurtigt",
    "Køl",
    "Frost",
    "Ost m.v.",
    "Brød & Bavinchi",
    "Kød, fisk & fjerkræ",
    "Kiosk",
    "Slik",
];

/// URL-safe slugs for the browsable categories.
const SLUGS: &[(&str, &str)] = &[
    ("Kolonial", "Kolonial"),
    ("Drikkevarer", "Drikkevarer"),
    ("Mejeri", "Mejeri"),
    ("Frugt_og_groent", "Frugt & grønt"),
    ("Nemt_og_hurtigt", "Nemt & hurtigt"),
    ("Koel", "Køl"),
    ("Frost", "Frost"),
    ("Ost_mv", "Ost m.v."),
    ("Broed_og_Bavinchi", "Brød & Bavinchi"),
    ("Koed_fisk_og_fjerkrae", "Kød, fisk & fjerkræ"),
    ("Slik", "Slik"),
];

/// Resolve a category slug (with or without a trailing `.html`).
#[must_use]
pub fn category_for_slug(slug: &str) -> Option<&'static str> {
    let slug = slug.strip_suffix(".html").unwrap_or(slug);
    SLUGS
        .iter()
        .find(|(candidate, _)| *candidate == slug)
        .map(|(_, name)| *name)
}

/// All browsable slugs, in display order.
pub fn slugs() -> impl Iterator<Item = &'static str> {
    SLUGS.iter().map(|(slug, _)| *slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_resolve_to_category_names() {
        assert_eq!(category_for_slug("Koel"), Some("Køl"));
        assert_eq!(category_for_slug("Frugt_og_groent.html"), Some("Frugt & grønt"));
        assert_eq!(category_for_slug("Kiosk"), None);
    }

    #[test]
    fn every_slug_names_an_overview_category() {
        for slug in slugs() {
            let name = category_for_slug(slug).unwrap();
            assert!(OVERVIEW_CATEGORIES.contains(&name), "{name} missing");
        }
    }
}
