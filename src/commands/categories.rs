use anyhow::Result;
use colored::*;

use crate::config::{KeywordConfig, ScamscanConfig};

pub fn list_categories(config: &ScamscanConfig) -> Result<()> {
    print!("{}", render_categories(&config.keywords));
    Ok(())
}

pub fn render_categories(keywords: &KeywordConfig) -> String {
    let mut out = String::new();
    for category in &keywords.categories {
        let terms = category.normalized_keywords();
        out.push_str(&format!(
            "{} (weight {}, {} keywords)\n",
            category.name.bold(),
            category.weight,
            terms.len()
        ));
        out.push_str(&format!("  {}\n", terms.join(", ")));
    }
    if let Some(cap) = keywords.max_category_score {
        out.push_str(&format!("Per-category cap: {cap}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KeywordCategory;

    #[test]
    fn test_render_lists_every_category_in_order() {
        colored::control::set_override(false);
        let keywords = KeywordConfig {
            max_category_score: Some(6),
            categories: vec![
                KeywordCategory::new("urgency", 2, &["urgent", "asap"]),
                KeywordCategory::new("rewards", 2, &["prize"]),
            ],
        };
        let rendered = render_categories(&keywords);

        assert_eq!(
            rendered,
            "urgency (weight 2, 2 keywords)\n  urgent, asap\n\
             rewards (weight 2, 1 keywords)\n  prize\n\
             Per-category cap: 6\n"
        );
    }
}
