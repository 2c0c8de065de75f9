//! Initial glossary content
//!
//! Seeding runs once from the entry point and only when the store is empty,
//! so calling it repeatedly is harmless.

use tracing::info;

use crate::observability::Event;
use crate::schema::{NewTerm, RenderingType};
use crate::storage::{StoreResult, TermStore};

/// Outcome of a seeding attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store was empty and this many terms were inserted
    Seeded(usize),
    /// The store already held this many terms; nothing was written
    Skipped(u64),
}

/// Inserts the initial terms if, and only if, the store is empty
pub fn seed_if_empty(store: &TermStore) -> StoreResult<SeedOutcome> {
    let existing = store.count()?;
    if existing > 0 {
        info!(
            event = Event::SeedSkipped.as_str(),
            existing, "store already populated, skipping seed"
        );
        return Ok(SeedOutcome::Skipped(existing));
    }

    let terms = initial_terms();
    for term in &terms {
        store.create(term)?;
    }

    info!(
        event = Event::SeedApplied.as_str(),
        inserted = terms.len(),
        "seeded initial glossary"
    );
    Ok(SeedOutcome::Seeded(terms.len()))
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// The fixed initial term set
pub fn initial_terms() -> Vec<NewTerm> {
    vec![
        NewTerm {
            name: "Server-Side Rendering (SSR)".to_string(),
            description: "Technique where the HTML is generated on the server for each request, providing fully rendered HTML to the client".to_string(),
            rendering_type: RenderingType::Ssr,
            frameworks: strings(&["Next.js", "Nuxt.js", "Angular Universal", "Laravel", "Django", "Ruby on Rails"]),
            use_cases: strings(&["Dynamic content", "SEO-critical applications", "Personalized pages", "E-commerce product pages"]),
            advantages: strings(&["Better SEO", "Fast initial load", "Social media sharing", "Consistent performance"]),
            disadvantages: strings(&["Server load", "TTFB can be slower", "More complex caching", "Server costs"]),
        },
        NewTerm {
            name: "Static Site Generation (SSG)".to_string(),
            description: "Pre-renders pages at build time, serving static HTML files that can be cached and delivered via CDN".to_string(),
            rendering_type: RenderingType::Ssg,
            frameworks: strings(&["Next.js", "Gatsby", "VuePress", "Jekyll", "Hugo", "Eleventy"]),
            use_cases: strings(&["Blogs", "Documentation", "Marketing sites", "Portfolios", "News sites"]),
            advantages: strings(&["Excellent performance", "Great SEO", "Easy CDN caching", "High security", "Low server costs"]),
            disadvantages: strings(&["Build time grows with content", "Not suitable for highly dynamic content", "Real-time updates challenging"]),
        },
        NewTerm {
            name: "Client-Side Rendering (CSR)".to_string(),
            description: "Renders content entirely in the browser using JavaScript after downloading the necessary code".to_string(),
            rendering_type: RenderingType::Csr,
            frameworks: strings(&["React", "Vue.js", "Angular", "Svelte", "Ember.js"]),
            use_cases: strings(&["Web applications", "Dashboards", "Admin panels", "Highly interactive apps", "SPAs"]),
            advantages: strings(&["Rich interactivity", "Fast navigation after load", "Better developer experience", "Offline capabilities"]),
            disadvantages: strings(&["Poor SEO", "Slow initial load", "Blank page issue", "JavaScript dependency"]),
        },
        NewTerm {
            name: "Incremental Static Regeneration (ISR)".to_string(),
            description: "Update static content after build-time without rebuilding entire site, combining benefits of SSG and SSR".to_string(),
            rendering_type: RenderingType::Isr,
            frameworks: strings(&["Next.js"]),
            use_cases: strings(&["E-commerce product pages", "News sites", "User-generated content", "Blogs with comments"]),
            advantages: strings(&["Best of SSG and SSR", "Scalable", "Fast with fresh content", "Reduced build times"]),
            disadvantages: strings(&["Next.js specific", "Complex cache invalidation", "Vendor lock-in"]),
        },
        NewTerm {
            name: "Hydration".to_string(),
            description: "Process of making static HTML interactive on the client side by attaching event listeners and state".to_string(),
            rendering_type: RenderingType::Ssr,
            frameworks: strings(&["Next.js", "Nuxt.js", "SvelteKit", "Gatsby"]),
            use_cases: strings(&["SSR applications", "Progressive enhancement", "Interactive static sites"]),
            advantages: strings(&["Fast initial load", "SEO friendly", "Progressive enhancement"]),
            disadvantages: strings(&["Hydration mismatch", "JavaScript bundle required", "Double data fetching"]),
        },
        NewTerm {
            name: "Streaming Server-Side Rendering".to_string(),
            description: "Technique that streams HTML to the client as it's being generated on the server".to_string(),
            rendering_type: RenderingType::Ssr,
            frameworks: strings(&["Next.js", "Qwik", "React 18"]),
            use_cases: strings(&["Large pages", "Slow data dependencies", "Dashboard applications"]),
            advantages: strings(&["Faster Time to First Byte", "Better perceived performance", "Progressive loading"]),
            disadvantages: strings(&["Complex implementation", "Limited framework support", "Browser compatibility"]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Database;

    #[test]
    fn test_initial_names_unique() {
        let terms = initial_terms();
        let mut names: Vec<_> = terms.iter().map(|t| t.name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), terms.len());
    }

    #[test]
    fn test_seed_is_idempotent() {
        let store = TermStore::new(Database::open_in_memory().unwrap());

        assert_eq!(seed_if_empty(&store).unwrap(), SeedOutcome::Seeded(6));
        assert_eq!(seed_if_empty(&store).unwrap(), SeedOutcome::Skipped(6));
        assert_eq!(store.count().unwrap(), 6);
    }

    #[test]
    fn test_seed_skips_non_empty_store() {
        let store = TermStore::new(Database::open_in_memory().unwrap());
        store.create(&initial_terms()[4]).unwrap();

        assert_eq!(seed_if_empty(&store).unwrap(), SeedOutcome::Skipped(1));
        assert_eq!(store.count().unwrap(), 1);
    }
}
