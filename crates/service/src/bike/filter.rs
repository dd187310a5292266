use models::bike;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::Condition;

/// Listing filter for the bike catalog.
///
/// An empty filter matches every bike. A search term matches bikes whose
/// name, brand or category contains it, ignoring case.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BikeFilter {
    needle: Option<String>,
}

impl BikeFilter {
    pub fn all() -> Self { Self::default() }

    /// Blank or missing terms yield the empty filter.
    pub fn from_search_term(term: Option<&str>) -> Self {
        let needle = term
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase);
        Self { needle }
    }

    pub fn search_term(&self) -> Option<&str> { self.needle.as_deref() }

    pub fn is_empty(&self) -> bool { self.needle.is_none() }

    pub fn matches(&self, b: &bike::Model) -> bool {
        match &self.needle {
            Some(n) => b.matches_search(n),
            None => true,
        }
    }

    /// `LOWER(col) LIKE '%term%'` over the searchable columns, OR-ed together.
    pub fn condition(&self) -> Option<Condition> {
        let needle = self.needle.as_deref()?;
        let pattern = format!("%{}%", escape_like(needle));
        let cond = bike::SEARCHABLE.into_iter().fold(Condition::any(), |cond, col| {
            cond.add(
                Expr::expr(Func::lower(Expr::col(col)))
                    .like(LikeExpr::new(pattern.clone()).escape('\\')),
            )
        });
        Some(cond)
    }
}

fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_term_is_empty_filter() {
        assert!(BikeFilter::from_search_term(None).is_empty());
        assert!(BikeFilter::from_search_term(Some("   ")).is_empty());
        assert!(BikeFilter::all().condition().is_none());
    }

    #[test]
    fn term_is_trimmed_and_lowercased() {
        let f = BikeFilter::from_search_term(Some("  MounTain "));
        assert_eq!(f.search_term(), Some("mountain"));
        assert!(f.condition().is_some());
    }

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
    }
}
