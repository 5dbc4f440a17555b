//! The storefront route table.

/// A navigable location in the storefront.
///
/// The purchase route carries its product id as a query parameter; a
/// missing or malformed id still resolves to the purchase page, which
/// then fails its load with a fixed message rather than falling back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The paged product list with the create form.
    Products,
    /// The purchase page for one product.
    Purchase { product_id: Option<i64> },
}

impl Route {
    /// Resolves a path (with optional query string) to a route.
    /// The empty path is the products list; unknown paths resolve to
    /// nothing and the caller decides where to land.
    pub fn parse(location: &str) -> Option<Route> {
        let (path, query) = match location.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (location, None),
        };

        match path.trim_end_matches('/') {
            "" | "/products" => Some(Route::Products),
            "/purchase" => Some(Route::Purchase {
                product_id: query.and_then(query_id),
            }),
            _ => None,
        }
    }

    /// The canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Products => "/products".to_string(),
            Route::Purchase {
                product_id: Some(id),
            } => format!("/purchase?id={id}"),
            Route::Purchase { product_id: None } => "/purchase".to_string(),
        }
    }
}

fn query_id(query: &str) -> Option<i64> {
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("id="))
        .and_then(|value| value.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_resolve() {
        assert_eq!(Route::parse(""), Some(Route::Products));
        assert_eq!(Route::parse("/"), Some(Route::Products));
        assert_eq!(Route::parse("/products"), Some(Route::Products));
        assert_eq!(
            Route::parse("/purchase?id=42"),
            Some(Route::Purchase {
                product_id: Some(42)
            })
        );
    }

    #[test]
    fn purchase_without_a_usable_id_still_routes() {
        assert_eq!(
            Route::parse("/purchase"),
            Some(Route::Purchase { product_id: None })
        );
        assert_eq!(
            Route::parse("/purchase?id=abc"),
            Some(Route::Purchase { product_id: None })
        );
        assert_eq!(
            Route::parse("/purchase?sort=asc"),
            Some(Route::Purchase { product_id: None })
        );
    }

    #[test]
    fn unknown_paths_resolve_to_nothing() {
        assert_eq!(Route::parse("/checkout"), None);
        assert_eq!(Route::parse("/products/7/reviews"), None);
    }

    #[test]
    fn paths_round_trip() {
        for route in [
            Route::Products,
            Route::Purchase { product_id: Some(7) },
            Route::Purchase { product_id: None },
        ] {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }
}
