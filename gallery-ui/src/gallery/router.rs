//! Location-to-view mapping
//!
//! Three top-level views keyed on the path prefix. No client-side history
//! management; navigating between views is a full page load.

/// The view selected by the current location path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    PoemDetail(String),
    Admin,
}

/// Pure mapping from a location pathname to a route. Deep links to
/// `/poem/{id}` resolve the id from the final path segment.
pub fn parse_route(path: &str) -> Route {
    if path.starts_with("/admin") {
        return Route::Admin;
    }

    if let Some(rest) = path.strip_prefix("/poem/") {
        let id = rest
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default();
        return Route::PoemDetail(id.to_string());
    }

    Route::Home
}

/// Route for the browser's current location.
pub fn current_route() -> Route {
    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    parse_route(&path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_and_unknown_paths_go_home() {
        assert_eq!(parse_route("/"), Route::Home);
        assert_eq!(parse_route(""), Route::Home);
        assert_eq!(parse_route("/about"), Route::Home);
        // `/poems` is not a detail prefix
        assert_eq!(parse_route("/poems"), Route::Home);
        assert_eq!(parse_route("/poem"), Route::Home);
    }

    #[test]
    fn detail_takes_the_final_path_segment() {
        assert_eq!(
            parse_route("/poem/42"),
            Route::PoemDetail("42".to_string())
        );
        assert_eq!(
            parse_route("/poem/a/b"),
            Route::PoemDetail("b".to_string())
        );
        assert_eq!(
            parse_route("/poem/42/"),
            Route::PoemDetail("42".to_string())
        );
    }

    #[test]
    fn admin_prefix_wins_for_all_admin_paths() {
        assert_eq!(parse_route("/admin"), Route::Admin);
        assert_eq!(parse_route("/admin/poems"), Route::Admin);
    }
}
