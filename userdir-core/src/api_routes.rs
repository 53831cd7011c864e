/// Placeholder answered at the server root.
pub const ROOT: &str = "/";

pub mod users {
    pub const COLLECTION: &str = "/user";
    pub const ITEM: &str = "/user/{id}";
}

pub mod docs {
    /// Interactive Swagger UI; the bare path redirects to `/v1/`.
    pub const SWAGGER_UI: &str = "/v1";
    pub const OPENAPI: &str = "/v1/openapi.json";
}

/// Helper utilities for working with route templates
pub mod utils {
    /// Replace a single path parameter (e.g. `"{id}"`) with the provided value.
    pub fn replace_param(
        route: &str,
        param: &str,
        value: impl AsRef<str>,
    ) -> String {
        route.replace(param, value.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_route_substitutes_id() {
        let path = utils::replace_param(users::ITEM, "{id}", "abc-123");
        assert_eq!(path, "/user/abc-123");
    }
}
