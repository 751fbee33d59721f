//! Route table.
//!
//! Pure domain layer: no DOM, no `web_sys`. Each client-side path maps to a
//! route, and each route knows whether it is public. The guard rule lives
//! here too so it can be tested without a browser.

use std::fmt::Display;

/// Client-side routes of the admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// Sign-in page. `/` redirects here.
    #[default]
    Signin,
    /// Sign-up page.
    Signup,
    /// Product listing (protected).
    Products,
    /// Dashboard, mounted under `/calendar` (protected).
    Calendar,
    /// Category listing (protected).
    Categories,
    /// User profile (protected).
    Profile,
    /// Anything else. Unknown paths are treated as protected, so a
    /// logged-out visitor always lands on sign-in.
    NotFound,
}

impl AppRoute {
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "/signin" => Self::Signin,
            "/signup" => Self::Signup,
            "/products" => Self::Products,
            "/calendar" => Self::Calendar,
            "/categories" => Self::Categories,
            "/profile" => Self::Profile,
            _ => Self::NotFound,
        }
    }

    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Signin => "/signin",
            Self::Signup => "/signup",
            Self::Products => "/products",
            Self::Calendar => "/calendar",
            Self::Categories => "/categories",
            Self::Profile => "/profile",
            Self::NotFound => "/404",
        }
    }

    /// Membership in the fixed public-path set {sign-in, sign-up}.
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Signin | Self::Signup)
    }

    pub fn requires_auth(&self) -> bool {
        !self.is_public()
    }

    /// Redirect target when the guard denies a navigation.
    pub fn auth_failure_redirect() -> Self {
        Self::Signin
    }
}

/// Guard rule, evaluated on every navigation attempt: a protected target
/// without a logged-in session resolves to sign-in; everything else passes
/// through. Purely local, no server round-trip.
pub fn resolve_navigation(target: AppRoute, logged_in: bool) -> AppRoute {
    if target.requires_auth() && !logged_in {
        AppRoute::auth_failure_redirect()
    } else {
        target
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_redirects_to_signin() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Signin);
    }

    #[test]
    fn known_paths_round_trip() {
        for path in ["/signin", "/signup", "/products", "/calendar", "/categories", "/profile"] {
            let route = AppRoute::from_path(path);
            assert_eq!(route.to_path(), path);
        }
    }

    #[test]
    fn public_set_is_signin_and_signup() {
        assert!(AppRoute::Signin.is_public());
        assert!(AppRoute::Signup.is_public());
        assert!(AppRoute::Products.requires_auth());
        assert!(AppRoute::Calendar.requires_auth());
        assert!(AppRoute::Categories.requires_auth());
        assert!(AppRoute::Profile.requires_auth());
        assert!(AppRoute::NotFound.requires_auth());
    }

    #[test]
    fn public_routes_pass_regardless_of_session() {
        for route in [AppRoute::Signin, AppRoute::Signup] {
            assert_eq!(resolve_navigation(route, false), route);
            assert_eq!(resolve_navigation(route, true), route);
        }
    }

    #[test]
    fn protected_route_redirects_without_session() {
        assert_eq!(
            resolve_navigation(AppRoute::Categories, false),
            AppRoute::Signin
        );
        assert_eq!(
            resolve_navigation(AppRoute::Categories, true),
            AppRoute::Categories
        );
    }

    #[test]
    fn unknown_path_is_protected() {
        let route = AppRoute::from_path("/does-not-exist");
        assert_eq!(route, AppRoute::NotFound);
        assert_eq!(resolve_navigation(route, false), AppRoute::Signin);
    }
}
