//! App theme: colors and spacing.

/// Warm palette. Light/dark selected at runtime.
#[derive(Clone, Copy)]
pub struct AppColors;

impl AppColors {
    // Light
    pub const LIGHT_PRIMARY: &'static str = "#FF922B";
    pub const LIGHT_SURFACE: &'static str = "#FFF4E6";
    pub const LIGHT_ON_SURFACE: &'static str = "#495057";
    pub const LIGHT_SUCCESS: &'static str = "#66A80F";
    pub const LIGHT_ERROR: &'static str = "#E03131";

    // Dark
    pub const DARK_PRIMARY: &'static str = "#FFA94D";
    pub const DARK_SURFACE: &'static str = "#221A12";
    pub const DARK_ON_SURFACE: &'static str = "#F1E8DD";
    pub const DARK_SUCCESS: &'static str = "#94D82D";
    pub const DARK_ERROR: &'static str = "#FFA8A8";

    pub fn primary(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_PRIMARY
        } else {
            Self::LIGHT_PRIMARY
        }
    }
    pub fn surface(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_SURFACE
        } else {
            Self::LIGHT_SURFACE
        }
    }
    pub fn on_surface(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_ON_SURFACE
        } else {
            Self::LIGHT_ON_SURFACE
        }
    }
    pub fn success(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_SUCCESS
        } else {
            Self::LIGHT_SUCCESS
        }
    }
    pub fn error(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_ERROR
        } else {
            Self::LIGHT_ERROR
        }
    }
}

/// 8px grid spacing.
pub mod spacing {
    pub const XS: &'static str = "4px";
    pub const SM: &'static str = "8px";
    pub const MD: &'static str = "16px";
    pub const LG: &'static str = "24px";
    pub const CARD_PADDING: &'static str = "16px";
}
