//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuCheck as Check, LuChevronDown as ChevronDown, LuChevronRight as ChevronRight,
        LuCopy as Copy, LuFile as File, LuFileText as FileText, LuFolder as Folder,
        LuGitFork as Fork, LuGlobe as Repo, LuLoader as Spinner, LuStar as Star,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowRepeat as Spinner, BsCheck2 as Check, BsChevronDown as ChevronDown,
        BsChevronRight as ChevronRight, BsClipboard as Copy, BsDiagram2 as Fork,
        BsFileEarmark as File, BsFileEarmarkText as FileText, BsFolderFill as Folder,
        BsGithub as Repo, BsStarFill as Star,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(REPO, Repo);
themed_icon!(STAR, Star);
themed_icon!(FORK, Fork);
themed_icon!(COPY, Copy);
themed_icon!(CHECK, Check);
themed_icon!(SPINNER, Spinner);
