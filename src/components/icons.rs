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
        LuArrowRight as ArrowRight, LuCalendar as Calendar, LuCheck as Check,
        LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight, LuClock as Clock,
        LuFacebook as Facebook, LuInfo as Info, LuInstagram as Instagram, LuMail as Mail,
        LuMapPin as Location, LuMenu as Menu, LuMessageCircle as Chat, LuMoon as Moon,
        LuPhone as Phone, LuScissors as Scissors, LuStar as Star, LuSun as Sun, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowRight as ArrowRight, BsCalendarEvent as Calendar, BsCheckCircleFill as Check,
        BsChevronLeft as ChevronLeft, BsChevronRight as ChevronRight, BsClockFill as Clock,
        BsEnvelopeFill as Mail, BsFacebook as Facebook, BsGeoAltFill as Location,
        BsInfoCircle as Info, BsInstagram as Instagram, BsList as Menu, BsMoonFill as Moon,
        BsScissors as Scissors, BsStarFill as Star, BsSunFill as Sun,
        BsTelephoneFill as Phone, BsWhatsapp as Chat, BsXLg as Close,
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

themed_icon!(ARROW_RIGHT, ArrowRight);
themed_icon!(CALENDAR, Calendar);
themed_icon!(CHAT, Chat);
themed_icon!(CHECK, Check);
themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CLOCK, Clock);
themed_icon!(CLOSE, Close);
themed_icon!(FACEBOOK, Facebook);
themed_icon!(INFO, Info);
themed_icon!(INSTAGRAM, Instagram);
themed_icon!(LOCATION, Location);
themed_icon!(MAIL, Mail);
themed_icon!(MENU, Menu);
themed_icon!(MOON, Moon);
themed_icon!(PHONE, Phone);
themed_icon!(SCISSORS, Scissors);
themed_icon!(STAR, Star);
themed_icon!(SUN, Sun);
