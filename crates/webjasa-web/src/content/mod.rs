//! Hardcoded site copy. Pages render straight from these catalogs; nothing
//! here is ever mutated.

pub mod home;
pub mod services;
pub mod pricing;
pub mod faq;
pub mod about;
pub mod reviews;
pub mod blog;
pub mod contact;

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

/// Main navigation, in menu order.
pub const NAV_LINKS: &[Link] = &[
    Link { label: "Beranda",   href: "/" },
    Link { label: "Layanan",   href: "/layanan" },
    Link { label: "Harga",     href: "/harga" },
    Link { label: "Tentang",   href: "/tentang" },
    Link { label: "Review",    href: "/review" },
    Link { label: "Blog",      href: "/blog" },
    Link { label: "FAQ",       href: "/faq" },
];

/// Title + blurb + emoji icon. Used for reasons, values, tips, and awards.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuestionAnswer {
    pub question: &'static str,
    pub answer: &'static str,
}
