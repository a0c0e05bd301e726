use serde::Serialize;

use super::{Highlight, Stat};

pub const HERO_POINTS: &[&str] = &[
    "Website Responsif",
    "SEO Optimized",
    "Loading Cepat",
    "Maintenance 24/7",
];

pub const STATS: &[Stat] = &[
    Stat { value: "500+", label: "Website Selesai",   icon: "" },
    Stat { value: "98%",  label: "Kepuasan Klien",    icon: "" },
    Stat { value: "5",    label: "Tahun Pengalaman",  icon: "" },
    Stat { value: "24/7", label: "Support",           icon: "" },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ServiceSummary {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub features: &'static [&'static str],
}

pub const SERVICES: &[ServiceSummary] = &[
    ServiceSummary {
        title: "Website Bisnis",
        description: "Website profesional untuk meningkatkan kredibilitas dan jangkauan bisnis Anda",
        icon: "🏢",
        features: &["Design Modern", "Mobile Responsive", "SEO Ready"],
    },
    ServiceSummary {
        title: "E-Commerce",
        description: "Toko online lengkap dengan sistem pembayaran dan manajemen produk",
        icon: "🛒",
        features: &["Payment Gateway", "Inventory Management", "Analytics"],
    },
    ServiceSummary {
        title: "Landing Page",
        description: "Halaman landing yang converting untuk campaign marketing Anda",
        icon: "🎯",
        features: &["High Converting", "A/B Testing", "Analytics"],
    },
    ServiceSummary {
        title: "Website Portal",
        description: "Portal informasi dan layanan untuk organisasi atau komunitas",
        icon: "🌐",
        features: &["User Management", "Content Management", "Multi-language"],
    },
    ServiceSummary {
        title: "Maintenance",
        description: "Pemeliharaan dan update berkala untuk menjaga performa website",
        icon: "🔧",
        features: &["Regular Updates", "Security Monitoring", "Backup"],
    },
    ServiceSummary {
        title: "SEO Optimization",
        description: "Optimasi website untuk meningkatkan ranking di mesin pencari",
        icon: "📈",
        features: &["Keyword Research", "On-page SEO", "Performance Optimization"],
    },
];

pub const REASONS: &[Highlight] = &[
    Highlight { title: "Tim Profesional",      description: "Developer berpengalaman dengan keahlian teknologi terkini",         icon: "👥" },
    Highlight { title: "Harga Kompetitif",     description: "Paket harga yang terjangkau tanpa mengurangi kualitas",             icon: "💰" },
    Highlight { title: "Support 24/7",         description: "Tim support yang siap membantu kapan saja dibutuhkan",              icon: "🚀" },
    Highlight { title: "Garansi Kualitas",     description: "Garansi kepuasan dan revisi hingga Anda puas",                      icon: "✅" },
    Highlight { title: "Delivery Tepat Waktu", description: "Komitmen menyelesaikan proyek sesuai timeline yang disepakati",     icon: "⏰" },
    Highlight { title: "After Sales Service",  description: "Layanan maintenance dan support berkelanjutan",                     icon: "🛠️" },
];

/// Short-form testimonial used on the landing page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Quote {
    pub name: &'static str,
    pub company: &'static str,
    pub rating: u8,
    pub text: &'static str,
}

pub const TESTIMONIALS: &[Quote] = &[
    Quote {
        name: "Budi Santoso",
        company: "PT. Maju Jaya",
        rating: 5,
        text: "Website yang dibuat WebJasa sangat profesional dan sesuai dengan kebutuhan bisnis kami. Tim nya sangat responsif dan hasil akhirnya melampaui ekspektasi.",
    },
    Quote {
        name: "Sari Indah",
        company: "Toko Sari Fashion",
        rating: 5,
        text: "Toko online kami jadi lebih modern dan penjualan meningkat 200% setelah menggunakan jasa WebJasa. Highly recommended!",
    },
    Quote {
        name: "Ahmad Rahman",
        company: "Digital Marketing Agency",
        rating: 5,
        text: "Pelayanan yang sangat baik, komunikasi lancar, dan website selesai tepat waktu. Tim WebJasa memang profesional!",
    },
];
