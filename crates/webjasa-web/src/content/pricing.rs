use serde::Serialize;

use super::QuestionAnswer;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub popular: bool,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub highlight: bool,
}

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Starter",
        price: "1,500,000",
        period: "sekali bayar",
        description: "Cocok untuk landing page atau website personal",
        popular: false,
        features: &[
            "1 Halaman Landing Page",
            "Design Modern & Responsive",
            "Contact Form",
            "Google Analytics",
            "SEO Basic",
            "SSL Certificate",
            "Hosting 1 Tahun",
            "Support 1 Bulan",
        ],
        cta: "Mulai Sekarang",
        highlight: false,
    },
    Plan {
        name: "Professional",
        price: "2,500,000",
        period: "sekali bayar",
        description: "Ideal untuk website bisnis dan company profile",
        popular: true,
        features: &[
            "5-7 Halaman Website",
            "Design Custom Premium",
            "Contact Form & WhatsApp Integration",
            "Google Analytics & Search Console",
            "SEO Optimization",
            "SSL Certificate",
            "Hosting 1 Tahun",
            "Support 3 Bulan",
            "Admin Panel",
            "Gallery/Portfolio Section",
        ],
        cta: "Paling Populer",
        highlight: true,
    },
    Plan {
        name: "Enterprise",
        price: "4,500,000",
        period: "sekali bayar",
        description: "Solusi lengkap untuk e-commerce dan sistem kompleks",
        popular: false,
        features: &[
            "Website E-Commerce Lengkap",
            "Unlimited Halaman",
            "Payment Gateway Integration",
            "Product Management System",
            "Order & Inventory Management",
            "Customer Account System",
            "Advanced SEO",
            "Hosting 1 Tahun",
            "Support 6 Bulan",
            "Training & Documentation",
        ],
        cta: "Konsultasi Gratis",
        highlight: false,
    },
];

pub const CUSTOM_CAPABILITIES: &[&str] = &[
    "Website dengan fitur khusus",
    "Integrasi sistem existing",
    "Multi-platform application",
    "Custom admin dashboard",
    "API development",
    "Database design",
];

pub const CUSTOM_PROCESS: &[&str] = &[
    "Analisis kebutuhan detail",
    "Proposal & timeline",
    "Development iteratif",
    "Testing menyeluruh",
    "Training & handover",
    "Long-term support",
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AddOn {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub const ADD_ONS: &[AddOn] = &[
    AddOn {
        name: "SEO Optimization",
        price: "1,000,000",
        period: "/bulan",
        description: "Tingkatkan ranking website di mesin pencari",
        features: &["Keyword research", "On-page SEO", "Content optimization", "Monthly report"],
    },
    AddOn {
        name: "Maintenance",
        price: "500,000",
        period: "/bulan",
        description: "Pemeliharaan berkala untuk performa optimal",
        features: &["Regular updates", "Security monitoring", "Backup management", "Technical support"],
    },
    AddOn {
        name: "Content Writing",
        price: "200,000",
        period: "/artikel",
        description: "Artikel berkualitas untuk website dan blog",
        features: &["SEO optimized content", "Original & engaging", "Research mendalam", "CTA optimization"],
    },
];

pub const PRICING_FAQ: &[QuestionAnswer] = &[
    QuestionAnswer {
        question: "Apakah ada biaya tersembunyi?",
        answer: "Tidak ada biaya tersembunyi. Semua biaya sudah transparan dan tertulis jelas di setiap paket. Hosting untuk tahun pertama sudah termasuk dalam harga.",
    },
    QuestionAnswer {
        question: "Bagaimana sistem pembayaran?",
        answer: "Pembayaran dapat dilakukan dengan DP 50% di awal dan pelunasan saat website siap launch. Kami menerima transfer bank, e-wallet, dan payment gateway.",
    },
    QuestionAnswer {
        question: "Berapa lama proses pengerjaan?",
        answer: "Paket Starter: 7-10 hari, Professional: 14-21 hari, Enterprise: 30-45 hari. Timeline dapat disesuaikan dengan kebutuhan dan tingkat kompleksitas.",
    },
    QuestionAnswer {
        question: "Apakah ada garansi?",
        answer: "Ya, kami memberikan garansi kepuasan dan revisi hingga Anda puas. Juga termasuk garansi bug-fix selama periode support yang tertera di setiap paket.",
    },
];
