use serde::Serialize;

use super::QuestionAnswer;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const SERVICE_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "",               label: "Pilih layanan" },
    SelectOption { value: "website-bisnis", label: "Website Bisnis" },
    SelectOption { value: "e-commerce",     label: "E-Commerce" },
    SelectOption { value: "landing-page",   label: "Landing Page" },
    SelectOption { value: "website-portal", label: "Website Portal" },
    SelectOption { value: "maintenance",    label: "Maintenance" },
    SelectOption { value: "seo",            label: "SEO Optimization" },
    SelectOption { value: "custom",         label: "Custom Project" },
];

pub const BUDGET_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "",       label: "Pilih range budget" },
    SelectOption { value: "< 2jt",  label: "< Rp 2,000,000" },
    SelectOption { value: "2-5jt",  label: "Rp 2,000,000 - 5,000,000" },
    SelectOption { value: "5-10jt", label: "Rp 5,000,000 - 10,000,000" },
    SelectOption { value: "> 10jt", label: "> Rp 10,000,000" },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct OpeningHours {
    pub days: &'static str,
    pub hours: &'static str,
}

pub const OPENING_HOURS: &[OpeningHours] = &[
    OpeningHours { days: "Senin - Jumat", hours: "09:00 - 18:00 WIB" },
    OpeningHours { days: "Sabtu",         hours: "09:00 - 15:00 WIB" },
    OpeningHours { days: "Minggu",        hours: "Tutup" },
];

pub const CONTACT_FAQ: &[QuestionAnswer] = &[
    QuestionAnswer {
        question: "Berapa lama waktu yang dibutuhkan untuk membuat website?",
        answer: "Waktu pengerjaan bervariasi tergantung kompleksitas. Landing page: 7-10 hari, Website bisnis: 14-21 hari, E-commerce: 30-45 hari.",
    },
    QuestionAnswer {
        question: "Apakah saya mendapat source code website?",
        answer: "Ya, setelah pembayaran lunas, Anda akan mendapat semua source code dan asset website yang kami buat.",
    },
    QuestionAnswer {
        question: "Bagaimana jika saya tidak puas dengan hasil?",
        answer: "Kami memberikan garansi revisi hingga Anda puas. Jika tetap tidak sesuai, kami akan refund sesuai dengan agreement.",
    },
    QuestionAnswer {
        question: "Apakah website yang dibuat SEO-friendly?",
        answer: "Ya, semua website yang kami buat sudah mengikuti best practice SEO untuk membantu ranking di mesin pencari.",
    },
];
