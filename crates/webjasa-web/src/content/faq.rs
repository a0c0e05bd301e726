use serde::Serialize;
use webjasa_common::faq::item_index;

use super::{Highlight, QuestionAnswer};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FaqCategory {
    pub title: &'static str,
    pub questions: &'static [QuestionAnswer],
}

pub const CATEGORIES: &[FaqCategory] = &[
    FaqCategory {
        title: "Umum",
        questions: &[
            QuestionAnswer {
                question: "Apa itu WebJasa?",
                answer: "WebJasa adalah perusahaan jasa pembuatan website profesional yang membantu bisnis Indonesia memiliki presence digital yang kuat. Kami menyediakan layanan lengkap mulai dari design, development, hingga maintenance website.",
            },
            QuestionAnswer {
                question: "Sudah berapa lama WebJasa beroperasi?",
                answer: "WebJasa telah beroperasi sejak 2019 dan telah menyelesaikan lebih dari 500+ proyek website untuk berbagai jenis bisnis, dari startup hingga enterprise.",
            },
            QuestionAnswer {
                question: "Di mana lokasi kantor WebJasa?",
                answer: "Kantor kami berlokasi di Jakarta Selatan, namun kami melayani klien dari seluruh Indonesia bahkan luar negeri. Sebagian besar komunikasi dan koordinasi dilakukan secara online.",
            },
        ],
    },
    FaqCategory {
        title: "Layanan & Harga",
        questions: &[
            QuestionAnswer {
                question: "Apa saja layanan yang ditawarkan WebJasa?",
                answer: "Kami menyediakan berbagai layanan: Website Bisnis, E-Commerce, Landing Page, Website Portal, Maintenance, SEO Optimization, dan Custom Development sesuai kebutuhan spesifik Anda.",
            },
            QuestionAnswer {
                question: "Berapa kisaran harga untuk membuat website?",
                answer: "Harga bervariasi tergantung kompleksitas. Paket Starter mulai Rp 1.5jt, Professional Rp 2.5jt, dan Enterprise Rp 4.5jt. Kami juga menyediakan paket custom sesuai budget dan requirement.",
            },
            QuestionAnswer {
                question: "Apakah ada biaya tersembunyi?",
                answer: "Tidak ada biaya tersembunyi. Semua biaya dijelaskan secara transparan di awal. Hosting tahun pertama sudah termasuk dalam paket, begitu juga dengan maintenance sesuai periode yang tertera.",
            },
            QuestionAnswer {
                question: "Bagaimana sistem pembayaran?",
                answer: "Pembayaran dapat dilakukan dengan DP 50% di awal proyek dan pelunasan saat website ready to launch. Kami menerima transfer bank, e-wallet, dan payment gateway lainnya.",
            },
        ],
    },
    FaqCategory {
        title: "Proses & Timeline",
        questions: &[
            QuestionAnswer {
                question: "Berapa lama waktu pengerjaan website?",
                answer: "Timeline bervariasi: Landing Page (7-10 hari), Website Bisnis (14-21 hari), E-Commerce (30-45 hari). Timeline dapat disesuaikan dengan kompleksitas dan prioritas klien.",
            },
            QuestionAnswer {
                question: "Bagaimana proses pengerjaan website?",
                answer: "Proses kami meliputi: 1) Konsultasi & analisis kebutuhan, 2) Design mockup & approval, 3) Development & coding, 4) Testing & review, 5) Launch & handover, 6) Training & support.",
            },
            QuestionAnswer {
                question: "Apakah bisa request revisi?",
                answer: "Ya, kami memberikan unlimited revisi hingga Anda puas dengan hasilnya. Revisi major design dilakukan di tahap mockup, sedangkan minor adjustments bisa dilakukan sampai akhir proyek.",
            },
            QuestionAnswer {
                question: "Bagaimana jika proyek terlambat?",
                answer: "Kami berkomitmen pada timeline yang telah disepakati. Jika terjadi keterlambatan karena faktor internal, kami akan memberikan kompensasi berupa extended support atau benefit lainnya.",
            },
        ],
    },
    FaqCategory {
        title: "Teknis",
        questions: &[
            QuestionAnswer {
                question: "Platform apa yang digunakan untuk membuat website?",
                answer: "Kami menggunakan berbagai platform tergantung kebutuhan: React/Next.js untuk performa optimal, WordPress untuk content management, Laravel untuk sistem kompleks, atau custom development sesuai requirement.",
            },
            QuestionAnswer {
                question: "Apakah website responsive di mobile?",
                answer: "Ya, semua website yang kami buat 100% responsive dan mobile-friendly. Kami menggunakan pendekatan mobile-first design untuk memastikan UX yang optimal di semua device.",
            },
            QuestionAnswer {
                question: "Apakah SEO sudah termasuk?",
                answer: "Basic SEO sudah termasuk dalam semua paket, meliputi: meta tags, sitemap, page speed optimization, dan structure markup. Untuk advanced SEO, tersedia sebagai layanan tambahan.",
            },
            QuestionAnswer {
                question: "Bagaimana dengan keamanan website?",
                answer: "Kami implementasikan security best practices: SSL certificate, secure coding, regular updates, firewall protection, dan backup otomatis. Untuk e-commerce, kami juga implement PCI compliance.",
            },
        ],
    },
    FaqCategory {
        title: "After Sales & Support",
        questions: &[
            QuestionAnswer {
                question: "Apakah ada garansi?",
                answer: "Ya, kami memberikan garansi bug-fix dan technical support sesuai periode yang tertera di setiap paket. Juga ada garansi kepuasan - jika tidak sesuai ekspektasi, akan ada refund policy.",
            },
            QuestionAnswer {
                question: "Bagaimana dengan maintenance website?",
                answer: "Basic maintenance sudah termasuk dalam periode support. Untuk long-term maintenance, tersedia paket bulanan mulai Rp 500rb yang meliputi: updates, backup, security monitoring, dan technical support.",
            },
            QuestionAnswer {
                question: "Apakah saya mendapat source code?",
                answer: "Ya, setelah pembayaran lunas, Anda akan mendapat semua source code, database, dan asset website. Kami juga menyediakan dokumentasi untuk memudahkan future development.",
            },
            QuestionAnswer {
                question: "Bagaimana jika website bermasalah?",
                answer: "Tim support kami siap membantu 24/7 untuk klien yang dalam masa maintenance. Untuk emergency issue, kami berkomitmen response time maksimal 2 jam dan resolution dalam 24 jam.",
            },
        ],
    },
];

/// Flat indices of every question on the FAQ page.
pub fn item_indices() -> impl Iterator<Item = usize> {
    CATEGORIES.iter().enumerate().flat_map(|(c, cat)| {
        (0..cat.questions.len()).map(move |q| item_index(c, q))
    })
}

pub const TIPS: &[Highlight] = &[
    Highlight {
        title: "Tentukan Tujuan Website",
        description: "Definisikan dengan jelas tujuan website: branding, lead generation, penjualan online, atau informasi.",
        icon: "🎯",
    },
    Highlight {
        title: "Siapkan Konten",
        description: "Kumpulkan teks, gambar, logo, dan materi lain yang akan ditampilkan di website.",
        icon: "📝",
    },
    Highlight {
        title: "Riset Kompetitor",
        description: "Pelajari website kompetitor untuk inspirasi fitur dan design yang ingin Anda implementasikan.",
        icon: "🔍",
    },
    Highlight {
        title: "Tentukan Budget",
        description: "Sesuaikan pilihan paket dan fitur dengan budget yang tersedia untuk hasil optimal.",
        icon: "💰",
    },
    Highlight {
        title: "Pikirkan Jangka Panjang",
        description: "Pertimbangkan kebutuhan future development, maintenance, dan skalabilitas website.",
        icon: "📈",
    },
    Highlight {
        title: "Komunikasi Aktif",
        description: "Berikan feedback yang clear dan tepat waktu untuk mempercepat proses development.",
        icon: "💬",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_item_indices_are_unique() {
        let all: Vec<usize> = item_indices().collect();
        let unique: HashSet<usize> = all.iter().copied().collect();
        assert_eq!(all.len(), 19);
        assert_eq!(unique.len(), all.len());
        assert!(unique.contains(&403));
    }
}
