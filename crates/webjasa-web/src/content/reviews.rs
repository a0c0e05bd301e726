use serde::Serialize;

use super::Stat;

pub const STATS: &[Stat] = &[
    Stat { value: "500+",  label: "Total Klien",        icon: "👥" },
    Stat { value: "4.9/5", label: "Rating Rata-rata",   icon: "⭐" },
    Stat { value: "98%",   label: "Proyek Selesai",     icon: "✅" },
    Stat { value: "85%",   label: "Klien Repeat Order", icon: "🔄" },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub company: &'static str,
    pub position: &'static str,
    pub rating: u8,
    pub avatar: &'static str,
    pub text: &'static str,
    pub project: &'static str,
    pub industry: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Budi Santoso",
        company: "PT. Maju Jaya Abadi",
        position: "CEO",
        rating: 5,
        avatar: "👨‍💼",
        text: "WebJasa benar-benar mengubah bisnis kami! Website yang mereka buat tidak hanya cantik, tapi juga functional dan SEO-friendly. Traffic website naik 300% dalam 3 bulan pertama. Tim nya sangat profesional dan responsif. Highly recommended!",
        project: "Website Company Profile",
        industry: "Manufacturing",
    },
    Testimonial {
        id: 2,
        name: "Sari Indah Permata",
        company: "Toko Sari Fashion",
        position: "Owner",
        rating: 5,
        avatar: "👩‍💼",
        text: "Toko online yang dibuat WebJasa sangat user-friendly dan modern. Penjualan online kami meningkat drastis 200% setelah website launching. Fitur inventory management sangat membantu operasional harian. Great job!",
        project: "E-Commerce Website",
        industry: "Fashion Retail",
    },
    Testimonial {
        id: 3,
        name: "Ahmad Rahman",
        company: "Digital Marketing Agency",
        position: "Founder",
        rating: 5,
        avatar: "👨‍💻",
        text: "Sebagai agency, kami sangat picky soal kualitas website. WebJasa berhasil exceed expectations kami. Loading speed super fast, design modern, dan technically sound. Klien kami juga sangat puas dengan hasilnya.",
        project: "Agency Portfolio Website",
        industry: "Digital Marketing",
    },
    Testimonial {
        id: 4,
        name: "Dr. Fitri Amelia",
        company: "Klinik Sehat Bersama",
        position: "Direktur",
        rating: 5,
        avatar: "👩‍⚕️",
        text: "Website klinik kami sekarang terlihat sangat profesional dan trustworthy. Fitur booking appointment online sangat membantu pasien dan staff. WebJasa juga memberikan training yang comprehensive untuk tim kami.",
        project: "Medical Website with Booking System",
        industry: "Healthcare",
    },
    Testimonial {
        id: 5,
        name: "Rendra Wijaya",
        company: "PT. Solusi Teknologi",
        position: "CTO",
        rating: 5,
        avatar: "👨‍🔬",
        text: "Kami membutuhkan website dengan integrasi API yang kompleks. WebJasa berhasil deliver dengan sempurna. Technical expertise mereka sangat impressive, dan project management nya juga top notch. Pasti akan collaboration lagi.",
        project: "Enterprise Web Application",
        industry: "Technology",
    },
    Testimonial {
        id: 6,
        name: "Lina Kusuma",
        company: "Bimbel Cerdas",
        position: "Principal",
        rating: 5,
        avatar: "👩‍🏫",
        text: "Website pembelajaran online yang dibuat WebJasa sangat memudahkan siswa dan guru. Fitur video streaming, quiz online, dan progress tracking bekerja dengan sempurna. Student engagement meningkat significantly!",
        project: "Educational Platform",
        industry: "Education",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CaseStudy {
    pub title: &'static str,
    pub client: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub results: &'static [&'static str],
    pub duration: &'static str,
    pub technology: &'static str,
}

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        title: "E-Commerce Fashion: Peningkatan Conversion Rate 300%",
        client: "Toko Sari Fashion",
        challenge: "Website lama sulit digunakan dan conversion rate rendah",
        solution: "Redesign UX/UI, optimasi checkout process, implementasi recommendation engine",
        results: &[
            "Conversion rate naik 300%",
            "Average order value naik 150%",
            "Loading time turun 60%",
            "Mobile traffic naik 250%",
        ],
        duration: "6 minggu",
        technology: "Next.js, Stripe, MongoDB",
    },
    CaseStudy {
        title: "Corporate Website: Lead Generation Meningkat 400%",
        client: "PT. Maju Jaya Abadi",
        challenge: "Website tidak generate leads dan ranking SEO rendah",
        solution: "SEO optimization, landing page optimization, lead magnet implementation",
        results: &[
            "Lead generation naik 400%",
            "Organic traffic naik 500%",
            "Ranking Google page 1 untuk 15 keywords",
            "Bounce rate turun 45%",
        ],
        duration: "4 minggu",
        technology: "WordPress, Yoast SEO, Google Analytics",
    },
    CaseStudy {
        title: "Healthcare Platform: Efisiensi Operasional 250%",
        client: "Klinik Sehat Bersama",
        challenge: "Sistem booking manual dan administrasi tidak efisien",
        solution: "Online booking system, patient management system, telemedicine integration",
        results: &[
            "Efisiensi operasional naik 250%",
            "Patient satisfaction score 95%",
            "Administrative cost turun 40%",
            "Online bookings 80% dari total",
        ],
        duration: "8 minggu",
        technology: "Laravel, MySQL, Payment Gateway",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct VideoTestimonial {
    pub name: &'static str,
    pub thumbnail: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
}

pub const VIDEOS: &[VideoTestimonial] = &[
    VideoTestimonial {
        name: "Budi Santoso - PT. Maju Jaya",
        thumbnail: "🎥",
        duration: "2:30",
        description: "Cerita bagaimana website baru meningkatkan brand awareness",
    },
    VideoTestimonial {
        name: "Sari Indah - Toko Fashion",
        thumbnail: "🎬",
        duration: "1:45",
        description: "Dampak e-commerce terhadap penjualan offline dan online",
    },
    VideoTestimonial {
        name: "Dr. Fitri - Klinik Sehat",
        thumbnail: "📹",
        duration: "3:15",
        description: "Transformasi digital di industri healthcare",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct IndustryCount {
    pub industry: &'static str,
    pub icon: &'static str,
    pub count: &'static str,
}

pub const INDUSTRIES: &[IndustryCount] = &[
    IndustryCount { industry: "E-Commerce",    icon: "🛒", count: "150+" },
    IndustryCount { industry: "Healthcare",    icon: "🏥", count: "75+" },
    IndustryCount { industry: "Education",     icon: "🎓", count: "100+" },
    IndustryCount { industry: "Manufacturing", icon: "🏭", count: "80+" },
    IndustryCount { industry: "Restaurant",    icon: "🍽️", count: "60+" },
    IndustryCount { industry: "Technology",    icon: "💻", count: "90+" },
];
