use serde::Serialize;

use super::{Highlight, Stat};

pub const STORY: &[&str] = &[
    "WebJasa didirikan pada tahun 2019 dengan misi sederhana namun mulia: membantu bisnis Indonesia berkembang melalui teknologi website yang tepat guna. Bermula dari tim kecil yang terdiri dari 3 developer passionate, kini kami telah berkembang menjadi tim solid dengan lebih dari 15 profesional.",
    "Selama perjalanan ini, kami telah dipercaya oleh lebih dari 500+ klien dari berbagai industri - mulai dari startup rintisan hingga perusahaan besar. Setiap proyek adalah kesempatan bagi kami untuk belajar, berinovasi, dan memberikan solusi terbaik.",
    "Filosofi kami sederhana: \"Your Success is Our Success\". Kami tidak hanya membuat website, tetapi membangun partnership jangka panjang dengan klien untuk mencapai goals bisnis mereka.",
];

pub const STATS: &[Stat] = &[
    Stat { value: "500+", label: "Proyek Selesai",    icon: "" },
    Stat { value: "5+",   label: "Tahun Pengalaman",  icon: "" },
    Stat { value: "15+",  label: "Tim Profesional",   icon: "" },
    Stat { value: "98%",  label: "Kepuasan Klien",    icon: "" },
];

pub const VISION: &str = "Menjadi perusahaan pengembangan website terdepan di Indonesia yang membantu transformasi digital bisnis menuju era modern dan kompetitif.";

pub const MISSION: &str = "Menyediakan solusi website berkualitas tinggi dengan teknologi terkini, service excellent, dan harga yang kompetitif untuk memberdayakan bisnis Indonesia di era digital.";

pub const VALUES: &[Highlight] = &[
    Highlight {
        title: "Kualitas Terbaik",
        description: "Kami berkomitmen memberikan hasil kerja dengan standar kualitas internasional dan detail yang sempurna.",
        icon: "⭐",
    },
    Highlight {
        title: "Integritas",
        description: "Transparansi, kejujuran, dan konsistensi dalam setiap komunikasi dan pekerjaan dengan klien.",
        icon: "🤝",
    },
    Highlight {
        title: "Inovasi",
        description: "Selalu mengikuti perkembangan teknologi terkini dan mengimplementasikan solusi inovatif.",
        icon: "💡",
    },
    Highlight {
        title: "Customer First",
        description: "Kepuasan dan kesuksesan klien adalah prioritas utama dalam setiap keputusan bisnis kami.",
        icon: "❤️",
    },
    Highlight {
        title: "Teamwork",
        description: "Kekuatan tim yang solid dan kolaborasi yang efektif untuk mencapai hasil terbaik.",
        icon: "👥",
    },
    Highlight {
        title: "Continuous Learning",
        description: "Komitmen untuk terus belajar dan mengembangkan skill untuk memberikan service terbaik.",
        icon: "📚",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub position: &'static str,
    pub bio: &'static str,
    pub avatar: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Ahmad Rizki",
        position: "Founder & CEO",
        bio: "10+ tahun pengalaman di industri teknologi. Visioner yang memimpin tim dengan passion untuk inovasi.",
        avatar: "👨‍💼",
    },
    TeamMember {
        name: "Sarah Putri",
        position: "Lead Designer",
        bio: "Expert UI/UX dengan eye for detail. Mengubah ide menjadi design yang beautiful dan user-friendly.",
        avatar: "👩‍🎨",
    },
    TeamMember {
        name: "Budi Santoso",
        position: "Senior Developer",
        bio: "Full-stack developer dengan keahlian multiple framework. Perfectionist dalam coding dan problem solving.",
        avatar: "👨‍💻",
    },
    TeamMember {
        name: "Dewi Lestari",
        position: "Project Manager",
        bio: "Mengkoordinasi proyek dengan timeline yang ketat. Memastikan setiap deliverable sesuai ekspektasi klien.",
        avatar: "👩‍💼",
    },
    TeamMember {
        name: "Randi Permana",
        position: "Digital Marketing",
        bio: "SEO expert yang membantu website klien ranking di Google. Data-driven dan result-oriented.",
        avatar: "👨‍📊",
    },
    TeamMember {
        name: "Indira Sari",
        position: "Customer Success",
        bio: "Always ready to help! Memastikan customer journey yang smooth dari awal hingga after-sales.",
        avatar: "👩‍💬",
    },
];

pub const AWARDS: &[Highlight] = &[
    Highlight { title: "Best Web Agency 2023",  description: "Penghargaan dari Indonesia Web Developer Association", icon: "🏆" },
    Highlight { title: "Top Rated Service",     description: "Rating 4.9/5 di platform freelance marketplace",      icon: "⭐" },
    Highlight { title: "Client Choice Award",   description: "Dipilih sebagai vendor terpercaya oleh 95% klien",    icon: "🎖️" },
    Highlight { title: "Innovation Excellence", description: "Pengakuan atas implementasi teknologi terdepan",      icon: "💎" },
];
