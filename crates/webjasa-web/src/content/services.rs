use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ServiceDetail {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub includes: &'static [&'static str],
}

/// Number of features listed per service card.
pub const KEY_FEATURE_COUNT: usize = 4;

impl ServiceDetail {
    pub fn key_features(&self) -> &'static [&'static str] {
        &self.features[..KEY_FEATURE_COUNT.min(self.features.len())]
    }
}

pub const SERVICES: &[ServiceDetail] = &[
    ServiceDetail {
        title: "Website Bisnis",
        description: "Website profesional yang meningkatkan kredibilitas dan memperluas jangkauan bisnis Anda",
        icon: "🏢",
        price: "Mulai dari Rp 2,500,000",
        features: &[
            "Design modern dan professional",
            "Responsive di semua device",
            "SEO optimization",
            "Contact form integration",
            "Google Analytics setup",
            "SSL Certificate",
            "Basic hosting 1 tahun",
            "Free maintenance 3 bulan",
        ],
        includes: &[
            "Homepage + 4-6 halaman",
            "Company profile section",
            "Product/service showcase",
            "Contact information",
            "About us page",
        ],
    },
    ServiceDetail {
        title: "E-Commerce",
        description: "Toko online lengkap dengan sistem pembayaran dan manajemen produk yang mudah digunakan",
        icon: "🛒",
        price: "Mulai dari Rp 4,500,000",
        features: &[
            "Shopping cart functionality",
            "Payment gateway integration",
            "Product management system",
            "Order tracking",
            "Inventory management",
            "Customer account system",
            "Mobile responsive design",
            "Admin dashboard",
        ],
        includes: &[
            "Product catalog",
            "Shopping cart",
            "Payment processing",
            "Order management",
            "Customer reviews",
        ],
    },
    ServiceDetail {
        title: "Landing Page",
        description: "Halaman landing yang converting tinggi untuk campaign marketing dan lead generation",
        icon: "🎯",
        price: "Mulai dari Rp 1,500,000",
        features: &[
            "High converting design",
            "A/B testing ready",
            "Lead capture forms",
            "Analytics integration",
            "Fast loading speed",
            "Mobile optimized",
            "Call-to-action optimization",
            "Social media integration",
        ],
        includes: &[
            "Single page design",
            "Lead generation forms",
            "Analytics setup",
            "Performance optimization",
            "Conversion tracking",
        ],
    },
    ServiceDetail {
        title: "Website Portal",
        description: "Portal informasi dan layanan untuk organisasi, komunitas, atau instansi",
        icon: "🌐",
        price: "Mulai dari Rp 3,500,000",
        features: &[
            "User management system",
            "Content management",
            "Multi-language support",
            "User registration/login",
            "Document management",
            "Search functionality",
            "News/article system",
            "User roles & permissions",
        ],
        includes: &[
            "User authentication",
            "Content management",
            "Document library",
            "News system",
            "Search function",
        ],
    },
    ServiceDetail {
        title: "Website Maintenance",
        description: "Pemeliharaan berkala untuk menjaga performa, keamanan, dan update website Anda",
        icon: "🔧",
        price: "Mulai dari Rp 500,000/bulan",
        features: &[
            "Regular updates",
            "Security monitoring",
            "Performance optimization",
            "Backup management",
            "Content updates",
            "Bug fixes",
            "Technical support",
            "Monthly reports",
        ],
        includes: &[
            "Weekly backups",
            "Security scans",
            "Performance monitoring",
            "Content updates",
            "Technical support",
        ],
    },
    ServiceDetail {
        title: "SEO Optimization",
        description: "Optimasi website untuk meningkatkan ranking di mesin pencari dan traffic organik",
        icon: "📈",
        price: "Mulai dari Rp 1,000,000/bulan",
        features: &[
            "Keyword research",
            "On-page SEO",
            "Technical SEO",
            "Content optimization",
            "Link building",
            "Performance tracking",
            "Competitor analysis",
            "Monthly SEO reports",
        ],
        includes: &[
            "SEO audit",
            "Keyword strategy",
            "Content optimization",
            "Performance tracking",
            "Monthly reports",
        ],
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProcessStep {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS: &[ProcessStep] = &[
    ProcessStep { step: "01", title: "Konsultasi",       description: "Diskusi kebutuhan dan goals website Anda" },
    ProcessStep { step: "02", title: "Perencanaan",      description: "Pembuatan wireframe dan sitemap" },
    ProcessStep { step: "03", title: "Development",      description: "Coding dan implementasi fitur" },
    ProcessStep { step: "04", title: "Testing & Launch", description: "Quality assurance dan go-live" },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Technology {
    pub name: &'static str,
    pub icon: &'static str,
}

pub const TECHNOLOGIES: &[Technology] = &[
    Technology { name: "React",     icon: "⚛️" },
    Technology { name: "Next.js",   icon: "🚀" },
    Technology { name: "WordPress", icon: "📝" },
    Technology { name: "Laravel",   icon: "🔧" },
    Technology { name: "Node.js",   icon: "💚" },
    Technology { name: "Python",    icon: "🐍" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_features_are_the_first_four() {
        let s = &SERVICES[0];
        assert_eq!(s.key_features().len(), 4);
        assert_eq!(s.key_features()[0], "Design modern dan professional");
    }
}
