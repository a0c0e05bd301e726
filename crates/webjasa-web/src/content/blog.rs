use serde::Serialize;

/// Slug of the pseudo-category that lists every post.
pub const ALL_CATEGORY_SLUG: &str = "semua";

/// Number of posts in the sidebar's popular list.
const POPULAR_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub image: &'static str,
    pub featured: bool,
}

pub const POSTS: &[BlogPost] = &[
    BlogPost {
        id: 1,
        title: "10 Trend Desain Website 2024 yang Wajib Anda Ketahui",
        excerpt: "Pelajari tren desain website terbaru yang akan mendominasi tahun 2024, dari minimalism hingga dark mode dan micro-interactions.",
        category: "Design",
        date: "15 Januari 2024",
        read_time: "5 min read",
        image: "🎨",
        featured: true,
    },
    BlogPost {
        id: 2,
        title: "Panduan Lengkap SEO untuk Website Bisnis Lokal",
        excerpt: "Strategi SEO khusus untuk bisnis lokal agar website Anda mudah ditemukan customer di area sekitar.",
        category: "SEO",
        date: "12 Januari 2024",
        read_time: "8 min read",
        image: "🔍",
        featured: true,
    },
    BlogPost {
        id: 3,
        title: "Mengapa Website Loading Speed Sangat Penting untuk Bisnis",
        excerpt: "Dampak loading speed terhadap user experience, SEO ranking, dan conversion rate. Plus tips optimasi performa website.",
        category: "Performance",
        date: "10 Januari 2024",
        read_time: "6 min read",
        image: "⚡",
        featured: false,
    },
    BlogPost {
        id: 4,
        title: "E-Commerce vs Marketplace: Mana yang Lebih Baik untuk Bisnis Anda?",
        excerpt: "Perbandingan lengkap antara membangun toko online sendiri vs berjualan di marketplace. Analisis keuntungan dan kekurangan.",
        category: "E-Commerce",
        date: "8 Januari 2024",
        read_time: "7 min read",
        image: "🛒",
        featured: false,
    },
    BlogPost {
        id: 5,
        title: "Cara Memilih Domain dan Hosting yang Tepat untuk Website",
        excerpt: "Tips memilih nama domain yang baik untuk SEO dan brand, plus panduan memilih hosting yang reliable dan fast.",
        category: "Technical",
        date: "5 Januari 2024",
        read_time: "4 min read",
        image: "🌐",
        featured: false,
    },
    BlogPost {
        id: 6,
        title: "Social Media Integration: Menghubungkan Website dengan Media Sosial",
        excerpt: "Strategi integrasi media sosial yang efektif untuk meningkatkan engagement dan traffic website bisnis Anda.",
        category: "Marketing",
        date: "3 Januari 2024",
        read_time: "5 min read",
        image: "📱",
        featured: false,
    },
    BlogPost {
        id: 7,
        title: "Website Security: Melindungi Bisnis Online dari Cyber Attack",
        excerpt: "Langkah-langkah penting untuk mengamankan website dari malware, hacking, dan ancaman keamanan cyber lainnya.",
        category: "Security",
        date: "1 Januari 2024",
        read_time: "6 min read",
        image: "🔒",
        featured: false,
    },
    BlogPost {
        id: 8,
        title: "Content Management System (CMS): WordPress vs Custom Development",
        excerpt: "Perbandingan antara menggunakan CMS siap pakai seperti WordPress dengan custom development untuk website bisnis.",
        category: "Development",
        date: "28 Desember 2023",
        read_time: "8 min read",
        image: "⚙️",
        featured: false,
    },
];

pub fn slugify(category: &str) -> String {
    category.to_lowercase()
}

pub fn find(id: u32) -> Option<&'static BlogPost> {
    POSTS.iter().find(|p| p.id == id)
}

pub fn featured() -> impl Iterator<Item = &'static BlogPost> {
    POSTS.iter().filter(|p| p.featured)
}

pub fn regular() -> impl Iterator<Item = &'static BlogPost> {
    POSTS.iter().filter(|p| !p.featured)
}

pub fn popular() -> impl Iterator<Item = &'static BlogPost> {
    regular().take(POPULAR_COUNT)
}

/// Posts whose category slug matches, or every post for `semua`.
/// `None` when the slug names no category at all.
pub fn in_category(slug: &str) -> Option<Vec<&'static BlogPost>> {
    let slug = slug.to_lowercase();
    if slug == ALL_CATEGORY_SLUG {
        return Some(POSTS.iter().collect());
    }
    let posts: Vec<_> = POSTS.iter().filter(|p| slugify(p.category) == slug).collect();
    if posts.is_empty() { None } else { Some(posts) }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: &'static str,
    pub slug: String,
    pub count: usize,
}

/// Sidebar categories, "Semua" first, then in order of first appearance.
pub fn categories() -> Vec<CategoryCount> {
    let mut out = vec![CategoryCount {
        name: "Semua",
        slug: ALL_CATEGORY_SLUG.to_string(),
        count: POSTS.len(),
    }];
    for post in POSTS {
        match out.iter_mut().skip(1).find(|c| c.name == post.category) {
            Some(c) => c.count += 1,
            None => out.push(CategoryCount {
                name: post.category,
                slug: slugify(post.category),
                count: 1,
            }),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_and_regular_partition_posts() {
        assert_eq!(featured().count(), 2);
        assert_eq!(regular().count(), 6);
        assert_eq!(popular().map(|p| p.id).collect::<Vec<_>>(), vec![3, 4, 5]);
    }

    #[test]
    fn test_categories_count_real_posts() {
        let cats = categories();
        assert_eq!(cats[0].name, "Semua");
        assert_eq!(cats[0].count, 8);
        assert_eq!(cats.iter().skip(1).map(|c| c.count).sum::<usize>(), 8);
        let ecommerce = cats.iter().find(|c| c.name == "E-Commerce").unwrap();
        assert_eq!(ecommerce.slug, "e-commerce");
    }

    #[test]
    fn test_in_category() {
        assert_eq!(in_category("semua").unwrap().len(), 8);
        assert_eq!(in_category("SEO").unwrap()[0].id, 2);
        assert!(in_category("gardening").is_none());
    }

    #[test]
    fn test_find() {
        assert_eq!(find(7).unwrap().category, "Security");
        assert!(find(99).is_none());
    }
}
