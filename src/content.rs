//! Static page content and the small pure helpers derived from it.

use chrono::NaiveDate;

/// In-page anchor targets. These strings are linked from the header, footer
/// and CTAs, so they must not change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Services,
    Products,
    Courses,
    Pricing,
    Testimonials,
    Blog,
    Faq,
    Contact,
}

impl SectionId {
    #[cfg(test)]
    pub const ALL: [SectionId; 10] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Services,
        SectionId::Products,
        SectionId::Courses,
        SectionId::Pricing,
        SectionId::Testimonials,
        SectionId::Blog,
        SectionId::Faq,
        SectionId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Services => "services",
            SectionId::Products => "products",
            SectionId::Courses => "courses",
            SectionId::Pricing => "pricing",
            SectionId::Testimonials => "testimonials",
            SectionId::Blog => "blog",
            SectionId::Faq => "faq",
            SectionId::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.as_str())
    }
}

pub struct NavLink {
    pub label: &'static str,
    pub target: SectionId,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", target: SectionId::Home },
    NavLink { label: "About", target: SectionId::About },
    NavLink { label: "Products", target: SectionId::Products },
    NavLink { label: "Services", target: SectionId::Services },
    NavLink { label: "Courses", target: SectionId::Courses },
    NavLink { label: "Contact", target: SectionId::Contact },
];

pub struct FooterGroup {
    pub title: &'static str,
    pub links: &'static [(&'static str, &'static str)],
}

pub const FOOTER_GROUPS: &[FooterGroup] = &[
    FooterGroup {
        title: "Company",
        links: &[
            ("About Us", "#about"),
            ("Services", "#services"),
            ("Courses", "#courses"),
            ("Blog", "#blog"),
            ("Careers", "#careers"),
            ("Contact", "#contact"),
        ],
    },
    FooterGroup {
        title: "Resources",
        links: &[
            ("Documentation", "#documentation"),
            ("Case Studies", "#case-studies"),
            ("Webinars", "#webinars"),
            ("White Papers", "#white-papers"),
            ("FAQ", "#faq"),
        ],
    },
    FooterGroup {
        title: "Legal",
        links: &[
            ("Privacy Policy", "#privacy"),
            ("Terms of Service", "#terms"),
            ("Cookie Policy", "#cookies"),
            ("GDPR Compliance", "#gdpr"),
        ],
    },
];

/// Cuts `text` to at most `max_chars` characters, adding an ellipsis if anything was dropped.
pub fn teaser(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

// -- Benefits / about -------------------------------------------------------

pub struct Benefit {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const BENEFITS: &[Benefit] = &[
    Benefit { icon: "🧠", title: "AI-Powered", description: "Cutting-edge artificial intelligence algorithms" },
    Benefit { icon: "📈", title: "Scalable", description: "Grows seamlessly with your business needs" },
    Benefit { icon: "🛡️", title: "Secure", description: "Enterprise-grade security protocols" },
    Benefit { icon: "⚡", title: "Efficient", description: "Reduce operational costs by up to 35%" },
];

pub const STATS: &[(&str, &str)] = &[
    ("1+", "Years of Innovation"),
    ("30+", "Satisfied Clients"),
    ("3+", "Experts"),
    ("99.9%", "Uptime Guaranteed"),
];

// -- Services ----------------------------------------------------------------

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "🖥️",
        title: "AI-Powered SaaS Application Development",
        description: "We design and build custom SaaS platforms that leverage AI to automate workflows, optimize resource allocation, and drive operational efficiency. Our cloud-based applications scale with your business while ensuring data security and system reliability.",
        features: &[
            "Custom Solutions tailored to your unique needs",
            "Smart Automation using cutting-edge AI",
            "Scalable & Secure cloud infrastructure",
            "Continuous updates and improvements",
        ],
    },
    Service {
        icon: "📊",
        title: "Digital Transformation Consulting",
        description: "Our experts work with you to craft comprehensive digital strategies aligned with your business goals. We identify processes that can be automated using AI insights, reducing manual tasks and improving overall efficiency.",
        features: &[
            "Strategic Roadmaps for digital success",
            "Process Optimization with AI insights",
            "Change Management support",
            "Continuous Innovation frameworks",
        ],
    },
    Service {
        icon: "📚",
        title: "AI Education & Training Programs",
        description: "Empower your team with our comprehensive AI education programs. We offer courses that demystify Artificial Intelligence, hands-on labs for practical implementation, and thought leadership seminars featuring industry experts.",
        features: &[
            "Foundations of AI for beginners",
            "Hands-On Labs with real-world projects",
            "Industry Expert webinars and seminars",
            "Custom training for your team's needs",
        ],
    },
];

// -- Products ----------------------------------------------------------------

pub struct ProductBenefit {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub core_features: &'static [&'static str],
    pub benefits: &'static [ProductBenefit],
    pub demo_url: &'static str,
    pub docs_url: &'static str,
    pub cta: &'static str,
    pub tech_stack: &'static [&'static str],
    pub user_types: &'static [&'static str],
}

pub const PRODUCTS: &[Product] = &[
    Product {
        id: "autogradepro",
        name: "AutoGradePro",
        tagline: "AI-Powered Grading Made Simple",
        description: "The intelligent grading platform that helps educators automate assessment, provide detailed feedback, and save hours of grading time.",
        icon: "/assets/autogradepro.png",
        core_features: &[
            "Automated grading for essays, code, and quizzes",
            "Intelligent plagiarism detection",
            "Real-time analytics and progress tracking",
            "Custom rubric creation and management",
        ],
        benefits: &[
            ProductBenefit { title: "Save Valuable Time", description: "Reduce grading time by up to 70% with intelligent automation." },
            ProductBenefit { title: "Improve Feedback Quality", description: "Provide consistent, detailed feedback to every student." },
            ProductBenefit { title: "Enhanced Analytics", description: "Gain insights into student performance with comprehensive reports." },
        ],
        demo_url: "https://autogradepro.vercel.app/",
        docs_url: "https://autogradepro.vercel.app/",
        cta: "Try Free Demo",
        tech_stack: &["AI/ML", "NLP", "Cloud", "React", "Python"],
        user_types: &["Educators", "Schools", "EdTech Companies"],
    },
    Product {
        id: "devcv",
        name: "DevCV",
        tagline: "ATS-Optimized Resumes for Developers",
        description: "The intelligent resume builder that helps developers create tailored, ATS-friendly resumes that match job requirements and highlight relevant skills.",
        icon: "/assets/devcv.png",
        core_features: &[
            "Job description analyzer for keyword matching",
            "Developer-specific resume templates",
            "GitHub project integration and showcase",
            "ATS optimization and score analysis",
        ],
        benefits: &[
            ProductBenefit { title: "Stand Out to Recruiters", description: "Ensure your resume passes ATS filters and matches job requirements." },
            ProductBenefit { title: "Showcase Your Work", description: "Automatically import and feature your best GitHub projects." },
            ProductBenefit { title: "Tailored Applications", description: "Customize your resume for each job with one-click optimization." },
        ],
        demo_url: "#products",
        docs_url: "#products",
        cta: "Build Your Resume",
        tech_stack: &["AI/ML", "NLP", "React", "Node.js", "GitHub API"],
        user_types: &["Developers", "Tech Job Seekers", "Bootcamp Graduates"],
    },
];

// -- Courses -----------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CourseCategory {
    Foundations,
    Practical,
    Leadership,
}

impl CourseCategory {
    pub fn icon(self) -> &'static str {
        match self {
            CourseCategory::Foundations => "📖",
            CourseCategory::Practical => "🖥️",
            CourseCategory::Leadership => "👥",
        }
    }
}

/// Course filter buttons; `None` shows everything.
pub const COURSE_FILTERS: &[(Option<CourseCategory>, &str)] = &[
    (None, "All Courses"),
    (Some(CourseCategory::Foundations), "Foundations"),
    (Some(CourseCategory::Practical), "Practical Implementation"),
    (Some(CourseCategory::Leadership), "Leadership & Strategy"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    pub fn label(self) -> &'static str {
        match self {
            CourseLevel::Beginner => "Beginner",
            CourseLevel::Intermediate => "Intermediate",
            CourseLevel::Advanced => "Advanced",
        }
    }

    /// Badge background colour.
    pub fn color(self) -> &'static str {
        match self {
            CourseLevel::Beginner => "#22c55e",
            CourseLevel::Intermediate => "#3b82f6",
            CourseLevel::Advanced => "#a855f7",
        }
    }
}

pub struct Course {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: CourseCategory,
    pub level: CourseLevel,
    pub duration: &'static str,
    pub enrolled: u32,
    pub rating: f32,
}

pub const COURSES: &[Course] = &[
    Course {
        id: 1,
        title: "Introduction to AI for Business",
        description: "Learn the fundamentals of artificial intelligence and how it can transform your business operations.",
        category: CourseCategory::Foundations,
        level: CourseLevel::Beginner,
        duration: "4 weeks",
        enrolled: 1245,
        rating: 4.8,
    },
    Course {
        id: 2,
        title: "Machine Learning Implementation",
        description: "Hands-on course for implementing machine learning models for business problems.",
        category: CourseCategory::Practical,
        level: CourseLevel::Intermediate,
        duration: "6 weeks",
        enrolled: 892,
        rating: 4.7,
    },
    Course {
        id: 3,
        title: "AI Strategy for Executives",
        description: "Strategic framework for executives to lead AI initiatives in their organizations.",
        category: CourseCategory::Leadership,
        level: CourseLevel::Advanced,
        duration: "3 weeks",
        enrolled: 678,
        rating: 4.9,
    },
    Course {
        id: 4,
        title: "Natural Language Processing Fundamentals",
        description: "Master the basics of NLP and learn how to implement text analysis in your applications.",
        category: CourseCategory::Practical,
        level: CourseLevel::Intermediate,
        duration: "5 weeks",
        enrolled: 1032,
        rating: 4.6,
    },
    Course {
        id: 5,
        title: "AI Ethics and Governance",
        description: "Understanding ethical considerations and governance frameworks for AI implementation.",
        category: CourseCategory::Leadership,
        level: CourseLevel::Intermediate,
        duration: "4 weeks",
        enrolled: 542,
        rating: 4.7,
    },
    Course {
        id: 6,
        title: "Building Your First AI Model",
        description: "Step-by-step guide to building and deploying your first AI model with no coding experience required.",
        category: CourseCategory::Foundations,
        level: CourseLevel::Beginner,
        duration: "3 weeks",
        enrolled: 1567,
        rating: 4.8,
    },
];

pub fn courses_in(category: Option<CourseCategory>) -> Vec<&'static Course> {
    COURSES
        .iter()
        .filter(|course| category.map_or(true, |c| course.category == c))
        .collect()
}

// -- Pricing -----------------------------------------------------------------

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BillingCycle {
    #[default]
    Monthly,
    Annually,
}

pub struct PricingPlan {
    pub name: &'static str,
    pub description: &'static str,
    pub monthly: u32,
    /// Per-month price when billed yearly.
    pub annually: u32,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub popular: bool,
}

impl PricingPlan {
    pub fn price(&self, cycle: BillingCycle) -> u32 {
        match cycle {
            BillingCycle::Monthly => self.monthly,
            BillingCycle::Annually => self.annually,
        }
    }

    pub fn yearly_total(&self) -> u32 {
        self.annually * 12
    }
}

pub const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Starter",
        description: "Perfect for small businesses getting started with AI",
        monthly: 499,
        annually: 479,
        features: &[
            "Basic AI-powered analytics",
            "1 custom SaaS application",
            "5 user accounts",
            "Email support",
            "Weekly data processing",
            "Basic API access",
        ],
        cta: "Get Started",
        popular: false,
    },
    PricingPlan {
        name: "Professional",
        description: "Ideal for growing companies expanding their AI capabilities",
        monthly: 999,
        annually: 899,
        features: &[
            "Advanced AI analytics & predictions",
            "3 custom SaaS applications",
            "25 user accounts",
            "Priority support",
            "Daily data processing",
            "Full API access",
            "AI strategy consultation",
            "Quarterly performance review",
        ],
        cta: "Start Free Trial",
        popular: true,
    },
    PricingPlan {
        name: "Enterprise",
        description: "Comprehensive solution for large organizations",
        monthly: 2499,
        annually: 2199,
        features: &[
            "Enterprise-level AI capabilities",
            "Unlimited custom applications",
            "Unlimited users",
            "24/7 dedicated support",
            "Real-time data processing",
            "Full API access with premium rate limits",
            "Ongoing strategy consultations",
            "Monthly performance reviews",
            "Custom AI model development",
            "White-labeling options",
        ],
        cta: "Contact Sales",
        popular: false,
    },
];

/// Whole-percent saving of yearly billing over paying monthly for a year.
pub fn discount_percentage(monthly: u32, annually: u32) -> u32 {
    if monthly == 0 || annually >= monthly {
        return 0;
    }
    let full_year = f64::from(monthly) * 12.0;
    let savings = full_year - f64::from(annually) * 12.0;
    (savings / full_year * 100.0).round() as u32
}

// -- Testimonials ------------------------------------------------------------

pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub position: &'static str,
    pub content: &'static str,
    /// Out of five.
    pub rating: u8,
    pub avatar: &'static str,
    pub avatar_gradient: &'static str,
    pub industry: &'static str,
    pub highlight: &'static str,
}

pub const MAX_RATING: u8 = 5;

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Sarah Johnson",
        position: "CTO, TechInnovate",
        content: "Xenetron's AI-powered SaaS solution revolutionized our data processing workflow. We've seen a 40% increase in efficiency and significant cost savings. Their team's expertise and support throughout the implementation process was exceptional.",
        rating: 5,
        avatar: "SJ",
        avatar_gradient: "linear-gradient(135deg, #a855f7, #ff3366)",
        industry: "Technology",
        highlight: "40% increase in efficiency",
    },
    Testimonial {
        id: 2,
        name: "Michael Rodriguez",
        position: "Operations Director, HealthPlus",
        content: "The digital transformation consulting provided by Xenetron helped us identify key areas for improvement in our patient management system. Their AI education program also empowered our team to maintain and enhance the solutions independently.",
        rating: 5,
        avatar: "MR",
        avatar_gradient: "linear-gradient(135deg, #3b82f6, #22d3ee)",
        industry: "Healthcare",
        highlight: "Empowered our team",
    },
    Testimonial {
        id: 3,
        name: "Emily Chen",
        position: "VP of Innovation, FinanceGrowth",
        content: "Working with Xenetron was a game-changer for our financial analysis capabilities. The custom AI solution they developed allows us to process complex data sets in minutes rather than days, giving us a significant competitive edge.",
        rating: 4,
        avatar: "EC",
        avatar_gradient: "linear-gradient(135deg, #22c55e, #2dd4bf)",
        industry: "Finance",
        highlight: "Process data in minutes instead of days",
    },
    Testimonial {
        id: 4,
        name: "David Patel",
        position: "Head of Engineering, CloudSystems",
        content: "We partnered with Xenetron to develop our infrastructure monitoring solution. The expertise of their team and the quality of their work exceeded our expectations. The solution has been deployed to over 200 clients with overwhelmingly positive feedback.",
        rating: 5,
        avatar: "DP",
        avatar_gradient: "linear-gradient(135deg, #f59e0b, #fb923c)",
        industry: "Cloud Services",
        highlight: "Deployed to 200+ clients",
    },
];

pub const CLIENT_LOGOS: &[(&str, &str)] = &[
    ("TechCorp", "rgba(59, 130, 246, 0.2)"),
    ("HealthPlus", "rgba(34, 197, 94, 0.2)"),
    ("FinanceHub", "rgba(168, 85, 247, 0.2)"),
    ("CloudSys", "rgba(6, 182, 212, 0.2)"),
    ("DataFlow", "rgba(245, 158, 11, 0.2)"),
    ("AIVentures", "rgba(255, 51, 102, 0.2)"),
];

// -- Blog --------------------------------------------------------------------

pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: &'static str,
    pub badge: &'static str,
    pub read_time: &'static str,
    /// ISO date, `YYYY-MM-DD`.
    pub published: &'static str,
    pub author: &'static str,
    pub author_role: &'static str,
}

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        id: 1,
        title: "The Future of AI in Business Transformation",
        excerpt: "Explore how artificial intelligence is reshaping business processes and creating new opportunities for innovation across industries.",
        category: "AI Trends",
        badge: "AI",
        read_time: "5 min read",
        published: "2025-04-08",
        author: "Sarah Johnson",
        author_role: "AI Research Director",
    },
    BlogPost {
        id: 2,
        title: "Implementing Machine Learning for Better Decision Making",
        excerpt: "Learn practical strategies for implementing machine learning models to enhance your business decision-making process and drive data-informed results.",
        category: "Machine Learning",
        badge: "ML",
        read_time: "7 min read",
        published: "2025-04-02",
        author: "Michael Chen",
        author_role: "Data Science Lead",
    },
    BlogPost {
        id: 3,
        title: "How to Build a Data-Driven Culture in Your Organization",
        excerpt: "Discover key steps to fostering a data-driven culture that empowers teams and drives business success through analytical thinking.",
        category: "Data Strategy",
        badge: "Data",
        read_time: "6 min read",
        published: "2025-03-25",
        author: "Emily Rodriguez",
        author_role: "Digital Transformation Consultant",
    },
];

/// Distinct blog categories in listing order.
pub fn blog_categories() -> Vec<&'static str> {
    let mut categories: Vec<&'static str> = Vec::new();
    for post in BLOG_POSTS {
        if !categories.contains(&post.category) {
            categories.push(post.category);
        }
    }
    categories
}

pub fn posts_in(category: Option<&str>) -> Vec<&'static BlogPost> {
    BLOG_POSTS
        .iter()
        .filter(|post| category.map_or(true, |c| post.category == c))
        .collect()
}

/// "2025-04-08" -> "Apr 8, 2025". Unparseable input is shown as-is.
pub fn display_date(iso: &str) -> String {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|_| iso.to_string())
}

// -- FAQ ---------------------------------------------------------------------

pub struct FaqEntry {
    pub id: u32,
    pub question: &'static str,
    pub answer: &'static str,
    pub category: &'static str,
}

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        id: 1,
        question: "What is AI-powered digital transformation?",
        answer: "AI-powered digital transformation is the process of integrating artificial intelligence technologies into business operations to enhance efficiency, decision-making, and customer experiences. It involves leveraging AI to automate processes, analyze data, and generate insights that drive innovation and competitive advantage.",
        category: "general",
    },
    FaqEntry {
        id: 2,
        question: "How can Xenetron's services benefit my business?",
        answer: "Xenetron's services can help your business streamline operations, reduce costs, improve decision-making, and create new growth opportunities. Our AI-powered solutions automate repetitive tasks, uncover valuable insights from your data, and enable you to deliver better customer experiences. We tailor our approach to your specific industry and challenges.",
        category: "services",
    },
    FaqEntry {
        id: 3,
        question: "Do I need technical expertise to implement your solutions?",
        answer: "No, you don't need technical expertise. Our team handles the technical implementation while working closely with your business stakeholders. We also provide comprehensive training and ongoing support to ensure your team can effectively use and maintain the solutions we develop.",
        category: "implementation",
    },
    FaqEntry {
        id: 4,
        question: "How long does implementation typically take?",
        answer: "Implementation timelines vary based on the complexity of the solution and your specific requirements. Simple SaaS implementations can take 4-8 weeks, while comprehensive digital transformation initiatives may span 3-6 months. We work with you to establish clear milestones and ensure transparent communication throughout the process.",
        category: "implementation",
    },
    FaqEntry {
        id: 5,
        question: "How do you ensure data security and privacy?",
        answer: "We implement enterprise-grade security measures including encryption, secure access controls, regular security audits, and compliance with industry standards and regulations. Our solutions are designed with privacy-by-design principles, and we maintain transparent data processing practices to ensure your information remains protected.",
        category: "security",
    },
    FaqEntry {
        id: 6,
        question: "Can your solutions integrate with our existing systems?",
        answer: "Yes, our solutions are designed to integrate seamlessly with your existing systems and workflows. We offer robust API capabilities and support for standard integration protocols. Our team will assess your current technology stack and develop an integration strategy that minimizes disruption while maximizing value.",
        category: "implementation",
    },
    FaqEntry {
        id: 7,
        question: "What industries do you specialize in?",
        answer: "We work with clients across various industries including healthcare, finance, retail, manufacturing, and technology. Our solutions are adaptable to different sectors, and we have specialized expertise in addressing industry-specific challenges and compliance requirements.",
        category: "general",
    },
    FaqEntry {
        id: 8,
        question: "Do you offer ongoing support after implementation?",
        answer: "Yes, we provide comprehensive post-implementation support and maintenance services. Our support packages include technical assistance, system updates, performance optimization, and user training. We're committed to ensuring the long-term success of our solutions and your continued satisfaction.",
        category: "services",
    },
];

/// Case-insensitive match on question or answer. A blank term matches all.
pub fn search_faq(term: &str) -> Vec<&'static FaqEntry> {
    let needle = term.trim().to_lowercase();
    FAQ_ENTRIES
        .iter()
        .filter(|entry| {
            needle.is_empty()
                || entry.question.to_lowercase().contains(&needle)
                || entry.answer.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Single-open accordion: clicking the open entry closes it.
pub fn toggle_open(open: Option<u32>, clicked: u32) -> Option<u32> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn section_ids_are_unique_and_stable() {
        let ids: HashSet<_> = SectionId::ALL.iter().map(|id| id.as_str()).collect();
        assert_eq!(ids.len(), SectionId::ALL.len());
        assert_eq!(SectionId::Home.href(), "#home");
        assert_eq!(SectionId::Contact.as_str(), "contact");
    }

    #[test]
    fn teaser_cuts_on_char_boundary() {
        assert_eq!(teaser("short", 60), "short");
        assert_eq!(teaser("abcdef", 3), "abc...");
        assert_eq!(teaser("äöüß", 2), "äö...");
        assert_eq!(teaser("exact", 5), "exact");
    }

    #[test]
    fn course_filter_by_category() {
        assert_eq!(courses_in(None).len(), COURSES.len());
        let practical: Vec<u32> = courses_in(Some(CourseCategory::Practical))
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(practical, vec![2, 4]);
        assert_eq!(courses_in(Some(CourseCategory::Leadership)).len(), 2);
    }

    #[test]
    fn discount_matches_listed_plans() {
        assert_eq!(discount_percentage(999, 899), 10);
        assert_eq!(discount_percentage(499, 479), 4);
        assert_eq!(discount_percentage(2499, 2199), 12);
        assert_eq!(discount_percentage(0, 0), 0);
        assert_eq!(discount_percentage(100, 120), 0);
    }

    #[test]
    fn plan_prices_follow_cycle() {
        let pro = &PRICING_PLANS[1];
        assert_eq!(pro.price(BillingCycle::Monthly), 999);
        assert_eq!(pro.price(BillingCycle::Annually), 899);
        assert_eq!(pro.yearly_total(), 10_788);
        assert_eq!(PRICING_PLANS.iter().filter(|p| p.popular).count(), 1);
    }

    #[test]
    fn testimonial_ratings_are_bounded() {
        assert!(TESTIMONIALS.iter().all(|t| t.rating <= MAX_RATING));
    }

    #[test]
    fn blog_dates_and_filters() {
        assert_eq!(display_date("2025-04-08"), "Apr 8, 2025");
        assert_eq!(display_date("2025-03-25"), "Mar 25, 2025");
        assert_eq!(display_date("soon"), "soon");
        assert_eq!(blog_categories(), vec!["AI Trends", "Machine Learning", "Data Strategy"]);
        assert_eq!(posts_in(Some("Machine Learning"))[0].id, 2);
        assert_eq!(posts_in(None).len(), 3);
    }

    #[test]
    fn faq_search_is_case_insensitive() {
        assert_eq!(search_faq("").len(), FAQ_ENTRIES.len());
        assert_eq!(search_faq("   ").len(), FAQ_ENTRIES.len());
        let hits: Vec<u32> = search_faq("SECURITY").iter().map(|e| e.id).collect();
        assert_eq!(hits, vec![5]);
        assert!(search_faq("quantum teleportation").is_empty());
        // answer text is searched too
        assert!(search_faq("privacy-by-design").iter().any(|e| e.id == 5));
    }

    #[test]
    fn accordion_toggles_single_entry() {
        assert_eq!(toggle_open(None, 3), Some(3));
        assert_eq!(toggle_open(Some(3), 3), None);
        assert_eq!(toggle_open(Some(3), 4), Some(4));
    }
}
