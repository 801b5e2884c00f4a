/// Site-wide theme and layout rules, injected once by `App`.
pub const GLOBAL: &str = r#"
:root {
    --background: #0a0a0a;
    --foreground: #ededed;
    --accent: #ff3366;
    --accent-light: #ff6b99;
    --secondary: #333333;
    --tertiary: #222222;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

html { scroll-behavior: smooth; }

body {
    background: var(--background);
    color: var(--foreground);
    font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    line-height: 1.6;
    overflow-x: hidden;
}

a { color: inherit; text-decoration: none; }
button { font: inherit; cursor: pointer; }
h2 { font-size: clamp(1.9rem, 4vw, 2.6rem); line-height: 1.2; margin-bottom: 1.2rem; }
h3 { font-size: 1.25rem; margin-bottom: 0.6rem; }

.container { max-width: 1200px; margin: 0 auto; padding: 0 1.25rem; position: relative; }
section { padding: 5rem 0; position: relative; }
.muted, .hint { color: rgba(237, 237, 237, 0.6); }
.hint { font-size: 0.8rem; margin-top: 0.25rem; }
.accent-text { color: var(--accent); }
.block { display: block; }
.sr-only { position: absolute; width: 1px; height: 1px; overflow: hidden; clip: rect(0 0 0 0); }

.gradient-text {
    background: linear-gradient(90deg, var(--accent), var(--accent-light));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.section-badge {
    display: inline-block;
    padding: 0.25rem 0.75rem;
    border-radius: 999px;
    background: rgba(255, 51, 102, 0.1);
    color: var(--accent);
    font-size: 0.85rem;
    font-weight: 500;
    margin-bottom: 1rem;
}

.section-heading { text-align: center; margin-bottom: 3rem; }
.section-subtitle { max-width: 42rem; margin: 0 auto; color: rgba(237, 237, 237, 0.8); }
.section-footer-cta { text-align: center; margin-top: 3rem; }

.fade-in { animation: fadeIn 0.6s ease-out both; }

@keyframes fadeIn {
    from { opacity: 0; transform: translateY(12px); }
    to { opacity: 1; transform: translateY(0); }
}

@keyframes float {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(-12px); }
}

@keyframes pulse {
    0%, 100% { opacity: 1; transform: scale(1); }
    50% { opacity: 0.5; transform: scale(1.15); }
}

@keyframes bounce {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(8px); }
}

/* Cursor */
.cursor-follower {
    position: fixed;
    top: 0;
    left: 0;
    border-radius: 50%;
    pointer-events: none;
    z-index: 9999;
    transform: translate(-50%, -50%);
    mix-blend-mode: difference;
    transition: width 0.2s ease, height 0.2s ease, background 0.2s ease;
}

@media (hover: none) { .cursor-follower { display: none; } }

/* Header */
.site-header {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    padding: 1.25rem 0;
    transition: background 0.3s ease, padding 0.3s ease, box-shadow 0.3s ease;
}
.site-header.scrolled {
    background: rgba(10, 10, 10, 0.9);
    backdrop-filter: blur(8px);
    padding: 0.75rem 0;
    box-shadow: 0 2px 20px rgba(0, 0, 0, 0.4);
}
.header-content { display: flex; align-items: center; justify-content: space-between; }
.brand { display: flex; align-items: center; gap: 0.6rem; }
.brand-logo {
    width: 2.4rem;
    height: 2.4rem;
    border-radius: 0.5rem;
    background: linear-gradient(135deg, var(--accent), var(--accent-light));
    display: flex;
    align-items: center;
    justify-content: center;
}
.brand-mark { font-weight: 800; color: var(--background); }
.brand-name { font-size: 1.3rem; font-weight: 700; }
.desktop-nav { display: flex; gap: 2rem; }
.nav-link { position: relative; color: rgba(237, 237, 237, 0.8); transition: color 0.2s; }
.nav-link:hover { color: var(--accent); }
.nav-underline {
    position: absolute;
    left: 0;
    bottom: -4px;
    height: 2px;
    width: 0;
    background: var(--accent);
    transition: width 0.3s ease;
}
.nav-link:hover .nav-underline { width: 100%; }
.header-ctas { display: flex; align-items: center; gap: 1rem; }
.nav-demo-link { color: var(--accent); font-weight: 500; }
.burger-menu { display: none; flex-direction: column; gap: 5px; background: none; border: none; }
.burger-menu span { width: 24px; height: 2px; background: var(--foreground); transition: transform 0.3s; }
.burger-menu.open span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
.burger-menu.open span:nth-child(2) { opacity: 0; }
.burger-menu.open span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
.mobile-menu { display: none; }
.mobile-menu.open { display: block; background: var(--tertiary); padding: 1rem 1.25rem; }
.mobile-nav { display: flex; flex-direction: column; gap: 1rem; }
.mobile-ctas { display: flex; flex-direction: column; gap: 0.75rem; margin-top: 1rem; }

@media (max-width: 900px) {
    .desktop-nav, .header-ctas { display: none; }
    .burger-menu { display: flex; }
}

/* Hero */
.hero { min-height: 100vh; display: flex; align-items: center; padding-top: 7rem; overflow: hidden; }
.hero-glow {
    position: absolute;
    width: 32rem;
    height: 32rem;
    border-radius: 50%;
    background: rgba(255, 51, 102, 0.12);
    filter: blur(80px);
    top: 10%;
    right: -8rem;
}
.hero-particles { position: absolute; inset: 0; pointer-events: none; }
.particle { position: absolute; border-radius: 50%; animation: float 6s ease-in-out infinite; }
.particle-accent { background: rgba(255, 51, 102, 0.6); }
.particle-plain { background: rgba(237, 237, 237, 0.25); }
.hero-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; align-items: center; }
.hero-kicker { color: var(--accent); font-weight: 600; letter-spacing: 0.08em; text-transform: uppercase; }
.hero h1 { font-size: clamp(2.4rem, 6vw, 4rem); line-height: 1.1; margin: 1rem 0; }
.hero-word { display: inline-block; margin-right: 0.3em; animation: fadeIn 0.6s ease-out both; }
.hero-subtitle { font-size: 1.15rem; color: rgba(237, 237, 237, 0.8); margin-bottom: 2rem; }
.hero-ctas { display: flex; gap: 1rem; flex-wrap: wrap; }
.hero-visual { position: relative; }
.code-window { background: var(--tertiary); border-radius: 0.75rem; overflow: hidden; border: 1px solid rgba(255, 51, 102, 0.15); }
.code-window-bar { display: flex; align-items: center; gap: 0.4rem; padding: 0.6rem 0.9rem; background: var(--secondary); }
.dot { width: 0.7rem; height: 0.7rem; border-radius: 50%; }
.dot.red { background: #ef4444; }
.dot.amber { background: #f59e0b; }
.dot.green { background: #22c55e; }
.code-file { margin-left: 0.5rem; font-size: 0.8rem; color: rgba(237, 237, 237, 0.5); }
.code-window pre { padding: 1.25rem; font-size: 0.85rem; overflow-x: auto; font-family: 'JetBrains Mono', monospace; }
.kw { color: var(--accent-light); }
.str { color: #22c55e; }
.comment { color: rgba(237, 237, 237, 0.4); }
.metric-card {
    position: absolute;
    background: var(--secondary);
    border-radius: 0.75rem;
    padding: 0.8rem 1.1rem;
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.4);
    animation: float 5s ease-in-out infinite;
}
.metric-speed { top: -1.5rem; right: -1rem; }
.metric-cost { bottom: -1.5rem; left: -1rem; animation-delay: 1.5s; }
.metric-value { font-size: 1.4rem; font-weight: 700; color: var(--accent); }
.metric-label { font-size: 0.75rem; color: rgba(237, 237, 237, 0.6); }
.scroll-cue { position: absolute; bottom: 2rem; left: 50%; transform: translateX(-50%); text-align: center; font-size: 0.8rem; }
.scroll-cue-arrow { display: block; animation: bounce 1.6s infinite; color: var(--accent); }

@media (max-width: 900px) {
    .hero-grid { grid-template-columns: 1fr; }
    .hero-visual { display: none; }
}

/* Benefits */
.benefits-banner { background: var(--tertiary); }
.benefits-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 1.5rem; }
.benefit-card { background: var(--secondary); border-radius: 0.75rem; padding: 1.5rem; transition: transform 0.3s; }
.benefit-card:hover { transform: translateY(-4px); }
.benefit-top { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem; }
.benefit-icon { font-size: 1.6rem; }
.benefit-arrow { color: var(--accent); }
.trust-line { text-align: center; margin-top: 2.5rem; color: rgba(237, 237, 237, 0.6); }
.trust-pulses { display: flex; justify-content: center; gap: 0.5rem; margin-top: 0.75rem; }
.trust-pulse { width: 0.5rem; height: 0.5rem; border-radius: 50%; background: var(--accent); animation: pulse 1.5s infinite; }

/* About */
.about-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 4rem; align-items: center; }
.orbit { position: relative; width: 400px; height: 300px; margin: 0 auto; }
.orbit-dots { position: absolute; inset: 0; display: grid; grid-template-columns: repeat(8, 1fr); }
.orbit-dot { width: 3px; height: 3px; border-radius: 50%; background: rgba(255, 51, 102, 0.3); animation: pulse 2s infinite; }
.orbit-core {
    position: absolute;
    top: 50%;
    left: 50%;
    width: 6rem;
    height: 6rem;
    margin: -3rem 0 0 -3rem;
    border-radius: 50%;
    background: linear-gradient(135deg, var(--accent), var(--accent-light));
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 2.4rem;
    font-weight: 800;
    color: var(--background);
}
.orbit-letter {
    position: absolute;
    top: 50%;
    left: 50%;
    width: 2.4rem;
    height: 2.4rem;
    margin: -1.2rem 0 0 -1.2rem;
    border-radius: 50%;
    background: var(--secondary);
    display: flex;
    align-items: center;
    justify-content: center;
    font-weight: 700;
    color: var(--accent);
}
.orbit-spokes { position: absolute; inset: 0; width: 100%; height: 100%; }
.stats-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1rem; margin-top: 2rem; }
.stat-card { background: var(--secondary); border-radius: 0.75rem; padding: 1.25rem; text-align: center; }
.stat-number { font-size: 2rem; font-weight: 800; }
.stat-label { font-size: 0.85rem; color: rgba(237, 237, 237, 0.7); }
.about-copy p { margin-bottom: 1.25rem; color: rgba(237, 237, 237, 0.8); }
.mission { border-left: 3px solid var(--accent); padding-left: 1rem; margin: 1.5rem 0; font-style: italic; }

@media (max-width: 900px) {
    .about-grid { grid-template-columns: 1fr; }
    .orbit { transform: scale(0.8); }
}

/* Services */
.services { background: var(--tertiary); }
.services-layout { display: grid; grid-template-columns: 2fr 3fr; gap: 2rem; }
.service-tabs { display: flex; flex-direction: column; gap: 1rem; }
.service-tab {
    display: flex;
    gap: 1rem;
    text-align: left;
    background: var(--secondary);
    border: 1px solid transparent;
    border-radius: 0.75rem;
    padding: 1rem;
    color: inherit;
}
.service-tab.active { border-color: var(--accent); background: rgba(255, 51, 102, 0.08); }
.service-tab-text p { font-size: 0.85rem; color: rgba(237, 237, 237, 0.6); }
.service-icon { font-size: 1.6rem; }
.service-icon.large { font-size: 2.4rem; }
.service-detail { background: var(--secondary); border-radius: 0.75rem; padding: 2rem; }
.service-detail-header { display: flex; align-items: center; gap: 1rem; margin-bottom: 1rem; }
.check-list { list-style: none; margin: 1.25rem 0; display: grid; gap: 0.6rem; }
.check { color: var(--accent); margin-right: 0.6rem; }

@media (max-width: 900px) { .services-layout { grid-template-columns: 1fr; } }

/* Products */
.product-tabs { display: flex; justify-content: center; gap: 1rem; margin-bottom: 2rem; }
.product-tab, .filter-pill, .billing-option {
    background: var(--secondary);
    color: inherit;
    border: 1px solid transparent;
    border-radius: 999px;
    padding: 0.5rem 1.25rem;
    transition: background 0.2s, border-color 0.2s;
}
.product-tab.active, .filter-pill.active, .billing-option.active { background: var(--accent); color: var(--background); }
.product-card { display: grid; grid-template-columns: 3fr 2fr; gap: 2rem; background: var(--tertiary); border-radius: 1rem; padding: 2rem; }
.product-title { display: flex; align-items: center; gap: 1rem; margin-bottom: 1rem; }
.product-side h4, .product-main h4 { margin: 1.25rem 0 0.75rem; }
.product-benefit { background: var(--secondary); border-radius: 0.5rem; padding: 1rem; margin-bottom: 0.75rem; }
.product-ctas { display: flex; gap: 1rem; margin-top: 1.5rem; flex-wrap: wrap; }
.product-demo, .solid-link, .solid-button {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    background: var(--accent);
    color: var(--background);
    border: none;
    border-radius: 0.4rem;
    padding: 0.75rem 1.5rem;
    font-weight: 500;
    transition: background 0.2s;
}
.product-demo:hover, .solid-link:hover, .solid-button:hover { background: var(--accent-light); }
.solid-button:disabled { opacity: 0.7; cursor: wait; }
.tag-row { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-top: 1rem; }
.tag { font-size: 0.75rem; padding: 0.2rem 0.6rem; border-radius: 999px; background: rgba(255, 51, 102, 0.1); color: var(--accent); }
.tag-muted { background: var(--secondary); color: rgba(237, 237, 237, 0.8); }

@media (max-width: 900px) { .product-card { grid-template-columns: 1fr; } }

/* Courses and blog */
.filter-row { display: flex; flex-wrap: wrap; justify-content: center; gap: 0.75rem; margin-bottom: 2.5rem; }
.filter-icon { margin-right: 0.4rem; }
.course-grid, .blog-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 1.5rem; }
.course-card, .blog-card { background: var(--tertiary); border-radius: 0.75rem; overflow: hidden; transition: transform 0.3s; }
.course-card:hover, .blog-card:hover { transform: translateY(-6px); }
.course-cover, .blog-cover {
    position: relative;
    height: 9rem;
    background: linear-gradient(135deg, rgba(255, 51, 102, 0.25), rgba(51, 51, 51, 0.9));
    display: flex;
    align-items: center;
    justify-content: center;
}
.course-cover-icon { font-size: 2.6rem; }
.level-badge { position: absolute; top: 0.75rem; right: 0.75rem; font-size: 0.75rem; padding: 0.2rem 0.6rem; border-radius: 999px; color: #fff; }
.course-body, .blog-body { padding: 1.5rem; }
.course-meta, .blog-meta { display: flex; gap: 1rem; font-size: 0.8rem; margin: 1rem 0; flex-wrap: wrap; }
.course-link { color: var(--accent); font-weight: 500; display: inline-flex; gap: 0.4rem; }
.blog-cover .tag { position: absolute; top: 0.75rem; left: 0.75rem; }
.blog-badge { font-size: 2rem; font-weight: 800; color: var(--accent); }
.blog-author { display: flex; align-items: center; gap: 0.75rem; margin: 1.25rem 0; }
.author-name { font-weight: 500; }

/* Pricing */
.pricing { background: var(--tertiary); }
.billing-toggle { display: flex; justify-content: center; gap: 0.5rem; margin-bottom: 3rem; }
.billing-save { font-size: 0.8rem; }
.pricing-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 1.5rem; align-items: start; }
.plan-card { position: relative; background: var(--secondary); border-radius: 1rem; border: 1px solid transparent; overflow: hidden; }
.plan-card.popular { border-color: var(--accent); transform: scale(1.03); }
.plan-ribbon { background: var(--accent); color: var(--background); text-align: center; font-size: 0.8rem; font-weight: 600; padding: 0.3rem; }
.plan-body { padding: 2rem; }
.plan-description { color: rgba(237, 237, 237, 0.7); margin-bottom: 1.5rem; }
.plan-price { margin-bottom: 1.5rem; }
.plan-amount { font-size: 2.6rem; font-weight: 800; }
.plan-period { color: rgba(237, 237, 237, 0.6); margin-left: 0.3rem; }
.plan-billed { font-size: 0.8rem; color: rgba(237, 237, 237, 0.6); }
.plan-cta { width: 100%; }
.pricing-note { text-align: center; margin-top: 2.5rem; color: rgba(237, 237, 237, 0.7); }
.pricing-note a { color: var(--accent); }

/* Testimonials */
.carousel { max-width: 52rem; margin: 0 auto; }
.carousel-viewport { overflow: hidden; cursor: grab; touch-action: pan-y; user-select: none; }
.carousel-viewport.grabbing { cursor: grabbing; }
.carousel-track { display: flex; }
.carousel-slide { flex: 0 0 100%; padding: 0 0.5rem; }
.testimonial-card { position: relative; background: var(--tertiary); border-radius: 1rem; padding: 2.5rem; }
.testimonial-quote { position: absolute; top: 1rem; right: 1.5rem; font-size: 3rem; color: rgba(255, 51, 102, 0.2); }
.testimonial-head { display: flex; align-items: center; gap: 1rem; margin-bottom: 1rem; }
.avatar {
    width: 3.5rem;
    height: 3.5rem;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    font-weight: 700;
    background: var(--accent);
    color: #fff;
    flex-shrink: 0;
}
.avatar.small { width: 2.4rem; height: 2.4rem; font-size: 0.9rem; }
.stars { margin-bottom: 1rem; }
.star { color: rgba(237, 237, 237, 0.3); }
.star.filled { color: #f59e0b; }
.testimonial-content { font-size: 1.05rem; color: rgba(237, 237, 237, 0.85); }
.testimonial-highlight { margin-top: 1.25rem; padding: 0.75rem 1rem; border-radius: 0.5rem; background: rgba(255, 51, 102, 0.08); }
.carousel-controls { display: flex; align-items: center; justify-content: center; gap: 1rem; margin-top: 1.5rem; }
.carousel-arrow {
    width: 2.6rem;
    height: 2.6rem;
    border-radius: 50%;
    border: 1px solid rgba(255, 51, 102, 0.3);
    background: transparent;
    color: var(--accent);
    font-size: 1.4rem;
}
.carousel-dots { display: flex; gap: 0.5rem; }
.carousel-dot { width: 0.6rem; height: 0.6rem; border-radius: 999px; border: none; background: var(--secondary); transition: width 0.3s; }
.carousel-dot.active { width: 1.8rem; background: var(--accent); }
.carousel-autoplay { background: none; border: none; color: rgba(237, 237, 237, 0.6); font-size: 0.85rem; }
.carousel-hint { text-align: center; font-size: 0.8rem; color: rgba(237, 237, 237, 0.4); margin-top: 0.75rem; }
.client-logos { text-align: center; margin-top: 4rem; }
.logo-row { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; margin-top: 1.25rem; }
.client-logo { padding: 0.75rem 1.5rem; border-radius: 0.5rem; font-weight: 600; }

/* FAQ */
.faq { background: var(--tertiary); }
.faq-search { position: relative; max-width: 42rem; margin: 0 auto 3rem; }
.faq-search input {
    width: 100%;
    background: var(--secondary);
    color: var(--foreground);
    border: 1px solid rgba(255, 51, 102, 0.2);
    border-radius: 0.5rem;
    padding: 0.8rem 1rem 0.8rem 3rem;
}
.faq-search input:focus { outline: none; border-color: var(--accent); }
.faq-search-icon { position: absolute; left: 1rem; top: 50%; transform: translateY(-50%); color: rgba(237, 237, 237, 0.5); }
.faq-list { max-width: 48rem; margin: 0 auto; display: grid; gap: 1rem; }
.faq-item { background: var(--secondary); border-radius: 0.5rem; border: 1px solid transparent; overflow: hidden; }
.faq-item.open { border-color: rgba(255, 51, 102, 0.2); }
.faq-question {
    width: 100%;
    display: flex;
    justify-content: space-between;
    align-items: center;
    gap: 1rem;
    padding: 1rem 1.5rem;
    background: none;
    border: none;
    color: inherit;
    text-align: left;
    font-weight: 500;
}
.toggle-icon { color: var(--accent); font-size: 1.2rem; }
.faq-answer { max-height: 0; overflow: hidden; padding: 0 1.5rem; transition: max-height 0.3s ease, padding 0.3s ease; }
.faq-item.open .faq-answer { max-height: 24rem; padding-bottom: 1.5rem; }
.faq-answer p { color: rgba(237, 237, 237, 0.7); }
.faq-empty { text-align: center; padding: 2rem 0; }
.faq-more { text-align: center; margin-top: 4rem; }
.faq-more p { margin-bottom: 1.5rem; }

/* Contact */
.contact-grid { display: grid; grid-template-columns: 2fr 3fr; gap: 2rem; }
.contact-card { background: var(--secondary); border-radius: 0.75rem; padding: 2rem; border: 1px solid rgba(255, 51, 102, 0.1); height: 100%; }
.card-title { margin-bottom: 1.5rem; }
.contact-items { display: grid; gap: 1.5rem; }
.contact-item { display: flex; gap: 1rem; align-items: flex-start; transition: transform 0.2s; }
.contact-item:hover { transform: translateX(5px); }
.contact-item h4 { font-size: 0.85rem; color: rgba(237, 237, 237, 0.7); margin-bottom: 0.25rem; }
.contact-item a:hover { color: var(--accent); }
.contact-item address { font-style: normal; }
.contact-icon {
    width: 3rem;
    height: 3rem;
    border-radius: 50%;
    background: rgba(255, 51, 102, 0.1);
    color: var(--accent);
    display: flex;
    align-items: center;
    justify-content: center;
    flex-shrink: 0;
}
.hours-badge { font-size: 0.7rem; padding: 0.1rem 0.5rem; border-radius: 999px; background: var(--tertiary); color: rgba(237, 237, 237, 0.6); }
.hours-badge.open { background: rgba(34, 197, 94, 0.15); color: #22c55e; }
.map-placeholder { position: relative; height: 12rem; margin-top: 2rem; border-radius: 0.5rem; background: var(--tertiary); }
.map-pin {
    position: absolute;
    top: 50%;
    left: 50%;
    width: 1.25rem;
    height: 1.25rem;
    margin: -0.6rem 0 0 -0.6rem;
    border-radius: 50%;
    background: var(--accent);
    animation: pulse 2s infinite;
}
.map-label { position: absolute; bottom: 0.75rem; left: 0.75rem; font-size: 0.75rem; color: rgba(237, 237, 237, 0.4); }
.form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
.form-field { margin-bottom: 1.5rem; }
.form-field label { display: block; font-size: 0.85rem; color: rgba(237, 237, 237, 0.7); margin-bottom: 0.5rem; }
.form-input {
    width: 100%;
    background: var(--tertiary);
    color: var(--foreground);
    border: 1px solid rgba(255, 51, 102, 0.1);
    border-radius: 0.5rem;
    padding: 0.75rem 1rem;
    transition: border-color 0.2s;
}
.form-input:focus { outline: none; border-color: var(--accent); }
.form-input.invalid { border-color: rgba(239, 68, 68, 0.5); }
.form-input.valid { border-color: rgba(34, 197, 94, 0.5); }
.field-error { font-size: 0.75rem; color: #ef4444; margin: 0.25rem 0 0 0.25rem; }
.textarea-wrap { position: relative; }
.char-count { position: absolute; right: 0.75rem; bottom: 0.75rem; font-size: 0.75rem; color: rgba(237, 237, 237, 0.4); }
.form-summary {
    display: flex;
    gap: 0.75rem;
    padding: 1rem;
    margin-bottom: 1.5rem;
    border-radius: 0.5rem;
    background: rgba(239, 68, 68, 0.1);
    border: 1px solid rgba(239, 68, 68, 0.3);
}
.summary-icon { color: #ef4444; font-weight: 700; }
.summary-title { color: #ef4444; font-weight: 500; font-size: 0.9rem; }
.privacy-note { font-size: 0.75rem; color: rgba(237, 237, 237, 0.6); background: rgba(255, 51, 102, 0.05); padding: 0.75rem; border-radius: 0.5rem; }
.form-actions { display: flex; justify-content: flex-end; margin-top: 1.5rem; }
.form-success {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 0.5rem;
    text-align: center;
    padding: 2rem;
    border-radius: 0.5rem;
    background: rgba(255, 51, 102, 0.1);
    border: 1px solid rgba(255, 51, 102, 0.2);
}
.form-success a { color: var(--accent); }
.form-success .solid-button { margin-top: 1.5rem; }
.success-icon {
    width: 5rem;
    height: 5rem;
    border-radius: 50%;
    background: rgba(255, 51, 102, 0.2);
    color: var(--accent);
    font-size: 2rem;
    display: flex;
    align-items: center;
    justify-content: center;
    margin-bottom: 1rem;
}
.contact-faq { text-align: center; margin-top: 3rem; }

@media (max-width: 900px) {
    .contact-grid, .form-row { grid-template-columns: 1fr; }
}

/* Footer */
.site-footer { background: var(--tertiary); padding: 4rem 0 2rem; border-top: 1px solid rgba(255, 51, 102, 0.1); }
.footer-grid { display: grid; grid-template-columns: 2fr repeat(3, 1fr) 2fr; gap: 2rem; }
.footer-brand .brand { margin-bottom: 1rem; }
.footer-brand .brand-mark {
    width: 2.4rem;
    height: 2.4rem;
    border-radius: 0.5rem;
    background: linear-gradient(135deg, var(--accent), var(--accent-light));
    display: flex;
    align-items: center;
    justify-content: center;
}
.footer-blurb { color: rgba(237, 237, 237, 0.6); font-size: 0.9rem; }
.footer-group h4 { margin-bottom: 1rem; }
.footer-group ul { list-style: none; display: grid; gap: 0.5rem; }
.footer-group a { color: rgba(237, 237, 237, 0.6); transition: color 0.2s; }
.footer-group a:hover { color: var(--accent); }
.social-links { display: flex; gap: 0.75rem; margin-top: 1.25rem; }
.social-link {
    width: 2.4rem;
    height: 2.4rem;
    border-radius: 50%;
    background: rgba(255, 51, 102, 0.1);
    color: var(--accent);
    display: flex;
    align-items: center;
    justify-content: center;
}
.newsletter-form { display: flex; gap: 0.5rem; margin-top: 1rem; }
.newsletter-form input {
    flex: 1;
    background: var(--secondary);
    color: var(--foreground);
    border: 1px solid transparent;
    border-radius: 0.4rem;
    padding: 0.6rem 0.8rem;
}
.newsletter-form input.invalid { border-color: #ef4444; }
.newsletter-thanks { color: #22c55e; margin-top: 1rem; }
.footer-bottom {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-top: 3rem;
    padding-top: 1.5rem;
    border-top: 1px solid rgba(237, 237, 237, 0.08);
    font-size: 0.85rem;
    color: rgba(237, 237, 237, 0.5);
}
.scroll-top {
    width: 2.6rem;
    height: 2.6rem;
    border-radius: 50%;
    border: none;
    background: var(--accent);
    color: var(--background);
}

@media (max-width: 900px) { .footer-grid { grid-template-columns: 1fr 1fr; } }

/* Not found */
.not-found { min-height: 80vh; display: flex; align-items: center; text-align: center; padding-top: 8rem; }
.not-found-code { font-size: 6rem; font-weight: 800; line-height: 1; }
.not-found h1 { margin: 1rem 0; }
.not-found .muted { margin-bottom: 2rem; }
"#;
