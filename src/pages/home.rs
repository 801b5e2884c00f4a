use yew::prelude::*;

use crate::sections::{
    about::AboutSection, benefits::BenefitsBanner, blog::BlogSection, contact::ContactSection,
    courses::CoursesSection, faq::FaqSection, hero::HeroSection, pricing::PricingSection,
    products::ProductsSection, services::ServicesSection, testimonials::TestimonialsSection,
};

/// The single-page site, top to bottom.
#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <>
            <HeroSection />
            <BenefitsBanner />
            <AboutSection />
            <ServicesSection />
            <ProductsSection />
            <CoursesSection />
            <PricingSection />
            <TestimonialsSection />
            <BlogSection />
            <FaqSection />
            <ContactSection />
        </>
    }
}
