use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::section_heading::SectionHeading;
use crate::content::{courses_in, CourseCategory, SectionId, COURSE_FILTERS};
use crate::reveal::{reveal_style, use_reveal, Entrance, RevealOptions};

fn format_enrolled(count: u32) -> String {
    let digits = count.to_string();
    let mut groups: Vec<&str> = digits
        .as_bytes()
        .rchunks(3)
        .filter_map(|chunk| std::str::from_utf8(chunk).ok())
        .collect();
    groups.reverse();
    groups.join(",")
}

#[function_component(CoursesSection)]
pub fn courses_section() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), RevealOptions::LIVE);
    let filter = use_state(|| None::<CourseCategory>);

    let courses = courses_in(*filter);

    html! {
        <section id={SectionId::Courses.as_str()} class="courses">
            <div ref={node} class="container">
                <SectionHeading
                    badge="Our Courses"
                    title="Enhance Your Skills with"
                    highlight="Expert-Led AI Training"
                    subtitle="Explore our comprehensive range of courses designed to help you master the latest AI technologies and implementation strategies for business success."
                    {visible}
                    duration_ms={800}
                />

                <div class="filter-row" style={reveal_style(visible, Entrance::Rise(20), 600, 200)}>
                    { for COURSE_FILTERS.iter().map(|(category, label)| {
                        let category = *category;
                        let onclick = {
                            let filter = filter.clone();
                            Callback::from(move |_| filter.set(category))
                        };
                        html! {
                            <button
                                class={classes!("filter-pill", (*filter == category).then(|| "active"))}
                                {onclick}
                            >
                                <span class="filter-icon">{"⚲"}</span>
                                {*label}
                            </button>
                        }
                    }) }
                </div>

                <div class="course-grid">
                    { for courses.iter().enumerate().map(|(i, course)| html! {
                        <div
                            key={course.id}
                            class="course-card"
                            data-hover="true"
                            style={reveal_style(visible, Entrance::Rise(20), 600, i as u32 * 100)}
                        >
                            <div class="course-cover">
                                <span class="course-cover-icon">{course.category.icon()}</span>
                                <span class="level-badge" style={format!("background: {};", course.level.color())}>
                                    {course.level.label()}
                                </span>
                            </div>
                            <div class="course-body">
                                <h3>{course.title}</h3>
                                <p>{course.description}</p>
                                <div class="course-meta">
                                    <span>{"⏱ "}{course.duration}</span>
                                    <span>{"👥 "}{format_enrolled(course.enrolled)}{" enrolled"}</span>
                                    <span class="accent-text">{"★ "}{format!("{:.1}", course.rating)}</span>
                                </div>
                                <a href={SectionId::Contact.href()} class="course-link">
                                    {"Enroll Now"}<span>{"→"}</span>
                                </a>
                            </div>
                        </div>
                    }) }
                </div>

                <div class="section-footer-cta" style={reveal_style(visible, Entrance::Fade, 600, 400)}>
                    <Button href={SectionId::Contact.href()} variant={ButtonVariant::Outline}>
                        {"View All Courses"}
                    </Button>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enrolled_counts_get_thousands_separators() {
        assert_eq!(format_enrolled(892), "892");
        assert_eq!(format_enrolled(1245), "1,245");
        assert_eq!(format_enrolled(1_234_567), "1,234,567");
        assert_eq!(format_enrolled(0), "0");
        assert_eq!(format_enrolled(100_000), "100,000");
        assert_eq!(format_enrolled(u32::MAX), "4,294,967,295");
    }
}
