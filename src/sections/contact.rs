use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::config;
use crate::contact_form::{ContactForm, Field, FormAction, SubmitStatus, Subject};
use crate::content::SectionId;
use crate::reveal::{reveal_style, use_reveal, Entrance, RevealOptions};

/// Whether the office is staffed at `now`, judged on the office's local clock.
pub fn is_office_open(now: DateTime<Utc>) -> bool {
    let local = now.with_timezone(&config::OFFICE_TIMEZONE);
    let weekday = !matches!(local.weekday(), Weekday::Sat | Weekday::Sun);
    weekday && (config::OFFICE_OPENS_HOUR..config::OFFICE_CLOSES_HOUR).contains(&local.hour())
}

fn mailto_href(subject: Subject) -> String {
    format!(
        "mailto:{}?subject={}",
        config::CONTACT_EMAIL,
        urlencoding::encode(subject.label())
    )
}

fn input_class(form: &ContactForm, field: Field) -> Classes {
    let state = if form.visible_error(field).is_some() {
        Some("invalid")
    } else if form.is_touched(field) {
        Some("valid")
    } else {
        None
    };
    classes!("form-input", state)
}

fn field_error(form: &ContactForm, field: Field) -> Html {
    match form.visible_error(field) {
        Some(err) => html! { <div class="field-error">{err.to_string()}</div> },
        None => html! {},
    }
}

#[function_component(ContactInfo)]
fn contact_info(props: &ContactInfoProps) -> Html {
    let open_now = is_office_open(Utc::now());

    html! {
        <div class="contact-card">
            <h3 class="card-title"><span class="gradient-text">{"Get in Touch"}</span></h3>
            <div class="contact-items">
                <div class="contact-item">
                    <span class="contact-icon">{"✉"}</span>
                    <div>
                        <h4>{"Email Us"}</h4>
                        <a href={mailto_href(props.subject)}>{config::CONTACT_EMAIL}</a>
                        <p class="hint">{"We typically respond within 24 hours"}</p>
                    </div>
                </div>
                <div class="contact-item">
                    <span class="contact-icon">{"☎"}</span>
                    <div>
                        <h4>{"Call Us"}</h4>
                        <a href={config::CONTACT_PHONE_HREF}>{config::CONTACT_PHONE_DISPLAY}</a>
                        <p class="hint">{"Monday to Friday, 9AM to 5PM EST"}</p>
                    </div>
                </div>
                <div class="contact-item">
                    <span class="contact-icon">{"⌖"}</span>
                    <div>
                        <h4>{"Visit Us"}</h4>
                        <address>
                            {"101 Innovation Drive"}<br />
                            {"Tech District, CA 94103"}<br />
                            {"United States"}
                        </address>
                        <p class="hint">{"Please schedule an appointment before visiting"}</p>
                    </div>
                </div>
                <div class="contact-item">
                    <span class="contact-icon">{"◷"}</span>
                    <div>
                        <h4>
                            {"Business Hours "}
                            <span class={classes!("hours-badge", open_now.then(|| "open"))}>
                                { if open_now { "Open now" } else { "Closed" } }
                            </span>
                        </h4>
                        <p>{"Monday - Friday: 9AM - 5PM EST"}<br />{"Weekend: Closed"}</p>
                        <p class="hint">{"Support available 24/7 for enterprise clients"}</p>
                    </div>
                </div>
            </div>
            <div class="map-placeholder">
                <div class="map-pin" />
                <span class="map-label">{"Tech District, CA"}</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ContactInfoProps {
    subject: Subject,
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), RevealOptions::ONCE);
    let form = use_reducer(ContactForm::default);

    // Stand-in for delivery: nothing leaves the page.
    {
        let dispatcher = form.dispatcher();
        let values = form.values().clone();
        use_effect_with_deps(
            move |status| {
                if *status == SubmitStatus::Submitting {
                    match serde_json::to_string(&values) {
                        Ok(payload) => gloo_console::log!("contact submission", payload),
                        Err(e) => log::error!("failed to serialize contact submission: {}", e),
                    }
                    spawn_local(async move {
                        TimeoutFuture::new(config::SUBMIT_DELAY_MS).await;
                        dispatcher.dispatch(FormAction::Completed);
                    });
                }
                || ()
            },
            form.status(),
        );
    }

    let on_text = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(field, input.value()));
        })
    };
    let on_blur = |field: Field| {
        let form = form.clone();
        Callback::from(move |_: FocusEvent| form.dispatch(FormAction::Blur(field)))
    };
    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(Field::Message, area.value()));
        })
    };
    let on_subject = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(Field::Subject, select.value()));
        })
    };
    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            form.dispatch(FormAction::Submit);
        })
    };
    let send_another = {
        let form = form.clone();
        Callback::from(move |_| form.dispatch(FormAction::Reset))
    };

    let values = form.values();
    let submitting = form.status() == SubmitStatus::Submitting;
    let message_len = values.message.chars().count();

    let body = if form.status() == SubmitStatus::Submitted {
        html! {
            <div class="form-success fade-in">
                <div class="success-icon">{"✓"}</div>
                <h4 class="gradient-text">{"Message Sent!"}</h4>
                <p>{"Thank you for reaching out. Our team will review your message and get back to you shortly."}</p>
                <p class="hint">{"While you wait, you might want to:"}</p>
                <a href={SectionId::Services.href()}>{"Explore our services"}</a>
                <a href={SectionId::Faq.href()}>{"Check our FAQ section"}</a>
                <button class="solid-button" onclick={send_another}>{"Send Another Message"}</button>
            </div>
        }
    } else {
        html! {
            <>
                {
                    match form.summary() {
                        Some(summary) => html! {
                            <div class="form-summary">
                                <span class="summary-icon">{"!"}</span>
                                <div>
                                    <p class="summary-title">{summary}</p>
                                    <p class="hint">{"Please review the form and fix the errors highlighted below."}</p>
                                </div>
                            </div>
                        },
                        None => html! {},
                    }
                }
                <form {onsubmit} novalidate=true>
                    <div class="form-row">
                        <div class="form-field">
                            <label for={Field::Name.as_str()}>{"Full Name "}<span class="accent-text">{"*"}</span></label>
                            <input
                                id={Field::Name.as_str()}
                                type="text"
                                class={input_class(&form, Field::Name)}
                                placeholder="Your name"
                                value={values.name.clone()}
                                oninput={on_text(Field::Name)}
                                onblur={on_blur(Field::Name)}
                            />
                            { field_error(&form, Field::Name) }
                        </div>
                        <div class="form-field">
                            <label for={Field::Email.as_str()}>{"Email Address "}<span class="accent-text">{"*"}</span></label>
                            <input
                                id={Field::Email.as_str()}
                                type="email"
                                class={input_class(&form, Field::Email)}
                                placeholder="your.email@example.com"
                                value={values.email.clone()}
                                oninput={on_text(Field::Email)}
                                onblur={on_blur(Field::Email)}
                            />
                            { field_error(&form, Field::Email) }
                        </div>
                    </div>
                    <div class="form-row">
                        <div class="form-field">
                            <label for={Field::Company.as_str()}>{"Company"}</label>
                            <input
                                id={Field::Company.as_str()}
                                type="text"
                                class="form-input"
                                placeholder="Your company"
                                value={values.company.clone()}
                                oninput={on_text(Field::Company)}
                            />
                        </div>
                        <div class="form-field">
                            <label for={Field::Subject.as_str()}>{"Subject"}</label>
                            <select id={Field::Subject.as_str()} class="form-input" onchange={on_subject}>
                                { for Subject::ALL.iter().map(|subject| html! {
                                    <option value={subject.label()} selected={*subject == values.subject}>
                                        {subject.label()}
                                    </option>
                                }) }
                            </select>
                        </div>
                    </div>
                    <div class="form-field">
                        <label for={Field::Message.as_str()}>{"Message "}<span class="accent-text">{"*"}</span></label>
                        <div class="textarea-wrap">
                            <textarea
                                id={Field::Message.as_str()}
                                rows="5"
                                class={input_class(&form, Field::Message)}
                                placeholder="Tell us about your project and how we can help..."
                                value={values.message.clone()}
                                oninput={on_message}
                                onblur={on_blur(Field::Message)}
                            />
                            {
                                if message_len > 0 {
                                    html! { <span class="char-count">{format!("{} characters", message_len)}</span> }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                        { field_error(&form, Field::Message) }
                    </div>
                    <p class="privacy-note">
                        {"By submitting this form, you agree to our Privacy Policy. We'll never share your information with third parties."}
                    </p>
                    <div class="form-actions">
                        <button type="submit" class="solid-button" disabled={submitting}>
                            { if submitting { "Sending..." } else { "Send Message" } }
                        </button>
                    </div>
                </form>
            </>
        }
    };

    html! {
        <section id={SectionId::Contact.as_str()} class="contact">
            <div ref={node} class="container">
                <SectionHeading
                    badge="Contact Us"
                    title="Ready to Transform Your"
                    highlight="Business with AI?"
                    subtitle="Get in touch with our team to discuss how Xenetron can help you leverage the power of AI to drive innovation and growth."
                    {visible}
                />

                <div class="contact-grid">
                    <div style={reveal_style(visible, Entrance::FromLeft(20), 700, 200)}>
                        <ContactInfo subject={values.subject} />
                    </div>
                    <div class="contact-card" style={reveal_style(visible, Entrance::FromRight(20), 700, 400)}>
                        <h3 class="card-title"><span class="gradient-text">{"Send Us a Message"}</span></h3>
                        { body }
                    </div>
                </div>

                <div class="contact-faq" style={reveal_style(visible, Entrance::Rise(20), 700, 600)}>
                    <p class="muted">{"Have a question? Check our frequently asked questions"}</p>
                    <a href={SectionId::Faq.href()} class="accent-text">{"View FAQ"}</a>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn open_during_new_york_business_hours() {
        // Tuesday 2025-04-08 14:00 UTC is 10:00 in New York (EDT).
        let now = Utc.with_ymd_and_hms(2025, 4, 8, 14, 0, 0).unwrap();
        assert!(is_office_open(now));
    }

    #[test]
    fn closed_outside_hours_and_on_weekends() {
        // 21:30 UTC is 17:30 in New York.
        assert!(!is_office_open(Utc.with_ymd_and_hms(2025, 4, 8, 21, 30, 0).unwrap()));
        // 12:30 UTC is 08:30 in New York.
        assert!(!is_office_open(Utc.with_ymd_and_hms(2025, 4, 8, 12, 30, 0).unwrap()));
        // Saturday noon.
        assert!(!is_office_open(Utc.with_ymd_and_hms(2025, 4, 12, 16, 0, 0).unwrap()));
    }

    #[test]
    fn weekday_check_uses_office_date_not_utc_date() {
        // Monday 02:00 UTC is Sunday 22:00 in New York.
        assert!(!is_office_open(Utc.with_ymd_and_hms(2025, 4, 14, 2, 0, 0).unwrap()));
        // Monday 13:00 UTC is Monday 09:00 (EDT): opening hour.
        assert!(is_office_open(Utc.with_ymd_and_hms(2025, 4, 14, 13, 0, 0).unwrap()));
    }

    #[test]
    fn own_email_rule_marks_input_the_browser_would_accept() {
        // "a@b" satisfies type="email"; with native validation off ours decides.
        let mut form = ContactForm::default();
        form.apply(FormAction::Edit(Field::Email, "a@b".into()));
        form.apply(FormAction::Blur(Field::Email));
        assert_eq!(input_class(&form, Field::Email), classes!("form-input", "invalid"));

        form.apply(FormAction::Edit(Field::Email, "a@b.com".into()));
        assert_eq!(input_class(&form, Field::Email), classes!("form-input", "valid"));
        assert_eq!(input_class(&form, Field::Name), classes!("form-input"));
    }

    #[test]
    fn mailto_carries_encoded_subject() {
        assert_eq!(
            mailto_href(Subject::default()),
            "mailto:info@xenetron.io?subject=General%20Inquiry"
        );
    }
}
