use stylist::yew::styled_component;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariantStyle {
    pub background: &'static str,
    pub hover_background: &'static str,
    pub color: &'static str,
    pub border: &'static str,
    pub shadow: &'static str,
}

pub fn variant_style(variant: ButtonVariant) -> VariantStyle {
    match variant {
        ButtonVariant::Primary => VariantStyle {
            background: "#ff3366",
            hover_background: "#ff4a7a",
            color: "#ffffff",
            border: "2px solid transparent",
            shadow: "0 10px 15px rgba(0, 0, 0, 0.3)",
        },
        ButtonVariant::Secondary => VariantStyle {
            background: "#ffffff",
            hover_background: "#f3f4f6",
            color: "#0a0a0a",
            border: "2px solid transparent",
            shadow: "none",
        },
        ButtonVariant::Outline => VariantStyle {
            background: "transparent",
            hover_background: "rgba(255, 51, 102, 0.1)",
            color: "#ff3366",
            border: "2px solid #ff3366",
            shadow: "none",
        },
    }
}

/// (padding, font-size)
pub fn size_style(size: ButtonSize) -> (&'static str, &'static str) {
    match size {
        ButtonSize::Sm => ("0.5rem 1rem", "0.875rem"),
        ButtonSize::Md => ("0.75rem 1.5rem", "1rem"),
        ButtonSize::Lg => ("1rem 2rem", "1.125rem"),
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    /// Renders an anchor instead of a `<button>` when set.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[styled_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let look = variant_style(props.variant);
    let (padding, font_size) = size_style(props.size);

    let style = css!(
        r#"
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        border-radius: 9999px;
        font-weight: 500;
        text-decoration: none;
        cursor: pointer;
        transition: all 0.3s ease;
        background: ${background};
        color: ${color};
        border: ${border};
        box-shadow: ${shadow};
        padding: ${padding};
        font-size: ${font_size};

        &:hover {
            background: ${hover_background};
            transform: scale(1.05);
        }

        &:active {
            transform: scale(0.95);
        }
        "#,
        background = look.background,
        hover_background = look.hover_background,
        color = look.color,
        border = look.border,
        shadow = look.shadow,
        padding = padding,
        font_size = font_size,
    );

    let classes = classes!(style, props.class.clone());

    match &props.href {
        Some(href) => html! {
            <a href={href.clone()} class={classes} onclick={props.onclick.clone()}>
                { for props.children.iter() }
            </a>
        },
        None => html! {
            <button type="button" class={classes} onclick={props.onclick.clone()}>
                { for props.children.iter() }
            </button>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_has_distinct_look() {
        let primary = variant_style(ButtonVariant::Primary);
        let secondary = variant_style(ButtonVariant::Secondary);
        let outline = variant_style(ButtonVariant::Outline);
        assert_ne!(primary, secondary);
        assert_ne!(primary, outline);
        assert_eq!(outline.background, "transparent");
        assert!(outline.border.contains("#ff3366"));
    }

    #[test]
    fn sizes_grow() {
        assert_eq!(size_style(ButtonSize::default()), ("0.75rem 1.5rem", "1rem"));
        assert_eq!(size_style(ButtonSize::Sm).1, "0.875rem");
        assert_eq!(size_style(ButtonSize::Lg).1, "1.125rem");
    }
}
