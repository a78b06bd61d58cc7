use leptos::prelude::*;

/// Tone of a badge laid over a card image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeTone {
    /// Dark translucent chip (category label)
    #[default]
    Overlay,
    /// Gold pulsing pill (exclusive products)
    Gold,
}

impl BadgeTone {
    fn class(&self) -> &'static str {
        match self {
            BadgeTone::Overlay => "badge badge--overlay",
            BadgeTone::Gold => "badge badge--gold",
        }
    }
}

/// Badge positioned over a card image
#[component]
pub fn Badge(
    #[prop(optional)]
    tone: BadgeTone,
    /// Additional CSS classes (positioning)
    #[prop(optional, into)]
    class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("{} {}", tone.class(), additional_class())>
            {children()}
        </span>
    }
}
