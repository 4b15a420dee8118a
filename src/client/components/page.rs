use dioxus::prelude::*;

/// Page body below the fixed navbar, with an optional heading row.
#[component]
pub fn Page(
    class: Option<&'static str>,
    title: Option<&'static str>,
    actions: Option<Element>,
    children: Element,
) -> Element {
    let class = class.unwrap_or("");

    rsx!(
        div {
            class: "min-h-screen pt-[72px] p-4 flex flex-col gap-4 {class}",
            if let Some(title) = title {
                div { class: "flex flex-wrap items-center justify-between gap-2",
                    h1 { class: "text-2xl", "{title}" }
                    div { class: "flex gap-2",
                        {actions}
                    }
                }
            }
            {children}
        }
    )
}
