//! Preview of the picked image.

use leptos::*;

#[component]
pub fn ImagePreview(
    /// Data URI of the image, if one is ready.
    #[prop(into)]
    src: Signal<Option<String>>,
    #[prop(optional, into)] alt: Option<String>,
) -> impl IntoView {
    let alt = alt.unwrap_or_else(|| "Mosquito preview".to_string());

    view! {
        <Show when=move || src.get().is_some() fallback=|| view! { }>
            <div class="preview-image">
                <img src=move || src.get().unwrap_or_default() alt=alt.clone()/>
            </div>
        </Show>
    }
}
