use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct SeoProps {
    pub title: AttrValue,
    pub description: AttrValue,
}

/// Writes the page title, meta description and canonical link into `<head>`.
#[function_component(Seo)]
pub fn seo(props: &SeoProps) -> Html {
    {
        let title = props.title.clone();
        let description = props.description.clone();
        use_effect_with_deps(
            move |deps: &(AttrValue, AttrValue)| {
                let (title, description) = deps;
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    document.set_title(&format!("{} | Spllit", title));
                    if let Ok(Some(meta)) = document.query_selector("meta[name=\"description\"]") {
                        let _ = meta.set_attribute("content", description);
                    }
                    let path = document
                        .location()
                        .and_then(|l| l.pathname().ok())
                        .unwrap_or_default();
                    if let Ok(Some(link)) = document.query_selector("link[rel=\"canonical\"]") {
                        let _ = link.set_attribute("href", &format!("{}{}", config::get_site_url(), path));
                    }
                }
                || ()
            },
            (title, description),
        );
    }
    html! {}
}
