//! Site header and navigation menu.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::models::Route;

stylance::import_crate_style!(css, "src/components/header.module.css");

/// Header with site title and the configured menu. Absolute targets open
/// in a new tab; site-relative targets navigate in place via the hash.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let (title, description, menu) = ctx
        .theme
        .with_value(|theme| (theme.title.clone(), theme.description.clone(), theme.menu.clone()));

    view! {
        <a class=css::brand href="#/">
            <span class=css::siteTitle>{title}</span>
            <span class=css::tagline>{description}</span>
        </a>
        <nav class=css::nav>
            {menu
                .into_iter()
                .map(|(label, target)| {
                    if target.starts_with("http://") || target.starts_with("https://") {
                        view! {
                            <a
                                class=css::navLink
                                href=target
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                {label}
                            </a>
                        }
                            .into_any()
                    } else {
                        view! {
                            <a class=css::navLink href=Route::new(&target).to_hash()>{label}</a>
                        }
                            .into_any()
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
