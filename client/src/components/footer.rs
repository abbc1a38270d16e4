//! Site footer and license line.

use leptos::prelude::*;

use crate::content;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <hr/>
        <section class="footer">
            <h3>"Isya Maghfira Zalfa | Cica | Cicut"</h3>
            <p>
                "Informatics student | Cybersecurity enthusiast | Always curious, \
                 always learning."
            </p>
            <div class="social-media-footer">
                {content::SOCIALS
                    .into_iter()
                    .map(|social| view! { <a href=social.href>{social.label}</a> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
        <hr/>
        <p class="license">"\u{a9} 2025 Cica. All rights reserved"</p>
    }
}
