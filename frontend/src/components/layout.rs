use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::nav::Nav;

#[derive(Properties, PartialEq)]
pub struct SiteLayoutProps {
    #[prop_or_default]
    pub children: Children,
}

/// Public pages: navigation bar, content, footer.
#[function_component(SiteLayout)]
pub fn site_layout(props: &SiteLayoutProps) -> Html {
    html! {
        <>
            <Nav />
            <main class="min-h-screen pt-16">
                { props.children.clone() }
            </main>
            <Footer />
        </>
    }
}
